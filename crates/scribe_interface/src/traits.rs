//! Collaborator traits for inference and persistence.

use async_trait::async_trait;
use scribe_core::{GenerationRecord, GenerationRequest, GenerationResult, NewGeneration};
use scribe_error::{DatabaseResult, InferenceResult};

/// Largest page a list or search call returns.
pub const MAX_PAGE_SIZE: i64 = 100;

/// Clamp a caller-supplied page size into `1..=MAX_PAGE_SIZE`.
pub fn clamp_limit(limit: i64) -> i64 {
    limit.clamp(1, MAX_PAGE_SIZE)
}

/// A backend that turns a generation request into blog text.
#[async_trait]
pub trait BlogWriter: Send + Sync {
    /// Probe the server, build the prompt, and run one completion.
    ///
    /// No retries: a single attempt per call.
    async fn generate(
        &self,
        request: &GenerationRequest,
        model: &str,
    ) -> InferenceResult<GenerationResult>;

    /// Whether the server answers its model listing.
    async fn test_connection(&self) -> bool;

    /// Model identifiers the server advertises.
    async fn list_models(&self) -> InferenceResult<Vec<String>>;

    /// Provider name (e.g., "lm-studio").
    fn provider_name(&self) -> &'static str;

    /// Model used when a request does not name one.
    fn model_name(&self) -> &str;
}

/// Storage for generation records.
///
/// Implementations order every listing by `created_at` descending.
#[async_trait]
pub trait GenerationStore: Send + Sync {
    /// Insert a record, computing counts, id and timestamp.
    async fn save(&self, new_gen: NewGeneration) -> DatabaseResult<GenerationRecord>;

    /// Most recent records first, `limit` clamped to `1..=100`.
    async fn list(&self, limit: i64, offset: i64) -> DatabaseResult<Vec<GenerationRecord>>;

    /// Fetch one record.
    async fn get(&self, id: &str) -> DatabaseResult<Option<GenerationRecord>>;

    /// Remove one record, returning whether it existed.
    async fn delete(&self, id: &str) -> DatabaseResult<bool>;

    /// Total number of records.
    async fn count(&self) -> DatabaseResult<i64>;

    /// Records whose topic or content contains `query`, most recent first.
    async fn search(&self, query: &str, limit: i64) -> DatabaseResult<Vec<GenerationRecord>>;
}

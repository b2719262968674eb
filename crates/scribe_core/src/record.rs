//! Generation results and persisted records.

use crate::{BlogType, GenerationRequest, WritingStyle, preview};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Normalized outcome of one inference call.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GenerationResult {
    /// Generated text
    pub content: String,
    /// Seconds spent waiting on the completion call
    pub generation_time: f64,
    /// Model identifier the request was sent with
    pub model_used: String,
    /// `usage.total_tokens` reported by the server, zero when absent
    pub tokens_used: u32,
}

/// Fields supplied by the caller when saving a generation.
///
/// Counts, id and timestamp are assigned by the store.
///
/// # Examples
///
/// ```
/// use scribe_core::{BlogType, NewGeneration, WritingStyle};
///
/// let new_gen = NewGeneration::builder()
///     .topic("Coffee")
///     .content("Coffee wakes you up.")
///     .blog_type(BlogType::Intro)
///     .writing_style(WritingStyle::Casual)
///     .temperature(0.7f32)
///     .max_tokens(512u32)
///     .build()
///     .unwrap();
/// assert_eq!(new_gen.generation_time, None);
/// ```
#[derive(Debug, Clone, PartialEq, derive_builder::Builder)]
#[builder(setter(into))]
pub struct NewGeneration {
    /// Topic from the request
    pub topic: String,
    /// Generated text
    pub content: String,
    /// Kind of content
    pub blog_type: BlogType,
    /// Tone of the content
    pub writing_style: WritingStyle,
    /// Sampling temperature
    pub temperature: f32,
    /// Completion token budget
    pub max_tokens: u32,
    /// Seconds spent on inference
    #[builder(default)]
    pub generation_time: Option<f64>,
    /// Model that produced the content
    #[builder(default)]
    pub model_used: Option<String>,
}

impl NewGeneration {
    /// Start building a new generation.
    pub fn builder() -> NewGenerationBuilder {
        NewGenerationBuilder::default()
    }

    /// Combine a validated request with the inference outcome.
    pub fn from_result(request: &GenerationRequest, result: GenerationResult) -> Self {
        Self {
            topic: request.topic.clone(),
            content: result.content,
            blog_type: request.blog_type,
            writing_style: request.writing_style,
            temperature: request.temperature,
            max_tokens: request.max_tokens,
            generation_time: Some(result.generation_time),
            model_used: Some(result.model_used),
        }
    }
}

/// One stored generation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GenerationRecord {
    /// UUID assigned at save time
    pub id: String,
    /// Generated text
    pub content: String,
    /// Topic from the request
    pub topic: String,
    /// Kind of content
    pub blog_type: BlogType,
    /// Tone of the content
    pub writing_style: WritingStyle,
    /// Sampling temperature
    pub temperature: f32,
    /// Completion token budget
    pub max_tokens: u32,
    /// Insertion timestamp
    pub created_at: DateTime<Utc>,
    /// Whitespace-delimited tokens in `content`
    pub word_count: u32,
    /// Characters in `content`
    pub character_count: u32,
    /// Seconds spent on inference
    pub generation_time: Option<f64>,
    /// Model that produced the content
    pub model_used: Option<String>,
}

impl GenerationRecord {
    /// Condensed form for history listings.
    pub fn to_history_item(&self) -> HistoryItem {
        HistoryItem {
            id: self.id.clone(),
            topic: self.topic.clone(),
            content: preview(&self.content),
            blog_type: self.blog_type,
            writing_style: self.writing_style,
            created_at: self.created_at,
            word_count: self.word_count,
        }
    }
}

/// History listing entry with a truncated content preview.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HistoryItem {
    /// Record id
    pub id: String,
    /// Topic from the request
    pub topic: String,
    /// Content preview
    pub content: String,
    /// Kind of content
    pub blog_type: BlogType,
    /// Tone of the content
    pub writing_style: WritingStyle,
    /// Insertion timestamp
    pub created_at: DateTime<Utc>,
    /// Whitespace-delimited tokens in the full content
    pub word_count: u32,
}

//! Error types for calls to the inference server.

/// Error kinds for inference operations.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, derive_more::Display)]
pub enum InferenceErrorKind {
    /// The reachability probe failed, no completion was attempted
    #[display("Cannot connect to inference server: {}", _0)]
    ServiceUnavailable(String),

    /// The completion call exceeded the configured timeout
    #[display("Request timed out: {}", _0)]
    Timeout(String),

    /// Transport failure or non-success status
    #[display("Request failed: {}", _0)]
    Transport(String),

    /// The response did not have the expected shape
    #[display("Unexpected response format: {}", _0)]
    MalformedResponse(String),
}

/// Inference error with location tracking.
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Inference Error: {} at line {} in {}", kind, line, file)]
pub struct InferenceError {
    /// The error kind
    pub kind: InferenceErrorKind,
    /// Line number where error occurred
    pub line: u32,
    /// File where error occurred
    pub file: &'static str,
}

impl InferenceError {
    /// Create a new InferenceError with automatic location tracking.
    ///
    /// # Examples
    ///
    /// ```
    /// use scribe_error::{InferenceError, InferenceErrorKind};
    ///
    /// let err = InferenceError::new(InferenceErrorKind::Timeout("300s".into()));
    /// assert!(matches!(err.kind, InferenceErrorKind::Timeout(_)));
    /// ```
    #[track_caller]
    pub fn new(kind: InferenceErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }
}

/// Result type for inference operations.
pub type InferenceResult<T> = Result<T, InferenceError>;

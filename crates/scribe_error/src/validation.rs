//! Request validation errors.

/// A request field failed validation before any network or database work.
///
/// # Examples
///
/// ```
/// use scribe_error::ValidationError;
///
/// let err = ValidationError::new("max_tokens", "must be between 50 and 2000");
/// assert_eq!(err.field, "max_tokens");
/// assert_eq!(err.detail(), "max_tokens: must be between 50 and 2000");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error)]
#[display("Validation Error: {}: {} at line {} in {}", field, reason, line, file)]
pub struct ValidationError {
    /// Name of the offending field
    pub field: String,
    /// Why the value was rejected
    pub reason: String,
    /// Line number where the error occurred
    pub line: u32,
    /// File where the error occurred
    pub file: &'static str,
}

impl ValidationError {
    /// Create a new ValidationError at the current location.
    #[track_caller]
    pub fn new(field: impl Into<String>, reason: impl Into<String>) -> Self {
        let location = std::panic::Location::caller();
        Self {
            field: field.into(),
            reason: reason.into(),
            line: location.line(),
            file: location.file(),
        }
    }

    /// Client-facing message without source location.
    pub fn detail(&self) -> String {
        format!("{}: {}", self.field, self.reason)
    }
}

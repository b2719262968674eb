//! Top-level error wrapper types.

use crate::{ConfigError, InferenceError, ValidationError};
#[cfg(feature = "database")]
use crate::DatabaseError;

/// Every failure the service can surface, one variant per subsystem.
///
/// # Examples
///
/// ```
/// use scribe_error::{ScribeError, ValidationError};
///
/// let err: ScribeError = ValidationError::new("topic", "must not be empty").into();
/// assert!(format!("{}", err).contains("Validation Error"));
/// ```
#[derive(Debug, derive_more::From, derive_more::Display, derive_more::Error)]
pub enum ScribeErrorKind {
    /// Request validation error
    #[from(ValidationError)]
    Validation(ValidationError),
    /// Inference server error
    #[from(InferenceError)]
    Inference(InferenceError),
    /// Database error
    #[cfg(feature = "database")]
    #[from(DatabaseError)]
    Database(DatabaseError),
    /// Configuration error
    #[from(ConfigError)]
    Config(ConfigError),
}

/// Scribe error with kind discrimination.
#[derive(Debug, derive_more::Display, derive_more::Error)]
#[display("Scribe Error: {}", _0)]
pub struct ScribeError(Box<ScribeErrorKind>);

impl ScribeError {
    /// Create a new error from a kind.
    pub fn new(kind: ScribeErrorKind) -> Self {
        Self(Box::new(kind))
    }

    /// Get the error kind.
    pub fn kind(&self) -> &ScribeErrorKind {
        &self.0
    }

    /// Message suitable for a client response: the kind's description without
    /// source file and line.
    pub fn public_message(&self) -> String {
        match self.kind() {
            ScribeErrorKind::Validation(e) => e.detail(),
            ScribeErrorKind::Inference(e) => e.kind.to_string(),
            #[cfg(feature = "database")]
            ScribeErrorKind::Database(e) => e.kind.to_string(),
            ScribeErrorKind::Config(e) => e.message.clone(),
        }
    }
}

// Generic From implementation for any type that converts to ScribeErrorKind
impl<T> From<T> for ScribeError
where
    T: Into<ScribeErrorKind>,
{
    fn from(err: T) -> Self {
        Self::new(err.into())
    }
}

/// Result type for Scribe operations.
pub type ScribeResult<T> = std::result::Result<T, ScribeError>;

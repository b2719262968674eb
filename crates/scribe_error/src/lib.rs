//! Error types for the Scribe service.
//!
//! # Error Hierarchy
//!
//! All errors follow the `ErrorKind` + wrapper struct pattern:
//! - `*ErrorKind` enum defines specific error conditions
//! - `*Error` struct wraps the kind with source location tracking
//! - All constructors use `#[track_caller]` for automatic location capture
//!
//! # Examples
//!
//! ```
//! use scribe_error::{ScribeResult, ValidationError};
//!
//! fn check_topic(topic: &str) -> ScribeResult<()> {
//!     if topic.is_empty() {
//!         Err(ValidationError::new("topic", "must not be empty"))?
//!     }
//!     Ok(())
//! }
//!
//! assert!(check_topic("").is_err());
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod config;
#[cfg(feature = "database")]
mod database;
mod error;
mod inference;
mod validation;

pub use config::ConfigError;
#[cfg(feature = "database")]
pub use database::{DatabaseError, DatabaseErrorKind, DatabaseResult};
pub use error::{ScribeError, ScribeErrorKind, ScribeResult};
pub use inference::{InferenceError, InferenceErrorKind, InferenceResult};
pub use validation::ValidationError;

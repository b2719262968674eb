//! Core data types for the Scribe blog-writing service.
//!
//! This crate holds everything that does not touch the network or the
//! database: the closed content-type and style enumerations, prompt
//! construction, request validation, and the generation record shape.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod blog;
mod prompt;
mod record;
mod request;
mod text;

pub use blog::{BlogType, WritingStyle};
pub use prompt::{BlogPrompt, SYSTEM_PERSONA};
pub use record::{
    GenerationRecord, GenerationResult, HistoryItem, NewGeneration, NewGenerationBuilder,
};
pub use request::{
    DEFAULT_MAX_TOKENS, DEFAULT_TEMPERATURE, GenerationRequest, MAX_TOKENS_RANGE,
    TEMPERATURE_RANGE, TOPIC_MAX_CHARS,
};
pub use text::{PREVIEW_CHARS, character_count, preview, word_count};

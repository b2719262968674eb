//! Incoming generation request and its validation rules.

use crate::{BlogPrompt, BlogType, WritingStyle};
use scribe_error::ValidationError;
use serde::{Deserialize, Serialize};
use std::ops::RangeInclusive;

/// Maximum topic length, in characters.
pub const TOPIC_MAX_CHARS: usize = 500;
/// Accepted sampling temperatures.
pub const TEMPERATURE_RANGE: RangeInclusive<f32> = 0.0..=1.0;
/// Accepted completion budgets.
pub const MAX_TOKENS_RANGE: RangeInclusive<u32> = 50..=2000;
/// Temperature used when the caller omits one.
pub const DEFAULT_TEMPERATURE: f32 = 0.7;
/// Token budget used when the caller omits one.
pub const DEFAULT_MAX_TOKENS: u32 = 512;

fn default_temperature() -> f32 {
    DEFAULT_TEMPERATURE
}

fn default_max_tokens() -> u32 {
    DEFAULT_MAX_TOKENS
}

/// Body of `POST /api/generate`.
///
/// # Examples
///
/// ```
/// use scribe_core::{BlogType, GenerationRequest, WritingStyle};
///
/// let request: GenerationRequest = serde_json::from_str(r#"{"topic": "Coffee"}"#).unwrap();
/// assert_eq!(request.blog_type, BlogType::Intro);
/// assert_eq!(request.writing_style, WritingStyle::Professional);
/// assert_eq!(request.max_tokens, 512);
/// assert!(request.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GenerationRequest {
    /// What the post is about
    pub topic: String,
    /// Kind of content
    #[serde(default)]
    pub blog_type: BlogType,
    /// Tone of the content
    #[serde(default)]
    pub writing_style: WritingStyle,
    /// Sampling temperature
    #[serde(default = "default_temperature")]
    pub temperature: f32,
    /// Completion token budget
    #[serde(default = "default_max_tokens")]
    pub max_tokens: u32,
    /// Model identifier; the server's configured model when absent
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub model: Option<String>,
}

impl GenerationRequest {
    /// Create a request with default type, style, temperature and budget.
    pub fn new(topic: impl Into<String>) -> Self {
        Self {
            topic: topic.into(),
            blog_type: BlogType::default(),
            writing_style: WritingStyle::default(),
            temperature: DEFAULT_TEMPERATURE,
            max_tokens: DEFAULT_MAX_TOKENS,
            model: None,
        }
    }

    /// Check every field against its bounds.
    ///
    /// # Errors
    ///
    /// Returns the first offending field.
    pub fn validate(&self) -> Result<(), ValidationError> {
        let topic_chars = self.topic.chars().count();
        if self.topic.trim().is_empty() {
            return Err(ValidationError::new("topic", "must not be empty"));
        }
        if topic_chars > TOPIC_MAX_CHARS {
            return Err(ValidationError::new(
                "topic",
                format!("must be at most {} characters, got {}", TOPIC_MAX_CHARS, topic_chars),
            ));
        }
        if !TEMPERATURE_RANGE.contains(&self.temperature) {
            return Err(ValidationError::new(
                "temperature",
                format!(
                    "must be between {} and {}, got {}",
                    TEMPERATURE_RANGE.start(),
                    TEMPERATURE_RANGE.end(),
                    self.temperature
                ),
            ));
        }
        if !MAX_TOKENS_RANGE.contains(&self.max_tokens) {
            return Err(ValidationError::new(
                "max_tokens",
                format!(
                    "must be between {} and {}, got {}",
                    MAX_TOKENS_RANGE.start(),
                    MAX_TOKENS_RANGE.end(),
                    self.max_tokens
                ),
            ));
        }
        Ok(())
    }

    /// Model requested by the caller, ignoring blank values.
    pub fn requested_model(&self) -> Option<&str> {
        self.model.as_deref().map(str::trim).filter(|m| !m.is_empty())
    }

    /// Prompt for this request.
    pub fn prompt(&self) -> BlogPrompt {
        BlogPrompt::new(self.topic.clone(), self.blog_type, self.writing_style)
    }
}

use serde::{Deserialize, Serialize};

/// Nucleus sampling sent with every generation.
pub const TOP_P: f32 = 0.9;
/// Repetition damping sent with every generation.
pub const FREQUENCY_PENALTY: f32 = 0.1;

/// OpenAI-compatible chat completion request
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ChatCompletionRequest {
    /// Model identifier
    pub model: String,
    /// Conversation messages
    pub messages: Vec<Message>,
    /// Sampling temperature (0.0 - 1.0 here)
    pub temperature: f32,
    /// Maximum tokens to generate
    pub max_tokens: u32,
    /// Top-p sampling parameter
    pub top_p: f32,
    /// Frequency penalty
    pub frequency_penalty: f32,
    /// Streaming mode, always off
    pub stream: bool,
}

impl ChatCompletionRequest {
    /// System persona plus the rendered prompt, with the fixed sampling knobs.
    pub fn for_blog(
        model: impl Into<String>,
        system: impl Into<String>,
        prompt: impl Into<String>,
        temperature: f32,
        max_tokens: u32,
    ) -> Self {
        Self {
            model: model.into(),
            messages: vec![Message::system(system), Message::user(prompt)],
            temperature,
            max_tokens,
            top_p: TOP_P,
            frequency_penalty: FREQUENCY_PENALTY,
            stream: false,
        }
    }
}

/// A message in the conversation
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub struct Message {
    /// Role of the message sender (system, user, assistant)
    pub role: String,
    /// Message content
    pub content: String,
}

impl Message {
    /// Create a new message
    pub fn new(role: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            role: role.into(),
            content: content.into(),
        }
    }

    /// Create a system message
    pub fn system(content: impl Into<String>) -> Self {
        Self::new("system", content)
    }

    /// Create a user message
    pub fn user(content: impl Into<String>) -> Self {
        Self::new("user", content)
    }
}

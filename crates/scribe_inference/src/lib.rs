//! OpenAI-compatible inference client for Scribe.
//!
//! Talks to a locally hosted chat-completions server (LM Studio by default):
//! a reachability probe against `/v1/models`, then one non-streaming
//! `/v1/chat/completions` call per generation.
//!
//! # Example
//!
//! ```rust,no_run
//! use scribe_core::GenerationRequest;
//! use scribe_inference::{InferenceClient, InferenceConfigBuilder};
//! use scribe_interface::BlogWriter;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let config = InferenceConfigBuilder::default()
//!     .base_url("http://localhost:1234")
//!     .model("deepseek-r1-distill-qwen-7b")
//!     .build()?;
//! let client = InferenceClient::new(config)?;
//!
//! let request = GenerationRequest::new("Coffee");
//! let result = client.generate(&request, client.model_name()).await?;
//! println!("{}", result.content);
//! # Ok(())
//! # }
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod client;
mod config;
mod request;
mod response;

pub use client::InferenceClient;
pub use config::{
    DEFAULT_BASE_URL, DEFAULT_MODEL, InferenceConfig, InferenceConfigBuilder,
    InferenceConfigBuilderError,
};
pub use request::{ChatCompletionRequest, FREQUENCY_PENALTY, Message, TOP_P};
pub use response::{ChatCompletionResponse, Choice, ChoiceMessage, ModelEntry, ModelList, Usage};

//! Blog-writing HTTP backend for a local LM Studio server.
//!
//! Scribe accepts a topic plus content-type and tone options, asks an
//! OpenAI-compatible inference server for a blog post, stores the result
//! in SQLite, and serves the history over a small JSON API.
//!
//! # Crates
//!
//! - [`scribe_core`] - domain types, prompt construction, validation
//! - [`scribe_inference`] - client for the inference server
//! - [`scribe_database`] - SQLite persistence
//! - [`scribe_api`] - axum routes
//!
//! # Example
//!
//! ```no_run
//! use scribe::{ScribeConfig, build_app};
//!
//! # #[tokio::main]
//! # async fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let config = ScribeConfig::load(None)?;
//! let app = build_app(&config)?;
//! let listener = tokio::net::TcpListener::bind(config.server.bind_address()).await?;
//! axum::serve(listener, app).await?;
//! # Ok(())
//! # }
//! ```

mod config;
mod observability;
mod server;

pub use config::{
    DEFAULT_CONFIG, DatabaseConfig, ENV_PREFIX, LogConfig, ScribeConfig, ServerConfig,
};
pub use observability::init_tracing;
pub use server::{build_app, build_state};

pub use scribe_api::{AppState, create_app, create_router};
pub use scribe_core::{
    BlogType, GenerationRecord, GenerationRequest, GenerationResult, HistoryItem, NewGeneration,
    WritingStyle,
};
pub use scribe_database::DatabaseGenerationStore;
pub use scribe_error::{ScribeError, ScribeErrorKind, ScribeResult};
pub use scribe_inference::{InferenceClient, InferenceConfig};
pub use scribe_interface::{BlogWriter, GenerationStore};

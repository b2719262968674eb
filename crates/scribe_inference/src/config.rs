//! Configuration for the inference server connection

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// LM Studio's default listen address.
pub const DEFAULT_BASE_URL: &str = "http://localhost:1234";
/// Model requested when neither config nor caller names one.
pub const DEFAULT_MODEL: &str = "deepseek-r1-distill-qwen-7b";

const DEFAULT_TIMEOUT_SECS: u64 = 300;
const DEFAULT_PROBE_TIMEOUT_SECS: u64 = 5;

/// Configuration for the inference server connection
#[derive(
    Debug,
    Clone,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    derive_getters::Getters,
    derive_builder::Builder,
)]
#[builder(setter(into))]
#[serde(default)]
pub struct InferenceConfig {
    /// Base URL of the server, without the `/v1` suffix
    #[builder(default = "DEFAULT_BASE_URL.to_string()")]
    base_url: String,
    /// Model identifier used when a request does not name one
    #[builder(default = "DEFAULT_MODEL.to_string()")]
    model: String,
    /// Whole-call timeout for completions; reasoning models can be slow
    #[builder(default = "DEFAULT_TIMEOUT_SECS")]
    timeout_secs: u64,
    /// Timeout for the reachability probe and model listing
    #[builder(default = "DEFAULT_PROBE_TIMEOUT_SECS")]
    probe_timeout_secs: u64,
    /// Optional bearer token (LM Studio doesn't require one)
    #[builder(default, setter(into, strip_option))]
    #[serde(skip_serializing_if = "Option::is_none")]
    api_key: Option<String>,
}

impl Default for InferenceConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            model: DEFAULT_MODEL.to_string(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
            probe_timeout_secs: DEFAULT_PROBE_TIMEOUT_SECS,
            api_key: None,
        }
    }
}

impl InferenceConfig {
    /// Completion timeout as a duration.
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    /// Probe timeout as a duration.
    pub fn probe_timeout(&self) -> Duration {
        Duration::from_secs(self.probe_timeout_secs)
    }

    /// Full URL of an OpenAI-style endpoint, e.g. `endpoint("models")`.
    pub fn endpoint(&self, path: &str) -> String {
        format!("{}/v1/{}", self.base_url.trim_end_matches('/'), path)
    }

    /// Replace the base URL.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }
}

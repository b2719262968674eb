use crate::{ChatCompletionRequest, ChatCompletionResponse, InferenceConfig, ModelList};
use scribe_core::{GenerationRequest, GenerationResult, SYSTEM_PERSONA};
use scribe_error::{InferenceError, InferenceErrorKind, InferenceResult};
use scribe_interface::BlogWriter;
use serde::de::DeserializeOwned;
use std::time::Instant;
use tracing::instrument;

/// Client for an OpenAI-compatible local inference server.
///
/// Holds one long-lived `reqwest::Client` whose timeout covers a whole
/// completion call.
#[derive(Debug, Clone)]
pub struct InferenceClient {
    config: InferenceConfig,
    client: reqwest::Client,
}

impl InferenceClient {
    /// Create a new inference client
    #[instrument(skip(config), fields(base_url = %config.base_url(), model = %config.model()))]
    pub fn new(config: InferenceConfig) -> InferenceResult<Self> {
        tracing::debug!("Creating inference client");
        let client = reqwest::Client::builder()
            .timeout(config.timeout())
            .build()
            .map_err(|e| {
                InferenceError::new(InferenceErrorKind::Transport(format!(
                    "Failed to build HTTP client: {}",
                    e
                )))
            })?;
        Ok(Self { config, client })
    }

    /// Get the client configuration
    pub fn config(&self) -> &InferenceConfig {
        &self.config
    }

    fn get(&self, url: &str) -> reqwest::RequestBuilder {
        let req = self.client.get(url).timeout(self.config.probe_timeout());
        self.authorize(req)
    }

    fn authorize(&self, req: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
        match self.config.api_key() {
            Some(api_key) => req.header("Authorization", format!("Bearer {}", api_key)),
            None => req,
        }
    }

    /// Check that the server answers `GET /v1/models` with a success status.
    ///
    /// # Errors
    ///
    /// Any failure is reported as `ServiceUnavailable`.
    #[instrument(skip(self))]
    pub async fn probe(&self) -> InferenceResult<()> {
        let url = self.config.endpoint("models");
        tracing::debug!("Probing inference server at {}", url);

        let response = self.get(&url).send().await.map_err(|e| {
            tracing::error!("Failed to connect to inference server: {}", e);
            InferenceError::new(InferenceErrorKind::ServiceUnavailable(format!(
                "{} is unreachable: {}",
                self.config.base_url(),
                e
            )))
        })?;

        if response.status().is_success() {
            tracing::debug!("Inference server is reachable");
            Ok(())
        } else {
            let status = response.status();
            tracing::error!("Inference server probe returned: {}", status);
            Err(InferenceError::new(InferenceErrorKind::ServiceUnavailable(
                format!("{} returned {}", self.config.base_url(), status),
            )))
        }
    }

    /// List the model identifiers the server advertises.
    #[instrument(skip(self))]
    pub async fn models(&self) -> InferenceResult<Vec<String>> {
        let url = self.config.endpoint("models");
        let response = self
            .get(&url)
            .send()
            .await
            .map_err(|e| transport_error(e, "Model listing failed"))?;

        if !response.status().is_success() {
            let status = response.status();
            tracing::error!("Model listing returned error: {}", status);
            return Err(InferenceError::new(InferenceErrorKind::Transport(format!(
                "Server returned: {}",
                status
            ))));
        }

        let list: ModelList = read_json(response).await?;
        tracing::debug!(count = list.data.len(), "Listed models");
        Ok(list.data.into_iter().map(|m| m.id).collect())
    }

    /// Send a chat completion request
    #[instrument(skip(self, request), fields(model = %request.model))]
    pub async fn chat_completion(
        &self,
        request: &ChatCompletionRequest,
    ) -> InferenceResult<ChatCompletionResponse> {
        let url = self.config.endpoint("chat/completions");
        tracing::debug!("Sending chat completion request to {}", url);

        let req = self.client.post(&url).json(request);

        let response = self
            .authorize(req)
            .send()
            .await
            .map_err(|e| transport_error(e, "Request failed"))?;

        if !response.status().is_success() {
            let status = response.status();
            tracing::error!("Server returned error: {}", status);
            return Err(InferenceError::new(InferenceErrorKind::Transport(format!(
                "Server returned: {}",
                status
            ))));
        }

        let result = read_json(response).await?;
        tracing::debug!("Chat completion successful");
        Ok(result)
    }
}

/// Map a reqwest failure, keeping timeouts distinct.
fn transport_error(e: reqwest::Error, context: &str) -> InferenceError {
    if e.is_timeout() {
        tracing::error!("{}: timed out: {}", context, e);
        InferenceError::new(InferenceErrorKind::Timeout(
            "The model might be taking too long to respond".to_string(),
        ))
    } else {
        tracing::error!("{}: {}", context, e);
        InferenceError::new(InferenceErrorKind::Transport(format!("{}: {}", context, e)))
    }
}

async fn read_json<T: DeserializeOwned>(response: reqwest::Response) -> InferenceResult<T> {
    let body = response
        .text()
        .await
        .map_err(|e| transport_error(e, "Failed to read response body"))?;

    serde_json::from_str(&body).map_err(|e| {
        tracing::error!("Failed to parse response: {}", e);
        InferenceError::new(InferenceErrorKind::MalformedResponse(e.to_string()))
    })
}

#[async_trait::async_trait]
impl BlogWriter for InferenceClient {
    #[instrument(skip(self, request), fields(topic = %request.topic, blog_type = %request.blog_type))]
    async fn generate(
        &self,
        request: &GenerationRequest,
        model: &str,
    ) -> InferenceResult<GenerationResult> {
        self.probe().await?;

        let prompt = request.prompt().render();
        let chat_request = ChatCompletionRequest::for_blog(
            model,
            SYSTEM_PERSONA,
            prompt,
            request.temperature,
            request.max_tokens,
        );

        tracing::info!("Generating blog for topic: {}", request.topic);
        let start = Instant::now();
        let response = self.chat_completion(&chat_request).await?;
        let generation_time = start.elapsed().as_secs_f64();
        tracing::info!("Blog generated in {:.2} seconds", generation_time);

        let content = response.first_content().ok_or_else(|| {
            tracing::error!("Response carried no message content");
            InferenceError::new(InferenceErrorKind::MalformedResponse(
                "missing choices[0].message.content".to_string(),
            ))
        })?;

        Ok(GenerationResult {
            content: content.to_string(),
            generation_time,
            model_used: model.to_string(),
            tokens_used: response.total_tokens(),
        })
    }

    async fn test_connection(&self) -> bool {
        self.probe().await.is_ok()
    }

    async fn list_models(&self) -> InferenceResult<Vec<String>> {
        self.models().await
    }

    fn provider_name(&self) -> &'static str {
        "lm-studio"
    }

    fn model_name(&self) -> &str {
        self.config.model()
    }
}

//! In-process stand-in for an OpenAI-compatible inference server.

use axum::{
    Json, Router,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
};
use scribe_inference::{InferenceConfig, InferenceConfigBuilder};
use serde_json::{Value, json};
use std::net::SocketAddr;
use std::sync::{Arc, Mutex};
use std::time::Duration;

/// How the stub answers `/v1/chat/completions`.
#[derive(Debug, Clone)]
#[allow(dead_code)]
pub enum CompletionBehavior {
    /// Reply with the given text and token usage
    Content { text: String, total_tokens: u32 },
    /// Reply with an arbitrary JSON body
    RawJson(Value),
    /// Reply with a non-JSON body
    Garbage,
    /// Reply with a status code
    Status(StatusCode),
    /// Sleep before answering
    Delay(Duration),
}

#[derive(Clone)]
struct StubState {
    models_status: StatusCode,
    behavior: CompletionBehavior,
    requests: Arc<Mutex<Vec<Value>>>,
}

/// Running stub with a log of the completion bodies it received.
pub struct StubServer {
    pub addr: SocketAddr,
    pub requests: Arc<Mutex<Vec<Value>>>,
}

#[allow(dead_code)]
impl StubServer {
    pub fn base_url(&self) -> String {
        format!("http://{}", self.addr)
    }

    pub fn config(&self) -> InferenceConfig {
        InferenceConfigBuilder::default()
            .base_url(self.base_url())
            .model("stub-model")
            .build()
            .expect("valid config")
    }

    pub fn completion_calls(&self) -> usize {
        self.requests.lock().expect("lock").len()
    }

    pub fn last_request(&self) -> Value {
        self.requests
            .lock()
            .expect("lock")
            .last()
            .cloned()
            .expect("at least one completion request")
    }
}

/// Start a stub whose model listing answers with `models_status`.
pub async fn spawn_stub(models_status: StatusCode, behavior: CompletionBehavior) -> StubServer {
    let requests = Arc::new(Mutex::new(Vec::new()));
    let state = StubState {
        models_status,
        behavior,
        requests: Arc::clone(&requests),
    };

    let app = Router::new()
        .route("/v1/models", get(models))
        .route("/v1/chat/completions", post(completions))
        .with_state(state);

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind stub listener");
    let addr = listener.local_addr().expect("stub address");
    tokio::spawn(async move {
        axum::serve(listener, app).await.expect("stub server");
    });

    StubServer { addr, requests }
}

/// Address nothing listens on.
#[allow(dead_code)]
pub async fn closed_address() -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind probe listener");
    let addr = listener.local_addr().expect("probe address");
    drop(listener);
    format!("http://{}", addr)
}

async fn models(State(state): State<StubState>) -> Response {
    if !state.models_status.is_success() {
        return state.models_status.into_response();
    }
    Json(json!({
        "object": "list",
        "data": [
            {"id": "deepseek-r1-distill-qwen-7b", "object": "model"},
            {"id": "qwen2.5-7b-instruct", "object": "model"}
        ]
    }))
    .into_response()
}

async fn completions(State(state): State<StubState>, Json(body): Json<Value>) -> Response {
    state.requests.lock().expect("lock").push(body);

    match state.behavior {
        CompletionBehavior::Content { text, total_tokens } => Json(json!({
            "id": "chatcmpl-1",
            "object": "chat.completion",
            "created": 0,
            "model": "stub-model",
            "choices": [{
                "index": 0,
                "message": {"role": "assistant", "content": text},
                "finish_reason": "stop"
            }],
            "usage": {"prompt_tokens": 1, "completion_tokens": 1, "total_tokens": total_tokens}
        }))
        .into_response(),
        CompletionBehavior::RawJson(value) => Json(value).into_response(),
        CompletionBehavior::Garbage => (StatusCode::OK, "<html>not json</html>").into_response(),
        CompletionBehavior::Status(status) => status.into_response(),
        CompletionBehavior::Delay(delay) => {
            tokio::time::sleep(delay).await;
            Json(json!({"choices": [{"message": {"content": "late"}}]})).into_response()
        }
    }
}

//! Test doubles and a served router for API tests.

use async_trait::async_trait;
use scribe_api::{AppState, create_app};
use scribe_core::{GenerationRequest, GenerationResult};
use scribe_database::DatabaseGenerationStore;
use scribe_error::{InferenceError, InferenceErrorKind, InferenceResult};
use scribe_interface::BlogWriter;
use std::path::PathBuf;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

pub const FAKE_MODEL: &str = "fake-model";
pub const FRONTEND_ORIGIN: &str = "http://localhost:3000";

/// Writer that answers from a script instead of a server.
pub struct FakeWriter {
    reply: Result<String, InferenceErrorKind>,
    connected: bool,
    calls: AtomicUsize,
    models_seen: Mutex<Vec<String>>,
}

#[allow(dead_code)]
impl FakeWriter {
    pub fn replying(content: &str) -> Self {
        Self {
            reply: Ok(content.to_string()),
            connected: true,
            calls: AtomicUsize::new(0),
            models_seen: Mutex::new(Vec::new()),
        }
    }

    pub fn unreachable() -> Self {
        Self {
            reply: Err(InferenceErrorKind::ServiceUnavailable(
                "http://127.0.0.1:1 is unreachable".to_string(),
            )),
            connected: false,
            calls: AtomicUsize::new(0),
            models_seen: Mutex::new(Vec::new()),
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn models_seen(&self) -> Vec<String> {
        self.models_seen.lock().expect("lock").clone()
    }
}

#[async_trait]
impl BlogWriter for FakeWriter {
    async fn generate(
        &self,
        _request: &GenerationRequest,
        model: &str,
    ) -> InferenceResult<GenerationResult> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.models_seen.lock().expect("lock").push(model.to_string());
        match &self.reply {
            Ok(content) => Ok(GenerationResult {
                content: content.clone(),
                generation_time: 0.5,
                model_used: model.to_string(),
                tokens_used: 17,
            }),
            Err(kind) => Err(InferenceError::new(kind.clone())),
        }
    }

    async fn test_connection(&self) -> bool {
        self.connected
    }

    async fn list_models(&self) -> InferenceResult<Vec<String>> {
        if self.connected {
            Ok(vec![FAKE_MODEL.to_string(), "qwen2.5-7b-instruct".to_string()])
        } else {
            Err(InferenceError::new(InferenceErrorKind::Transport(
                "Model listing failed: connection refused".to_string(),
            )))
        }
    }

    fn provider_name(&self) -> &'static str {
        "fake"
    }

    fn model_name(&self) -> &str {
        FAKE_MODEL
    }
}

/// Database file in the temp directory, removed on drop.
pub struct TempDatabase {
    path: PathBuf,
}

impl TempDatabase {
    fn new() -> Self {
        Self {
            path: std::env::temp_dir().join(format!("scribe-api-{}.db", uuid::Uuid::new_v4())),
        }
    }
}

impl Drop for TempDatabase {
    fn drop(&mut self) {
        for suffix in ["", "-wal", "-shm"] {
            let mut file = self.path.clone().into_os_string();
            file.push(suffix);
            let _ = std::fs::remove_file(file);
        }
    }
}

/// Router served on an ephemeral port.
pub struct TestApp {
    pub base_url: String,
    pub client: reqwest::Client,
    pub writer: Arc<FakeWriter>,
    pub store: Arc<DatabaseGenerationStore>,
    _db: TempDatabase,
}

#[allow(dead_code)]
impl TestApp {
    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }
}

pub async fn spawn_app(writer: FakeWriter) -> TestApp {
    let db = TempDatabase::new();
    let store = Arc::new(
        DatabaseGenerationStore::connect(&db.path.to_string_lossy(), 4).expect("open store"),
    );
    let writer = Arc::new(writer);

    let state = AppState::new(writer.clone(), store.clone());
    let app = create_app(state, &[FRONTEND_ORIGIN.to_string()]).expect("valid origins");

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind listener");
    let addr = listener.local_addr().expect("local address");
    tokio::spawn(async move {
        axum::serve(listener, app).await.expect("server");
    });

    TestApp {
        base_url: format!("http://{}", addr),
        client: reqwest::Client::new(),
        writer,
        store,
        _db: db,
    }
}

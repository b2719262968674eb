//! Tests for the inference client against an in-process stub server.

mod common;

use axum::http::StatusCode;
use common::{CompletionBehavior, closed_address, spawn_stub};
use scribe_core::{BlogType, GenerationRequest, SYSTEM_PERSONA, WritingStyle};
use scribe_error::InferenceErrorKind;
use scribe_inference::{InferenceClient, InferenceConfig, InferenceConfigBuilder};
use scribe_interface::BlogWriter;
use serde_json::json;
use std::time::Duration;

fn coffee_request() -> GenerationRequest {
    let mut request = GenerationRequest::new("Coffee");
    request.blog_type = BlogType::Intro;
    request.writing_style = WritingStyle::Casual;
    request.temperature = 0.7;
    request.max_tokens = 512;
    request
}

#[tokio::test]
async fn test_generate_returns_content_and_usage() {
    let stub = spawn_stub(
        StatusCode::OK,
        CompletionBehavior::Content {
            text: "Coffee wakes you up.".to_string(),
            total_tokens: 42,
        },
    )
    .await;
    let client = InferenceClient::new(stub.config()).unwrap();

    let result = client.generate(&coffee_request(), "stub-model").await.unwrap();

    assert_eq!(result.content, "Coffee wakes you up.");
    assert_eq!(result.model_used, "stub-model");
    assert_eq!(result.tokens_used, 42);
    assert!(result.generation_time >= 0.0);
    assert_eq!(stub.completion_calls(), 1);
}

#[tokio::test]
async fn test_generate_sends_fixed_sampling_parameters() {
    let stub = spawn_stub(
        StatusCode::OK,
        CompletionBehavior::Content {
            text: "ok".to_string(),
            total_tokens: 1,
        },
    )
    .await;
    let client = InferenceClient::new(stub.config()).unwrap();

    client.generate(&coffee_request(), "chosen-model").await.unwrap();

    let body = stub.last_request();
    assert_eq!(body["model"], "chosen-model");
    assert_eq!(body["max_tokens"], 512);
    assert_eq!(body["stream"], false);
    assert!((body["temperature"].as_f64().unwrap() - 0.7).abs() < 1e-6);
    assert!((body["top_p"].as_f64().unwrap() - 0.9).abs() < 1e-6);
    assert!((body["frequency_penalty"].as_f64().unwrap() - 0.1).abs() < 1e-6);

    let messages = body["messages"].as_array().unwrap();
    assert_eq!(messages.len(), 2);
    assert_eq!(messages[0]["role"], "system");
    assert_eq!(messages[0]["content"], SYSTEM_PERSONA);
    assert_eq!(messages[1]["role"], "user");
    let prompt = messages[1]["content"].as_str().unwrap();
    assert!(prompt.contains("Topic: Coffee"));
    assert!(prompt.contains(BlogType::Intro.instruction()));
    assert!(prompt.contains(WritingStyle::Casual.instruction()));
}

#[tokio::test]
async fn test_missing_usage_counts_zero_tokens() {
    let stub = spawn_stub(
        StatusCode::OK,
        CompletionBehavior::RawJson(json!({"choices": [{"message": {"content": "hi"}}]})),
    )
    .await;
    let client = InferenceClient::new(stub.config()).unwrap();

    let result = client.generate(&coffee_request(), "stub-model").await.unwrap();
    assert_eq!(result.tokens_used, 0);
}

#[tokio::test]
async fn test_unreachable_server_is_service_unavailable() {
    let config = InferenceConfig::default().with_base_url(closed_address().await);
    let client = InferenceClient::new(config).unwrap();

    let err = client
        .generate(&coffee_request(), "stub-model")
        .await
        .unwrap_err();
    assert!(matches!(err.kind, InferenceErrorKind::ServiceUnavailable(_)));
    assert!(!client.test_connection().await);
}

#[tokio::test]
async fn test_failing_probe_skips_completion() {
    let stub = spawn_stub(
        StatusCode::SERVICE_UNAVAILABLE,
        CompletionBehavior::Content {
            text: "never".to_string(),
            total_tokens: 1,
        },
    )
    .await;
    let client = InferenceClient::new(stub.config()).unwrap();

    let err = client
        .generate(&coffee_request(), "stub-model")
        .await
        .unwrap_err();
    assert!(matches!(err.kind, InferenceErrorKind::ServiceUnavailable(_)));
    assert_eq!(stub.completion_calls(), 0);
}

#[tokio::test]
async fn test_error_status_is_transport_error() {
    let stub = spawn_stub(
        StatusCode::OK,
        CompletionBehavior::Status(StatusCode::INTERNAL_SERVER_ERROR),
    )
    .await;
    let client = InferenceClient::new(stub.config()).unwrap();

    let err = client
        .generate(&coffee_request(), "stub-model")
        .await
        .unwrap_err();
    match err.kind {
        InferenceErrorKind::Transport(message) => assert!(message.contains("500")),
        other => panic!("expected transport error, got {:?}", other),
    }
}

#[tokio::test]
async fn test_malformed_bodies() {
    for behavior in [
        CompletionBehavior::Garbage,
        CompletionBehavior::RawJson(json!({"choices": []})),
        CompletionBehavior::RawJson(json!({"result": "no choices key"})),
        CompletionBehavior::RawJson(json!({"choices": [{"message": {"role": "assistant"}}]})),
    ] {
        let stub = spawn_stub(StatusCode::OK, behavior.clone()).await;
        let client = InferenceClient::new(stub.config()).unwrap();

        let err = client
            .generate(&coffee_request(), "stub-model")
            .await
            .unwrap_err();
        assert!(
            matches!(err.kind, InferenceErrorKind::MalformedResponse(_)),
            "{:?} gave {:?}",
            behavior,
            err.kind
        );
    }
}

#[tokio::test]
async fn test_slow_completion_times_out() {
    let stub = spawn_stub(
        StatusCode::OK,
        CompletionBehavior::Delay(Duration::from_secs(5)),
    )
    .await;
    let config = InferenceConfigBuilder::default()
        .base_url(stub.base_url())
        .timeout_secs(1u64)
        .build()
        .unwrap();
    let client = InferenceClient::new(config).unwrap();

    let err = client
        .generate(&coffee_request(), "stub-model")
        .await
        .unwrap_err();
    assert!(matches!(err.kind, InferenceErrorKind::Timeout(_)));
}

#[tokio::test]
async fn test_list_models_and_connection() {
    let stub = spawn_stub(
        StatusCode::OK,
        CompletionBehavior::Content {
            text: "unused".to_string(),
            total_tokens: 0,
        },
    )
    .await;
    let client = InferenceClient::new(stub.config()).unwrap();

    assert!(client.test_connection().await);
    let models = client.list_models().await.unwrap();
    assert_eq!(models, vec!["deepseek-r1-distill-qwen-7b", "qwen2.5-7b-instruct"]);
    assert_eq!(client.model_name(), "stub-model");
    assert_eq!(client.provider_name(), "lm-studio");
}

#[tokio::test]
async fn test_list_models_unreachable_is_error() {
    let config = InferenceConfig::default().with_base_url(closed_address().await);
    let client = InferenceClient::new(config).unwrap();

    let err = client.list_models().await.unwrap_err();
    assert!(matches!(err.kind, InferenceErrorKind::Transport(_)));
}

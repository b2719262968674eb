//! Route handlers.

use crate::{
    ApiError, ApiResult, AppState, HistoryQuery, HistoryResponse, MessageResponse, ModelsResponse,
    StatusResponse,
};
use axum::{
    Json,
    extract::{
        Path, Query, State,
        rejection::{JsonRejection, QueryRejection},
    },
};
use scribe_core::{GenerationRecord, GenerationRequest, NewGeneration};
use serde_json::{Value, json};

/// Liveness banner.
pub async fn root() -> Json<Value> {
    Json(json!({"message": "Blog Writer API is running!", "status": "healthy"}))
}

/// Health check endpoint.
pub async fn health_check() -> Json<Value> {
    Json(json!({"status": "healthy", "message": "API is operational"}))
}

/// Generate a blog post and persist it.
#[tracing::instrument(skip_all)]
pub async fn generate(
    State(state): State<AppState>,
    payload: Result<Json<GenerationRequest>, JsonRejection>,
) -> ApiResult<Json<GenerationRecord>> {
    let Json(request) = payload?;
    request.validate()?;

    let writer = state.writer();
    let model = request
        .requested_model()
        .unwrap_or_else(|| writer.model_name())
        .to_string();
    tracing::info!(topic = %request.topic, model = %model, "Generating blog post");

    let result = writer.generate(&request, &model).await?;
    let record = state
        .store()
        .save(NewGeneration::from_result(&request, result))
        .await?;

    tracing::info!(id = %record.id, word_count = record.word_count, "Stored generation");
    Ok(Json(record))
}

/// Page through or search the generation history.
#[tracing::instrument(skip_all)]
pub async fn history(
    State(state): State<AppState>,
    query: Result<Query<HistoryQuery>, QueryRejection>,
) -> ApiResult<Json<HistoryResponse>> {
    let Query(query) = query?;
    query.validate()?;

    let store = state.store();
    let (records, total) = match query.search_term() {
        Some(term) => {
            let records = store.search(term, query.limit).await?;
            let total = records.len() as i64;
            (records, total)
        }
        None => {
            let records = store.list(query.limit, query.offset).await?;
            (records, store.count().await?)
        }
    };

    Ok(Json(HistoryResponse {
        items: records.iter().map(GenerationRecord::to_history_item).collect(),
        total,
    }))
}

/// Fetch one stored generation.
#[tracing::instrument(skip(state))]
pub async fn get_generation(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<Json<GenerationRecord>> {
    match state.store().get(&id).await? {
        Some(record) => Ok(Json(record)),
        None => {
            tracing::debug!("Generation not found");
            Err(ApiError::not_found("Generation not found"))
        }
    }
}

/// Delete one stored generation.
#[tracing::instrument(skip(state))]
pub async fn delete_generation(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<Json<MessageResponse>> {
    if state.store().delete(&id).await? {
        tracing::info!("Deleted generation");
        Ok(Json(MessageResponse {
            message: "Generation deleted successfully".to_string(),
        }))
    } else {
        Err(ApiError::not_found("Generation not found"))
    }
}

/// List the models the inference server offers.
pub async fn models(State(state): State<AppState>) -> ApiResult<Json<ModelsResponse>> {
    let models = state.writer().list_models().await?;
    Ok(Json(ModelsResponse { models }))
}

/// Report whether the inference server is reachable.
pub async fn status(State(state): State<AppState>) -> Json<StatusResponse> {
    let connected = state.writer().test_connection().await;
    if !connected {
        tracing::warn!(provider = state.writer().provider_name(), "Inference server is unreachable");
    }
    Json(StatusResponse::from_probe(connected))
}

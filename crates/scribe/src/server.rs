//! Wiring configuration into a running application.

use crate::ScribeConfig;
use axum::Router;
use scribe_api::{AppState, create_app};
use scribe_database::DatabaseGenerationStore;
use scribe_error::ScribeResult;
use scribe_inference::InferenceClient;
use std::sync::Arc;
use tracing::{info, instrument};

/// Build the collaborators named by `config`.
///
/// Opens the database (running migrations) and constructs the inference
/// client. The inference server is not contacted.
#[instrument(skip(config), fields(database = %config.database.url, inference = %config.inference.base_url()))]
pub fn build_state(config: &ScribeConfig) -> ScribeResult<AppState> {
    let store = DatabaseGenerationStore::connect(
        &config.database.url,
        config.database.max_connections,
    )?;
    let writer = InferenceClient::new(config.inference.clone())?;

    info!(model = %config.inference.model(), "Collaborators ready");
    Ok(AppState::new(Arc::new(writer), Arc::new(store)))
}

/// Build the full application router for `config`.
pub fn build_app(config: &ScribeConfig) -> ScribeResult<Router> {
    let state = build_state(config)?;
    Ok(create_app(state, &config.server.cors_origins)?)
}

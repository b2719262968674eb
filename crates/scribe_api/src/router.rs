//! Route table and middleware.

use crate::{AppState, handlers};
use axum::{
    Router,
    http::{HeaderValue, Method, header},
    routing::{get, post},
};
use scribe_error::ConfigError;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

/// Creates the API router.
pub fn create_router(state: AppState) -> Router {
    let api = Router::new()
        .route("/generate", post(handlers::generate))
        .route("/history", get(handlers::history))
        .route(
            "/history/:id",
            get(handlers::get_generation).delete(handlers::delete_generation),
        )
        .route("/models", get(handlers::models))
        .route("/status", get(handlers::status));

    Router::new()
        .route("/", get(handlers::root))
        .route("/health", get(handlers::health_check))
        .nest("/api", api)
        .with_state(state)
}

/// CORS policy admitting the given browser origins with credentials.
///
/// # Errors
///
/// Returns an error if an origin is not a valid header value.
pub fn cors_layer(origins: &[String]) -> Result<CorsLayer, ConfigError> {
    let origins = origins
        .iter()
        .map(|origin| {
            origin
                .parse::<HeaderValue>()
                .map_err(|e| ConfigError::new(format!("Invalid CORS origin '{}': {}", origin, e)))
        })
        .collect::<Result<Vec<_>, _>>()?;

    Ok(CorsLayer::new()
        .allow_origin(origins)
        .allow_methods([Method::GET, Method::POST, Method::DELETE, Method::OPTIONS])
        .allow_headers([
            header::ACCEPT,
            header::CONTENT_TYPE,
            header::AUTHORIZATION,
            header::ORIGIN,
        ])
        .allow_credentials(true))
}

/// Router with CORS and request tracing applied.
///
/// # Errors
///
/// Returns an error if a CORS origin is invalid.
pub fn create_app(state: AppState, cors_origins: &[String]) -> Result<Router, ConfigError> {
    Ok(create_router(state)
        .layer(cors_layer(cors_origins)?)
        .layer(TraceLayer::new_for_http()))
}

//! API handlers

use axum::{
    extract::State,
    http::{StatusCode, Uri},
    response::{IntoResponse, Response},
    Json,
};

use crate::api::AppState;
use crate::types::{ErrorResponse, HealthResponse, OpportunitiesResponse, WelcomeResponse};
use crate::{SERVICE_NAME, SERVICE_TITLE};

/// Welcome message
pub async fn root() -> Json<WelcomeResponse> {
    Json(WelcomeResponse {
        message: format!("Welcome to {}", SERVICE_TITLE),
    })
}

/// Liveness probe; succeeds whenever the process is serving requests
pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
        service: SERVICE_NAME.to_string(),
    })
}

/// List all opportunities in catalog order
pub async fn list_opportunities(State(state): State<AppState>) -> Response {
    let opportunities = state.catalog.opportunities();
    tracing::debug!(count = opportunities.len(), "Serving opportunities");

    Json(OpportunitiesResponse { opportunities }).into_response()
}

/// Fallback for paths with no route
pub async fn not_found(uri: Uri) -> (StatusCode, Json<ErrorResponse>) {
    tracing::debug!(path = %uri.path(), "No route matched");

    (
        StatusCode::NOT_FOUND,
        Json(ErrorResponse {
            detail: "Not Found".to_string(),
        }),
    )
}

//! HTTP API server

use axum::{routing::get, Router};
use tower_http::trace::TraceLayer;

use crate::catalog::Catalog;
use crate::config::AppConfig;
use crate::error::Result;

pub mod cors;
pub mod handlers;
pub mod state;

pub use cors::CorsPolicy;
pub use state::AppState;

/// Build the API router using the provided application state and CORS policy
pub fn create_router(state: AppState, cors: CorsPolicy) -> Router {
    let router = Router::new()
        .route("/", get(handlers::root))
        .route("/health", get(handlers::health))
        .route("/api/opportunities", get(handlers::list_opportunities))
        .fallback(handlers::not_found)
        .with_state(state);

    cors.apply(router).layer(TraceLayer::new_for_http())
}

/// Build the router described by the application configuration
pub fn router_from_config(config: &AppConfig, catalog: Catalog) -> Result<Router> {
    let cors = CorsPolicy::from_config(&config.cors)?;
    Ok(create_router(AppState::new(catalog), cors))
}

use axum::{middleware, routing::get, Router};
use tower_http::trace::TraceLayer;

use super::health;
use super::middleware::{logging_middleware, security_headers_middleware};
use super::state::AppState;
use super::types::ApiError;
use super::v1;

/// Create the full router with application state
pub fn create_router_with_state(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_check))
        .route("/live", get(health::live_check))
        .nest("/v1", v1::create_v1_router())
        .fallback(route_not_found)
        .with_state(state)
        .layer(middleware::from_fn(security_headers_middleware))
        .layer(middleware::from_fn(logging_middleware))
        .layer(TraceLayer::new_for_http())
}

async fn route_not_found() -> ApiError {
    ApiError::not_found("No route matches this path")
}

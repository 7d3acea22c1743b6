//! v1 API endpoints

pub mod hydration;

use axum::{
    routing::{get, post},
    Router,
};

use super::state::AppState;

/// Create v1 API router
pub fn create_v1_router() -> Router<AppState> {
    Router::new()
        .route("/hydration/goal", post(hydration::compute_goal))
        .route("/hydration/goal/validate", post(hydration::validate_goal))
        .route("/hydration/units", get(hydration::list_unit_ranges))
        .route("/hydration/progress", post(hydration::daily_progress))
}

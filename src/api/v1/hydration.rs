//! Hydration endpoint handlers

use axum::extract::State;
use tracing::debug;

use crate::api::state::AppState;
use crate::api::types::{
    ApiError, CheckGoalRequest, ComputeGoalBody, GoalResponse, Json, ProgressBody,
    UnitRangesResponse,
};
use crate::domain::DailyProgress;
use crate::infrastructure::services::GoalCheck;

/// POST /v1/hydration/goal
pub async fn compute_goal(
    State(state): State<AppState>,
    Json(body): Json<ComputeGoalBody>,
) -> Result<Json<GoalResponse>, ApiError> {
    let computation = state
        .hydration_service
        .compute_goal(body.into())
        .map_err(ApiError::from)?;

    Ok(Json(GoalResponse::from(computation)))
}

/// POST /v1/hydration/goal/validate
///
/// Always 200: an out-of-range entry is reported with `valid: false`.
pub async fn validate_goal(
    State(state): State<AppState>,
    Json(body): Json<CheckGoalRequest>,
) -> Json<GoalCheck> {
    debug!(value = %body.value, "Validating goal entry");

    Json(state.hydration_service.check_goal(body.value, body.unit))
}

/// GET /v1/hydration/units
pub async fn list_unit_ranges(State(state): State<AppState>) -> Json<UnitRangesResponse> {
    Json(UnitRangesResponse::new(state.hydration_service.unit_ranges()))
}

/// POST /v1/hydration/progress
pub async fn daily_progress(
    State(state): State<AppState>,
    Json(body): Json<ProgressBody>,
) -> Result<Json<DailyProgress>, ApiError> {
    let progress = state
        .hydration_service
        .summarize_day(body.into())
        .map_err(ApiError::from)?;

    Ok(Json(progress))
}

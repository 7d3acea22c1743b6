//! Request, response and error types of the HTTP API

pub mod error;
pub mod hydration;
pub mod json;

pub use error::{ApiError, ApiErrorResponse};
pub use hydration::{
    CheckGoalRequest, ComputeGoalBody, GoalResponse, ProgressBody, UnitRangesResponse,
    VolumeDisplay,
};
pub use json::Json;

//! Infrastructure services

mod hydration_service;

pub use hydration_service::{
    ComputeGoalRequest, GoalCheck, GoalComputation, HydrationService, ProgressRequest,
};

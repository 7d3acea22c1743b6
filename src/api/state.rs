//! Application state for shared services

use std::sync::Arc;

use crate::domain::hydration::UnitRange;
use crate::domain::{DailyProgress, DomainError, Preferences, VolumeUnit};
use crate::infrastructure::services::{
    ComputeGoalRequest, GoalCheck, GoalComputation, HydrationService, ProgressRequest,
};

/// Application state containing shared services using dynamic dispatch
#[derive(Clone)]
pub struct AppState {
    pub hydration_service: Arc<dyn HydrationServiceTrait>,
}

impl AppState {
    pub fn new(hydration_service: Arc<dyn HydrationServiceTrait>) -> Self {
        Self { hydration_service }
    }

    /// State backed by the default service for the given preferences
    pub fn from_preferences(preferences: Preferences) -> Self {
        Self::new(Arc::new(HydrationService::new(preferences)))
    }
}

/// Trait for hydration service operations
pub trait HydrationServiceTrait: Send + Sync {
    fn compute_goal(&self, request: ComputeGoalRequest) -> Result<GoalComputation, DomainError>;
    fn check_goal(&self, value: f64, unit: Option<VolumeUnit>) -> GoalCheck;
    fn unit_ranges(&self) -> Vec<UnitRange>;
    fn summarize_day(&self, request: ProgressRequest) -> Result<DailyProgress, DomainError>;
}

impl HydrationServiceTrait for HydrationService {
    fn compute_goal(&self, request: ComputeGoalRequest) -> Result<GoalComputation, DomainError> {
        HydrationService::compute_goal(self, request)
    }

    fn check_goal(&self, value: f64, unit: Option<VolumeUnit>) -> GoalCheck {
        HydrationService::check_goal(self, value, unit)
    }

    fn unit_ranges(&self) -> Vec<UnitRange> {
        HydrationService::unit_ranges(self)
    }

    fn summarize_day(&self, request: ProgressRequest) -> Result<DailyProgress, DomainError> {
        HydrationService::summarize_day(self, request)
    }
}

//! Hydration service - goal computation, goal entry checks and daily progress

use chrono::{NaiveDate, Utc};
use serde::Serialize;
use tracing::debug;

use crate::domain::hydration::UnitRange;
use crate::domain::{
    summarize_day, validate_goal_entry, DailyProgress, DomainError, GoalRange, HydrationGoal,
    HydrationGoalCalculator, HydrationProfile, IntakeEntry, Preferences, Sex, VolumeUnit,
};

/// Request to compute a goal from raw profile values
#[derive(Debug, Clone)]
pub struct ComputeGoalRequest {
    pub weight_kg: f64,
    pub sex: Sex,
    pub age: i32,
    pub temperature_celsius: f64,
    pub unit: Option<VolumeUnit>,
}

/// Computed goal together with its value in the display unit
#[derive(Debug, Clone, PartialEq)]
pub struct GoalComputation {
    pub goal: HydrationGoal,
    pub unit: VolumeUnit,
    pub display_value: f64,
}

/// Outcome of checking a user-entered goal
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GoalCheck {
    pub valid: bool,
    pub value_ml: f64,
    pub unit: VolumeUnit,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

/// Request to summarize one day of intake
#[derive(Debug, Clone)]
pub struct ProgressRequest {
    pub goal_liters: f64,
    /// Defaults to the current UTC day
    pub day: Option<NaiveDate>,
    pub entries: Vec<IntakeEntry>,
}

#[derive(Debug, Clone, Default)]
pub struct HydrationService {
    calculator: HydrationGoalCalculator,
    preferences: Preferences,
}

impl HydrationService {
    pub fn new(preferences: Preferences) -> Self {
        Self {
            calculator: HydrationGoalCalculator::new(),
            preferences,
        }
    }

    /// Validate the profile, compute the goal and render it in the requested
    /// or preferred unit
    pub fn compute_goal(&self, request: ComputeGoalRequest) -> Result<GoalComputation, DomainError> {
        let profile = HydrationProfile::new(
            request.age,
            request.sex,
            request.weight_kg,
            request.temperature_celsius,
        )?;

        let goal = self.calculator.compute_goal(&profile);
        let unit = self.preferences.unit_or_default(request.unit);

        debug!(
            weight_kg = %request.weight_kg,
            sex = %request.sex,
            age = %request.age,
            temperature_celsius = %request.temperature_celsius,
            liters = %goal.liters(),
            "Computed hydration goal"
        );

        Ok(GoalComputation {
            goal,
            unit,
            display_value: goal.in_unit(unit),
        })
    }

    /// Check a goal entered by the user. An out-of-range value is reported in
    /// the result, not as an error.
    pub fn check_goal(&self, value: f64, unit: Option<VolumeUnit>) -> GoalCheck {
        let unit = self.preferences.unit_or_default(unit);

        match validate_goal_entry(value, unit) {
            Ok(value_ml) => GoalCheck {
                valid: true,
                value_ml,
                unit,
                message: None,
            },
            Err(err) => {
                debug!(value = %value, unit = %unit, "Goal entry out of range");

                GoalCheck {
                    valid: false,
                    value_ml: err.value_ml,
                    unit,
                    message: Some(err.to_string()),
                }
            }
        }
    }

    /// Accepted goal bounds in every display unit
    pub fn unit_ranges(&self) -> Vec<UnitRange> {
        let range = GoalRange::canonical();
        VolumeUnit::ALL.iter().map(|unit| range.in_unit(*unit)).collect()
    }

    pub fn summarize_day(&self, request: ProgressRequest) -> Result<DailyProgress, DomainError> {
        if !request.goal_liters.is_finite() || request.goal_liters <= 0.0 {
            return Err(DomainError::validation(format!(
                "Goal must be a positive number of liters, got {}",
                request.goal_liters
            )));
        }

        let day = request.day.unwrap_or_else(|| Utc::now().date_naive());
        let goal = HydrationGoal::from_liters(request.goal_liters);
        let progress = summarize_day(goal, &request.entries, day)?;

        debug!(
            day = %day,
            consumed_ml = %progress.consumed_ml,
            percent = %progress.percent,
            "Summarized daily intake"
        );

        Ok(progress)
    }
}

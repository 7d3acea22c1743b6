//! Hydration request and response bodies

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::domain::hydration::UnitRange;
use crate::domain::{IntakeEntry, Sex, VolumeUnit};
use crate::infrastructure::services::{ComputeGoalRequest, GoalComputation, ProgressRequest};

/// POST /v1/hydration/goal
#[derive(Debug, Clone, Deserialize)]
pub struct ComputeGoalBody {
    pub weight_kg: f64,
    pub sex: Sex,
    pub age: i32,
    pub temperature_celsius: f64,
    #[serde(default)]
    pub unit: Option<VolumeUnit>,
}

impl From<ComputeGoalBody> for ComputeGoalRequest {
    fn from(body: ComputeGoalBody) -> Self {
        Self {
            weight_kg: body.weight_kg,
            sex: body.sex,
            age: body.age,
            temperature_celsius: body.temperature_celsius,
            unit: body.unit,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VolumeDisplay {
    pub value: f64,
    pub unit: VolumeUnit,
    pub text: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GoalResponse {
    pub liters: f64,
    pub milliliters: f64,
    pub display: VolumeDisplay,
}

impl From<GoalComputation> for GoalResponse {
    fn from(computation: GoalComputation) -> Self {
        Self {
            liters: computation.goal.liters(),
            milliliters: computation.goal.milliliters(),
            display: VolumeDisplay {
                value: computation.display_value,
                unit: computation.unit,
                text: computation.unit.format_value(computation.display_value),
            },
        }
    }
}

/// POST /v1/hydration/goal/validate
#[derive(Debug, Clone, Deserialize)]
pub struct CheckGoalRequest {
    pub value: f64,
    #[serde(default)]
    pub unit: Option<VolumeUnit>,
}

/// GET /v1/hydration/units
#[derive(Debug, Clone, Serialize)]
pub struct UnitRangesResponse {
    pub object: String,
    pub data: Vec<UnitRange>,
}

impl UnitRangesResponse {
    pub fn new(data: Vec<UnitRange>) -> Self {
        Self {
            object: "list".to_string(),
            data,
        }
    }
}

/// POST /v1/hydration/progress
#[derive(Debug, Clone, Deserialize)]
pub struct ProgressBody {
    pub goal_liters: f64,
    #[serde(default)]
    pub day: Option<NaiveDate>,
    #[serde(default)]
    pub entries: Vec<IntakeEntry>,
}

impl From<ProgressBody> for ProgressRequest {
    fn from(body: ProgressBody) -> Self {
        Self {
            goal_liters: body.goal_liters,
            day: body.day,
            entries: body.entries,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::HydrationGoal;

    #[test]
    fn test_compute_goal_body_defaults_unit() {
        let body: ComputeGoalBody = serde_json::from_str(
            r#"{"weight_kg": 70, "sex": "male", "age": 30, "temperature_celsius": 20}"#,
        )
        .unwrap();

        assert_eq!(body.sex, Sex::Male);
        assert!(body.unit.is_none());
    }

    #[test]
    fn test_goal_response_from_computation() {
        let response = GoalResponse::from(GoalComputation {
            goal: HydrationGoal::from_liters(1.5),
            unit: VolumeUnit::Liter,
            display_value: 1.5,
        });

        assert_eq!(response.milliliters, 1500.0);
        assert_eq!(response.display.text, "1.5 L");

        let json = serde_json::to_string(&response).unwrap();
        assert!(json.contains("\"unit\":\"L\""));
    }

    #[test]
    fn test_progress_body_parses_entries() {
        let body: ProgressBody = serde_json::from_str(
            r#"{
                "goal_liters": 2.0,
                "day": "2026-05-01",
                "entries": [{"amount": 25, "unit": "cL", "consumed_at": "2026-05-01T07:45:00Z"}]
            }"#,
        )
        .unwrap();

        let request = ProgressRequest::from(body);
        assert_eq!(request.day, NaiveDate::from_ymd_opt(2026, 5, 1));
        assert_eq!(request.entries.len(), 1);
        assert_eq!(request.entries[0].milliliters(), 250.0);
    }
}

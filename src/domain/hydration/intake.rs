//! Daily intake progress against a goal

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::calculator::HydrationGoal;
use super::unit::{to_milliliters, VolumeUnit};

#[derive(Debug, Error, Clone, PartialEq)]
pub enum IntakeValidationError {
    #[error("Intake amount must be a positive number, got {0}")]
    InvalidAmount(f64),
}

/// A single logged drink
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IntakeEntry {
    pub amount: f64,
    #[serde(default)]
    pub unit: VolumeUnit,
    pub consumed_at: DateTime<Utc>,
}

impl IntakeEntry {
    pub fn new(
        amount: f64,
        unit: VolumeUnit,
        consumed_at: DateTime<Utc>,
    ) -> Result<Self, IntakeValidationError> {
        let entry = Self {
            amount,
            unit,
            consumed_at,
        };
        entry.validate()?;
        Ok(entry)
    }

    pub fn validate(&self) -> Result<(), IntakeValidationError> {
        if !self.amount.is_finite() || self.amount <= 0.0 {
            return Err(IntakeValidationError::InvalidAmount(self.amount));
        }
        Ok(())
    }

    pub fn milliliters(&self) -> f64 {
        to_milliliters(self.amount, self.unit)
    }
}

/// Intake totals for one UTC day
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DailyProgress {
    pub day: NaiveDate,
    pub goal_ml: f64,
    pub consumed_ml: f64,
    pub remaining_ml: f64,
    /// Not capped at 100
    pub percent: f64,
    pub goal_reached: bool,
    pub entries_counted: usize,
}

/// Sum the entries consumed on `day` and compare them with `goal`.
///
/// Entries from other days are ignored. Any invalid entry fails the whole
/// summary.
pub fn summarize_day(
    goal: HydrationGoal,
    entries: &[IntakeEntry],
    day: NaiveDate,
) -> Result<DailyProgress, IntakeValidationError> {
    let mut consumed_ml = 0.0;
    let mut entries_counted = 0;

    for entry in entries {
        entry.validate()?;

        if entry.consumed_at.date_naive() == day {
            consumed_ml += entry.milliliters();
            entries_counted += 1;
        }
    }

    let goal_ml = goal.milliliters();
    let percent = if goal_ml > 0.0 {
        ((consumed_ml / goal_ml) * 1000.0).round() / 10.0
    } else {
        0.0
    };

    Ok(DailyProgress {
        day,
        goal_ml,
        consumed_ml,
        remaining_ml: (goal_ml - consumed_ml).max(0.0),
        percent,
        goal_reached: consumed_ml >= goal_ml,
        entries_counted,
    })
}

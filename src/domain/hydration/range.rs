//! Acceptable bounds for a user-entered daily goal

use std::fmt;

use serde::Serialize;
use thiserror::Error;

use super::unit::{from_milliliters, to_milliliters, VolumeUnit};

/// Smallest accepted daily goal, in milliliters
pub const MIN_GOAL_ML: f64 = 1500.0;

/// Largest accepted daily goal, in milliliters
pub const MAX_GOAL_ML: f64 = 4000.0;

/// A goal entry fell outside [`GoalRange::canonical`]
///
/// The message shows the bounds at the unit's display precision, rounded to
/// nearest. In ounces that reads 50.7 and 135.3, which are themselves just
/// outside the accepted range (1499.4 mL and 4001.3 mL).
#[derive(Debug, Error, Clone, PartialEq)]
pub struct GoalOutOfRange {
    /// Rejected value, in milliliters
    pub value_ml: f64,
    /// Unit the bounds are reported in
    pub unit: VolumeUnit,
    /// Bounds converted to `unit`
    pub range: UnitRange,
}

impl fmt::Display for GoalOutOfRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "The goal must be between {} and {}",
            self.unit.format_value(self.range.min),
            self.unit.format_value(self.range.max)
        )
    }
}

impl GoalOutOfRange {
    fn new(value_ml: f64, unit: VolumeUnit) -> Self {
        Self {
            value_ml,
            unit,
            range: GoalRange::canonical().in_unit(unit),
        }
    }
}

/// Inclusive goal bounds in milliliters
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct GoalRange {
    pub min_ml: f64,
    pub max_ml: f64,
}

/// Inclusive bounds expressed in a display unit
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct UnitRange {
    pub unit: VolumeUnit,
    pub min: f64,
    pub max: f64,
}

impl GoalRange {
    pub const fn canonical() -> Self {
        Self {
            min_ml: MIN_GOAL_ML,
            max_ml: MAX_GOAL_ML,
        }
    }

    /// NaN and infinities are never contained
    pub fn contains(&self, value_ml: f64) -> bool {
        value_ml.is_finite() && value_ml >= self.min_ml && value_ml <= self.max_ml
    }

    pub fn in_unit(&self, unit: VolumeUnit) -> UnitRange {
        UnitRange {
            unit,
            min: from_milliliters(self.min_ml, unit),
            max: from_milliliters(self.max_ml, unit),
        }
    }
}

impl Default for GoalRange {
    fn default() -> Self {
        Self::canonical()
    }
}

/// Check whether a milliliter goal is acceptable
pub fn is_valid_goal(value_ml: f64) -> bool {
    GoalRange::canonical().contains(value_ml)
}

/// Validate a milliliter goal, reporting bounds in mL on failure
pub fn validate_goal(value_ml: f64) -> Result<(), GoalOutOfRange> {
    if is_valid_goal(value_ml) {
        Ok(())
    } else {
        Err(GoalOutOfRange::new(value_ml, VolumeUnit::Milliliter))
    }
}

/// Convert an entry made in `unit` and validate it.
///
/// Returns the value in milliliters. The error cites the bounds in `unit`.
pub fn validate_goal_entry(value: f64, unit: VolumeUnit) -> Result<f64, GoalOutOfRange> {
    let value_ml = to_milliliters(value, unit);

    if is_valid_goal(value_ml) {
        Ok(value_ml)
    } else {
        Err(GoalOutOfRange::new(value_ml, unit))
    }
}

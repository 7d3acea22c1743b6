//! Daily hydration goal calculation

use serde::Serialize;

use super::profile::{HydrationProfile, Sex};
use super::unit::{from_milliliters, VolumeUnit, ML_PER_L};

/// Liters of water per kilogram of body weight
const LITERS_PER_KG: f64 = 0.033;

/// Extra liters for male profiles
const MALE_BONUS_L: f64 = 0.2;

/// Temperature thresholds (strictly greater than) and their extra liters,
/// highest first. Only the first match applies.
const HEAT_BONUSES: [(f64, f64); 3] = [(35.0, 0.7), (30.0, 0.5), (25.0, 0.3)];

const MINOR_AGE: i32 = 18;
const MINOR_FACTOR: f64 = 0.9;
const SENIOR_AGE: i32 = 55;
const SENIOR_FACTOR: f64 = 0.95;

/// Daily intake goal in liters. Computed goals are rounded to 2 decimals;
/// goals supplied by the user are kept as given.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct HydrationGoal {
    liters: f64,
}

impl HydrationGoal {
    /// Wrap a goal the user set themselves, without rounding
    pub fn from_liters(liters: f64) -> Self {
        Self { liters }
    }

    pub fn liters(&self) -> f64 {
        self.liters
    }

    pub fn milliliters(&self) -> f64 {
        self.liters * ML_PER_L
    }

    /// Goal expressed in a display unit
    pub fn in_unit(&self, unit: VolumeUnit) -> f64 {
        from_milliliters(self.milliliters(), unit)
    }
}

/// Computes goals from validated profiles
#[derive(Debug, Clone, Copy, Default)]
pub struct HydrationGoalCalculator;

impl HydrationGoalCalculator {
    pub fn new() -> Self {
        Self
    }

    pub fn compute_goal(&self, profile: &HydrationProfile) -> HydrationGoal {
        HydrationGoal {
            liters: compute_goal_raw(
                profile.weight_kg(),
                profile.sex(),
                profile.age(),
                profile.temperature_celsius(),
            ),
        }
    }
}

/// Compute the daily goal in liters without validating anything.
///
/// Any input is accepted and the arithmetic is applied as-is, so a negative
/// weight yields a negative goal. Use [`HydrationProfile::new`] to reject such
/// input first.
pub fn compute_goal_raw(weight_kg: f64, sex: Sex, age: i32, temperature_celsius: f64) -> f64 {
    let mut liters = weight_kg * LITERS_PER_KG;

    if sex == Sex::Male {
        liters += MALE_BONUS_L;
    }

    if let Some((_, bonus)) = HEAT_BONUSES
        .iter()
        .find(|(threshold, _)| temperature_celsius > *threshold)
    {
        liters += bonus;
    }

    if age < MINOR_AGE {
        liters *= MINOR_FACTOR;
    }

    if age > SENIOR_AGE {
        liters *= SENIOR_FACTOR;
    }

    round_to_hundredths(liters)
}

fn round_to_hundredths(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

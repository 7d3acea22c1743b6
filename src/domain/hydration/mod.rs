//! Hydration domain
//!
//! Daily goal calculation, volume unit conversion, goal range validation and
//! intake progress. Everything here is pure and synchronous.

mod calculator;
mod intake;
mod profile;
mod range;
mod unit;

pub use calculator::{compute_goal_raw, HydrationGoal, HydrationGoalCalculator};
pub use intake::{summarize_day, DailyProgress, IntakeEntry, IntakeValidationError};
pub use profile::{HydrationProfile, ProfileValidationError, Sex};
pub use range::{
    is_valid_goal, validate_goal, validate_goal_entry, GoalOutOfRange, GoalRange, UnitRange,
    MAX_GOAL_ML, MIN_GOAL_ML,
};
pub use unit::{
    from_milliliters, to_milliliters, UnitParseError, VolumeUnit, ML_PER_CL, ML_PER_L, ML_PER_OZ,
};

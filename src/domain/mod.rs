//! Domain layer - Core business logic and entities

pub mod error;
pub mod hydration;
pub mod preferences;

pub use error::DomainError;
pub use hydration::{
    compute_goal_raw, is_valid_goal, summarize_day, to_milliliters, validate_goal,
    validate_goal_entry, DailyProgress, GoalOutOfRange, GoalRange, HydrationGoal,
    HydrationGoalCalculator, HydrationProfile, IntakeEntry, Sex, VolumeUnit,
};
pub use preferences::Preferences;

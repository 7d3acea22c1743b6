//! Hydration Goal Service
//!
//! Computes a personalised daily water intake goal and validates
//! user-entered goals:
//! - Goal from weight, sex, age and ambient temperature
//! - Volume unit conversion (mL, cL, L, oz)
//! - Goal range validation with unit-aware messages
//! - Daily intake progress against a goal

pub mod api;
pub mod cli;
pub mod config;
pub mod domain;
pub mod infrastructure;

pub use config::AppConfig;

use api::state::AppState;

/// Build the shared state for the HTTP API from configuration
pub fn create_app_state(config: &AppConfig) -> AppState {
    tracing::debug!(
        display_unit = %config.preferences.display_unit,
        "Creating application state"
    );

    AppState::from_preferences(config.preferences.clone())
}

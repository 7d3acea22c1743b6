//! CLI module for the hydration goal service
//!
//! Subcommands:
//! - `serve`: run the HTTP API
//! - `goal`: compute a daily goal once and print it
//! - `check`: check a user-entered goal against the accepted range

pub mod check;
pub mod goal;
pub mod serve;

use clap::{Parser, Subcommand};

use crate::config::AppConfig;

/// Hydration goal service - daily water intake goals and unit validation
#[derive(Parser)]
#[command(name = "hydration-goal")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Run the HTTP API server
    Serve(serve::ServeArgs),

    /// Compute a daily hydration goal
    Goal(goal::GoalArgs),

    /// Check whether a goal entry is within the accepted range
    Check(check::CheckArgs),
}

/// Load `.env` and the layered configuration, falling back to defaults
pub(crate) fn load_config() -> AppConfig {
    dotenvy::dotenv().ok();

    AppConfig::load().unwrap_or_else(|e| {
        eprintln!("Failed to load configuration, using defaults: {}", e);
        AppConfig::default()
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Sex, VolumeUnit};

    #[test]
    fn test_parse_goal_command() {
        let cli = Cli::try_parse_from([
            "hydration-goal",
            "goal",
            "--weight",
            "70",
            "--sex",
            "male",
            "--age",
            "30",
            "--temperature",
            "20",
            "--unit",
            "cL",
        ])
        .unwrap();

        match cli.command {
            Command::Goal(args) => {
                assert_eq!(args.weight, 70.0);
                assert_eq!(args.sex, Sex::Male);
                assert_eq!(args.age, 30);
                assert_eq!(args.temperature, 20.0);
                assert_eq!(args.unit, Some(VolumeUnit::Centiliter));
            }
            _ => panic!("expected goal command"),
        }
    }

    #[test]
    fn test_parse_check_with_negative_value() {
        let cli = Cli::try_parse_from(["hydration-goal", "check", "--value", "-3", "--unit", "L"])
            .unwrap();

        match cli.command {
            Command::Check(args) => {
                assert_eq!(args.value, -3.0);
                assert_eq!(args.unit, Some(VolumeUnit::Liter));
            }
            _ => panic!("expected check command"),
        }
    }

    #[test]
    fn test_rejects_unknown_unit() {
        let result = Cli::try_parse_from(["hydration-goal", "check", "--value", "2", "--unit", "cup"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_serve_port_override() {
        let cli = Cli::try_parse_from(["hydration-goal", "serve", "--port", "3001"]).unwrap();

        match cli.command {
            Command::Serve(args) => assert_eq!(args.port, Some(3001)),
            _ => panic!("expected serve command"),
        }
    }
}

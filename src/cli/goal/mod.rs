//! Goal command - computes one goal and prints it

use clap::Args;

use crate::domain::{Sex, VolumeUnit};
use crate::infrastructure::services::{ComputeGoalRequest, HydrationService};

#[derive(Args, Clone)]
pub struct GoalArgs {
    /// Body weight in kilograms
    #[arg(long, allow_negative_numbers = true)]
    pub weight: f64,

    /// male or female
    #[arg(long)]
    pub sex: Sex,

    /// Age in years
    #[arg(long, allow_negative_numbers = true)]
    pub age: i32,

    /// Current or forecast temperature in degrees Celsius
    #[arg(long, allow_negative_numbers = true)]
    pub temperature: f64,

    /// Display unit (mL, cL, L, oz). Defaults to the configured preference.
    #[arg(long)]
    pub unit: Option<VolumeUnit>,
}

pub async fn run(args: GoalArgs) -> anyhow::Result<()> {
    let config = super::load_config();
    let service = HydrationService::new(config.preferences);

    let computation = service.compute_goal(ComputeGoalRequest {
        weight_kg: args.weight,
        sex: args.sex,
        age: args.age,
        temperature_celsius: args.temperature,
        unit: args.unit,
    })?;

    println!(
        "Daily goal: {} ({:.2} L)",
        computation.unit.format_value(computation.display_value),
        computation.goal.liters()
    );

    Ok(())
}

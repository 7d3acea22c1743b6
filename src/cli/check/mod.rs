//! Check command - validates a goal entry, failing when it is out of range

use clap::Args;

use crate::domain::VolumeUnit;
use crate::infrastructure::services::{GoalCheck, HydrationService};

#[derive(Args, Clone)]
pub struct CheckArgs {
    /// Goal value to check
    #[arg(long, allow_negative_numbers = true)]
    pub value: f64,

    /// Unit of the value (mL, cL, L, oz). Defaults to the configured preference.
    #[arg(long)]
    pub unit: Option<VolumeUnit>,
}

pub async fn run(args: CheckArgs) -> anyhow::Result<()> {
    let config = super::load_config();
    let service = HydrationService::new(config.preferences);

    let check = service.check_goal(args.value, args.unit);

    if let Some(message) = check.message {
        anyhow::bail!(message);
    }

    println!("{}", valid_goal_message(args.value, &check));

    Ok(())
}

fn valid_goal_message(value: f64, check: &GoalCheck) -> String {
    format!(
        "{} is a valid goal ({})",
        check.unit.format_value(value),
        VolumeUnit::Milliliter.format_value(check.value_ml)
    )
}

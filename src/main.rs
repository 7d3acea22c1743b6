use clap::Parser;
use hydration_goal::cli::{self, Cli, Command};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Command::Serve(args) => cli::serve::run(args).await,
        Command::Goal(args) => cli::goal::run(args).await,
        Command::Check(args) => cli::check::run(args).await,
    }
}

use clap::Parser;

mod commands;
mod progress;

use commands::Commands;

#[derive(Parser)]
#[command(name = "pzmod")]
#[command(version, about = "Project Zomboid b42 mod build tool", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

fn main() -> anyhow::Result<()> {
    // Setup logging
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();
    cli.command.execute()?;

    Ok(())
}

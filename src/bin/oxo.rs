//! oxo CLI - noughts and crosses against an exhaustive minimax opponent
//!
//! This CLI provides:
//! - Interactive play against the computer with a running tally
//! - Move analysis for any reachable position
//! - Batch self-play for checking the opponent never loses

use anyhow::Result;
use clap::{ArgAction, Parser, Subcommand};

#[derive(Parser)]
#[command(name = "oxo")]
#[command(version, about = "Noughts and crosses against a minimax opponent", long_about = None)]
struct Cli {
    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(long, short = 'v', action = ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Play against the computer in the terminal
    Play(oxo::cli::commands::play::PlayArgs),

    /// Score the computer's candidate moves on a board
    Analyze(oxo::cli::commands::analyze::AnalyzeArgs),

    /// Let the computer play a batch of rounds
    Selfplay(oxo::cli::commands::selfplay::SelfplayArgs),
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    oxo::cli::init_tracing(cli.verbose);

    match cli.command {
        Commands::Play(args) => oxo::cli::commands::play::execute(args),
        Commands::Analyze(args) => oxo::cli::commands::analyze::execute(args),
        Commands::Selfplay(args) => oxo::cli::commands::selfplay::execute(args),
    }
}

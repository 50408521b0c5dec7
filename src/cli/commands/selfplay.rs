//! Selfplay command - batches of rounds with the computer in both seats

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use rand::random;

use super::ConfigArgs;
use crate::{
    cli::output::{format_rate, print_kv, print_section},
    config::PlayConfig,
    pipeline::{Agent, MinimaxAgent, ProgressObserver, RandomAgent, Session, SessionSummary},
};

/// Who sits in the human seat during self-play
#[derive(Copy, Clone, Debug, Eq, PartialEq, ValueEnum)]
pub enum OpponentKind {
    /// Another exhaustive minimax player
    Minimax,
    /// Uniformly random moves
    Random,
}

#[derive(Parser, Debug)]
#[command(about = "Let the computer play a batch of rounds")]
pub struct SelfplayArgs {
    #[command(flatten)]
    pub config: ConfigArgs,

    /// Number of rounds
    #[arg(long, short = 'g', default_value_t = 10)]
    pub games: usize,

    /// Opponent in the human seat
    #[arg(long, short = 'o', value_enum, default_value_t = OpponentKind::Minimax)]
    pub opponent: OpponentKind,

    /// Hide the progress bar
    #[arg(long)]
    pub no_progress: bool,

    /// Export the session summary to a JSON file
    #[arg(long)]
    pub export: Option<PathBuf>,
}

pub fn execute(args: SelfplayArgs) -> Result<()> {
    let config = args.config.resolve()?;
    let seed = config.seed.unwrap_or_else(random);
    let computer_mark = config.computer_mark;

    println!("\n=== Self-play Configuration ===");
    println!("Opponent: {:?}", args.opponent);
    println!("Computer plays: {computer_mark}");
    println!("Rounds: {}", args.games);
    println!("Seed: {seed}");

    let summary = run_batch(
        config.with_seed(seed),
        args.games,
        args.opponent,
        !args.no_progress,
    )?;
    let tally = summary.tally;

    let rounds = summary.rounds;
    let describe = |count: usize| format!("{count} ({})", format_rate(count, rounds));

    print_section("Self-play Results");
    print_kv("Rounds", &rounds.to_string());
    print_kv("AI wins", &describe(tally.computer_wins));
    print_kv("Opponent wins", &describe(tally.player_wins));
    print_kv("Draws", &describe(tally.draws));

    if let Some(path) = &args.export {
        summary
            .save(path)
            .with_context(|| format!("failed to export summary to {}", path.display()))?;
        println!("\nSession summary exported to: {}", path.display());
    }

    Ok(())
}

/// Play `games` rounds of the minimax computer against `opponent`.
///
/// The opponent sits in the human seat. Both agents derive their seeds from
/// the configured one, falling back to a random seed.
pub fn run_batch(
    config: PlayConfig,
    games: usize,
    opponent: OpponentKind,
    show_progress: bool,
) -> Result<SessionSummary> {
    let seed = config.seed.unwrap_or_else(random);
    let computer_mark = config.computer_mark;

    let mut computer = MinimaxAgent::with_seed("AI".to_string(), computer_mark, seed);
    let opponent_seed = seed.wrapping_add(2);
    let mut opponent: Box<dyn Agent> = match opponent {
        OpponentKind::Minimax => Box::new(MinimaxAgent::with_seed(
            "Minimax".to_string(),
            computer_mark.opponent(),
            opponent_seed,
        )),
        OpponentKind::Random => {
            Box::new(RandomAgent::with_seed("Random".to_string(), opponent_seed))
        }
    };

    let mut session = Session::new(config.with_seed(seed));
    if show_progress {
        session = session.with_observer(Box::new(ProgressObserver::new()));
    }

    session
        .run(games, opponent.as_mut(), &mut computer)
        .with_context(|| format!("self-play against {} failed", opponent.name()))
}

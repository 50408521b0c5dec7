//! Play command - a human at the terminal against the minimax computer

use std::{
    io::{self, BufRead, Write},
    path::PathBuf,
};

use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;

use super::ConfigArgs;
use crate::{
    adapters::{ConsoleAgent, ConsoleObserver},
    pipeline::{Agent, MinimaxAgent, Session, SessionSummary},
};

#[derive(Parser, Debug)]
#[command(about = "Play against the computer")]
pub struct PlayArgs {
    #[command(flatten)]
    pub config: ConfigArgs,

    /// Stop after this many rounds instead of asking to play again
    #[arg(long, short = 'r')]
    pub rounds: Option<usize>,

    /// Export the session summary to a JSON file
    #[arg(long)]
    pub export: Option<PathBuf>,
}

pub fn execute(args: PlayArgs) -> Result<()> {
    let mut config = args.config.resolve()?;
    if let Some(rounds) = args.rounds {
        config = config.with_max_rounds(rounds);
    }
    info!(?config, "starting interactive session");

    let computer_mark = config.computer_mark;
    let mut computer = match config.seed {
        Some(seed) => MinimaxAgent::with_seed("AI".to_string(), computer_mark, seed),
        None => MinimaxAgent::new("AI".to_string(), computer_mark),
    };
    let mut human = ConsoleAgent::new("Player".to_string(), io::stdin().lock(), io::stdout());

    println!(
        "You play {}, the computer plays {}.\n",
        config.human_mark(),
        computer_mark
    );

    let mut session = Session::new(config)
        .with_observer(Box::new(ConsoleObserver::new(io::stdout(), computer_mark)));

    let summary = play_session(&mut session, &mut human, &mut computer)?;
    if let Some(path) = &args.export {
        summary
            .save(path)
            .with_context(|| format!("failed to export summary to {}", path.display()))?;
        println!("Session summary exported to: {}", path.display());
    }

    Ok(())
}

/// Play rounds until the human declines a replay, the round limit is hit or
/// the input closes, then close the session.
pub fn play_session<R: BufRead, W: Write>(
    session: &mut Session,
    human: &mut ConsoleAgent<R, W>,
    computer: &mut dyn Agent,
) -> Result<SessionSummary> {
    loop {
        match session.play_round(human, computer) {
            Ok(_) => {}
            Err(crate::Error::InputClosed) => {
                info!(rounds = session.rounds_played(), "input closed, ending session");
                break;
            }
            Err(e) => return Err(e).context("round aborted"),
        }

        if session.is_finished() || !human.confirm_replay()? {
            break;
        }
    }

    Ok(session.finish()?)
}

#[cfg(test)]
mod tests {
    use std::io::{Cursor, sink};

    use super::*;
    use crate::{
        config::{FirstMover, PlayConfig},
        tictactoe::Player,
    };

    type ScriptedHuman = ConsoleAgent<Cursor<Vec<u8>>, Vec<u8>>;

    /// Every cell in row-major order; taken cells are refused and skipped.
    fn sweep_script() -> String {
        (0..3)
            .flat_map(|row| (0..3).map(move |col| format!("{row}\n{col}\n")))
            .collect()
    }

    fn setup(script: String, config: PlayConfig) -> (Session, ScriptedHuman, MinimaxAgent) {
        let computer = MinimaxAgent::with_seed("AI".to_string(), config.computer_mark, 5);
        let human = ConsoleAgent::new(
            "Player".to_string(),
            Cursor::new(script.into_bytes()),
            Vec::new(),
        );
        let session = Session::new(config).with_observer(Box::new(ConsoleObserver::new(
            sink(),
            Player::O,
        )));
        (session, human, computer)
    }

    #[test]
    fn test_round_limit_skips_replay_prompt() {
        let config = PlayConfig::new()
            .with_seed(5)
            .with_first_mover(FirstMover::Human)
            .with_max_rounds(1);
        let (mut session, mut human, mut computer) = setup(sweep_script(), config);

        let summary = play_session(&mut session, &mut human, &mut computer).unwrap();

        assert_eq!(summary.rounds, 1);
        assert_eq!(summary.tally.player_wins, 0);
        let (_, output) = human.into_inner();
        assert!(!String::from_utf8(output).unwrap().contains("play again"));
    }

    #[test]
    fn test_declined_replay_ends_session() {
        let config = PlayConfig::new()
            .with_seed(5)
            .with_first_mover(FirstMover::Human);
        let mut script = sweep_script();
        script.push_str("no\n");
        let (mut session, mut human, mut computer) = setup(script, config);

        let summary = play_session(&mut session, &mut human, &mut computer).unwrap();

        assert_eq!(summary.rounds, 1);
        let (_, output) = human.into_inner();
        assert!(String::from_utf8(output).unwrap().contains("Do you want to play again?"));
    }

    #[test]
    fn test_closed_input_ends_session_cleanly() {
        let config = PlayConfig::new()
            .with_seed(5)
            .with_first_mover(FirstMover::Human);
        let (mut session, mut human, mut computer) = setup(String::new(), config);

        let summary = play_session(&mut session, &mut human, &mut computer).unwrap();

        assert_eq!(summary.rounds, 0);
        assert_eq!(summary.tally.rounds(), 0);
    }
}

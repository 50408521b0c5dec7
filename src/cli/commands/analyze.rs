//! Analyze command - score every move the computer could make on a board

use anyhow::{Context, Result, bail};
use clap::Parser;
use rand::{SeedableRng, random, rngs::StdRng};

use crate::{
    adapters::render_board,
    cli::output::{print_kv, print_section, print_subsection},
    minimax::{Minimax, Score},
    tictactoe::{Board, Coord, Player},
};

#[derive(Parser, Debug)]
#[command(about = "Score the computer's moves on a board")]
pub struct AnalyzeArgs {
    /// Board as 9 row-major cells: `X`, `O`, and `.` for empty (e.g. "XO..X....")
    pub board: String,

    /// Mark the computer plays (`x` or `o`); it must be the side on move
    #[arg(long, default_value = "o")]
    pub computer_mark: Player,

    /// Seed for the tie-breaking shuffle
    #[arg(long)]
    pub seed: Option<u64>,
}

/// Result of analyzing one position
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Verdict {
    /// The board already holds a line for this player
    Won(Player),
    /// The board is full without a line
    Tied,
    /// The computer is on move
    Open {
        /// Every empty cell with its score, row-major
        scores: Vec<(Coord, Score)>,
        /// Value of the position under best play
        value: Score,
        /// The move the selector picks
        choice: Coord,
    },
}

/// Validate `board` and score the computer's candidate moves.
///
/// The computer can only be on move when it has placed no more marks than
/// the human, so boards where it is ahead are rejected.
pub fn analyze_board(board: &Board, computer: Player, seed: u64) -> Result<Verdict> {
    board.validate().context("board is not reachable by legal play")?;

    if let Some(winner) = board.winner() {
        return Ok(Verdict::Won(winner));
    }
    if board.is_full() {
        return Ok(Verdict::Tied);
    }

    let count = board.count_pieces();
    let (computer_count, human_count) = match computer {
        Player::X => (count.x, count.o),
        Player::O => (count.o, count.x),
    };
    if computer_count > human_count {
        bail!(
            "{computer} has {computer_count} marks to {}'s {human_count}, so {computer} is not on move",
            computer.opponent()
        );
    }

    let engine = Minimax::new(computer);
    let mut scratch = *board;
    let scores = engine.score_moves(&mut scratch);
    let value = scores
        .iter()
        .map(|(_, score)| *score)
        .max()
        .context("non-terminal board produced no candidates")?;

    let mut rng = StdRng::seed_from_u64(seed);
    let choice = engine.select_move(&mut scratch, &mut rng)?;

    Ok(Verdict::Open {
        scores,
        value,
        choice,
    })
}

pub fn execute(args: AnalyzeArgs) -> Result<()> {
    let board = Board::from_string(&args.board)
        .with_context(|| format!("could not parse board '{}'", args.board))?;
    let seed = args.seed.unwrap_or_else(random);
    let verdict = analyze_board(&board, args.computer_mark, seed)?;

    print_section("Position");
    print!("{}", render_board(&board));

    match verdict {
        Verdict::Won(winner) => println!("{winner} has already won."),
        Verdict::Tied => println!("The board is full: it's a tie."),
        Verdict::Open {
            scores,
            value,
            choice,
        } => {
            print_subsection(&format!("Candidate moves for {}", args.computer_mark));
            for (coord, score) in &scores {
                print_kv(&coord.to_string(), &score.to_string());
            }

            print_subsection("Verdict");
            print_kv("Position value", &value.to_string());
            print_kv("Selected move", &choice.to_string());
        }
    }

    Ok(())
}

//! Tic-Tac-Toe game implementation

pub mod board;
pub mod coord;
pub mod game;
pub mod lines;
pub mod validation;

pub use board::{Board, Cell, Lookahead, Player};
pub use coord::Coord;
pub use game::{GameOutcome, Move, Round};
pub use lines::{LineAnalyzer, WINNING_LINES};

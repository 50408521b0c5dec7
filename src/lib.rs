//! Noughts and crosses against an exhaustive minimax opponent
//!
//! This crate provides:
//! - A 3x3 board with win/full predicates and scoped lookahead mutation
//! - The minimax outcome evaluator and the randomized move selector
//! - A session pipeline with agents, observers and a running tally
//! - Console adapters and the `oxo` command-line interface

pub mod adapters;
pub mod cli;
pub mod config;
pub mod error;
pub mod minimax;
pub mod pipeline;
pub mod ports;
pub mod tictactoe;

pub use config::{FirstMover, PlayConfig};
pub use error::{Error, Result};
pub use minimax::{Minimax, Score};
pub use tictactoe::{Board, Cell, Coord, GameOutcome, Player, Round};

//! Error types for the oxo crate

use thiserror::Error;

use crate::tictactoe::Coord;

/// Main error type for the oxo crate
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum Error {
    #[error("position ({row}, {col}) is out of bounds (row and column must be 0-2)")]
    InvalidCoordinate { row: usize, col: usize },

    #[error("invalid move: cell {coord} is already occupied")]
    CellOccupied { coord: Coord },

    #[error("game already over")]
    GameOver,

    #[error("no valid moves available")]
    NoValidMoves,

    #[error("board string has wrong length: expected {expected} cells, got {got} in '{context}'")]
    InvalidBoardLength {
        expected: usize,
        got: usize,
        context: String,
    },

    #[error("invalid character '{character}' at position {position} in '{context}'")]
    InvalidCellCharacter {
        character: char,
        position: usize,
        context: String,
    },

    #[error("invalid player '{player}' (expected 'X' or 'O')")]
    InvalidPlayerString { player: String },

    #[error("invalid piece counts: X={x_count}, O={o_count} (must differ by at most 1)")]
    InvalidPieceCounts { x_count: usize, o_count: usize },

    #[error("invalid board: {reason}")]
    InvalidBoard { reason: String },

    #[error("progress bar template error: {message}")]
    ProgressBarTemplate { message: String },

    #[error("input closed before a move was entered")]
    InputClosed,

    #[error("failed to {operation}: {source}")]
    Io {
        operation: String,
        #[source]
        source: std::io::Error,
    },

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Convenience type alias for Results using the crate's Error type
pub type Result<T> = std::result::Result<T, Error>;

impl From<std::io::Error> for Error {
    fn from(source: std::io::Error) -> Self {
        Error::Io {
            operation: "IO operation".to_string(),
            source,
        }
    }
}

impl Error {
    /// Wrap an IO error with the operation that failed
    pub fn io(operation: impl Into<String>, source: std::io::Error) -> Self {
        Error::Io {
            operation: operation.into(),
            source,
        }
    }
}

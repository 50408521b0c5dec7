//! Row/column addressing for the 3x3 grid

use std::fmt;

use serde::{Deserialize, Serialize};

/// Side length of the board
pub const SIZE: usize = 3;

/// A cell coordinate, 0-indexed, with row and column each in `0..3`
///
/// Deserialization goes through [`Coord::new`], so a decoded coordinate is
/// always on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "RawCoord")]
pub struct Coord {
    row: usize,
    col: usize,
}

/// Unchecked wire form of [`Coord`]
#[derive(Deserialize)]
struct RawCoord {
    row: usize,
    col: usize,
}

impl TryFrom<RawCoord> for Coord {
    type Error = crate::Error;

    fn try_from(raw: RawCoord) -> Result<Self, Self::Error> {
        Coord::new(raw.row, raw.col)
    }
}

impl Coord {
    /// Every coordinate in row-major order
    pub const ALL: [Coord; 9] = [
        Coord { row: 0, col: 0 },
        Coord { row: 0, col: 1 },
        Coord { row: 0, col: 2 },
        Coord { row: 1, col: 0 },
        Coord { row: 1, col: 1 },
        Coord { row: 1, col: 2 },
        Coord { row: 2, col: 0 },
        Coord { row: 2, col: 1 },
        Coord { row: 2, col: 2 },
    ];

    /// Create a coordinate, rejecting anything off the board.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::InvalidCoordinate`] when `row` or `col` is 3 or more.
    pub fn new(row: usize, col: usize) -> Result<Self, crate::Error> {
        if row >= SIZE || col >= SIZE {
            return Err(crate::Error::InvalidCoordinate { row, col });
        }
        Ok(Coord { row, col })
    }

    pub fn row(self) -> usize {
        self.row
    }

    pub fn col(self) -> usize {
        self.col
    }

    /// Row-major index into the cell array
    pub fn index(self) -> usize {
        self.row * SIZE + self.col
    }
}

impl fmt::Display for Coord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

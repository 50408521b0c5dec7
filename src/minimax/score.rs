use std::{fmt, ops::Neg};

use serde::{Deserialize, Serialize};

/// Game-theoretic value of a position for the computer
///
/// Ordered `Loss < Draw < Win`, so the computer maximizes and the human
/// minimizes with the ordinary `max`/`min`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Score {
    Loss = -1,
    Draw = 0,
    Win = 1,
}

impl Score {
    /// Numeric value in `{-1, 0, 1}`
    pub fn value(self) -> i8 {
        self as i8
    }
}

impl Neg for Score {
    type Output = Score;

    fn neg(self) -> Score {
        match self {
            Score::Loss => Score::Win,
            Score::Draw => Score::Draw,
            Score::Win => Score::Loss,
        }
    }
}

impl fmt::Display for Score {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Score::Loss => "loss",
            Score::Draw => "draw",
            Score::Win => "win",
        };
        write!(f, "{label} ({:+})", self.value())
    }
}

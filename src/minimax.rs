//! Exhaustive minimax search for the computer opponent
//!
//! The computer is the maximizing side. Scores are always reported from its
//! perspective, whichever mark it plays.

mod evaluator;
mod score;
mod selector;

pub use score::Score;

use crate::tictactoe::Player;

/// Game-tree search bound to the mark the computer plays
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Minimax {
    computer: Player,
}

impl Minimax {
    /// Create a search for a computer playing `computer`
    pub fn new(computer: Player) -> Self {
        Minimax { computer }
    }

    /// The computer's mark
    pub fn computer(&self) -> Player {
        self.computer
    }

    /// The human's mark
    pub fn human(&self) -> Player {
        self.computer.opponent()
    }

    fn mark_for(&self, computer_to_move: bool) -> Player {
        if computer_to_move {
            self.computer
        } else {
            self.human()
        }
    }
}

impl Default for Minimax {
    /// Computer plays O, human plays X
    fn default() -> Self {
        Self::new(Player::O)
    }
}

//! Board validation logic
//!
//! The search itself never validates its input. These checks guard boards
//! that arrive from outside the game loop, such as text given on the
//! command line.

use super::{
    board::{Board, Player},
    lines::LineAnalyzer,
};

impl Board {
    /// Check that the board is reachable by legal alternating play.
    ///
    /// Either side may have opened, so piece counts may differ by one in
    /// either direction.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::InvalidPieceCounts`] when the counts differ by
    /// more than one, and [`crate::Error::InvalidBoard`] when the winning
    /// lines could not have been produced by a single final move.
    pub fn validate(&self) -> Result<(), crate::Error> {
        let count = self.count_pieces();
        if count.x.abs_diff(count.o) > 1 {
            return Err(crate::Error::InvalidPieceCounts {
                x_count: count.x,
                o_count: count.o,
            });
        }

        let x_wins = self.has_won(Player::X);
        let o_wins = self.has_won(Player::O);

        if x_wins && o_wins {
            return Err(crate::Error::InvalidBoard {
                reason: "both players cannot have winning lines".to_string(),
            });
        }

        // The winner moved last, so it cannot be behind on pieces.
        if x_wins && count.x < count.o {
            return Err(crate::Error::InvalidBoard {
                reason: "X has a line but O has moved more often".to_string(),
            });
        }
        if o_wins && count.o < count.x {
            return Err(crate::Error::InvalidBoard {
                reason: "O has a line but X has moved more often".to_string(),
            });
        }

        for player in [Player::X, Player::O] {
            if !self.winning_lines_share_cell(player) {
                return Err(crate::Error::InvalidBoard {
                    reason: format!("{player} has winning lines that do not share a cell"),
                });
            }
        }

        Ok(())
    }

    /// Check if the board is valid according to Tic-Tac-Toe rules
    pub fn is_valid(&self) -> bool {
        self.validate().is_ok()
    }

    /// Check if all winning lines for a player share at least one cell.
    ///
    /// Multiple lines can only be completed by one move through a common cell.
    pub fn winning_lines_share_cell(&self, player: Player) -> bool {
        let lines = LineAnalyzer::completed_lines(self.cells(), player);
        if lines.len() <= 1 {
            return true;
        }

        (0..9).any(|idx| lines.iter().all(|line| line.contains(&idx)))
    }
}

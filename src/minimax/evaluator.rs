use super::{Minimax, Score};
use crate::tictactoe::Board;

impl Minimax {
    /// Value of `board` under optimal play by both sides.
    ///
    /// A line already on the board belongs to the side that just moved, which
    /// is the side NOT named by `computer_to_move`. Every hypothetical mark is
    /// taken back before this returns, so the board is left as it was given.
    pub fn evaluate(&self, board: &mut Board, computer_to_move: bool) -> Score {
        if board.has_winner() {
            return if computer_to_move {
                Score::Loss
            } else {
                Score::Win
            };
        }
        if board.is_full() {
            return Score::Draw;
        }

        let mark = self.mark_for(computer_to_move);
        let children = board.empty_cells().into_iter().map(|coord| {
            let mut child = board.lookahead(coord, mark);
            self.evaluate(&mut child, !computer_to_move)
        });

        let best = if computer_to_move {
            children.max()
        } else {
            children.min()
        };
        // A board that is neither won nor full has at least one child.
        best.unwrap_or(Score::Draw)
    }
}

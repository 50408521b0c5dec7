use rand::{Rng, seq::SliceRandom};
use tracing::{debug, trace};

use super::{Minimax, Score};
use crate::{
    Result,
    tictactoe::{Board, Coord},
};

impl Minimax {
    /// Pick the computer's move on `board`.
    ///
    /// Candidates are tried in an order shuffled by `rng`. The first
    /// candidate reaching the best score wins; later ties never replace it,
    /// so equally good moves are chosen uniformly at random.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::NoValidMoves`] if the board is full and
    /// [`crate::Error::GameOver`] if it already holds a winning line.
    pub fn select_move<R: Rng + ?Sized>(&self, board: &mut Board, rng: &mut R) -> Result<Coord> {
        if board.is_full() {
            return Err(crate::Error::NoValidMoves);
        }
        if board.has_winner() {
            return Err(crate::Error::GameOver);
        }

        let mut candidates = board.empty_cells();
        candidates.shuffle(rng);
        trace!(?candidates, "shuffled candidates");

        let mut best: Option<(Coord, Score)> = None;
        for coord in candidates {
            let score = self.score_candidate(board, coord);
            debug!(%coord, %score, "scored candidate");
            if best.is_none_or(|(_, best_score)| score > best_score) {
                best = Some((coord, score));
            }
        }

        let (coord, score) = best.ok_or(crate::Error::NoValidMoves)?;
        debug!(mark = %self.computer, %coord, %score, "selected move");
        Ok(coord)
    }

    /// Score every empty cell for the computer, in row-major order
    pub fn score_moves(&self, board: &mut Board) -> Vec<(Coord, Score)> {
        board
            .empty_cells()
            .into_iter()
            .map(|coord| (coord, self.score_candidate(board, coord)))
            .collect()
    }

    fn score_candidate(&self, board: &mut Board, coord: Coord) -> Score {
        let mut child = board.lookahead(coord, self.computer);
        self.evaluate(&mut child, false)
    }
}

//! Agent port - anything that can choose a move for one side

use crate::{
    Result,
    tictactoe::{Board, Coord},
};

/// A source of moves for one seat at the table
///
/// Implemented by the minimax computer opponent, the uniform random
/// baseline and the console-driven human player.
///
/// # Examples
///
/// ```
/// use oxo::{
///     pipeline::MinimaxAgent,
///     ports::Agent,
///     tictactoe::{Board, Coord, Player},
/// };
///
/// let mut agent = MinimaxAgent::with_seed("AI".to_string(), Player::O, 42);
/// // XX.
/// // .O.
/// // ...   O must block the top row
/// let board = Board::from_string("XX..O....").unwrap();
/// assert_eq!(agent.select_move(&board).unwrap(), Coord::new(0, 2).unwrap());
/// ```
pub trait Agent {
    /// Choose an empty cell on `board`.
    ///
    /// # Errors
    ///
    /// Returns an error if no move can be produced, e.g. the board is full or
    /// the input source closed.
    fn select_move(&mut self, board: &Board) -> Result<Coord>;

    /// Name used in logs and summaries
    fn name(&self) -> &str;
}

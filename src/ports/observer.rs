//! Observer port - watching a session without coupling it to any output

use crate::{
    Result,
    pipeline::Tally,
    tictactoe::{Player, Round},
};

/// Observer trait for monitoring a session
///
/// # Event Sequence
///
/// 1. `on_session_start(total_rounds)` - once, only for fixed-length runs
/// 2. For each round:
///    - `on_round_start(round_num, first)`
///    - `on_turn(round)` - before every move
///    - `on_round_end(round_num, round, tally)`
/// 3. `on_session_end(tally)` - once at the end
///
/// Every method defaults to doing nothing.
pub trait Observer {
    fn on_session_start(&mut self, _total_rounds: usize) -> Result<()> {
        Ok(())
    }

    fn on_round_start(&mut self, _round_num: usize, _first: Player) -> Result<()> {
        Ok(())
    }

    /// Called with the round as it stands before the next move.
    fn on_turn(&mut self, _round: &Round) -> Result<()> {
        Ok(())
    }

    /// Called after the final move, with the tally already updated.
    fn on_round_end(&mut self, _round_num: usize, _round: &Round, _tally: &Tally) -> Result<()> {
        Ok(())
    }

    fn on_session_end(&mut self, _tally: &Tally) -> Result<()> {
        Ok(())
    }
}

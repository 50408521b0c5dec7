//! Agent implementations (adapters for the [`Agent`] port)

use rand::{SeedableRng, random, rngs::StdRng, seq::IndexedRandom};

use crate::{
    Result,
    minimax::Minimax,
    ports::Agent,
    tictactoe::{Board, Coord, Player},
};

/// Computer opponent backed by exhaustive minimax search
pub struct MinimaxAgent {
    name: String,
    engine: Minimax,
    rng: StdRng,
}

impl MinimaxAgent {
    /// Create a minimax agent playing `mark`
    pub fn new(name: String, mark: Player) -> Self {
        Self::with_seed(name, mark, random())
    }

    /// Create a minimax agent with a deterministic tie-breaking order
    pub fn with_seed(name: String, mark: Player, seed: u64) -> Self {
        Self {
            name,
            engine: Minimax::new(mark),
            rng: StdRng::seed_from_u64(seed),
        }
    }

    pub fn engine(&self) -> Minimax {
        self.engine
    }
}

impl Agent for MinimaxAgent {
    fn select_move(&mut self, board: &Board) -> Result<Coord> {
        // Search on a scratch copy; the caller's board stays borrowed immutably.
        let mut scratch = *board;
        self.engine.select_move(&mut scratch, &mut self.rng)
    }

    fn name(&self) -> &str {
        &self.name
    }
}

/// Uniform random policy (baseline)
pub struct RandomAgent {
    name: String,
    rng: StdRng,
}

impl RandomAgent {
    /// Create a new random agent
    pub fn new(name: String) -> Self {
        Self::with_seed(name, random())
    }

    /// Create a new random agent with a deterministic seed
    pub fn with_seed(name: String, seed: u64) -> Self {
        Self {
            name,
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl Agent for RandomAgent {
    fn select_move(&mut self, board: &Board) -> Result<Coord> {
        board
            .empty_cells()
            .choose(&mut self.rng)
            .copied()
            .ok_or(crate::Error::NoValidMoves)
    }

    fn name(&self) -> &str {
        &self.name
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_random_agent_picks_empty_cell() {
        let mut agent = RandomAgent::with_seed("Random".to_string(), 3);
        let board = Board::from_string("XOXOX.OXO").unwrap();
        assert_eq!(agent.select_move(&board).unwrap(), Coord::new(1, 2).unwrap());
    }

    #[test]
    fn test_random_agent_rejects_full_board() {
        let mut agent = RandomAgent::with_seed("Random".to_string(), 3);
        let board = Board::from_string("XOXXOOOXX").unwrap();
        assert!(matches!(
            agent.select_move(&board),
            Err(crate::Error::NoValidMoves)
        ));
    }

    #[test]
    fn test_minimax_agent_takes_win() {
        // OO.
        // XX.
        // X..   O wins at (0, 2) rather than blocking at (1, 2)
        let mut agent = MinimaxAgent::with_seed("AI".to_string(), Player::O, 99);
        let board = Board::from_string("OO.XX.X..").unwrap();
        assert_eq!(agent.select_move(&board).unwrap(), Coord::new(0, 2).unwrap());
        assert_eq!(agent.name(), "AI");
    }

    #[test]
    fn test_same_seed_same_choice() {
        let board = Board::from_string("....X....").unwrap();
        let mut first = MinimaxAgent::with_seed("a".to_string(), Player::O, 5);
        let mut second = MinimaxAgent::with_seed("b".to_string(), Player::O, 5);
        assert_eq!(
            first.select_move(&board).unwrap(),
            second.select_move(&board).unwrap()
        );
    }
}

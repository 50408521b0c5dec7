//! High-level round management

use serde::{Deserialize, Serialize};

use super::{
    board::{Board, Player},
    coord::Coord,
};

/// A move in the round
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    pub coord: Coord,
    pub player: Player,
}

/// Outcome of a round
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameOutcome {
    Win(Player),
    Draw,
}

/// One round of play, from an empty board to a terminal one
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Round {
    board: Board,
    to_move: Player,
    moves: Vec<Move>,
    outcome: Option<GameOutcome>,
}

impl Round {
    /// Start a round on an empty board
    pub fn new(first: Player) -> Self {
        Round {
            board: Board::new(),
            to_move: first,
            moves: Vec::new(),
            outcome: None,
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    /// The player whose mark goes down next
    pub fn to_move(&self) -> Player {
        self.to_move
    }

    pub fn moves(&self) -> &[Move] {
        &self.moves
    }

    pub fn outcome(&self) -> Option<GameOutcome> {
        self.outcome
    }

    pub fn is_over(&self) -> bool {
        self.outcome.is_some()
    }

    /// Play the side-to-move's mark at `coord`.
    ///
    /// Returns the outcome once the move ends the round. A win belongs to
    /// the player who just moved.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::GameOver`] if the round has already ended and
    /// [`crate::Error::CellOccupied`] if the cell is taken. Either way the
    /// round is left unchanged.
    pub fn play(&mut self, coord: Coord) -> Result<Option<GameOutcome>, crate::Error> {
        if self.outcome.is_some() {
            return Err(crate::Error::GameOver);
        }

        let mover = self.to_move;
        self.board.place(coord, mover)?;
        self.moves.push(Move {
            coord,
            player: mover,
        });

        if self.board.has_winner() {
            self.outcome = Some(GameOutcome::Win(mover));
        } else if self.board.is_full() {
            self.outcome = Some(GameOutcome::Draw);
        }
        self.to_move = mover.opponent();

        Ok(self.outcome)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn play_all(round: &mut Round, cells: &[(usize, usize)]) -> Option<GameOutcome> {
        let mut last = None;
        for &(row, col) in cells {
            last = round.play(Coord::new(row, col).unwrap()).unwrap();
        }
        last
    }

    #[test]
    fn test_player_alternation() {
        let mut round = Round::new(Player::O);
        assert_eq!(round.to_move(), Player::O);

        round.play(Coord::new(0, 0).unwrap()).unwrap();
        assert_eq!(round.to_move(), Player::X);
        assert_eq!(round.moves()[0].player, Player::O);
    }

    #[test]
    fn test_win_goes_to_last_mover() {
        let mut round = Round::new(Player::X);
        let outcome = play_all(&mut round, &[(0, 0), (1, 0), (0, 1), (1, 1), (0, 2)]);

        assert_eq!(outcome, Some(GameOutcome::Win(Player::X)));
        assert!(round.is_over());
        assert!(matches!(
            round.play(Coord::new(2, 2).unwrap()),
            Err(crate::Error::GameOver)
        ));
    }

    #[test]
    fn test_draw() {
        // XOX
        // XOO
        // OXX
        let mut round = Round::new(Player::X);
        let outcome = play_all(
            &mut round,
            &[
                (0, 0),
                (0, 1),
                (0, 2),
                (1, 1),
                (1, 0),
                (1, 2),
                (2, 1),
                (2, 0),
                (2, 2),
            ],
        );

        assert_eq!(outcome, Some(GameOutcome::Draw));
        assert_eq!(round.moves().len(), 9);
    }

    #[test]
    fn test_occupied_cell_leaves_round_unchanged() {
        let mut round = Round::new(Player::X);
        round.play(Coord::new(1, 1).unwrap()).unwrap();

        let err = round.play(Coord::new(1, 1).unwrap()).unwrap_err();
        assert!(matches!(err, crate::Error::CellOccupied { .. }));
        assert_eq!(round.to_move(), Player::O);
        assert_eq!(round.moves().len(), 1);
    }

    #[test]
    fn test_off_board_move_is_not_deserialized() {
        let json = r#"{"coord":{"row":5,"col":0},"player":"X"}"#;
        assert!(serde_json::from_str::<Move>(json).is_err());

        let mut round = Round::new(Player::X);
        round.play(Coord::new(0, 0).unwrap()).unwrap();
        let encoded = serde_json::to_string(&round).unwrap();
        let decoded: Round = serde_json::from_str(&encoded).unwrap();
        assert_eq!(decoded.moves(), round.moves());
    }
}

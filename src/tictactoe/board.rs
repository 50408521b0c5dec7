//! Board representation and basic operations

use std::{
    fmt,
    ops::{Deref, DerefMut},
    str::FromStr,
};

use serde::{Deserialize, Serialize};

use super::{coord::Coord, lines::LineAnalyzer};

/// A cell on the Tic-Tac-Toe board
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Cell {
    #[default]
    Empty,
    X,
    O,
}

impl Cell {
    pub fn to_char(self) -> char {
        match self {
            Cell::Empty => '.',
            Cell::X => 'X',
            Cell::O => 'O',
        }
    }

    pub fn from_char(c: char) -> Option<Cell> {
        match c {
            '.' | ' ' | '_' => Some(Cell::Empty),
            'X' | 'x' => Some(Cell::X),
            'O' | 'o' => Some(Cell::O),
            _ => None,
        }
    }

    /// The player owning this cell, if it is marked
    pub fn player(self) -> Option<Player> {
        match self {
            Cell::X => Some(Player::X),
            Cell::O => Some(Player::O),
            Cell::Empty => None,
        }
    }
}

/// A mark a side places on the board
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Player {
    X,
    O,
}

impl Player {
    /// Get the opponent player
    pub fn opponent(self) -> Player {
        match self {
            Player::X => Player::O,
            Player::O => Player::X,
        }
    }

    /// Convert player to cell
    pub fn to_cell(self) -> Cell {
        match self {
            Player::X => Cell::X,
            Player::O => Cell::O,
        }
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_cell().to_char())
    }
}

impl FromStr for Player {
    type Err = crate::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "X" | "x" => Ok(Player::X),
            "O" | "o" => Ok(Player::O),
            other => Err(crate::Error::InvalidPlayerString {
                player: other.to_string(),
            }),
        }
    }
}

/// The 3x3 grid, stored row-major
///
/// This type implements `Copy` since it is only 9 bytes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Board {
    cells: [Cell; 9],
}

/// Count of each piece type on the board
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct PieceCount {
    pub(crate) x: usize,
    pub(crate) o: usize,
}

impl Board {
    /// Create an empty board
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a board directly from its cells
    pub fn from_cells(cells: [Cell; 9]) -> Self {
        Board { cells }
    }

    /// Parse a board from a string of 9 cell characters.
    ///
    /// Whitespace other than a literal space inside the 9 characters is ignored,
    /// so `"XO.\n.X.\n..O"` and `"XO..X...O"` describe the same board.
    ///
    /// # Errors
    ///
    /// Returns error if the string does not hold exactly 9 cells or any
    /// character is not a valid cell representation.
    pub fn from_string(s: &str) -> Result<Self, crate::Error> {
        let chars: Vec<char> = s
            .chars()
            .filter(|c| *c == ' ' || !c.is_whitespace())
            .collect();
        if chars.len() != 9 {
            return Err(crate::Error::InvalidBoardLength {
                expected: 9,
                got: chars.len(),
                context: s.to_string(),
            });
        }

        let mut cells = [Cell::Empty; 9];
        for (i, &c) in chars.iter().enumerate() {
            cells[i] = Cell::from_char(c).ok_or_else(|| crate::Error::InvalidCellCharacter {
                character: c,
                position: i,
                context: s.to_string(),
            })?;
        }

        Ok(Board { cells })
    }

    pub fn cells(&self) -> &[Cell; 9] {
        &self.cells
    }

    /// Get the cell at a coordinate
    pub fn get(&self, coord: Coord) -> Cell {
        self.cells[coord.index()]
    }

    /// Check if a coordinate is empty
    pub fn is_empty(&self, coord: Coord) -> bool {
        self.get(coord) == Cell::Empty
    }

    /// Write a mark into an empty cell.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::CellOccupied`] if the cell already holds a mark.
    pub fn place(&mut self, coord: Coord, player: Player) -> Result<(), crate::Error> {
        if !self.is_empty(coord) {
            return Err(crate::Error::CellOccupied { coord });
        }
        self.cells[coord.index()] = player.to_cell();
        Ok(())
    }

    /// Temporarily write a mark for lookahead.
    ///
    /// The returned guard dereferences to the board and puts back whatever
    /// the cell held before once it is dropped, on every exit path.
    pub fn lookahead(&mut self, coord: Coord, player: Player) -> Lookahead<'_> {
        let index = coord.index();
        let previous = self.cells[index];
        self.cells[index] = player.to_cell();
        Lookahead {
            board: self,
            index,
            previous,
        }
    }

    /// All empty coordinates in row-major order
    pub fn empty_cells(&self) -> Vec<Coord> {
        Coord::ALL
            .iter()
            .copied()
            .filter(|&coord| self.is_empty(coord))
            .collect()
    }

    /// True iff some row, column or diagonal holds three identical marks
    pub fn has_winner(&self) -> bool {
        LineAnalyzer::winning_line(&self.cells).is_some()
    }

    /// True iff no empty cell remains
    pub fn is_full(&self) -> bool {
        !self.cells.contains(&Cell::Empty)
    }

    /// Check if the board is terminal (win or full)
    pub fn is_terminal(&self) -> bool {
        self.has_winner() || self.is_full()
    }

    /// Check if a player has won
    pub fn has_won(&self, player: Player) -> bool {
        LineAnalyzer::has_won(&self.cells, player)
    }

    /// Get the owner of the first winning line, if there is one
    pub fn winner(&self) -> Option<Player> {
        LineAnalyzer::winning_line(&self.cells).and_then(|line| self.cells[line[0]].player())
    }

    /// Coordinates of the first winning line
    pub fn winning_line(&self) -> Option<[Coord; 3]> {
        let line = LineAnalyzer::winning_line(&self.cells)?;
        Some(line.map(|idx| Coord::ALL[idx]))
    }

    /// Count the number of occupied cells on the board
    pub fn occupied_count(&self) -> usize {
        let count = self.count_pieces();
        count.x + count.o
    }

    pub(crate) fn count_pieces(&self) -> PieceCount {
        let mut count = PieceCount { x: 0, o: 0 };
        for cell in &self.cells {
            match cell {
                Cell::X => count.x += 1,
                Cell::O => count.o += 1,
                Cell::Empty => {}
            }
        }
        count
    }

    /// Swap X and O pieces on the board.
    #[must_use = "swap_marks returns a new board; the original is unchanged"]
    pub fn swap_marks(&self) -> Self {
        let mut swapped = *self;
        for cell in &mut swapped.cells {
            *cell = match cell {
                Cell::X => Cell::O,
                Cell::O => Cell::X,
                Cell::Empty => Cell::Empty,
            };
        }
        swapped
    }

    /// Compact 9-character encoding, the inverse of [`Board::from_string`]
    pub fn encode(&self) -> String {
        self.cells.iter().map(|&c| c.to_char()).collect()
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, &cell) in self.cells.iter().enumerate() {
            write!(f, "{}", cell.to_char())?;
            if (i + 1).is_multiple_of(3) && i < 8 {
                writeln!(f)?;
            }
        }
        Ok(())
    }
}

/// A hypothetical move held on a borrowed board.
///
/// Created by [`Board::lookahead`]. Restores the cell on drop.
#[derive(Debug)]
pub struct Lookahead<'a> {
    board: &'a mut Board,
    index: usize,
    previous: Cell,
}

impl Deref for Lookahead<'_> {
    type Target = Board;

    fn deref(&self) -> &Board {
        self.board
    }
}

impl DerefMut for Lookahead<'_> {
    fn deref_mut(&mut self) -> &mut Board {
        self.board
    }
}

impl Drop for Lookahead<'_> {
    fn drop(&mut self) {
        self.board.cells[self.index] = self.previous;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn at(row: usize, col: usize) -> Coord {
        Coord::new(row, col).unwrap()
    }

    #[test]
    fn test_new_board() {
        let board = Board::new();
        assert!(board.cells().iter().all(|&c| c == Cell::Empty));
        assert_eq!(board.empty_cells().len(), 9);
        assert!(!board.has_winner());
        assert!(!board.is_full());
    }

    #[test]
    fn test_place() {
        let mut board = Board::new();
        board.place(at(1, 1), Player::X).unwrap();
        assert_eq!(board.get(at(1, 1)), Cell::X);

        let err = board.place(at(1, 1), Player::O).unwrap_err();
        assert!(err.to_string().contains("occupied"));
        assert_eq!(board.get(at(1, 1)), Cell::X);
    }

    #[test]
    fn test_lookahead_restores_on_drop() {
        let mut board = Board::from_string("X...O....").unwrap();
        let before = board;
        {
            let child = board.lookahead(at(2, 2), Player::X);
            assert_eq!(child.get(at(2, 2)), Cell::X);
        }
        assert_eq!(board, before);
    }

    #[test]
    fn test_nested_lookahead_restores_each_level() {
        let mut board = Board::new();
        {
            let mut outer = board.lookahead(at(0, 0), Player::X);
            {
                let inner = outer.lookahead(at(0, 1), Player::O);
                assert_eq!(inner.occupied_count(), 2);
            }
            assert_eq!(outer.occupied_count(), 1);
        }
        assert_eq!(board, Board::new());
    }

    #[test]
    fn test_winner_detection() {
        let board = Board::from_string("OOOXX.X..").unwrap();
        assert!(board.has_winner());
        assert_eq!(board.winner(), Some(Player::O));
        assert_eq!(board.winning_line(), Some([at(0, 0), at(0, 1), at(0, 2)]));
    }

    #[test]
    fn test_draw_detection() {
        // XOX
        // XOO
        // OXX
        let board = Board::from_string("XOXXOOOXX").unwrap();
        assert!(board.is_full());
        assert!(!board.has_winner());
        assert_eq!(board.winner(), None);
        assert!(board.is_terminal());
    }

    #[test]
    fn test_from_string() {
        let board = Board::from_string("XOX......").unwrap();
        assert_eq!(board.get(at(0, 0)), Cell::X);
        assert_eq!(board.get(at(0, 1)), Cell::O);
        assert_eq!(board.get(at(0, 2)), Cell::X);

        let multiline = Board::from_string("XOX\n...\n...").unwrap();
        assert_eq!(multiline, board);

        assert!(Board::from_string("XO").is_err());
        assert!(Board::from_string("XOX.......").is_err());
        assert!(Board::from_string("XOZ......").is_err());
    }

    #[test]
    fn test_zero_is_not_a_mark() {
        let err = Board::from_string("X0.......").unwrap_err();
        assert!(matches!(
            err,
            crate::Error::InvalidCellCharacter {
                character: '0',
                position: 1,
                ..
            }
        ));
    }

    #[test]
    fn test_encode() {
        let board = Board::from_string("XO.......").unwrap();
        assert_eq!(board.encode(), "XO.......");
        assert_eq!(Board::new().encode(), ".........");
    }

    #[test]
    fn test_swap_marks() {
        let board = Board::from_string("XO..X....").unwrap();
        let swapped = board.swap_marks();
        assert_eq!(swapped.encode(), "OX..O....");
        assert_eq!(swapped.swap_marks(), board);
    }

    #[test]
    fn test_player_from_str() {
        assert_eq!("x".parse::<Player>().unwrap(), Player::X);
        assert_eq!(" O ".parse::<Player>().unwrap(), Player::O);
        assert!("Z".parse::<Player>().is_err());
    }

    #[test]
    fn test_display() {
        let board = Board::from_string("XOX.O.X..").unwrap();
        let display = format!("{board}");
        assert_eq!(display, "XOX\n.O.\nX..");
    }
}

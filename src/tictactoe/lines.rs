//! Winning line analysis for Tic-Tac-Toe

use super::{Cell, Player};

/// Winning line indices on the 3x3 board
pub const WINNING_LINES: [[usize; 3]; 8] = [
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8], // rows
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8], // columns
    [0, 4, 8],
    [2, 4, 6], // diagonals
];

/// Utility for analyzing winning lines in Tic-Tac-Toe
pub struct LineAnalyzer;

impl LineAnalyzer {
    /// First line holding three identical marks, if any
    pub fn winning_line(cells: &[Cell; 9]) -> Option<[usize; 3]> {
        WINNING_LINES
            .iter()
            .find(|line| Self::is_uniform(cells, line))
            .copied()
    }

    /// Check if a player has won by having three in a row
    pub fn has_won(cells: &[Cell; 9], player: Player) -> bool {
        let target = player.to_cell();
        WINNING_LINES
            .iter()
            .any(|line| line.iter().all(|&idx| cells[idx] == target))
    }

    /// Count the lines a player has completed
    pub fn completed_lines(cells: &[Cell; 9], player: Player) -> Vec<[usize; 3]> {
        let target = player.to_cell();
        WINNING_LINES
            .iter()
            .filter(|line| line.iter().all(|&idx| cells[idx] == target))
            .copied()
            .collect()
    }

    fn is_uniform(cells: &[Cell; 9], line: &[usize; 3]) -> bool {
        let first = cells[line[0]];
        first != Cell::Empty && line[1..].iter().all(|&idx| cells[idx] == first)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_has_won_horizontal() {
        let mut cells = [Cell::Empty; 9];
        cells[0] = Cell::X;
        cells[1] = Cell::X;
        cells[2] = Cell::X;

        assert!(LineAnalyzer::has_won(&cells, Player::X));
        assert!(!LineAnalyzer::has_won(&cells, Player::O));
        assert_eq!(LineAnalyzer::winning_line(&cells), Some([0, 1, 2]));
    }

    #[test]
    fn test_has_won_vertical() {
        let mut cells = [Cell::Empty; 9];
        cells[0] = Cell::O;
        cells[3] = Cell::O;
        cells[6] = Cell::O;

        assert!(LineAnalyzer::has_won(&cells, Player::O));
        assert!(!LineAnalyzer::has_won(&cells, Player::X));
    }

    #[test]
    fn test_has_won_diagonal() {
        let mut cells = [Cell::Empty; 9];
        cells[2] = Cell::X;
        cells[4] = Cell::X;
        cells[6] = Cell::X;

        assert!(LineAnalyzer::has_won(&cells, Player::X));
        assert_eq!(LineAnalyzer::winning_line(&cells), Some([2, 4, 6]));
    }

    #[test]
    fn test_empty_line_is_not_a_win() {
        let cells = [Cell::Empty; 9];
        assert_eq!(LineAnalyzer::winning_line(&cells), None);
    }

    #[test]
    fn test_mixed_line_is_not_a_win() {
        let mut cells = [Cell::Empty; 9];
        cells[0] = Cell::X;
        cells[1] = Cell::O;
        cells[2] = Cell::X;
        assert_eq!(LineAnalyzer::winning_line(&cells), None);
    }

    #[test]
    fn test_completed_lines_counts_shared_corner() {
        // XXX
        // X..
        // X..
        let mut cells = [Cell::Empty; 9];
        for idx in [0, 1, 2, 3, 6] {
            cells[idx] = Cell::X;
        }
        assert_eq!(LineAnalyzer::completed_lines(&cells, Player::X).len(), 2);
    }
}

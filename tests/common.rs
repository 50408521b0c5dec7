//! Common test utilities for the oxo test suite.

#![allow(dead_code)]

use std::{
    io::Write,
    sync::{Arc, Mutex},
};

use oxo::tictactoe::{Board, Coord, Player};
use rand::{Rng, SeedableRng, rngs::StdRng, seq::IndexedRandom};

/// Parse a board, panicking on malformed test input.
pub fn board(s: &str) -> Board {
    Board::from_string(s).unwrap_or_else(|e| panic!("bad test board '{s}': {e}"))
}

pub fn coord(row: usize, col: usize) -> Coord {
    Coord::new(row, col).unwrap()
}

/// Collect every position met along random playouts, terminal ones included.
///
/// Marks alternate starting from a random side, so each board is reachable
/// by legal play.
pub fn random_positions(seed: u64, playouts: usize) -> Vec<Board> {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut positions = Vec::new();
    for _ in 0..playouts {
        let mut board = Board::new();
        let mut mover = if rng.random_bool(0.5) {
            Player::X
        } else {
            Player::O
        };
        positions.push(board);
        while !board.is_terminal() {
            let empty = board.empty_cells();
            let Some(&next) = empty.choose(&mut rng) else {
                break;
            };
            board.place(next, mover).unwrap();
            mover = mover.opponent();
            positions.push(board);
        }
    }
    positions
}

/// A `Write` sink whose contents stay readable after it is boxed away.
#[derive(Clone, Default)]
pub struct SharedBuffer(Arc<Mutex<Vec<u8>>>);

impl SharedBuffer {
    pub fn contents(&self) -> String {
        String::from_utf8(self.0.lock().unwrap().clone()).unwrap()
    }
}

impl Write for SharedBuffer {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> std::io::Result<()> {
        Ok(())
    }
}

//! Board module - manages the game grid
//!
//! The board is a 3x3 grid where each cell can be empty or hold a mark.
//! Uses a flat array, row-major (`row * 3 + col`), so snapshots are a plain copy.

use arrayvec::ArrayVec;

use crate::types::{Cell, Mark, BOARD_CELLS, BOARD_SIDE};

/// The game board - 3 columns x 3 rows using flat array storage
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Board {
    cells: [Cell; BOARD_CELLS],
}

impl Board {
    /// Create a new empty board
    pub fn new() -> Self {
        Self {
            cells: [None; BOARD_CELLS],
        }
    }

    /// Build a board from raw cells. Mostly useful for tests and benches.
    pub fn from_cells(cells: [Cell; BOARD_CELLS]) -> Self {
        Self { cells }
    }

    /// Get cell at `index`
    /// Returns None if out of bounds
    pub fn get(&self, index: usize) -> Option<Cell> {
        self.cells.get(index).copied()
    }

    /// Place `mark` at `index`.
    /// Returns false if out of bounds or already occupied.
    pub fn place(&mut self, index: usize, mark: Mark) -> bool {
        match self.cells.get_mut(index) {
            Some(slot @ None) => {
                *slot = Some(mark);
                true
            }
            _ => false,
        }
    }

    /// Check if `index` is within bounds and empty
    pub fn is_empty_at(&self, index: usize) -> bool {
        matches!(self.get(index), Some(None))
    }

    /// Check if `index` is within bounds and holds a mark
    pub fn is_occupied(&self, index: usize) -> bool {
        matches!(self.get(index), Some(Some(_)))
    }

    /// Check if every cell holds a mark
    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|c| c.is_some())
    }

    /// Number of marks placed so far
    pub fn filled_count(&self) -> usize {
        self.cells.iter().filter(|c| c.is_some()).count()
    }

    /// Indices of empty cells, ascending. Zero-allocation.
    pub fn empty_cells(&self) -> ArrayVec<u8, BOARD_CELLS> {
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, c)| c.is_none())
            .map(|(i, _)| i as u8)
            .collect()
    }

    /// Clear every cell
    pub fn clear(&mut self) {
        self.cells = [None; BOARD_CELLS];
    }

    pub fn cells(&self) -> &[Cell; BOARD_CELLS] {
        &self.cells
    }

    /// `(row, col)` for a board index
    pub fn row_col(index: usize) -> (u8, u8) {
        let side = BOARD_SIDE as usize;
        ((index / side) as u8, (index % side) as u8)
    }

    /// Board index for `(row, col)`, or None if out of bounds
    pub fn index_of(row: u8, col: u8) -> Option<usize> {
        if row >= BOARD_SIDE || col >= BOARD_SIDE {
            return None;
        }
        Some(row as usize * BOARD_SIDE as usize + col as usize)
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

//! Square board storage.

use crate::error::{MoveError, SnapshotError};
use crate::types::{Cell, Player};
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Standard board side length.
pub const DEFAULT_BOARD_SIZE: usize = 15;

/// N×N five-in-a-row board.
///
/// The side length is fixed at construction. Cells are stored in row-major
/// order alongside a count of occupied cells, so [`Board::is_full`] does not
/// rescan the grid.
///
/// Deserialization checks that the cells cover the grid exactly and recounts
/// the occupied cells rather than trusting the stored count.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "BoardRepr")]
pub struct Board {
    size: usize,
    cells: Vec<Cell>,
    occupied: usize,
}

impl Board {
    /// Creates an empty board with the given side length.
    ///
    /// # Panics
    ///
    /// Panics if `size * size` overflows `usize`. Any board that fits in
    /// memory is far below that limit.
    #[instrument]
    pub fn new(size: usize) -> Self {
        let Some(len) = size.checked_mul(size) else {
            panic!("board size {size} is too large");
        };
        Self {
            size,
            cells: vec![Cell::Empty; len],
            occupied: 0,
        }
    }

    /// Side length of the board.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Number of non-empty cells.
    pub fn occupied(&self) -> usize {
        self.occupied
    }

    /// Checks if `(row, col)` lies on the board.
    pub fn contains(&self, row: isize, col: isize) -> bool {
        self.index(row, col).is_some()
    }

    /// Gets the cell at `(row, col)`.
    ///
    /// # Errors
    ///
    /// Returns [`MoveError::OutOfBounds`] if either index is outside `[0, size)`.
    pub fn get(&self, row: isize, col: isize) -> Result<Cell, MoveError> {
        self.index(row, col)
            .map(|i| self.cells[i])
            .ok_or(MoveError::OutOfBounds { row, col })
    }

    /// Gets an in-range cell, `None` when off the board.
    pub fn cell(&self, row: isize, col: isize) -> Option<Cell> {
        self.index(row, col).map(|i| self.cells[i])
    }

    /// Places a stone.
    ///
    /// The caller guarantees the position is on the board and empty; the
    /// validator checks both before the controller gets here.
    pub fn set(&mut self, row: usize, col: usize, player: Player) {
        debug_assert!(row < self.size && col < self.size, "set() out of bounds");
        let i = row * self.size + col;
        debug_assert!(self.cells[i].is_empty(), "set() on an occupied cell");
        self.cells[i] = Cell::from(player);
        self.occupied += 1;
    }

    /// True iff no empty cell remains.
    pub fn is_full(&self) -> bool {
        self.occupied == self.cells.len()
    }

    /// Clears every cell, keeping the size.
    #[instrument(skip(self), fields(size = self.size))]
    pub fn reset(&mut self) {
        self.cells.fill(Cell::Empty);
        self.occupied = 0;
    }

    /// Iterates over rows, top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = &[Cell]> {
        // chunks() panics on 0; an empty board simply has no rows.
        self.cells.chunks(self.size.max(1))
    }

    /// Formats the board as a human-readable grid (`.` empty, `X` black, `O` white).
    pub fn display(&self) -> String {
        let mut result = String::with_capacity(self.cells.len() * 2);
        for (r, row) in self.rows().enumerate() {
            if r > 0 {
                result.push('\n');
            }
            for (c, cell) in row.iter().enumerate() {
                if c > 0 {
                    result.push(' ');
                }
                result.push(match cell {
                    Cell::Empty => '.',
                    Cell::Black => 'X',
                    Cell::White => 'O',
                });
            }
        }
        result
    }

    fn index(&self, row: isize, col: isize) -> Option<usize> {
        let row = usize::try_from(row).ok()?;
        let col = usize::try_from(col).ok()?;
        (row < self.size && col < self.size).then(|| row * self.size + col)
    }
}

/// Wire form of [`Board`], checked before it becomes one.
#[derive(Deserialize)]
struct BoardRepr {
    size: usize,
    cells: Vec<Cell>,
}

impl TryFrom<BoardRepr> for Board {
    type Error = SnapshotError;

    fn try_from(repr: BoardRepr) -> Result<Self, Self::Error> {
        let BoardRepr { size, cells } = repr;
        let expected = size
            .checked_mul(size)
            .ok_or(SnapshotError::SizeTooLarge { size })?;
        if cells.len() != expected {
            return Err(SnapshotError::CellCount {
                size,
                expected,
                found: cells.len(),
            });
        }
        let occupied = cells.iter().filter(|c| !c.is_empty()).count();
        Ok(Self {
            size,
            cells,
            occupied,
        })
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new(DEFAULT_BOARD_SIZE)
    }
}

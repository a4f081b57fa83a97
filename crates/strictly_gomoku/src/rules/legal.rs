//! Move legality as composable preconditions.
//!
//! Each precondition is a unit struct with a `check` function. They are kept
//! separate so callers (and tests) can reason about one rule at a time;
//! [`LegalMove`] composes them in the order rejections are reported.

use crate::board::Board;
use crate::error::MoveError;
use crate::types::GameStatus;
use tracing::instrument;

/// Precondition: the position lies on the board.
pub struct InBounds;

impl InBounds {
    /// Returns the in-range `(row, col)` as unsigned indices.
    pub fn check(board: &Board, row: isize, col: isize) -> Result<(usize, usize), MoveError> {
        if board.contains(row, col) {
            Ok((row as usize, col as usize))
        } else {
            Err(MoveError::OutOfBounds { row, col })
        }
    }
}

/// Precondition: the target intersection is empty.
pub struct CellIsEmpty;

impl CellIsEmpty {
    /// `(row, col)` must already be known to be in bounds.
    pub fn check(board: &Board, row: usize, col: usize) -> Result<(), MoveError> {
        match board.cell(row as isize, col as isize) {
            Some(cell) if cell.is_empty() => Ok(()),
            _ => Err(MoveError::CellOccupied { row, col }),
        }
    }
}

/// Precondition: the game is still accepting moves.
pub struct GameNotOver;

impl GameNotOver {
    /// Fails once the status is terminal.
    pub fn check(status: GameStatus) -> Result<(), MoveError> {
        if status.is_terminal() {
            Err(MoveError::GameOver)
        } else {
            Ok(())
        }
    }
}

/// Composite precondition: bounds, then occupancy, then game over.
pub struct LegalMove;

impl LegalMove {
    /// Validates all preconditions, returning the unsigned position on success.
    #[instrument(skip(board), fields(size = board.size()))]
    pub fn check(
        board: &Board,
        status: GameStatus,
        row: isize,
        col: isize,
    ) -> Result<(usize, usize), MoveError> {
        let (r, c) = InBounds::check(board, row, col)?;
        CellIsEmpty::check(board, r, c)?;
        GameNotOver::check(status)?;
        Ok((r, c))
    }
}

/// Checks whether a move at `(row, col)` is legal. Pure; never mutates.
///
/// # Errors
///
/// [`MoveError::OutOfBounds`], [`MoveError::CellOccupied`] or
/// [`MoveError::GameOver`], reported in that order of precedence.
pub fn validate(board: &Board, status: GameStatus, row: isize, col: isize) -> Result<(), MoveError> {
    LegalMove::check(board, status, row, col).map(|_| ())
}

//! Game rules for five-in-a-row.
//!
//! Pure functions over a [`Board`](crate::Board): move legality and win
//! detection. Kept apart from board storage and the controller so each rule
//! can be tested on hand-built positions.

pub mod legal;
pub mod win;

pub use legal::{validate, CellIsEmpty, GameNotOver, InBounds, LegalMove};
pub use win::{check_win, run_length, winning_orientation, Orientation, WIN_LENGTH};

//! Five-in-a-row (Gomoku) game engine.
//!
//! Headless and synchronous: board storage, move legality, win detection and
//! the turn/status state machine. Display and input live with the caller,
//! connected through the [`Renderer`] and [`StatusSink`] traits and the pure
//! geometry in [`layout`].
//!
//! # Example
//!
//! ```
//! use strictly_gomoku::{GameController, GameStatus, Player};
//!
//! let mut game = GameController::new();
//! for col in 0..4 {
//!     game.apply_move(7, col).unwrap();
//!     game.apply_move(8, col).unwrap();
//! }
//! game.apply_move(7, 4).unwrap();
//! assert_eq!(game.status(), GameStatus::Won(Player::Black));
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod board;
mod error;
mod game;
pub mod layout;
pub mod rules;
mod session;
mod turn;
mod types;

pub use board::{Board, DEFAULT_BOARD_SIZE};
pub use error::{MoveError, SnapshotError};
pub use game::{GameController, GameState};
pub use layout::{star_points, LayoutMetrics};
pub use rules::{check_win, validate, Orientation, WIN_LENGTH};
pub use session::{Notice, Renderer, Session, StatusSink};
pub use turn::TurnManager;
pub use types::{Cell, GameStatus, Placement, Player};

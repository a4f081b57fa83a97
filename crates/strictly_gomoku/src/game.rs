//! Game state and the controller that owns it.

use crate::board::{Board, DEFAULT_BOARD_SIZE};
use crate::error::{MoveError, SnapshotError};
use crate::rules::{check_win, LegalMove};
use crate::turn::TurnManager;
use crate::types::{Cell, GameStatus, Placement, Player};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument};

/// Complete game state.
///
/// Only [`GameController`] mutates it; everyone else gets shared references.
/// A deserialized state must have one stone per counted move, with Black
/// ahead of White by at most one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "GameStateRepr")]
pub struct GameState {
    board: Board,
    turn: TurnManager,
    move_count: usize,
    status: GameStatus,
}

impl GameState {
    /// Fresh game: empty board, Black to move, in progress.
    pub fn new(size: usize) -> Self {
        Self {
            board: Board::new(size),
            turn: TurnManager::new(),
            move_count: 0,
            status: GameStatus::InProgress,
        }
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the player to move.
    pub fn current_player(&self) -> Player {
        self.turn.current()
    }

    /// Number of moves applied so far.
    pub fn move_count(&self) -> usize {
        self.move_count
    }

    /// Returns the game status.
    pub fn status(&self) -> GameStatus {
        self.status
    }

    /// Replaces the whole state with a fresh game, reusing the board's storage.
    fn reset(&mut self) {
        let mut board = std::mem::take(&mut self.board);
        board.reset();
        *self = Self {
            board,
            turn: TurnManager::new(),
            move_count: 0,
            status: GameStatus::InProgress,
        };
    }
}

#[derive(Deserialize)]
struct GameStateRepr {
    board: Board,
    turn: TurnManager,
    move_count: usize,
    status: GameStatus,
}

impl TryFrom<GameStateRepr> for GameState {
    type Error = SnapshotError;

    fn try_from(repr: GameStateRepr) -> Result<Self, Self::Error> {
        let occupied = repr.board.occupied();
        if repr.move_count != occupied {
            return Err(SnapshotError::MoveCount {
                move_count: repr.move_count,
                occupied,
            });
        }
        let black = repr
            .board
            .rows()
            .flatten()
            .filter(|&&c| c == Cell::Black)
            .count();
        let white = occupied - black;
        if black != white && black != white + 1 {
            return Err(SnapshotError::Unbalanced { black, white });
        }
        Ok(Self {
            board: repr.board,
            turn: repr.turn,
            move_count: repr.move_count,
            status: repr.status,
        })
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new(DEFAULT_BOARD_SIZE)
    }
}

/// Five-in-a-row game engine.
///
/// Single entry point for play: [`GameController::apply_move`]. A move either
/// applies completely or is rejected with the state untouched.
#[derive(Debug, Clone, Default)]
pub struct GameController {
    state: GameState,
}

impl GameController {
    /// Creates a new game on the standard 15×15 board.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a new game with a custom board size.
    #[instrument]
    pub fn with_size(size: usize) -> Self {
        Self {
            state: GameState::new(size),
        }
    }

    /// Returns the current game state.
    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        self.state.board()
    }

    /// Returns the player to move.
    pub fn current_player(&self) -> Player {
        self.state.current_player()
    }

    /// Returns the game status.
    pub fn status(&self) -> GameStatus {
        self.state.status()
    }

    /// Number of moves applied so far.
    pub fn move_count(&self) -> usize {
        self.state.move_count()
    }

    /// Places the current player's stone at `(row, col)`.
    ///
    /// On success the board, move count and status are updated and, if the
    /// game continues, the turn passes to the opponent. A winning or drawing
    /// move leaves the mover as current player.
    ///
    /// # Errors
    ///
    /// Returns the first failed precondition (bounds, occupancy, game over).
    /// Nothing is changed in that case.
    #[instrument(skip(self), fields(player = ?self.state.current_player()))]
    pub fn apply_move(&mut self, row: isize, col: isize) -> Result<Placement, MoveError> {
        let (r, c) = LegalMove::check(&self.state.board, self.state.status, row, col)
            .inspect_err(|e| debug!(error = %e, "Move rejected"))?;

        let player = self.state.turn.current();
        self.state.board.set(r, c, player);
        self.state.move_count += 1;

        if check_win(&self.state.board, r, c, player) {
            self.state.status = GameStatus::Won(player);
            info!(%player, moves = self.state.move_count, "Game won");
        } else if self.state.board.is_full() {
            self.state.status = GameStatus::Draw;
            info!(moves = self.state.move_count, "Board full, game drawn");
        } else {
            self.state.turn.switch_player();
        }

        Ok(Placement {
            row: r,
            col: c,
            player,
            move_number: self.state.move_count,
            status: self.state.status,
        })
    }

    /// Starts over: empty board of the same size, Black to move.
    #[instrument(skip(self), fields(previous = ?self.state.status))]
    pub fn reset(&mut self) {
        self.state.reset();
        info!(size = self.state.board.size(), "Game reset");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_game() {
        let game = GameController::new();
        assert_eq!(game.board().size(), 15);
        assert_eq!(game.current_player(), Player::Black);
        assert_eq!(game.status(), GameStatus::InProgress);
        assert_eq!(game.move_count(), 0);
    }

    #[test]
    fn test_move_switches_player() {
        let mut game = GameController::new();
        let placement = game.apply_move(7, 7).expect("legal move");
        assert_eq!(placement.player, Player::Black);
        assert_eq!(placement.move_number, 1);
        assert_eq!(placement.status, GameStatus::InProgress);
        assert_eq!(game.board().get(7, 7), Ok(Cell::Black));
        assert_eq!(game.current_player(), Player::White);
    }

    #[test]
    fn test_occupied_move_is_noop() {
        let mut game = GameController::new();
        game.apply_move(7, 7).expect("legal move");
        let before = game.state().clone();

        assert_eq!(
            game.apply_move(7, 7),
            Err(MoveError::CellOccupied { row: 7, col: 7 })
        );
        assert_eq!(game.state(), &before);
    }

    #[test]
    fn test_win_keeps_winner_to_move() {
        let mut game = GameController::new();
        for col in 0..4 {
            game.apply_move(0, col).expect("black");
            game.apply_move(1, col).expect("white");
        }
        let placement = game.apply_move(0, 4).expect("winning move");
        assert_eq!(placement.status, GameStatus::Won(Player::Black));
        assert_eq!(game.status(), GameStatus::Won(Player::Black));
        assert_eq!(game.current_player(), Player::Black);
        assert_eq!(game.apply_move(5, 5), Err(MoveError::GameOver));
        assert_eq!(game.move_count(), 9);
    }

    #[test]
    fn test_small_board_draw() {
        // Five in a row is impossible on a 3×3 board, so filling it draws.
        let mut game = GameController::with_size(3);
        for i in 0..9 {
            game.apply_move(i / 3, i % 3).expect("legal move");
        }
        assert_eq!(game.status(), GameStatus::Draw);
        assert!(game.board().is_full());
    }

    #[test]
    fn test_state_repr_checks_counts() {
        let mut board = Board::new(5);
        board.set(0, 0, Player::Black);
        board.set(0, 1, Player::White);
        let repr = |board: &Board, move_count| GameStateRepr {
            board: board.clone(),
            turn: TurnManager::new(),
            move_count,
            status: GameStatus::InProgress,
        };

        assert!(GameState::try_from(repr(&board, 2)).is_ok());
        assert_eq!(
            GameState::try_from(repr(&board, 0)),
            Err(SnapshotError::MoveCount {
                move_count: 0,
                occupied: 2
            })
        );

        board.set(1, 0, Player::White);
        assert_eq!(
            GameState::try_from(repr(&board, 3)),
            Err(SnapshotError::Unbalanced { black: 1, white: 2 })
        );
    }

    #[test]
    fn test_reset() {
        let mut game = GameController::with_size(9);
        game.apply_move(4, 4).expect("legal move");
        game.reset();
        assert_eq!(game.state(), &GameState::new(9));
    }
}

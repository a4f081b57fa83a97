//! A game wired to its display collaborators.
//!
//! The engine never draws or prints. A [`Session`] owns the
//! [`GameController`] and pushes its outputs to a [`Renderer`] and a
//! [`StatusSink`] after every state change. Neither collaborator can reach
//! back into the game.

use crate::board::Board;
use crate::error::MoveError;
use crate::game::GameController;
use crate::layout::LayoutMetrics;
use crate::types::{GameStatus, Placement, Player};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// Draws the board. Receives a read-only view after each successful move or reset.
pub trait Renderer {
    /// Redraws everything for the given board and status.
    fn render(&mut self, board: &Board, status: GameStatus);
}

/// Receives status notices (whose turn, who won, draw).
pub trait StatusSink {
    /// Called once per state change.
    fn notify(&mut self, notice: Notice);
}

/// What a status display should currently say. Formatting is up to the sink.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Notice {
    /// Game continues; this player moves next.
    Turn(Player),
    /// This player completed five in a row.
    Won(Player),
    /// Board is full with no winner.
    Draw,
}

impl Notice {
    /// Derives the notice from the game status and player to move.
    pub fn from_state(status: GameStatus, current: Player) -> Self {
        match status {
            GameStatus::InProgress => Notice::Turn(current),
            GameStatus::Won(player) => Notice::Won(player),
            GameStatus::Draw => Notice::Draw,
        }
    }
}

/// A game plus the collaborators observing it.
#[derive(Debug)]
pub struct Session<R, S> {
    controller: GameController,
    renderer: R,
    sink: S,
}

impl<R: Renderer, S: StatusSink> Session<R, S> {
    /// Wraps a controller and publishes its initial state.
    pub fn new(controller: GameController, renderer: R, sink: S) -> Self {
        let mut session = Self {
            controller,
            renderer,
            sink,
        };
        session.publish();
        session
    }

    /// The game being played.
    pub fn controller(&self) -> &GameController {
        &self.controller
    }

    /// The renderer.
    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    /// The status sink.
    pub fn sink(&self) -> &S {
        &self.sink
    }

    /// Plays at `(row, col)`; collaborators hear about it only on success.
    #[instrument(skip(self))]
    pub fn play(&mut self, row: isize, col: isize) -> Result<Placement, MoveError> {
        let placement = self.controller.apply_move(row, col)?;
        self.publish();
        Ok(placement)
    }

    /// Plays at the intersection nearest to a screen point.
    pub fn play_at(
        &mut self,
        x: f64,
        y: f64,
        metrics: &LayoutMetrics,
    ) -> Result<Placement, MoveError> {
        let (row, col) = metrics.to_grid(x, y);
        debug!(x, y, row, col, "Mapped screen point to grid");
        self.play(row, col)
    }

    /// Starts a new game and redraws.
    pub fn reset(&mut self) {
        self.controller.reset();
        self.publish();
    }

    fn publish(&mut self) {
        let status = self.controller.status();
        self.renderer.render(self.controller.board(), status);
        self.sink
            .notify(Notice::from_state(status, self.controller.current_player()));
    }
}

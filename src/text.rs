//! Plain-text collaborators: board printing, status lines, move parsing.

use derive_more::{Display, Error};
use std::io::Write;
use strictly_gomoku::{Board, GameStatus, Notice, Renderer, StatusSink};
use tracing::{instrument, warn};

/// Human-readable status line for a notice.
pub fn describe(notice: Notice) -> String {
    match notice {
        Notice::Turn(player) => format!("{}'s turn", player),
        Notice::Won(player) => format!("{} wins!", player),
        Notice::Draw => "Draw! The board is full.".to_string(),
    }
}

/// Prints the board as text after every change.
#[derive(Debug)]
pub struct TextRenderer<W> {
    out: W,
}

impl<W: Write> TextRenderer<W> {
    /// Renders into `out`.
    pub fn new(out: W) -> Self {
        Self { out }
    }

    /// Returns the underlying writer.
    pub fn get_ref(&self) -> &W {
        &self.out
    }
}

impl<W: Write> Renderer for TextRenderer<W> {
    fn render(&mut self, board: &Board, _status: GameStatus) {
        if let Err(e) = writeln!(self.out, "{}\n", board.display()) {
            warn!(error = %e, "Failed to write board");
        }
    }
}

/// Writes one line per status notice.
#[derive(Debug)]
pub struct TextStatus<W> {
    out: W,
}

impl<W: Write> TextStatus<W> {
    /// Writes notices into `out`.
    pub fn new(out: W) -> Self {
        Self { out }
    }

    /// Returns the underlying writer.
    pub fn get_ref(&self) -> &W {
        &self.out
    }
}

impl<W: Write> StatusSink for TextStatus<W> {
    fn notify(&mut self, notice: Notice) {
        if let Err(e) = writeln!(self.out, "{}", describe(notice)) {
            warn!(error = %e, "Failed to write status");
        }
    }
}

/// A `row,col` argument that could not be read.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
#[display("Invalid move '{}': expected ROW,COL", input)]
pub struct MoveParseError {
    /// The offending argument.
    pub input: String,
}

/// Parses `row,col` (signed; off-board values are the engine's to reject).
#[instrument]
pub fn parse_move(input: &str) -> Result<(isize, isize), MoveParseError> {
    let err = || MoveParseError {
        input: input.to_string(),
    };
    let (row, col) = input.split_once(',').ok_or_else(err)?;
    let row = row.trim().parse().map_err(|_| err())?;
    let col = col.trim().parse().map_err(|_| err())?;
    Ok((row, col))
}

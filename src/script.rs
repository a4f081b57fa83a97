//! Headless play: apply a list of `row,col` moves in order.

use crate::text::{MoveParseError, parse_move};
use std::io::Write;
use strictly_gomoku::{GameStatus, Renderer, Session, StatusSink};
use tracing::{info, instrument, warn};

/// Plays `moves` through the session.
///
/// Refused moves are reported to `rejections` and skipped. Moves after the
/// game has ended are still offered to the engine, which refuses them.
///
/// # Errors
///
/// Fails before playing anything if an argument is not `row,col`, or if
/// writing a rejection fails.
#[instrument(skip_all, fields(count = moves.len()))]
pub fn run_script<R, S, W>(
    session: &mut Session<R, S>,
    moves: &[String],
    rejections: &mut W,
) -> anyhow::Result<GameStatus>
where
    R: Renderer,
    S: StatusSink,
    W: Write,
{
    let parsed = moves
        .iter()
        .map(|m| parse_move(m))
        .collect::<Result<Vec<_>, MoveParseError>>()?;

    for (row, col) in parsed {
        if let Err(e) = session.play(row, col) {
            warn!(row, col, error = %e, "Scripted move refused");
            writeln!(rejections, "Rejected {},{}: {}", row, col, e)?;
        }
    }

    let status = session.controller().status();
    info!(?status, moves = session.controller().move_count(), "Script finished");
    Ok(status)
}

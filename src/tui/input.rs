//! Cursor movement for keyboard navigation.

use crossterm::event::KeyCode;

/// Moves the cursor one intersection per arrow (or vi) key, stopping at the edges.
pub fn move_cursor(cursor: (usize, usize), key: KeyCode, size: usize) -> (usize, usize) {
    let (row, col) = cursor;
    let last = size.saturating_sub(1);

    match key {
        KeyCode::Up | KeyCode::Char('k') => (row.saturating_sub(1), col),
        KeyCode::Down | KeyCode::Char('j') => ((row + 1).min(last), col),
        KeyCode::Left | KeyCode::Char('h') => (row, col.saturating_sub(1)),
        KeyCode::Right | KeyCode::Char('l') => (row, (col + 1).min(last)),
        KeyCode::Home => (row, 0),
        KeyCode::End => (row, last),
        _ => cursor,
    }
}

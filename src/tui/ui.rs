//! Stateless UI rendering for five-in-a-row.

use super::app::App;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};
use strictly_gomoku::{Board, Cell, GameStatus, star_points};

/// Wood tone behind the grid.
const BOARD_BG: Color = Color::Rgb(222, 184, 135);

const HELP: &str = "←↑↓→/hjkl move · Enter/Space place · click to place · r restart · q quit";

/// Renders the whole screen and records where the grid landed.
pub fn draw(frame: &mut Frame, app: &mut App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Title
            Constraint::Min(5),    // Board
            Constraint::Length(4), // Status
            Constraint::Length(1), // Help
        ])
        .split(frame.area());

    let title = Paragraph::new("Strictly Games - Gomoku")
        .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center);
    frame.render_widget(title, chunks[0]);

    let grid = draw_board(frame, chunks[1], app);
    app.set_board_area(grid);

    draw_status(frame, chunks[2], app);

    let help = Paragraph::new(HELP)
        .style(Style::default().fg(Color::DarkGray))
        .alignment(Alignment::Center);
    frame.render_widget(help, chunks[3]);
}

/// Draws the grid centred in `area` and returns the rect of the intersections.
fn draw_board(frame: &mut Frame, area: Rect, app: &App) -> Rect {
    let board = app.view().board();
    let size = board.size() as u16;
    // Intersections two columns apart, plus the border.
    let outer = center_rect(area, size * 2 + 1, size + 2);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray))
        .style(Style::default().bg(BOARD_BG));
    let inner = block.inner(outer);

    let stars = if app.show_star_points() {
        star_points(board.size())
    } else {
        Vec::new()
    };
    let cursor = match app.view().status() {
        GameStatus::InProgress => Some(app.cursor()),
        _ => None,
    };
    let lines = board_lines(board, &stars, cursor);

    frame.render_widget(Paragraph::new(lines).block(block), outer);
    inner
}

fn board_lines(board: &Board, stars: &[(usize, usize)], cursor: Option<(usize, usize)>) -> Vec<Line<'static>> {
    let size = board.size();
    let grid = Style::default().fg(Color::DarkGray).bg(BOARD_BG);

    board
        .rows()
        .enumerate()
        .map(|(r, row)| {
            let mut spans = Vec::with_capacity(size * 2);
            for (c, cell) in row.iter().enumerate() {
                if c > 0 {
                    spans.push(Span::styled("─", grid));
                }
                let (symbol, mut style) = match cell {
                    Cell::Black => (
                        "●".to_string(),
                        Style::default().fg(Color::Black).bg(BOARD_BG).add_modifier(Modifier::BOLD),
                    ),
                    Cell::White => (
                        "●".to_string(),
                        Style::default().fg(Color::White).bg(BOARD_BG).add_modifier(Modifier::BOLD),
                    ),
                    Cell::Empty if stars.contains(&(r, c)) => ("╋".to_string(), grid),
                    Cell::Empty => (intersection(r, c, size).to_string(), grid),
                };
                if cursor == Some((r, c)) {
                    style = style.add_modifier(Modifier::REVERSED);
                }
                spans.push(Span::styled(symbol, style));
            }
            Line::from(spans)
        })
        .collect()
}

/// Box-drawing glyph for an empty intersection, shaped by the board edges.
fn intersection(row: usize, col: usize, size: usize) -> char {
    let last = size.saturating_sub(1);
    match (row == 0, row == last, col == 0, col == last) {
        (true, _, true, _) => '┌',
        (true, _, _, true) => '┐',
        (_, true, true, _) => '└',
        (_, true, _, true) => '┘',
        (true, _, _, _) => '┬',
        (_, true, _, _) => '┴',
        (_, _, true, _) => '├',
        (_, _, _, true) => '┤',
        _ => '┼',
    }
}

fn draw_status(frame: &mut Frame, area: Rect, app: &App) {
    let status_style = match app.view().status() {
        GameStatus::InProgress => Style::default().fg(Color::Yellow),
        _ => Style::default().fg(Color::Green).add_modifier(Modifier::BOLD),
    };
    let mut lines = vec![Line::from(Span::styled(app.status_message().to_string(), status_style))];
    if let Some(feedback) = app.feedback() {
        lines.push(Line::from(Span::styled(
            feedback.to_string(),
            Style::default().fg(Color::Red),
        )));
    }

    let status = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(status, area);
}

fn center_rect(area: Rect, width: u16, height: u16) -> Rect {
    let vert = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length((area.height.saturating_sub(height)) / 2),
            Constraint::Length(height),
            Constraint::Length((area.height.saturating_sub(height)) / 2),
        ])
        .split(area);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length((area.width.saturating_sub(width)) / 2),
            Constraint::Length(width),
            Constraint::Length((area.width.saturating_sub(width)) / 2),
        ])
        .split(vert[1])[1]
}

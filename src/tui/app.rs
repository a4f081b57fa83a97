//! Application state and logic.

use super::input::move_cursor;
use crate::config::GameConfig;
use crate::text::describe;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};
use ratatui::layout::Rect;
use strictly_gomoku::{
    Board, GameController, GameStatus, LayoutMetrics, MoveError, Notice, Placement, Renderer,
    Session, StatusSink,
};
use tracing::{debug, info};

/// Latest board snapshot handed over by the engine.
#[derive(Debug)]
pub struct BoardView {
    board: Board,
    status: GameStatus,
}

impl BoardView {
    fn new(size: usize) -> Self {
        Self {
            board: Board::new(size),
            status: GameStatus::InProgress,
        }
    }

    /// The board as of the last change.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// The status as of the last change.
    pub fn status(&self) -> GameStatus {
        self.status
    }
}

impl Renderer for BoardView {
    fn render(&mut self, board: &Board, status: GameStatus) {
        self.board.clone_from(board);
        self.status = status;
    }
}

/// Text for the status bar.
#[derive(Debug, Default)]
pub struct StatusLine {
    message: String,
}

impl StatusLine {
    /// Current message.
    pub fn message(&self) -> &str {
        &self.message
    }
}

impl StatusSink for StatusLine {
    fn notify(&mut self, notice: Notice) {
        self.message = match notice {
            Notice::Turn(_) => describe(notice),
            _ => format!("{} Press 'r' to restart or 'q' to quit.", describe(notice)),
        };
    }
}

/// Main application state.
pub struct App {
    session: Session<BoardView, StatusLine>,
    cursor: (usize, usize),
    show_star_points: bool,
    feedback: Option<String>,
    board_area: Rect,
    should_quit: bool,
}

impl App {
    /// Creates a new application from the configuration.
    pub fn new(config: &GameConfig) -> Self {
        let size = *config.board_size();
        let session = Session::new(
            GameController::with_size(size),
            BoardView::new(size),
            StatusLine::default(),
        );
        Self {
            session,
            cursor: (size / 2, size / 2),
            show_star_points: *config.show_star_points(),
            feedback: None,
            board_area: Rect::default(),
            should_quit: false,
        }
    }

    /// The engine's last published board and status.
    pub fn view(&self) -> &BoardView {
        self.session.renderer()
    }

    /// Gets the current status message.
    pub fn status_message(&self) -> &str {
        self.session.sink().message()
    }

    /// Why the last attempted move was refused, if it was.
    pub fn feedback(&self) -> Option<&str> {
        self.feedback.as_deref()
    }

    /// Cursor position as `(row, col)`.
    pub fn cursor(&self) -> (usize, usize) {
        self.cursor
    }

    /// Whether to mark star points.
    pub fn show_star_points(&self) -> bool {
        self.show_star_points
    }

    /// Whether the user asked to leave.
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Where the grid was last drawn.
    pub fn board_area(&self) -> Rect {
        self.board_area
    }

    /// Records where the grid was drawn; the top-left intersection sits at
    /// `area`'s origin and intersections are two columns apart.
    pub fn set_board_area(&mut self, area: Rect) {
        self.board_area = area;
    }

    /// Handles a key press.
    pub fn handle_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => {
                info!("User quit");
                self.should_quit = true;
            }
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.should_quit = true;
            }
            KeyCode::Char('r') => self.restart(),
            KeyCode::Enter | KeyCode::Char(' ') => self.place_at_cursor(),
            code => {
                let size = self.view().board().size();
                self.cursor = move_cursor(self.cursor, code, size);
            }
        }
    }

    /// Handles a mouse event; a left click plays the nearest intersection.
    pub fn handle_mouse(&mut self, mouse: MouseEvent) {
        if mouse.kind != MouseEventKind::Down(MouseButton::Left) {
            return;
        }
        // Terminal cells are about twice as tall as wide, so each intersection
        // spans two columns. Halve x to get a square pitch of one.
        let x = (f64::from(mouse.column) - f64::from(self.board_area.x)) / 2.0;
        let y = f64::from(mouse.row) - f64::from(self.board_area.y);
        let metrics = LayoutMetrics::new(0.0, 1.0);
        let result = self.session.play_at(x, y, &metrics);
        self.record(result);
    }

    /// Places the current player's stone under the cursor.
    pub fn place_at_cursor(&mut self) {
        let (row, col) = self.cursor;
        let result = self.session.play(row as isize, col as isize);
        self.record(result);
    }

    /// Restarts the game.
    pub fn restart(&mut self) {
        debug!("Restarting game");
        self.session.reset();
        self.feedback = None;
    }

    fn record(&mut self, result: Result<Placement, MoveError>) {
        match result {
            Ok(placement) => {
                debug!(?placement, "Move applied");
                self.cursor = (placement.row, placement.col);
                self.feedback = None;
            }
            Err(e) => {
                debug!(error = %e, "Move refused");
                self.feedback = Some(e.to_string());
            }
        }
    }
}

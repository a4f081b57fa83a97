//! Win detection for five-in-a-row.
//!
//! Only lines through the stone just placed can have changed, so the scan
//! walks outward from that cell along each orientation instead of checking
//! the whole board.

use crate::board::Board;
use crate::types::{Cell, Player};
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Stones in a row needed to win. Longer lines (overlines) also win.
pub const WIN_LENGTH: usize = 5;

/// One of the four line directions through a cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, strum::EnumIter)]
pub enum Orientation {
    /// Left to right.
    Horizontal,
    /// Top to bottom.
    Vertical,
    /// Top-left to bottom-right.
    MainDiagonal,
    /// Top-right to bottom-left.
    AntiDiagonal,
}

impl Orientation {
    /// The two opposite unit steps `(d_row, d_col)` spanning this line.
    pub fn steps(self) -> [(isize, isize); 2] {
        match self {
            Orientation::Horizontal => [(0, -1), (0, 1)],
            Orientation::Vertical => [(-1, 0), (1, 0)],
            Orientation::MainDiagonal => [(-1, -1), (1, 1)],
            Orientation::AntiDiagonal => [(-1, 1), (1, -1)],
        }
    }
}

/// Length of the contiguous run of `player` stones through `(row, col)`.
///
/// The cell itself counts as one regardless of its content; it is expected to
/// hold the stone that was just placed.
pub fn run_length(
    board: &Board,
    row: usize,
    col: usize,
    player: Player,
    orientation: Orientation,
) -> usize {
    let stone = Cell::from(player);
    let mut count = 1;
    for (dr, dc) in orientation.steps() {
        let mut r = row as isize + dr;
        let mut c = col as isize + dc;
        while board.cell(r, c) == Some(stone) {
            count += 1;
            r += dr;
            c += dc;
        }
    }
    count
}

/// First orientation through `(row, col)` holding a winning line, if any.
pub fn winning_orientation(
    board: &Board,
    row: usize,
    col: usize,
    player: Player,
) -> Option<Orientation> {
    <Orientation as strum::IntoEnumIterator>::iter()
        .find(|&o| run_length(board, row, col, player, o) >= WIN_LENGTH)
}

/// Checks whether the stone `player` just placed at `(row, col)` wins.
#[instrument(skip(board))]
pub fn check_win(board: &Board, row: usize, col: usize, player: Player) -> bool {
    winning_orientation(board, row, col, player).is_some()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn place(board: &mut Board, player: Player, cells: &[(usize, usize)]) {
        for &(r, c) in cells {
            board.set(r, c, player);
        }
    }

    #[test]
    fn test_single_stone_no_win() {
        let mut board = Board::new(15);
        place(&mut board, Player::Black, &[(7, 7)]);
        assert!(!check_win(&board, 7, 7, Player::Black));
    }

    #[test]
    fn test_horizontal_five() {
        let mut board = Board::new(15);
        place(&mut board, Player::Black, &[(7, 7), (7, 8), (7, 9), (7, 10), (7, 11)]);
        // Any cell of the line, not only an end, completes it.
        assert!(check_win(&board, 7, 9, Player::Black));
        assert_eq!(
            winning_orientation(&board, 7, 11, Player::Black),
            Some(Orientation::Horizontal)
        );
    }

    #[test]
    fn test_vertical_five_at_edge() {
        let mut board = Board::new(15);
        place(&mut board, Player::White, &[(10, 0), (11, 0), (12, 0), (13, 0), (14, 0)]);
        assert!(check_win(&board, 14, 0, Player::White));
    }

    #[test]
    fn test_main_diagonal() {
        let mut board = Board::new(15);
        place(&mut board, Player::Black, &[(0, 0), (1, 1), (2, 2), (3, 3), (4, 4)]);
        assert_eq!(
            winning_orientation(&board, 2, 2, Player::Black),
            Some(Orientation::MainDiagonal)
        );
    }

    #[test]
    fn test_anti_diagonal() {
        let mut board = Board::new(15);
        place(&mut board, Player::White, &[(0, 14), (1, 13), (2, 12), (3, 11), (4, 10)]);
        assert_eq!(
            winning_orientation(&board, 4, 10, Player::White),
            Some(Orientation::AntiDiagonal)
        );
    }

    #[test]
    fn test_four_is_not_enough() {
        let mut board = Board::new(15);
        place(&mut board, Player::Black, &[(7, 7), (7, 8), (7, 9), (7, 10)]);
        assert!(!check_win(&board, 7, 10, Player::Black));
        assert_eq!(run_length(&board, 7, 10, Player::Black, Orientation::Horizontal), 4);
    }

    #[test]
    fn test_broken_line_is_not_a_win() {
        let mut board = Board::new(15);
        place(&mut board, Player::Black, &[(7, 5), (7, 6), (7, 8), (7, 9)]);
        place(&mut board, Player::White, &[(7, 7)]);
        place(&mut board, Player::Black, &[(7, 10)]);
        assert!(!check_win(&board, 7, 10, Player::Black));
    }

    #[test]
    fn test_opponent_stones_do_not_count() {
        let mut board = Board::new(15);
        place(&mut board, Player::White, &[(3, 3), (3, 4), (3, 5), (3, 6)]);
        place(&mut board, Player::Black, &[(3, 7)]);
        assert!(!check_win(&board, 3, 7, Player::Black));
    }

    #[test]
    fn test_overline_wins() {
        let mut board = Board::new(15);
        place(
            &mut board,
            Player::Black,
            &[(5, 2), (5, 3), (5, 4), (5, 6), (5, 7), (5, 8)],
        );
        // Filling the gap makes a line of seven.
        place(&mut board, Player::Black, &[(5, 5)]);
        assert_eq!(run_length(&board, 5, 5, Player::Black, Orientation::Horizontal), 7);
        assert!(check_win(&board, 5, 5, Player::Black));
    }
}

//! Property checks over arbitrary move sequences and positions.

use proptest::prelude::*;
use strictly_gomoku::{check_win, Board, Cell, GameController, GameStatus, Player};

const SIZE: usize = 15;

/// Brute force: does any window of five through `(row, col)` belong to `player`?
fn has_five_through(board: &Board, row: usize, col: usize, player: Player) -> bool {
    let stone = Cell::from(player);
    [(0, 1), (1, 0), (1, 1), (1, -1)].iter().any(|&(dr, dc)| {
        (0..5).any(|k: isize| {
            let start_r = row as isize - k * dr;
            let start_c = col as isize - k * dc;
            (0..5).all(|i| board.cell(start_r + i * dr, start_c + i * dc) == Some(stone))
        })
    })
}

fn player_strategy() -> impl Strategy<Value = Player> {
    prop_oneof![Just(Player::Black), Just(Player::White)]
}

proptest! {
    #[test]
    fn prop_moves_track_board(moves in prop::collection::vec((-2isize..17, -2isize..17), 0..300)) {
        let mut game = GameController::new();
        let mut applied = 0usize;

        for (row, col) in moves {
            let before = game.state().clone();
            match game.apply_move(row, col) {
                Ok(placement) => {
                    applied += 1;
                    prop_assert_eq!(placement.player, before.current_player());
                    let expected_next = match placement.status {
                        GameStatus::InProgress => before.current_player().opponent(),
                        _ => before.current_player(),
                    };
                    prop_assert_eq!(game.current_player(), expected_next);
                }
                Err(_) => prop_assert_eq!(game.state(), &before),
            }

            let stones = game.board().rows().flatten().filter(|c| !c.is_empty()).count();
            prop_assert_eq!(stones, applied);
            prop_assert_eq!(game.move_count(), applied);
            prop_assert_eq!(game.board().is_full(), stones == SIZE * SIZE);
        }
    }

    #[test]
    fn prop_terminal_games_stay_put(moves in prop::collection::vec((0isize..15, 0isize..15), 0..400)) {
        let mut game = GameController::new();
        for (row, col) in moves {
            let was_terminal = game.status().is_terminal();
            let before = game.state().clone();
            let result = game.apply_move(row, col);
            if was_terminal {
                prop_assert!(result.is_err());
                prop_assert_eq!(game.state(), &before);
            }
        }
    }

    #[test]
    fn prop_check_win_matches_brute_force(
        cells in prop::collection::vec(0u8..3, SIZE * SIZE),
        row in 0usize..SIZE,
        col in 0usize..SIZE,
        player in player_strategy(),
    ) {
        let mut board = Board::new(SIZE);
        for (i, &v) in cells.iter().enumerate() {
            let (r, c) = (i / SIZE, i % SIZE);
            if (r, c) == (row, col) {
                continue;
            }
            match v {
                1 => board.set(r, c, Player::Black),
                2 => board.set(r, c, Player::White),
                _ => {}
            }
        }
        board.set(row, col, player);

        prop_assert_eq!(
            check_win(&board, row, col, player),
            has_five_through(&board, row, col, player)
        );
    }
}

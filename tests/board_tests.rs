//! Board tests - grid, collision and line clearing through the public API

use gravity_tetris::core::{Board, Tetromino};
use gravity_tetris::types::{PieceKind, BOARD_HEIGHT, BOARD_WIDTH};

fn piece_at(kind: PieceKind, x: i8, y: i8) -> Tetromino {
    Tetromino {
        x,
        y,
        ..Tetromino::new(kind)
    }
}

#[test]
fn test_board_new_empty() {
    let board = Board::new();
    assert_eq!(board.width(), BOARD_WIDTH);
    assert_eq!(board.height(), BOARD_HEIGHT);

    for y in 0..BOARD_HEIGHT as i8 {
        for x in 0..BOARD_WIDTH as i8 {
            assert_eq!(board.get(x, y), Some(None));
        }
    }
}

#[test]
fn test_board_get_out_of_bounds() {
    let board = Board::new();
    assert_eq!(board.get(-1, 0), None);
    assert_eq!(board.get(0, -1), None);
    assert_eq!(board.get(BOARD_WIDTH as i8, 0), None);
    assert_eq!(board.get(0, BOARD_HEIGHT as i8), None);
}

#[test]
fn test_board_set_and_get() {
    let mut board = Board::new();
    assert!(board.set(5, 10, Some(PieceKind::T)));
    assert_eq!(board.get(5, 10), Some(Some(PieceKind::T)));
    assert!(board.is_occupied(5, 10));
    assert!(!board.set(10, 0, Some(PieceKind::T)));
}

#[test]
fn test_spawn_position_is_valid_on_empty_board() {
    let board = Board::new();
    for kind in PieceKind::ALL {
        assert!(
            board.is_valid_move(&Tetromino::new(kind), 0, 0, None),
            "{:?} should fit at spawn",
            kind
        );
    }
}

#[test]
fn test_collision_with_locked_cells() {
    let mut board = Board::new();
    board.set(4, 6, Some(PieceKind::S));

    let piece = piece_at(PieceKind::O, 3, 4);
    assert!(board.is_valid_move(&piece, 0, 0, None));
    assert!(!board.is_valid_move(&piece, 0, 1, None));
    assert!(board.is_valid_move(&piece, -1, 1, None));
    assert!(!board.is_valid_move(&piece, 1, 1, None));
}

#[test]
fn test_lock_and_clear_single_line() {
    let mut board = Board::new();
    for x in 0..6 {
        board.set(x, 19, Some(PieceKind::Z));
    }
    board.set(0, 18, Some(PieceKind::J));

    // Horizontal I sits in matrix row 1.
    board.lock_piece(&piece_at(PieceKind::I, 6, 18));
    assert!(board.is_row_full(19));

    assert_eq!(board.clear_lines(), 1);
    assert_eq!(board.get(0, 19), Some(Some(PieceKind::J)));
    assert!(board.rows().take(19).all(|row| row.iter().all(|c| c.is_none())));
}

#[test]
fn test_clear_non_adjacent_rows() {
    let mut board = Board::new();
    board.fill_row(19, PieceKind::I);
    board.fill_row(17, PieceKind::I);
    board.set(3, 18, Some(PieceKind::L));
    board.set(7, 16, Some(PieceKind::T));

    let cleared = board.clear_full_rows();
    assert_eq!(cleared.as_slice(), &[19, 17]);

    // Remaining rows drop by the number of full rows below them.
    assert_eq!(board.get(3, 19), Some(Some(PieceKind::L)));
    assert_eq!(board.get(7, 18), Some(Some(PieceKind::T)));
    assert_eq!(board.cells().iter().filter(|c| c.is_some()).count(), 2);
}

#[test]
fn test_clear_four_rows() {
    let mut board = Board::new();
    for y in 16..20 {
        board.fill_row(y, PieceKind::I);
    }
    assert_eq!(board.clear_lines(), 4);
    assert_eq!(board, Board::new());
}

#[test]
fn test_drop_distance_onto_stack() {
    let mut board = Board::new();
    board.fill_row(19, PieceKind::Z);
    let piece = piece_at(PieceKind::T, 3, 0);
    // T occupies matrix rows 0 and 1, so it rests with row 1 on y = 18.
    assert_eq!(board.drop_distance(&piece), 17);
}

#[test]
fn test_row_one_short_is_not_cleared() {
    let mut board = Board::new();
    for x in 4..=8 {
        board.set(x, 19, Some(PieceKind::Z));
    }
    // Horizontal I fills matrix row 1, so at y = 18 it covers x 0..=3 of row 19.
    board.lock_piece(&piece_at(PieceKind::I, 0, 18));
    assert!(!board.is_row_full(19));

    let before = board.clone();
    assert_eq!(board.clear_lines(), 0);
    assert_eq!(board, before);
    assert_eq!(board.rows().count(), BOARD_HEIGHT as usize);
    assert!(!board.is_occupied(9, 19));
}

#[test]
fn test_pieces_above_full_grid_are_valid() {
    let mut board = Board::new();
    for y in 0..BOARD_HEIGHT as i8 {
        board.fill_row(y, PieceKind::L);
    }
    // A 4x4 matrix at y = -4 keeps every cell above row 0.
    for kind in PieceKind::ALL {
        let piece = piece_at(kind, 3, -4);
        assert!(board.is_valid_move(&piece, 0, 0, None), "{kind:?}");
    }
}

#[test]
fn test_drop_distance_on_empty_board_reaches_floor() {
    let board = Board::new();
    // I occupies only matrix row 1: from y = 0 it lands with y = 18.
    assert_eq!(board.drop_distance(&piece_at(PieceKind::I, 3, 0)), 18);
    // O occupies rows 0 and 1: it lands with y = 18 as well.
    assert_eq!(board.drop_distance(&piece_at(PieceKind::O, 4, 0)), 18);
}

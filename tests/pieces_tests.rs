//! Piece tests - spawn geometry, translation, rotation, locking

use std::collections::HashSet;

use uw_tetris::core::{Board, Piece, Pos};
use uw_tetris::types::{CellColor, Mark, ShapeKind};

fn distinct(piece: &Piece) -> usize {
    piece.cells().iter().collect::<HashSet<_>>().len()
}

/// Spawn `kind` and lower it so rotations have room on every side.
fn lowered(board: &mut Board, kind: ShapeKind) -> Piece {
    let mut piece = Piece::spawn(board, kind).unwrap();
    for _ in 0..3 {
        assert!(piece.move_by(board, 0, 1).unwrap());
    }
    piece
}

#[test]
fn test_spawn_geometry_and_colors() {
    let expected = [
        (ShapeKind::Square, CellColor::Orange),
        (ShapeKind::Line, CellColor::Red),
        (ShapeKind::Pyramid, CellColor::Cyan),
        (ShapeKind::LLeft, CellColor::Magenta),
        (ShapeKind::LRight, CellColor::Yellow),
        (ShapeKind::SLeft, CellColor::Blue),
        (ShapeKind::SRight, CellColor::Green),
    ];
    for (kind, color) in expected {
        let mut board = Board::new(20, 10).unwrap();
        let piece = Piece::spawn(&mut board, kind).unwrap();
        assert_eq!(piece.pivot(), Pos::new(0, 4));
        assert_eq!(distinct(&piece), 4, "{kind:?}");
        assert_eq!(board.count(Mark::Active), 4);
        for p in piece.cells() {
            assert_eq!(board.cell_at(p.row, p.col).unwrap().color(), color);
        }
    }
}

#[test]
fn test_line_spawns_horizontally() {
    let mut board = Board::new(20, 10).unwrap();
    let piece = Piece::spawn(&mut board, ShapeKind::Line).unwrap();
    assert_eq!(
        piece.cells(),
        &[Pos::new(0, 3), Pos::new(0, 4), Pos::new(0, 5), Pos::new(0, 6)]
    );
    assert_eq!(board.to_ascii()[0], "...@@@@...");
}

#[test]
fn test_move_shifts_cells_and_pivot() {
    let mut board = Board::new(20, 10).unwrap();
    let mut piece = Piece::spawn(&mut board, ShapeKind::SLeft).unwrap();
    let before = *piece.cells();

    assert!(piece.move_by(&mut board, 1, 0).unwrap());
    assert_eq!(piece.pivot(), Pos::new(0, 5));
    for (old, new) in before.iter().zip(piece.cells()) {
        assert_eq!(*new, old.offset(0, 1));
    }
    assert_eq!(board.count(Mark::Active), 4);
    assert!(board.cell_at(0, 3).unwrap().is_empty());
}

#[test]
fn test_move_blocked_by_wall_changes_nothing() {
    let mut board = Board::new(20, 10).unwrap();
    let mut piece = Piece::spawn(&mut board, ShapeKind::Square).unwrap();
    for _ in 0..4 {
        assert!(piece.move_by(&mut board, -1, 0).unwrap());
    }
    let board_before = board.clone();
    let piece_before = piece.clone();

    assert!(!piece.can_move(&board, -1, 0));
    assert!(!piece.move_by(&mut board, -1, 0).unwrap());
    assert_eq!(board, board_before);
    assert_eq!(piece, piece_before);
}

#[test]
fn test_move_blocked_by_locked_cell() {
    let mut board = Board::new(20, 10).unwrap();
    let mut piece = Piece::spawn(&mut board, ShapeKind::Square).unwrap();
    board.set_mark(2, 4, Mark::Locked).unwrap();

    assert!(!piece.can_move(&board, 0, 1));
    assert!(piece.can_move(&board, 1, 0));
    assert!(!piece.move_by(&mut board, 0, 1).unwrap());
    assert_eq!(piece.pivot(), Pos::new(0, 4));
}

#[test]
fn test_rotation_of_line() {
    let mut board = Board::new(20, 10).unwrap();
    let mut piece = lowered(&mut board, ShapeKind::Line);
    assert_eq!(piece.pivot(), Pos::new(3, 4));

    assert!(piece.rotate(&mut board).unwrap());
    assert_eq!(
        piece.cells(),
        &[Pos::new(4, 4), Pos::new(3, 4), Pos::new(2, 4), Pos::new(1, 4)]
    );
    // Rotation never moves the pivot.
    assert_eq!(piece.pivot(), Pos::new(3, 4));
}

#[test]
fn test_rotation_of_pyramid() {
    let mut board = Board::new(20, 10).unwrap();
    let mut piece = lowered(&mut board, ShapeKind::Pyramid);
    assert!(piece.rotate(&mut board).unwrap());
    assert_eq!(
        piece.cells(),
        &[Pos::new(4, 4), Pos::new(3, 4), Pos::new(3, 5), Pos::new(2, 4)]
    );
    assert_eq!(board.count(Mark::Active), 4);
}

#[test]
fn test_four_rotations_restore_every_shape() {
    for kind in ShapeKind::ALL {
        let mut board = Board::new(20, 10).unwrap();
        let mut piece = lowered(&mut board, kind);
        let start = *piece.cells();

        for turn in 0..4 {
            assert!(piece.rotate(&mut board).unwrap(), "{kind:?} turn {turn}");
            assert_eq!(distinct(&piece), 4, "{kind:?} turn {turn}");
            assert_eq!(board.count(Mark::Active), 4);
        }
        assert_eq!(piece.cells(), &start, "{kind:?}");
    }
}

#[test]
fn test_square_rotation_is_a_no_op() {
    let mut board = Board::new(20, 10).unwrap();
    let mut piece = lowered(&mut board, ShapeKind::Square);
    let start = *piece.cells();
    assert!(piece.rotate(&mut board).unwrap());
    assert_eq!(piece.cells(), &start);
}

#[test]
fn test_rotation_out_of_bounds_is_refused() {
    let mut board = Board::new(20, 10).unwrap();
    let mut piece = Piece::spawn(&mut board, ShapeKind::Line).unwrap();
    // Upright from row 0 would poke above the well.
    assert!(!piece.can_rotate(&board));
    assert!(!piece.rotate(&mut board).unwrap());
    assert_eq!(board.to_ascii()[0], "...@@@@...");
}

#[test]
fn test_rotation_onto_locked_cell_is_refused() {
    let mut board = Board::new(20, 10).unwrap();
    let mut piece = lowered(&mut board, ShapeKind::Line);
    board.set_mark(1, 4, Mark::Locked).unwrap();
    assert!(!piece.rotate(&mut board).unwrap());
    assert_eq!(piece.cells()[0], Pos::new(3, 3));
}

#[test]
fn test_lock_marks_cells_locked_with_color() {
    let mut board = Board::new(20, 10).unwrap();
    let mut piece = Piece::spawn(&mut board, ShapeKind::LRight).unwrap();
    piece.set_inactive(&mut board).unwrap();
    assert!(piece.is_inactive());
    assert_eq!(board.count(Mark::Active), 0);
    for p in piece.cells() {
        let cell = board.cell_at(p.row, p.col).unwrap();
        assert!(cell.is_locked());
        assert_eq!(cell.color(), CellColor::Yellow);
    }
}

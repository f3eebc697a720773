//! Board tests - grid access, line detection, line clearing, fullness

use uw_tetris::core::{Board, EngineError};
use uw_tetris::types::{CellColor, Mark};

fn board(rows: &[&str]) -> Board {
    Board::from_ascii(rows).expect("valid fixture")
}

#[test]
fn test_board_new_empty() {
    let board = Board::new(20, 10).unwrap();
    assert_eq!(board.rows(), 20);
    assert_eq!(board.cols(), 10);
    assert_eq!(board.count(Mark::Empty), 200);
    for cell in board.cells() {
        assert_eq!(cell.color(), CellColor::Empty);
    }
}

#[test]
fn test_cell_at_out_of_bounds() {
    let board = Board::new(20, 10).unwrap();
    assert_eq!(
        board.cell_at(-1, 0),
        Err(EngineError::OutOfBounds {
            row: -1,
            col: 0,
            rows: 20,
            cols: 10
        })
    );
    assert!(board.cell_at(0, -1).is_err());
    assert!(board.cell_at(20, 0).is_err());
    assert!(board.cell_at(0, 10).is_err());
    assert!(board.cell_at(19, 9).is_ok());
}

#[test]
fn test_set_mark_returns_previous_and_checks_bounds() {
    let mut board = Board::new(6, 4).unwrap();
    assert_eq!(board.set_mark(2, 1, Mark::Locked), Ok(Mark::Empty));
    assert_eq!(board.set_mark(2, 1, Mark::Active), Ok(Mark::Locked));
    assert!(board.cell_at(2, 1).unwrap().is_active());
    assert!(matches!(
        board.set_mark(6, 0, Mark::Locked),
        Err(EngineError::OutOfBounds { .. })
    ));
}

#[test]
fn test_setting_empty_clears_color() {
    let mut board = Board::new(6, 4).unwrap();
    board.paint(0, 0, Mark::Locked, CellColor::Blue).unwrap();
    board.set_mark(0, 0, Mark::Empty).unwrap();
    assert_eq!(board.cell_at(0, 0).unwrap().color(), CellColor::Empty);
}

#[test]
fn test_detects_only_fully_locked_rows_bottom_up() {
    let board = board(&[
        "....", //
        "####", // 1: complete
        "###@", // 2: active cell does not count
        "####", // 3: complete
        "#.##", // 4
        "####", // 5: complete
    ]);
    assert_eq!(board.detect_completed_lines().as_slice(), &[5, 3, 1]);
}

#[test]
fn test_detection_is_capped_at_four_rows() {
    let board = board(&["....", "####", "####", "####", "####", "####"]);
    assert_eq!(board.detect_completed_lines().as_slice(), &[5, 4, 3, 2]);
}

#[test]
fn test_clear_line_shifts_locked_content_down() {
    let mut board = board(&[
        "#..#", //
        ".#..", //
        "..#.", //
        "....", //
        "#.#.", //
        "####", //
    ]);
    board.clear_line(5).unwrap();
    assert_eq!(
        board.to_ascii(),
        vec!["#..#", "#..#", ".#..", "..#.", "....", "#.#."]
    );
}

#[test]
fn test_clear_line_keeps_the_top_row() {
    let mut board = board(&["##..", "....", "....", "....", "....", "####"]);
    board.clear_line(5).unwrap();
    // Row 0 is copied down but keeps its own pattern.
    assert_eq!(board.to_ascii()[0], "##..");
    assert_eq!(board.to_ascii()[1], "##..");
}

#[test]
fn test_clear_line_does_not_drag_active_cells() {
    // An active cell above an empty one is only copied when one of the two
    // cells is locked.
    let mut board = board(&["....", "....", "....", ".@..", "....", "####"]);
    board.clear_line(5).unwrap();
    assert_eq!(
        board.to_ascii(),
        vec!["....", "....", "....", ".@..", "....", "...."]
    );
}

#[test]
fn test_clear_line_preserves_colors() {
    let mut board = Board::new(6, 4).unwrap();
    board.paint(4, 2, Mark::Locked, CellColor::Magenta).unwrap();
    for col in 0..4 {
        board.paint(5, col, Mark::Locked, CellColor::Red).unwrap();
    }
    board.clear_line(5).unwrap();
    let moved = board.cell_at(5, 2).unwrap();
    assert!(moved.is_locked());
    assert_eq!(moved.color(), CellColor::Magenta);
    assert!(board.cell_at(5, 0).unwrap().is_empty());
}

#[test]
fn test_is_full_checks_top_two_rows_of_center_band() {
    let empty = Board::new(20, 10).unwrap();
    assert!(!empty.is_full());

    // Outside the band (cols 3..7) does not count.
    let mut board = Board::new(20, 10).unwrap();
    board.set_mark(0, 0, Mark::Locked).unwrap();
    board.set_mark(1, 9, Mark::Locked).unwrap();
    board.set_mark(2, 5, Mark::Locked).unwrap();
    assert!(!board.is_full());

    board.set_mark(1, 6, Mark::Locked).unwrap();
    assert!(board.is_full());

    // Active cells count as occupied too.
    let mut board = Board::new(20, 10).unwrap();
    board.set_mark(0, 3, Mark::Active).unwrap();
    assert!(board.is_full());
}

#[test]
fn test_clear_resets_every_cell() {
    let mut board = board(&["....", "..@.", "####", "#.##", "####", "####"]);
    board.clear();
    assert_eq!(board.count(Mark::Empty), 24);
    assert!(board.cells().iter().all(|c| c.color() == CellColor::Empty));
}

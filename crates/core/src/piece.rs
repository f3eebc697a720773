//! Pieces module - the falling piece and its movement rules
//!
//! A [`Piece`] holds the board positions of its four cells, never the cells
//! themselves; every mark change goes through the [`Board`] setters. A piece is
//! only meaningful for the board it was spawned on and must be respawned, not
//! rebound, when the board is rebuilt.
//!
//! Rotation is not a rotation matrix. Each cell moves by a fixed offset looked
//! up from where it sits relative to the pivot (see [`rotation_delta`]), with
//! one exception for the far end of the Line. The Square never rotates.

use crate::board::Board;
use crate::error::{EngineError, Result, Transition};
use crate::rng::RandomSource;
use crate::types::{CellColor, Mark, ShapeKind, PIECE_SIZE};

/// A board coordinate. Row 0 is the top of the well.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Pos {
    pub row: i32,
    pub col: i32,
}

impl Pos {
    pub const fn new(row: i32, col: i32) -> Self {
        Self { row, col }
    }

    pub const fn offset(self, d_row: i32, d_col: i32) -> Self {
        Self {
            row: self.row + d_row,
            col: self.col + d_col,
        }
    }
}

/// Spawn pivot: top row, middle column (left of center on even widths).
pub fn spawn_pivot(cols: usize) -> Pos {
    Pos::new(0, (cols / 2 + cols % 2) as i32 - 1)
}

/// `(Δrow, Δcol)` for one cell, from the classification of its column and row
/// against the pivot.
///
/// | col | row | Δrow | Δcol |
/// |-----|-----|------|------|
/// | <   | <   | +2   | 0    |
/// | <   | ==  | +1   | +1   |
/// | <   | >   | 0    | +2   |
/// | ==  | <   | +1   | -1   |
/// | ==  | ==  | 0    | 0    |
/// | ==  | >   | -1   | +1   |
/// | >   | <   | 0    | -2   |
/// | >   | ==  | -1   | -1   |
/// | >   | >   | -2   | 0    |
pub fn rotation_delta(cell: Pos, pivot: Pos) -> (i32, i32) {
    use std::cmp::Ordering::{Equal, Greater, Less};

    match (cell.col.cmp(&pivot.col), cell.row.cmp(&pivot.row)) {
        (Less, Less) => (2, 0),
        (Less, Equal) => (1, 1),
        (Less, Greater) => (0, 2),
        (Equal, Less) => (1, -1),
        (Equal, Equal) => (0, 0),
        (Equal, Greater) => (-1, 1),
        (Greater, Less) => (0, -2),
        (Greater, Equal) => (-1, -1),
        (Greater, Greater) => (-2, 0),
    }
}

/// `(Δrow, Δcol)` for the Line's fourth cell, two units from the pivot.
pub fn line_tip_delta(cell: Pos, pivot: Pos) -> (i32, i32) {
    if cell.col != pivot.col {
        if cell.col > pivot.col {
            (-2, -2)
        } else {
            (2, 2)
        }
    } else if cell.row > pivot.row {
        (-2, 2)
    } else {
        (2, -2)
    }
}

/// The falling piece.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Piece {
    kind: ShapeKind,
    cells: [Pos; PIECE_SIZE],
    pivot: Pos,
    active: bool,
}

impl Piece {
    /// Resolve the spawn layout of `kind` on `board` without marking anything.
    ///
    /// Fails with `OutOfBounds` if the layout does not fit the board.
    pub fn new(board: &Board, kind: ShapeKind) -> Result<Self> {
        let pivot = spawn_pivot(board.cols());
        let mut cells = [pivot; PIECE_SIZE];
        for (slot, (d_row, d_col)) in cells.iter_mut().zip(kind.offsets()) {
            let pos = pivot.offset(d_row, d_col);
            board.cell_at(pos.row, pos.col)?;
            *slot = pos;
        }

        Ok(Self {
            kind,
            cells,
            pivot,
            active: true,
        })
    }

    /// Place `kind` at the spawn position and mark its cells active.
    pub fn spawn(board: &mut Board, kind: ShapeKind) -> Result<Self> {
        let mut piece = Self::new(board, kind)?;
        piece.set_active(board)?;
        Ok(piece)
    }

    /// Spawn a uniformly chosen shape.
    pub fn spawn_random<R: RandomSource + ?Sized>(board: &mut Board, rng: &mut R) -> Result<Self> {
        let kind = rng.next_shape();
        Self::spawn(board, kind)
    }

    pub fn kind(&self) -> ShapeKind {
        self.kind
    }

    pub fn color(&self) -> CellColor {
        self.kind.color()
    }

    /// Positions of the four cells, in shape order.
    pub fn cells(&self) -> &[Pos; PIECE_SIZE] {
        &self.cells
    }

    pub fn pivot(&self) -> Pos {
        self.pivot
    }

    /// True while the piece is falling.
    pub fn is_active(&self) -> bool {
        self.active
    }

    /// True once the piece has been locked.
    pub fn is_inactive(&self) -> bool {
        !self.active
    }

    fn ensure_active(&self) -> Result<()> {
        if self.active {
            Ok(())
        } else {
            Err(EngineError::IllegalTransition(Transition::PieceLocked))
        }
    }

    fn fits(board: &Board, dest: &[Pos; PIECE_SIZE]) -> bool {
        dest.iter()
            .all(|p| board.contains(p.row, p.col) && !board.is_locked(p.row, p.col))
    }

    fn shifted(&self, d_col: i32, d_row: i32) -> [Pos; PIECE_SIZE] {
        self.cells.map(|p| p.offset(d_row, d_col))
    }

    fn rotated(&self) -> [Pos; PIECE_SIZE] {
        if self.kind == ShapeKind::Square {
            return self.cells;
        }

        let mut dest = self.cells;
        for (i, pos) in dest.iter_mut().enumerate() {
            let (d_row, d_col) = if self.kind == ShapeKind::Line && i == PIECE_SIZE - 1 {
                line_tip_delta(*pos, self.pivot)
            } else {
                rotation_delta(*pos, self.pivot)
            };
            *pos = pos.offset(d_row, d_col);
        }
        dest
    }

    /// Whether the piece can shift by `(d_col, d_row)`.
    ///
    /// Only left, right and down displacements are ever valid: upward or zero
    /// displacements are refused, as is any destination outside the well or on
    /// a locked cell.
    pub fn can_move(&self, board: &Board, d_col: i32, d_row: i32) -> bool {
        if d_row < 0 || (d_row == 0 && d_col == 0) {
            return false;
        }
        Self::fits(board, &self.shifted(d_col, d_row))
    }

    /// Shift the piece by `(d_col, d_row)`.
    ///
    /// The displacement is re-validated against the current board before
    /// anything is touched; `Ok(false)` means it no longer fits and nothing
    /// changed. On success the pivot moves by the same delta.
    pub fn move_by(&mut self, board: &mut Board, d_col: i32, d_row: i32) -> Result<bool> {
        self.ensure_active()?;
        if !self.can_move(board, d_col, d_row) {
            return Ok(false);
        }

        let dest = self.shifted(d_col, d_row);
        self.relocate(board, dest)?;
        self.pivot = self.pivot.offset(d_row, d_col);
        Ok(true)
    }

    /// Whether every rotated cell lands inside the well on a non-locked cell.
    pub fn can_rotate(&self, board: &Board) -> bool {
        Self::fits(board, &self.rotated())
    }

    /// Rotate in place; the pivot does not move.
    ///
    /// Re-validates like [`Piece::move_by`]; `Ok(false)` means blocked.
    pub fn rotate(&mut self, board: &mut Board) -> Result<bool> {
        self.ensure_active()?;
        if !self.can_rotate(board) {
            return Ok(false);
        }

        let dest = self.rotated();
        self.relocate(board, dest)?;
        Ok(true)
    }

    /// Vacate the current cells, adopt `dest`, and mark it active.
    fn relocate(&mut self, board: &mut Board, dest: [Pos; PIECE_SIZE]) -> Result<()> {
        for p in &self.cells {
            board.set_mark(p.row, p.col, Mark::Empty)?;
        }
        self.cells = dest;
        self.set_active(board)
    }

    /// Mark all four cells active with the piece color.
    pub fn set_active(&mut self, board: &mut Board) -> Result<()> {
        self.ensure_active()?;
        for p in &self.cells {
            board.paint(p.row, p.col, Mark::Active, self.color())?;
        }
        Ok(())
    }

    /// Lock the piece into the board. Irreversible.
    pub fn set_inactive(&mut self, board: &mut Board) -> Result<()> {
        if !self.active {
            return Err(EngineError::IllegalTransition(Transition::AlreadyLocked));
        }
        for p in &self.cells {
            board.paint(p.row, p.col, Mark::Locked, self.color())?;
        }
        self.active = false;
        Ok(())
    }
}

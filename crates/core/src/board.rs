//! Board module - manages the game grid
//!
//! The board is a `rows x cols` grid of [`Cell`]s stored in a flat, row-major
//! vector. Coordinates are `(row, col)` with row 0 at the top. Lookups take
//! signed coordinates so piece code can probe positions just outside the well.
//!
//! The board does not know which cells belong to the falling piece; that is
//! derived from the `Active` marks.

use std::ops::Range;

use arrayvec::ArrayVec;

use crate::cell::Cell;
use crate::error::{EngineError, Result};
use crate::types::{CellColor, Mark, MAX_COLS, MAX_ROWS, MIN_COLS, MIN_ROWS, PIECE_SIZE};

/// Row indices reported by [`Board::detect_completed_lines`], bottom to top.
pub type CompletedLines = ArrayVec<usize, PIECE_SIZE>;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    rows: usize,
    cols: usize,
    /// Flat array of cells, row-major order (row * cols + col)
    cells: Vec<Cell>,
}

impl Board {
    /// Create an empty board. Dimensions must lie within
    /// `[MIN_ROWS, MAX_ROWS] x [MIN_COLS, MAX_COLS]`.
    pub fn new(rows: usize, cols: usize) -> Result<Self> {
        if !(MIN_ROWS..=MAX_ROWS).contains(&rows) || !(MIN_COLS..=MAX_COLS).contains(&cols) {
            return Err(EngineError::InvalidDimensions { rows, cols });
        }

        let cells = (0..rows)
            .flat_map(|r| (0..cols).map(move |c| Cell::new(r, c)))
            .collect();
        Ok(Self { rows, cols, cells })
    }

    /// Build a board from ASCII rows: `.` empty, `@` active, `#` locked.
    ///
    /// Occupied cells get [`CellColor::Gray`]. Returns `None` for ragged input,
    /// unknown characters, or dimensions outside the supported range.
    pub fn from_ascii(lines: &[&str]) -> Option<Self> {
        let rows = lines.len();
        let cols = lines.first()?.chars().count();
        let mut board = Self::new(rows, cols).ok()?;

        for (r, line) in lines.iter().enumerate() {
            if line.chars().count() != cols {
                return None;
            }
            for (c, ch) in line.chars().enumerate() {
                let mark = Mark::from_char(ch)?;
                let idx = r * cols + c;
                board.cells[idx].paint(mark, CellColor::Gray);
            }
        }
        Some(board)
    }

    /// Render marks as ASCII rows (inverse of [`Board::from_ascii`]).
    pub fn to_ascii(&self) -> Vec<String> {
        (0..self.rows)
            .map(|r| self.row_cells(r).iter().map(|c| c.mark().as_char()).collect())
            .collect()
    }

    #[inline(always)]
    fn index(&self, row: i32, col: i32) -> Option<usize> {
        if !self.contains(row, col) {
            return None;
        }
        Some(row as usize * self.cols + col as usize)
    }

    fn out_of_bounds(&self, row: i32, col: i32) -> EngineError {
        EngineError::OutOfBounds {
            row,
            col,
            rows: self.rows,
            cols: self.cols,
        }
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    /// True if `(row, col)` lies inside the well.
    pub fn contains(&self, row: i32, col: i32) -> bool {
        row >= 0 && col >= 0 && (row as usize) < self.rows && (col as usize) < self.cols
    }

    /// Cell at `(row, col)`, or `None` if out of bounds.
    pub fn get(&self, row: i32, col: i32) -> Option<&Cell> {
        self.index(row, col).map(|idx| &self.cells[idx])
    }

    /// Cell at `(row, col)`; out-of-range coordinates are an error.
    pub fn cell_at(&self, row: i32, col: i32) -> Result<&Cell> {
        self.get(row, col)
            .ok_or_else(|| self.out_of_bounds(row, col))
    }

    /// True if the cell exists and is locked.
    pub fn is_locked(&self, row: i32, col: i32) -> bool {
        self.get(row, col).is_some_and(Cell::is_locked)
    }

    /// Set the mark of a cell, returning the previous mark.
    ///
    /// The caller has already validated the transition; only bounds are checked.
    pub fn set_mark(&mut self, row: i32, col: i32, mark: Mark) -> Result<Mark> {
        let idx = self
            .index(row, col)
            .ok_or_else(|| self.out_of_bounds(row, col))?;
        Ok(self.cells[idx].set_mark(mark))
    }

    /// Set mark and color of a cell together, returning the previous mark.
    pub fn paint(&mut self, row: i32, col: i32, mark: Mark, color: CellColor) -> Result<Mark> {
        let idx = self
            .index(row, col)
            .ok_or_else(|| self.out_of_bounds(row, col))?;
        Ok(self.cells[idx].paint(mark, color))
    }

    /// All cells of one row. Panics if `row >= rows`.
    pub fn row_cells(&self, row: usize) -> &[Cell] {
        let start = row * self.cols;
        &self.cells[start..start + self.cols]
    }

    /// All cells, row-major.
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Number of cells currently carrying `mark`.
    pub fn count(&self, mark: Mark) -> usize {
        self.cells.iter().filter(|c| c.mark() == mark).count()
    }

    /// A row is complete iff every cell in it is locked.
    ///
    /// Active cells never count, even when the row is otherwise full.
    pub fn is_row_complete(&self, row: usize) -> bool {
        row < self.rows && self.row_cells(row).iter().all(Cell::is_locked)
    }

    /// Completed rows, scanning from the bottom up.
    ///
    /// At most `PIECE_SIZE` rows are reported, since a single lock cannot
    /// complete more.
    pub fn detect_completed_lines(&self) -> CompletedLines {
        let mut lines = CompletedLines::new();
        for row in (0..self.rows).rev() {
            if lines.is_full() {
                break;
            }
            if self.is_row_complete(row) {
                lines.push(row);
            }
        }
        lines
    }

    /// Remove `row` by shifting the rows above it down by one.
    ///
    /// Column by column, a cell takes the mark and color of the cell above it
    /// only when either of the two is locked. Row 0 keeps its own content.
    pub fn clear_line(&mut self, row: usize) -> Result<()> {
        if row >= self.rows {
            return Err(self.out_of_bounds(row as i32, 0));
        }

        let cols = self.cols;
        for r in (1..=row).rev() {
            for c in 0..cols {
                let below = r * cols + c;
                let above = self.cells[below - cols];
                if self.cells[below].is_locked() || above.is_locked() {
                    self.cells[below].copy_from(&above);
                }
            }
        }
        Ok(())
    }

    /// Columns of the centered spawn band checked by [`Board::is_full`].
    pub fn spawn_band(&self) -> Range<usize> {
        let left = (self.cols - PIECE_SIZE) / 2;
        left..self.cols - left
    }

    /// True if any cell in the top two rows of the spawn band is occupied,
    /// i.e. there is no safe room to spawn another piece.
    pub fn is_full(&self) -> bool {
        let band = self.spawn_band();
        (0..self.rows.min(2)).any(|r| {
            self.row_cells(r)[band.clone()]
                .iter()
                .any(|c| !c.is_empty())
        })
    }

    /// Reset every cell to empty.
    pub fn clear(&mut self) {
        for cell in &mut self.cells {
            cell.paint(Mark::Empty, CellColor::Empty);
        }
    }
}

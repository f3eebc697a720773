//! A single grid location.

use crate::types::{CellColor, Mark};

/// One cell of the well. Coordinates are fixed at creation.
///
/// No transition validation happens here; the board and the piece decide which
/// mark changes are legal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Cell {
    row: usize,
    col: usize,
    mark: Mark,
    color: CellColor,
}

impl Cell {
    pub fn new(row: usize, col: usize) -> Self {
        Self {
            row,
            col,
            mark: Mark::Empty,
            color: CellColor::Empty,
        }
    }

    pub fn row(&self) -> usize {
        self.row
    }

    pub fn col(&self) -> usize {
        self.col
    }

    pub fn mark(&self) -> Mark {
        self.mark
    }

    pub fn color(&self) -> CellColor {
        self.color
    }

    /// Set the mark and return the previous one.
    ///
    /// Setting `Empty` also resets the color; other marks keep the current color
    /// (locking a piece keeps its color).
    pub fn set_mark(&mut self, mark: Mark) -> Mark {
        if mark == Mark::Empty {
            self.color = CellColor::Empty;
        }
        std::mem::replace(&mut self.mark, mark)
    }

    /// Set mark and color together, returning the previous mark.
    pub fn paint(&mut self, mark: Mark, color: CellColor) -> Mark {
        self.color = if mark == Mark::Empty {
            CellColor::Empty
        } else {
            color
        };
        std::mem::replace(&mut self.mark, mark)
    }

    /// Copy another cell's mark and color, keeping this cell's coordinates.
    pub(crate) fn copy_from(&mut self, other: &Cell) {
        self.mark = other.mark;
        self.color = other.color;
    }

    pub fn is_empty(&self) -> bool {
        self.mark == Mark::Empty
    }

    pub fn is_active(&self) -> bool {
        self.mark == Mark::Active
    }

    pub fn is_locked(&self) -> bool {
        self.mark == Mark::Locked
    }
}

//! Read-only view of a game for renderers.

use crate::cell::Cell;
use crate::controller::Phase;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameSnapshot {
    pub rows: usize,
    pub cols: usize,
    /// Row-major copy of the board.
    pub cells: Vec<Cell>,
    pub phase: Phase,
    pub paused: bool,
    pub is_human: bool,
    pub grid: bool,
    pub lines: u32,
    pub score: u32,
    pub level: u32,
    pub start_level: u32,
}

impl GameSnapshot {
    pub fn cell(&self, row: usize, col: usize) -> Option<&Cell> {
        if row >= self.rows || col >= self.cols {
            return None;
        }
        self.cells.get(row * self.cols + col)
    }

    pub fn row(&self, row: usize) -> &[Cell] {
        let start = row * self.cols;
        &self.cells[start..start + self.cols]
    }

    pub fn game_over(&self) -> bool {
        self.phase == Phase::GameOver
    }

    /// True while ticks and commands would have an effect.
    pub fn playable(&self) -> bool {
        !self.paused && matches!(self.phase, Phase::Falling | Phase::Locked)
    }
}

impl Default for GameSnapshot {
    fn default() -> Self {
        Self {
            rows: 0,
            cols: 0,
            cells: Vec::new(),
            phase: Phase::Idle,
            paused: false,
            is_human: true,
            grid: false,
            lines: 0,
            score: 0,
            level: 0,
            start_level: 0,
        }
    }
}

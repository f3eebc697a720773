//! Engine error taxonomy.
//!
//! Blocked moves and rotations are not errors: `can_move`/`can_rotate` return
//! `false` and the controller reports [`MoveOutcome::Blocked`](crate::controller::MoveOutcome).
//! The variants here are programming errors that validation should prevent.

use std::fmt;

use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum EngineError {
    #[error("cell ({row}, {col}) is outside the {rows}x{cols} board")]
    OutOfBounds {
        row: i32,
        col: i32,
        rows: usize,
        cols: usize,
    },

    #[error("a {rows}x{cols} board is outside the supported dimensions")]
    InvalidDimensions { rows: usize, cols: usize },

    #[error("illegal piece transition: {0}")]
    IllegalTransition(Transition),
}

/// The piece transition that was refused.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transition {
    /// Locking a piece that is already locked
    AlreadyLocked,
    /// Moving or rotating a piece after it locked
    PieceLocked,
}

impl fmt::Display for Transition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Transition::AlreadyLocked => f.write_str("piece is already locked"),
            Transition::PieceLocked => f.write_str("cannot mutate a locked piece"),
        }
    }
}

pub type Result<T> = std::result::Result<T, EngineError>;

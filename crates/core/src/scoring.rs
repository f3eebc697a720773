//! Scoring module - score, level and speed arithmetic
//!
//! These formulas are reproduced as contracts. Integer division throughout.

use crate::types::{DELAY_BASE_MS, DELAY_TRIM_MS, LEVEL_BASE, LINES_BASE, SCORE_BASE};

/// Points awarded when the next piece spawns.
///
/// `(level + 1) * (cleared * LINES_BASE) + SCORE_BASE / moves`, or 0 when no
/// moves were made. The move bonus is paid even when nothing was cleared.
pub fn spawn_score(level: u32, cleared: u32, moves: u32) -> u32 {
    if moves == 0 {
        return 0;
    }
    (level + 1) * (cleared * LINES_BASE) + SCORE_BASE / moves
}

/// Whether the line total has reached the next level threshold.
///
/// The threshold is relative to the starting level: `(level - start_level + 1) * LEVEL_BASE`.
pub fn should_level_up(lines: u32, level: u32, start_level: u32) -> bool {
    lines >= (level.saturating_sub(start_level) + 1) * LEVEL_BASE
}

/// Tick interval at the start of a game.
pub fn base_delay_ms(level: u32) -> u32 {
    DELAY_BASE_MS / (level + 1)
}

/// Tick interval after reaching `level`.
///
/// Trimmed by `DELAY_TRIM_MS` while the quotient still exceeds it, so high
/// levels keep getting faster instead of flattening out.
pub fn level_delay_ms(level: u32) -> u32 {
    let delay = base_delay_ms(level);
    if delay > DELAY_TRIM_MS {
        delay - DELAY_TRIM_MS
    } else {
        delay
    }
}

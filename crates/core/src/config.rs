//! Game configuration: well size, starting level, display flags.
//!
//! Values reach the controller already validated. [`GameConfig::clamped`]
//! pulls out-of-range values to the nearest limit, and
//! [`GameConfig::from_raw_options`] accepts loosely formatted text the way the
//! command line and embedding pages always have: anything unparsable falls back
//! to the default.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use log::warn;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::types::{
    AI_DELAY_MS, DEFAULT_COLS, DEFAULT_GRID, DEFAULT_LEVEL, DEFAULT_ROWS, MAX_COLS, MAX_ROWS,
    MAX_START_LEVEL, MIN_COLS, MIN_ROWS,
};

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("invalid config file: {0}")]
    Parse(#[from] toml::de::Error),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    pub rows: usize,
    pub cols: usize,
    pub start_level: u32,
    /// Draw grid lines over empty cells.
    pub grid: bool,
    /// Tick interval once the random opponent is playing.
    pub ai_delay_ms: u32,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            rows: DEFAULT_ROWS,
            cols: DEFAULT_COLS,
            start_level: DEFAULT_LEVEL,
            grid: DEFAULT_GRID,
            ai_delay_ms: AI_DELAY_MS,
        }
    }
}

impl GameConfig {
    /// Pull every value into its supported range, logging each adjustment.
    pub fn clamped(self) -> Self {
        let rows = self.rows.clamp(MIN_ROWS, MAX_ROWS);
        let cols = self.cols.clamp(MIN_COLS, MAX_COLS);
        let start_level = self.start_level.min(MAX_START_LEVEL);
        let ai_delay_ms = self.ai_delay_ms.max(1);

        if rows != self.rows {
            warn!("rows {} adjusted to {}", self.rows, rows);
        }
        if cols != self.cols {
            warn!("cols {} adjusted to {}", self.cols, cols);
        }
        if start_level != self.start_level {
            warn!("start level {} adjusted to {}", self.start_level, start_level);
        }
        if ai_delay_ms != self.ai_delay_ms {
            warn!("ai delay {}ms adjusted to {}ms", self.ai_delay_ms, ai_delay_ms);
        }

        Self {
            rows,
            cols,
            start_level,
            grid: self.grid,
            ai_delay_ms,
        }
    }

    /// Build a clamped config from loosely formatted option strings.
    ///
    /// Numbers must be plain digits; the grid flag accepts `true`, `false`,
    /// `1` or `0`. Missing, empty or malformed values take the default.
    pub fn from_raw_options(
        rows: Option<&str>,
        cols: Option<&str>,
        level: Option<&str>,
        grid: Option<&str>,
    ) -> Self {
        Self::default().with_raw_options(rows, cols, level, grid)
    }

    /// Like [`GameConfig::from_raw_options`], but missing or malformed values
    /// keep the current setting instead of the default.
    pub fn with_raw_options(
        self,
        rows: Option<&str>,
        cols: Option<&str>,
        level: Option<&str>,
        grid: Option<&str>,
    ) -> Self {
        Self {
            rows: parse_digits(rows).map_or(self.rows, saturate_usize),
            cols: parse_digits(cols).map_or(self.cols, saturate_usize),
            start_level: parse_digits(level)
                .map_or(self.start_level, |v| u32::try_from(v).unwrap_or(u32::MAX)),
            grid: parse_flag(grid).unwrap_or(self.grid),
            ai_delay_ms: self.ai_delay_ms,
        }
        .clamped()
    }

    /// Read a TOML config file. Missing keys take their defaults; the result is
    /// not clamped.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let contents = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(toml::from_str(&contents)?)
    }
}

fn parse_digits(raw: Option<&str>) -> Option<u64> {
    let s = raw?.trim();
    if s.is_empty() || !s.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    // All digits: only overflow can fail, which saturates.
    Some(s.parse().unwrap_or(u64::MAX))
}

fn saturate_usize(v: u64) -> usize {
    usize::try_from(v).unwrap_or(usize::MAX)
}

fn parse_flag(raw: Option<&str>) -> Option<bool> {
    match raw?.trim() {
        "true" | "1" => Some(true),
        "false" | "0" => Some(false),
        _ => None,
    }
}

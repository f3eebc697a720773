//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the application.
//! All types are pure data with no external dependencies, so they can be used
//! by the engine, the terminal renderer and the key mapping alike.
//!
//! # Board Dimensions
//!
//! The well is configurable. Limits are derived from the piece size:
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `MIN_ROWS` | 6 | `PIECE_SIZE + 2` |
//! | `MAX_ROWS` | 100 | |
//! | `MIN_COLS` | 4 | `PIECE_SIZE` |
//! | `MAX_COLS` | 30 | |
//! | `DEFAULT_ROWS` | 20 | |
//! | `DEFAULT_COLS` | 10 | |
//!
//! # Timing
//!
//! The tick interval starts at `DELAY_BASE_MS / (level + 1)` and is recomputed on
//! every level-up as the same quotient minus `DELAY_TRIM_MS` (only while the
//! quotient exceeds `DELAY_TRIM_MS`). Watch mode runs at a fixed
//! `AI_DELAY_MS` once the first piece has settled.
//!
//! # Examples
//!
//! ```
//! use uw_tetris_types::{Command, Mark, ShapeKind, PIECE_SIZE};
//!
//! assert_eq!(PIECE_SIZE, 4);
//! assert_eq!(ShapeKind::from_str("line"), Some(ShapeKind::Line));
//! assert_eq!(Command::from_str("moveLeft"), Some(Command::MoveLeft));
//! assert!(Mark::Locked.is_occupied());
//! ```

/// Number of cells in every piece.
pub const PIECE_SIZE: usize = 4;

/// Default number of rows in the well
pub const DEFAULT_ROWS: usize = 20;

/// Default number of columns in the well
pub const DEFAULT_COLS: usize = 10;

/// Default starting level
pub const DEFAULT_LEVEL: u32 = 0;

/// Grid lines are hidden by default
pub const DEFAULT_GRID: bool = false;

pub const MIN_ROWS: usize = PIECE_SIZE + 2;
pub const MAX_ROWS: usize = 100;
pub const MIN_COLS: usize = PIECE_SIZE;
pub const MAX_COLS: usize = 30;

/// Highest level a game may start at.
pub const MAX_START_LEVEL: u32 = 50;

/// Points per cleared line, multiplied by `level + 1`.
pub const LINES_BASE: u32 = 200;

/// Bonus dividend: a spawn awards `SCORE_BASE / moves` when `moves > 0`.
pub const SCORE_BASE: u32 = 100;

/// Lines needed per level.
pub const LEVEL_BASE: u32 = 10;

/// Tick interval at level 0 (ms).
pub const DELAY_BASE_MS: u32 = 1000;

/// Subtracted from the recomputed delay on level-up while it stays above this value.
pub const DELAY_TRIM_MS: u32 = 10;

/// Tick interval used in watch mode once the AI is driving.
pub const AI_DELAY_MS: u32 = 100;

/// Occupancy state of a single cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Mark {
    /// Unoccupied
    #[default]
    Empty,
    /// Part of the currently falling piece
    Active,
    /// Permanently settled
    Locked,
}

impl Mark {
    /// True for `Active` and `Locked`.
    pub fn is_occupied(&self) -> bool {
        !matches!(self, Mark::Empty)
    }

    /// Single-character form used by board fixtures.
    pub fn as_char(&self) -> char {
        match self {
            Mark::Empty => '.',
            Mark::Active => '@',
            Mark::Locked => '#',
        }
    }

    pub fn from_char(ch: char) -> Option<Self> {
        match ch {
            '.' => Some(Mark::Empty),
            '@' => Some(Mark::Active),
            '#' => Some(Mark::Locked),
            _ => None,
        }
    }
}

/// Display tag carried by every cell.
///
/// `Empty` is the sentinel for unoccupied cells. `Gray` marks settled cells that
/// did not come from a spawned piece (board fixtures, imported boards).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum CellColor {
    #[default]
    Empty,
    Orange,
    Red,
    Cyan,
    Magenta,
    Yellow,
    Blue,
    Green,
    Gray,
}

/// The seven piece shapes
///
/// Each shape has a fixed spawn layout and color:
/// - **Square**: orange, 2x2
/// - **Line**: red, 1x4
/// - **Pyramid**: cyan, T-shaped
/// - **LLeft**: magenta, hook down on the left
/// - **LRight**: yellow, hook down on the right
/// - **SLeft**: blue, Z-shaped
/// - **SRight**: green, S-shaped
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ShapeKind {
    Square,
    Line,
    Pyramid,
    LLeft,
    LRight,
    SLeft,
    SRight,
}

impl ShapeKind {
    /// All shapes, in selection order (index = random draw).
    pub const ALL: [ShapeKind; 7] = [
        ShapeKind::Square,
        ShapeKind::Line,
        ShapeKind::Pyramid,
        ShapeKind::LLeft,
        ShapeKind::LRight,
        ShapeKind::SLeft,
        ShapeKind::SRight,
    ];

    /// Spawn layout as `(row, col)` offsets from the spawn pivot.
    ///
    /// Cell order matters: rotation treats the Line's fourth cell specially.
    pub fn offsets(&self) -> [(i32, i32); PIECE_SIZE] {
        match self {
            ShapeKind::Square => [(0, 0), (1, 0), (0, 1), (1, 1)],
            ShapeKind::Line => [(0, -1), (0, 0), (0, 1), (0, 2)],
            ShapeKind::Pyramid => [(0, -1), (0, 0), (1, 0), (0, 1)],
            ShapeKind::LLeft => [(0, -1), (1, -1), (0, 0), (0, 1)],
            ShapeKind::LRight => [(0, -1), (0, 0), (0, 1), (1, 1)],
            ShapeKind::SLeft => [(0, -1), (0, 0), (1, 0), (1, 1)],
            ShapeKind::SRight => [(1, -1), (0, 0), (1, 0), (0, 1)],
        }
    }

    pub fn color(&self) -> CellColor {
        match self {
            ShapeKind::Square => CellColor::Orange,
            ShapeKind::Line => CellColor::Red,
            ShapeKind::Pyramid => CellColor::Cyan,
            ShapeKind::LLeft => CellColor::Magenta,
            ShapeKind::LRight => CellColor::Yellow,
            ShapeKind::SLeft => CellColor::Blue,
            ShapeKind::SRight => CellColor::Green,
        }
    }

    /// Parse shape from string (case-insensitive, `_`/`-` ignored)
    ///
    /// # Examples
    ///
    /// ```
    /// use uw_tetris_types::ShapeKind;
    ///
    /// assert_eq!(ShapeKind::from_str("Square"), Some(ShapeKind::Square));
    /// assert_eq!(ShapeKind::from_str("l_left"), Some(ShapeKind::LLeft));
    /// assert_eq!(ShapeKind::from_str("s-right"), Some(ShapeKind::SRight));
    /// assert_eq!(ShapeKind::from_str("t"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        let key: String = s
            .chars()
            .filter(|c| *c != '_' && *c != '-')
            .collect::<String>()
            .to_lowercase();
        match key.as_str() {
            "square" => Some(ShapeKind::Square),
            "line" => Some(ShapeKind::Line),
            "pyramid" => Some(ShapeKind::Pyramid),
            "lleft" => Some(ShapeKind::LLeft),
            "lright" => Some(ShapeKind::LRight),
            "sleft" => Some(ShapeKind::SLeft),
            "sright" => Some(ShapeKind::SRight),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ShapeKind::Square => "square",
            ShapeKind::Line => "line",
            ShapeKind::Pyramid => "pyramid",
            ShapeKind::LLeft => "lLeft",
            ShapeKind::LRight => "lRight",
            ShapeKind::SLeft => "sLeft",
            ShapeKind::SRight => "sRight",
        }
    }
}

/// Move commands a player (human or AI) can issue against the falling piece.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Command {
    /// Move straight down until blocked, then lock
    Drop,
    /// Rotate using the fixed lookup table
    Rotate,
    /// Move one column left
    MoveLeft,
    /// Move one column right
    MoveRight,
    /// Move one row down; lock if blocked
    SoftDrop,
}

impl Command {
    /// Commands the random opponent chooses from. Downward moves are left to gravity.
    pub const AI_CHOICES: [Command; 3] = [Command::Rotate, Command::MoveLeft, Command::MoveRight];

    /// Parse command from string (case-insensitive)
    ///
    /// # Examples
    ///
    /// ```
    /// use uw_tetris_types::Command;
    ///
    /// assert_eq!(Command::from_str("drop"), Some(Command::Drop));
    /// assert_eq!(Command::from_str("SOFTDROP"), Some(Command::SoftDrop));
    /// assert_eq!(Command::from_str("hold"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "drop" => Some(Command::Drop),
            "rotate" => Some(Command::Rotate),
            "moveleft" => Some(Command::MoveLeft),
            "moveright" => Some(Command::MoveRight),
            "softdrop" => Some(Command::SoftDrop),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Command::Drop => "drop",
            Command::Rotate => "rotate",
            Command::MoveLeft => "moveLeft",
            Command::MoveRight => "moveRight",
            Command::SoftDrop => "softDrop",
        }
    }

    /// `(d_col, d_row)` for translating commands, `None` for drop and rotate.
    pub fn displacement(&self) -> Option<(i32, i32)> {
        match self {
            Command::MoveLeft => Some((-1, 0)),
            Command::MoveRight => Some((1, 0)),
            Command::SoftDrop => Some((0, 1)),
            Command::Drop | Command::Rotate => None,
        }
    }
}

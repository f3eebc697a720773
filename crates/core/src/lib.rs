//! Core game logic module - pure, deterministic, and testable
//!
//! This crate contains the game rules and the state machine that drives them.
//! It knows nothing about terminals or key codes; a front-end feeds it ticks and
//! commands and reads back a [`GameSnapshot`].
//!
//! # Module Structure
//!
//! - [`cell`]: one grid location, mark plus color
//! - [`board`]: the well, line detection and clearing, spawn-area check
//! - [`piece`]: the falling piece, translation and table-driven rotation
//! - [`controller`]: spawn, gravity, lock, line settlement, game over, pause
//! - [`scoring`]: score, level and speed arithmetic
//! - [`rng`]: injectable randomness for shapes and the random opponent
//! - [`shared`]: mutex handle for multi-threaded drivers
//! - [`config`]: validated game options, TOML loading
//!
//! # Game Rules
//!
//! - Seven shapes, chosen uniformly at every spawn
//! - A piece that cannot move down locks immediately; no lock delay
//! - Completed rows are removed on the tick after the lock, and points are paid
//!   for lines and for using few moves
//! - Every ten lines past the starting level the game speeds up
//! - The game ends when the centered spawn area of the top two rows is occupied
//!
//! # Example
//!
//! ```
//! use uw_tetris_core::{GameConfig, GameController, Phase, SimpleRng};
//!
//! let mut game = GameController::new(&GameConfig::default(), SimpleRng::new(12345)).unwrap();
//! game.spawn_new_game(true).unwrap();
//!
//! game.move_right_command().unwrap();
//! game.rotate_command().unwrap();
//! game.drop_command().unwrap();
//! assert_eq!(game.phase(), Phase::Locked);
//!
//! // The next tick settles the board and spawns.
//! game.tick().unwrap();
//! assert!(game.score() > 0);
//! ```

pub mod board;
pub mod cell;
pub mod config;
pub mod controller;
pub mod error;
pub mod piece;
pub mod rng;
pub mod scoring;
pub mod shared;
pub mod snapshot;

pub use uw_tetris_types as types;

// Re-export commonly used types for convenience
pub use board::{Board, CompletedLines};
pub use cell::Cell;
pub use config::{ConfigError, GameConfig};
pub use controller::{GameController, MoveOutcome, Phase, SpawnReport, TickOutcome};
pub use error::{EngineError, Result, Transition};
pub use piece::{Piece, Pos};
pub use rng::{RandomSource, ScriptedRng, SimpleRng};
pub use scoring::{base_delay_ms, level_delay_ms, should_level_up, spawn_score};
pub use shared::SharedGame;
pub use snapshot::GameSnapshot;

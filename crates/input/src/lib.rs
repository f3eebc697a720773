//! Terminal input module (engine-facing).
//!
//! Maps `crossterm` key events onto [`Input`]s. The mapping is stateless: the
//! engine itself decides whether a command applies (paused, watch mode, no
//! piece falling).

pub mod map;

pub use uw_tetris_types as types;

pub use map::{handle_key_event, Input};

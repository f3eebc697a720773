//! UW Tetris (workspace facade crate).
//!
//! The implementation lives in dedicated crates under `crates/`; this package
//! re-exports them as `uw_tetris::{core,input,term,types}` and builds the
//! terminal binary.

pub use uw_tetris_core as core;
pub use uw_tetris_input as input;
pub use uw_tetris_term as term;
pub use uw_tetris_types as types;

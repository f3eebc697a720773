//! Terminal rendering for the game.
//!
//! Rendering happens in two steps: [`GameView`] draws a [`GameSnapshot`] into a
//! [`FrameBuffer`] (pure, unit-testable), and [`TerminalRenderer`] flushes the
//! framebuffer to the terminal, writing only the runs that changed since the
//! previous frame.
//!
//! [`GameSnapshot`]: uw_tetris_core::GameSnapshot

pub mod fb;
pub mod game_view;
pub mod renderer;

pub use uw_tetris_core as core;
pub use uw_tetris_types as types;

pub use fb::{FrameBuffer, Glyph, Rgb, Style};
pub use game_view::{GameView, Viewport};
pub use renderer::{encode_diff_into, encode_full_into, TerminalRenderer};

//! RNG module - injectable randomness for shape selection and the random opponent
//!
//! The controller draws every random decision through [`RandomSource`], so a
//! seeded [`SimpleRng`] reproduces a whole game and a [`ScriptedRng`] lets tests
//! fix the exact sequence of shapes and opponent moves.

use crate::types::{Command, ShapeKind};

/// Source of uniform draws.
pub trait RandomSource {
    /// Uniform value in `[0, max)`. `max` is never zero.
    fn next_range(&mut self, max: u32) -> u32;

    /// Pick one of the seven shapes uniformly.
    fn next_shape(&mut self) -> ShapeKind {
        ShapeKind::ALL[self.next_range(ShapeKind::ALL.len() as u32) as usize]
    }

    /// Pick the random opponent's next command uniformly.
    fn next_ai_command(&mut self) -> Command {
        Command::AI_CHOICES[self.next_range(Command::AI_CHOICES.len() as u32) as usize]
    }
}

/// Simple LCG (Linear Congruential Generator) RNG
/// Uses constants from Numerical Recipes
#[derive(Debug, Clone)]
pub struct SimpleRng {
    state: u32,
}

impl SimpleRng {
    /// Create a new RNG with the given seed
    pub fn new(seed: u32) -> Self {
        // Avoid 0 seed which would produce all zeros
        let state = if seed == 0 { 1 } else { seed };
        Self { state }
    }

    /// Generate next random u32
    pub fn next_u32(&mut self) -> u32 {
        // LCG formula: (a * state + c) mod m
        // Using Numerical Recipes constants: a=1664525, c=1013904223, m=2^32
        self.state = self.state.wrapping_mul(1664525).wrapping_add(1013904223);
        self.state
    }

    /// Current state; feeding it back into [`SimpleRng::new`] resumes the sequence.
    pub fn state(&self) -> u32 {
        self.state
    }
}

impl RandomSource for SimpleRng {
    fn next_range(&mut self, max: u32) -> u32 {
        // Low LCG bits have short periods; draw from the high half.
        (self.next_u32() >> 16) % max
    }
}

impl Default for SimpleRng {
    fn default() -> Self {
        Self::new(1)
    }
}

/// Replays a fixed list of draws, cycling when exhausted.
///
/// Each value is reduced modulo the requested range, so `ScriptedRng::shapes`
/// and `ScriptedRng::new` can share one script.
#[derive(Debug, Clone)]
pub struct ScriptedRng {
    script: Vec<u32>,
    pos: usize,
}

impl ScriptedRng {
    pub fn new(script: Vec<u32>) -> Self {
        assert!(!script.is_empty(), "script must contain at least one draw");
        Self { script, pos: 0 }
    }

    /// Script that spawns exactly these shapes, in order.
    pub fn shapes(kinds: &[ShapeKind]) -> Self {
        Self::new(
            kinds
                .iter()
                .map(|k| ShapeKind::ALL.iter().position(|a| a == k).unwrap_or(0) as u32)
                .collect(),
        )
    }

    /// Number of draws consumed so far.
    pub fn draws(&self) -> usize {
        self.pos
    }
}

impl RandomSource for ScriptedRng {
    fn next_range(&mut self, max: u32) -> u32 {
        let value = self.script[self.pos % self.script.len()];
        self.pos += 1;
        value % max
    }
}

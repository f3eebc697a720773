//! Thread-safe handle for drivers with several event sources.
//!
//! A tick thread and an input thread each hold a clone of [`SharedGame`]. Every
//! call takes the one mutex for its whole duration, and moves are validated
//! inside that critical section, so a command never acts on a board it checked
//! earlier. Calls are applied in lock-acquisition order.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use crate::controller::{GameController, MoveOutcome, TickOutcome};
use crate::error::Result;
use crate::rng::{RandomSource, SimpleRng};
use crate::snapshot::GameSnapshot;
use crate::types::Command;

#[derive(Debug)]
pub struct SharedGame<R: RandomSource = SimpleRng> {
    inner: Arc<Mutex<GameController<R>>>,
}

impl<R: RandomSource> Clone for SharedGame<R> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<R: RandomSource> SharedGame<R> {
    pub fn new(game: GameController<R>) -> Self {
        Self {
            inner: Arc::new(Mutex::new(game)),
        }
    }

    /// Exclusive access for compound operations.
    ///
    /// A panic in another holder does not leave the board half-written (moves
    /// are validated before any cell is touched), so a poisoned lock is
    /// recovered rather than propagated.
    pub fn lock(&self) -> MutexGuard<'_, GameController<R>> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }

    pub fn tick(&self) -> Result<TickOutcome> {
        self.lock().tick()
    }

    pub fn command(&self, command: Command) -> Result<MoveOutcome> {
        self.lock().command(command)
    }

    pub fn toggle_pause(&self) -> bool {
        self.lock().toggle_pause()
    }

    pub fn spawn_new_game(&self, is_human: bool) -> Result<()> {
        self.lock().spawn_new_game(is_human)
    }

    pub fn snapshot_into(&self, out: &mut GameSnapshot) {
        self.lock().snapshot_into(out)
    }

    pub fn snapshot(&self) -> GameSnapshot {
        self.lock().snapshot()
    }
}

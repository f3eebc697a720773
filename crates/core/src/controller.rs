//! Game controller - the tick-driven state machine
//!
//! The controller owns the [`Board`] and the falling [`Piece`] and is driven by
//! two kinds of calls: [`GameController::tick`] from a repeating timer, and the
//! move commands from a human or the random opponent. Both funnel into the
//! same routing step, so every move is validated against the board as it is at
//! that moment.
//!
//! ```text
//!   reset(start) ──► Falling ──(blocked going down)──► Locked
//!        │              ▲                                 │ tick
//!   reset(!start)       └──────────── spawn ◄─────────────┤
//!        ▼                                                │ well full
//!      Idle                                            GameOver
//! ```
//!
//! Pausing is orthogonal to the phase: while paused, ticks and commands are
//! ignored and nothing changes.

use std::time::Duration;

use log::{debug, info, trace};

use crate::board::{Board, CompletedLines};
use crate::config::GameConfig;
use crate::error::Result;
use crate::piece::Piece;
use crate::rng::{RandomSource, SimpleRng};
use crate::scoring::{base_delay_ms, level_delay_ms, should_level_up, spawn_score};
use crate::snapshot::GameSnapshot;
use crate::types::Command;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Phase {
    /// No piece and no timer, after a reset that did not start a game.
    Idle,
    Falling,
    /// The piece has settled; the next tick clears lines and spawns.
    Locked,
    /// Terminal until the next reset.
    GameOver,
}

/// Result of one routed move.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveOutcome {
    Applied,
    /// The move did not fit; nothing changed.
    Blocked,
    /// The piece was locked into the board.
    Locked,
    /// The command was not routed (paused, wrong phase, or watch mode).
    Ignored,
}

/// What happened on the tick that ended the previous piece.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpawnReport {
    /// Cleared rows as detected, bottom to top.
    pub cleared_rows: CompletedLines,
    pub score_delta: u32,
    pub level_up: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TickOutcome {
    /// Paused, idle or game over.
    Ignored,
    /// Gravity moved the piece down one row. In watch mode the opponent's
    /// command and its outcome follow.
    Fell {
        opponent: Option<(Command, MoveOutcome)>,
    },
    /// Gravity could not move the piece, so it locked.
    Locked,
    /// Lines were settled and a new piece is falling.
    Spawned(SpawnReport),
    /// Lines were settled but the spawn area is occupied.
    GameOver(SpawnReport),
}

/// Owns the board and the falling piece; see the module docs for the phases.
#[derive(Debug, Clone)]
pub struct GameController<R: RandomSource = SimpleRng> {
    board: Board,
    piece: Option<Piece>,
    rng: R,
    phase: Phase,
    lines: u32,
    score: u32,
    level: u32,
    start_level: u32,
    /// Routed moves since the last spawn, applied or not.
    moves: u32,
    delay_ms: u32,
    ai_delay_ms: u32,
    paused: bool,
    is_human: bool,
    grid: bool,
}

impl<R: RandomSource> GameController<R> {
    /// Build an idle controller. The config should already be clamped; board
    /// dimensions outside the supported range are an error.
    pub fn new(config: &GameConfig, rng: R) -> Result<Self> {
        let board = Board::new(config.rows, config.cols)?;
        Ok(Self {
            board,
            piece: None,
            rng,
            phase: Phase::Idle,
            lines: 0,
            score: 0,
            level: config.start_level,
            start_level: config.start_level,
            moves: 0,
            delay_ms: base_delay_ms(config.start_level),
            ai_delay_ms: config.ai_delay_ms,
            paused: false,
            is_human: true,
            grid: config.grid,
        })
    }

    /// Clear the board and counters, then either spawn the first piece or
    /// wait in [`Phase::Idle`].
    pub fn reset_game(&mut self, is_human: bool, start_immediately: bool) -> Result<()> {
        self.board.clear();
        self.piece = None;
        self.lines = 0;
        self.score = 0;
        self.level = self.start_level;
        self.moves = 0;
        self.delay_ms = base_delay_ms(self.level);
        self.paused = false;
        self.is_human = is_human;
        self.phase = Phase::Idle;

        info!(
            "new {} game on {}x{} from level {}",
            if is_human { "human" } else { "watch" },
            self.board.rows(),
            self.board.cols(),
            self.level
        );

        if start_immediately {
            self.spawn_piece()?;
        }
        Ok(())
    }

    /// Reset and start playing (`human`) or watching the random opponent.
    pub fn spawn_new_game(&mut self, is_human: bool) -> Result<()> {
        self.reset_game(is_human, true)
    }

    /// Rebuild the board for a new configuration and reset without starting.
    pub fn reconfigure(&mut self, config: &GameConfig) -> Result<()> {
        self.board = Board::new(config.rows, config.cols)?;
        self.start_level = config.start_level;
        self.ai_delay_ms = config.ai_delay_ms;
        self.grid = config.grid;
        self.reset_game(self.is_human, false)
    }

    /// Flip the pause flag and return the new value.
    pub fn toggle_pause(&mut self) -> bool {
        self.paused = !self.paused;
        debug!("paused: {}", self.paused);
        self.paused
    }

    /// Pause unless already paused.
    pub fn pause(&mut self) {
        if !self.paused {
            self.toggle_pause();
        }
    }

    /// Advance the game by one timer period.
    pub fn tick(&mut self) -> Result<TickOutcome> {
        if self.paused {
            trace!("tick ignored while paused");
            return Ok(TickOutcome::Ignored);
        }

        match self.phase {
            Phase::Idle | Phase::GameOver => Ok(TickOutcome::Ignored),
            Phase::Locked => self.settle_and_spawn(),
            Phase::Falling => {
                if self.route(Command::SoftDrop)? == MoveOutcome::Locked {
                    return Ok(TickOutcome::Locked);
                }

                let opponent = if self.is_human {
                    None
                } else {
                    let command = self.rng.next_ai_command();
                    Some((command, self.route(command)?))
                };
                Ok(TickOutcome::Fell { opponent })
            }
        }
    }

    /// Apply a human command. Ignored unless a piece is falling, the game is
    /// not paused, and the human is playing.
    pub fn command(&mut self, command: Command) -> Result<MoveOutcome> {
        if self.paused || self.phase != Phase::Falling || !self.is_human {
            trace!("{} ignored in {:?}", command.as_str(), self.phase);
            return Ok(MoveOutcome::Ignored);
        }
        self.route(command)
    }

    /// Move down until blocked, then lock.
    pub fn drop_command(&mut self) -> Result<MoveOutcome> {
        self.command(Command::Drop)
    }

    pub fn rotate_command(&mut self) -> Result<MoveOutcome> {
        self.command(Command::Rotate)
    }

    pub fn move_left_command(&mut self) -> Result<MoveOutcome> {
        self.command(Command::MoveLeft)
    }

    pub fn move_right_command(&mut self) -> Result<MoveOutcome> {
        self.command(Command::MoveRight)
    }

    /// Move down one row, locking if that is blocked.
    pub fn soft_drop_command(&mut self) -> Result<MoveOutcome> {
        self.command(Command::SoftDrop)
    }

    /// The single path every move takes, gravity included.
    fn route(&mut self, command: Command) -> Result<MoveOutcome> {
        self.moves = self.moves.saturating_add(1);

        let Some(piece) = self.piece.as_mut() else {
            return Ok(MoveOutcome::Ignored);
        };
        let board = &mut self.board;

        let outcome = match command.displacement() {
            Some((d_col, d_row)) => {
                if piece.move_by(board, d_col, d_row)? {
                    MoveOutcome::Applied
                } else if d_row > 0 {
                    piece.set_inactive(board)?;
                    MoveOutcome::Locked
                } else {
                    MoveOutcome::Blocked
                }
            }
            None if command == Command::Rotate => {
                if piece.rotate(board)? {
                    MoveOutcome::Applied
                } else {
                    MoveOutcome::Blocked
                }
            }
            None => {
                while piece.move_by(board, 0, 1)? {}
                piece.set_inactive(board)?;
                MoveOutcome::Locked
            }
        };

        trace!("{} -> {:?}", command.as_str(), outcome);
        if outcome == MoveOutcome::Locked {
            self.phase = Phase::Locked;
            debug!(
                "{} locked after {} moves",
                piece.kind().as_str(),
                self.moves
            );
        }
        Ok(outcome)
    }

    /// Clear completed lines, update score, level and speed, then spawn the
    /// next piece or end the game.
    fn settle_and_spawn(&mut self) -> Result<TickOutcome> {
        let mut cleared = CompletedLines::new();
        for row in self.board.detect_completed_lines() {
            // Row 0 has nothing above it to shift down.
            if row == 0 {
                continue;
            }
            // Each clear shifts the remaining (higher) rows down by one.
            self.board.clear_line(row + cleared.len())?;
            cleared.push(row);
        }

        let count = cleared.len() as u32;
        self.lines = self.lines.saturating_add(count);
        let score_delta = spawn_score(self.level, count, self.moves);
        self.score = self.score.saturating_add(score_delta);
        if count > 0 {
            debug!("cleared {count} lines: {:?}", cleared.as_slice());
        }

        let level_up = should_level_up(self.lines, self.level, self.start_level);
        if level_up {
            self.level += 1;
            debug!("level {} reached at {} lines", self.level, self.lines);
        }

        if !self.is_human {
            self.delay_ms = self.ai_delay_ms;
        } else if level_up {
            self.delay_ms = level_delay_ms(self.level);
        }
        self.moves = 0;

        let report = SpawnReport {
            cleared_rows: cleared,
            score_delta,
            level_up,
        };

        if self.board.is_full() {
            self.phase = Phase::GameOver;
            info!(
                "game over: score {}, lines {}, level {}",
                self.score, self.lines, self.level
            );
            return Ok(TickOutcome::GameOver(report));
        }

        self.spawn_piece()?;
        Ok(TickOutcome::Spawned(report))
    }

    fn spawn_piece(&mut self) -> Result<()> {
        let piece = Piece::spawn_random(&mut self.board, &mut self.rng)?;
        debug!("spawned {}", piece.kind().as_str());
        self.piece = Some(piece);
        self.phase = Phase::Falling;
        Ok(())
    }

    /// Timer period while a game is running, `None` while the timer is stopped.
    pub fn tick_interval(&self) -> Option<Duration> {
        match self.phase {
            Phase::Falling | Phase::Locked => Some(Duration::from_millis(self.delay_ms as u64)),
            Phase::Idle | Phase::GameOver => None,
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    #[cfg(test)]
    pub(crate) fn board_mut(&mut self) -> &mut Board {
        &mut self.board
    }

    pub fn piece(&self) -> Option<&Piece> {
        self.piece.as_ref()
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn game_over(&self) -> bool {
        self.phase == Phase::GameOver
    }

    pub fn lines(&self) -> u32 {
        self.lines
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn level(&self) -> u32 {
        self.level
    }

    pub fn start_level(&self) -> u32 {
        self.start_level
    }

    pub fn moves(&self) -> u32 {
        self.moves
    }

    pub fn delay_ms(&self) -> u32 {
        self.delay_ms
    }

    pub fn paused(&self) -> bool {
        self.paused
    }

    pub fn is_human(&self) -> bool {
        self.is_human
    }

    pub fn grid(&self) -> bool {
        self.grid
    }

    /// Copy the renderer-visible state into `out`, reusing its allocation.
    pub fn snapshot_into(&self, out: &mut GameSnapshot) {
        out.rows = self.board.rows();
        out.cols = self.board.cols();
        out.cells.clear();
        out.cells.extend_from_slice(self.board.cells());
        out.phase = self.phase;
        out.paused = self.paused;
        out.is_human = self.is_human;
        out.grid = self.grid;
        out.lines = self.lines;
        out.score = self.score;
        out.level = self.level;
        out.start_level = self.start_level;
    }

    pub fn snapshot(&self) -> GameSnapshot {
        let mut s = GameSnapshot::default();
        self.snapshot_into(&mut s);
        s
    }
}

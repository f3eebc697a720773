//! Terminal runner (default binary).
//!
//! Single-threaded loop: render, poll input until the next tick is due, then
//! tick. The tick interval comes from the controller, so it follows level-ups
//! and watch mode without the loop knowing about either.

use std::fs::File;
use std::path::{Path, PathBuf};
use std::time::{Duration, Instant, SystemTime, UNIX_EPOCH};

use anyhow::{Context, Result};
use clap::Parser;
use crossterm::event::{self, Event};
use log::info;

use uw_tetris::core::{GameConfig, GameController, GameSnapshot, SimpleRng};
use uw_tetris::input::{handle_key_event, Input};
use uw_tetris::term::{FrameBuffer, GameView, TerminalRenderer, Viewport};

/// Poll timeout while no game is running.
const IDLE_POLL: Duration = Duration::from_millis(250);

/// Falling-block puzzle in the terminal.
#[derive(Debug, Parser)]
#[command(
    name = "uw-tetris",
    version,
    about = "Falling-block puzzle in the terminal, with a random-move opponent to watch.",
    long_about = "Falling-block puzzle in the terminal.\n\n\
        KEYS:\n  1  Play game    2  Watch game    3 / P  Pause    Q / Esc  Quit\n  \
        Left or G  Left    Right or J  Right    Up or H  Rotate\n  \
        B  Down one row    Down or Space  Drop\n\n\
        Numeric options that are not plain digits fall back to their defaults; \
        out-of-range values are clamped."
)]
struct Args {
    /// Well height in rows (6-100, default 20).
    #[arg(short, long, value_name = "ROWS")]
    rows: Option<String>,

    /// Well width in columns (4-30, default 10).
    #[arg(short, long, value_name = "COLS")]
    cols: Option<String>,

    /// Starting level (0-50, default 0).
    #[arg(short, long, value_name = "LEVEL")]
    level: Option<String>,

    /// Draw grid dots in empty cells: true, false, 1 or 0.
    #[arg(short, long, value_name = "BOOL")]
    grid: Option<String>,

    /// Start by watching the random opponent instead of playing.
    #[arg(long)]
    watch: bool,

    /// TOML file with rows, cols, start_level, grid and ai_delay_ms. Command-line
    /// options override it.
    #[arg(long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Seed for shape and opponent choices. Defaults to the clock.
    #[arg(long)]
    seed: Option<u32>,

    /// Write logs to this file (filter with RUST_LOG, default info).
    #[arg(long, value_name = "FILE")]
    log_file: Option<PathBuf>,
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_logging(args.log_file.as_deref())?;

    let base = match &args.config {
        Some(path) => GameConfig::load(path)?,
        None => GameConfig::default(),
    };
    let config = base.with_raw_options(
        args.rows.as_deref(),
        args.cols.as_deref(),
        args.level.as_deref(),
        args.grid.as_deref(),
    );

    let seed = args.seed.unwrap_or_else(seed_from_clock);
    info!("starting with {config:?}, seed {seed}");

    let mut game = GameController::new(&config, SimpleRng::new(seed))?;
    game.spawn_new_game(!args.watch)?;

    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term, &mut game);

    // Always try to restore terminal state.
    let _ = term.exit();
    result
}

/// Logs go to a file or nowhere: stderr would draw over the alternate screen.
fn init_logging(path: Option<&Path>) -> Result<()> {
    let Some(path) = path else {
        return Ok(());
    };
    let file = File::create(path)
        .with_context(|| format!("failed to create log file {}", path.display()))?;

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format_timestamp(None)
        .target(env_logger::Target::Pipe(Box::new(file)))
        .init();
    Ok(())
}

fn seed_from_clock() -> u32 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.subsec_nanos() ^ d.as_secs() as u32)
        .unwrap_or(1)
}

fn run(term: &mut TerminalRenderer, game: &mut GameController) -> Result<()> {
    let view = GameView::default();
    let mut fb = FrameBuffer::new(0, 0);
    let mut snapshot = GameSnapshot::default();
    let mut last_tick = Instant::now();

    loop {
        game.snapshot_into(&mut snapshot);
        let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
        view.render_into(&snapshot, Viewport::new(w, h), &mut fb);
        term.draw_swap(&mut fb)?;

        let timeout = game
            .tick_interval()
            .map_or(IDLE_POLL, |interval| interval.saturating_sub(last_tick.elapsed()));

        if event::poll(timeout)? {
            match event::read()? {
                Event::Key(key) => match handle_key_event(key) {
                    Some(Input::Quit) => return Ok(()),
                    Some(Input::NewGame { human }) => {
                        game.spawn_new_game(human)?;
                        last_tick = Instant::now();
                    }
                    Some(Input::TogglePause) => {
                        game.toggle_pause();
                    }
                    Some(Input::Command(command)) => {
                        game.command(command)?;
                    }
                    None => {}
                },
                Event::FocusLost => game.pause(),
                Event::Resize(..) => term.invalidate(),
                _ => {}
            }
        }

        match game.tick_interval() {
            Some(interval) if last_tick.elapsed() >= interval => {
                last_tick = Instant::now();
                game.tick()?;
            }
            Some(_) => {}
            None => last_tick = Instant::now(),
        }
    }
}

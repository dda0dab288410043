//! Terminal runner (default binary).
//!
//! Reads keys through crossterm, feeds frame deltas to the game and draws
//! through the framebuffer renderer. Logging goes to a file only, so the
//! terminal frame is never corrupted.

use std::fs::File;
use std::path::{Path, PathBuf};
use std::sync::{mpsc, Mutex};
use std::time::{Duration, Instant, SystemTime, UNIX_EPOCH};

use anyhow::{Context, Result};
use clap::Parser;
use crossterm::event::{self, Event};
use crossterm::terminal;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

use gravity_tetris::core::{FrameClock, GameSnapshot, GameState, LifecycleEvent, SessionSummary};
use gravity_tetris::input::{handle_key_event, should_quit};
use gravity_tetris::term::{FrameBuffer, GameView, TerminalRenderer, Viewport};
use gravity_tetris::types::{GameAction, TICK_MS};

#[derive(Debug, Parser)]
#[command(name = "gravity-tetris", version, about = "Falling blocks with drifting gravity zones")]
struct Args {
    /// RNG seed for pieces and zones (default: derived from the clock).
    #[arg(long)]
    seed: Option<u64>,

    /// Frame period in milliseconds.
    #[arg(
        long,
        default_value_t = TICK_MS as u64,
        value_parser = clap::value_parser!(u64).range(1..=1000)
    )]
    frame_ms: u64,

    /// Write logs to this file (filter from RUST_LOG, default `info`).
    #[arg(long)]
    log_file: Option<PathBuf>,

    /// Print a JSON summary of the session on exit.
    #[arg(long)]
    summary: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();
    if let Some(path) = &args.log_file {
        init_logging(path)?;
    }

    let seed = args.seed.unwrap_or_else(clock_seed);
    info!(seed, frame_ms = args.frame_ms, "starting");

    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term, &args, seed);

    // Always try to restore terminal state.
    let _ = term.exit();
    let snap = result?;

    let summary = SessionSummary::from(&snap);
    info!(
        score = summary.score,
        level = summary.level,
        lines = summary.lines,
        "session ended"
    );
    if args.summary {
        println!("{}", serde_json::to_string_pretty(&summary)?);
    }
    Ok(())
}

fn init_logging(path: &Path) -> Result<()> {
    let file = File::create(path)
        .with_context(|| format!("failed to create log file {}", path.display()))?;
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .init();
    Ok(())
}

fn clock_seed() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_nanos() as u64)
        .unwrap_or(1)
}

fn run(term: &mut TerminalRenderer, args: &Args, seed: u64) -> Result<GameSnapshot> {
    let (tx, rx) = mpsc::channel::<LifecycleEvent>();
    let mut game = GameState::with_hooks(seed, tx);
    game.start();

    let view = GameView::default();
    let frame = Duration::from_millis(args.frame_ms);
    let mut clock = FrameClock::new(Instant::now());
    let mut snap = GameSnapshot::default();
    let mut fb = FrameBuffer::new(0, 0);
    let mut next_frame = Instant::now();

    loop {
        // Input until the next frame is due.
        while event::poll(next_frame.saturating_duration_since(Instant::now()))? {
            match event::read()? {
                Event::Key(key) => {
                    if should_quit(key) {
                        game.snapshot_into(&mut snap);
                        game.quit();
                        return Ok(snap);
                    }
                    if let Some(action) = handle_key_event(key) {
                        game.apply_action(action);
                        if action == GameAction::Restart {
                            clock.reanchor(Instant::now());
                        }
                    }
                }
                Event::Resize(_, _) => term.invalidate(),
                _ => {}
            }
        }

        let now = Instant::now();
        next_frame += frame;
        if next_frame < now {
            next_frame = now + frame;
        }

        for event in rx.try_iter() {
            debug!(?event, "lifecycle");
            if event == LifecycleEvent::Resumed {
                clock.reanchor(now);
            }
        }

        // Paused and finished games do not consume time.
        if game.is_playing() {
            game.tick(clock.advance(now));
        }

        game.snapshot_into(&mut snap);
        let (w, h) = terminal::size().unwrap_or((80, 24));
        view.render_into(&snap, Viewport::new(w, h), &mut fb);
        term.draw_swap(&mut fb)?;
    }
}

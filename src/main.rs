//! Terminal runner (default binary).
//!
//! Keys become commands as they arrive; a fixed-period timer issues `Down`
//! as gravity. Once the game is over the board stays on screen until quit.

use std::fs::File;
use std::path::PathBuf;
use std::sync::Mutex;
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use clap::Parser;
use crossterm::event::{self, Event, KeyEventKind};
use tracing::info;
use tracing_subscriber::EnvFilter;

use tetris_pivot::core::{Game, SimpleRng};
use tetris_pivot::input::{handle_key_event, should_quit};
use tetris_pivot::term::{BoardView, TerminalRenderer, Viewport};
use tetris_pivot::types::Direction;

#[derive(Debug, Parser)]
#[command(name = "tetris-pivot", version, about = "Falling-block puzzle in the terminal")]
struct Args {
    /// Seed for the shape sequence (random when omitted)
    #[arg(long)]
    seed: Option<u32>,

    /// Gravity period in milliseconds
    #[arg(long, default_value_t = 500, value_parser = clap::value_parser!(u64).range(1..))]
    tick_ms: u64,

    /// Terminal columns per grid cell
    #[arg(long, default_value_t = 2, value_parser = clap::value_parser!(u16).range(1..=4))]
    cell_width: u16,

    /// Write logs to this file (logging is off otherwise)
    #[arg(long)]
    log_file: Option<PathBuf>,

    /// Log filter, e.g. `info` or `tetris_pivot_core=trace`
    #[arg(long, default_value = "info")]
    log_level: String,
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_logging(&args)?;

    let seed = args.seed.unwrap_or_else(rand::random);
    info!(seed, tick_ms = args.tick_ms, "starting game");

    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term, &args, seed);

    // Always try to restore terminal state.
    let _ = term.exit();
    result
}

fn init_logging(args: &Args) -> Result<()> {
    let Some(path) = &args.log_file else {
        return Ok(());
    };
    let file = File::create(path)
        .with_context(|| format!("failed to create log file {}", path.display()))?;
    let filter = EnvFilter::try_new(&args.log_level)
        .with_context(|| format!("invalid log level {:?}", args.log_level))?;

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .init();
    Ok(())
}

fn run(term: &mut TerminalRenderer, args: &Args, seed: u32) -> Result<()> {
    let mut game = Game::new(SimpleRng::new(seed))?;
    let view = BoardView::new(args.cell_width);
    let mut snap = game.snapshot();

    let tick = Duration::from_millis(args.tick_ms);
    let mut last_tick = Instant::now();
    let mut logged_game_over = false;

    loop {
        let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
        game.snapshot_into(&mut snap);
        term.draw(view.render(&snap, Viewport::new(w, h)))?;

        if game.is_game_over() && !logged_game_over {
            logged_game_over = true;
            info!(seed, "game over");
        }

        let timeout = tick.saturating_sub(last_tick.elapsed());
        if event::poll(timeout)? {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => {
                    if should_quit(key) {
                        return Ok(());
                    }
                    if let Some(direction) = handle_key_event(key) {
                        game.apply_command(direction)?;
                    }
                }
                Event::Resize(_, _) => term.invalidate(),
                _ => {}
            }
        }

        if last_tick.elapsed() >= tick {
            last_tick = Instant::now();
            game.apply_command(Direction::Down)?;
        }
    }
}

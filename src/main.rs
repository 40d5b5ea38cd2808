mod display;
mod input;
mod terminal;

use std::fs::File;
use std::io::{self, stdout, BufWriter, Stdout};
use std::sync::mpsc;
use std::thread;

use anyhow::Context;
use clap::Parser;
use crossterm::event::{self, Event};
use rand::rngs::StdRng;

use pixel_raiders::config::Config;
use pixel_raiders::frontend::Frontend;
use pixel_raiders::menu::{run_menu, MenuExit};
use pixel_raiders::Assets;

use display::TerminalRenderer;
use input::{FrameClock, TerminalInput};
use terminal::TerminalGuard;

// ── Logging ───────────────────────────────────────────────────────────────────

/// The terminal belongs to the game, so log records go to a file.
fn init_logging(config: &Config) -> anyhow::Result<()> {
    let file = File::create(&config.log_file)
        .with_context(|| format!("cannot create log file {}", config.log_file.display()))?;
    env_logger::Builder::new()
        .parse_filters(&config.log_level)
        .parse_env("RUST_LOG")
        .target(env_logger::Target::Pipe(Box::new(file)))
        .init();
    Ok(())
}

fn load_assets(config: &Config) -> anyhow::Result<Assets> {
    match &config.assets {
        Some(dir) => {
            log::info!("loading sprites from {}", dir.display());
            Assets::load_dir(dir)
                .with_context(|| format!("cannot load sprites from {}", dir.display()))
        }
        None => {
            log::info!("using built-in sprites");
            Ok(Assets::builtin())
        }
    }
}

/// Take over the terminal and run the menu until the player leaves.
fn play(
    terminal: &mut TerminalGuard<Stdout>,
    assets: &Assets,
    rng: &mut StdRng,
) -> io::Result<(MenuExit, u32)> {
    terminal.enter_raw_mode()?;
    terminal.enter_screen()?;

    // Blocking reads live on their own thread; the game loop drains the channel.
    let (tx, rx) = mpsc::channel::<Event>();
    thread::spawn(move || {
        while let Ok(ev) = event::read() {
            if tx.send(ev).is_err() {
                break;
            }
        }
    });

    let renderer = TerminalRenderer::new(BufWriter::new(stdout()))?;
    let mut frontend = Frontend::new(renderer, TerminalInput::new(rx), FrameClock::new());
    run_menu(&mut frontend, assets, rng)
}

// ── Entry point ───────────────────────────────────────────────────────────────

fn main() -> anyhow::Result<()> {
    let config = Config::parse();
    init_logging(&config)?;

    // Fail before the terminal is taken over: a game with a missing sprite
    // cannot be drawn.
    let assets = load_assets(&config)?;
    let mut rng = config.rng();

    // Dropped before any error is reported, whichever setup step failed.
    let mut terminal = TerminalGuard::new(stdout());
    let result = play(&mut terminal, &assets, &mut rng);
    drop(terminal);

    let (exit, played) = result.context("terminal I/O failed")?;
    log::info!("exiting after {} session(s): {:?}", played, exit);
    Ok(())
}

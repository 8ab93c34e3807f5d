// SPDX-License-Identifier: MIT OR Apache-2.0

//! Omok CLI - play five in a row in the terminal
//!
//! Reads one command per line from stdin (`place x y`, `undo`, `new`,
//! `quit`) and prints the board after every change. Logs go to stderr.

use anyhow::{anyhow, Result};
use clap::Parser;
use omok_cli::{render_board, render_status, Banner};
use omok_core::{Command, CommandOutcome, GameConfig, GameSession, UndoResult};
use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

/// Command-line arguments
#[derive(Parser, Debug)]
#[clap(name = "omok-cli", about = "Five in a row in the terminal", version)]
struct Args {
    /// Board size (overrides the config file)
    #[clap(short, long)]
    size: Option<u8>,

    /// JSON config file
    #[clap(short, long)]
    config: Option<PathBuf>,

    /// Enable debug logging
    #[clap(long)]
    debug: bool,
}

fn init_logging(debug: bool) {
    let filter = if debug {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn load_config(args: &Args) -> Result<GameConfig> {
    let mut config = match &args.config {
        Some(path) => GameConfig::load_from_file(path)?,
        None => GameConfig::default(),
    };
    if let Some(size) = args.size {
        config.board_size = size;
    }
    config
        .validate()
        .map_err(|e| anyhow!("{}. Board size must be between 5 and 26.", e))?;
    Ok(config)
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_logging(args.debug);

    let config = load_config(&args)?;
    let mut session = GameSession::new(&config)?;
    let banner = Banner::new();
    session.subscribe(banner.observer());
    info!(session = %session.id(), "Ready");

    let stdin = io::stdin();
    let mut stdout = io::stdout();
    draw(&mut stdout, &session, &banner)?;

    for line in stdin.lock().lines() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }

        let command: Command = match line.parse() {
            Ok(command) => command,
            Err(e) => {
                writeln!(stdout, "{}", e)?;
                continue;
            }
        };

        match session.handle(command) {
            Ok(CommandOutcome::Quit) => break,
            Ok(CommandOutcome::Undone(UndoResult::Nothing)) => {
                writeln!(stdout, "Nothing to undo")?;
            }
            Ok(outcome) => {
                debug!(?outcome, "Command applied");
                draw(&mut stdout, &session, &banner)?;
            }
            Err(e) => writeln!(stdout, "{}", e)?,
        }
    }

    info!(moves = session.engine().moves().len(), "Bye");
    Ok(())
}

fn draw(out: &mut impl Write, session: &GameSession, banner: &Banner) -> Result<()> {
    writeln!(out)?;
    if let Some(text) = banner.text() {
        writeln!(out, "{}", text)?;
    }
    write!(out, "{}", render_board(session.engine()))?;
    writeln!(out, "{}", render_status(session.engine()))?;
    write!(out, "> ")?;
    out.flush()?;
    Ok(())
}

//! Quick Omok Demo - plays a short scripted game and prints each position
//! This runs without any input so the engine can be watched end to end

use anyhow::Result;
use omok_cli::{render_board, render_status, Banner};
use omok_core::{Command, CommandOutcome, Coord, GameConfig, GameSession};
use tracing_subscriber::EnvFilter;

const SCRIPT: &[Command] = &[
    Command::Place(Coord { x: 9, y: 9 }),
    Command::Place(Coord { x: 10, y: 9 }),
    Command::Place(Coord { x: 8, y: 8 }),
    Command::Place(Coord { x: 10, y: 10 }),
    Command::Place(Coord { x: 7, y: 7 }),
    Command::Place(Coord { x: 6, y: 6 }),
    Command::Undo,
    Command::Place(Coord { x: 10, y: 8 }),
    Command::Place(Coord { x: 6, y: 6 }),
    Command::Place(Coord { x: 10, y: 11 }),
    Command::Place(Coord { x: 5, y: 5 }),
];

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(std::io::stderr)
        .init();

    let mut session = GameSession::new(&GameConfig::default())?;
    let banner = Banner::new();
    session.subscribe(banner.observer());

    for &command in SCRIPT {
        println!("{:?}", command);
        match session.handle(command) {
            Ok(CommandOutcome::Placed(result)) if result.winner().is_some() => {
                print!("{}", render_board(session.engine()));
                if let Some(text) = banner.text() {
                    println!("{}", text);
                }
                break;
            }
            Ok(_) => {}
            Err(e) => println!("  rejected: {}", e),
        }
        print!("{}", render_board(session.engine()));
        println!("{}\n", render_status(session.engine()));
    }

    Ok(())
}

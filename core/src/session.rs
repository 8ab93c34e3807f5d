// SPDX-License-Identifier: MIT OR Apache-2.0

//! Game session and the text commands that drive it
//!
//! A session is created once per process and handed to whatever reads player
//! input; it owns the engine, so there is no global game state.

use crate::config::GameConfig;
use crate::engine::{GameEngine, GameObserver, PlacementResult, UndoResult};
use crate::{Coord, GameError};
use std::str::FromStr;
use thiserror::Error;
use uuid::Uuid;

/// A player request, as produced by an input handler
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Place the current player's stone
    Place(Coord),
    /// Take back the last move
    Undo,
    /// Clear the board
    New,
    /// Leave the game
    Quit,
}

/// Error returned when a command line cannot be understood
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CommandParseError {
    #[error("Empty command")]
    Empty,

    #[error("Unknown command '{0}'")]
    Unknown(String),

    #[error("Expected two coordinates, e.g. 'place 3 4'")]
    MissingCoordinates,

    #[error("Invalid coordinate '{0}'")]
    InvalidCoordinate(String),
}

impl FromStr for Command {
    type Err = CommandParseError;

    /// Parses `place x y` (or `p x y`, or bare `x y`), `undo`, `new` and `quit`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut words = s.split_whitespace();
        let head = words.next().ok_or(CommandParseError::Empty)?;

        let command = match head.to_ascii_lowercase().as_str() {
            "place" | "p" => parse_coord(words.next(), words.next())?,
            "undo" | "u" => Command::Undo,
            "new" | "n" => Command::New,
            "quit" | "q" | "exit" => Command::Quit,
            _ if head.parse::<i32>().is_ok() => parse_coord(Some(head), words.next())?,
            _ => return Err(CommandParseError::Unknown(head.to_string())),
        };

        match words.next() {
            Some(extra) => Err(CommandParseError::Unknown(extra.to_string())),
            None => Ok(command),
        }
    }
}

fn parse_coord(x: Option<&str>, y: Option<&str>) -> Result<Command, CommandParseError> {
    let (x, y) = match (x, y) {
        (Some(x), Some(y)) => (x, y),
        _ => return Err(CommandParseError::MissingCoordinates),
    };
    let parse = |s: &str| {
        s.parse::<i32>()
            .map_err(|_| CommandParseError::InvalidCoordinate(s.to_string()))
    };
    Ok(Command::Place(Coord::new(parse(x)?, parse(y)?)))
}

/// What a handled command did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommandOutcome {
    Placed(PlacementResult),
    Undone(UndoResult),
    Reset,
    Quit,
}

/// The single game session of a process
#[derive(Debug)]
pub struct GameSession {
    id: Uuid,
    engine: GameEngine,
}

impl GameSession {
    /// Start a session from a configuration
    pub fn new(config: &GameConfig) -> Result<Self, GameError> {
        let session = Self {
            id: Uuid::new_v4(),
            engine: GameEngine::with_config(config)?,
        };
        tracing::info!(session = %session.id, board_size = config.board_size, "Session started");
        Ok(session)
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    /// Read-only view of the game for rendering
    pub fn engine(&self) -> &GameEngine {
        &self.engine
    }

    pub fn subscribe(&mut self, observer: Box<dyn GameObserver>) {
        self.engine.subscribe(observer);
    }

    /// Apply a command to the game
    pub fn handle(&mut self, command: Command) -> Result<CommandOutcome, GameError> {
        let span = tracing::debug_span!("command", session = %self.id, ?command);
        let _enter = span.enter();

        match command {
            Command::Place(coord) => self.engine.place(coord).map(CommandOutcome::Placed),
            Command::Undo => Ok(CommandOutcome::Undone(self.engine.undo())),
            Command::New => {
                self.engine.reset();
                Ok(CommandOutcome::Reset)
            }
            Command::Quit => Ok(CommandOutcome::Quit),
        }
    }
}

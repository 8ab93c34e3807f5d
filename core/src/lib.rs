// SPDX-License-Identifier: MIT OR Apache-2.0

//! Omok Core - Game Rules and Board Logic
//!
//! This crate provides the core game functionality including:
//! - Board representation and cell access
//! - Five-in-a-row win detection
//! - The game engine (turn order, placement, undo) and its observer seam
//! - Game configuration and the per-process game session

#![deny(unsafe_code)]
#![deny(clippy::all)]

pub mod board;
pub mod config;
pub mod engine;
pub mod rules;
pub mod session;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Side length of a standard omok board
pub const DEFAULT_BOARD_SIZE: u8 = 19;

/// Player color (Black or White)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Color {
    /// Black player (always moves first)
    Black,
    /// White player
    White,
}

impl Color {
    /// Returns the opposite color
    pub fn opposite(&self) -> Self {
        match self {
            Color::Black => Color::White,
            Color::White => Color::Black,
        }
    }
}

impl std::fmt::Display for Color {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Color::Black => write!(f, "Black"),
            Color::White => write!(f, "White"),
        }
    }
}

/// State of a single board cell
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Cell {
    #[default]
    Empty,
    Black,
    White,
}

impl Cell {
    /// The color of the stone in this cell, if any
    pub fn color(&self) -> Option<Color> {
        match self {
            Cell::Empty => None,
            Cell::Black => Some(Color::Black),
            Cell::White => Some(Color::White),
        }
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, Cell::Empty)
    }
}

impl From<Color> for Cell {
    fn from(color: Color) -> Self {
        match color {
            Color::Black => Cell::Black,
            Color::White => Cell::White,
        }
    }
}

/// Board coordinate.
///
/// Components are signed so that raw input such as `(-1, 5)` can be
/// represented and rejected by bounds checks instead of wrapping.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Coord {
    /// X coordinate (column)
    pub x: i32,
    /// Y coordinate (row)
    pub y: i32,
}

impl Coord {
    /// Create a new coordinate
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Check if coordinate is valid for a board of given size
    pub fn is_valid(&self, board_size: u8) -> bool {
        let size = i32::from(board_size);
        (0..size).contains(&self.x) && (0..size).contains(&self.y)
    }

    /// Coordinate shifted by `(dx, dy)`. The result may be off the board;
    /// `None` only if a component overflows `i32`.
    #[must_use]
    pub fn offset(&self, dx: i32, dy: i32) -> Option<Self> {
        Some(Self::new(self.x.checked_add(dx)?, self.y.checked_add(dy)?))
    }
}

/// A stone placed by a player. Entries of the move log.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Move {
    pub coord: Coord,
    pub color: Color,
}

impl Move {
    pub fn new(coord: Coord, color: Color) -> Self {
        Self { coord, color }
    }
}

/// Whether the game is still being played
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameOutcome {
    InProgress,
    Won(Color),
}

impl GameOutcome {
    pub fn winner(&self) -> Option<Color> {
        match self {
            GameOutcome::InProgress => None,
            GameOutcome::Won(color) => Some(*color),
        }
    }
}

/// Game events emitted to observers after each state change
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameEvent {
    /// A stone was placed
    StonePlaced {
        /// The move that was made
        mv: Move,
    },
    /// The move completed five in a row
    GameWon {
        /// The winning player
        winner: Color,
        /// The move that completed the line
        mv: Move,
    },
    /// The last move was taken back
    MoveUndone {
        /// The move that was removed
        mv: Move,
    },
    /// The turn passed to the other player
    TurnChanged {
        /// The player now to move
        to: Color,
    },
    /// The board was cleared for a new game
    GameReset,
}

/// Errors that can occur during game play
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum GameError {
    /// The coordinate is outside the board
    #[error("Coordinate ({x}, {y}) is outside the board")]
    OutOfBounds { x: i32, y: i32 },

    /// The cell already holds a stone
    #[error("Cell ({x}, {y}) is already occupied")]
    CellOccupied { x: i32, y: i32 },

    /// The game has already been won
    #[error("Game is over, {winner} has already won")]
    GameOver { winner: Color },

    /// The board size cannot host a game
    #[error("Invalid board size {0}")]
    InvalidBoardSize(u8),
}

pub use board::Board;
pub use config::GameConfig;
pub use engine::{GameEngine, GameObserver, PlacementResult, UndoResult};
pub use session::{Command, CommandOutcome, GameSession};

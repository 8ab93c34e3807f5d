// SPDX-License-Identifier: MIT OR Apache-2.0

//! Game configuration

use crate::rules::WIN_LENGTH;
use crate::{GameError, DEFAULT_BOARD_SIZE};
use anyhow::Context;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Largest supported side length
pub const MAX_BOARD_SIZE: u8 = 26;

/// Settings for a new game
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Side length of the square board
    pub board_size: u8,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            board_size: DEFAULT_BOARD_SIZE,
        }
    }
}

impl GameConfig {
    pub fn with_board_size(board_size: u8) -> Self {
        Self { board_size }
    }

    /// Check that a five-stone line fits on the board
    pub fn validate(&self) -> Result<(), GameError> {
        let fits = i32::from(self.board_size) >= WIN_LENGTH;
        if !fits || self.board_size > MAX_BOARD_SIZE {
            return Err(GameError::InvalidBoardSize(self.board_size));
        }
        Ok(())
    }

    /// Load config from a JSON file
    pub fn load_from_file(path: &Path) -> anyhow::Result<Self> {
        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("reading config {}", path.display()))?;
        let config: Self = serde_json::from_str(&contents)
            .with_context(|| format!("parsing config {}", path.display()))?;
        config.validate()?;
        Ok(config)
    }

    /// Save config to a JSON file
    pub fn save_to_file(&self, path: &Path) -> anyhow::Result<()> {
        let contents = serde_json::to_string_pretty(self)?;
        std::fs::write(path, contents)
            .with_context(|| format!("writing config {}", path.display()))?;
        Ok(())
    }
}

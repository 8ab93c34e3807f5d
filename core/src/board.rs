// SPDX-License-Identifier: MIT OR Apache-2.0

//! Board representation and cell access

use crate::{Cell, Color, Coord, GameError};
use serde::{Deserialize, Serialize};

/// Square grid of cells. The size is fixed at construction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawBoard")]
pub struct Board {
    /// Side length of the board
    size: u8,
    /// Cells in row-major order
    cells: Vec<Cell>,
}

impl Board {
    /// Create a new empty board with the specified size
    pub fn new(size: u8) -> Self {
        let cells = (size as usize) * (size as usize);
        Self {
            size,
            cells: vec![Cell::Empty; cells],
        }
    }

    /// Get the cell at the specified coordinate
    pub fn get(&self, coord: Coord) -> Result<Cell, GameError> {
        let idx = self.coord_to_index(coord)?;
        Ok(self.cells[idx])
    }

    /// Overwrite the cell at the specified coordinate.
    ///
    /// No occupancy check is made here; the engine enforces placement rules.
    pub fn set(&mut self, coord: Coord, cell: Cell) -> Result<(), GameError> {
        let idx = self.coord_to_index(coord)?;
        self.cells[idx] = cell;
        Ok(())
    }

    /// Whether the cell at the specified coordinate holds no stone
    pub fn is_empty(&self, coord: Coord) -> Result<bool, GameError> {
        self.get(coord).map(|cell| cell.is_empty())
    }

    /// Get the size of the board
    pub fn size(&self) -> u8 {
        self.size
    }

    /// Number of cells holding a stone
    pub fn occupied_count(&self) -> usize {
        self.cells.iter().filter(|cell| !cell.is_empty()).count()
    }

    /// Iterate over every stone on the board in row-major order
    pub fn stones(&self) -> impl Iterator<Item = (Coord, Color)> + '_ {
        let size = self.size as usize;
        self.cells.iter().enumerate().filter_map(move |(idx, cell)| {
            cell.color()
                .map(|color| (Coord::new((idx % size) as i32, (idx / size) as i32), color))
        })
    }

    /// Remove every stone
    pub fn clear(&mut self) {
        self.cells.fill(Cell::Empty);
    }

    /// Convert a coordinate to a vector index
    fn coord_to_index(&self, coord: Coord) -> Result<usize, GameError> {
        if !coord.is_valid(self.size) {
            return Err(GameError::OutOfBounds {
                x: coord.x,
                y: coord.y,
            });
        }
        Ok((coord.y as usize) * (self.size as usize) + (coord.x as usize))
    }
}

/// Board as it appears on the wire, before the grid shape is checked
#[derive(Deserialize)]
struct RawBoard {
    size: u8,
    cells: Vec<Cell>,
}

impl TryFrom<RawBoard> for Board {
    type Error = GameError;

    fn try_from(raw: RawBoard) -> Result<Self, Self::Error> {
        if raw.cells.len() != (raw.size as usize) * (raw.size as usize) {
            return Err(GameError::InvalidBoardSize(raw.size));
        }
        Ok(Self {
            size: raw.size,
            cells: raw.cells,
        })
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new(crate::DEFAULT_BOARD_SIZE)
    }
}

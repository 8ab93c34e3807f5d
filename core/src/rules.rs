// SPDX-License-Identifier: MIT OR Apache-2.0

//! Game rules and validation logic

use crate::{board::Board, Cell, Color, Coord, GameError};

/// Number of stones in a row needed to win
pub const WIN_LENGTH: i32 = 5;

/// Direction vectors `(dx, dy)` scanned from a stone.
///
/// `y` grows downwards, so "south" is `(0, 1)`.
pub const DIRECTIONS: [(i32, i32); 8] = [
    (1, 0),   // east
    (-1, 0),  // west
    (0, 1),   // south
    (0, -1),  // north
    (1, 1),   // south-east
    (-1, 1),  // south-west
    (1, -1),  // north-east
    (-1, -1), // north-west
];

/// Check the window of `WIN_LENGTH` cells starting at `anchor` and stepping
/// along `dir`.
///
/// The window is disqualified as soon as one of its cells is off the board,
/// including cells whose coordinates would overflow.
pub fn anchored_window(board: &Board, anchor: Coord, dir: (i32, i32), color: Color) -> bool {
    let (dx, dy) = dir;
    let mark = Cell::from(color);
    (0..WIN_LENGTH).all(|step| {
        let cell = dx
            .checked_mul(step)
            .zip(dy.checked_mul(step))
            .and_then(|(sx, sy)| anchor.offset(sx, sy));
        cell.and_then(|c| board.get(c).ok()) == Some(mark)
    })
}

/// Validates placements and detects wins against a board
pub struct RuleValidator<'a> {
    /// The board being checked
    board: &'a Board,
}

impl<'a> RuleValidator<'a> {
    /// Create a new rules validator
    pub fn new(board: &'a Board) -> Self {
        Self { board }
    }

    /// Check if a stone may be placed at `coord`.
    ///
    /// Bounds are checked before occupancy.
    pub fn check_move(&self, coord: Coord) -> Result<(), GameError> {
        if !self.board.is_empty(coord)? {
            return Err(GameError::CellOccupied {
                x: coord.x,
                y: coord.y,
            });
        }
        Ok(())
    }

    /// Whether the stone of `color` at `coord` completes five in a row.
    ///
    /// For every direction the window anchored at `coord` is checked, along
    /// with the windows anchored at the cells up to four steps behind it, so
    /// a stone dropped into the middle of a run is found too. Every window
    /// examined contains `coord`.
    pub fn is_winning_move(&self, coord: Coord, color: Color) -> bool {
        DIRECTIONS.iter().any(|&(dx, dy)| {
            (0..WIN_LENGTH).any(|back| {
                let window = coord
                    .offset(-dx * back, -dy * back)
                    .map(|anchor| anchored_window(self.board, anchor, (dx, dy), color));
                window == Some(true)
            })
        })
    }
}

// SPDX-License-Identifier: MIT OR Apache-2.0

//! Game engine: turn order, placement, win detection and undo

use crate::board::Board;
use crate::config::GameConfig;
use crate::rules::RuleValidator;
use crate::{Cell, Color, Coord, GameError, GameEvent, GameOutcome, Move};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

/// Receiver of game events, typically a rendering layer.
///
/// Observers are called synchronously once the engine state is consistent,
/// so they may read it back through any shared handle they hold.
pub trait GameObserver {
    /// Handle a single event
    fn on_event(&mut self, event: &GameEvent);
}

impl<F> GameObserver for F
where
    F: FnMut(&GameEvent),
{
    fn on_event(&mut self, event: &GameEvent) {
        self(event)
    }
}

/// Result of a successful placement
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PlacementResult {
    /// No line was completed; `next` is to move
    Continue { next: Color },
    /// The placing player completed five in a row
    Won(Color),
}

impl PlacementResult {
    pub fn winner(&self) -> Option<Color> {
        match self {
            PlacementResult::Continue { .. } => None,
            PlacementResult::Won(color) => Some(*color),
        }
    }
}

/// Result of an undo request
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum UndoResult {
    /// The log was empty; nothing changed
    Nothing,
    /// The given move was taken back
    Undone(Move),
}

impl UndoResult {
    /// The player whose move was taken back
    pub fn undone_player(&self) -> Option<Color> {
        match self {
            UndoResult::Nothing => None,
            UndoResult::Undone(mv) => Some(mv.color),
        }
    }

    pub fn is_noop(&self) -> bool {
        matches!(self, UndoResult::Nothing)
    }
}

/// Owns the board and move log and is their only mutator
pub struct GameEngine {
    board: Board,
    current_player: Color,
    moves: Vec<Move>,
    outcome: GameOutcome,
    observers: Vec<Box<dyn GameObserver>>,
}

impl GameEngine {
    /// Create a game on a standard 19×19 board
    pub fn new() -> Self {
        Self::with_board(Board::default())
    }

    /// Create a game from a validated configuration
    pub fn with_config(config: &GameConfig) -> Result<Self, GameError> {
        config.validate()?;
        Ok(Self::with_board(Board::new(config.board_size)))
    }

    fn with_board(board: Board) -> Self {
        Self {
            board,
            current_player: Color::Black,
            moves: Vec::new(),
            outcome: GameOutcome::InProgress,
            observers: Vec::new(),
        }
    }

    /// Register an observer for subsequent events
    pub fn subscribe(&mut self, observer: Box<dyn GameObserver>) {
        self.observers.push(observer);
    }

    /// Place the current player's stone at `coord`.
    ///
    /// All checks run before anything is written, so an error leaves the
    /// board, log and turn untouched.
    pub fn place(&mut self, coord: Coord) -> Result<PlacementResult, GameError> {
        if let GameOutcome::Won(winner) = self.outcome {
            return Err(GameError::GameOver { winner });
        }
        RuleValidator::new(&self.board).check_move(coord)?;

        let color = self.current_player;
        self.board.set(coord, Cell::from(color))?;
        let mv = Move::new(coord, color);
        self.moves.push(mv);
        debug!(x = coord.x, y = coord.y, %color, moves = self.moves.len(), "Stone placed");
        self.emit(GameEvent::StonePlaced { mv });

        if RuleValidator::new(&self.board).is_winning_move(coord, color) {
            self.outcome = GameOutcome::Won(color);
            info!(%color, moves = self.moves.len(), "Five in a row");
            self.emit(GameEvent::GameWon { winner: color, mv });
            return Ok(PlacementResult::Won(color));
        }

        self.current_player = color.opposite();
        self.emit(GameEvent::TurnChanged {
            to: self.current_player,
        });
        Ok(PlacementResult::Continue {
            next: self.current_player,
        })
    }

    /// Take back the most recent move.
    ///
    /// The player who made it moves again and a win it produced is cleared.
    /// An empty log is a silent no-op.
    pub fn undo(&mut self) -> UndoResult {
        let Some(mv) = self.moves.pop() else {
            debug!("Nothing to undo");
            return UndoResult::Nothing;
        };

        let cleared = self.board.set(mv.coord, Cell::Empty);
        debug_assert!(cleared.is_ok(), "logged move {:?} is off the board", mv);
        self.current_player = mv.color;
        self.outcome = GameOutcome::InProgress;
        debug!(x = mv.coord.x, y = mv.coord.y, color = %mv.color, "Move undone");
        self.emit(GameEvent::MoveUndone { mv });
        UndoResult::Undone(mv)
    }

    /// Clear the board and start over with Black to move
    pub fn reset(&mut self) {
        self.board.clear();
        self.moves.clear();
        self.current_player = Color::Black;
        self.outcome = GameOutcome::InProgress;
        info!(board_size = self.board.size(), "New game");
        self.emit(GameEvent::GameReset);
    }

    /// State of the cell at `coord`
    pub fn cell(&self, coord: Coord) -> Result<Cell, GameError> {
        self.board.get(coord)
    }

    /// The player to move (or the winner once the game is over)
    pub fn current_turn(&self) -> Color {
        self.current_player
    }

    pub fn outcome(&self) -> GameOutcome {
        self.outcome
    }

    /// The move log, oldest first
    pub fn moves(&self) -> &[Move] {
        &self.moves
    }

    pub fn last_move(&self) -> Option<Move> {
        self.moves.last().copied()
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn board_size(&self) -> u8 {
        self.board.size()
    }

    /// Rebuild a board by applying `moves` in order to an empty board
    pub fn replay(size: u8, moves: &[Move]) -> Result<Board, GameError> {
        let mut board = Board::new(size);
        for mv in moves {
            RuleValidator::new(&board).check_move(mv.coord)?;
            board.set(mv.coord, Cell::from(mv.color))?;
        }
        Ok(board)
    }

    fn emit(&mut self, event: GameEvent) {
        for observer in &mut self.observers {
            observer.on_event(&event);
        }
    }
}

impl Default for GameEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for GameEngine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GameEngine")
            .field("board_size", &self.board.size())
            .field("current_player", &self.current_player)
            .field("moves", &self.moves.len())
            .field("outcome", &self.outcome)
            .field("observers", &self.observers.len())
            .finish()
    }
}

// SPDX-License-Identifier: MIT OR Apache-2.0

//! Turn order, placement errors, undo, and the move-log invariants

use omok_core::{
    Cell, Color, Coord, GameConfig, GameEngine, GameError, GameOutcome, Move, PlacementResult,
    UndoResult,
};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Snapshot of everything `place` and `undo` may change
fn snapshot(engine: &GameEngine) -> (Vec<Cell>, Color, Vec<Move>, GameOutcome) {
    let size = i32::from(engine.board_size());
    let cells = (0..size)
        .flat_map(|y| (0..size).map(move |x| Coord::new(x, y)))
        .map(|c| engine.cell(c).unwrap())
        .collect();
    (
        cells,
        engine.current_turn(),
        engine.moves().to_vec(),
        engine.outcome(),
    )
}

fn assert_log_matches_board(engine: &GameEngine) {
    assert_eq!(engine.moves().len(), engine.board().occupied_count());
    let replayed = GameEngine::replay(engine.board_size(), engine.moves()).unwrap();
    assert_eq!(&replayed, engine.board());
}

#[test]
fn fresh_game_state() {
    let engine = GameEngine::new();
    assert_eq!(engine.board_size(), 19);
    assert_eq!(engine.current_turn(), Color::Black);
    assert_eq!(engine.outcome(), GameOutcome::InProgress);
    assert!(engine.moves().is_empty());
    assert_eq!(engine.last_move(), None);
}

#[test]
fn turns_alternate() {
    let mut engine = GameEngine::new();
    let mut expected = Color::Black;
    for i in 0..10 {
        assert_eq!(engine.current_turn(), expected);
        let result = engine.place(Coord::new(i, (i * 7) % 19)).unwrap();
        expected = expected.opposite();
        assert_eq!(result, PlacementResult::Continue { next: expected });
    }
    assert_eq!(engine.cell(Coord::new(0, 0)), Ok(Cell::Black));
    assert_eq!(engine.cell(Coord::new(1, 7)), Ok(Cell::White));
}

#[test]
fn occupied_cell_is_rejected_without_mutation() {
    let mut engine = GameEngine::new();
    engine.place(Coord::new(5, 5)).unwrap();
    let before = snapshot(&engine);

    assert_eq!(
        engine.place(Coord::new(5, 5)),
        Err(GameError::CellOccupied { x: 5, y: 5 })
    );
    assert_eq!(snapshot(&engine), before);
}

#[test]
fn out_of_bounds_is_rejected_without_mutation() {
    let mut engine = GameEngine::new();
    engine.place(Coord::new(0, 0)).unwrap();
    let before = snapshot(&engine);

    assert_eq!(
        engine.place(Coord::new(19, 0)),
        Err(GameError::OutOfBounds { x: 19, y: 0 })
    );
    assert_eq!(
        engine.place(Coord::new(-1, 5)),
        Err(GameError::OutOfBounds { x: -1, y: 5 })
    );
    assert_eq!(engine.cell(Coord::new(0, 19)), Err(GameError::OutOfBounds { x: 0, y: 19 }));
    assert_eq!(snapshot(&engine), before);
}

#[test]
fn place_then_undo_restores_state() {
    let mut engine = GameEngine::new();
    engine.place(Coord::new(9, 9)).unwrap();
    engine.place(Coord::new(9, 10)).unwrap();
    let before = snapshot(&engine);

    engine.place(Coord::new(10, 10)).unwrap();
    let undone = engine.undo();

    assert_eq!(
        undone,
        UndoResult::Undone(Move::new(Coord::new(10, 10), Color::Black))
    );
    assert_eq!(undone.undone_player(), Some(Color::Black));
    assert_eq!(snapshot(&engine), before);
}

#[test]
fn undo_on_fresh_game_is_noop() {
    let mut engine = GameEngine::new();
    let before = snapshot(&engine);

    let result = engine.undo();

    assert!(result.is_noop());
    assert_eq!(result.undone_player(), None);
    assert_eq!(engine.current_turn(), Color::Black);
    assert_eq!(snapshot(&engine), before);
}

#[test]
fn undo_walks_back_to_empty_board() {
    let mut engine = GameEngine::new();
    for i in 0..6 {
        engine.place(Coord::new(i, 2 * i)).unwrap();
    }
    let mut undone = 0;
    while !engine.undo().is_noop() {
        undone += 1;
        assert_log_matches_board(&engine);
    }
    assert_eq!(undone, 6);
    assert_eq!(snapshot(&engine), snapshot(&GameEngine::new()));
}

fn win_for_black(engine: &mut GameEngine) {
    for x in 0..4 {
        engine.place(Coord::new(x, 0)).unwrap();
        engine.place(Coord::new(x, 5)).unwrap();
    }
    assert_eq!(
        engine.place(Coord::new(4, 0)),
        Ok(PlacementResult::Won(Color::Black))
    );
}

#[test]
fn placing_after_a_win_is_rejected() {
    let mut engine = GameEngine::new();
    win_for_black(&mut engine);
    let before = snapshot(&engine);

    assert_eq!(
        engine.place(Coord::new(10, 10)),
        Err(GameError::GameOver {
            winner: Color::Black
        })
    );
    assert_eq!(snapshot(&engine), before);
}

#[test]
fn undoing_the_winning_move_resumes_play() {
    let mut engine = GameEngine::new();
    win_for_black(&mut engine);

    let result = engine.undo();

    assert_eq!(result.undone_player(), Some(Color::Black));
    assert_eq!(engine.outcome(), GameOutcome::InProgress);
    assert_eq!(engine.current_turn(), Color::Black);
    assert_eq!(engine.cell(Coord::new(4, 0)), Ok(Cell::Empty));

    // Black may now play elsewhere
    assert_eq!(
        engine.place(Coord::new(10, 10)),
        Ok(PlacementResult::Continue { next: Color::White })
    );
}

#[test]
fn smaller_board_from_config() {
    let mut engine = GameEngine::with_config(&GameConfig::with_board_size(9)).unwrap();
    assert_eq!(engine.board_size(), 9);
    assert_eq!(
        engine.place(Coord::new(9, 0)),
        Err(GameError::OutOfBounds { x: 9, y: 0 })
    );
    assert!(engine.place(Coord::new(8, 8)).is_ok());

    assert_eq!(
        GameEngine::with_config(&GameConfig::with_board_size(0)).unwrap_err(),
        GameError::InvalidBoardSize(0)
    );
}

#[test]
fn replay_rejects_conflicting_log() {
    let mv = Move::new(Coord::new(1, 1), Color::Black);
    assert_eq!(
        GameEngine::replay(19, &[mv, mv]),
        Err(GameError::CellOccupied { x: 1, y: 1 })
    );
}

#[test]
fn random_play_keeps_log_and_board_in_sync() {
    for seed in 0..20 {
        let mut rng = StdRng::seed_from_u64(seed);
        let mut engine = GameEngine::new();

        for _ in 0..300 {
            let before = snapshot(&engine);

            if rng.gen_bool(0.2) {
                let result = engine.undo();
                match result {
                    UndoResult::Nothing => assert_eq!(snapshot(&engine), before),
                    UndoResult::Undone(mv) => {
                        assert_eq!(engine.current_turn(), mv.color);
                        assert_eq!(engine.moves().len(), before.2.len() - 1);
                    }
                }
            } else {
                let coord = Coord::new(rng.gen_range(-1..20), rng.gen_range(-1..20));
                match engine.place(coord) {
                    Ok(PlacementResult::Continue { next }) => {
                        assert_eq!(next, before.1.opposite());
                        assert_eq!(engine.last_move(), Some(Move::new(coord, before.1)));
                    }
                    Ok(PlacementResult::Won(winner)) => {
                        assert_eq!(winner, before.1);
                        assert_eq!(engine.current_turn(), winner);
                        // Keep the game going
                        engine.undo();
                    }
                    Err(_) => assert_eq!(snapshot(&engine), before),
                }
            }

            assert_log_matches_board(&engine);
        }
    }
}

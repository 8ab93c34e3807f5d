// SPDX-License-Identifier: MIT OR Apache-2.0

//! ASCII board rendering for the CLI.

use omok_core::{Color, Coord, GameEngine, GameOutcome};

/// Render the game board as ASCII art.
///
/// Columns and rows are labelled with the same 0-based numbers the
/// `place x y` command takes. The last move is bracketed.
pub fn render_board(engine: &GameEngine) -> String {
    let size = engine.board_size();
    let last = engine.last_move().map(|mv| mv.coord);
    let mut output = String::new();

    output.push_str(&column_labels(size));

    for row in 0..size {
        output.push_str(&format!("{:>3} ", row));

        for col in 0..size {
            let coord = Coord::new(i32::from(col), i32::from(row));
            let symbol = match engine.cell(coord).ok().and_then(|cell| cell.color()) {
                Some(Color::Black) => "●",
                Some(Color::White) => "○",
                None if is_star_point(coord, size) => "*",
                None => "+",
            };

            if last == Some(coord) {
                output.push_str(&format!("[{}]", symbol));
            } else {
                output.push_str(&format!(" {} ", symbol));
            }
        }

        output.push_str(&format!(" {}", row));
        output.push('\n');
    }

    output.push_str(&column_labels(size));
    output
}

/// One-line summary of whose turn it is or who won
pub fn render_status(engine: &GameEngine) -> String {
    match engine.outcome() {
        GameOutcome::Won(winner) => format!("{} wins after {} moves", winner, engine.moves().len()),
        GameOutcome::InProgress => format!(
            "{} to move (move {})",
            engine.current_turn(),
            engine.moves().len() + 1
        ),
    }
}

fn column_labels(size: u8) -> String {
    let mut labels = String::from("    ");
    for col in 0..size {
        labels.push_str(&format!("{:^3}", col));
    }
    labels.push('\n');
    labels
}

/// Check if a coordinate is a star point on the board
fn is_star_point(coord: Coord, board_size: u8) -> bool {
    let (x, y) = (coord.x, coord.y);

    match board_size {
        9 => matches!((x, y), (2, 2) | (2, 6) | (4, 4) | (6, 2) | (6, 6)),
        13 => matches!((x, y), (3, 3) | (3, 9) | (6, 6) | (9, 3) | (9, 9)),
        15 => matches!((x, y), (3, 3) | (3, 11) | (7, 7) | (11, 3) | (11, 11)),
        19 => {
            let points = [3, 9, 15];
            points.contains(&x) && points.contains(&y)
        }
        _ => false,
    }
}

//! Text rendering of the board, the HUD and the round summary.

use crate::language::Dictionary;
use crossterm::style::Stylize;
use tictactoe_core::{BOARD_SIZE, Board, GameOutcome, Mark, Square};

/// Row divider drawn between board rows.
pub const ROW_DIVIDER: &str = "---+---+---";

/// Draws one mark, green for X and red for O when `color` is set.
pub fn mark_symbol(mark: Mark, color: bool) -> String {
    let symbol = mark.to_string();
    match (color, mark) {
        (false, _) => symbol,
        (true, Mark::X) => symbol.green().to_string(),
        (true, Mark::O) => symbol.red().to_string(),
    }
}

fn square_cell(square: Square, color: bool) -> String {
    match square {
        Square::Empty => "[ ]".to_string(),
        Square::Occupied(mark) => format!("[{}]", mark_symbol(mark, color)),
    }
}

/// Renders the board under the localized heading, followed by a blank line.
///
/// ```text
/// [X] | [ ] | [ ]
/// ---+---+---
/// [ ] | [O] | [ ]
/// ---+---+---
/// [ ] | [ ] | [ ]
/// ```
pub fn render_board(board: &Board, dictionary: &Dictionary, color: bool) -> String {
    let mut lines = vec![dictionary.current_game_board.to_string()];
    for (index, row) in board.rows().iter().enumerate() {
        let cells: Vec<String> = row.iter().map(|&sq| square_cell(sq, color)).collect();
        lines.push(cells.join(" | "));
        if index < BOARD_SIZE - 1 {
            lines.push(ROW_DIVIDER.to_string());
        }
    }
    lines.push(String::new());
    lines.join("\n")
}

/// Heads-up line naming the player to move.
pub fn render_hud(mark: Mark, dictionary: &Dictionary, color: bool) -> String {
    format!(
        "{} {}\n",
        dictionary.current_player,
        mark_symbol(mark, color)
    )
}

/// Headline of the round summary: the winner's number or the draw text.
pub fn render_result(outcome: GameOutcome, dictionary: &Dictionary) -> String {
    match outcome.winner() {
        Some(mark) => format!("{} {}\n", dictionary.winner, mark.number()),
        None if outcome.is_terminal() => format!("{}\n", dictionary.draw),
        None => String::new(),
    }
}

//! Positional evaluation.

use crate::board::Board;
use crate::rules::Rules;
use crate::types::Color;

/// Scores `board` from `color`'s point of view.
///
/// Equal weighting of mobility and material, each normalized by the cell
/// count: `0.5 * moves / N² + 0.5 * (own - opponent) / N²`.
pub fn evaluate(board: &Board, color: Color) -> f64 {
    let cells = (board.size() * board.size()).max(1) as f64;

    let moves = Rules::new(color).possible_moves(board).len() as f64;
    let own = board.count(color) as f64;
    let theirs = board.count(color.opponent()) as f64;

    0.5 * (moves / cells) + 0.5 * ((own - theirs) / cells)
}

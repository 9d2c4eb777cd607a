//! Fixed-depth minimax search.
//!
//! Plain minimax with no pruning. Every ply applies moves to its own clone
//! of the board, so sibling branches never share state and the caller's
//! board is never touched.
//!
//! Leaves are always scored from the searching color's point of view. A ply
//! where the side to move has no legal placement returns the layer's
//! starting sentinel (`-inf` when maximizing, `+inf` when minimizing); a
//! pass is not modelled.

use super::eval::evaluate;
use crate::board::Board;
use crate::rules::Rules;
use crate::types::{Color, Position};
use tracing::{debug, instrument};

/// Minimax value of `board` for `color` searched `depth` plies deep.
///
/// `maximizing` selects whose placements are enumerated at the root of this
/// call: `color`'s own when true, the opponent's when false.
pub fn minimax(board: &Board, color: Color, depth: u32, maximizing: bool) -> f64 {
    let mut nodes = 0;
    search(board, color, depth, maximizing, &mut nodes)
}

fn search(board: &Board, color: Color, depth: u32, maximizing: bool, nodes: &mut u64) -> f64 {
    *nodes += 1;
    if depth == 0 {
        return evaluate(board, color);
    }

    let mover = if maximizing { color } else { color.opponent() };
    let rules = Rules::new(mover);
    let mut best = if maximizing {
        f64::NEG_INFINITY
    } else {
        f64::INFINITY
    };

    for position in rules.possible_moves(board) {
        let mut child = board.clone();
        if rules.make_move(&mut child, position).is_err() {
            continue;
        }
        let value = search(&child, color, depth - 1, !maximizing, nodes);
        best = if maximizing {
            best.max(value)
        } else {
            best.min(value)
        };
    }

    best
}

/// Returns the move for `color` with the highest minimax value.
///
/// Each candidate is applied to a clone and answered by a minimizing search
/// of `depth - 1` plies (a `depth` of 0 is treated like 1). Ties go to the
/// first move in row-major order, and the first move is kept even when every
/// candidate scores `-inf`. Returns `None` when `color` has no legal move.
#[instrument(skip(board), fields(size = board.size()))]
pub fn choose_move_minimax(board: &Board, color: Color, depth: u32) -> Option<Position> {
    let rules = Rules::new(color);
    let mut nodes = 0;
    let mut best: Option<(Position, f64)> = None;

    for position in rules.possible_moves(board) {
        let mut child = board.clone();
        if rules.make_move(&mut child, position).is_err() {
            continue;
        }
        let value = search(&child, color, depth.saturating_sub(1), false, &mut nodes);
        if best.is_none_or(|(_, top)| value > top) {
            best = Some((position, value));
        }
    }

    debug!(choice = ?best, nodes, "Minimax move selected");
    best.map(|(position, _)| position)
}

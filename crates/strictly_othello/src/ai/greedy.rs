//! Greedy selection: the move that flips the most discs.

use crate::board::Board;
use crate::rules::Rules;
use crate::types::{Color, Position};
use tracing::{debug, instrument};

/// Returns the legal move with the highest flip count.
///
/// Ties go to the first move in row-major order. Returns `None` when
/// `color` has no legal move.
#[instrument(skip(board), fields(size = board.size()))]
pub fn choose_move_greedy(board: &Board, color: Color) -> Option<Position> {
    let rules = Rules::new(color);
    let mut best: Option<(Position, usize)> = None;

    for (position, added) in rules.move_gains(board) {
        if best.is_none_or(|(_, most)| added > most) {
            best = Some((position, added));
        }
    }

    debug!(choice = ?best, "Greedy move selected");
    best.map(|(position, _)| position)
}

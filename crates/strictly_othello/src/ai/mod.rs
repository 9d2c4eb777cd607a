//! Move selection.
//!
//! Both strategies are pure functions of a board snapshot and a color. They
//! never mutate the board they are handed; simulation happens on clones.

mod eval;
mod greedy;
mod minimax;

pub use eval::evaluate;
pub use greedy::choose_move_greedy;
pub use minimax::{choose_move_minimax, minimax};

use crate::board::Board;
use crate::player::Strategy;
use crate::types::{Color, Position};
use tracing::instrument;

/// Picks a move for `color` with the given strategy, or `None` when `color`
/// has no legal move.
#[instrument(skip(board), fields(size = board.size()))]
pub fn choose_move(board: &Board, color: Color, strategy: Strategy) -> Option<Position> {
    match strategy {
        Strategy::Greedy => choose_move_greedy(board, color),
        Strategy::Minimax { depth } => choose_move_minimax(board, color, depth),
    }
}

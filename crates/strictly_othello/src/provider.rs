//! Move providers: where each seat's moves come from.

use crate::ai;
use crate::board::Board;
use crate::player::Strategy;
use crate::types::{Color, Position};
use tracing::{debug, instrument};

/// Source of moves for one seat.
///
/// The orchestrator asks the provider of whichever color is to move and
/// never branches on whether that seat is a human or a computer.
pub trait MoveProvider {
    /// Display name.
    fn name(&self) -> &str;

    /// Offers a move for `color` on `board`.
    ///
    /// `None` means nothing is offered: a computer with no legal move, or a
    /// human whose input has ended.
    fn next_move(&mut self, board: &Board, color: Color) -> Option<Position>;
}

/// Computer player backed by one of the move selectors.
#[derive(Debug, Clone)]
pub struct AiPlayer {
    name: String,
    strategy: Strategy,
}

impl AiPlayer {
    /// Creates a computer player.
    pub fn new(name: impl Into<String>, strategy: Strategy) -> Self {
        Self {
            name: name.into(),
            strategy,
        }
    }

    /// Strategy in use.
    pub fn strategy(&self) -> Strategy {
        self.strategy
    }
}

impl MoveProvider for AiPlayer {
    fn name(&self) -> &str {
        &self.name
    }

    #[instrument(skip(self, board), fields(ai = %self.name, strategy = %self.strategy))]
    fn next_move(&mut self, board: &Board, color: Color) -> Option<Position> {
        let choice = ai::choose_move(board, color, self.strategy);
        debug!(?choice, "AI chose move");
        choice
    }
}

/// Replays a fixed list of moves, then offers nothing.
#[derive(Debug, Clone)]
pub struct ScriptedPlayer {
    name: String,
    moves: std::collections::VecDeque<Position>,
}

impl ScriptedPlayer {
    /// Creates a provider that offers `moves` in order.
    pub fn new(name: impl Into<String>, moves: impl IntoIterator<Item = Position>) -> Self {
        Self {
            name: name.into(),
            moves: moves.into_iter().collect(),
        }
    }
}

impl MoveProvider for ScriptedPlayer {
    fn name(&self) -> &str {
        &self.name
    }

    fn next_move(&mut self, _board: &Board, _color: Color) -> Option<Position> {
        self.moves.pop_front()
    }
}

//! Game events and the observer capability.
//!
//! The engine reports what happened during a match through an injected
//! [`GameObserver`] instead of printing or logging on a front-end's behalf.

use crate::board::Board;
use crate::error::GameError;
use crate::game::TurnReport;
use crate::types::{Color, Position};
use serde::{Deserialize, Serialize};

/// Something that happened during a match.
#[derive(Debug, Clone, PartialEq)]
pub enum GameEvent {
    /// A move was applied.
    MovePlayed {
        /// Name of the provider that chose the move.
        player: String,
        /// What the move did.
        report: TurnReport,
        /// Board after the move.
        board: Board,
    },
    /// A provider offered a move the rules refused.
    MoveRejected {
        /// Color that tried to move.
        color: Color,
        /// Offered square.
        position: Position,
        /// Why it was refused.
        error: GameError,
    },
    /// A player with no legal move was passed over.
    TurnSkipped {
        /// Color that passed.
        color: Color,
    },
    /// Neither side can move.
    GameOver {
        /// Color with more discs, `None` on a tie.
        winner: Option<Color>,
        /// Final black disc count.
        black_score: usize,
        /// Final white disc count.
        white_score: usize,
    },
    /// A provider stopped offering moves while it still had legal ones.
    Abandoned {
        /// Color whose provider gave up.
        color: Color,
    },
}

/// Receives [`GameEvent`]s as a match runs.
pub trait GameObserver {
    /// Called once per event, in order.
    fn notify(&mut self, event: &GameEvent);
}

impl<F> GameObserver for F
where
    F: FnMut(&GameEvent),
{
    fn notify(&mut self, event: &GameEvent) {
        self(event)
    }
}

impl GameObserver for Vec<GameEvent> {
    fn notify(&mut self, event: &GameEvent) {
        self.push(event.clone());
    }
}

/// How a match ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "kind")]
pub enum MatchOutcome {
    /// Played to the end.
    Finished {
        /// Color with more discs, `None` on a tie.
        winner: Option<Color>,
    },
    /// A provider stopped before the end.
    Abandoned {
        /// Color whose provider gave up.
        by: Color,
    },
    /// The turn limit ran out first.
    TurnLimit,
}

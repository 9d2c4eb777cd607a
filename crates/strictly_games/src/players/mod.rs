//! Move providers for each kind of seat.

mod human;

pub use human::{ConsoleInput, HumanPlayer, Rematch, ask_rematch};

use crate::config::{GameConfig, SeatKind};
use strictly_othello::{AiPlayer, Color, MoveProvider, Strategy};

/// Builds the provider configured for `color`, reading humans from the
/// console.
pub fn provider_for(config: &GameConfig, color: Color) -> Box<dyn MoveProvider> {
    match config.seat(color) {
        SeatKind::Human => Box::new(HumanPlayer::new(
            "human",
            ConsoleInput,
            std::io::stdout(),
        )),
        SeatKind::Greedy => Box::new(AiPlayer::new("greedy", Strategy::Greedy)),
        SeatKind::Minimax => {
            let strategy = config.minimax();
            Box::new(AiPlayer::new(strategy.to_string(), strategy))
        }
    }
}

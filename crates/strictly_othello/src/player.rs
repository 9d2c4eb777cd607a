//! Player identities: who sits at each color and how their moves are chosen.

use crate::rules::Rules;
use crate::types::Color;
use serde::{Deserialize, Serialize};

/// Move-selection algorithm for a computer player.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display)]
pub enum Strategy {
    /// Take the move that flips the most discs.
    #[display("greedy")]
    Greedy,
    /// Fixed-depth minimax over the positional evaluation.
    #[display("minimax(depth {depth})")]
    Minimax {
        /// Search depth in plies.
        depth: u32,
    },
}

impl Default for Strategy {
    fn default() -> Self {
        Strategy::Minimax {
            depth: Difficulty::default().depth(),
        }
    }
}

/// Difficulty presets offered to players, mapped onto minimax depth.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, strum::EnumIter,
)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    /// Depth 1.
    Easy,
    /// Depth 2.
    #[default]
    Medium,
    /// Depth 3.
    Hard,
}

impl Difficulty {
    /// Minimax depth for this preset.
    pub fn depth(self) -> u32 {
        match self {
            Difficulty::Easy => 1,
            Difficulty::Medium => 2,
            Difficulty::Hard => 3,
        }
    }

    /// Minimax strategy for this preset.
    pub fn strategy(self) -> Strategy {
        Strategy::Minimax {
            depth: self.depth(),
        }
    }
}

/// How a seat produces moves.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PlayerKind {
    /// Moves come from outside the engine.
    Human,
    /// Moves come from a move selector.
    Ai(Strategy),
}

/// A seat at the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Player {
    /// Disc color.
    pub color: Color,
    /// Human or computer.
    pub kind: PlayerKind,
}

impl Player {
    /// Human player of `color`.
    pub fn human(color: Color) -> Self {
        Self {
            color,
            kind: PlayerKind::Human,
        }
    }

    /// Computer player of `color` using `strategy`.
    pub fn ai(color: Color, strategy: Strategy) -> Self {
        Self {
            color,
            kind: PlayerKind::Ai(strategy),
        }
    }

    /// The other seat's color.
    pub fn opponent_color(&self) -> Color {
        self.color.opponent()
    }

    /// Returns true for computer players.
    pub fn is_ai(&self) -> bool {
        matches!(self.kind, PlayerKind::Ai(_))
    }

    /// Strategy for computer players.
    pub fn strategy(&self) -> Option<Strategy> {
        match self.kind {
            PlayerKind::Ai(strategy) => Some(strategy),
            PlayerKind::Human => None,
        }
    }

    /// Rules engine for this player's color.
    pub fn rules(&self) -> Rules {
        Rules::new(self.color)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_player_identity() {
        let p = Player::ai(Color::White, Strategy::Greedy);
        assert_eq!(p.opponent_color(), Color::Black);
        assert!(p.is_ai());
        assert_eq!(p.strategy(), Some(Strategy::Greedy));
        assert_eq!(p.rules().color(), Color::White);

        let h = Player::human(Color::Black);
        assert!(!h.is_ai());
        assert_eq!(h.strategy(), None);
    }

    #[test]
    fn test_difficulty_depths() {
        assert_eq!(Difficulty::Easy.depth(), 1);
        assert_eq!(Difficulty::default().depth(), 2);
        assert_eq!(Difficulty::Hard.strategy(), Strategy::Minimax { depth: 3 });
        assert_eq!(Strategy::default(), Strategy::Minimax { depth: 2 });
    }

    #[test]
    fn test_strategy_display() {
        assert_eq!(Strategy::Greedy.to_string(), "greedy");
        assert_eq!(Strategy::Minimax { depth: 3 }.to_string(), "minimax(depth 3)");
    }
}

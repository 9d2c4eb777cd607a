//! Strictly Othello - rules engine and move search for Othello/Reversi
//!
//! # Architecture
//!
//! - **Board**: N×N grid of squares with the four-disc opening position
//! - **Rules**: per-color legality, flipping and scoring
//! - **Game**: turn order, forced passes, terminal detection and scoring
//! - **AI**: greedy and fixed-depth minimax move selection
//! - **Orchestrator**: plays a match between two [`MoveProvider`]s and
//!   reports [`GameEvent`]s to a [`GameObserver`]
//!
//! # Example
//!
//! ```
//! use strictly_othello::{choose_move, Color, GameSession, Strategy};
//!
//! let mut game = GameSession::new(8)?;
//! let snapshot = game.board_snapshot();
//! let pick = choose_move(&snapshot, Color::Black, Strategy::Minimax { depth: 2 })
//!     .expect("black can move at the start");
//! let report = game.play_turn(pick.x, pick.y)?;
//! assert_eq!(report.mover(), Color::Black);
//! # Ok::<(), strictly_othello::GameError>(())
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod ai;
mod board;
mod error;
mod events;
mod game;
mod orchestrator;
mod player;
mod provider;
mod rules;
mod types;

// Crate-level exports - Board and primitive types
pub use board::Board;
pub use types::{Color, Direction, Position, Square};

// Crate-level exports - Errors
pub use error::{GameError, IllegalReason};

// Crate-level exports - Rules engine
pub use rules::{Placement, Rules};

// Crate-level exports - Players
pub use player::{Difficulty, Player, PlayerKind, Strategy};

// Crate-level exports - Game controller
pub use game::{GameSession, TurnReport};

// Crate-level exports - Move selection
pub use ai::{choose_move, choose_move_greedy, choose_move_minimax, evaluate, minimax};

// Crate-level exports - Providers, events and orchestration
pub use events::{GameEvent, GameObserver, MatchOutcome};
pub use orchestrator::{DEFAULT_MAX_TURNS, MAX_REJECTIONS, MatchSummary, Orchestrator};
pub use provider::{AiPlayer, MoveProvider, ScriptedPlayer};

//! Match orchestration between two move providers.

use crate::error::GameError;
use crate::events::{GameEvent, GameObserver, MatchOutcome};
use crate::game::GameSession;
use crate::player::Player;
use crate::provider::MoveProvider;
use crate::rules::Rules;
use crate::types::Color;
use derive_getters::Getters;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument, warn};

/// Default cap on moves per match.
pub const DEFAULT_MAX_TURNS: usize = 200;

/// Consecutive refused offers after which a provider is treated as gone.
pub const MAX_REJECTIONS: usize = 10;

/// Result of a completed match.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Getters)]
pub struct MatchSummary {
    /// How the match ended.
    outcome: MatchOutcome,
    /// Moves applied.
    turns: usize,
    /// Final black disc count.
    black_score: usize,
    /// Final white disc count.
    white_score: usize,
}

/// Drives a [`GameSession`] by asking each seat's provider for moves.
pub struct Orchestrator {
    session: GameSession,
    black: Box<dyn MoveProvider>,
    white: Box<dyn MoveProvider>,
    max_turns: usize,
}

impl Orchestrator {
    /// Creates an orchestrator for `session`.
    pub fn new(
        session: GameSession,
        black: Box<dyn MoveProvider>,
        white: Box<dyn MoveProvider>,
    ) -> Self {
        Self {
            session,
            black,
            white,
            max_turns: DEFAULT_MAX_TURNS,
        }
    }

    /// Caps the number of moves played.
    pub fn with_max_turns(mut self, max_turns: usize) -> Self {
        self.max_turns = max_turns;
        self
    }

    /// The session being played.
    pub fn session(&self) -> &GameSession {
        &self.session
    }

    /// Name of the provider seated at `color`.
    pub fn seat_name(&self, color: Color) -> &str {
        match color {
            Color::Black => self.black.name(),
            Color::White => self.white.name(),
        }
    }

    /// Resets the board for another game, optionally exchanging colors
    /// between the two seats.
    ///
    /// # Errors
    ///
    /// Propagates [`GameSession::reset`] errors; the orchestrator is
    /// unchanged in that case.
    #[instrument(skip(self))]
    pub fn rematch(&mut self, swap_colors: bool) -> Result<(), GameError> {
        if !swap_colors {
            return self.session.reset(None, None);
        }

        let black = Player {
            color: Color::Black,
            kind: self.session.player(Color::White).kind,
        };
        let white = Player {
            color: Color::White,
            kind: self.session.player(Color::Black).kind,
        };
        self.session.reset(Some(black), Some(white))?;
        std::mem::swap(&mut self.black, &mut self.white);
        info!(black = %self.black.name(), white = %self.white.name(), "Colors swapped");
        Ok(())
    }

    fn provider(&mut self, color: Color) -> &mut dyn MoveProvider {
        match color {
            Color::Black => self.black.as_mut(),
            Color::White => self.white.as_mut(),
        }
    }

    /// Plays until the game ends, a provider gives up, or the turn limit is
    /// reached, reporting every step to `observer`.
    #[instrument(skip_all, fields(max_turns = self.max_turns))]
    pub fn run(&mut self, observer: &mut dyn GameObserver) -> MatchSummary {
        info!(
            black = %self.black.name(),
            white = %self.white.name(),
            "Starting match"
        );

        let mut turns = 0;
        let outcome = loop {
            if self.session.check_game_over() {
                let winner = self.session.winner();
                observer.notify(&GameEvent::GameOver {
                    winner,
                    black_score: self.session.score(Color::Black),
                    white_score: self.session.score(Color::White),
                });
                break MatchOutcome::Finished { winner };
            }

            if turns >= self.max_turns {
                warn!(turns, "Turn limit reached");
                break MatchOutcome::TurnLimit;
            }

            let color = self.session.current_color();
            if !Rules::new(color).has_moves(self.session.board()) {
                if let Ok(next) = self.session.skip_turn() {
                    debug!(skipped = %color, %next, "Passing");
                    observer.notify(&GameEvent::TurnSkipped { color });
                    continue;
                }
            }

            match self.take_turn(color, observer) {
                Some(()) => turns += 1,
                None => {
                    warn!(%color, "Provider gave up");
                    observer.notify(&GameEvent::Abandoned { color });
                    break MatchOutcome::Abandoned { by: color };
                }
            }
        };

        let summary = MatchSummary {
            outcome,
            turns,
            black_score: self.session.score(Color::Black),
            white_score: self.session.score(Color::White),
        };
        info!(?summary, "Match finished");
        summary
    }

    /// Asks `color`'s provider until a move is accepted. `None` if the
    /// provider stops offering or keeps offering refused moves.
    fn take_turn(&mut self, color: Color, observer: &mut dyn GameObserver) -> Option<()> {
        for _ in 0..MAX_REJECTIONS {
            let snapshot = self.session.board_snapshot();
            let provider = self.provider(color);
            let name = provider.name().to_string();
            let position = provider.next_move(&snapshot, color)?;

            match self.session.play_turn(position.x, position.y) {
                Ok(report) => {
                    let passed = *report.passed();
                    observer.notify(&GameEvent::MovePlayed {
                        player: name,
                        report,
                        board: self.session.board_snapshot(),
                    });
                    if let Some(color) = passed {
                        debug!(%color, "Opponent auto-passed");
                        observer.notify(&GameEvent::TurnSkipped { color });
                    }
                    return Some(());
                }
                Err(error) => {
                    debug!(%error, "Move rejected");
                    observer.notify(&GameEvent::MoveRejected {
                        color,
                        position,
                        error,
                    });
                }
            }
        }
        None
    }
}

impl std::fmt::Debug for Orchestrator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Orchestrator")
            .field("session", &self.session)
            .field("black", &self.black.name())
            .field("white", &self.white.name())
            .field("max_turns", &self.max_turns)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::player::{Player, Strategy};
    use crate::provider::{AiPlayer, ScriptedPlayer};
    use crate::types::Position;

    fn ai_session() -> GameSession {
        GameSession::with_players(
            8,
            Player::ai(Color::Black, Strategy::Greedy),
            Player::ai(Color::White, Strategy::Minimax { depth: 1 }),
        )
        .unwrap()
    }

    #[test]
    fn test_ai_match_runs_to_completion() {
        let mut orchestrator = Orchestrator::new(
            ai_session(),
            Box::new(AiPlayer::new("greedy", Strategy::Greedy)),
            Box::new(AiPlayer::new("minimax", Strategy::Minimax { depth: 1 })),
        );
        let mut events: Vec<GameEvent> = Vec::new();
        let summary = orchestrator.run(&mut events);

        let MatchOutcome::Finished { winner } = *summary.outcome() else {
            panic!("expected a finished game, got {:?}", summary.outcome());
        };
        assert!(orchestrator.session().is_game_over());
        assert_eq!(winner, orchestrator.session().winner());
        assert!(matches!(events.last(), Some(GameEvent::GameOver { .. })));

        let played = events
            .iter()
            .filter(|e| matches!(e, GameEvent::MovePlayed { .. }))
            .count();
        assert_eq!(played, *summary.turns());
        assert_eq!(
            summary.black_score() + summary.white_score(),
            orchestrator.session().board().occupied()
        );
    }

    #[test]
    fn test_rematch_swaps_seats_and_replays() {
        let mut orchestrator = Orchestrator::new(
            ai_session(),
            Box::new(AiPlayer::new("greedy", Strategy::Greedy)),
            Box::new(AiPlayer::new("minimax", Strategy::Minimax { depth: 1 })),
        );
        orchestrator.run(&mut |_: &GameEvent| {});

        orchestrator.rematch(true).unwrap();
        let session = orchestrator.session();
        assert_eq!(session.board(), &crate::board::Board::standard());
        assert!(session.history().is_empty());
        assert_eq!(session.current_color(), Color::Black);
        assert_eq!(
            session.player(Color::Black),
            &Player::ai(Color::Black, Strategy::Minimax { depth: 1 })
        );
        assert_eq!(
            session.player(Color::White),
            &Player::ai(Color::White, Strategy::Greedy)
        );
        assert_eq!(orchestrator.seat_name(Color::Black), "minimax");
        assert_eq!(orchestrator.seat_name(Color::White), "greedy");

        let summary = orchestrator.run(&mut |_: &GameEvent| {});
        assert!(matches!(summary.outcome(), MatchOutcome::Finished { .. }));

        orchestrator.rematch(false).unwrap();
        assert_eq!(orchestrator.seat_name(Color::Black), "minimax");
        assert_eq!(orchestrator.session().board(), &crate::board::Board::standard());
    }

    #[test]
    fn test_rejected_move_is_asked_again() {
        let black = ScriptedPlayer::new("script", [Position::new(0, 0), Position::new(2, 3)]);
        let mut orchestrator = Orchestrator::new(
            GameSession::new(8).unwrap(),
            Box::new(black),
            Box::new(AiPlayer::new("greedy", Strategy::Greedy)),
        )
        .with_max_turns(2);

        let mut events: Vec<GameEvent> = Vec::new();
        let summary = orchestrator.run(&mut events);

        assert!(matches!(
            events[0],
            GameEvent::MoveRejected {
                color: Color::Black,
                ..
            }
        ));
        assert!(matches!(events[1], GameEvent::MovePlayed { .. }));
        assert_eq!(summary.outcome(), &MatchOutcome::TurnLimit);
        assert_eq!(*summary.turns(), 2);
    }

    #[test]
    fn test_silent_provider_abandons() {
        let mut orchestrator = Orchestrator::new(
            GameSession::new(8).unwrap(),
            Box::new(ScriptedPlayer::new("quitter", [])),
            Box::new(AiPlayer::new("greedy", Strategy::Greedy)),
        );
        let mut events: Vec<GameEvent> = Vec::new();
        let summary = orchestrator.run(&mut events);

        assert_eq!(summary.outcome(), &MatchOutcome::Abandoned { by: Color::Black });
        assert_eq!(events, vec![GameEvent::Abandoned { color: Color::Black }]);
    }

    #[test]
    fn test_endless_rejections_abandon() {
        let offers = std::iter::repeat_n(Position::new(0, 0), MAX_REJECTIONS + 1);
        let mut orchestrator = Orchestrator::new(
            GameSession::new(8).unwrap(),
            Box::new(ScriptedPlayer::new("stubborn", offers)),
            Box::new(AiPlayer::new("greedy", Strategy::Greedy)),
        );
        let mut rejections = 0;
        let summary = orchestrator.run(&mut |event: &GameEvent| {
            if matches!(event, GameEvent::MoveRejected { .. }) {
                rejections += 1;
            }
        });

        assert_eq!(rejections, MAX_REJECTIONS);
        assert_eq!(summary.outcome(), &MatchOutcome::Abandoned { by: Color::Black });
    }

    #[test]
    fn test_auto_pass_is_reported() {
        // White's only discs sit where no ray can close on Black.
        let mut board = crate::board::Board::standard();
        board.clear();
        board.place(0, 0, Color::Black).unwrap();
        board.place(1, 0, Color::White).unwrap();
        board.place(0, 7, Color::Black).unwrap();
        board.place(1, 7, Color::White).unwrap();
        let session = GameSession::from_position(
            board,
            Player::human(Color::Black),
            Player::human(Color::White),
            Color::Black,
        )
        .unwrap();

        let mut orchestrator = Orchestrator::new(
            session,
            Box::new(ScriptedPlayer::new(
                "black",
                [Position::new(2, 0), Position::new(2, 7)],
            )),
            Box::new(ScriptedPlayer::new("white", [])),
        );
        let mut events: Vec<GameEvent> = Vec::new();
        let summary = orchestrator.run(&mut events);

        assert!(matches!(events[0], GameEvent::MovePlayed { .. }));
        assert_eq!(events[1], GameEvent::TurnSkipped { color: Color::White });
        assert!(matches!(events[2], GameEvent::MovePlayed { .. }));
        assert!(matches!(events[3], GameEvent::GameOver { .. }));
        assert_eq!(events.len(), 4);
        assert_eq!(
            summary.outcome(),
            &MatchOutcome::Finished {
                winner: Some(Color::Black)
            }
        );
    }

    #[test]
    fn test_mover_without_moves_is_skipped() {
        let mut board = crate::board::Board::standard();
        board.clear();
        board.place(0, 0, Color::Black).unwrap();
        board.place(1, 0, Color::White).unwrap();
        let session = GameSession::from_position(
            board,
            Player::human(Color::Black),
            Player::human(Color::White),
            Color::White,
        )
        .unwrap();

        let mut orchestrator = Orchestrator::new(
            session,
            Box::new(AiPlayer::new("black", Strategy::Greedy)),
            Box::new(AiPlayer::new("white", Strategy::Greedy)),
        );
        let mut events: Vec<GameEvent> = Vec::new();
        let summary = orchestrator.run(&mut events);

        assert_eq!(events[0], GameEvent::TurnSkipped { color: Color::White });
        assert!(matches!(events[1], GameEvent::MovePlayed { .. }));
        assert_eq!(
            summary.outcome(),
            &MatchOutcome::Finished {
                winner: Some(Color::Black)
            }
        );
    }
}

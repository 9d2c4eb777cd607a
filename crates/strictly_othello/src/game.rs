//! Turn order, forced passes and terminal detection.

use crate::board::Board;
use crate::error::GameError;
use crate::player::Player;
use crate::rules::{Placement, Rules};
use crate::types::{Color, Position};
use derive_getters::Getters;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument};

/// Outcome of a successful [`GameSession::play_turn`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Getters)]
pub struct TurnReport {
    /// What the move changed on the board.
    placement: Placement,
    /// Color to move next.
    next_player: Color,
    /// Color whose turn was skipped because it had no legal move.
    passed: Option<Color>,
    /// Whether neither side can move any more.
    game_over: bool,
}

impl TurnReport {
    /// Color that made the move.
    pub fn mover(&self) -> Color {
        *self.placement.mover()
    }
}

/// A game in progress: the authoritative board and the two seats.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawSession")]
pub struct GameSession {
    board: Board,
    black: Player,
    white: Player,
    current: Color,
    history: Vec<Placement>,
}

/// Unchecked wire form of [`GameSession`].
#[derive(Deserialize)]
struct RawSession {
    board: Board,
    black: Player,
    white: Player,
    current: Color,
    history: Vec<Placement>,
}

impl TryFrom<RawSession> for GameSession {
    type Error = GameError;

    fn try_from(raw: RawSession) -> Result<Self, Self::Error> {
        check_seat(Color::Black, &raw.black)?;
        check_seat(Color::White, &raw.white)?;
        for placement in &raw.history {
            placement.check_fits(&raw.board)?;
        }
        Ok(Self {
            board: raw.board,
            black: raw.black,
            white: raw.white,
            current: raw.current,
            history: raw.history,
        })
    }
}

impl GameSession {
    /// New game between two humans on a `size`×`size` board.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::InvalidBoardSize`] when `size < 2`.
    #[instrument]
    pub fn new(size: usize) -> Result<Self, GameError> {
        Self::with_players(size, Player::human(Color::Black), Player::human(Color::White))
    }

    /// New game with explicit seats. Black moves first.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::InvalidBoardSize`] when `size < 2` and
    /// [`GameError::SeatMismatch`] when a player carries the wrong color.
    #[instrument]
    pub fn with_players(size: usize, black: Player, white: Player) -> Result<Self, GameError> {
        let board = Board::new(size)?;
        Self::from_position(board, black, white, Color::Black)
    }

    /// Game resuming from an arbitrary position with `current` to move.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::SeatMismatch`] when a player carries the wrong
    /// color.
    #[instrument(skip(board), fields(size = board.size()))]
    pub fn from_position(
        board: Board,
        black: Player,
        white: Player,
        current: Color,
    ) -> Result<Self, GameError> {
        check_seat(Color::Black, &black)?;
        check_seat(Color::White, &white)?;
        info!(black = ?black.kind, white = ?white.kind, "Game session created");
        Ok(Self {
            board,
            black,
            white,
            current,
            history: Vec::new(),
        })
    }

    /// The authoritative board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Independent copy of the board, safe to hand to a search.
    pub fn board_snapshot(&self) -> Board {
        self.board.clone()
    }

    /// Seat whose turn it is.
    pub fn current_player(&self) -> &Player {
        self.player(self.current)
    }

    /// Color whose turn it is.
    pub fn current_color(&self) -> Color {
        self.current
    }

    /// Seat playing `color`.
    pub fn player(&self, color: Color) -> &Player {
        match color {
            Color::Black => &self.black,
            Color::White => &self.white,
        }
    }

    /// Placements applied since the game (re)started.
    pub fn history(&self) -> &[Placement] {
        &self.history
    }

    /// Legal placements for `color` in row-major order.
    pub fn possible_moves(&self, color: Color) -> Vec<Position> {
        Rules::new(color).possible_moves(&self.board)
    }

    /// Disc count for `color`.
    pub fn score(&self, color: Color) -> usize {
        Rules::new(color).calculate_score(&self.board)
    }

    /// Plays `(x, y)` for the player to move.
    ///
    /// On success the turn passes to the other player, unless the game is
    /// now over or the other player has no legal move, in which case the
    /// mover keeps the turn (auto-pass).
    ///
    /// # Errors
    ///
    /// Returns [`GameError::OutOfBounds`] or [`GameError::IllegalMove`] and
    /// leaves the session unchanged. Callers are expected to ask again.
    #[instrument(skip(self), fields(current = %self.current))]
    pub fn play_turn(&mut self, x: usize, y: usize) -> Result<TurnReport, GameError> {
        let mover = self.current;
        let placement = Rules::new(mover).make_move(&mut self.board, Position::new(x, y))?;
        self.history.push(placement.clone());
        self.current = mover.opponent();

        let game_over = self.check_game_over();
        let mut passed = None;
        if game_over {
            info!(
                black = self.score(Color::Black),
                white = self.score(Color::White),
                "Game over"
            );
        } else if !Rules::new(self.current).has_moves(&self.board) {
            debug!(skipped = %self.current, "No legal moves, turn returns to mover");
            passed = Some(self.current);
            self.current = mover;
        }

        debug!(
            placed = %placement.placed(),
            flipped = placement.flip_count(),
            next = %self.current,
            "Turn played"
        );

        Ok(TurnReport {
            placement,
            next_player: self.current,
            passed,
            game_over,
        })
    }

    /// Passes the turn when the player to move has no legal placement.
    ///
    /// Only needed for positions that were not reached through
    /// [`GameSession::play_turn`], which passes automatically.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::MustMove`] if the player to move has a legal
    /// placement, or if the game is over.
    #[instrument(skip(self), fields(current = %self.current))]
    pub fn skip_turn(&mut self) -> Result<Color, GameError> {
        if self.check_game_over() || Rules::new(self.current).has_moves(&self.board) {
            return Err(GameError::MustMove {
                color: self.current,
            });
        }
        debug!(skipped = %self.current, "Turn skipped");
        self.current = self.current.opponent();
        Ok(self.current)
    }

    /// Returns true when neither color has a legal placement.
    ///
    /// Always derived from the current board.
    pub fn check_game_over(&self) -> bool {
        !Rules::new(Color::Black).has_moves(&self.board)
            && !Rules::new(Color::White).has_moves(&self.board)
    }

    /// Alias of [`GameSession::check_game_over`].
    pub fn is_game_over(&self) -> bool {
        self.check_game_over()
    }

    /// Color with more discs, or `None` on a tie. Defined at any point.
    pub fn winner(&self) -> Option<Color> {
        let black = self.score(Color::Black);
        let white = self.score(Color::White);
        match black.cmp(&white) {
            std::cmp::Ordering::Greater => Some(Color::Black),
            std::cmp::Ordering::Less => Some(Color::White),
            std::cmp::Ordering::Equal => None,
        }
    }

    /// Seat with more discs, or `None` on a tie.
    pub fn get_winner(&self) -> Option<&Player> {
        self.winner().map(|color| self.player(color))
    }

    /// Restores the opening position, optionally reseating players, and
    /// gives the move to Black.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::SeatMismatch`] when a replacement carries the
    /// wrong color. The session is unchanged on error.
    #[instrument(skip(self))]
    pub fn reset(&mut self, black: Option<Player>, white: Option<Player>) -> Result<(), GameError> {
        if let Some(player) = &black {
            check_seat(Color::Black, player)?;
        }
        if let Some(player) = &white {
            check_seat(Color::White, player)?;
        }

        self.board = Board::new(self.board.size())?;
        if let Some(player) = black {
            self.black = player;
        }
        if let Some(player) = white {
            self.white = player;
        }
        self.current = Color::Black;
        self.history.clear();
        info!(black = ?self.black.kind, white = ?self.white.kind, "Game reset");
        Ok(())
    }
}

fn check_seat(seat: Color, player: &Player) -> Result<(), GameError> {
    if player.color == seat {
        Ok(())
    } else {
        Err(GameError::SeatMismatch {
            seat,
            given: player.color,
        })
    }
}

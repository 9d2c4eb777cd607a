//! Error types for the rules engine and game controller.

use crate::types::{Color, Position};

/// Why a placement was refused.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum IllegalReason {
    /// The target square already holds a disc.
    #[display("square is occupied")]
    Occupied,
    /// No direction from the target captures an opposing disc.
    #[display("no discs would be flipped")]
    NoCapture,
}

/// Errors produced by the board, the rules engine and the game controller.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum GameError {
    /// Coordinates outside `[0, size)`.
    #[display("{position} is outside a {size}x{size} board")]
    OutOfBounds {
        /// The offending coordinates.
        position: Position,
        /// Side length of the board.
        size: usize,
    },

    /// Placement refused by the rules.
    #[display("{color} cannot play {position}: {reason}")]
    IllegalMove {
        /// Target square.
        position: Position,
        /// Color attempting the placement.
        color: Color,
        /// Which rule refused it.
        reason: IllegalReason,
    },

    /// Board side length too small to hold the opening position.
    #[display("board size {size} is too small (minimum 2)")]
    InvalidBoardSize {
        /// Requested side length.
        size: usize,
    },

    /// Stored squares do not fill a `size`×`size` grid.
    #[display("board of size {size} cannot hold {squares} squares")]
    MalformedBoard {
        /// Declared side length.
        size: usize,
        /// Number of squares supplied.
        squares: usize,
    },

    /// A player identity was seated at the wrong color.
    #[display("{seat} seat given a {given} player")]
    SeatMismatch {
        /// Seat being filled.
        seat: Color,
        /// Color carried by the identity.
        given: Color,
    },

    /// A pass was requested by a player who still has a legal move.
    #[display("{color} has a legal move and cannot pass")]
    MustMove {
        /// The player to move.
        color: Color,
    },
}

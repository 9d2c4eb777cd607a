//! Placement rules, evaluated on behalf of one color.
//!
//! A placement is legal when its square is empty and at least one of the
//! eight directions is a capturing ray: one or more opposing discs directly
//! adjacent, closed off by a disc of the mover's own color with no gap and
//! no board edge in between.

use crate::board::Board;
use crate::error::{GameError, IllegalReason};
use crate::types::{Color, Direction, Position, Square};
use derive_getters::Getters;
use serde::{Deserialize, Serialize};
use tracing::{instrument, trace};

/// Rules engine scoped to one color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rules {
    color: Color,
}

/// A placement that was applied to a board.
///
/// Holds exactly the squares the placement changed, so it doubles as an
/// inverse-move record.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, Getters)]
pub struct Placement {
    /// Square that received the new disc.
    placed: Position,
    /// Opposing discs turned over, in direction scan order, nearest first.
    flipped: Vec<Position>,
    /// Color that moved.
    mover: Color,
}

impl Placement {
    /// Number of discs turned over.
    pub fn flip_count(&self) -> usize {
        self.flipped.len()
    }

    /// Reverts this placement on `board`.
    ///
    /// The placed square becomes empty again and every flipped square goes
    /// back to the mover's opponent. Placements must be undone in reverse
    /// order of application.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::OutOfBounds`] if any recorded square lies off
    /// `board`. Nothing is written in that case.
    #[instrument(skip(board), fields(placed = %self.placed, mover = %self.mover))]
    pub fn undo(&self, board: &mut Board) -> Result<(), GameError> {
        self.check_fits(board)?;
        board.set(self.placed, Square::Empty);
        for &position in &self.flipped {
            board.set(position, Square::Occupied(self.mover.opponent()));
        }
        Ok(())
    }

    /// Checks that every square this placement touched lies on `board`.
    pub(crate) fn check_fits(&self, board: &Board) -> Result<(), GameError> {
        match std::iter::once(&self.placed)
            .chain(&self.flipped)
            .find(|&&p| !board.contains(p))
        {
            Some(&position) => Err(GameError::OutOfBounds {
                position,
                size: board.size(),
            }),
            None => Ok(()),
        }
    }
}

impl Rules {
    /// Creates a rules engine for `color`.
    pub fn new(color: Color) -> Self {
        Self { color }
    }

    /// Color this engine evaluates for.
    pub fn color(&self) -> Color {
        self.color
    }

    /// The other color.
    pub fn opponent(&self) -> Color {
        self.color.opponent()
    }

    /// Length of the opposing run captured from `origin` in `direction`,
    /// or 0 if the direction is not a capturing ray.
    fn capture_run(&self, board: &Board, origin: Position, direction: Direction) -> usize {
        let size = board.size();
        let mut run = 0;
        let mut cursor = origin.step(direction, size);

        while let Some(position) = cursor {
            match board.squares()[position.y * size + position.x] {
                Square::Occupied(c) if c == self.opponent() => run += 1,
                Square::Occupied(_) => return run,
                Square::Empty => return 0,
            }
            cursor = position.step(direction, size);
        }

        0
    }

    fn is_open(board: &Board, position: Position) -> Result<bool, GameError> {
        board.square(position).map(|s| s == Square::Empty)
    }

    /// Returns true if the empty square at `position` has a capturing ray.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::OutOfBounds`] for coordinates off the board.
    pub fn can_flip(&self, board: &Board, position: Position) -> Result<bool, GameError> {
        if !Self::is_open(board, position)? {
            return Ok(false);
        }
        Ok(Direction::ALL
            .iter()
            .any(|&d| self.capture_run(board, position, d) > 0))
    }

    /// Number of opposing discs a placement at `position` would turn over,
    /// summed across all capturing rays.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::OutOfBounds`] for coordinates off the board.
    pub fn number_of_added_pieces(
        &self,
        board: &Board,
        position: Position,
    ) -> Result<usize, GameError> {
        if !Self::is_open(board, position)? {
            return Ok(0);
        }
        Ok(Direction::ALL
            .iter()
            .map(|&d| self.capture_run(board, position, d))
            .sum())
    }

    /// Every legal placement, in row-major order.
    pub fn possible_moves(&self, board: &Board) -> Vec<Position> {
        board
            .positions()
            .filter(|&p| board.squares()[p.y * board.size() + p.x] == Square::Empty)
            .filter(|&p| {
                Direction::ALL
                    .iter()
                    .any(|&d| self.capture_run(board, p, d) > 0)
            })
            .collect()
    }

    /// Every legal placement paired with the number of discs it turns over,
    /// in row-major order.
    pub fn move_gains(&self, board: &Board) -> Vec<(Position, usize)> {
        board
            .positions()
            .filter(|&p| board.squares()[p.y * board.size() + p.x] == Square::Empty)
            .map(|p| {
                let flips = Direction::ALL
                    .iter()
                    .map(|&d| self.capture_run(board, p, d))
                    .sum::<usize>();
                (p, flips)
            })
            .filter(|&(_, flips)| flips > 0)
            .collect()
    }

    /// Returns true if this color has at least one legal placement.
    pub fn has_moves(&self, board: &Board) -> bool {
        board.positions().any(|p| {
            board.squares()[p.y * board.size() + p.x] == Square::Empty
                && Direction::ALL
                    .iter()
                    .any(|&d| self.capture_run(board, p, d) > 0)
        })
    }

    /// Places a disc at `position` and turns over every captured run.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::OutOfBounds`] for coordinates off the board and
    /// [`GameError::IllegalMove`] if the square is occupied or captures
    /// nothing. The board is untouched on error.
    #[instrument(skip(self, board), fields(color = %self.color))]
    pub fn make_move(&self, board: &mut Board, position: Position) -> Result<Placement, GameError> {
        let illegal = |reason| GameError::IllegalMove {
            position,
            color: self.color,
            reason,
        };

        if !Self::is_open(board, position)? {
            return Err(illegal(IllegalReason::Occupied));
        }

        let size = board.size();
        let mut flipped = Vec::new();
        for direction in Direction::ALL {
            let run = self.capture_run(board, position, direction);
            let mut cursor = position;
            for _ in 0..run {
                // The run was just scanned, so every step stays on the board.
                if let Some(next) = cursor.step(direction, size) {
                    flipped.push(next);
                    cursor = next;
                }
            }
        }

        if flipped.is_empty() {
            return Err(illegal(IllegalReason::NoCapture));
        }

        board.set(position, Square::Occupied(self.color));
        for &p in &flipped {
            board.set(p, Square::Occupied(self.color));
        }
        trace!(flipped = flipped.len(), "Placement applied");

        Ok(Placement {
            placed: position,
            flipped,
            mover: self.color,
        })
    }

    /// Number of discs of this color on the board.
    pub fn calculate_score(&self, board: &Board) -> usize {
        board.count(self.color)
    }
}

//! Core domain types for Othello.

use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Disc color, which doubles as the identity of a seat at the board.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    derive_more::Display,
    strum::EnumIter,
)]
pub enum Color {
    /// Black moves first.
    Black,
    /// White moves second.
    White,
}

impl Color {
    /// Returns the opposing color.
    pub fn opponent(self) -> Self {
        match self {
            Color::Black => Color::White,
            Color::White => Color::Black,
        }
    }

    /// Single-character glyph used by the text rendering.
    pub fn glyph(self) -> char {
        match self {
            Color::Black => 'B',
            Color::White => 'W',
        }
    }
}

/// A square on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Square {
    /// No disc.
    Empty,
    /// Square holding a disc of the given color.
    Occupied(Color),
}

impl Square {
    /// Returns true if the square holds a disc of `color`.
    pub fn is(self, color: Color) -> bool {
        self == Square::Occupied(color)
    }
}

/// A board coordinate: `x` is the column, `y` is the row, both zero-based.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    Serialize,
    Deserialize,
    derive_more::Display,
)]
#[display("({x}, {y})")]
pub struct Position {
    /// Column index.
    pub x: usize,
    /// Row index.
    pub y: usize,
}

impl Position {
    /// Creates a new position.
    pub fn new(x: usize, y: usize) -> Self {
        Self { x, y }
    }

    /// Steps one square in `direction`, or `None` if that leaves a
    /// `size`-wide board.
    pub fn step(self, direction: Direction, size: usize) -> Option<Self> {
        let (dx, dy) = direction.delta();
        let x = self.x.checked_add_signed(dx)?;
        let y = self.y.checked_add_signed(dy)?;
        (x < size && y < size).then_some(Self { x, y })
    }

    /// Parses `"x y"` or `"x,y"` into a position.
    #[instrument]
    pub fn parse(s: &str) -> Option<Self> {
        let mut parts = s
            .split(|c: char| c == ',' || c.is_whitespace())
            .filter(|part| !part.is_empty());
        let x = parts.next()?.parse().ok()?;
        let y = parts.next()?.parse().ok()?;
        if parts.next().is_some() {
            return None;
        }
        Some(Self { x, y })
    }
}

impl From<(usize, usize)> for Position {
    fn from((x, y): (usize, usize)) -> Self {
        Self { x, y }
    }
}

/// One of the eight straight lines leaving a square.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, strum::EnumIter)]
pub enum Direction {
    /// +x
    East,
    /// -x
    West,
    /// +y
    South,
    /// -y
    North,
    /// +x +y
    SouthEast,
    /// +x -y
    NorthEast,
    /// -x +y
    SouthWest,
    /// -x -y
    NorthWest,
}

impl Direction {
    /// All directions in scan order.
    pub const ALL: [Direction; 8] = [
        Direction::East,
        Direction::West,
        Direction::South,
        Direction::North,
        Direction::SouthEast,
        Direction::NorthEast,
        Direction::SouthWest,
        Direction::NorthWest,
    ];

    /// Unit step `(dx, dy)` for this direction.
    pub fn delta(self) -> (isize, isize) {
        match self {
            Direction::East => (1, 0),
            Direction::West => (-1, 0),
            Direction::South => (0, 1),
            Direction::North => (0, -1),
            Direction::SouthEast => (1, 1),
            Direction::NorthEast => (1, -1),
            Direction::SouthWest => (-1, 1),
            Direction::NorthWest => (-1, -1),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn test_opponent_is_involution() {
        for color in Color::iter() {
            assert_ne!(color, color.opponent());
            assert_eq!(color, color.opponent().opponent());
        }
    }

    #[test]
    fn test_step_stops_at_edges() {
        let corner = Position::new(0, 0);
        assert_eq!(corner.step(Direction::West, 8), None);
        assert_eq!(corner.step(Direction::North, 8), None);
        assert_eq!(corner.step(Direction::SouthEast, 8), Some(Position::new(1, 1)));

        let far = Position::new(7, 7);
        assert_eq!(far.step(Direction::East, 8), None);
        assert_eq!(far.step(Direction::NorthWest, 8), Some(Position::new(6, 6)));
    }

    #[test]
    fn test_directions_are_distinct() {
        let deltas: std::collections::HashSet<_> = Direction::iter().map(Direction::delta).collect();
        assert_eq!(deltas.len(), 8);
        assert_eq!(Direction::iter().collect::<Vec<_>>(), Direction::ALL.to_vec());
    }

    #[test]
    fn test_parse_position() {
        assert_eq!(Position::parse("2 3"), Some(Position::new(2, 3)));
        assert_eq!(Position::parse(" 4,5 "), Some(Position::new(4, 5)));
        assert_eq!(Position::parse("4, 5"), Some(Position::new(4, 5)));
        assert_eq!(Position::parse("4"), None);
        assert_eq!(Position::parse("a b"), None);
        assert_eq!(Position::parse("1 2 3"), None);
        assert_eq!(Position::parse("-1 2"), None);
    }

    #[test]
    fn test_position_display() {
        assert_eq!(Position::new(2, 3).to_string(), "(2, 3)");
        assert_eq!(Color::White.to_string(), "White");
    }
}

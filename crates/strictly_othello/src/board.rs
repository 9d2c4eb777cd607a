//! Square N×N Othello board.

use crate::error::GameError;
use crate::types::{Color, Position, Square};
use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::instrument;

/// Grid of squares in row-major order.
///
/// The board has no rule knowledge and no idea whose turn it is. It is
/// mutated through [`Board::place`] and, for undo only, a crate-private
/// single-square reset.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "RawBoard")]
pub struct Board {
    size: usize,
    squares: Vec<Square>,
}

/// Unchecked wire form of [`Board`].
#[derive(Deserialize)]
struct RawBoard {
    size: usize,
    squares: Vec<Square>,
}

impl TryFrom<RawBoard> for Board {
    type Error = GameError;

    fn try_from(raw: RawBoard) -> Result<Self, Self::Error> {
        if raw.size < 2 {
            return Err(GameError::InvalidBoardSize { size: raw.size });
        }
        if raw.size.checked_mul(raw.size) != Some(raw.squares.len()) {
            return Err(GameError::MalformedBoard {
                size: raw.size,
                squares: raw.squares.len(),
            });
        }
        Ok(Self {
            size: raw.size,
            squares: raw.squares,
        })
    }
}

impl Board {
    /// Standard board side length.
    pub const STANDARD_SIZE: usize = 8;

    /// Creates a board with the four-disc opening position.
    ///
    /// With `mid = size / 2`, White holds `(mid-1, mid-1)` and `(mid, mid)`
    /// and Black holds `(mid, mid-1)` and `(mid-1, mid)`.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::InvalidBoardSize`] when `size < 2`.
    #[instrument]
    pub fn new(size: usize) -> Result<Self, GameError> {
        if size < 2 {
            return Err(GameError::InvalidBoardSize { size });
        }
        Ok(Self::opening(size))
    }

    /// Creates an 8×8 board with the opening position.
    pub fn standard() -> Self {
        Self::opening(Self::STANDARD_SIZE)
    }

    /// Opening layout for a side length already known to be at least 2.
    fn opening(size: usize) -> Self {
        let mut board = Self {
            size,
            squares: vec![Square::Empty; size * size],
        };
        let mid = size / 2;
        board.set(Position::new(mid - 1, mid - 1), Square::Occupied(Color::White));
        board.set(Position::new(mid, mid), Square::Occupied(Color::White));
        board.set(Position::new(mid, mid - 1), Square::Occupied(Color::Black));
        board.set(Position::new(mid - 1, mid), Square::Occupied(Color::Black));
        board
    }

    /// Side length.
    pub fn size(&self) -> usize {
        self.size
    }

    /// All squares in row-major order (`y * size + x`).
    pub fn squares(&self) -> &[Square] {
        &self.squares
    }

    /// Returns true if `position` lies on the board.
    pub fn contains(&self, position: Position) -> bool {
        position.x < self.size && position.y < self.size
    }

    fn index(&self, position: Position) -> Result<usize, GameError> {
        if self.contains(position) {
            Ok(position.y * self.size + position.x)
        } else {
            Err(GameError::OutOfBounds {
                position,
                size: self.size,
            })
        }
    }

    /// Square at `(x, y)`.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::OutOfBounds`] for coordinates off the board.
    pub fn get(&self, x: usize, y: usize) -> Result<Square, GameError> {
        self.square(Position::new(x, y))
    }

    /// Square at `position`.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::OutOfBounds`] for coordinates off the board.
    pub fn square(&self, position: Position) -> Result<Square, GameError> {
        self.index(position).map(|i| self.squares[i])
    }

    /// Writes a `color` disc into `(x, y)`.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::OutOfBounds`] for coordinates off the board.
    pub fn place(&mut self, x: usize, y: usize, color: Color) -> Result<(), GameError> {
        let i = self.index(Position::new(x, y))?;
        self.squares[i] = Square::Occupied(color);
        Ok(())
    }

    /// Returns true if `(x, y)` holds no disc.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::OutOfBounds`] for coordinates off the board.
    pub fn is_empty(&self, x: usize, y: usize) -> Result<bool, GameError> {
        self.get(x, y).map(|square| square == Square::Empty)
    }

    /// Empties every square. The opening position is not restored.
    #[instrument(skip(self), fields(size = self.size))]
    pub fn clear(&mut self) {
        self.squares.fill(Square::Empty);
    }

    /// Overwrites a single on-board square. Used by undo.
    pub(crate) fn set(&mut self, position: Position, square: Square) {
        let i = position.y * self.size + position.x;
        self.squares[i] = square;
    }

    /// Number of discs of `color`.
    pub fn count(&self, color: Color) -> usize {
        self.squares.iter().filter(|s| s.is(color)).count()
    }

    /// Number of occupied squares.
    pub fn occupied(&self) -> usize {
        self.squares.iter().filter(|&&s| s != Square::Empty).count()
    }

    /// Iterates over every position in row-major order (y outer, x inner).
    pub fn positions(&self) -> impl Iterator<Item = Position> + use<> {
        let size = self.size;
        (0..size).flat_map(move |y| (0..size).map(move |x| Position::new(x, y)))
    }

    /// Formats the board with column and row indices, marking `hints`
    /// with `*`.
    pub fn render(&self, hints: &[Position]) -> String {
        let width = (self.size.saturating_sub(1)).to_string().len();
        let mut out = String::new();

        out.push_str(&" ".repeat(width));
        for x in 0..self.size {
            out.push_str(&format!(" {:>width$}", x));
        }
        out.push('\n');

        for y in 0..self.size {
            out.push_str(&format!("{:>width$}", y));
            for x in 0..self.size {
                let position = Position::new(x, y);
                let glyph = match self.squares[y * self.size + x] {
                    Square::Occupied(color) => color.glyph(),
                    Square::Empty if hints.contains(&position) => '*',
                    Square::Empty => '.',
                };
                out.push_str(&format!(" {:>width$}", glyph));
            }
            out.push('\n');
        }
        out
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::standard()
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render(&[]))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_opening_position_invariant() {
        for size in (4..=16).step_by(2) {
            let board = Board::new(size).unwrap();
            let mid = size / 2;
            assert_eq!(board.occupied(), 4, "size {size}");
            assert_eq!(board.count(Color::Black), 2);
            assert_eq!(board.count(Color::White), 2);
            assert_eq!(board.get(mid - 1, mid - 1), Ok(Square::Occupied(Color::White)));
            assert_eq!(board.get(mid, mid), Ok(Square::Occupied(Color::White)));
            assert_eq!(board.get(mid, mid - 1), Ok(Square::Occupied(Color::Black)));
            assert_eq!(board.get(mid - 1, mid), Ok(Square::Occupied(Color::Black)));
        }
    }

    #[test]
    fn test_standard_matches_new() {
        assert_eq!(Board::standard(), Board::new(8).unwrap());
        assert_eq!(Board::default().size(), 8);
    }

    #[test]
    fn test_rejects_degenerate_size() {
        assert_eq!(Board::new(1), Err(GameError::InvalidBoardSize { size: 1 }));
        assert_eq!(Board::new(0), Err(GameError::InvalidBoardSize { size: 0 }));
        assert!(Board::new(2).is_ok());
    }

    #[test]
    fn test_deserialize_checks_shape() {
        let board = Board::new(5).unwrap();
        let json = serde_json::to_string(&board).unwrap();
        assert_eq!(serde_json::from_str::<Board>(&json).unwrap(), board);

        for bad in [
            r#"{"size":8,"squares":[]}"#,
            r#"{"size":1,"squares":["Empty"]}"#,
            r#"{"size":2,"squares":["Empty","Empty","Empty"]}"#,
        ] {
            assert!(serde_json::from_str::<Board>(bad).is_err(), "{bad}");
        }
    }

    #[test]
    fn test_odd_size_uses_floor_division() {
        let board = Board::new(5).unwrap();
        assert_eq!(board.get(1, 1), Ok(Square::Occupied(Color::White)));
        assert_eq!(board.get(2, 2), Ok(Square::Occupied(Color::White)));
        assert_eq!(board.get(2, 1), Ok(Square::Occupied(Color::Black)));
        assert_eq!(board.get(1, 2), Ok(Square::Occupied(Color::Black)));
    }

    #[test]
    fn test_place_and_bounds() {
        let mut board = Board::standard();
        board.place(0, 0, Color::Black).unwrap();
        assert_eq!(board.is_empty(0, 0), Ok(false));
        assert_eq!(board.is_empty(1, 0), Ok(true));

        let err = board.place(8, 0, Color::Black).unwrap_err();
        assert!(matches!(err, GameError::OutOfBounds { size: 8, .. }));
        assert!(board.is_empty(0, 8).is_err());
    }

    #[test]
    fn test_clear_empties_everything() {
        let mut board = Board::standard();
        board.clear();
        assert_eq!(board.occupied(), 0);
        assert_eq!(board.size(), 8);
    }

    #[test]
    fn test_clone_is_independent() {
        let original = Board::standard();
        let mut copy = original.clone();
        copy.place(0, 0, Color::White).unwrap();
        assert_eq!(original.is_empty(0, 0), Ok(true));
        assert_ne!(original, copy);
    }

    #[test]
    fn test_positions_are_row_major() {
        let board = Board::new(4).unwrap();
        let positions: Vec<_> = board.positions().take(5).collect();
        assert_eq!(
            positions,
            vec![
                Position::new(0, 0),
                Position::new(1, 0),
                Position::new(2, 0),
                Position::new(3, 0),
                Position::new(0, 1),
            ]
        );
    }

    #[test]
    fn test_render() {
        let board = Board::new(4).unwrap();
        let text = board.render(&[Position::new(1, 0)]);
        assert_eq!(text, "  0 1 2 3\n0 . * . .\n1 . W B .\n2 . B W .\n3 . . . .\n");
    }
}

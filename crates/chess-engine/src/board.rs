//! Board model: an 8×8 grid of square contents.

use chess_core::{
    parse_placement, placement_string, Color, ColoredPiece, Grid, Piece, PlacementError, Square,
    STARTPOS,
};
use std::fmt;

/// An 8×8 board.
///
/// `Board` is a plain value. Every mutator returns a new board, so a
/// snapshot held in the game history is never changed after the fact.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Board {
    squares: Grid,
}

impl Board {
    /// Creates a board with no pieces.
    pub const fn empty() -> Self {
        Board {
            squares: [[None; 8]; 8],
        }
    }

    /// Creates the standard starting position.
    pub fn initial() -> Self {
        let back = [
            Piece::Rook,
            Piece::Knight,
            Piece::Bishop,
            Piece::Queen,
            Piece::King,
            Piece::Bishop,
            Piece::Knight,
            Piece::Rook,
        ];
        let mut squares: Grid = [[None; 8]; 8];
        for (col, piece) in back.into_iter().enumerate() {
            squares[0][col] = Some(ColoredPiece::new(piece, Color::Black));
            squares[1][col] = Some(ColoredPiece::new(Piece::Pawn, Color::Black));
            squares[6][col] = Some(ColoredPiece::new(Piece::Pawn, Color::White));
            squares[7][col] = Some(ColoredPiece::new(piece, Color::White));
        }
        Board { squares }
    }

    /// Creates a board from piece placement text (the first FEN field).
    pub fn from_placement(text: &str) -> Result<Self, PlacementError> {
        Ok(Board {
            squares: parse_placement(text)?,
        })
    }

    /// Returns the piece placement text for this board.
    pub fn to_placement(&self) -> String {
        placement_string(&self.squares)
    }

    /// Returns the content of a square.
    #[inline]
    pub fn get(&self, square: Square) -> Option<ColoredPiece> {
        self.squares[square.row() as usize][square.col() as usize]
    }

    /// Returns a copy of this board with one square replaced.
    #[inline]
    #[must_use]
    pub fn with(&self, square: Square, content: Option<ColoredPiece>) -> Board {
        let mut next = *self;
        next.squares[square.row() as usize][square.col() as usize] = content;
        next
    }

    /// Returns true if the square holds no piece.
    #[inline]
    pub fn is_empty(&self, square: Square) -> bool {
        self.get(square).is_none()
    }

    /// Locates the king of the given color.
    pub fn king_square(&self, color: Color) -> Option<Square> {
        let king = ColoredPiece::new(Piece::King, color);
        Square::all().find(|&sq| self.get(sq) == Some(king))
    }

    /// Iterates over the pieces of one color in row-major order.
    pub fn pieces(&self, color: Color) -> impl Iterator<Item = (Square, Piece)> + '_ {
        Square::all().filter_map(move |sq| match self.get(sq) {
            Some(cp) if cp.color == color => Some((sq, cp.piece)),
            _ => None,
        })
    }

    /// Returns the raw grid, indexed `[row][col]`.
    pub fn grid(&self) -> &Grid {
        &self.squares
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::initial()
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (row, squares) in self.squares.iter().enumerate() {
            write!(f, "{} ", 8 - row)?;
            for square in squares {
                match square {
                    Some(piece) => write!(f, " {}", piece)?,
                    None => write!(f, " .")?,
                }
            }
            writeln!(f)?;
        }
        write!(f, "   a b c d e f g h")
    }
}

impl fmt::Debug for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Board({})", self.to_placement())
    }
}

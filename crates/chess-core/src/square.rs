//! Board square representation.

use std::fmt;

/// A square on the chess board, addressed by row and column.
///
/// Row 0 is black's back rank (rank 8) and row 7 is white's back rank
/// (rank 1). Column 0 is the a-file.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Square {
    row: u8,
    col: u8,
}

impl Square {
    /// Creates a square from row and column (0-7 each).
    #[inline]
    pub const fn new(row: u8, col: u8) -> Option<Self> {
        if row < 8 && col < 8 {
            Some(Square { row, col })
        } else {
            None
        }
    }

    /// Creates a square from row and column without bounds checking.
    ///
    /// Out-of-range values are a logic error and trip a debug assertion.
    #[inline]
    pub const fn at(row: u8, col: u8) -> Self {
        debug_assert!(row < 8 && col < 8);
        Square { row, col }
    }

    /// Creates a square from a row-major index (0-63).
    #[inline]
    pub const fn from_index(index: u8) -> Option<Self> {
        if index < 64 {
            Some(Square {
                row: index / 8,
                col: index % 8,
            })
        } else {
            None
        }
    }

    /// Parses a square from algebraic notation (e.g., "e4").
    pub const fn from_algebraic(s: &str) -> Option<Self> {
        let bytes = s.as_bytes();
        if bytes.len() != 2 {
            return None;
        }
        let file = bytes[0].to_ascii_lowercase();
        let rank = bytes[1];
        if file < b'a' || file > b'h' || rank < b'1' || rank > b'8' {
            return None;
        }
        Some(Square {
            row: b'8' - rank,
            col: file - b'a',
        })
    }

    /// Returns the row (0 = rank 8).
    #[inline]
    pub const fn row(self) -> u8 {
        self.row
    }

    /// Returns the column (0 = a-file).
    #[inline]
    pub const fn col(self) -> u8 {
        self.col
    }

    /// Returns the row-major index (0-63).
    #[inline]
    pub const fn index(self) -> u8 {
        self.row * 8 + self.col
    }

    /// Returns the square displaced by the given row and column deltas, if on the board.
    #[inline]
    pub const fn offset(self, d_row: i8, d_col: i8) -> Option<Self> {
        let row = self.row as i8 + d_row;
        let col = self.col as i8 + d_col;
        if row < 0 || row > 7 || col < 0 || col > 7 {
            None
        } else {
            Some(Square {
                row: row as u8,
                col: col as u8,
            })
        }
    }

    /// Iterates over all 64 squares in row-major order.
    pub fn all() -> impl Iterator<Item = Square> {
        (0..64u8).map(|i| Square {
            row: i / 8,
            col: i % 8,
        })
    }

    /// Returns the algebraic notation for this square.
    pub fn to_algebraic(self) -> String {
        let file = (b'a' + self.col) as char;
        let rank = (b'8' - self.row) as char;
        format!("{}{}", file, rank)
    }

    // Squares the castling rules refer to by name.
    pub const A1: Square = Square { row: 7, col: 0 };
    pub const E1: Square = Square { row: 7, col: 4 };
    pub const H1: Square = Square { row: 7, col: 7 };
    pub const A8: Square = Square { row: 0, col: 0 };
    pub const E8: Square = Square { row: 0, col: 4 };
    pub const H8: Square = Square { row: 0, col: 7 };
}

impl fmt::Debug for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Square({})", self.to_algebraic())
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_algebraic())
    }
}

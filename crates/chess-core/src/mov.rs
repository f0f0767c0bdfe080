//! Move representation.

use crate::Square;
use std::fmt;

/// Classification of a committed move, derived when the move is applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MoveKind {
    /// Plain relocation, with or without a capture.
    Normal,
    /// Pawn double push from its starting rank.
    DoublePush,
    /// Kingside castling (O-O).
    CastleKingside,
    /// Queenside castling (O-O-O).
    CastleQueenside,
    /// En passant capture.
    EnPassant,
    /// Pawn reaching the last rank; always promotes to a queen.
    Promotion,
}

impl MoveKind {
    /// Returns true if this is a castling move.
    #[inline]
    pub const fn is_castling(self) -> bool {
        matches!(self, MoveKind::CastleKingside | MoveKind::CastleQueenside)
    }
}

/// A chess move: an origin and a destination square.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Move {
    pub from: Square,
    pub to: Square,
}

impl Move {
    /// Creates a new move.
    #[inline]
    pub const fn new(from: Square, to: Square) -> Self {
        Move { from, to }
    }

    /// Returns the coordinate notation for this move (e.g., "e2e4").
    pub fn to_uci(self) -> String {
        format!("{}{}", self.from, self.to)
    }

    /// Parses a move from coordinate notation.
    ///
    /// A trailing promotion letter is accepted and ignored, since pawns
    /// always promote to a queen.
    pub fn from_uci(s: &str) -> Option<Self> {
        if !s.is_ascii() || s.len() < 4 || s.len() > 5 {
            return None;
        }
        let from = Square::from_algebraic(&s[0..2])?;
        let to = Square::from_algebraic(&s[2..4])?;
        if s.len() == 5 && !matches!(s.as_bytes()[4].to_ascii_lowercase(), b'q' | b'r' | b'b' | b'n') {
            return None;
        }
        Some(Move::new(from, to))
    }
}

impl fmt::Debug for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Move({})", self.to_uci())
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_uci())
    }
}

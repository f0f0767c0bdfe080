//! Pseudo-legal move enumeration.

use super::Rules;
use crate::Board;
use chess_core::{Color, Move, Square};

impl Rules {
    /// Enumerates every move of `color` that obeys the movement rules.
    ///
    /// Moves are ordered by origin square, then destination square, both
    /// row-major. Moves leaving the mover's king in check are included.
    pub fn pseudo_legal_moves(&self, board: &Board, history: &[Board], color: Color) -> Vec<Move> {
        let mut moves = Vec::new();
        for (from, _) in board.pieces(color) {
            for to in Square::all() {
                let mv = Move::new(from, to);
                if self.is_legal_shape(board, history, mv) {
                    moves.push(mv);
                }
            }
        }
        moves
    }
}

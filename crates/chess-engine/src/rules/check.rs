//! Check, checkmate and stalemate detection.

use super::{make_move, GameStatus, Rules};
use crate::Board;
use chess_core::Color;

impl Rules {
    /// Returns true if `color`'s king is attacked. A missing king is never
    /// in check.
    pub fn in_check(&self, board: &Board, color: Color) -> bool {
        match board.king_square(color) {
            Some(king) => self.is_square_attacked(board, king, color.opposite()),
            None => false,
        }
    }

    /// Returns true if `color` has a move after which its king is not in
    /// check.
    pub fn has_any_response(&self, board: &Board, history: &[Board], color: Color) -> bool {
        self.pseudo_legal_moves(board, history, color)
            .into_iter()
            .any(|mv| {
                if self.options.probe_scratch_board {
                    let (scratch, _) = make_move(board, mv);
                    !self.in_check(&scratch, color)
                } else {
                    !self.in_check(board, color)
                }
            })
    }

    /// Classifies the position for the side to move.
    pub fn classify(&self, board: &Board, history: &[Board], side_to_move: Color) -> GameStatus {
        let in_check = self.in_check(board, side_to_move);
        if self.has_any_response(board, history, side_to_move) {
            GameStatus::InProgress
        } else if in_check {
            GameStatus::Checkmate {
                winner: side_to_move.opposite(),
            }
        } else {
            GameStatus::Stalemate
        }
    }
}

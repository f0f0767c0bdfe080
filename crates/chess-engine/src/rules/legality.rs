//! Piece movement rules and square attack queries.

use super::Rules;
use crate::Board;
use chess_core::{Color, ColoredPiece, Move, Piece, Square};

impl Rules {
    /// Returns true if the move obeys the movement rules of the piece on its
    /// origin square.
    ///
    /// `history` holds the snapshots from the start of the game up to and
    /// including the position being played on; it is consulted for en
    /// passant and castling eligibility. The move may leave the mover's own
    /// king in check.
    pub fn is_legal_shape(&self, board: &Board, history: &[Board], mv: Move) -> bool {
        let Some(mover) = board.get(mv.from) else {
            return false;
        };
        if mv.from == mv.to {
            return false;
        }
        let target = board.get(mv.to);
        if target.is_some_and(|t| t.color == mover.color) {
            return false;
        }

        match mover.piece {
            Piece::Pawn => self.pawn_move(board, history, mover.color, mv, target),
            Piece::King => {
                is_king_step(mv.from, mv.to) || self.castling_move(board, history, mover.color, mv)
            }
            piece => self.piece_reaches(board, piece, mv.from, mv.to),
        }
    }

    /// Returns true if any piece of `by` attacks `square`.
    pub fn is_square_attacked(&self, board: &Board, square: Square, by: Color) -> bool {
        board
            .pieces(by)
            .any(|(from, piece)| self.attacks(board, piece, by, from, square))
    }

    /// Attack reach: pawns attack their forward diagonals only and kings
    /// the adjacent squares only.
    fn attacks(&self, board: &Board, piece: Piece, color: Color, from: Square, to: Square) -> bool {
        if from == to || board.get(to).is_some_and(|t| t.color == color) {
            return false;
        }
        match piece {
            Piece::Pawn => {
                let (d_row, d_col) = delta(from, to);
                d_row == color.pawn_direction() && d_col.abs() == 1
            }
            Piece::King => is_king_step(from, to),
            piece => self.piece_reaches(board, piece, from, to),
        }
    }

    /// Knight, bishop, rook and queen geometry.
    fn piece_reaches(&self, board: &Board, piece: Piece, from: Square, to: Square) -> bool {
        let (d_row, d_col) = delta(from, to);
        let shape = match piece {
            Piece::Knight => {
                (d_row.abs() == 2 && d_col.abs() == 1) || (d_row.abs() == 1 && d_col.abs() == 2)
            }
            Piece::Rook => d_row == 0 || d_col == 0,
            Piece::Bishop => d_row.abs() == d_col.abs(),
            Piece::Queen => d_row == 0 || d_col == 0 || d_row.abs() == d_col.abs(),
            Piece::Pawn | Piece::King => false,
        };
        if !shape {
            return false;
        }
        !(piece.is_slider() && self.options.block_sliding_paths) || path_is_clear(board, from, to)
    }

    fn pawn_move(
        &self,
        board: &Board,
        history: &[Board],
        color: Color,
        mv: Move,
        target: Option<ColoredPiece>,
    ) -> bool {
        let direction = color.pawn_direction();
        let (d_row, d_col) = delta(mv.from, mv.to);

        if d_col == 0 {
            if target.is_some() {
                return false;
            }
            if d_row == direction {
                return true;
            }
            return mv.from.row() == color.pawn_rank()
                && d_row == 2 * direction
                && mv
                    .from
                    .offset(direction, 0)
                    .is_some_and(|mid| board.is_empty(mid));
        }

        if d_col.abs() == 1 && d_row == direction {
            return target.is_some() || en_passant_available(board, history, color, mv);
        }

        false
    }

    fn castling_move(&self, board: &Board, history: &[Board], color: Color, mv: Move) -> bool {
        let home = color.back_rank();
        let king_home = Square::at(home, 4);
        let (d_row, d_col) = delta(mv.from, mv.to);
        if mv.from != king_home || d_row != 0 || d_col.abs() != 2 {
            return false;
        }

        let rook_col = if d_col > 0 { 7 } else { 0 };
        let rook_home = Square::at(home, rook_col);
        let king = ColoredPiece::new(Piece::King, color);
        let rook = ColoredPiece::new(Piece::Rook, color);
        if board.get(rook_home) != Some(rook) {
            return false;
        }
        if has_left(history, king_home, king) || has_left(history, rook_home, rook) {
            return false;
        }

        let step: i8 = if rook_col == 7 { 1 } else { -1 };
        if !path_is_clear(board, king_home, rook_home) {
            return false;
        }

        let opponent = color.opposite();
        let mut col = 4i8;
        loop {
            if self.is_square_attacked(board, Square::at(home, col as u8), opponent) {
                return false;
            }
            if col == mv.to.col() as i8 {
                return true;
            }
            col += step;
        }
    }
}

/// En passant: the mover stands on its fifth rank, an opposing pawn is
/// directly beside it in the destination column, and that pawn reached its
/// square by a double step in the previous ply.
fn en_passant_available(board: &Board, history: &[Board], color: Color, mv: Move) -> bool {
    if mv.from.row() != color.en_passant_rank() {
        return false;
    }
    let passed = ColoredPiece::new(Piece::Pawn, color.opposite());
    let beside = Square::at(mv.from.row(), mv.to.col());
    let start = Square::at(color.opposite().pawn_rank(), mv.to.col());
    if board.get(beside) != Some(passed) || !board.is_empty(start) {
        return false;
    }

    let Some(previous) = history.len().checked_sub(2).map(|i| &history[i]) else {
        return false;
    };
    previous.get(start) == Some(passed) && previous.is_empty(beside) && previous.is_empty(mv.to)
}

/// Returns true if any snapshot after the first lacks `piece` on `square`.
fn has_left(history: &[Board], square: Square, piece: ColoredPiece) -> bool {
    history
        .iter()
        .skip(1)
        .any(|snapshot| snapshot.get(square) != Some(piece))
}

/// Checks that every square strictly between two aligned squares is empty.
fn path_is_clear(board: &Board, from: Square, to: Square) -> bool {
    let (d_row, d_col) = delta(from, to);
    let step = (d_row.signum(), d_col.signum());
    let mut current = from;
    loop {
        current = match current.offset(step.0, step.1) {
            Some(sq) => sq,
            None => return false,
        };
        if current == to {
            return true;
        }
        if !board.is_empty(current) {
            return false;
        }
    }
}

#[inline]
fn is_king_step(from: Square, to: Square) -> bool {
    let (d_row, d_col) = delta(from, to);
    from != to && d_row.abs() <= 1 && d_col.abs() <= 1
}

#[inline]
fn delta(from: Square, to: Square) -> (i8, i8) {
    (
        to.row() as i8 - from.row() as i8,
        to.col() as i8 - from.col() as i8,
    )
}

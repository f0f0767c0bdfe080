//! Applying a move, including its side effects.

use crate::Board;
use chess_core::{ColoredPiece, Move, MoveKind, Piece, Square};

/// Applies a validated move and returns the resulting board with the kind
/// of move that was made.
///
/// Side effects:
/// - a pawn reaching the far rank becomes a queen of its color;
/// - a pawn moving diagonally onto an empty square removes the pawn it
///   passed (en passant);
/// - a king moving two columns brings the matching rook to the square it
///   crossed (castling).
///
/// An empty origin square yields an unchanged copy.
pub fn make_move(board: &Board, mv: Move) -> (Board, MoveKind) {
    let Some(mover) = board.get(mv.from) else {
        return (*board, MoveKind::Normal);
    };
    let captured = board.get(mv.to);
    let next = board.with(mv.from, None).with(mv.to, Some(mover));

    let d_row = mv.to.row() as i8 - mv.from.row() as i8;
    let d_col = mv.to.col() as i8 - mv.from.col() as i8;

    match mover.piece {
        Piece::Pawn if mv.to.row() == mover.color.promotion_rank() => {
            let queen = ColoredPiece::new(Piece::Queen, mover.color);
            (next.with(mv.to, Some(queen)), MoveKind::Promotion)
        }
        Piece::Pawn if d_col.abs() == 1 && captured.is_none() => {
            let passed = Square::at(mv.from.row(), mv.to.col());
            (next.with(passed, None), MoveKind::EnPassant)
        }
        Piece::Pawn if d_row.abs() == 2 => (next, MoveKind::DoublePush),
        Piece::King if d_row == 0 && d_col.abs() == 2 => {
            let row = mv.from.row();
            let (rook_from, rook_to, kind) = if d_col > 0 {
                (7, mv.to.col() - 1, MoveKind::CastleKingside)
            } else {
                (0, mv.to.col() + 1, MoveKind::CastleQueenside)
            };
            let rook_from = Square::at(row, rook_from);
            let rook = next.get(rook_from);
            let next = next
                .with(rook_from, None)
                .with(Square::at(row, rook_to), rook);
            (next, kind)
        }
        _ => (next, MoveKind::Normal),
    }
}

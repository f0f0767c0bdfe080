//! Random move suggestions.

use crate::rules::Rules;
use crate::Board;
use chess_core::{Color, Move};
use rand::seq::SliceRandom;
use rand::Rng;

/// Picks one pseudo-legal move of `color` uniformly at random.
///
/// The pick is not filtered for king safety, so a suggestion may leave the
/// suggesting side in check. Returns `None` when `color` has no move.
pub fn suggest_move<R: Rng + ?Sized>(
    rules: &Rules,
    board: &Board,
    history: &[Board],
    color: Color,
    rng: &mut R,
) -> Option<Move> {
    rules
        .pseudo_legal_moves(board, history, color)
        .choose(rng)
        .copied()
}

//! Move ordering via MVV-LVA.
//!
//! Captures are scored `10 * value(victim) - value(attacker)` using the
//! material table, quiet moves score 0. The king's value is 0, so the lowest
//! possible capture score is `10 * 100 - 900 = 100` and every capture sorts
//! ahead of every quiet move.

use std::cmp::Reverse;

use vantage_core::{Move, PieceKind, Position};

use crate::eval::material::value;

/// Ordering score of `mv` in `position`. Higher is searched first.
pub fn score_move(position: &impl Position, mv: Move) -> i32 {
    if !position.is_capture(mv) {
        return 0;
    }
    // An en-passant victim is off the destination square; the attacker of a
    // promotion is still the pawn on the origin.
    let kind_on = |sq| position.piece_at(sq).map_or(PieceKind::Pawn, |p| p.kind);
    let victim = kind_on(mv.capture_square());
    let attacker = kind_on(mv.from());
    10 * value(victim) - value(attacker)
}

/// Reorder `moves` so higher-scoring moves come first.
///
/// The sort is stable: moves with equal scores keep their input order.
pub fn order_moves(position: &impl Position, moves: &mut [Move]) {
    moves.sort_by_cached_key(|&mv| Reverse(score_move(position, mv)));
}

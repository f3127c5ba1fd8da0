//! Static evaluation.

pub mod material;
pub mod pst;

use vantage_core::{Position, Square};

use crate::eval::material::value;
use crate::eval::pst::pst_value;

/// Evaluate `position` in centipawns from the side to move's point of view.
///
/// Each piece contributes its material value plus its piece-square bonus,
/// positively for the side to move and negatively for the opponent.
pub fn evaluate(position: &impl Position) -> i32 {
    let us = position.side_to_move();
    Square::all()
        .filter_map(|sq| position.piece_at(sq).map(|piece| (sq, piece)))
        .map(|(sq, piece)| {
            let score = value(piece.kind) + pst_value(piece.kind, piece.color, sq);
            if piece.color == us { score } else { -score }
        })
        .sum()
}

//! Material values.
//!
//! Shared by the evaluator and the move orderer.

use vantage_core::{Color, PieceKind, Position, Square};

/// Material value in centipawns, indexed by [`PieceKind::index()`].
///
/// | Piece  | Value |
/// |--------|-------|
/// | Pawn   |   100 |
/// | Knight |   300 |
/// | Bishop |   330 |
/// | Rook   |   500 |
/// | Queen  |   900 |
/// | King   |     0 |
pub const PIECE_VALUES: [i32; PieceKind::COUNT] = [
    100, // Pawn
    300, // Knight
    330, // Bishop
    500, // Rook
    900, // Queen
    0,   // King
];

/// Material value of `kind`.
#[inline]
pub const fn value(kind: PieceKind) -> i32 {
    PIECE_VALUES[kind.index()]
}

/// Material balance from `perspective`'s point of view.
pub fn material(position: &impl Position, perspective: Color) -> i32 {
    Square::all()
        .filter_map(|sq| position.piece_at(sq))
        .map(|piece| {
            let v = value(piece.kind);
            if piece.color == perspective { v } else { -v }
        })
        .sum()
}

//! The board contract consumed by the search.
//!
//! Game rules live behind these traits. The engine only reads the placement
//! and state fields that feed evaluation and hashing, asks for the legal move
//! list, and applies/undoes moves in strict pairs.

use crate::castle_rights::CastleRights;
use crate::chess_move::Move;
use crate::piece::{Color, Piece};
use crate::square::Square;

/// Read-only view of a position.
pub trait Position {
    /// The piece on `square`, if any.
    fn piece_at(&self, square: Square) -> Option<Piece>;

    /// The side to move.
    fn side_to_move(&self) -> Color;

    /// Castling rights still available to either side.
    fn castling_rights(&self) -> CastleRights;

    /// En-passant target square created by the previous double pawn push.
    fn en_passant(&self) -> Option<Square>;

    /// Return `true` if `mv` removes an opposing piece.
    fn is_capture(&self, mv: Move) -> bool {
        if mv.is_en_passant() {
            return true;
        }
        if mv.is_castle() {
            return false;
        }
        self.piece_at(mv.to())
            .is_some_and(|victim| victim.color != self.side_to_move())
    }
}

/// A mutable position that can enumerate, apply, and take back moves.
///
/// Every `apply_move` that succeeds must be matched by exactly one
/// `undo_last`, after which the position is identical to its prior state.
pub trait Board: Position {
    /// Failure reported by the rules implementation (illegal move, corrupt state).
    type Error: std::error::Error;

    /// All legal moves for the side to move. Empty for a terminal position.
    fn legal_moves(&self) -> Result<Vec<Move>, Self::Error>;

    /// Play `mv` in place.
    fn apply_move(&mut self, mv: Move) -> Result<(), Self::Error>;

    /// Take back the most recently applied move.
    fn undo_last(&mut self) -> Result<(), Self::Error>;
}

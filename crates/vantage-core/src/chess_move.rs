//! Moves, bit-packed into a u16.

use std::fmt;
use std::str::FromStr;

use crate::error::MoveError;
use crate::piece::PieceKind;
use crate::square::Square;

const FROM_MASK: u16 = 0x003F;
const TO_MASK: u16 = 0x0FC0;
const PROMO_MASK: u16 = 0x3000;
const KIND_MASK: u16 = 0xC000;
const TO_SHIFT: u32 = 6;
const PROMO_SHIFT: u32 = 12;
const KIND_SHIFT: u32 = 14;

/// How a move changes the board beyond relocating one piece.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum MoveKind {
    /// Quiet move or ordinary capture.
    Normal = 0,
    /// Pawn reaching the last rank; the promotion piece is stored alongside.
    Promotion = 1,
    /// Pawn capture onto the en-passant target square.
    EnPassant = 2,
    /// King moving two files; the rook is relocated as well.
    Castling = 3,
}

/// A move encoded in 16 bits.
///
/// ```text
/// bits  0-5:  from square
/// bits  6-11: to square
/// bits 12-13: promotion piece (Knight=0, Bishop=1, Rook=2, Queen=3)
/// bits 14-15: move kind
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Move(u16);

impl Move {
    /// Create a quiet move or ordinary capture.
    pub const fn new(from: Square, to: Square) -> Move {
        Move::pack(from, to, 0, MoveKind::Normal)
    }

    /// Create a promotion. Kinds other than knight, bishop, and rook promote to a queen.
    pub const fn new_promotion(from: Square, to: Square, kind: PieceKind) -> Move {
        let promo = match kind {
            PieceKind::Knight => 0,
            PieceKind::Bishop => 1,
            PieceKind::Rook => 2,
            _ => 3,
        };
        Move::pack(from, to, promo, MoveKind::Promotion)
    }

    /// Create an en-passant capture; `to` is the en-passant target square.
    pub const fn new_en_passant(from: Square, to: Square) -> Move {
        Move::pack(from, to, 0, MoveKind::EnPassant)
    }

    /// Create a castling move from the king's origin and destination.
    pub const fn new_castle(king_from: Square, king_to: Square) -> Move {
        Move::pack(king_from, king_to, 0, MoveKind::Castling)
    }

    const fn pack(from: Square, to: Square, promo: u16, kind: MoveKind) -> Move {
        Move(
            from.index() as u16
                | (to.index() as u16) << TO_SHIFT
                | promo << PROMO_SHIFT
                | (kind as u16) << KIND_SHIFT,
        )
    }

    #[inline]
    pub const fn from(self) -> Square {
        Square::from_index_unchecked((self.0 & FROM_MASK) as u8)
    }

    #[inline]
    pub const fn to(self) -> Square {
        Square::from_index_unchecked(((self.0 & TO_MASK) >> TO_SHIFT) as u8)
    }

    #[inline]
    pub const fn kind(self) -> MoveKind {
        match (self.0 & KIND_MASK) >> KIND_SHIFT {
            0 => MoveKind::Normal,
            1 => MoveKind::Promotion,
            2 => MoveKind::EnPassant,
            _ => MoveKind::Castling,
        }
    }

    /// The piece a pawn promotes to, if this is a promotion.
    pub const fn promotion(self) -> Option<PieceKind> {
        if !matches!(self.kind(), MoveKind::Promotion) {
            return None;
        }
        Some(match (self.0 & PROMO_MASK) >> PROMO_SHIFT {
            0 => PieceKind::Knight,
            1 => PieceKind::Bishop,
            2 => PieceKind::Rook,
            _ => PieceKind::Queen,
        })
    }

    #[inline]
    pub const fn is_en_passant(self) -> bool {
        matches!(self.kind(), MoveKind::EnPassant)
    }

    #[inline]
    pub const fn is_castle(self) -> bool {
        matches!(self.kind(), MoveKind::Castling)
    }

    /// Square of the piece this move would capture.
    ///
    /// Equal to [`to`](Move::to) except for en passant, where the victim
    /// stands on the origin rank of the destination file.
    pub const fn capture_square(self) -> Square {
        if self.is_en_passant() {
            Square::from_index_unchecked(self.from().rank() * 8 + self.to().file())
        } else {
            self.to()
        }
    }

    /// Origin and destination of the rook moved by a castling move.
    pub const fn castling_rook(self) -> Option<(Square, Square)> {
        if !self.is_castle() {
            return None;
        }
        match self.to().index() {
            6 => Some((Square::H1, Square::F1)),
            2 => Some((Square::A1, Square::D1)),
            62 => Some((Square::H8, Square::F8)),
            58 => Some((Square::A8, Square::D8)),
            _ => None,
        }
    }
}

/// Parses UCI long algebraic notation (`e2e4`, `a7a8q`).
///
/// The result is a normal move or a promotion; castling and en passant are
/// only recognisable against a position (see `Mailbox::move_from_uci`).
impl FromStr for Move {
    type Err = MoveError;

    fn from_str(s: &str) -> Result<Move, MoveError> {
        let invalid = || MoveError::InvalidNotation {
            found: s.to_string(),
        };
        if !s.is_ascii() || !(4..=5).contains(&s.len()) {
            return Err(invalid());
        }
        let from = Square::from_algebraic(&s[0..2]).ok_or_else(invalid)?;
        let to = Square::from_algebraic(&s[2..4]).ok_or_else(invalid)?;
        match s[4..].chars().next() {
            None => Ok(Move::new(from, to)),
            Some(c) => match PieceKind::from_letter(c) {
                Some(
                    kind @ (PieceKind::Knight
                    | PieceKind::Bishop
                    | PieceKind::Rook
                    | PieceKind::Queen),
                ) if c.is_ascii_lowercase() => Ok(Move::new_promotion(from, to, kind)),
                _ => Err(invalid()),
            },
        }
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.from(), self.to())?;
        if let Some(kind) = self.promotion() {
            write!(f, "{}", kind.letter())?;
        }
        Ok(())
    }
}

impl fmt::Debug for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Move({self} {:?})", self.kind())
    }
}

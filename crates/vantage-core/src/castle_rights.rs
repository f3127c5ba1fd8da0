//! Castling rights as four independent flags.

use std::fmt;

use crate::error::FenError;
use crate::square::Square;

/// Castling rights: bit 0 = White king-side, 1 = White queen-side,
/// 2 = Black king-side, 3 = Black queen-side.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct CastleRights(u8);

impl CastleRights {
    /// Number of individual rights.
    pub const COUNT: usize = 4;

    pub const NONE: CastleRights = CastleRights(0);
    pub const ALL: CastleRights = CastleRights(0b1111);

    pub const WHITE_KING: CastleRights = CastleRights(0b0001);
    pub const WHITE_QUEEN: CastleRights = CastleRights(0b0010);
    pub const BLACK_KING: CastleRights = CastleRights(0b0100);
    pub const BLACK_QUEEN: CastleRights = CastleRights(0b1000);

    pub const WHITE_BOTH: CastleRights = CastleRights(0b0011);
    pub const BLACK_BOTH: CastleRights = CastleRights(0b1100);

    /// Build rights from raw bits, keeping only the low four.
    #[inline]
    pub const fn new(bits: u8) -> CastleRights {
        CastleRights(bits & 0b1111)
    }

    #[inline]
    pub const fn bits(self) -> u8 {
        self.0
    }

    #[inline]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Return `true` if every right in `other` is also held here.
    #[inline]
    pub const fn contains(self, other: CastleRights) -> bool {
        self.0 & other.0 == other.0
    }

    #[inline]
    pub const fn insert(self, other: CastleRights) -> CastleRights {
        CastleRights(self.0 | other.0)
    }

    #[inline]
    pub const fn remove(self, other: CastleRights) -> CastleRights {
        CastleRights(self.0 & !other.0)
    }

    /// Rights held by exactly one of `self` and `other`.
    #[inline]
    pub const fn changed(self, other: CastleRights) -> CastleRights {
        CastleRights(self.0 ^ other.0)
    }

    /// Bit positions (0..4) of the rights that are held.
    pub fn slots(self) -> impl Iterator<Item = usize> {
        (0..Self::COUNT).filter(move |&slot| self.0 & (1 << slot) != 0)
    }

    /// Rights lost when a move starts or ends on `square`.
    ///
    /// A king leaving its home square loses both of its rights; a rook leaving
    /// (or being captured on) a corner loses the matching one.
    pub const fn revoked_by(square: Square) -> CastleRights {
        match square.index() {
            0 => Self::WHITE_QUEEN,
            4 => Self::WHITE_BOTH,
            7 => Self::WHITE_KING,
            56 => Self::BLACK_QUEEN,
            60 => Self::BLACK_BOTH,
            63 => Self::BLACK_KING,
            _ => Self::NONE,
        }
    }

    /// Parse the FEN castling field (`"KQkq"`, `"Kq"`, `"-"`, ...).
    pub fn from_fen(s: &str) -> Result<CastleRights, FenError> {
        if s == "-" {
            return Ok(CastleRights::NONE);
        }
        s.chars().try_fold(CastleRights::NONE, |rights, c| {
            let flag = match c {
                'K' => Self::WHITE_KING,
                'Q' => Self::WHITE_QUEEN,
                'k' => Self::BLACK_KING,
                'q' => Self::BLACK_QUEEN,
                _ => return Err(FenError::InvalidCastlingChar { character: c }),
            };
            Ok(rights.insert(flag))
        })
    }
}

impl fmt::Display for CastleRights {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            return f.write_str("-");
        }
        for (flag, c) in [
            (Self::WHITE_KING, 'K'),
            (Self::WHITE_QUEEN, 'Q'),
            (Self::BLACK_KING, 'k'),
            (Self::BLACK_QUEEN, 'q'),
        ] {
            if self.contains(flag) {
                write!(f, "{c}")?;
            }
        }
        Ok(())
    }
}

impl fmt::Debug for CastleRights {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "CastleRights({self})")
    }
}

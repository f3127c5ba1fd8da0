//! Piece-square tables for all six piece kinds.
//!
//! Tables are written from White's point of view with rank 1 first, so
//! `TABLE[rank][file]` with `rank` and `file` counted from a1. Black reads the
//! same table mirrored vertically. Use [`pst_value`] for lookups.

use vantage_core::{Color, PieceKind, Square};

type Table = [[i32; 8]; 8];

#[rustfmt::skip]
const PAWN: Table = [
    [  0,   0,   0,   0,   0,   0,   0,   0], // Rank 1 (never used)
    [  5,  10,  10, -20, -20,  10,  10,   5], // Rank 2
    [  5,  -5, -10,   0,   0, -10,  -5,   5], // Rank 3
    [  0,   0,   0,  20,  20,   0,   0,   0], // Rank 4
    [  5,   5,  10,  25,  25,  10,   5,   5], // Rank 5
    [ 10,  10,  20,  30,  30,  20,  10,  10], // Rank 6
    [ 50,  50,  50,  50,  50,  50,  50,  50], // Rank 7
    [  0,   0,   0,   0,   0,   0,   0,   0], // Rank 8 (never used)
];

#[rustfmt::skip]
const KNIGHT: Table = [
    [-50, -40, -30, -30, -30, -30, -40, -50], // Rank 1
    [-40, -20,   0,   5,   5,   0, -20, -40], // Rank 2
    [-30,   5,  10,  15,  15,  10,   5, -30], // Rank 3
    [-30,   0,  15,  20,  20,  15,   0, -30], // Rank 4
    [-30,   5,  15,  20,  20,  15,   5, -30], // Rank 5
    [-30,   0,  10,  15,  15,  10,   0, -30], // Rank 6
    [-40, -20,   0,   0,   0,   0, -20, -40], // Rank 7
    [-50, -40, -30, -30, -30, -30, -40, -50], // Rank 8
];

#[rustfmt::skip]
const BISHOP: Table = [
    [-20, -10, -10, -10, -10, -10, -10, -20], // Rank 1
    [-10,   5,   0,   0,   0,   0,   5, -10], // Rank 2
    [-10,  10,  10,  10,  10,  10,  10, -10], // Rank 3
    [-10,   0,  10,  10,  10,  10,   0, -10], // Rank 4
    [-10,   5,   5,  10,  10,   5,   5, -10], // Rank 5
    [-10,   0,   5,  10,  10,   5,   0, -10], // Rank 6
    [-10,   0,   0,   0,   0,   0,   0, -10], // Rank 7
    [-20, -10, -10, -10, -10, -10, -10, -20], // Rank 8
];

#[rustfmt::skip]
const ROOK: Table = [
    [  0,   0,   0,   5,   5,   0,   0,   0], // Rank 1
    [ -5,   0,   0,   0,   0,   0,   0,  -5], // Rank 2
    [ -5,   0,   0,   0,   0,   0,   0,  -5], // Rank 3
    [ -5,   0,   0,   0,   0,   0,   0,  -5], // Rank 4
    [ -5,   0,   0,   0,   0,   0,   0,  -5], // Rank 5
    [ -5,   0,   0,   0,   0,   0,   0,  -5], // Rank 6
    [  5,  10,  10,  10,  10,  10,  10,   5], // Rank 7
    [  0,   0,   0,   0,   0,   0,   0,   0], // Rank 8
];

#[rustfmt::skip]
const QUEEN: Table = [
    [-20, -10, -10,  -5,  -5, -10, -10, -20], // Rank 1
    [-10,   0,   5,   0,   0,   0,   0, -10], // Rank 2
    [-10,   5,   5,   5,   5,   5,   0, -10], // Rank 3
    [  0,   0,   5,   5,   5,   5,   0,  -5], // Rank 4
    [ -5,   0,   5,   5,   5,   5,   0,  -5], // Rank 5
    [-10,   0,   5,   5,   5,   5,   0, -10], // Rank 6
    [-10,   0,   0,   0,   0,   0,   0, -10], // Rank 7
    [-20, -10, -10,  -5,  -5, -10, -10, -20], // Rank 8
];

/// King table for the middlegame: stay behind the pawn shield.
#[rustfmt::skip]
const KING: Table = [
    [ 20,  30,  10,   0,   0,  10,  30,  20], // Rank 1
    [ 20,  20,   0,   0,   0,   0,  20,  20], // Rank 2
    [-10, -20, -20, -20, -20, -20, -20, -10], // Rank 3
    [-20, -30, -30, -40, -40, -30, -30, -20], // Rank 4
    [-30, -40, -40, -50, -50, -40, -40, -30], // Rank 5
    [-30, -40, -40, -50, -50, -40, -40, -30], // Rank 6
    [-30, -40, -40, -50, -50, -40, -40, -30], // Rank 7
    [-30, -40, -40, -50, -50, -40, -40, -30], // Rank 8
];

/// Tables indexed by [`PieceKind::index()`].
const TABLES: [&Table; PieceKind::COUNT] = [&PAWN, &KNIGHT, &BISHOP, &ROOK, &QUEEN, &KING];

/// Positional bonus for a `color` piece of `kind` standing on `square`.
#[inline]
pub fn pst_value(kind: PieceKind, color: Color, square: Square) -> i32 {
    let rank = match color {
        Color::White => square.rank(),
        Color::Black => 7 - square.rank(),
    };
    TABLES[kind.index()][usize::from(rank)][usize::from(square.file())]
}

#[cfg(test)]
mod tests {
    use vantage_core::{Color, PieceKind, Square};

    use super::pst_value;

    #[test]
    fn black_reads_the_mirrored_square() {
        for kind in PieceKind::ALL {
            for sq in Square::all() {
                assert_eq!(
                    pst_value(kind, Color::White, sq),
                    pst_value(kind, Color::Black, sq.mirror()),
                    "{kind} on {sq}"
                );
            }
        }
    }

    #[test]
    fn centre_pawns_gain_by_advancing() {
        let white = |sq| pst_value(PieceKind::Pawn, Color::White, sq);
        let black = |sq| pst_value(PieceKind::Pawn, Color::Black, sq);
        assert!(white(Square::E4) > white(Square::E2));
        assert!(black(Square::E5) > black(Square::E7));
    }

    #[test]
    fn knights_prefer_the_centre() {
        let knight = |sq| pst_value(PieceKind::Knight, Color::White, sq);
        assert!(knight(Square::D4) > knight(Square::A1));
    }

    #[test]
    fn castled_king_beats_exposed_king() {
        assert_eq!(pst_value(PieceKind::King, Color::White, Square::G1), 30);
        assert_eq!(pst_value(PieceKind::King, Color::Black, Square::G8), 30);
        assert!(pst_value(PieceKind::King, Color::White, Square::E4) < 0);
    }
}

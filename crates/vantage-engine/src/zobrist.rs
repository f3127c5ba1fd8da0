//! Zobrist keys and the incrementally maintained position fingerprint.
//!
//! A [`ZobristTable`] holds 781 random keys: one per (piece, square), one for
//! Black to move, one per castling right, and one per en-passant file.
//! A position's key is the XOR of the keys for every feature it has, so a
//! move changes the key by XOR-ing in exactly the features it toggles.

use std::collections::HashSet;

use rand::rngs::StdRng;
use rand::{RngCore, SeedableRng};
use tracing::debug;
use vantage_core::{CastleRights, Color, Move, Piece, PieceKind, Position, Square};

const EN_PASSANT_FILES: usize = 8;

/// Total number of keys in a table.
pub const KEY_COUNT: usize =
    Piece::COUNT * Square::COUNT + 1 + CastleRights::COUNT + EN_PASSANT_FILES;

/// Random keys for every hashed feature of a position. Immutable once built.
#[derive(Clone, PartialEq, Eq)]
pub struct ZobristTable {
    pieces: [[u64; Square::COUNT]; Piece::COUNT],
    side_to_move: u64,
    castling: [u64; CastleRights::COUNT],
    en_passant: [u64; EN_PASSANT_FILES],
}

impl ZobristTable {
    /// Draw a table from OS entropy.
    pub fn new() -> ZobristTable {
        ZobristTable::with_rng(&mut StdRng::from_entropy())
    }

    /// Draw a reproducible table from `seed`.
    pub fn with_seed(seed: u64) -> ZobristTable {
        ZobristTable::with_rng(&mut StdRng::seed_from_u64(seed))
    }

    fn with_rng(rng: &mut StdRng) -> ZobristTable {
        let mut seen = HashSet::with_capacity(KEY_COUNT);
        let mut next_key = || loop {
            let key = rng.next_u64();
            if key != 0 && seen.insert(key) {
                return key;
            }
        };

        let mut pieces = [[0u64; Square::COUNT]; Piece::COUNT];
        for row in pieces.iter_mut() {
            for key in row.iter_mut() {
                *key = next_key();
            }
        }
        let side_to_move = next_key();
        let castling = std::array::from_fn(|_| next_key());
        let en_passant = std::array::from_fn(|_| next_key());

        debug!(keys = KEY_COUNT, "zobrist table initialised");
        ZobristTable {
            pieces,
            side_to_move,
            castling,
            en_passant,
        }
    }

    #[inline]
    pub fn piece(&self, piece: Piece, square: Square) -> u64 {
        self.pieces[piece.index()][square.index()]
    }

    /// Key toggled when Black is to move.
    #[inline]
    pub fn side_to_move(&self) -> u64 {
        self.side_to_move
    }

    /// XOR of the keys for every right in `rights`.
    pub fn castling(&self, rights: CastleRights) -> u64 {
        rights.slots().fold(0, |acc, slot| acc ^ self.castling[slot])
    }

    /// Key for an en-passant target on `file` (0 = a-file).
    #[inline]
    pub fn en_passant(&self, file: u8) -> u64 {
        self.en_passant[usize::from(file) % EN_PASSANT_FILES]
    }

    fn en_passant_target(&self, target: Option<Square>) -> u64 {
        target.map_or(0, |sq| self.en_passant(sq.file()))
    }

    /// Compute the key of `position` from scratch.
    pub fn hash_position(&self, position: &impl Position) -> u64 {
        let mut key = Square::all()
            .filter_map(|sq| position.piece_at(sq).map(|piece| self.piece(piece, sq)))
            .fold(0, |acc, k| acc ^ k);

        if position.side_to_move() == Color::Black {
            key ^= self.side_to_move;
        }
        key ^= self.castling(position.castling_rights());
        key ^= self.en_passant_target(position.en_passant());
        key
    }

    /// Iterate over every key in the table.
    pub fn keys(&self) -> impl Iterator<Item = u64> + '_ {
        self.pieces
            .iter()
            .flatten()
            .chain(std::iter::once(&self.side_to_move))
            .chain(self.castling.iter())
            .chain(self.en_passant.iter())
            .copied()
    }
}

impl Default for ZobristTable {
    fn default() -> Self {
        ZobristTable::new()
    }
}

impl std::fmt::Debug for ZobristTable {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ZobristTable")
            .field("keys", &KEY_COUNT)
            .finish_non_exhaustive()
    }
}

/// Placement toggles for a move, captured before the board changes.
///
/// Produced by [`Hasher::prepare`] and consumed by [`Hasher::commit`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[must_use]
pub struct PendingUpdate {
    delta: u64,
    castling: CastleRights,
    en_passant: Option<Square>,
}

/// The running fingerprint of a position under search.
///
/// Each committed move pushes the XOR delta it applied. [`Hasher::undo`] pops
/// and re-applies it, which restores the prior key because XOR is its own
/// inverse.
#[derive(Debug, Clone)]
pub struct Hasher {
    table: ZobristTable,
    key: u64,
    deltas: Vec<u64>,
}

impl Hasher {
    /// A hasher with a zero key. Call [`reset`](Hasher::reset) before use.
    pub fn new(table: ZobristTable) -> Hasher {
        Hasher {
            table,
            key: 0,
            deltas: Vec::new(),
        }
    }

    /// A hasher positioned on `position`.
    pub fn with_position(table: ZobristTable, position: &impl Position) -> Hasher {
        let mut hasher = Hasher::new(table);
        hasher.reset(position);
        hasher
    }

    #[inline]
    pub fn key(&self) -> u64 {
        self.key
    }

    pub fn table(&self) -> &ZobristTable {
        &self.table
    }

    /// Number of committed moves that can be undone.
    pub fn depth(&self) -> usize {
        self.deltas.len()
    }

    /// Recompute the key from `position` and forget every pending undo.
    pub fn reset(&mut self, position: &impl Position) {
        self.key = self.table.hash_position(position);
        self.deltas.clear();
    }

    /// Collect the placement toggles of `mv` on the board it is about to be
    /// applied to.
    ///
    /// Covers the moving piece at origin and destination (promoted kind at
    /// the destination), the captured piece on its capture square, and the
    /// rook of a castling move.
    pub fn prepare(&self, before: &impl Position, mv: Move) -> PendingUpdate {
        let mut delta = 0;
        let from = mv.from();
        let to = mv.to();

        if let Some(moved) = before.piece_at(from) {
            delta ^= self.table.piece(moved, from);

            let placed = match mv.promotion() {
                Some(kind) => Piece::new(kind, moved.color),
                None => moved,
            };
            delta ^= self.table.piece(placed, to);

            if let Some((rook_from, rook_to)) = mv.castling_rook() {
                let rook = Piece::new(PieceKind::Rook, moved.color);
                delta ^= self.table.piece(rook, rook_from);
                delta ^= self.table.piece(rook, rook_to);
            } else {
                let capture = mv.capture_square();
                if let Some(victim) = before.piece_at(capture) {
                    delta ^= self.table.piece(victim, capture);
                }
            }
        }

        PendingUpdate {
            delta,
            castling: before.castling_rights(),
            en_passant: before.en_passant(),
        }
    }

    /// Finish the update once the board has applied the move.
    ///
    /// Toggles the side to move, every castling right that changed, and the
    /// en-passant file before and after.
    pub fn commit(&mut self, pending: PendingUpdate, after: &impl Position) {
        let delta = pending.delta
            ^ self.table.side_to_move
            ^ self.table.castling(pending.castling.changed(after.castling_rights()))
            ^ self.table.en_passant_target(pending.en_passant)
            ^ self.table.en_passant_target(after.en_passant());

        self.key ^= delta;
        self.deltas.push(delta);
    }

    /// Revert the most recent [`commit`](Hasher::commit).
    ///
    /// Returns `false` if there was nothing to revert.
    pub fn undo(&mut self) -> bool {
        match self.deltas.pop() {
            Some(delta) => {
                self.key ^= delta;
                true
            }
            None => false,
        }
    }
}

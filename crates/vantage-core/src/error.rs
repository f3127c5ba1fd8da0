//! Error types for FEN parsing, board validation, and move handling.

use crate::piece::Color;
use crate::square::Square;

/// Errors that occur when parsing a FEN string.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FenError {
    /// The FEN string does not have exactly 6 space-separated fields.
    #[error("expected 6 FEN fields, found {found}")]
    WrongFieldCount { found: usize },
    /// The piece placement section does not have exactly 8 ranks.
    #[error("expected 8 ranks in piece placement, found {found}")]
    WrongRankCount { found: usize },
    /// A rank describes more or fewer than 8 squares.
    #[error("rank {rank_index} describes {length} squares, expected 8")]
    BadRankLength {
        /// Zero-based index in FEN order (0 = rank 8).
        rank_index: usize,
        length: usize,
    },
    #[error("invalid piece character: '{character}'")]
    InvalidPieceChar { character: char },
    #[error("invalid active color: \"{found}\"")]
    InvalidColor { found: String },
    #[error("invalid castling character: '{character}'")]
    InvalidCastlingChar { character: char },
    #[error("invalid en passant square: \"{found}\"")]
    InvalidEnPassant { found: String },
    #[error("invalid {field}: \"{found}\"")]
    InvalidMoveCounter { field: &'static str, found: String },
    /// The placement parsed but is not a usable position.
    #[error("invalid board: {source}")]
    InvalidBoard {
        #[from]
        source: BoardError,
    },
}

/// Structural problems with a piece placement.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BoardError {
    /// A side does not have exactly one king.
    #[error("expected 1 king for {color}, found {count}")]
    InvalidKingCount { color: Color, count: usize },
    /// Pawns occupy the first or eighth rank.
    #[error("pawn on back rank square {square}")]
    PawnOnBackRank { square: Square },
}

/// Errors from applying, undoing, or parsing moves.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MoveError {
    /// The origin square of the move is empty.
    #[error("no piece on {square}")]
    EmptySource { square: Square },
    /// The piece on the origin square belongs to the side not on move.
    #[error("piece on {square} belongs to {found}, not the side to move")]
    WrongColor { square: Square, found: Color },
    /// `unmake_move` was called with no move left to take back.
    #[error("no move to undo")]
    NothingToUndo,
    /// A UCI move string could not be parsed.
    #[error("invalid move notation: \"{found}\"")]
    InvalidNotation { found: String },
}

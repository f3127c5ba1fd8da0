//! Core chess types and the board contract the search engine consumes.

mod castle_rights;
mod chess_move;
mod error;
mod fen;
mod mailbox;
mod piece;
mod position;
mod square;

pub use castle_rights::CastleRights;
pub use chess_move::{Move, MoveKind};
pub use error::{BoardError, FenError, MoveError};
pub use fen::STARTING_FEN;
pub use mailbox::Mailbox;
pub use piece::{Color, Piece, PieceKind};
pub use position::{Board, Position};
pub use square::Square;

//! Square-array position with in-place make/unmake.
//!
//! [`Mailbox`] carries out the mechanics of a move (captures, en passant,
//! castling rook transfer, promotion, castling-right revocation) but does not
//! decide which moves are legal. Callers supply moves from a rules source.

use std::fmt;

use crate::castle_rights::CastleRights;
use crate::chess_move::{Move, MoveKind};
use crate::error::{BoardError, MoveError};
use crate::piece::{Color, Piece, PieceKind};
use crate::position::Position;
use crate::square::Square;

/// State needed to take a move back.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Undo {
    mv: Move,
    moved: Piece,
    captured: Option<Piece>,
    castling: CastleRights,
    en_passant: Option<Square>,
    halfmove_clock: u16,
    fullmove_number: u16,
}

/// A position stored as one optional piece per square.
#[derive(Clone, PartialEq, Eq)]
pub struct Mailbox {
    squares: [Option<Piece>; Square::COUNT],
    side_to_move: Color,
    castling: CastleRights,
    en_passant: Option<Square>,
    halfmove_clock: u16,
    fullmove_number: u16,
    history: Vec<Undo>,
}

impl Mailbox {
    /// An empty board, White to move, no rights.
    pub fn empty() -> Mailbox {
        Mailbox {
            squares: [None; Square::COUNT],
            side_to_move: Color::White,
            castling: CastleRights::NONE,
            en_passant: None,
            halfmove_clock: 0,
            fullmove_number: 1,
            history: Vec::new(),
        }
    }

    /// The standard starting position.
    pub fn starting_position() -> Mailbox {
        const BACK_RANK: [PieceKind; 8] = [
            PieceKind::Rook,
            PieceKind::Knight,
            PieceKind::Bishop,
            PieceKind::Queen,
            PieceKind::King,
            PieceKind::Bishop,
            PieceKind::Knight,
            PieceKind::Rook,
        ];

        let mut board = Mailbox::empty();
        for (file, kind) in BACK_RANK.into_iter().enumerate() {
            board.squares[file] = Some(Piece::new(kind, Color::White));
            board.squares[8 + file] = Some(Piece::new(PieceKind::Pawn, Color::White));
            board.squares[48 + file] = Some(Piece::new(PieceKind::Pawn, Color::Black));
            board.squares[56 + file] = Some(Piece::new(kind, Color::Black));
        }
        board.castling = CastleRights::ALL;
        board
    }

    /// Assemble a position from its parts. The move history starts empty.
    pub(crate) fn from_parts(
        squares: [Option<Piece>; Square::COUNT],
        side_to_move: Color,
        castling: CastleRights,
        en_passant: Option<Square>,
        halfmove_clock: u16,
        fullmove_number: u16,
    ) -> Mailbox {
        Mailbox {
            squares,
            side_to_move,
            castling,
            en_passant,
            halfmove_clock,
            fullmove_number,
            history: Vec::new(),
        }
    }

    /// Check that each side has one king and no pawn sits on a back rank.
    pub fn validate(&self) -> Result<(), BoardError> {
        for color in [Color::White, Color::Black] {
            let count = self
                .squares
                .iter()
                .flatten()
                .filter(|p| **p == Piece::new(PieceKind::King, color))
                .count();
            if count != 1 {
                return Err(BoardError::InvalidKingCount { color, count });
            }
        }
        let back_ranks = Square::all().filter(|sq| sq.rank() == 0 || sq.rank() == 7);
        for square in back_ranks {
            if self.piece_at(square).is_some_and(|p| p.kind == PieceKind::Pawn) {
                return Err(BoardError::PawnOnBackRank { square });
            }
        }
        Ok(())
    }

    pub fn halfmove_clock(&self) -> u16 {
        self.halfmove_clock
    }

    pub fn fullmove_number(&self) -> u16 {
        self.fullmove_number
    }

    /// Number of moves that can currently be taken back.
    pub fn ply(&self) -> usize {
        self.history.len()
    }

    /// Interpret a UCI move string in this position.
    ///
    /// A king moving two files becomes a castling move and a pawn moving
    /// diagonally onto the en-passant target becomes an en-passant capture.
    pub fn move_from_uci(&self, text: &str) -> Result<Move, MoveError> {
        let mv: Move = text.parse()?;
        let Some(piece) = self.piece_at(mv.from()) else {
            return Ok(mv);
        };
        let from = mv.from();
        let to = mv.to();
        Ok(match piece.kind {
            PieceKind::King if from.file().abs_diff(to.file()) == 2 => Move::new_castle(from, to),
            PieceKind::Pawn if Some(to) == self.en_passant && from.file() != to.file() => {
                Move::new_en_passant(from, to)
            }
            _ => mv,
        })
    }

    /// Play `mv` in place.
    ///
    /// Only checks that the side to move owns the piece on the origin square.
    pub fn make_move(&mut self, mv: Move) -> Result<(), MoveError> {
        let us = self.side_to_move;
        let from = mv.from();
        let to = mv.to();

        let moved = self.squares[from.index()].ok_or(MoveError::EmptySource { square: from })?;
        if moved.color != us {
            return Err(MoveError::WrongColor {
                square: from,
                found: moved.color,
            });
        }

        let captured = match mv.kind() {
            MoveKind::Castling => {
                if let Some((rook_from, rook_to)) = mv.castling_rook() {
                    let rook = self.squares[rook_from.index()].take();
                    self.squares[rook_to.index()] = rook;
                }
                None
            }
            MoveKind::Normal | MoveKind::Promotion | MoveKind::EnPassant => {
                self.squares[mv.capture_square().index()].take()
            }
        };

        let placed = match mv.promotion() {
            Some(kind) => Piece::new(kind, us),
            None => moved,
        };
        self.squares[from.index()] = None;
        self.squares[to.index()] = Some(placed);

        self.history.push(Undo {
            mv,
            moved,
            captured,
            castling: self.castling,
            en_passant: self.en_passant,
            halfmove_clock: self.halfmove_clock,
            fullmove_number: self.fullmove_number,
        });

        self.castling = self
            .castling
            .remove(CastleRights::revoked_by(from))
            .remove(CastleRights::revoked_by(to));

        self.en_passant = None;
        if moved.kind == PieceKind::Pawn && from.rank().abs_diff(to.rank()) == 2 {
            self.en_passant = Square::from_coords((from.rank() + to.rank()) / 2, from.file());
        }

        if moved.kind == PieceKind::Pawn || captured.is_some() {
            self.halfmove_clock = 0;
        } else {
            self.halfmove_clock = self.halfmove_clock.saturating_add(1);
        }
        if us == Color::Black {
            self.fullmove_number = self.fullmove_number.saturating_add(1);
        }
        self.side_to_move = !us;
        Ok(())
    }

    /// Take back the most recent [`make_move`](Mailbox::make_move).
    pub fn unmake_move(&mut self) -> Result<Move, MoveError> {
        let undo = self.history.pop().ok_or(MoveError::NothingToUndo)?;
        let mv = undo.mv;
        let us = !self.side_to_move;

        self.squares[mv.to().index()] = None;
        self.squares[mv.from().index()] = Some(undo.moved);
        if let Some(victim) = undo.captured {
            self.squares[mv.capture_square().index()] = Some(victim);
        }
        if let Some((rook_from, rook_to)) = mv.castling_rook() {
            let rook = self.squares[rook_to.index()].take();
            self.squares[rook_from.index()] = rook;
        }

        self.castling = undo.castling;
        self.en_passant = undo.en_passant;
        self.halfmove_clock = undo.halfmove_clock;
        self.fullmove_number = undo.fullmove_number;
        self.side_to_move = us;
        Ok(mv)
    }
}

impl Position for Mailbox {
    #[inline]
    fn piece_at(&self, square: Square) -> Option<Piece> {
        self.squares[square.index()]
    }

    #[inline]
    fn side_to_move(&self) -> Color {
        self.side_to_move
    }

    #[inline]
    fn castling_rights(&self) -> CastleRights {
        self.castling
    }

    #[inline]
    fn en_passant(&self) -> Option<Square> {
        self.en_passant
    }
}

impl Default for Mailbox {
    fn default() -> Self {
        Mailbox::starting_position()
    }
}

impl fmt::Debug for Mailbox {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Mailbox(\"{self}\")")
    }
}

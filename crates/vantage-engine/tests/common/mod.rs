//! Stub boards for search tests.
//!
//! Both wrap a [`Mailbox`] for the move mechanics and supply their own move
//! lists, standing in for a full rules implementation.

use std::collections::HashMap;

use vantage_core::{
    Board, CastleRights, Color, Mailbox, Move, MoveError, Piece, PieceKind, Position, Square,
};

macro_rules! delegate_position {
    ($stub:ty) => {
        impl Position for $stub {
            fn piece_at(&self, square: Square) -> Option<Piece> {
                self.board.piece_at(square)
            }
            fn side_to_move(&self) -> Color {
                self.board.side_to_move()
            }
            fn castling_rights(&self) -> CastleRights {
                self.board.castling_rights()
            }
            fn en_passant(&self) -> Option<Square> {
                self.board.en_passant()
            }
        }
    };
}

/// Offers the first `branching` single pawn pushes of the side to move, in
/// square order.
pub struct PawnPushes {
    pub board: Mailbox,
    branching: usize,
}

impl PawnPushes {
    pub fn new(board: Mailbox, branching: usize) -> Self {
        Self { board, branching }
    }

    pub fn starting(branching: usize) -> Self {
        Self::new(Mailbox::starting_position(), branching)
    }
}

delegate_position!(PawnPushes);

impl Board for PawnPushes {
    type Error = MoveError;

    fn legal_moves(&self) -> Result<Vec<Move>, MoveError> {
        let us = self.board.side_to_move();
        let pawn = Piece::new(PieceKind::Pawn, us);
        let moves = Square::all()
            .filter(|&sq| self.board.piece_at(sq) == Some(pawn))
            .filter_map(|from| {
                let rank = match us {
                    Color::White => from.rank().checked_add(1)?,
                    Color::Black => from.rank().checked_sub(1)?,
                };
                let to = Square::from_coords(rank, from.file())?;
                self.board.piece_at(to).is_none().then_some(Move::new(from, to))
            })
            .take(self.branching)
            .collect();
        Ok(moves)
    }

    fn apply_move(&mut self, mv: Move) -> Result<(), MoveError> {
        self.board.make_move(mv)
    }

    fn undo_last(&mut self) -> Result<(), MoveError> {
        self.board.unmake_move().map(|_| ())
    }
}

/// Offers a fixed move list for each line of play from the root, and records
/// every move applied to it.
pub struct Scripted {
    pub board: Mailbox,
    pub applied: Vec<Move>,
    script: HashMap<Vec<Move>, Vec<Move>>,
    path: Vec<Move>,
}

impl Scripted {
    pub fn new(fen: &str) -> Self {
        Self {
            board: fen.parse().unwrap(),
            applied: Vec::new(),
            script: HashMap::new(),
            path: Vec::new(),
        }
    }

    /// Offer `moves` once the moves in `path` have been played. Lines that
    /// are not scripted have no legal moves.
    pub fn line(mut self, path: &[&str], moves: &[&str]) -> Self {
        self.script.insert(parse(path), parse(moves));
        self
    }
}

delegate_position!(Scripted);

impl Board for Scripted {
    type Error = MoveError;

    fn legal_moves(&self) -> Result<Vec<Move>, MoveError> {
        Ok(self.script.get(&self.path).cloned().unwrap_or_default())
    }

    fn apply_move(&mut self, mv: Move) -> Result<(), MoveError> {
        self.board.make_move(mv)?;
        self.path.push(mv);
        self.applied.push(mv);
        Ok(())
    }

    fn undo_last(&mut self) -> Result<(), MoveError> {
        self.board.unmake_move()?;
        self.path.pop();
        Ok(())
    }
}

pub fn parse(ucis: &[&str]) -> Vec<Move> {
    ucis.iter().map(|u| u.parse().unwrap()).collect()
}

//! FEN parsing and serialization for [`Mailbox`].

use std::fmt;
use std::str::FromStr;

use crate::castle_rights::CastleRights;
use crate::error::FenError;
use crate::mailbox::Mailbox;
use crate::piece::{Color, Piece};
use crate::position::Position;
use crate::square::Square;

/// The FEN string for the standard starting position.
pub const STARTING_FEN: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1";

impl FromStr for Mailbox {
    type Err = FenError;

    fn from_str(fen: &str) -> Result<Mailbox, FenError> {
        let fields: Vec<&str> = fen.split_whitespace().collect();
        let [placement, color, castling, en_passant, halfmove, fullmove] = fields[..] else {
            return Err(FenError::WrongFieldCount {
                found: fields.len(),
            });
        };

        let ranks: Vec<&str> = placement.split('/').collect();
        if ranks.len() != 8 {
            return Err(FenError::WrongRankCount { found: ranks.len() });
        }

        let mut squares = [None; Square::COUNT];
        for (rank_index, rank_str) in ranks.iter().enumerate() {
            // FEN lists rank 8 first
            let rank = 7 - rank_index as u8;
            let mut file: u8 = 0;

            for c in rank_str.chars() {
                if let Some(skip) = c.to_digit(10) {
                    if !(1..=8).contains(&skip) {
                        return Err(FenError::InvalidPieceChar { character: c });
                    }
                    file = file.saturating_add(skip as u8);
                    continue;
                }
                let piece =
                    Piece::from_fen_char(c).ok_or(FenError::InvalidPieceChar { character: c })?;
                let square = Square::from_coords(rank, file).ok_or(FenError::BadRankLength {
                    rank_index,
                    length: file as usize + 1,
                })?;
                squares[square.index()] = Some(piece);
                file += 1;
            }

            if file != 8 {
                return Err(FenError::BadRankLength {
                    rank_index,
                    length: file as usize,
                });
            }
        }

        let side_to_move = match color {
            "w" => Color::White,
            "b" => Color::Black,
            other => {
                return Err(FenError::InvalidColor {
                    found: other.to_string(),
                });
            }
        };

        let castling = CastleRights::from_fen(castling)?;

        let en_passant = match en_passant {
            "-" => None,
            text => Some(Square::from_algebraic(text).ok_or_else(|| {
                FenError::InvalidEnPassant {
                    found: text.to_string(),
                }
            })?),
        };

        let counter = |field: &'static str, text: &str| {
            text.parse::<u16>().map_err(|_| FenError::InvalidMoveCounter {
                field,
                found: text.to_string(),
            })
        };
        let halfmove_clock = counter("halfmove clock", halfmove)?;
        let fullmove_number = counter("fullmove number", fullmove)?;

        let board = Mailbox::from_parts(
            squares,
            side_to_move,
            castling,
            en_passant,
            halfmove_clock,
            fullmove_number,
        );
        board.validate()?;
        Ok(board)
    }
}

impl fmt::Display for Mailbox {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for rank in (0u8..8).rev() {
            let mut empty = 0;
            for file in 0u8..8 {
                let piece = Square::from_coords(rank, file).and_then(|sq| self.piece_at(sq));
                match piece {
                    Some(piece) => {
                        if empty > 0 {
                            write!(f, "{empty}")?;
                            empty = 0;
                        }
                        write!(f, "{piece}")?;
                    }
                    None => empty += 1,
                }
            }
            if empty > 0 {
                write!(f, "{empty}")?;
            }
            if rank > 0 {
                f.write_str("/")?;
            }
        }

        write!(f, " {} {}", self.side_to_move(), self.castling_rights())?;
        match self.en_passant() {
            Some(sq) => write!(f, " {sq}")?,
            None => f.write_str(" -")?,
        }
        write!(f, " {} {}", self.halfmove_clock(), self.fullmove_number())
    }
}

#[cfg(test)]
mod tests {
    use super::STARTING_FEN;
    use crate::error::{BoardError, FenError};
    use crate::mailbox::Mailbox;

    fn roundtrip(fen: &str) {
        let board: Mailbox = fen.parse().unwrap();
        assert_eq!(board.to_string(), fen);
    }

    #[test]
    fn roundtrips() {
        roundtrip(STARTING_FEN);
        roundtrip("rnbqkbnr/pp1ppppp/8/2p5/4P3/8/PPPP1PPP/RNBQKBNR w KQkq c6 0 2");
        roundtrip("r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R w KQkq - 0 1");
        roundtrip("8/2p5/3p4/KP5r/1R3p1k/8/4P1P1/8 b - - 3 41");
    }

    #[test]
    fn starting_position_matches_fen() {
        let parsed: Mailbox = STARTING_FEN.parse().unwrap();
        assert_eq!(parsed, Mailbox::starting_position());
    }

    #[test]
    fn structural_errors() {
        assert!(matches!(
            "e4 e5".parse::<Mailbox>(),
            Err(FenError::WrongFieldCount { found: 2 })
        ));
        assert!(matches!(
            "rnbqkbnr/pppppppp/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1".parse::<Mailbox>(),
            Err(FenError::WrongRankCount { found: 7 })
        ));
        assert!(matches!(
            "rnbqkbnr/ppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1".parse::<Mailbox>(),
            Err(FenError::BadRankLength { rank_index: 1, length: 7 })
        ));
        assert!(matches!(
            "rnbqkbnr/pppppppp/9/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1".parse::<Mailbox>(),
            Err(FenError::InvalidPieceChar { character: '9' })
        ));
    }

    #[test]
    fn field_errors() {
        let base = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR";
        assert!(matches!(
            format!("{base} x KQkq - 0 1").parse::<Mailbox>(),
            Err(FenError::InvalidColor { .. })
        ));
        assert!(matches!(
            format!("{base} w KXkq - 0 1").parse::<Mailbox>(),
            Err(FenError::InvalidCastlingChar { character: 'X' })
        ));
        assert!(matches!(
            format!("{base} w KQkq z9 0 1").parse::<Mailbox>(),
            Err(FenError::InvalidEnPassant { .. })
        ));
        assert!(matches!(
            format!("{base} w KQkq - abc 1").parse::<Mailbox>(),
            Err(FenError::InvalidMoveCounter { field: "halfmove clock", .. })
        ));
    }

    #[test]
    fn rejects_kingless_placement() {
        let result = "8/8/8/8/8/8/8/8 w - - 0 1".parse::<Mailbox>();
        assert!(matches!(
            result,
            Err(FenError::InvalidBoard {
                source: BoardError::InvalidKingCount { .. }
            })
        ));
    }
}

//! FEN encoding and decoding for [`Position`].

use std::fmt;
use std::str::FromStr;

use tracing::debug;

use crate::castle_rights::CastleRights;
use crate::color::Color;
use crate::error::FenError;
use crate::file::File;
use crate::piece::Piece;
use crate::position::Position;
use crate::rank::Rank;
use crate::square::Square;

/// The FEN string for the standard starting position.
pub const STARTING_FEN: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1";

impl FromStr for Position {
    type Err = FenError;

    fn from_str(fen: &str) -> Result<Position, FenError> {
        decode(fen).inspect_err(|err| debug!(%fen, error = %err, "rejected FEN"))
    }
}

fn decode(fen: &str) -> Result<Position, FenError> {
    let fields: Vec<&str> = fen.split_whitespace().collect();
    if fields.len() != 6 {
        return Err(FenError::WrongFieldCount {
            found: fields.len(),
        });
    }

    let mut pos = Position::empty();
    place_pieces(&mut pos, fields[0])?;

    let side_to_move = match fields[1] {
        "w" => Color::White,
        "b" => Color::Black,
        other => {
            return Err(FenError::InvalidColor {
                found: other.to_string(),
            });
        }
    };
    pos.set_side_to_move(side_to_move);

    pos.set_castling(CastleRights::from_fen(fields[2])?);

    let en_passant = match fields[3] {
        "-" => None,
        text => Some(
            Square::from_algebraic(text)
                .filter(|sq| matches!(sq.rank(), Rank::Rank3 | Rank::Rank6))
                .ok_or_else(|| FenError::InvalidEnPassant {
                    found: text.to_string(),
                })?,
        ),
    };
    pos.set_en_passant(en_passant);

    pos.set_halfmove_clock(parse_counter(fields[4], "halfmove clock")?);
    pos.set_fullmove_number(parse_counter(fields[5], "fullmove number")?);

    Ok(pos)
}

/// Fill `pos` from the piece placement field, rank 8 first.
fn place_pieces(pos: &mut Position, placement: &str) -> Result<(), FenError> {
    let ranks: Vec<&str> = placement.split('/').collect();
    if ranks.len() != 8 {
        return Err(FenError::WrongRankCount { found: ranks.len() });
    }

    for (rank_index, (rank_str, rank)) in ranks.iter().zip(Rank::ALL.into_iter().rev()).enumerate() {
        let mut file_index: usize = 0;

        for c in rank_str.chars() {
            if let Some(digit) = c.to_digit(10) {
                if !(1..=8).contains(&digit) {
                    return Err(FenError::InvalidPieceChar { character: c });
                }
                file_index += digit as usize;
                continue;
            }

            // '-' is the empty-square notation, never valid inside a rank.
            let piece = Piece::from_notation(c)
                .filter(|p| !p.is_none())
                .ok_or(FenError::InvalidPieceChar { character: c })?;
            let file = File::from_index(file_index as u8).ok_or(FenError::BadRankLength {
                rank_index,
                length: file_index + 1,
            })?;
            pos.place_piece(Square::new(file, rank), piece);
            file_index += 1;
        }

        if file_index != File::COUNT {
            return Err(FenError::BadRankLength {
                rank_index,
                length: file_index,
            });
        }
    }

    Ok(())
}

/// Plain decimal digits only; `u16::from_str` alone would also take a `+` sign.
fn parse_counter(text: &str, field: &'static str) -> Result<u16, FenError> {
    let invalid = || FenError::InvalidMoveCounter {
        field,
        found: text.to_string(),
    };
    if !text.bytes().all(|b| b.is_ascii_digit()) {
        return Err(invalid());
    }
    text.parse::<u16>().map_err(|_| invalid())
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, rank) in Rank::ALL.into_iter().rev().enumerate() {
            if i > 0 {
                write!(f, "/")?;
            }

            let mut empty_run = 0u8;
            for file in File::ALL {
                let piece = self.piece_at(Square::new(file, rank));
                if piece.is_none() {
                    empty_run += 1;
                    continue;
                }
                if empty_run > 0 {
                    write!(f, "{empty_run}")?;
                    empty_run = 0;
                }
                write!(f, "{piece}")?;
            }
            if empty_run > 0 {
                write!(f, "{empty_run}")?;
            }
        }

        write!(f, " {} {}", self.side_to_move(), self.castling())?;

        match self.en_passant() {
            Some(sq) => write!(f, " {sq}")?,
            None => write!(f, " -")?,
        }

        write!(f, " {} {}", self.halfmove_clock(), self.fullmove_number())
    }
}

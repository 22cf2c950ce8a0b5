//! Error types for FEN decoding, position validation, and the move history.

/// Errors that occur when decoding a FEN string.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FenError {
    /// The FEN string does not have exactly 6 space-separated fields.
    #[error("expected 6 FEN fields, found {found}")]
    WrongFieldCount {
        /// Number of fields found.
        found: usize,
    },
    /// The piece placement section does not have exactly 8 ranks.
    #[error("expected 8 ranks in piece placement, found {found}")]
    WrongRankCount {
        /// Number of ranks found.
        found: usize,
    },
    /// A rank in the piece placement describes more or fewer than 8 squares.
    #[error("rank {rank_index} describes {length} squares, expected 8")]
    BadRankLength {
        /// Zero-based rank field index (0 = rank 8 in FEN, 7 = rank 1).
        rank_index: usize,
        /// Number of squares described.
        length: usize,
    },
    /// An unrecognized character appeared in the piece placement.
    #[error("invalid piece character: '{character}'")]
    InvalidPieceChar {
        /// The invalid character.
        character: char,
    },
    /// The active color field is not "w" or "b".
    #[error("invalid active color: \"{found}\"")]
    InvalidColor {
        /// The invalid color string.
        found: String,
    },
    /// An unrecognized character appeared in the castling rights field.
    #[error("invalid castling character: '{character}'")]
    InvalidCastlingChar {
        /// The invalid character.
        character: char,
    },
    /// The en passant field is not "-" or an algebraic square.
    #[error("invalid en passant square: \"{found}\"")]
    InvalidEnPassant {
        /// The invalid en passant string.
        found: String,
    },
    /// The halfmove clock or fullmove number is not a non-negative integer.
    #[error("invalid {field}: \"{found}\"")]
    InvalidMoveCounter {
        /// "halfmove clock" or "fullmove number".
        field: &'static str,
        /// The invalid string.
        found: String,
    },
}

/// Errors from structural validation of a [`Position`](crate::Position).
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PositionError {
    /// More than one piece plane is set on a square.
    #[error("{count} pieces claim square {square}")]
    OverlappingPieces {
        /// The offending square, in algebraic notation.
        square: String,
        /// Number of planes set on it.
        count: usize,
    },
}

/// Errors from the position history stack.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum HistoryError {
    /// `pop` was called with no positions left.
    #[error("position history is empty")]
    Empty,
}

#[cfg(test)]
mod tests {
    use super::{FenError, HistoryError, PositionError};

    #[test]
    fn fen_error_display() {
        let err = FenError::WrongFieldCount { found: 4 };
        assert_eq!(format!("{err}"), "expected 6 FEN fields, found 4");

        let err = FenError::InvalidMoveCounter {
            field: "halfmove clock",
            found: "abc".to_string(),
        };
        assert_eq!(format!("{err}"), "invalid halfmove clock: \"abc\"");
    }

    #[test]
    fn position_error_display() {
        let err = PositionError::OverlappingPieces {
            square: "e4".to_string(),
            count: 2,
        };
        assert_eq!(format!("{err}"), "2 pieces claim square e4");
    }

    #[test]
    fn history_error_display() {
        assert_eq!(format!("{}", HistoryError::Empty), "position history is empty");
    }
}

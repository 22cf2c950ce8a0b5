//! Castling rights: four independent flags, one per color and wing.

use std::fmt;

use crate::color::Color;
use crate::error::FenError;
use crate::file::File;
use crate::rank::Rank;
use crate::square::Square;

/// Which wing to castle toward.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CastleSide {
    KingSide,
    QueenSide,
}

/// Castling rights as a 4-bit set: bit 0 = `K`, 1 = `Q`, 2 = `k`, 3 = `q`.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct CastleRights(u8);

/// FEN letter for each flag, in the order the field lists them.
const FEN_FLAGS: [(CastleRights, char); 4] = [
    (CastleRights::WHITE_KING, 'K'),
    (CastleRights::WHITE_QUEEN, 'Q'),
    (CastleRights::BLACK_KING, 'k'),
    (CastleRights::BLACK_QUEEN, 'q'),
];

/// Rights lost when a move starts or ends on each square, indexed by square.
///
/// The king home squares drop both of that side's rights; the rook home
/// squares drop the matching wing.
const REVOKED_BY_SQUARE: [CastleRights; Square::COUNT] = {
    let mut table = [CastleRights::NONE; Square::COUNT];
    table[Square::new(File::FileE, Rank::Rank1).index()] = CastleRights::WHITE_BOTH;
    table[Square::new(File::FileH, Rank::Rank1).index()] = CastleRights::WHITE_KING;
    table[Square::new(File::FileA, Rank::Rank1).index()] = CastleRights::WHITE_QUEEN;
    table[Square::new(File::FileE, Rank::Rank8).index()] = CastleRights::BLACK_BOTH;
    table[Square::new(File::FileH, Rank::Rank8).index()] = CastleRights::BLACK_KING;
    table[Square::new(File::FileA, Rank::Rank8).index()] = CastleRights::BLACK_QUEEN;
    table
};

impl CastleRights {
    /// No castling rights.
    pub const NONE: CastleRights = CastleRights(0);
    /// All four rights.
    pub const ALL: CastleRights = CastleRights(0b1111);

    pub const WHITE_KING: CastleRights = CastleRights(0b0001);
    pub const WHITE_QUEEN: CastleRights = CastleRights(0b0010);
    pub const BLACK_KING: CastleRights = CastleRights(0b0100);
    pub const BLACK_QUEEN: CastleRights = CastleRights(0b1000);

    pub const WHITE_BOTH: CastleRights = CastleRights(0b0011);
    pub const BLACK_BOTH: CastleRights = CastleRights(0b1100);

    /// Return `true` if no castling rights remain.
    #[inline]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Return `true` if every right in `other` is held.
    #[inline]
    pub const fn contains(self, other: CastleRights) -> bool {
        (self.0 & other.0) == other.0
    }

    /// Return these rights plus `other`.
    #[inline]
    pub const fn insert(self, other: CastleRights) -> CastleRights {
        CastleRights(self.0 | other.0)
    }

    /// Return these rights minus `other`.
    #[inline]
    pub const fn remove(self, other: CastleRights) -> CastleRights {
        CastleRights(self.0 & !other.0)
    }

    /// Check a single color and wing.
    #[inline]
    pub const fn has(self, color: Color, side: CastleSide) -> bool {
        self.contains(Self::flag(color, side))
    }

    #[inline]
    const fn flag(color: Color, side: CastleSide) -> CastleRights {
        match (color, side) {
            (Color::White, CastleSide::KingSide) => Self::WHITE_KING,
            (Color::White, CastleSide::QueenSide) => Self::WHITE_QUEEN,
            (Color::Black, CastleSide::KingSide) => Self::BLACK_KING,
            (Color::Black, CastleSide::QueenSide) => Self::BLACK_QUEEN,
        }
    }

    /// Rights that a move touching `sq` (as source or destination) revokes.
    #[inline]
    pub const fn revoked_by(sq: Square) -> CastleRights {
        REVOKED_BY_SQUARE[sq.index()]
    }

    /// Rights remaining after a move from `source` to `dest`.
    ///
    /// Covers king moves, rook moves, and captures on a rook's home square.
    /// Rights are only ever removed.
    #[inline]
    pub const fn revoke_for_move(self, source: Square, dest: Square) -> CastleRights {
        self.remove(Self::revoked_by(source))
            .remove(Self::revoked_by(dest))
    }

    /// Parse the FEN castling field (`KQkq`, `Kq`, `-`, ...).
    ///
    /// Flags must appear at most once and in `KQkq` order.
    pub fn from_fen(s: &str) -> Result<CastleRights, FenError> {
        if s == "-" {
            return Ok(CastleRights::NONE);
        }

        let mut rights = CastleRights::NONE;
        let mut remaining = FEN_FLAGS.iter();
        for c in s.chars() {
            let (flag, _) = remaining
                .find(|&&(_, letter)| letter == c)
                .ok_or(FenError::InvalidCastlingChar { character: c })?;
            rights = rights.insert(*flag);
        }
        Ok(rights)
    }

    /// Serialize to the FEN castling field, always in `KQkq` order.
    pub fn to_fen(self) -> String {
        if self.is_empty() {
            return "-".to_string();
        }

        FEN_FLAGS
            .into_iter()
            .filter(|&(flag, _)| self.contains(flag))
            .map(|(_, c)| c)
            .collect()
    }
}

impl Default for CastleRights {
    fn default() -> Self {
        Self::ALL
    }
}

impl fmt::Display for CastleRights {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_fen())
    }
}

impl fmt::Debug for CastleRights {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "CastleRights({})", self.to_fen())
    }
}

#[cfg(test)]
mod tests {
    use super::{CastleRights, CastleSide};
    use crate::color::Color;
    use crate::error::FenError;
    use crate::square::Square;

    fn sq(name: &str) -> Square {
        Square::from_algebraic(name).unwrap()
    }

    #[test]
    fn fen_field_roundtrip() {
        for fen in ["KQkq", "Kq", "k", "-", "KQ", "kq", "Qk"] {
            let rights = CastleRights::from_fen(fen).unwrap();
            let reparsed = CastleRights::from_fen(&rights.to_fen()).unwrap();
            assert_eq!(rights, reparsed, "roundtrip failed for {fen}");
        }
    }

    #[test]
    fn to_fen_uses_fixed_order() {
        assert_eq!(CastleRights::ALL.to_fen(), "KQkq");
        assert_eq!(CastleRights::BLACK_QUEEN.insert(CastleRights::WHITE_KING).to_fen(), "Kq");
        assert_eq!(CastleRights::NONE.to_fen(), "-");
    }

    #[test]
    fn from_fen_rejects_out_of_order() {
        assert_eq!(
            CastleRights::from_fen("qkQK"),
            Err(FenError::InvalidCastlingChar { character: 'k' })
        );
        assert_eq!(
            CastleRights::from_fen("qK"),
            Err(FenError::InvalidCastlingChar { character: 'K' })
        );
    }

    #[test]
    fn from_fen_rejects_repeats() {
        assert_eq!(
            CastleRights::from_fen("KK"),
            Err(FenError::InvalidCastlingChar { character: 'K' })
        );
        assert_eq!(
            CastleRights::from_fen("KQkqq"),
            Err(FenError::InvalidCastlingChar { character: 'q' })
        );
    }

    #[test]
    fn from_fen_rejects_unknown() {
        assert!(CastleRights::from_fen("KQxq").is_err());
        assert!(CastleRights::from_fen("1").is_err());
    }

    #[test]
    fn has_color_side() {
        let rights = CastleRights::from_fen("Kq").unwrap();
        assert!(rights.has(Color::White, CastleSide::KingSide));
        assert!(!rights.has(Color::White, CastleSide::QueenSide));
        assert!(!rights.has(Color::Black, CastleSide::KingSide));
        assert!(rights.has(Color::Black, CastleSide::QueenSide));
    }

    #[test]
    fn king_move_revokes_both_wings() {
        let rights = CastleRights::ALL.revoke_for_move(sq("e1"), sq("f1"));
        assert_eq!(rights, CastleRights::BLACK_BOTH);
    }

    #[test]
    fn rook_move_revokes_its_wing() {
        let rights = CastleRights::ALL.revoke_for_move(sq("a8"), sq("a5"));
        assert_eq!(rights, CastleRights::ALL.remove(CastleRights::BLACK_QUEEN));
    }

    #[test]
    fn capture_on_rook_square_revokes() {
        // A bishop taking the h1 rook costs White the king-side right.
        let rights = CastleRights::ALL.revoke_for_move(sq("b7"), sq("h1"));
        assert!(!rights.contains(CastleRights::WHITE_KING));
        assert!(rights.contains(CastleRights::WHITE_QUEEN));
    }

    #[test]
    fn revocation_never_regrants() {
        let rights = CastleRights::NONE.revoke_for_move(sq("d2"), sq("d4"));
        assert_eq!(rights, CastleRights::NONE);
        let rights = CastleRights::WHITE_KING.revoke_for_move(sq("d2"), sq("d4"));
        assert_eq!(rights, CastleRights::WHITE_KING);
    }

    #[test]
    fn default_is_all() {
        assert_eq!(CastleRights::default(), CastleRights::ALL);
        assert_eq!(format!("{}", CastleRights::default()), "KQkq");
    }
}

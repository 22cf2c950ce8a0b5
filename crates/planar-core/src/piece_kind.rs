//! Piece families, shared by both colors' planes.

use std::fmt;

/// Lowercase notation letters, indexed by [`PieceKind::index`].
const LETTERS: [char; PieceKind::COUNT] = ['p', 'n', 'b', 'r', 'q', 'k'];

/// A piece family. Its index is the plane offset within a color's block of six.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum PieceKind {
    Pawn = 0,
    Knight = 1,
    Bishop = 2,
    Rook = 3,
    Queen = 4,
    King = 5,
}

impl PieceKind {
    pub const COUNT: usize = 6;

    /// Plane order within a color block.
    pub const ALL: [PieceKind; PieceKind::COUNT] = [
        PieceKind::Pawn,
        PieceKind::Knight,
        PieceKind::Bishop,
        PieceKind::Rook,
        PieceKind::Queen,
        PieceKind::King,
    ];

    #[inline]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Lowercase notation letter. Black uses it as is; White uppercases it.
    #[inline]
    pub const fn letter(self) -> char {
        LETTERS[self.index()]
    }

    /// Family for a notation letter of either case.
    pub fn from_letter(c: char) -> Option<PieceKind> {
        let lower = c.to_ascii_lowercase();
        LETTERS
            .iter()
            .position(|&letter| letter == lower)
            .map(|index| PieceKind::ALL[index])
    }
}

impl fmt::Display for PieceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.letter())
    }
}

//! The piece catalog: twelve colored pieces and the empty-square sentinel.

use std::fmt;

use crate::color::Color;
use crate::piece_kind::PieceKind;

/// A colored piece, or [`Piece::NONE`].
///
/// The inner value is the piece's plane number: White pieces are 0-5,
/// Black pieces 6-11 (kind order within each color follows [`PieceKind`]),
/// and `NONE` is 12.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Piece(u8);

impl Piece {
    /// Number of real pieces, and therefore of planes per square.
    pub const COUNT: usize = 12;

    pub const WHITE_PAWN: Piece = Piece::new(PieceKind::Pawn, Color::White);
    pub const WHITE_KNIGHT: Piece = Piece::new(PieceKind::Knight, Color::White);
    pub const WHITE_BISHOP: Piece = Piece::new(PieceKind::Bishop, Color::White);
    pub const WHITE_ROOK: Piece = Piece::new(PieceKind::Rook, Color::White);
    pub const WHITE_QUEEN: Piece = Piece::new(PieceKind::Queen, Color::White);
    pub const WHITE_KING: Piece = Piece::new(PieceKind::King, Color::White);

    pub const BLACK_PAWN: Piece = Piece::new(PieceKind::Pawn, Color::Black);
    pub const BLACK_KNIGHT: Piece = Piece::new(PieceKind::Knight, Color::Black);
    pub const BLACK_BISHOP: Piece = Piece::new(PieceKind::Bishop, Color::Black);
    pub const BLACK_ROOK: Piece = Piece::new(PieceKind::Rook, Color::Black);
    pub const BLACK_QUEEN: Piece = Piece::new(PieceKind::Queen, Color::Black);
    pub const BLACK_KING: Piece = Piece::new(PieceKind::King, Color::Black);

    /// No piece. Notation `-`.
    pub const NONE: Piece = Piece(Self::COUNT as u8);

    /// The twelve real pieces in plane order.
    pub const ALL: [Piece; 12] = [
        Self::WHITE_PAWN,
        Self::WHITE_KNIGHT,
        Self::WHITE_BISHOP,
        Self::WHITE_ROOK,
        Self::WHITE_QUEEN,
        Self::WHITE_KING,
        Self::BLACK_PAWN,
        Self::BLACK_KNIGHT,
        Self::BLACK_BISHOP,
        Self::BLACK_ROOK,
        Self::BLACK_QUEEN,
        Self::BLACK_KING,
    ];

    /// Create a piece from a kind and a color.
    #[inline]
    pub const fn new(kind: PieceKind, color: Color) -> Piece {
        Piece((color.index() * PieceKind::COUNT + kind.index()) as u8)
    }

    /// Return the piece owning plane `index`, `None` past plane 11.
    #[inline]
    pub const fn from_index(index: usize) -> Option<Piece> {
        if index < Self::COUNT {
            Some(Piece(index as u8))
        } else {
            None
        }
    }

    /// Return the plane number (0-11, or 12 for `NONE`).
    #[inline]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    #[inline]
    pub const fn is_none(self) -> bool {
        self.0 as usize >= Self::COUNT
    }

    #[inline]
    pub const fn is_white(self) -> bool {
        (self.0 as usize) < PieceKind::COUNT
    }

    #[inline]
    pub const fn is_black(self) -> bool {
        !self.is_white() && !self.is_none()
    }

    /// Return the color, `None` for [`Piece::NONE`].
    #[inline]
    pub const fn color(self) -> Option<Color> {
        if self.is_none() {
            None
        } else if self.is_white() {
            Some(Color::White)
        } else {
            Some(Color::Black)
        }
    }

    /// Return the kind, `None` for [`Piece::NONE`].
    #[inline]
    pub const fn kind(self) -> Option<PieceKind> {
        if self.is_none() {
            None
        } else {
            Some(PieceKind::ALL[self.0 as usize % PieceKind::COUNT])
        }
    }

    /// Return `true` if this is a piece of `color`.
    #[inline]
    pub const fn is_color(self, color: Color) -> bool {
        match color {
            Color::White => self.is_white(),
            Color::Black => self.is_black(),
        }
    }

    /// Single-character notation: uppercase White, lowercase Black, `-` for none.
    pub fn notation(self) -> char {
        match (self.kind(), self.color()) {
            (Some(kind), Some(Color::White)) => kind.letter().to_ascii_uppercase(),
            (Some(kind), Some(Color::Black)) => kind.letter(),
            _ => '-',
        }
    }

    /// Inverse of [`Piece::notation`] over all 13 values.
    pub fn from_notation(c: char) -> Option<Piece> {
        if c == '-' {
            return Some(Piece::NONE);
        }
        let kind = PieceKind::from_letter(c)?;
        let color = if c.is_ascii_uppercase() {
            Color::White
        } else {
            Color::Black
        };
        Some(Piece::new(kind, color))
    }
}

impl Default for Piece {
    fn default() -> Self {
        Piece::NONE
    }
}

impl fmt::Display for Piece {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.notation())
    }
}

impl fmt::Debug for Piece {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (self.color(), self.kind()) {
            (Some(Color::White), Some(kind)) => write!(f, "W{}", kind.letter().to_ascii_uppercase()),
            (Some(Color::Black), Some(kind)) => write!(f, "B{}", kind.letter().to_ascii_uppercase()),
            _ => write!(f, "NONE"),
        }
    }
}

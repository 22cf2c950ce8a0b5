//! The position: piece planes, side to move, castling, en passant, and move counters.

use std::fmt;

use crate::castle_rights::CastleRights;
use crate::color::Color;
use crate::error::PositionError;
use crate::file::File;
use crate::piece::Piece;
use crate::piece_kind::PieceKind;
use crate::planes::Planes;
use crate::rank::Rank;
use crate::square::Square;

/// Back-rank piece order from the a-file to the h-file.
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

/// Complete position state.
///
/// Positions are values: `clone()` gives a fully independent copy, and
/// equality compares every plane cell and every state field.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct Position {
    /// One plane per piece per square. The only occupancy record.
    planes: Planes,
    /// Which side moves next.
    side_to_move: Color,
    /// Castling rights still held.
    castling: CastleRights,
    /// Square skipped by the last pawn double-step, if any.
    en_passant: Option<Square>,
    /// Halfmove clock, stored and round-tripped only.
    halfmove_clock: u16,
    /// Fullmove number, stored and round-tripped only.
    fullmove_number: u16,
}

impl Position {
    /// An empty board: White to move, all castling rights, counters zero.
    pub fn empty() -> Position {
        Position {
            planes: Planes::new(),
            side_to_move: Color::White,
            castling: CastleRights::ALL,
            en_passant: None,
            halfmove_clock: 0,
            fullmove_number: 0,
        }
    }

    /// The standard starting position.
    pub fn starting_position() -> Position {
        let mut pos = Position::empty();
        for file in File::ALL {
            let kind = BACK_RANK[file.index()];
            pos.place_piece(Square::new(file, Rank::Rank1), Piece::new(kind, Color::White));
            pos.place_piece(Square::new(file, Rank::Rank2), Piece::WHITE_PAWN);
            pos.place_piece(Square::new(file, Rank::Rank7), Piece::BLACK_PAWN);
            pos.place_piece(Square::new(file, Rank::Rank8), Piece::new(kind, Color::Black));
        }
        pos.fullmove_number = 1;
        pos
    }

    /// Return the piece planes.
    #[inline]
    pub fn planes(&self) -> &Planes {
        &self.planes
    }

    /// Return the piece on `sq`, or [`Piece::NONE`].
    #[inline]
    pub fn piece_at(&self, sq: Square) -> Piece {
        self.planes.piece_on(sq)
    }

    /// Put `piece` on `sq`, replacing any occupant. [`Piece::NONE`] empties the square.
    #[inline]
    pub fn place_piece(&mut self, sq: Square, piece: Piece) {
        self.planes.place(sq, piece);
    }

    /// Return `true` if nothing stands on `sq`.
    #[inline]
    pub fn is_empty_square(&self, sq: Square) -> bool {
        self.planes.is_square_empty(sq)
    }

    /// Return `true` if a White piece stands on `sq`.
    #[inline]
    pub fn is_white(&self, sq: Square) -> bool {
        self.piece_at(sq).is_white()
    }

    /// Return `true` if a Black piece stands on `sq`.
    #[inline]
    pub fn is_black(&self, sq: Square) -> bool {
        self.piece_at(sq).is_black()
    }

    /// Return `true` if a piece of `color` stands on `sq`.
    #[inline]
    pub fn is_color(&self, sq: Square, color: Color) -> bool {
        self.piece_at(sq).is_color(color)
    }

    /// Return `true` if a mover of `color` may land on `sq`: it is empty or
    /// holds an enemy piece.
    #[inline]
    pub fn is_available(&self, sq: Square, color: Color) -> bool {
        self.is_empty_square(sq) || self.is_color(sq, color.flip())
    }

    /// Find the king of `color`. `None` if the board has no such king.
    pub fn king_square(&self, color: Color) -> Option<Square> {
        let king = Piece::new(PieceKind::King, color);
        Square::all().find(|&sq| self.planes.get(sq, king))
    }

    /// Iterate over every occupied square holding a piece of `color`.
    pub fn pieces(&self, color: Color) -> impl Iterator<Item = (Square, Piece)> + '_ {
        self.planes
            .squares()
            .map(move |sq| (sq, self.piece_at(sq)))
            .filter(move |(_, piece)| piece.is_color(color))
    }

    /// Return the side to move.
    #[inline]
    pub fn side_to_move(&self) -> Color {
        self.side_to_move
    }

    /// Return the castling rights.
    #[inline]
    pub fn castling(&self) -> CastleRights {
        self.castling
    }

    /// Return the en passant target square, if any.
    #[inline]
    pub fn en_passant(&self) -> Option<Square> {
        self.en_passant
    }

    /// Return the halfmove clock.
    #[inline]
    pub fn halfmove_clock(&self) -> u16 {
        self.halfmove_clock
    }

    /// Return the fullmove number.
    #[inline]
    pub fn fullmove_number(&self) -> u16 {
        self.fullmove_number
    }

    #[inline]
    pub fn set_side_to_move(&mut self, color: Color) {
        self.side_to_move = color;
    }

    #[inline]
    pub fn set_castling(&mut self, rights: CastleRights) {
        self.castling = rights;
    }

    /// Set the en passant target, normally the square a pawn just skipped.
    #[inline]
    pub fn set_en_passant(&mut self, sq: Option<Square>) {
        self.en_passant = sq;
    }

    #[inline]
    pub fn set_halfmove_clock(&mut self, clock: u16) {
        self.halfmove_clock = clock;
    }

    #[inline]
    pub fn set_fullmove_number(&mut self, number: u16) {
        self.fullmove_number = number;
    }

    /// Return a copy with the piece on `source` moved to `dest`.
    ///
    /// Whatever stood on `dest` is captured. A pawn moving diagonally onto the
    /// empty en passant target also removes the pawn it passes. Side to move,
    /// castling rights, en passant, and counters are left as they are; this
    /// is the hypothetical-move primitive used for self-check filtering.
    pub fn with_displacement(&self, source: Square, dest: Square) -> Position {
        let mut next = self.clone();
        let piece = next.piece_at(source);

        let is_en_passant_capture = piece.kind() == Some(PieceKind::Pawn)
            && self.en_passant == Some(dest)
            && source.file() != dest.file()
            && self.is_empty_square(dest);
        if is_en_passant_capture {
            next.planes.clear_square(Square::new(dest.file(), source.rank()));
        }

        next.planes.clear_square(source);
        next.planes.place(dest, piece);
        next
    }

    /// Check that no square carries more than one piece plane.
    pub fn validate(&self) -> Result<(), PositionError> {
        match Square::all()
            .map(|sq| (sq, self.planes.planes_on(sq)))
            .find(|&(_, count)| count > 1)
        {
            Some((sq, count)) => Err(PositionError::OverlappingPieces {
                square: sq.to_string(),
                count,
            }),
            None => Ok(()),
        }
    }

    /// Mutable access to the raw planes, for building test fixtures.
    #[cfg(test)]
    pub(crate) fn planes_mut(&mut self) -> &mut Planes {
        &mut self.planes
    }

    /// Return a pretty-printable wrapper for this position.
    pub fn pretty(&self) -> PrettyPosition<'_> {
        PrettyPosition(self)
    }
}

impl Default for Position {
    fn default() -> Self {
        Self::empty()
    }
}

impl fmt::Debug for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Position(\"{}\")", self)
    }
}

/// Wrapper for printing a position as an 8x8 grid, rank 8 on top.
pub struct PrettyPosition<'a>(&'a Position);

impl fmt::Display for PrettyPosition<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let pos = self.0;
        for rank in Rank::ALL.into_iter().rev() {
            write!(f, "{rank}  ")?;
            let row: Vec<String> = File::ALL
                .into_iter()
                .map(|file| match pos.piece_at(Square::new(file, rank)) {
                    p if p.is_none() => ".".to_string(),
                    p => p.to_string(),
                })
                .collect();
            writeln!(f, "{}", row.join(" "))?;
        }
        write!(f, "   a b c d e f g h")
    }
}

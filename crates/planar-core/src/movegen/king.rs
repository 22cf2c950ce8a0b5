//! King destinations: the eight neighbouring squares.

use crate::color::Color;
use crate::piece::Piece;
use crate::piece_kind::PieceKind;
use crate::planes::Planes;
use crate::position::Position;
use crate::square::Square;

/// Destinations of a `color` king on `source`, on the king's plane.
///
/// Castling is not generated here; only single steps.
pub(crate) fn king_destinations(pos: &Position, source: Square, color: Color) -> Planes {
    let king = Piece::new(PieceKind::King, color);
    let mut planes = Planes::new();
    for df in -1..=1 {
        for dr in -1..=1 {
            if df == 0 && dr == 0 {
                continue;
            }
            if let Some(target) = source.offset(df, dr)
                && pos.is_available(target, color)
            {
                planes.set(target, king, true);
            }
        }
    }
    planes
}

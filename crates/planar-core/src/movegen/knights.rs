//! Knight destinations.

use crate::color::Color;
use crate::piece::Piece;
use crate::piece_kind::PieceKind;
use crate::planes::Planes;
use crate::position::Position;
use crate::square::Square;

/// The eight (file, rank) jumps.
const KNIGHT_JUMPS: [(i8, i8); 8] = [
    (1, 2),
    (2, 1),
    (2, -1),
    (1, -2),
    (-1, -2),
    (-2, -1),
    (-2, 1),
    (-1, 2),
];

/// Destinations of a `color` knight on `source`, on the knight's plane.
pub(crate) fn knight_destinations(pos: &Position, source: Square, color: Color) -> Planes {
    let knight = Piece::new(PieceKind::Knight, color);
    let mut planes = Planes::new();
    for target in KNIGHT_JUMPS
        .iter()
        .filter_map(|&(df, dr)| source.offset(df, dr))
        .filter(|&target| pos.is_available(target, color))
    {
        planes.set(target, knight, true);
    }
    planes
}

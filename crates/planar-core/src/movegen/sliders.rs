//! Sliding piece (bishop, rook, queen) destinations.

use std::iter::successors;

use crate::color::Color;
use crate::piece::Piece;
use crate::piece_kind::PieceKind;
use crate::planes::Planes;
use crate::position::Position;
use crate::square::Square;

/// The four axis rays.
const ROOK_RAYS: [(i8, i8); 4] = [(1, 0), (-1, 0), (0, 1), (0, -1)];

/// The four diagonal rays. Along each, either `rank - file` or
/// `rank + file` stays constant.
const BISHOP_RAYS: [(i8, i8); 4] = [(1, 1), (1, -1), (-1, 1), (-1, -1)];

pub(crate) fn rook_destinations(pos: &Position, source: Square, color: Color) -> Planes {
    slide(pos, source, color, Piece::new(PieceKind::Rook, color), &ROOK_RAYS)
}

pub(crate) fn bishop_destinations(pos: &Position, source: Square, color: Color) -> Planes {
    slide(pos, source, color, Piece::new(PieceKind::Bishop, color), &BISHOP_RAYS)
}

/// A queen is the union of an independent rook pass and bishop pass.
pub(crate) fn queen_destinations(pos: &Position, source: Square, color: Color) -> Planes {
    let queen = Piece::new(PieceKind::Queen, color);
    let mut planes = slide(pos, source, color, queen, &ROOK_RAYS);
    planes |= &slide(pos, source, color, queen, &BISHOP_RAYS);
    planes
}

/// Walk each ray outward from `source`. Empty squares are destinations and
/// the walk continues; an enemy piece is a destination and ends the ray; a
/// friendly piece ends the ray without being one.
fn slide(pos: &Position, source: Square, color: Color, piece: Piece, rays: &[(i8, i8)]) -> Planes {
    let mut planes = Planes::new();
    for &(df, dr) in rays {
        for target in successors(source.offset(df, dr), |sq| sq.offset(df, dr)) {
            if pos.is_empty_square(target) {
                planes.set(target, piece, true);
                continue;
            }
            if pos.is_color(target, color.flip()) {
                planes.set(target, piece, true);
            }
            break;
        }
    }
    planes
}

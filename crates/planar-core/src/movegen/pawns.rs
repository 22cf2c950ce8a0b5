//! Pawn destinations: pushes, double-steps, captures, and en passant.

use crate::color::Color;
use crate::piece::Piece;
use crate::piece_kind::PieceKind;
use crate::planes::Planes;
use crate::position::Position;
use crate::square::Square;

/// Destinations of a `color` pawn on `source`, on the pawn's plane.
pub(crate) fn pawn_destinations(pos: &Position, source: Square, color: Color) -> Planes {
    let pawn = Piece::new(PieceKind::Pawn, color);
    let forward = color.forward();
    let mut planes = Planes::new();

    // Pushes never capture: both squares must be empty, the second only
    // from the home rank.
    if let Some(one) = source.offset(0, forward)
        && pos.is_empty_square(one)
    {
        planes.set(one, pawn, true);
        if source.rank() == color.pawn_home_rank()
            && let Some(two) = one.offset(0, forward)
            && pos.is_empty_square(two)
        {
            planes.set(two, pawn, true);
        }
    }

    for side in [-1, 1] {
        let Some(target) = source.offset(side, forward) else {
            continue;
        };
        if pos.is_color(target, color.flip()) || is_en_passant_target(pos, source, target, color) {
            planes.set(target, pawn, true);
        }
    }

    planes
}

/// A diagonal step onto the en passant target is a capture only from the
/// en passant rank, with the enemy pawn that just double-stepped beside us.
fn is_en_passant_target(pos: &Position, source: Square, target: Square, color: Color) -> bool {
    pos.en_passant() == Some(target)
        && source.rank() == color.en_passant_rank()
        && pos.piece_at(Square::new(target.file(), source.rank()))
            == Piece::new(PieceKind::Pawn, color.flip())
}

//! Destination generation for each piece family, and self-check filtering.
//!
//! Every generator returns its destinations as [`Planes`] with only the
//! moving piece's plane set. The generators themselves know nothing about
//! check; [`movement_matrix`] applies the [`MoveMode`] afterwards.

mod king;
mod knights;
mod legal;
mod pawns;
mod sliders;

use crate::piece::Piece;
use crate::piece_kind::PieceKind;
use crate::planes::Planes;
use crate::position::Position;
use crate::square::Square;

use self::king::king_destinations;
use self::knights::knight_destinations;
use self::pawns::pawn_destinations;
use self::sliders::{bishop_destinations, queen_destinations, rook_destinations};

pub use self::legal::{legal_moves, movement_matrix};

/// Which destination contract a generator call follows.
///
/// Check detection asks for [`MoveMode::Attack`] so that it never re-enters
/// self-check filtering; everything that wants playable moves asks for
/// [`MoveMode::Legal`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MoveMode {
    /// Raw reachable squares, including ones that would leave the mover's
    /// own king in check.
    Attack,
    /// Reachable squares that do not leave the mover's own king in check.
    Legal,
}

/// Dispatch to the generator for `piece`'s family. [`Piece::NONE`] reaches nothing.
pub(crate) fn raw_destinations(pos: &Position, piece: Piece, source: Square) -> Planes {
    let (Some(kind), Some(color)) = (piece.kind(), piece.color()) else {
        return Planes::new();
    };
    match kind {
        PieceKind::Pawn => pawn_destinations(pos, source, color),
        PieceKind::Knight => knight_destinations(pos, source, color),
        PieceKind::Bishop => bishop_destinations(pos, source, color),
        PieceKind::Rook => rook_destinations(pos, source, color),
        PieceKind::Queen => queen_destinations(pos, source, color),
        PieceKind::King => king_destinations(pos, source, color),
    }
}

#[cfg(test)]
mod tests {
    use super::raw_destinations;
    use crate::piece::Piece;
    use crate::position::Position;
    use crate::square::Square;

    fn sq(file: u8, rank: u8) -> Square {
        Square::from_coords(file, rank).unwrap()
    }

    #[test]
    fn none_reaches_nothing() {
        let pos = Position::starting_position();
        assert!(raw_destinations(&pos, Piece::NONE, sq(4, 3)).is_empty());
    }

    #[test]
    fn dispatch_uses_the_pieces_own_plane() {
        let mut pos = Position::empty();
        for piece in Piece::ALL {
            let source = sq(3, 3);
            pos.place_piece(source, piece);
            let planes = raw_destinations(&pos, piece, source);
            assert!(!planes.is_empty(), "{piece:?} should reach something");
            for target in planes.squares() {
                assert_eq!(planes.planes_on(target), 1);
                assert!(planes.get(target, piece), "{piece:?} wrote a foreign plane");
            }
        }
    }
}

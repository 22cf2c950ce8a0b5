//! Self-check filtering on top of the raw generators.

use tracing::trace;

use crate::chess_move::Move;
use crate::color::Color;
use crate::piece::Piece;
use crate::planes::Planes;
use crate::position::Position;
use crate::square::Square;

use super::{MoveMode, raw_destinations};

/// Destinations of `piece` standing on `source`.
///
/// In [`MoveMode::Attack`] this is the generator output unchanged. In
/// [`MoveMode::Legal`] each destination is tried on a copy of the position
/// and dropped if the mover's own king is then in check. The check test on
/// the copy only ever runs in attack mode, so filtering never recurses.
///
/// `piece` is normally the occupant of `source`.
pub fn movement_matrix(pos: &Position, piece: Piece, source: Square, mode: MoveMode) -> Planes {
    let raw = raw_destinations(pos, piece, source);
    match (mode, piece.color()) {
        (MoveMode::Legal, Some(color)) => without_self_check(pos, piece, color, source, raw),
        _ => raw,
    }
}

fn without_self_check(pos: &Position, piece: Piece, color: Color, source: Square, raw: Planes) -> Planes {
    let mut legal = Planes::new();
    for dest in raw.squares() {
        if pos.with_displacement(source, dest).is_check(color) {
            trace!(%source, %dest, ?piece, "destination leaves own king in check");
            continue;
        }
        legal.set(dest, piece, true);
    }
    legal
}

/// Every legal move for the pieces of `color`, ordered by source then destination square.
pub fn legal_moves(pos: &Position, color: Color) -> Vec<Move> {
    pos.pieces(color)
        .flat_map(|(source, piece)| {
            movement_matrix(pos, piece, source, MoveMode::Legal)
                .squares()
                .map(move |dest| Move::new(source, dest))
                .collect::<Vec<_>>()
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::{legal_moves, movement_matrix};
    use crate::color::Color;
    use crate::movegen::MoveMode;
    use crate::piece::Piece;
    use crate::position::Position;
    use crate::square::Square;

    fn sq(file: u8, rank: u8) -> Square {
        Square::from_coords(file, rank).unwrap()
    }

    #[test]
    fn attack_mode_keeps_self_check() {
        let mut pos = Position::empty();
        pos.place_piece(sq(4, 0), Piece::WHITE_KING);
        pos.place_piece(sq(4, 1), Piece::WHITE_ROOK);
        pos.place_piece(sq(4, 4), Piece::BLACK_QUEEN);

        let attack = movement_matrix(&pos, Piece::WHITE_ROOK, sq(4, 1), MoveMode::Attack);
        assert!(attack.contains(sq(0, 1)));

        let legal = movement_matrix(&pos, Piece::WHITE_ROOK, sq(4, 1), MoveMode::Legal);
        assert!(!legal.contains(sq(0, 1)));
        assert!(legal.contains(sq(4, 4)));
        assert!(legal.contains(sq(4, 2)));
        assert!(legal.get(sq(4, 3), Piece::WHITE_ROOK));
        assert_eq!(legal.count(), 3);
    }

    #[test]
    fn king_cannot_step_into_attack() {
        let mut pos = Position::empty();
        pos.place_piece(sq(4, 0), Piece::WHITE_KING);
        pos.place_piece(sq(3, 7), Piece::BLACK_ROOK);
        let legal = movement_matrix(&pos, Piece::WHITE_KING, sq(4, 0), MoveMode::Legal);
        assert!(!legal.contains(sq(3, 0)));
        assert!(!legal.contains(sq(3, 1)));
        assert!(legal.contains(sq(5, 1)));
        assert_eq!(legal.count(), 3);
    }

    #[test]
    fn en_passant_exposing_rank_is_filtered() {
        // King a5, pawns b5 (white) and c5 (black, just double-stepped), rook h5.
        let pos: Position = "4k3/8/8/KPp4r/8/8/8/8 w - c6 0 1".parse().unwrap();
        let source = Square::from_algebraic("b5").unwrap();
        let attack = movement_matrix(&pos, Piece::WHITE_PAWN, source, MoveMode::Attack);
        assert!(attack.contains(Square::from_algebraic("c6").unwrap()));

        let legal = movement_matrix(&pos, Piece::WHITE_PAWN, source, MoveMode::Legal);
        assert!(!legal.contains(Square::from_algebraic("c6").unwrap()));
        assert!(legal.contains(Square::from_algebraic("b6").unwrap()));
    }

    #[test]
    fn no_king_means_nothing_is_filtered() {
        let mut pos = Position::empty();
        pos.place_piece(sq(0, 0), Piece::WHITE_ROOK);
        pos.place_piece(sq(7, 7), Piece::BLACK_QUEEN);
        let attack = movement_matrix(&pos, Piece::WHITE_ROOK, sq(0, 0), MoveMode::Attack);
        let legal = movement_matrix(&pos, Piece::WHITE_ROOK, sq(0, 0), MoveMode::Legal);
        assert_eq!(attack, legal);
    }

    #[test]
    fn starting_position_has_twenty_moves() {
        let pos = Position::starting_position();
        assert_eq!(legal_moves(&pos, Color::White).len(), 20);
        assert_eq!(legal_moves(&pos, Color::Black).len(), 20);
    }

    #[test]
    fn legal_moves_are_sorted_by_source() {
        let pos = Position::starting_position();
        let moves = legal_moves(&pos, Color::White);
        let first = moves.first().unwrap();
        assert_eq!(first.to_string(), "b1a3");
        assert!(moves.windows(2).all(|w| w[0].source() <= w[1].source()));
    }
}

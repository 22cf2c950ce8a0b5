//! Check, checkmate, and stalemate queries on a [`Position`].

use std::fmt;

use crate::color::Color;
use crate::movegen::{MoveMode, movement_matrix};
use crate::planes::Planes;
use crate::position::Position;
use crate::square::Square;

/// Game state from the point of view of the side to move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GameStatus {
    InPlay,
    Check,
    Checkmate,
    Stalemate,
}

impl GameStatus {
    /// Whether the game is over.
    pub fn is_terminal(self) -> bool {
        matches!(self, GameStatus::Checkmate | GameStatus::Stalemate)
    }
}

impl fmt::Display for GameStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            GameStatus::InPlay => "in play",
            GameStatus::Check => "check",
            GameStatus::Checkmate => "checkmate",
            GameStatus::Stalemate => "stalemate",
        };
        f.write_str(s)
    }
}

impl Position {
    /// Whether `color`'s king is attacked by any enemy piece.
    ///
    /// A side without a king is never in check. Enemy attacks are taken in
    /// [`MoveMode::Attack`], so pinned enemy pieces still give check.
    pub fn is_check(&self, color: Color) -> bool {
        let Some(king) = self.king_square(color) else {
            return false;
        };
        let mask = Planes::square_mask(king);
        self.pieces(color.flip()).any(|(source, piece)| {
            let attacks = movement_matrix(self, piece, source, MoveMode::Attack);
            (&attacks & &mask).contains(king)
        })
    }

    /// In check with no legal move.
    pub fn is_checkmate(&self, color: Color) -> bool {
        self.is_check(color) && !self.has_legal_move(color)
    }

    /// Not in check, yet no legal move.
    pub fn is_stalemate(&self, color: Color) -> bool {
        !self.is_check(color) && !self.has_legal_move(color)
    }

    /// Destinations of whatever stands on `source`. Empty if nothing does.
    pub fn destinations(&self, source: Square, mode: MoveMode) -> Planes {
        movement_matrix(self, self.piece_at(source), source, mode)
    }

    /// Whether the side to move may play `source` to `dest`.
    pub fn is_move_valid(&self, source: Square, dest: Square) -> bool {
        if !self.is_color(source, self.side_to_move()) {
            return false;
        }
        self.destinations(source, MoveMode::Legal).contains(dest)
    }

    /// Status for the side to move.
    pub fn status(&self) -> GameStatus {
        let color = self.side_to_move();
        match (self.is_check(color), self.has_legal_move(color)) {
            (true, true) => GameStatus::Check,
            (true, false) => GameStatus::Checkmate,
            (false, true) => GameStatus::InPlay,
            (false, false) => GameStatus::Stalemate,
        }
    }

    fn has_legal_move(&self, color: Color) -> bool {
        self.pieces(color)
            .any(|(source, piece)| !movement_matrix(self, piece, source, MoveMode::Legal).is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::GameStatus;
    use crate::color::Color;
    use crate::movegen::MoveMode;
    use crate::piece::Piece;
    use crate::position::Position;
    use crate::square::Square;

    fn sq(file: u8, rank: u8) -> Square {
        Square::from_coords(file, rank).unwrap()
    }

    #[test]
    fn no_king_is_never_in_check() {
        let mut pos = Position::empty();
        pos.place_piece(sq(0, 0), Piece::BLACK_QUEEN);
        assert!(!pos.is_check(Color::White));
        assert!(!pos.is_checkmate(Color::White));
    }

    #[test]
    fn pinned_attacker_still_gives_check() {
        let mut pos = Position::empty();
        pos.place_piece(sq(4, 0), Piece::WHITE_KING);
        pos.place_piece(sq(3, 1), Piece::BLACK_PAWN);
        pos.place_piece(sq(7, 5), Piece::BLACK_KING);
        // Bishop on c1 pins the d2 pawn against the king on h6.
        pos.place_piece(sq(2, 0), Piece::WHITE_BISHOP);
        let legal = pos.destinations(sq(3, 1), MoveMode::Legal);
        assert!(!legal.contains(sq(3, 0)));
        assert!(!legal.contains(sq(4, 0)));
        assert!(pos.is_check(Color::White));
    }

    #[test]
    fn knight_check_cannot_be_blocked() {
        let mut pos = Position::empty();
        pos.place_piece(sq(4, 0), Piece::WHITE_KING);
        pos.place_piece(sq(5, 2), Piece::BLACK_KNIGHT);
        pos.place_piece(sq(4, 1), Piece::WHITE_PAWN);
        assert!(pos.is_check(Color::White));
    }

    #[test]
    fn back_rank_mate() {
        let pos: Position = "3R2k1/5ppp/8/8/8/8/8/6K1 b - - 0 1".parse().unwrap();
        assert!(pos.is_check(Color::Black));
        assert!(pos.is_checkmate(Color::Black));
        assert_eq!(pos.status(), GameStatus::Checkmate);
    }

    #[test]
    fn check_with_an_escape() {
        let pos: Position = "3R2k1/5pp1/8/8/8/8/8/6K1 b - - 0 1".parse().unwrap();
        assert!(pos.is_check(Color::Black));
        assert!(!pos.is_checkmate(Color::Black));
        assert_eq!(pos.status(), GameStatus::Check);
    }

    #[test]
    fn stalemate_is_not_checkmate() {
        let mut pos = Position::empty();
        pos.place_piece(sq(0, 0), Piece::WHITE_KING);
        pos.place_piece(sq(1, 2), Piece::BLACK_QUEEN);
        pos.place_piece(sq(7, 7), Piece::BLACK_KING);
        assert!(!pos.is_check(Color::White));
        assert!(!pos.is_checkmate(Color::White));
        assert!(pos.is_stalemate(Color::White));
        assert_eq!(pos.status(), GameStatus::Stalemate);
        assert!(pos.status().is_terminal());
    }

    #[test]
    fn starting_position_is_in_play() {
        let pos = Position::starting_position();
        assert_eq!(pos.status(), GameStatus::InPlay);
        assert!(!pos.is_stalemate(Color::White));
        assert!(!pos.is_stalemate(Color::Black));
    }

    #[test]
    fn move_validity_respects_side_to_move() {
        let mut pos = Position::starting_position();
        let e2 = sq(4, 1);
        let e4 = sq(4, 3);
        let e7 = sq(4, 6);
        let e5 = sq(4, 4);
        assert!(pos.is_move_valid(e2, e4));
        assert!(!pos.is_move_valid(e7, e5));
        assert!(!pos.is_move_valid(e2, e5));
        assert!(!pos.is_move_valid(sq(4, 3), sq(4, 4)));

        pos.set_side_to_move(Color::Black);
        assert!(pos.is_move_valid(e7, e5));
        assert!(!pos.is_move_valid(e2, e4));
    }

    #[test]
    fn destinations_of_empty_square() {
        let pos = Position::starting_position();
        assert!(pos.destinations(sq(4, 4), MoveMode::Legal).is_empty());
        assert!(pos.destinations(sq(4, 4), MoveMode::Attack).is_empty());
    }

    #[test]
    fn status_display() {
        assert_eq!(GameStatus::InPlay.to_string(), "in play");
        assert_eq!(GameStatus::Checkmate.to_string(), "checkmate");
    }
}

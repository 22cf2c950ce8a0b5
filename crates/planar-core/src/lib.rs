//! Core chess types: plane-based position, FEN codec, move generation, and game rules.

mod castle_rights;
mod check;
mod chess_move;
mod color;
mod error;
mod fen;
mod file;
mod history;
mod movegen;
mod piece;
mod piece_kind;
mod planes;
mod position;
mod rank;
mod square;

pub use castle_rights::{CastleRights, CastleSide};
pub use check::GameStatus;
pub use chess_move::Move;
pub use color::Color;
pub use error::{FenError, HistoryError, PositionError};
pub use fen::STARTING_FEN;
pub use file::File;
pub use history::GameHistory;
pub use movegen::{MoveMode, legal_moves, movement_matrix};
pub use piece::Piece;
pub use piece_kind::PieceKind;
pub use planes::Planes;
pub use position::{Position, PrettyPosition};
pub use rank::Rank;
pub use square::Square;

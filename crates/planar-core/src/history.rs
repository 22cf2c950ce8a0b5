//! LIFO stack of position snapshots.

use tracing::debug;

use crate::error::HistoryError;
use crate::position::Position;

/// The positions a game has passed through, most recent last.
///
/// Positions are stored as given; the stack never derives one position
/// from another.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameHistory {
    positions: Vec<Position>,
}

impl GameHistory {
    /// A history holding only the starting position.
    pub fn new() -> GameHistory {
        GameHistory {
            positions: vec![Position::starting_position()],
        }
    }

    /// A history with no positions at all.
    pub fn empty() -> GameHistory {
        GameHistory {
            positions: Vec::new(),
        }
    }

    pub fn push(&mut self, position: Position) {
        debug!(fen = %position, depth = self.positions.len() + 1, "push position");
        self.positions.push(position);
    }

    /// Remove and return the most recent position.
    pub fn pop(&mut self) -> Result<Position, HistoryError> {
        let position = self.positions.pop().ok_or(HistoryError::Empty)?;
        debug!(fen = %position, depth = self.positions.len(), "pop position");
        Ok(position)
    }

    /// The most recent position, if any.
    pub fn current(&self) -> Option<&Position> {
        self.positions.last()
    }

    pub fn len(&self) -> usize {
        self.positions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }
}

impl Default for GameHistory {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::GameHistory;
    use crate::color::Color;
    use crate::error::HistoryError;
    use crate::position::Position;

    #[test]
    fn new_history_starts_from_the_opening() {
        let mut history = GameHistory::new();
        assert_eq!(history.len(), 1);
        assert_eq!(history.current(), Some(&Position::starting_position()));
        assert_eq!(history.pop(), Ok(Position::starting_position()));
        assert!(history.is_empty());
    }

    #[test]
    fn push_then_pop_returns_the_same_position() {
        let mut history = GameHistory::empty();
        let pos = Position::starting_position();
        history.push(pos.clone());
        assert_eq!(history.pop(), Ok(pos));
    }

    #[test]
    fn pops_in_reverse_order() {
        let mut history = GameHistory::new();
        let mut second = Position::starting_position();
        second.set_side_to_move(Color::Black);
        history.push(second.clone());

        assert_eq!(history.current(), Some(&second));
        assert_eq!(history.pop(), Ok(second));
        assert_eq!(history.pop(), Ok(Position::starting_position()));
    }

    #[test]
    fn pop_on_empty_is_an_error() {
        let mut history = GameHistory::empty();
        assert_eq!(history.pop(), Err(HistoryError::Empty));
        assert!(history.current().is_none());
    }
}

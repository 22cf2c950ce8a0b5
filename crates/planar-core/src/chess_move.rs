//! A move as a (source, destination) pair in coordinate notation.

use std::fmt;

use crate::square::Square;

/// A piece moving from `source` to `dest`.
///
/// Displays and parses as coordinate notation, e.g. `e2e4`.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Move {
    source: Square,
    dest: Square,
}

impl Move {
    #[inline]
    pub const fn new(source: Square, dest: Square) -> Move {
        Move { source, dest }
    }

    #[inline]
    pub const fn source(self) -> Square {
        self.source
    }

    #[inline]
    pub const fn dest(self) -> Square {
        self.dest
    }

    /// Parse coordinate notation (`e2e4`). Returns `None` if malformed.
    pub fn from_coordinate(s: &str) -> Option<Move> {
        if !s.is_ascii() || s.len() != 4 {
            return None;
        }
        let source = Square::from_algebraic(&s[0..2])?;
        let dest = Square::from_algebraic(&s[2..4])?;
        Some(Move::new(source, dest))
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.source, self.dest)
    }
}

impl fmt::Debug for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Move({self})")
    }
}

//! Boolean piece planes: one flag per piece per square.
//!
//! The same shape serves two purposes. A [`Position`](crate::Position) keeps
//! its occupancy in it, and the move generators return their destination
//! sets in it, with only the moving piece's plane used.

use std::fmt;
use std::ops::{BitAnd, BitAndAssign, BitOr, BitOrAssign, Not};

use crate::piece::Piece;
use crate::square::Square;

type Cells = [[[bool; Piece::COUNT]; 8]; 8];

/// A `[file][rank][plane]` grid of booleans.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct Planes {
    cells: Cells,
}

impl Planes {
    /// Every cell false.
    pub const EMPTY: Planes = Planes {
        cells: [[[false; Piece::COUNT]; 8]; 8],
    };

    /// Every cell true.
    pub const FULL: Planes = Planes {
        cells: [[[true; Piece::COUNT]; 8]; 8],
    };

    /// Create an all-false grid.
    #[inline]
    pub const fn new() -> Planes {
        Self::EMPTY
    }

    /// Every plane true on `sq`, false elsewhere.
    pub fn square_mask(sq: Square) -> Planes {
        let mut mask = Self::EMPTY;
        *mask.square_cells_mut(sq) = [true; Piece::COUNT];
        mask
    }

    #[inline]
    fn square_cells(&self, sq: Square) -> &[bool; Piece::COUNT] {
        &self.cells[sq.file().index()][sq.rank().index()]
    }

    #[inline]
    fn square_cells_mut(&mut self, sq: Square) -> &mut [bool; Piece::COUNT] {
        &mut self.cells[sq.file().index()][sq.rank().index()]
    }

    /// Return the cell for `piece` on `sq`. Always `false` for [`Piece::NONE`].
    #[inline]
    pub fn get(&self, sq: Square, piece: Piece) -> bool {
        !piece.is_none() && self.square_cells(sq)[piece.index()]
    }

    /// Write a single cell. Writes for [`Piece::NONE`] are ignored.
    ///
    /// This does not clear the other planes on `sq`; use [`Planes::place`]
    /// to keep the one-piece-per-square invariant.
    #[inline]
    pub fn set(&mut self, sq: Square, piece: Piece, value: bool) {
        if !piece.is_none() {
            self.square_cells_mut(sq)[piece.index()] = value;
        }
    }

    /// Put `piece` on `sq`, replacing whatever was there. `NONE` empties it.
    pub fn place(&mut self, sq: Square, piece: Piece) {
        self.clear_square(sq);
        self.set(sq, piece, true);
    }

    /// Clear every plane on `sq`.
    #[inline]
    pub fn clear_square(&mut self, sq: Square) {
        *self.square_cells_mut(sq) = [false; Piece::COUNT];
    }

    /// Return `true` if no plane is set on `sq`.
    #[inline]
    pub fn is_square_empty(&self, sq: Square) -> bool {
        !self.contains(sq)
    }

    /// Return `true` if any plane is set on `sq`.
    #[inline]
    pub fn contains(&self, sq: Square) -> bool {
        self.square_cells(sq).iter().any(|&cell| cell)
    }

    /// Return the piece of the lowest set plane on `sq`, or [`Piece::NONE`].
    pub fn piece_on(&self, sq: Square) -> Piece {
        self.square_cells(sq)
            .iter()
            .position(|&cell| cell)
            .and_then(Piece::from_index)
            .unwrap_or(Piece::NONE)
    }

    /// Number of planes set on `sq`.
    #[inline]
    pub fn planes_on(&self, sq: Square) -> usize {
        self.square_cells(sq).iter().filter(|&&cell| cell).count()
    }

    /// Return `true` if no cell is set anywhere.
    pub fn is_empty(&self) -> bool {
        Square::all().all(|sq| self.is_square_empty(sq))
    }

    /// Number of squares with at least one plane set.
    pub fn count(&self) -> usize {
        self.squares().count()
    }

    /// Iterate over squares with at least one plane set, in index order.
    pub fn squares(&self) -> impl Iterator<Item = Square> + '_ {
        Square::all().filter(move |&sq| self.contains(sq))
    }

    fn zip_with(&self, other: &Planes, op: impl Fn(bool, bool) -> bool) -> Planes {
        let mut out = Self::EMPTY;
        for (out_file, (a_file, b_file)) in out
            .cells
            .iter_mut()
            .zip(self.cells.iter().zip(other.cells.iter()))
        {
            for (out_rank, (a_rank, b_rank)) in out_file
                .iter_mut()
                .zip(a_file.iter().zip(b_file.iter()))
            {
                for (cell, (&a, &b)) in out_rank.iter_mut().zip(a_rank.iter().zip(b_rank.iter())) {
                    *cell = op(a, b);
                }
            }
        }
        out
    }
}

impl Default for Planes {
    fn default() -> Self {
        Self::EMPTY
    }
}

// --- Set algebra ---

impl BitAnd<&Planes> for &Planes {
    type Output = Planes;
    fn bitand(self, rhs: &Planes) -> Planes {
        self.zip_with(rhs, |a, b| a && b)
    }
}

impl BitAnd for Planes {
    type Output = Planes;
    fn bitand(self, rhs: Planes) -> Planes {
        &self & &rhs
    }
}

impl BitAndAssign<&Planes> for Planes {
    fn bitand_assign(&mut self, rhs: &Planes) {
        *self = &*self & rhs;
    }
}

impl BitOr<&Planes> for &Planes {
    type Output = Planes;
    fn bitor(self, rhs: &Planes) -> Planes {
        self.zip_with(rhs, |a, b| a || b)
    }
}

impl BitOr for Planes {
    type Output = Planes;
    fn bitor(self, rhs: Planes) -> Planes {
        &self | &rhs
    }
}

impl BitOrAssign<&Planes> for Planes {
    fn bitor_assign(&mut self, rhs: &Planes) {
        *self = &*self | rhs;
    }
}

impl Not for &Planes {
    type Output = Planes;
    fn not(self) -> Planes {
        self.zip_with(self, |a, _| !a)
    }
}

impl Not for Planes {
    type Output = Planes;
    fn not(self) -> Planes {
        !&self
    }
}

// --- Debug (8x8 grid, one character per square) ---

impl fmt::Debug for Planes {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f)?;
        for rank in (0u8..8).rev() {
            write!(f, "  {} ", rank + 1)?;
            for file in 0u8..8 {
                let Some(sq) = Square::from_coords(file, rank) else {
                    continue;
                };
                let c = match self.planes_on(sq) {
                    0 => '.',
                    1 => self.piece_on(sq).notation(),
                    _ => '*',
                };
                write!(f, "{c} ")?;
            }
            writeln!(f)?;
        }
        write!(f, "    a b c d e f g h")
    }
}

//! Board files, the columns a through h.

use std::fmt;

/// A file (column) on the board. `FileA` is index 0.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u8)]
pub enum File {
    FileA = 0,
    FileB = 1,
    FileC = 2,
    FileD = 3,
    FileE = 4,
    FileF = 5,
    FileG = 6,
    FileH = 7,
}

impl File {
    /// Total number of files.
    pub const COUNT: usize = 8;

    /// All files, a to h.
    pub const ALL: [File; 8] = [
        File::FileA,
        File::FileB,
        File::FileC,
        File::FileD,
        File::FileE,
        File::FileF,
        File::FileG,
        File::FileH,
    ];

    /// Return the index (0..7).
    #[inline]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Create a file from a zero-based index, `None` past the h-file.
    #[inline]
    pub const fn from_index(index: u8) -> Option<File> {
        if index < 8 {
            Some(File::ALL[index as usize])
        } else {
            None
        }
    }

    /// Step `delta` files sideways, `None` if that leaves the board.
    #[inline]
    pub const fn offset(self, delta: i8) -> Option<File> {
        match (self as i8).checked_add(delta) {
            Some(target) if target >= 0 => File::from_index(target as u8),
            _ => None,
        }
    }

    /// Parse an algebraic file letter (`a`..`h`).
    #[inline]
    pub const fn from_char(c: char) -> Option<File> {
        match c {
            'a'..='h' => File::from_index(c as u8 - b'a'),
            _ => None,
        }
    }

    /// Return the algebraic file letter.
    #[inline]
    pub const fn to_char(self) -> char {
        (b'a' + self as u8) as char
    }
}

impl fmt::Display for File {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_char())
    }
}

#[cfg(test)]
mod tests {
    use super::File;

    #[test]
    fn from_index_roundtrip() {
        for file in File::ALL {
            assert_eq!(File::from_index(file.index() as u8), Some(file));
        }
        assert_eq!(File::from_index(8), None);
    }

    #[test]
    fn offset_stays_on_board() {
        assert_eq!(File::FileA.offset(1), Some(File::FileB));
        assert_eq!(File::FileA.offset(-1), None);
        assert_eq!(File::FileH.offset(1), None);
        assert_eq!(File::FileH.offset(-7), Some(File::FileA));
    }

    #[test]
    fn offset_extreme_deltas() {
        assert_eq!(File::FileH.offset(i8::MAX), None);
        assert_eq!(File::FileA.offset(i8::MIN), None);
    }

    #[test]
    fn letters() {
        assert_eq!(File::from_char('e'), Some(File::FileE));
        assert_eq!(File::from_char('i'), None);
        assert_eq!(File::from_char('E'), None);
        assert_eq!(format!("{}", File::FileH), "h");
    }
}

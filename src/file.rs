use crate::error::Error;
use std::str::FromStr;

/// Describe a file (column) on a chess board
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Debug, Hash)]
pub enum File {
    A,
    B,
    C,
    D,
    E,
    F,
    G,
    H,
}

/// How many files are there?
pub const NUM_FILES: usize = 8;

/// Enumerate all files
pub const ALL_FILES: [File; NUM_FILES] = [
    File::A,
    File::B,
    File::C,
    File::D,
    File::E,
    File::F,
    File::G,
    File::H,
];

impl File {
    /// Convert a `usize` into a `File` (the inverse of to_index).  If i > 7, wrap around.
    #[inline]
    pub fn from_index(i: usize) -> File {
        ALL_FILES[i & 7]
    }

    /// Convert this `File` into a `usize` from 0 to 7 inclusive.  This is also the board column.
    #[inline]
    pub fn to_index(&self) -> usize {
        *self as usize
    }
}

impl FromStr for File {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.chars().next() {
            Some('a') => Ok(File::A),
            Some('b') => Ok(File::B),
            Some('c') => Ok(File::C),
            Some('d') => Ok(File::D),
            Some('e') => Ok(File::E),
            Some('f') => Ok(File::F),
            Some('g') => Ok(File::G),
            Some('h') => Ok(File::H),
            _ => Err(Error::InvalidFile),
        }
    }
}

#[test]
fn parse_files() {
    assert_eq!("e".parse::<File>().unwrap(), File::E);
    assert_eq!(File::from_index(9), File::B);
    assert!("i".parse::<File>().is_err());
}

use crate::error::Error;
use std::str::FromStr;

/// Describe a rank on a chess board.  `Rank::First` is White's back rank, which sits on the
/// bottom row of the board.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Debug, Hash)]
pub enum Rank {
    First,
    Second,
    Third,
    Fourth,
    Fifth,
    Sixth,
    Seventh,
    Eighth,
}

/// How many ranks are there?
pub const NUM_RANKS: usize = 8;

/// Enumerate all ranks
pub const ALL_RANKS: [Rank; NUM_RANKS] = [
    Rank::First,
    Rank::Second,
    Rank::Third,
    Rank::Fourth,
    Rank::Fifth,
    Rank::Sixth,
    Rank::Seventh,
    Rank::Eighth,
];

impl Rank {
    /// Convert a `usize` into a `Rank` (the inverse of to_index).  If the number is > 7, wrap
    /// around.
    #[inline]
    pub fn from_index(i: usize) -> Rank {
        ALL_RANKS[i & 7]
    }

    /// Go one rank down.  If impossible, wrap around.
    #[inline]
    pub fn down(&self) -> Rank {
        Rank::from_index(self.to_index().wrapping_sub(1))
    }

    /// Go one rank up.  If impossible, wrap around.
    #[inline]
    pub fn up(&self) -> Rank {
        Rank::from_index(self.to_index() + 1)
    }

    /// Convert this `Rank` into a `usize` between 0 and 7 (inclusive).
    #[inline]
    pub fn to_index(&self) -> usize {
        *self as usize
    }

    /// The board row this rank is drawn on.  Row 0 is the eighth rank.
    #[inline]
    pub fn to_row(&self) -> usize {
        7 - self.to_index()
    }

    /// The rank drawn on a particular board row.  If the row is > 7, wrap around.
    #[inline]
    pub fn from_row(row: usize) -> Rank {
        Rank::from_index(7 - (row & 7))
    }
}

impl FromStr for Rank {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.chars().next() {
            Some('1') => Ok(Rank::First),
            Some('2') => Ok(Rank::Second),
            Some('3') => Ok(Rank::Third),
            Some('4') => Ok(Rank::Fourth),
            Some('5') => Ok(Rank::Fifth),
            Some('6') => Ok(Rank::Sixth),
            Some('7') => Ok(Rank::Seventh),
            Some('8') => Ok(Rank::Eighth),
            _ => Err(Error::InvalidRank),
        }
    }
}

#[test]
fn rank_rows_are_flipped() {
    assert_eq!(Rank::Eighth.to_row(), 0);
    assert_eq!(Rank::First.to_row(), 7);
    for rank in ALL_RANKS.iter() {
        assert_eq!(Rank::from_row(rank.to_row()), *rank);
    }
}

#[test]
fn parse_ranks() {
    assert_eq!("4".parse::<Rank>().unwrap(), Rank::Fourth);
    assert!("9".parse::<Rank>().is_err());
    assert!("".parse::<Rank>().is_err());
}

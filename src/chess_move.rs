use crate::error::Error;
use crate::square::Square;
#[cfg(feature = "serialize")]
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Represent a ChessMove in memory.  Whether it captures is decided by the board it is played
/// on, so there is no capture flag.
#[derive(Clone, Copy, Eq, PartialOrd, Ord, PartialEq, Default, Debug, Hash)]
#[cfg_attr(feature = "serialize", derive(Serialize, Deserialize))]
pub struct ChessMove {
    source: Square,
    dest: Square,
}

impl ChessMove {
    /// Create a new chess move, given a source `Square` and a destination `Square`.
    #[inline]
    pub fn new(source: Square, dest: Square) -> ChessMove {
        ChessMove { source, dest }
    }

    /// Get the source square (square the piece is currently on).
    #[inline]
    pub fn get_source(&self) -> Square {
        self.source
    }

    /// Get the destination square (square the piece is going to).
    #[inline]
    pub fn get_dest(&self) -> Square {
        self.dest
    }
}

impl FromStr for ChessMove {
    type Err = Error;

    /// Parse a move in coordinate notation.
    ///
    /// ```
    /// use chess_rules::{ChessMove, Square};
    ///
    /// let mv: ChessMove = "e2e4".parse().expect("Valid Move");
    /// assert_eq!(mv, ChessMove::new(Square::E2, Square::E4));
    /// ```
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || Error::InvalidMove { mv: s.to_string() };
        if s.len() != 4 {
            return Err(invalid());
        }
        let source = s.get(0..2).ok_or_else(invalid)?;
        let dest = s.get(2..4).ok_or_else(invalid)?;
        Ok(ChessMove::new(
            Square::from_str(source).map_err(|_| invalid())?,
            Square::from_str(dest).map_err(|_| invalid())?,
        ))
    }
}

impl fmt::Display for ChessMove {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}{}", self.source, self.dest)
    }
}

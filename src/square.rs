use crate::color::Color;
use crate::error::Error;
use crate::file::File;
use crate::rank::Rank;
#[cfg(feature = "serialize")]
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Represent a square on the chess board.
///
/// A `Square` is always on the board, so every accessor on `Board` can index with it blindly.
/// Squares are numbered a1 = 0, h1 = 7, ..., h8 = 63.  The row/column view used by the rules
/// puts the eighth rank on row 0.
#[derive(PartialEq, Ord, Eq, PartialOrd, Copy, Clone, Debug, Hash, Default)]
#[cfg_attr(feature = "serialize", derive(Serialize, Deserialize))]
pub struct Square(u8);

/// How many squares are there?
pub const NUM_SQUARES: usize = 64;

impl Square {
    /// Make a square given a rank and a file
    ///
    /// ```
    /// use chess_rules::{Square, Rank, File};
    ///
    /// assert_eq!(Square::make_square(Rank::Fourth, File::E), Square::E4);
    /// ```
    #[inline]
    pub fn make_square(rank: Rank, file: File) -> Square {
        Square((rank.to_index() as u8) << 3 | (file.to_index() as u8))
    }

    /// Make a square from a board row and column.  Row 0 holds Black's back rank.  Returns
    /// `None` if either coordinate is off the board.
    ///
    /// ```
    /// use chess_rules::Square;
    ///
    /// assert_eq!(Square::from_row_col(0, 0), Some(Square::A8));
    /// assert_eq!(Square::from_row_col(7, 4), Some(Square::E1));
    /// assert_eq!(Square::from_row_col(8, 0), None);
    /// ```
    #[inline]
    pub fn from_row_col(row: usize, col: usize) -> Option<Square> {
        if row < 8 && col < 8 {
            Some(Square::make_square(Rank::from_row(row), File::from_index(col)))
        } else {
            None
        }
    }

    /// Return the rank given this square.
    #[inline]
    pub fn get_rank(&self) -> Rank {
        Rank::from_index((self.0 >> 3) as usize)
    }

    /// Return the file given this square.
    #[inline]
    pub fn get_file(&self) -> File {
        File::from_index((self.0 & 7) as usize)
    }

    /// Return the board row of this square.
    #[inline]
    pub fn get_row(&self) -> usize {
        self.get_rank().to_row()
    }

    /// Return the board column of this square.
    #[inline]
    pub fn get_col(&self) -> usize {
        self.get_file().to_index()
    }

    /// Step by a row and column delta.  If that walks off the board, return `None`.
    ///
    /// ```
    /// use chess_rules::Square;
    ///
    /// assert_eq!(Square::E2.offset(-2, 0), Some(Square::E4));
    /// assert_eq!(Square::H1.offset(0, 1), None);
    /// ```
    #[inline]
    pub fn offset(&self, row_delta: i8, col_delta: i8) -> Option<Square> {
        let row = self.get_row() as i8 + row_delta;
        let col = self.get_col() as i8 + col_delta;
        if row < 0 || col < 0 {
            None
        } else {
            Square::from_row_col(row as usize, col as usize)
        }
    }

    /// If there is a square "forward", given my `Color`, go in that direction.  Otherwise, None.
    ///
    /// ```
    /// use chess_rules::{Color, Square};
    ///
    /// assert_eq!(Square::E2.forward(Color::White), Some(Square::E3));
    /// assert_eq!(Square::E2.forward(Color::Black), Some(Square::E1));
    /// assert_eq!(Square::E8.forward(Color::White), None);
    /// ```
    #[inline]
    pub fn forward(&self, color: Color) -> Option<Square> {
        let rank = self.get_rank();
        match color {
            Color::White if rank == Rank::Eighth => None,
            Color::White => Some(Square::make_square(rank.up(), self.get_file())),
            Color::Black if rank == Rank::First => None,
            Color::Black => Some(Square::make_square(rank.down(), self.get_file())),
        }
    }

    /// Convert this `Square` to a `usize` for table lookup purposes
    #[inline]
    pub fn to_index(&self) -> usize {
        self.0 as usize
    }

    pub const A1: Square = Square(0);
    pub const B1: Square = Square(1);
    pub const C1: Square = Square(2);
    pub const D1: Square = Square(3);
    pub const E1: Square = Square(4);
    pub const F1: Square = Square(5);
    pub const G1: Square = Square(6);
    pub const H1: Square = Square(7);
    pub const A2: Square = Square(8);
    pub const B2: Square = Square(9);
    pub const C2: Square = Square(10);
    pub const D2: Square = Square(11);
    pub const E2: Square = Square(12);
    pub const F2: Square = Square(13);
    pub const G2: Square = Square(14);
    pub const H2: Square = Square(15);
    pub const A3: Square = Square(16);
    pub const B3: Square = Square(17);
    pub const C3: Square = Square(18);
    pub const D3: Square = Square(19);
    pub const E3: Square = Square(20);
    pub const F3: Square = Square(21);
    pub const G3: Square = Square(22);
    pub const H3: Square = Square(23);
    pub const A4: Square = Square(24);
    pub const B4: Square = Square(25);
    pub const C4: Square = Square(26);
    pub const D4: Square = Square(27);
    pub const E4: Square = Square(28);
    pub const F4: Square = Square(29);
    pub const G4: Square = Square(30);
    pub const H4: Square = Square(31);
    pub const A5: Square = Square(32);
    pub const B5: Square = Square(33);
    pub const C5: Square = Square(34);
    pub const D5: Square = Square(35);
    pub const E5: Square = Square(36);
    pub const F5: Square = Square(37);
    pub const G5: Square = Square(38);
    pub const H5: Square = Square(39);
    pub const A6: Square = Square(40);
    pub const B6: Square = Square(41);
    pub const C6: Square = Square(42);
    pub const D6: Square = Square(43);
    pub const E6: Square = Square(44);
    pub const F6: Square = Square(45);
    pub const G6: Square = Square(46);
    pub const H6: Square = Square(47);
    pub const A7: Square = Square(48);
    pub const B7: Square = Square(49);
    pub const C7: Square = Square(50);
    pub const D7: Square = Square(51);
    pub const E7: Square = Square(52);
    pub const F7: Square = Square(53);
    pub const G7: Square = Square(54);
    pub const H7: Square = Square(55);
    pub const A8: Square = Square(56);
    pub const B8: Square = Square(57);
    pub const C8: Square = Square(58);
    pub const D8: Square = Square(59);
    pub const E8: Square = Square(60);
    pub const F8: Square = Square(61);
    pub const G8: Square = Square(62);
    pub const H8: Square = Square(63);
}

/// A list of every square on the chessboard.
///
/// ```
/// use chess_rules::{ALL_SQUARES, Square};
///
/// assert_eq!(ALL_SQUARES[0], Square::A1);
/// ```
pub const ALL_SQUARES: [Square; NUM_SQUARES] = {
    let mut squares = [Square(0); NUM_SQUARES];
    let mut i = 0;
    while i < NUM_SQUARES {
        squares[i] = Square(i as u8);
        i += 1;
    }
    squares
};

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "{}{}",
            (('a' as u8) + (self.get_file().to_index() as u8)) as char,
            (('1' as u8) + (self.get_rank().to_index() as u8)) as char
        )
    }
}

impl FromStr for Square {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.len() != 2 {
            return Err(Error::InvalidSquare);
        }
        let file = s.get(0..1).ok_or(Error::InvalidSquare)?;
        let rank = s.get(1..2).ok_or(Error::InvalidSquare)?;
        let file = File::from_str(file).map_err(|_| Error::InvalidSquare)?;
        let rank = Rank::from_str(rank).map_err(|_| Error::InvalidSquare)?;
        Ok(Square::make_square(rank, file))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn algebraic_names() {
        assert_eq!(Square::from_str("e4").unwrap(), Square::E4);
        assert_eq!(format!("{}", Square::A8), "a8");
        assert!(Square::from_str("i1").is_err());
        assert!(Square::from_str("a9").is_err());
        assert!(Square::from_str("a").is_err());
    }

    #[test]
    fn rows_and_columns() {
        assert_eq!(Square::A8.get_row(), 0);
        assert_eq!(Square::A8.get_col(), 0);
        assert_eq!(Square::H1.get_row(), 7);
        assert_eq!(Square::H1.get_col(), 7);
        for sq in ALL_SQUARES.iter() {
            assert_eq!(Square::from_row_col(sq.get_row(), sq.get_col()), Some(*sq));
        }
    }

    #[test]
    fn pawns_walk_forward() {
        assert_eq!(Square::E2.forward(Color::White), Some(Square::E3));
        assert_eq!(Square::E7.forward(Color::Black), Some(Square::E6));
        assert_eq!(Square::E8.forward(Color::White), None);
        assert_eq!(Square::E1.forward(Color::Black), None);
    }
}

use crate::attacks::is_king_in_check;
use crate::board::Board;
use crate::color::Color;
use crate::error::Error;
use crate::file::{File, ALL_FILES};
use crate::piece::Piece;
use crate::rank::{Rank, ALL_RANKS};
use crate::square::{Square, ALL_SQUARES, NUM_SQUARES};

use std::convert::TryFrom;
use std::fmt;
use std::ops::{Index, IndexMut};
use std::str::FromStr;

/// Represents a chess position that has *not* been validated for legality.
///
/// This structure is useful in the following cases:
/// * You are trying to build a chess board manually in code.
/// * You want to convert between formats like FEN.
///
/// Converting it into a `Board` checks that each side has exactly one king and that the side
/// which just moved is not in check.
///
/// ```
/// use chess_rules::{BoardBuilder, Board, Square, Color, Piece};
/// use std::convert::TryFrom;
/// let mut position = BoardBuilder::new();
/// position.piece(Square::A1, Piece::King, Color::White);
/// position.piece(Square::A8, Piece::Rook, Color::Black);
/// position.piece(Square::D1, Piece::King, Color::Black);
///
/// // You can index the position by the square:
/// assert_eq!(position[Square::A1], Some((Piece::King, Color::White)));
///
/// // White is in check, but that's ok, it's white's turn to move.
/// assert!(Board::try_from(&position).is_ok());
///
/// // Now White is in check, but Black is ready to move.  This position is invalid.
/// position.side_to_move(Color::Black);
/// assert!(Board::try_from(&position).is_err());
/// ```
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub struct BoardBuilder {
    pieces: [Option<(Piece, Color)>; NUM_SQUARES],
    side_to_move: Color,
}

impl BoardBuilder {
    /// Construct a new, empty, BoardBuilder with White to move.
    pub fn new() -> BoardBuilder {
        BoardBuilder {
            pieces: [None; NUM_SQUARES],
            side_to_move: Color::White,
        }
    }

    /// Set up a board with everything pre-loaded.
    ///
    /// ```
    /// use chess_rules::{BoardBuilder, Board, Square, Color, Piece};
    ///
    /// # use chess_rules::Error;
    /// # fn main() -> Result<(), Error> {
    /// let board: Board = BoardBuilder::setup(
    ///         &[
    ///             (Square::A1, Piece::King, Color::White),
    ///             (Square::H8, Piece::King, Color::Black)
    ///         ],
    ///         Color::Black)
    ///     .build()?;
    /// # Ok(())
    /// # }
    /// ```
    pub fn setup<'a>(
        pieces: impl IntoIterator<Item = &'a (Square, Piece, Color)>,
        side_to_move: Color,
    ) -> BoardBuilder {
        let mut result = BoardBuilder {
            pieces: [None; NUM_SQUARES],
            side_to_move,
        };

        for piece in pieces.into_iter() {
            result.pieces[piece.0.to_index()] = Some((piece.1, piece.2));
        }

        result
    }

    /// Copy the pieces off a `Board`.  A `Board` does not know whose turn it is, so that has to
    /// be supplied.
    pub fn from_board(board: &Board, side_to_move: Color) -> BoardBuilder {
        let mut result = BoardBuilder::new();
        result.side_to_move = side_to_move;
        for sq in ALL_SQUARES.iter() {
            result[*sq] = board.get(*sq);
        }
        result
    }

    /// Get the current player
    pub fn get_side_to_move(&self) -> Color {
        self.side_to_move
    }

    /// Set the side to move on the position
    ///
    /// This function can be used on self directly or in a builder pattern.
    pub fn side_to_move(&mut self, color: Color) -> &mut Self {
        self.side_to_move = color;
        self
    }

    /// Set a piece on a square.
    ///
    /// Note that this can and will overwrite another piece on the square if need.
    ///
    /// This function can be used on self directly or in a builder pattern.
    pub fn piece(&mut self, square: Square, piece: Piece, color: Color) -> &mut Self {
        self[square] = Some((piece, color));
        self
    }

    /// Clear a square on the board.
    ///
    /// This function can be used on self directly or in a builder pattern.
    ///
    /// ```
    /// use chess_rules::{BoardBuilder, Square};
    ///
    /// let mut bb = BoardBuilder::default();
    /// bb.clear_square(Square::A1);
    /// assert_eq!(bb[Square::A1], None);
    /// ```
    pub fn clear_square(&mut self, square: Square) -> &mut Self {
        self[square] = None;
        self
    }

    /// Validate the position and turn it into a `Board`.
    pub fn build(&self) -> Result<Board, Error> {
        Board::try_from(self)
    }
}

impl Index<Square> for BoardBuilder {
    type Output = Option<(Piece, Color)>;

    fn index(&self, index: Square) -> &Self::Output {
        &self.pieces[index.to_index()]
    }
}

impl IndexMut<Square> for BoardBuilder {
    fn index_mut(&mut self, index: Square) -> &mut Self::Output {
        &mut self.pieces[index.to_index()]
    }
}

impl fmt::Display for BoardBuilder {
    /// Write the position as FEN.  Castling and en-passant are not part of these rules, so those
    /// fields are always `-`.
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let mut count = 0;
        for rank in ALL_RANKS.iter().rev() {
            for file in ALL_FILES.iter() {
                let square = Square::make_square(*rank, *file).to_index();

                if self.pieces[square].is_some() && count != 0 {
                    write!(f, "{}", count)?;
                    count = 0;
                }

                if let Some((piece, color)) = self.pieces[square] {
                    write!(f, "{}", piece.to_string(color))?;
                } else {
                    count += 1;
                }
            }

            if count != 0 {
                write!(f, "{}", count)?;
            }

            if *rank != Rank::First {
                write!(f, "/")?;
            }
            count = 0;
        }

        if self.side_to_move == Color::White {
            write!(f, " w")?;
        } else {
            write!(f, " b")?;
        }

        write!(f, " - - 0 1")
    }
}

impl Default for BoardBuilder {
    /// The standard starting position, White to move.
    fn default() -> BoardBuilder {
        BoardBuilder::from_board(&Board::default(), Color::White)
    }
}

impl FromStr for BoardBuilder {
    type Err = Error;

    /// Read a FEN string.  Only the piece placement and side to move are used; the castling and
    /// en-passant fields must be present but are ignored, and the move counters are optional.
    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let invalid = || Error::InvalidFen {
            fen: value.to_string(),
        };
        let mut cur_rank = Rank::Eighth;
        let mut cur_file = 0usize;
        let mut fen = BoardBuilder::new();

        let tokens: Vec<&str> = value.split_whitespace().collect();
        if tokens.len() < 4 {
            return Err(invalid());
        }

        let pieces = tokens[0];
        let side = tokens[1];

        let mut ranks_seen = 1;
        for x in pieces.chars() {
            match x {
                '/' => {
                    if cur_file != 8 || cur_rank == Rank::First {
                        return Err(invalid());
                    }
                    cur_rank = cur_rank.down();
                    cur_file = 0;
                    ranks_seen += 1;
                }
                '1'..='8' => {
                    cur_file += (x as usize) - ('0' as usize);
                    if cur_file > 8 {
                        return Err(invalid());
                    }
                }
                _ => {
                    let (piece, color) = Piece::from_char(x).ok_or_else(invalid)?;
                    if cur_file >= 8 {
                        return Err(invalid());
                    }
                    fen.piece(
                        Square::make_square(cur_rank, File::from_index(cur_file)),
                        piece,
                        color,
                    );
                    cur_file += 1;
                }
            }
        }
        if ranks_seen != 8 || cur_file != 8 {
            return Err(invalid());
        }

        match side {
            "w" | "W" => fen.side_to_move(Color::White),
            "b" | "B" => fen.side_to_move(Color::Black),
            _ => return Err(invalid()),
        };

        Ok(fen)
    }
}

impl TryFrom<&BoardBuilder> for Board {
    type Error = Error;

    fn try_from(fen: &BoardBuilder) -> Result<Self, Self::Error> {
        let mut board = Board::empty();
        for sq in ALL_SQUARES.iter() {
            board.set(*sq, fen[*sq]);
        }

        if !board.is_sane() {
            return Err(Error::InvalidBoard);
        }

        // the side that just moved can't have left its king attacked
        if is_king_in_check(&board, !fen.get_side_to_move()) {
            return Err(Error::InvalidBoard);
        }

        Ok(board)
    }
}

impl TryFrom<BoardBuilder> for Board {
    type Error = Error;

    fn try_from(fen: BoardBuilder) -> Result<Self, Self::Error> {
        Board::try_from(&fen)
    }
}

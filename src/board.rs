use crate::attacks::is_king_in_check;
use crate::chess_move::ChessMove;
use crate::color::{Color, ALL_COLORS, NUM_COLORS};
use crate::file::{File, ALL_FILES};
use crate::game::GameStatus;
use crate::movegen::{self, SquareList};
use crate::piece::{Piece, NUM_PIECES};
use crate::rank::ALL_RANKS;
use crate::square::{Square, ALL_SQUARES, NUM_SQUARES};
use std::fmt;

/// A representation of a chess board.  That's why you're here, right?
///
/// This is nothing more than a mailbox: one optional `(Piece, Color)` per square.  It is small
/// and `Copy`, so the pure functions below copy it rather than share it when they need to
/// simulate moves.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
pub struct Board {
    squares: [Option<(Piece, Color)>; NUM_SQUARES],
}

/// The starting back rank, from the a-file to the h-file.
const BACK_RANK: [Piece; 8] = [
    Piece::Rook,
    Piece::Knight,
    Piece::Bishop,
    Piece::Queen,
    Piece::King,
    Piece::Bishop,
    Piece::Knight,
    Piece::Rook,
];

/// The most of each piece one side may have, indexed by `Piece::to_index`.  Pawns never
/// promote, so this is the starting set.
pub const STARTING_MATERIAL: [u8; NUM_PIECES] = [8, 2, 2, 2, 1, 1];

impl Board {
    /// Construct a new `Board` that is completely empty.
    /// Note: This does NOT give you the initial position.  Just a blank slate.
    pub fn empty() -> Board {
        Board {
            squares: [None; NUM_SQUARES],
        }
    }

    /// What is on a particular `Square`?
    #[inline]
    pub fn get(&self, square: Square) -> Option<(Piece, Color)> {
        self.squares[square.to_index()]
    }

    /// Put something (or nothing) on a particular `Square`, replacing whatever was there.
    #[inline]
    pub fn set(&mut self, square: Square, contents: Option<(Piece, Color)>) {
        self.squares[square.to_index()] = contents;
    }

    /// Empty a square, handing back whatever was on it.
    #[inline]
    pub fn clear(&mut self, square: Square) -> Option<(Piece, Color)> {
        self.squares[square.to_index()].take()
    }

    /// What piece is on a particular `Square`?  Is there even one?
    #[inline]
    pub fn piece_on(&self, square: Square) -> Option<Piece> {
        self.get(square).map(|(piece, _)| piece)
    }

    /// What color piece is on a particular `Square`?
    #[inline]
    pub fn color_on(&self, square: Square) -> Option<Color> {
        self.get(square).map(|(_, color)| color)
    }

    /// Where is the king of a particular color?
    pub fn king_square(&self, color: Color) -> Option<Square> {
        ALL_SQUARES
            .iter()
            .copied()
            .find(|sq| self.get(*sq) == Some((Piece::King, color)))
    }

    /// Every square holding a piece of `color`, a1 first.
    pub fn squares_of<'a>(&'a self, color: Color) -> impl Iterator<Item = Square> + 'a {
        ALL_SQUARES
            .iter()
            .copied()
            .filter(move |sq| self.color_on(*sq) == Some(color))
    }

    /// Count the pieces of each kind on the board, indexed by `Color::to_index` and then
    /// `Piece::to_index`.
    ///
    /// ```
    /// use chess_rules::{Board, Color, Piece};
    ///
    /// let material = Board::default().material();
    /// assert_eq!(material[Color::Black.to_index()][Piece::Pawn.to_index()], 8);
    /// ```
    pub fn material(&self) -> [[u8; NUM_PIECES]; NUM_COLORS] {
        let mut counts = [[0; NUM_PIECES]; NUM_COLORS];
        for (piece, color) in self.squares.iter().flatten() {
            counts[color.to_index()][piece.to_index()] += 1;
        }
        counts
    }

    /// Does this board "make sense"?  Each side must have exactly one king and no more of any
    /// piece than it starts with.
    pub fn is_sane(&self) -> bool {
        let material = self.material();
        ALL_COLORS.iter().all(|color| {
            let counts = &material[color.to_index()];
            counts[Piece::King.to_index()] == 1
                && counts
                    .iter()
                    .zip(STARTING_MATERIAL.iter())
                    .all(|(count, most)| count <= most)
        })
    }

    /// Is the king of `color` attacked right now?
    ///
    /// ```
    /// use chess_rules::{Board, Color};
    ///
    /// assert!(!Board::default().in_check(Color::White));
    /// ```
    pub fn in_check(&self, color: Color) -> bool {
        is_king_in_check(self, color)
    }

    /// Every square the piece on `square` may legally move to, if that piece belongs to
    /// `side_to_move`.  An empty square or an opponent's piece yields no moves.
    ///
    /// ```
    /// use chess_rules::{Board, Color, Square};
    ///
    /// let board = Board::default();
    /// let moves = board.legal_moves(Square::G1, Color::White);
    /// assert_eq!(moves.len(), 2);
    /// assert!(board.legal_moves(Square::G8, Color::White).is_empty());
    /// ```
    pub fn legal_moves(&self, square: Square, side_to_move: Color) -> SquareList {
        if self.color_on(square) != Some(side_to_move) {
            return SquareList::new();
        }
        let mut scratch = *self;
        movegen::legal_destinations(&mut scratch, square)
    }

    /// Make a chess move onto a new board.  Whatever stood on the destination is discarded.
    ///
    /// This does not check the move for legality.
    pub fn make_move_new(&self, m: ChessMove) -> Board {
        let mut result = *self;
        result.make_move(m);
        result
    }

    /// Make a chess move in place.  Whatever stood on the destination is discarded.
    ///
    /// This does not check the move for legality.
    pub fn make_move(&mut self, m: ChessMove) {
        let moved = self.clear(m.get_source());
        self.set(m.get_dest(), moved);
    }

    /// Apply a move and report the new board, the new side to move, and the status of the game
    /// from that side's point of view.
    ///
    /// The caller is expected to have taken `dest` from `legal_moves`.
    ///
    /// ```
    /// use chess_rules::{Board, Color, GameStatus, Square};
    ///
    /// let (board, side, status) = Board::default().apply_move(Square::E2, Square::E4, Color::White);
    /// assert_eq!(side, Color::Black);
    /// assert_eq!(status, GameStatus::Ongoing);
    /// assert_eq!(board.piece_on(Square::E4), Some(chess_rules::Piece::Pawn));
    /// ```
    pub fn apply_move(
        &self,
        source: Square,
        dest: Square,
        side_to_move: Color,
    ) -> (Board, Color, GameStatus) {
        let result = self.make_move_new(ChessMove::new(source, dest));
        let next = !side_to_move;
        let status = result.status(next);
        (result, next, status)
    }

    /// What is the status of the game, with `side_to_move` about to move?
    pub fn status(&self, side_to_move: Color) -> GameStatus {
        let mut scratch = *self;
        let in_check = is_king_in_check(&scratch, side_to_move);
        let has_move = movegen::any_legal_move(&mut scratch, side_to_move);
        GameStatus::from_flags(in_check, has_move, side_to_move)
    }
}

impl Default for Board {
    /// The standard starting position.
    #[inline]
    fn default() -> Board {
        let mut board = Board::empty();
        for color in ALL_COLORS.iter() {
            for (file, piece) in ALL_FILES.iter().zip(BACK_RANK.iter()) {
                board.set(
                    Square::make_square(color.to_my_backrank(), *file),
                    Some((*piece, *color)),
                );
                board.set(
                    Square::make_square(color.to_second_rank(), *file),
                    Some((Piece::Pawn, *color)),
                );
            }
        }
        board
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for rank in ALL_RANKS.iter().rev() {
            write!(f, "{} ", rank.to_index() + 1)?;
            for file in ALL_FILES.iter() {
                match self.get(Square::make_square(*rank, *file)) {
                    None => write!(f, " . ")?,
                    Some((piece, color)) => write!(f, " {} ", piece.to_string(color))?,
                }
            }
            writeln!(f)?;
        }
        write!(f, "  ")?;
        for file in ALL_FILES.iter() {
            write!(f, " {} ", file_letter(*file))?;
        }
        writeln!(f)
    }
}

fn file_letter(file: File) -> char {
    (b'A' + file.to_index() as u8) as char
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starting_position() {
        let board = Board::default();
        assert_eq!(board.get(Square::E1), Some((Piece::King, Color::White)));
        assert_eq!(board.get(Square::D8), Some((Piece::Queen, Color::Black)));
        assert_eq!(board.get(Square::A7), Some((Piece::Pawn, Color::Black)));
        assert_eq!(board.get(Square::E4), None);
        assert_eq!(board.squares_of(Color::White).count(), 16);
        assert_eq!(board.squares_of(Color::Black).count(), 16);
        assert!(board.is_sane());
    }

    #[test]
    fn set_and_clear() {
        let mut board = Board::empty();
        board.set(Square::C3, Some((Piece::Knight, Color::Black)));
        assert_eq!(board.piece_on(Square::C3), Some(Piece::Knight));
        assert_eq!(board.color_on(Square::C3), Some(Color::Black));
        assert_eq!(board.clear(Square::C3), Some((Piece::Knight, Color::Black)));
        assert_eq!(board, Board::empty());
    }

    #[test]
    fn kings_are_found() {
        let board = Board::default();
        assert_eq!(board.king_square(Color::White), Some(Square::E1));
        assert_eq!(board.king_square(Color::Black), Some(Square::E8));
        assert_eq!(Board::empty().king_square(Color::White), None);
        assert!(!Board::empty().is_sane());
    }

    #[test]
    fn material_is_capped_at_the_starting_set() {
        let mut board = Board::default();
        assert_eq!(board.material()[Color::White.to_index()], STARTING_MATERIAL);

        // a second white queen
        board.set(Square::E4, Some((Piece::Queen, Color::White)));
        assert!(!board.is_sane());

        // fine once the first one is gone
        board.set(Square::D1, None);
        assert!(board.is_sane());

        // a ninth black pawn
        board.set(Square::D5, Some((Piece::Pawn, Color::Black)));
        assert!(!board.is_sane());
    }

    #[test]
    fn capture_discards_the_victim() {
        let mut board = Board::empty();
        board.set(Square::A1, Some((Piece::Rook, Color::White)));
        board.set(Square::A8, Some((Piece::Rook, Color::Black)));
        board.make_move(ChessMove::new(Square::A1, Square::A8));
        assert_eq!(board.get(Square::A8), Some((Piece::Rook, Color::White)));
        assert_eq!(board.get(Square::A1), None);
        assert_eq!(board.squares_of(Color::Black).count(), 0);
    }

    #[test]
    fn diagram() {
        let text = format!("{}", Board::default());
        let first = text.lines().next().unwrap();
        assert_eq!(first, "8  r  n  b  q  k  b  n  r ");
        assert!(text.ends_with("   A  B  C  D  E  F  G  H \n"));
    }
}

//! Move generation: the per-piece movement rules, plus the filter that throws away moves which
//! leave the mover's own king attacked.

use crate::attacks::is_king_in_check;
use crate::board::Board;
use crate::chess_move::ChessMove;
use crate::color::Color;
use crate::piece::Piece;
use crate::square::{Square, ALL_SQUARES};
use arrayvec::ArrayVec;
use tracing::trace;

pub mod piece_type;

use self::piece_type::*;

/// No piece can reach more than 27 squares (a queen in the middle of an empty board).
pub const MAX_DESTINATIONS: usize = 27;

/// The destinations available to a single piece.
pub type SquareList = ArrayVec<Square, MAX_DESTINATIONS>;

/// Every move available to one side.  A sane board (see `Board::is_sane`) holds at most the
/// starting material per side, which can reach no more than 137 squares between them.
pub type MoveList = ArrayVec<ChessMove, 256>;

/// Generate the pseudo-legal moves (moves that *may* leave you in check) for whatever piece is
/// on `src`.  An empty square has no moves.
pub fn pseudo_legal_moves(board: &Board, src: Square) -> SquareList {
    let mut moves = SquareList::new();
    if let Some((piece, color)) = board.get(src) {
        match piece {
            Piece::Pawn => PawnType::pseudo_legals(board, src, color, &mut moves),
            Piece::Knight => KnightType::pseudo_legals(board, src, color, &mut moves),
            Piece::Bishop => BishopType::pseudo_legals(board, src, color, &mut moves),
            Piece::Rook => RookType::pseudo_legals(board, src, color, &mut moves),
            Piece::Queen => QueenType::pseudo_legals(board, src, color, &mut moves),
            Piece::King => KingType::pseudo_legals(board, src, color, &mut moves),
        }
    }
    moves
}

/// Play `src` -> `dest` on the board, ask whether the mover's king is attacked, then put
/// everything back exactly as it was.
///
/// The board is left identical to how it was found, whatever the answer.
fn leaves_king_safe(board: &mut Board, src: Square, dest: Square, color: Color) -> bool {
    let moving = board.get(src);
    let captured = board.get(dest);

    board.set(dest, moving);
    board.set(src, None);
    let in_check = is_king_in_check(board, color);

    board.set(src, moving);
    board.set(dest, captured);

    !in_check
}

/// Every legal destination for the piece on `src`, whoever's turn it is.
///
/// Each pseudo-legal move is simulated on `board` and reverted before the next one is tried, so
/// `board` is unchanged when this returns.
pub fn legal_destinations(board: &mut Board, src: Square) -> SquareList {
    let color = match board.color_on(src) {
        Some(color) => color,
        None => return SquareList::new(),
    };

    let mut legal = SquareList::new();
    for dest in pseudo_legal_moves(board, src) {
        if leaves_king_safe(board, src, dest, color) {
            legal.push(dest);
        } else {
            trace!(%src, %dest, ?color, "rejected move that leaves the king attacked");
        }
    }
    legal
}

/// Does `color` have any legal move at all?  Stops at the first piece that does.
pub fn any_legal_move(board: &mut Board, color: Color) -> bool {
    for src in ALL_SQUARES.iter() {
        if board.color_on(*src) != Some(color) {
            continue;
        }
        if !legal_destinations(board, *src).is_empty() {
            return true;
        }
    }
    false
}

/// Every legal move for `color`, ordered by source square and then by the order the movement
/// rules produce destinations.
///
/// # Panics
///
/// If the board is not sane and `color` has more moves than a `MoveList` holds.  Boards from
/// `BoardBuilder` are always sane.
pub fn all_legal_moves(board: &mut Board, color: Color) -> MoveList {
    let mut moves = MoveList::new();
    for src in ALL_SQUARES.iter() {
        if board.color_on(*src) != Some(color) {
            continue;
        }
        for dest in legal_destinations(board, *src) {
            moves.push(ChessMove::new(*src, dest));
        }
    }
    moves
}

/// An incremental move generator over every legal move for one side.
///
/// ```
/// use chess_rules::{Board, Color, MoveGen};
///
/// let movegen = MoveGen::new_legal(&Board::default(), Color::White);
/// assert_eq!(movegen.len(), 20);
/// ```
pub struct MoveGen {
    moves: MoveList,
    index: usize,
}

impl MoveGen {
    /// Create a new `MoveGen` for `side_to_move` on `board`.  The board is copied, never
    /// modified.
    pub fn new_legal(board: &Board, side_to_move: Color) -> MoveGen {
        let mut scratch = *board;
        MoveGen {
            moves: all_legal_moves(&mut scratch, side_to_move),
            index: 0,
        }
    }

    /// Count the leaves of the legal move tree `depth` plies deep.
    ///
    /// ```
    /// use chess_rules::{Board, Color, MoveGen};
    ///
    /// assert_eq!(MoveGen::movegen_perft_test(&Board::default(), Color::White, 2), 400);
    /// ```
    pub fn movegen_perft_test(board: &Board, side_to_move: Color, depth: usize) -> usize {
        let mut scratch = *board;
        perft(&mut scratch, side_to_move, depth)
    }
}

fn perft(board: &mut Board, side_to_move: Color, depth: usize) -> usize {
    if depth == 0 {
        return 1;
    }
    let moves = all_legal_moves(board, side_to_move);
    if depth == 1 {
        return moves.len();
    }
    let mut result = 0;
    for m in moves {
        let mut next = board.make_move_new(m);
        result += perft(&mut next, !side_to_move, depth - 1);
    }
    result
}

impl ExactSizeIterator for MoveGen {
    fn len(&self) -> usize {
        self.moves.len() - self.index
    }
}

impl Iterator for MoveGen {
    type Item = ChessMove;

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.len(), Some(self.len()))
    }

    fn next(&mut self) -> Option<ChessMove> {
        let m = self.moves.get(self.index).copied();
        if m.is_some() {
            self.index += 1;
        }
        m
    }
}

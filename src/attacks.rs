use crate::board::Board;
use crate::color::Color;
use crate::movegen::pseudo_legal_moves;
use crate::square::Square;

/// Is `square` attacked by any piece of `by_color`?
///
/// A square counts as attacked when some `by_color` piece has it among its pseudo-legal moves.
/// For an empty square that means a pawn push counts and a pawn's empty capture square does not.
/// The rules only ever ask about occupied squares (a king's), where the two notions agree.
///
/// ```
/// use chess_rules::{attacks::is_square_attacked, Board, Color, Square};
///
/// let board = Board::default();
/// assert!(is_square_attacked(&board, Square::F3, Color::White));
/// assert!(!is_square_attacked(&board, Square::E5, Color::White));
/// ```
pub fn is_square_attacked(board: &Board, square: Square, by_color: Color) -> bool {
    board
        .squares_of(by_color)
        .any(|src| pseudo_legal_moves(board, src).contains(&square))
}

/// Is the king of `color` attacked by the other side?
///
/// # Panics
///
/// If `color` has no king.  Kings are never captured, so a missing king means the board was
/// built wrong.
pub fn is_king_in_check(board: &Board, color: Color) -> bool {
    match board.king_square(color) {
        Some(ksq) => is_square_attacked(board, ksq, !color),
        None => panic!("no {} king on the board:\n{}", color, board),
    }
}

use crate::board::Board;
use crate::color::Color;
use crate::movegen::SquareList;
use crate::square::Square;

/// The movement rule of one kind of piece.
///
/// `pseudo_legals` ignores whether the mover's own king would be left attacked.  That is the
/// job of the legality filter in `movegen`.
pub trait PieceType {
    fn pseudo_legals(board: &Board, src: Square, color: Color, moves: &mut SquareList);
}

pub struct PawnType;
pub struct BishopType;
pub struct KnightType;
pub struct RookType;
pub struct QueenType;
pub struct KingType;

const KNIGHT_JUMPS: [(i8, i8); 8] = [
    (-2, -1),
    (-2, 1),
    (-1, -2),
    (-1, 2),
    (1, -2),
    (1, 2),
    (2, -1),
    (2, 1),
];

const KING_STEPS: [(i8, i8); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

const ROOK_DIRECTIONS: [(i8, i8); 4] = [(-1, 0), (1, 0), (0, -1), (0, 1)];

const BISHOP_DIRECTIONS: [(i8, i8); 4] = [(-1, -1), (-1, 1), (1, -1), (1, 1)];

/// Add each offset from `src` that lands on the board and not on one of my own pieces.
fn push_steps(board: &Board, src: Square, color: Color, steps: &[(i8, i8)], moves: &mut SquareList) {
    for &(dr, dc) in steps {
        if let Some(dest) = src.offset(dr, dc) {
            if board.color_on(dest) != Some(color) {
                moves.push(dest);
            }
        }
    }
}

/// Walk each ray until the edge of the board or the first piece.  That piece is included only
/// if it is an enemy.
fn push_rays(
    board: &Board,
    src: Square,
    color: Color,
    directions: &[(i8, i8)],
    moves: &mut SquareList,
) {
    for &(dr, dc) in directions {
        let mut cur = src.offset(dr, dc);
        while let Some(dest) = cur {
            match board.color_on(dest) {
                None => moves.push(dest),
                Some(c) => {
                    if c != color {
                        moves.push(dest);
                    }
                    break;
                }
            }
            cur = dest.offset(dr, dc);
        }
    }
}

impl PieceType for PawnType {
    fn pseudo_legals(board: &Board, src: Square, color: Color, moves: &mut SquareList) {
        let dir = color.pawn_direction();

        // pushes are blocked by any piece, friend or foe
        if let Some(one) = src.forward(color) {
            if board.get(one).is_none() {
                moves.push(one);
                if src.get_rank() == color.to_second_rank() {
                    if let Some(two) = one.forward(color) {
                        if board.get(two).is_none() {
                            moves.push(two);
                        }
                    }
                }
            }
        }

        for dc in [-1, 1].iter() {
            if let Some(dest) = src.offset(dir, *dc) {
                if board.color_on(dest) == Some(!color) {
                    moves.push(dest);
                }
            }
        }
    }
}

impl PieceType for KnightType {
    fn pseudo_legals(board: &Board, src: Square, color: Color, moves: &mut SquareList) {
        push_steps(board, src, color, &KNIGHT_JUMPS, moves);
    }
}

impl PieceType for BishopType {
    fn pseudo_legals(board: &Board, src: Square, color: Color, moves: &mut SquareList) {
        push_rays(board, src, color, &BISHOP_DIRECTIONS, moves);
    }
}

impl PieceType for RookType {
    fn pseudo_legals(board: &Board, src: Square, color: Color, moves: &mut SquareList) {
        push_rays(board, src, color, &ROOK_DIRECTIONS, moves);
    }
}

impl PieceType for QueenType {
    fn pseudo_legals(board: &Board, src: Square, color: Color, moves: &mut SquareList) {
        RookType::pseudo_legals(board, src, color, moves);
        BishopType::pseudo_legals(board, src, color, moves);
    }
}

impl PieceType for KingType {
    fn pseudo_legals(board: &Board, src: Square, color: Color, moves: &mut SquareList) {
        push_steps(board, src, color, &KING_STEPS, moves);
    }
}

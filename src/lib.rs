//! A chess rules engine for two players sharing one board.
//!
//! The board is a plain 8x8 mailbox.  Moves are generated per piece from the movement rules,
//! then filtered by playing each one out and asking whether the mover's king is attacked.
//! Castling, en-passant and promotion are not part of these rules.
//!
//! ```
//! use chess_rules::{apply_move, legal_moves, new_game, GameStatus, Square};
//!
//! let (board, side) = new_game();
//! assert!(legal_moves(&board, Square::E2, side).contains(&Square::E4));
//!
//! let (board, side, status) = apply_move(&board, Square::E2, Square::E4, side);
//! assert_eq!(status, GameStatus::Ongoing);
//! assert_eq!(legal_moves(&board, Square::E7, side).len(), 2);
//! ```

pub mod attacks;
mod board;
mod board_builder;
mod chess_move;
mod color;
mod error;
mod file;
mod game;
mod movegen;
mod piece;
mod rank;
mod square;

pub use crate::board::*;
pub use crate::board_builder::*;
pub use crate::chess_move::*;
pub use crate::color::*;
pub use crate::error::*;
pub use crate::file::*;
pub use crate::game::*;
pub use crate::movegen::{
    all_legal_moves, any_legal_move, legal_destinations, pseudo_legal_moves, MoveGen, MoveList,
    SquareList, MAX_DESTINATIONS,
};
pub use crate::piece::*;
pub use crate::rank::*;
pub use crate::square::*;

use crate::board::Board;
use crate::board_builder::BoardBuilder;
use crate::chess_move::ChessMove;
use crate::color::Color;
use crate::error::Error;
use crate::movegen::SquareList;
use crate::square::Square;
#[cfg(feature = "serialize")]
use serde::{Deserialize, Serialize};
use std::convert::TryFrom;
use std::fmt;
use std::str::FromStr;
use tracing::{debug, trace};

/// How does the game stand for the side about to move?
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Debug, Hash)]
#[cfg_attr(feature = "serialize", derive(Serialize, Deserialize))]
pub enum GameStatus {
    Ongoing,
    OngoingInCheck,
    /// The game is over; the color is the winner.
    Checkmate(Color),
    Stalemate,
}

impl GameStatus {
    /// Combine the two questions asked of the side to move.
    ///
    /// | in check | has a move | status |
    /// |---|---|---|
    /// | yes | no | checkmate, the other side wins |
    /// | no | no | stalemate |
    /// | yes | yes | ongoing, in check |
    /// | no | yes | ongoing |
    pub fn from_flags(in_check: bool, has_move: bool, side_to_move: Color) -> GameStatus {
        match (in_check, has_move) {
            (true, false) => GameStatus::Checkmate(!side_to_move),
            (false, false) => GameStatus::Stalemate,
            (true, true) => GameStatus::OngoingInCheck,
            (false, true) => GameStatus::Ongoing,
        }
    }

    /// Checkmate and stalemate end the game.
    #[inline]
    pub fn is_terminal(&self) -> bool {
        match *self {
            GameStatus::Checkmate(_) | GameStatus::Stalemate => true,
            GameStatus::Ongoing | GameStatus::OngoingInCheck => false,
        }
    }
}

impl fmt::Display for GameStatus {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            GameStatus::Ongoing => write!(f, "ongoing"),
            GameStatus::OngoingInCheck => write!(f, "check"),
            GameStatus::Checkmate(winner) => write!(f, "checkmate, {} wins", winner),
            GameStatus::Stalemate => write!(f, "stalemate"),
        }
    }
}

/// Why a move was not played.
#[derive(Copy, Clone, PartialEq, Eq, Debug, Hash)]
pub enum Rejection {
    /// The game already ended in checkmate or stalemate.
    GameOver,
    /// There is no piece on the source square.
    EmptySquare,
    /// The piece on the source square belongs to the side not on move.
    NotYourPiece,
    /// The destination is not one of the piece's legal moves.
    IllegalDestination,
}

impl fmt::Display for Rejection {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            Rejection::GameOver => write!(f, "the game is over"),
            Rejection::EmptySquare => write!(f, "there is no piece there"),
            Rejection::NotYourPiece => write!(f, "that piece is not yours"),
            Rejection::IllegalDestination => write!(f, "that piece cannot move there"),
        }
    }
}

/// What happened when a move was offered to a `Game`?
#[derive(Copy, Clone, PartialEq, Eq, Debug, Hash)]
pub enum MoveOutcome {
    /// The move was played.  This is the status for the side now on move.
    Applied(GameStatus),
    /// The move was refused.  Board and turn are untouched.
    Rejected(Rejection),
}

impl MoveOutcome {
    #[inline]
    pub fn is_applied(&self) -> bool {
        match *self {
            MoveOutcome::Applied(_) => true,
            MoveOutcome::Rejected(_) => false,
        }
    }
}

/// For UI drivers, store a game object which owns the board, knows whose turn it is, and refuses
/// moves that are illegal or come after the game has ended.
///
/// ```
/// use chess_rules::{Game, GameStatus, MoveOutcome, Square};
///
/// let mut game = Game::new();
/// assert_eq!(game.apply_move(Square::E2, Square::E4), MoveOutcome::Applied(GameStatus::Ongoing));
/// assert!(!game.apply_move(Square::E4, Square::E5).is_applied()); // it's Black's turn
/// ```
#[derive(Clone, Debug)]
pub struct Game {
    board: Board,
    side_to_move: Color,
    status: GameStatus,
    moves: Vec<ChessMove>,
}

impl Game {
    /// Create a new `Game` with the initial position.
    ///
    /// ```
    /// use chess_rules::{Game, Board, Color};
    ///
    /// let game = Game::new();
    /// assert_eq!(*game.board(), Board::default());
    /// assert_eq!(game.side_to_move(), Color::White);
    /// ```
    pub fn new() -> Game {
        Game::start_from(Board::default(), Color::White)
    }

    /// Create a new `Game` from an arbitrary position.  The position must have exactly one king
    /// per side, and the side not on move must not be in check.
    ///
    /// ```
    /// use chess_rules::{BoardBuilder, Color, Game, Piece, Square};
    ///
    /// let board = BoardBuilder::new()
    ///     .piece(Square::A1, Piece::King, Color::White)
    ///     .piece(Square::H8, Piece::King, Color::Black)
    ///     .build()
    ///     .expect("valid position");
    /// assert!(Game::from_position(board, Color::Black).is_ok());
    /// ```
    pub fn from_position(board: Board, side_to_move: Color) -> Result<Game, Error> {
        let board = BoardBuilder::from_board(&board, side_to_move).build()?;
        Ok(Game::start_from(board, side_to_move))
    }

    fn start_from(board: Board, side_to_move: Color) -> Game {
        Game {
            status: board.status(side_to_move),
            board,
            side_to_move,
            moves: vec![],
        }
    }

    /// Go back to the initial position, White to move.
    pub fn reset(&mut self) {
        debug!("new game");
        *self = Game::new();
    }

    /// The current position.
    #[inline]
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Whose turn is it to move?
    #[inline]
    pub fn side_to_move(&self) -> Color {
        self.side_to_move
    }

    /// The status for the side to move.  Recomputed after every move.
    #[inline]
    pub fn status(&self) -> GameStatus {
        self.status
    }

    /// Has the game ended in checkmate or stalemate?
    #[inline]
    pub fn is_over(&self) -> bool {
        self.status.is_terminal()
    }

    /// Every move played so far.
    #[inline]
    pub fn moves(&self) -> &[ChessMove] {
        &self.moves
    }

    /// The legal destinations of the piece on `square`.  Empty if the square is empty, holds an
    /// opponent's piece, or the game is over.
    pub fn legal_moves(&self, square: Square) -> SquareList {
        if self.is_over() {
            return SquareList::new();
        }
        self.board.legal_moves(square, self.side_to_move)
    }

    /// Move the piece on `source` to `dest`, if that is a legal move for the side on move.
    ///
    /// ```
    /// use chess_rules::{Game, MoveOutcome, Rejection, Square};
    ///
    /// let mut game = Game::new();
    /// assert_eq!(
    ///     game.apply_move(Square::E2, Square::E5),
    ///     MoveOutcome::Rejected(Rejection::IllegalDestination)
    /// );
    /// assert!(game.moves().is_empty());
    /// ```
    pub fn apply_move(&mut self, source: Square, dest: Square) -> MoveOutcome {
        match self.check_move(source, dest) {
            Err(rejection) => {
                trace!(%source, %dest, %rejection, "move rejected");
                MoveOutcome::Rejected(rejection)
            }
            Ok(()) => {
                let mover = self.side_to_move;
                let (board, side_to_move, status) =
                    self.board.apply_move(source, dest, self.side_to_move);
                self.board = board;
                self.side_to_move = side_to_move;
                self.status = status;
                self.moves.push(ChessMove::new(source, dest));
                debug!(%source, %dest, ?mover, %status, "move applied");
                MoveOutcome::Applied(status)
            }
        }
    }

    /// Make a chess move on the board
    ///
    /// ```
    /// use chess_rules::{Game, MoveGen};
    ///
    /// let mut game = Game::new();
    /// let mut movegen = MoveGen::new_legal(game.board(), game.side_to_move());
    ///
    /// assert!(game.make_move(movegen.next().expect("At least one legal move")).is_applied());
    /// ```
    pub fn make_move(&mut self, chess_move: ChessMove) -> MoveOutcome {
        self.apply_move(chess_move.get_source(), chess_move.get_dest())
    }

    fn check_move(&self, source: Square, dest: Square) -> Result<(), Rejection> {
        if self.is_over() {
            return Err(Rejection::GameOver);
        }
        match self.board.color_on(source) {
            None => return Err(Rejection::EmptySquare),
            Some(color) if color != self.side_to_move => return Err(Rejection::NotYourPiece),
            Some(_) => {}
        }
        if self.legal_moves(source).contains(&dest) {
            Ok(())
        } else {
            Err(Rejection::IllegalDestination)
        }
    }

    /// A one-line description of the game for display next to the board.
    ///
    /// ```
    /// use chess_rules::Game;
    ///
    /// assert_eq!(Game::new().status_line(), "Turn: White");
    /// ```
    pub fn status_line(&self) -> String {
        match self.status {
            GameStatus::Ongoing => format!("Turn: {}", self.side_to_move),
            GameStatus::OngoingInCheck => format!("Turn: {} (in check)", self.side_to_move),
            GameStatus::Checkmate(winner) => format!("Checkmate! {} wins.", winner),
            GameStatus::Stalemate => "Draw: stalemate.".to_string(),
        }
    }
}

impl Default for Game {
    fn default() -> Game {
        Game::new()
    }
}

impl FromStr for Game {
    type Err = Error;

    /// Create a new `Game` object from an FEN string.
    ///
    /// ```
    /// use chess_rules::Game;
    ///
    /// let game: Game = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w - - 0 1".parse().expect("Valid FEN");
    /// assert!("Invalid FEN".parse::<Game>().is_err());
    /// ```
    fn from_str(fen: &str) -> Result<Self, Self::Err> {
        let builder = BoardBuilder::from_str(fen)?;
        let board = Board::try_from(&builder)?;
        Ok(Game::start_from(board, builder.get_side_to_move()))
    }
}

/// Set up the standard starting position.  White moves first.
pub fn new_game() -> (Board, Color) {
    (Board::default(), Color::White)
}

/// The legal destinations of the piece on `square`.  Empty if the square is empty or holds a
/// piece that does not belong to `side_to_move`.
pub fn legal_moves(board: &Board, square: Square, side_to_move: Color) -> SquareList {
    board.legal_moves(square, side_to_move)
}

/// Play `source` -> `dest` and return the new board, the new side to move and its status.  The
/// move is expected to come from `legal_moves`.
pub fn apply_move(
    board: &Board,
    source: Square,
    dest: Square,
    side_to_move: Color,
) -> (Board, Color, GameStatus) {
    board.apply_move(source, dest, side_to_move)
}

/// The status of the game for `side_to_move`.
pub fn status(board: &Board, side_to_move: Color) -> GameStatus {
    board.status(side_to_move)
}

use chess_rules::attacks::is_king_in_check;
use chess_rules::{
    all_legal_moves, any_legal_move, apply_move, legal_moves, new_game, status, Board,
    BoardBuilder, ChessMove, Color, Game, GameStatus, MoveGen, MoveOutcome, Piece, Square,
    ALL_SQUARES,
};
use std::str::FromStr;

fn position(fen: &str) -> (Board, Color) {
    let builder = BoardBuilder::from_str(fen).expect("valid FEN");
    (builder.build().expect("valid position"), builder.get_side_to_move())
}

fn count_legal(board: &Board, side: Color) -> usize {
    ALL_SQUARES
        .iter()
        .map(|sq| legal_moves(board, *sq, side).len())
        .sum()
}

/// Walk a game picking the `pick`-th legal move (modulo the number available) each turn.
fn walk(plies: usize, pick: usize) -> Vec<(Board, Color)> {
    let (mut board, mut side) = new_game();
    let mut seen = vec![(board, side)];
    for ply in 0..plies {
        let moves = MoveGen::new_legal(&board, side).collect::<Vec<ChessMove>>();
        if moves.is_empty() {
            break;
        }
        let m = moves[(ply * pick + pick) % moves.len()];
        let (next, next_side, next_status) = apply_move(&board, m.get_source(), m.get_dest(), side);
        board = next;
        side = next_side;
        seen.push((board, side));
        if next_status.is_terminal() {
            break;
        }
    }
    seen
}

#[test]
fn twenty_moves_each_from_the_start() {
    let (board, side) = new_game();
    assert_eq!(side, Color::White);
    assert_eq!(count_legal(&board, side), 20);

    for m in MoveGen::new_legal(&board, side) {
        let (after, side, status) = apply_move(&board, m.get_source(), m.get_dest(), Color::White);
        assert_eq!(side, Color::Black);
        assert_eq!(status, GameStatus::Ongoing);
        assert_eq!(count_legal(&after, side), 20, "after {}", m);
    }
}

#[test]
fn wrong_side_and_empty_squares_have_no_moves() {
    let (board, _) = new_game();
    assert!(legal_moves(&board, Square::E7, Color::White).is_empty());
    assert!(legal_moves(&board, Square::E2, Color::Black).is_empty());
    assert!(legal_moves(&board, Square::E4, Color::White).is_empty());
}

#[test]
fn legal_moves_never_leave_the_king_attacked() {
    for pick in 1..6 {
        for (board, side) in walk(40, pick) {
            for m in MoveGen::new_legal(&board, side) {
                let after = board.make_move_new(m);
                assert!(
                    !is_king_in_check(&after, side),
                    "{} leaves the {} king attacked on\n{}",
                    m,
                    side,
                    board
                );
            }
        }
    }
}

#[test]
fn legality_checks_do_not_touch_the_board() {
    for (board, side) in walk(30, 3) {
        let mut scratch = board;
        for sq in ALL_SQUARES.iter() {
            chess_rules::legal_destinations(&mut scratch, *sq);
            assert_eq!(scratch, board);
        }
        let has_move = any_legal_move(&mut scratch, side);
        all_legal_moves(&mut scratch, !side);
        assert_eq!(scratch, board);
        assert_eq!(
            status(&board, side),
            GameStatus::from_flags(board.in_check(side), has_move, side)
        );
    }
}

#[test]
fn kings_are_never_captured() {
    for pick in 1..6 {
        for (board, side) in walk(60, pick) {
            assert!(board.is_sane());
            for m in MoveGen::new_legal(&board, side) {
                assert_ne!(board.piece_on(m.get_dest()), Some(Piece::King));
            }
        }
    }
}

#[test]
fn scholars_mate() {
    let (mut board, mut side) = new_game();
    let mut last = GameStatus::Ongoing;
    for m in "e2e4 e7e5 d1h5 b8c6 f1c4 g8f6 h5f7".split_whitespace() {
        let m = ChessMove::from_str(m).unwrap();
        assert!(legal_moves(&board, m.get_source(), side).contains(&m.get_dest()));
        let (next, next_side, status) = apply_move(&board, m.get_source(), m.get_dest(), side);
        board = next;
        side = next_side;
        last = status;
    }
    assert_eq!(last, GameStatus::Checkmate(Color::White));
    assert_eq!(side, Color::Black);
    assert!(!any_legal_move(&mut board, Color::Black));
    assert!(board.in_check(Color::Black));
}

#[test]
fn stalemate_with_king_and_queen() {
    let (board, side) = position("k7/8/8/2Q5/8/8/8/7K w - - 0 1");
    assert_eq!(status(&board, side), GameStatus::Ongoing);

    let (after, side, result) = apply_move(&board, Square::C5, Square::B6, side);
    assert_eq!(side, Color::Black);
    assert_eq!(result, GameStatus::Stalemate);
    assert!(!after.in_check(Color::Black));
}

#[test]
fn back_rank_mate() {
    let mut game = Game::from_str("6k1/5ppp/8/8/8/8/8/R5K1 w - - 0 1").unwrap();
    assert_eq!(
        game.apply_move(Square::A1, Square::A8),
        MoveOutcome::Applied(GameStatus::Checkmate(Color::White))
    );
    assert_eq!(game.status_line(), "Checkmate! White wins.");
}

#[test]
fn turns_alternate_by_parity() {
    let mut game = Game::new();
    for n in 0..10 {
        let expected = if n % 2 == 0 { Color::White } else { Color::Black };
        assert_eq!(game.side_to_move(), expected);
        let m = MoveGen::new_legal(game.board(), game.side_to_move())
            .next()
            .expect("a legal move");
        assert!(game.make_move(m).is_applied());
        assert_eq!(game.moves().len(), n + 1);
    }
}

#[test]
fn pawn_double_step() {
    let (board, side) = new_game();
    let moves = legal_moves(&board, Square::D2, side);
    assert!(moves.contains(&Square::D3));
    assert!(moves.contains(&Square::D4));

    // blocked on the destination
    let (board, side) = position("4k3/8/8/8/3n4/8/3P4/4K3 w - - 0 1");
    assert_eq!(legal_moves(&board, Square::D2, side).as_slice(), &[Square::D3]);

    // blocked on the intermediate square
    let (board, side) = position("4k3/8/8/8/8/3N4/3P4/4K3 w - - 0 1");
    assert!(legal_moves(&board, Square::D2, side).is_empty());

    // not from its starting rank
    let (board, side) = position("4k3/8/8/8/8/3P4/8/4K3 w - - 0 1");
    assert_eq!(legal_moves(&board, Square::D3, side).as_slice(), &[Square::D4]);

    // black walks the other way
    let (board, side) = position("4k3/3p4/8/8/8/8/8/4K3 b - - 0 1");
    let mut moves: Vec<Square> = legal_moves(&board, Square::D7, side).into_iter().collect();
    moves.sort();
    assert_eq!(moves, vec![Square::D5, Square::D6]);
}

#[test]
fn sliders_stop_at_the_first_piece() {
    let (board, side) = position("4k3/8/8/1p6/8/8/1R1P4/4K3 w - - 0 1");
    let mut moves: Vec<Square> = legal_moves(&board, Square::B2, side).into_iter().collect();
    moves.sort();
    let mut expected = vec![
        Square::B1,
        Square::A2,
        Square::C2,
        Square::B3,
        Square::B4,
        Square::B5,
    ];
    expected.sort();
    assert_eq!(moves, expected);

    let (board, side) = position("4k3/8/8/8/5p2/8/3B4/2N1K3 w - - 0 1");
    let mut moves: Vec<Square> = legal_moves(&board, Square::D2, side).into_iter().collect();
    moves.sort();
    let mut expected = vec![Square::C3, Square::B4, Square::A5, Square::E3, Square::F4];
    expected.sort();
    assert_eq!(moves, expected);

    let (board, side) = position("4k3/8/1n6/8/3Q1P2/8/1p1P4/4K3 w - - 0 1");
    let mut moves: Vec<Square> = legal_moves(&board, Square::D4, side).into_iter().collect();
    moves.sort();
    let mut expected = vec![
        Square::D5,
        Square::D6,
        Square::D7,
        Square::D8,
        Square::D3,
        Square::A4,
        Square::B4,
        Square::C4,
        Square::E4,
        Square::C5,
        Square::B6,
        Square::E5,
        Square::F6,
        Square::G7,
        Square::H8,
        Square::C3,
        Square::B2,
        Square::E3,
        Square::F2,
        Square::G1,
    ];
    expected.sort();
    assert_eq!(moves, expected);
}

#[test]
fn crowded_positions_are_refused() {
    let crowded = "kpQQQQQQ/ppQ4Q/QQ5Q/Q6Q/Q6Q/Q6Q/Q5Q1/QQQQQQQK w - - 0 1";
    assert!(BoardBuilder::from_str(crowded).unwrap().build().is_err());
    assert!(Game::from_str(crowded).is_err());

    // the full starting set is still accepted, and every move fits in the list
    let (board, side) = position("7k/8/8/3Q4/PPPPPPPP/8/8/RNB1KBNR w - - 0 1");
    let movegen = MoveGen::new_legal(&board, side);
    assert_eq!(movegen.len(), count_legal(&board, side));
    assert_ne!(movegen.len(), 0);
}

#[test]
fn fen_round_trip() {
    let fen = "r1bqkb1r/pppp1Qpp/2n2n2/4p3/2B1P3/8/PPPP1PPP/RNB1K1NR b - - 0 1";
    let builder = BoardBuilder::from_str(fen).unwrap();
    assert_eq!(format!("{}", builder), fen);
    let board = builder.build().unwrap();
    assert_eq!(
        format!("{}", BoardBuilder::from_board(&board, Color::Black)),
        fen
    );
}

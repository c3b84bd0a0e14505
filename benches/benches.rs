#[macro_use]
extern crate bencher;
extern crate chess_rules;

use bencher::Bencher;
use chess_rules::{Board, BoardBuilder, Color, GameStatus, MoveGen, Square};
use std::str::FromStr;

// White has just played Qxf7#.
const SCHOLARS_MATE_FEN: &str = "r1bqkb1r/pppp1Qpp/2n2n2/4p3/2B1P3/8/PPPP1PPP/RNB1K1NR b - - 0 4";

// This is a helper function to remove boilerplate code from all the perft_* benchmarks
fn movegen_perft(bench: &mut Bencher, fen: &str, depth: usize, count: usize) {
    let builder = BoardBuilder::from_str(fen).expect("Valid FEN");
    let pos = builder.build().expect("Valid position");
    let side = builder.get_side_to_move();

    bench.iter(|| assert_eq!(MoveGen::movegen_perft_test(&pos, side, depth), count));
}

fn movegen_start_position(bench: &mut Bencher) {
    let pos = Board::default();
    bench.iter(|| assert_eq!(MoveGen::new_legal(&pos, Color::White).len(), 20));
}

fn legal_moves_one_piece(bench: &mut Bencher) {
    let pos = Board::default();
    bench.iter(|| assert_eq!(pos.legal_moves(Square::B1, Color::White).len(), 2));
}

fn make_move(bench: &mut Bencher) {
    let pos = Board::default();
    bench.iter(|| {
        let (after, side, _) = pos.apply_move(Square::E2, Square::E4, Color::White);
        assert_eq!(side, Color::Black);
        after
    });
}

fn status_checkmate(bench: &mut Bencher) {
    let pos = BoardBuilder::from_str(SCHOLARS_MATE_FEN)
        .expect("Valid FEN")
        .build()
        .expect("Valid position");
    bench.iter(|| assert_eq!(pos.status(Color::Black), GameStatus::Checkmate(Color::White)));
}

fn perft_01(bench: &mut Bencher) {
    movegen_perft(bench, "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w - - 0 1", 2, 400);
}

fn perft_02(bench: &mut Bencher) {
    movegen_perft(bench, "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w - - 0 1", 3, 8902);
}

benchmark_group!(
    benches,
    movegen_start_position,
    legal_moves_one_piece,
    make_move,
    status_checkmate,
    perft_01,
    perft_02
);

benchmark_main!(benches);

use chess_rules::{ChessMove, Game, MoveOutcome, Square};
use std::env;
use std::io::{self, BufRead, Write};
use std::str::FromStr;
use tracing_subscriber::EnvFilter;

const HELP: &str = "commands: <move> (e.g. e2e4) | moves <square> | new | quit";

fn main() -> io::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let mut game = match env::args().nth(1) {
        Some(fen) => match Game::from_str(&fen) {
            Ok(game) => game,
            Err(e) => {
                eprintln!("{}", e);
                std::process::exit(1);
            }
        },
        None => Game::new(),
    };

    let stdin = io::stdin();
    let mut stdout = io::stdout();
    println!("{}", HELP);
    println!("{}{}", game.board(), game.status_line());

    loop {
        write!(stdout, "> ")?;
        stdout.flush()?;

        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            break;
        }
        let words: Vec<&str> = line.split_whitespace().collect();

        match words.as_slice() {
            [] => continue,
            ["quit"] => break,
            ["new"] => {
                game.reset();
                println!("{}{}", game.board(), game.status_line());
            }
            ["moves", square] => match Square::from_str(square) {
                Ok(square) => {
                    let moves: Vec<String> = game
                        .legal_moves(square)
                        .iter()
                        .map(|sq| sq.to_string())
                        .collect();
                    println!("{}", moves.join(" "));
                }
                Err(e) => println!("{}", e),
            },
            [mv] => match ChessMove::from_str(mv) {
                Ok(mv) => match game.make_move(mv) {
                    MoveOutcome::Applied(_) => {
                        println!("{}{}", game.board(), game.status_line())
                    }
                    MoveOutcome::Rejected(why) => println!("{}: {}", mv, why),
                },
                Err(e) => println!("{}", e),
            },
            _ => println!("{}", HELP),
        }
    }

    Ok(())
}

//! Line-oriented text front end over a single game session.
//!
//! Run with:
//! `cargo run --release`
//! `cargo run --release -- --verbose --seed 42`
//! `cargo run --release -- --fen "k7/8/K7/8/8/8/8/1Q6 w - - 0 1"`

use std::io::{self, BufRead, Write};

use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::Level;

use board_session_chess::engines::engine_random::RandomMover;
use board_session_chess::engines::engine_trait::MoveChooser;
use board_session_chess::game_state::chess_rules::STARTING_POSITION_FEN;
use board_session_chess::move_generation::perft::perft_divide;
use board_session_chess::utils::algebraic::parse_square;
use board_session_chess::utils::game_record::write_game_record;
use board_session_chess::utils::render_game_state::render_game_state;
use board_session_chess::{ChessErrors, GameSession};

const HELP: &str = "\
commands:
  e2-e4 | e2e4   play a move
  undo           take back the last move
  new            start a new game
  moves <sq>     list legal destinations from a square
  random         play a random legal move
  board          show the board
  log            show the move log
  status         show whose turn it is or the result
  captures       show capture counts
  divide <n>     per-move perft counts to depth n
  fen            show the current position as FEN
  pgn            export the game record
  help           show this text
  quit           leave";

struct Options {
    verbose: bool,
    fen: Option<String>,
    seed: Option<u64>,
}

fn parse_options() -> Result<Options, String> {
    let mut options = Options {
        verbose: false,
        fen: None,
        seed: None,
    };

    let mut args = std::env::args().skip(1);
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--verbose" | "-v" => options.verbose = true,
            "--fen" => options.fen = Some(args.next().ok_or("--fen needs a value")?),
            "--seed" => {
                let value = args.next().ok_or("--seed needs a value")?;
                options.seed = Some(
                    value
                        .parse::<u64>()
                        .map_err(|_| format!("invalid seed: {value}"))?,
                );
            }
            other => return Err(format!("unknown argument: {other}")),
        }
    }

    Ok(options)
}

fn main() -> Result<(), String> {
    let options = parse_options()?;

    tracing_subscriber::fmt()
        .with_max_level(if options.verbose { Level::DEBUG } else { Level::WARN })
        .with_writer(io::stderr)
        .init();

    let initial_fen = options
        .fen
        .clone()
        .unwrap_or_else(|| STARTING_POSITION_FEN.to_owned());
    let mut session = GameSession::from_fen(&initial_fen).map_err(|e| e.to_string())?;

    let mut rng = match options.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    };
    let mut mover = RandomMover::new();

    println!("{}", render_game_state(session.current_position()));
    println!("{}", session.current_status_text());

    let stdin = io::stdin();
    for line in stdin.lock().lines() {
        let line = line.map_err(|e| e.to_string())?;
        let mut words = line.split_whitespace();
        let Some(command) = words.next() else {
            continue;
        };

        match command {
            "quit" | "exit" => break,
            "help" => println!("{HELP}"),
            "board" => println!("{}", render_game_state(session.current_position())),
            "status" => println!("{}", session.current_status_text()),
            "fen" => println!("{}", session.current_position().to_fen()),
            "pgn" => print!("{}", write_game_record(&session, &initial_fen)),
            "log" => {
                for (i, entry) in session.move_log().iter().enumerate() {
                    println!("{:>3}. {}", i + 1, entry);
                }
            }
            "captures" => {
                let (white, black) = session.capture_counts();
                println!("White Captures: {white}");
                println!("Black Captures: {black}");
            }
            "new" => {
                session.new_game();
                mover.new_game();
                println!("{}", render_game_state(session.current_position()));
                println!("{}", session.current_status_text());
            }
            "undo" => match session.undo() {
                Ok(mv) => {
                    println!("took back {mv}");
                    println!("{}", session.current_status_text());
                }
                Err(ChessErrors::NoOpUndo) => println!("nothing to undo"),
                Err(e) => println!("error: {e}"),
            },
            "moves" => match words.next().map(parse_square) {
                Some(Ok(from)) => {
                    let targets: Vec<String> = session
                        .legal_destinations(from)
                        .iter()
                        .map(|sq| sq.to_string())
                        .collect();
                    println!("{from}: {}", targets.join(" "));
                }
                Some(Err(e)) => println!("error: {e}"),
                None => println!("usage: moves <square>"),
            },
            "divide" => match words.next().map(str::parse::<u8>) {
                Some(Ok(depth)) => match perft_divide(session.current_position(), depth) {
                    Ok(counts) => {
                        let mut total = 0;
                        for (mv, nodes) in counts {
                            println!("{mv}: {nodes}");
                            total += nodes;
                        }
                        println!("total: {total}");
                    }
                    Err(e) => println!("error: {e}"),
                },
                _ => println!("usage: divide <depth>"),
            },
            "random" => {
                if session.is_game_over() {
                    println!("{}", session.current_status_text());
                    continue;
                }
                match mover.choose_move(session.current_position(), &mut rng) {
                    Some(mv) => play_and_report(&mut session, &mv.to_string()),
                    None => println!("{}", session.current_status_text()),
                }
            }
            text => play_and_report(&mut session, text),
        }

        io::stdout().flush().map_err(|e| e.to_string())?;
    }

    Ok(())
}

fn play_and_report(session: &mut GameSession, text: &str) {
    match session.apply_notation(text) {
        Ok(()) => {
            if let Some(entry) = session.move_log().last() {
                println!("{entry}");
            }
            println!("{}", render_game_state(session.current_position()));
            println!("{}", session.current_status_text());
        }
        Err(e) => println!("error: {e}"),
    }
}

//! Console front end.
//!
//! Run with:
//! `cargo run --release -- --vs-computer black --depth 3`
//! `cargo run --release -- --fen "<fen>"` or `-- --load game.save`
//!
//! Logging goes through `env_logger`; set `RUST_LOG=debug` to see search
//! statistics.

use std::io::{self, BufRead, Write};
use std::path::Path;
use std::thread;
use std::time::Duration;

use duel_chess::engines::engine_random::RandomEngine;
use duel_chess::errors::ChessResult;
use duel_chess::game_state::chess_types::{Color, PieceKind};
use duel_chess::game_state::game_result::GameResult;
use duel_chess::session::game_session::{
    GameMode, GameSession, MoveSubmission, DEFAULT_SEARCH_DEPTH,
};
use duel_chess::utils::algebraic::algebraic_to_square;
use duel_chess::utils::long_algebraic::parse_long_algebraic;
use duel_chess::utils::render_game_state::render_game_state;
use duel_chess::utils::save_game::{load_session, save_session};

#[derive(Debug, Default)]
struct Options {
    computer: Option<Color>,
    depth: Option<u8>,
    random: bool,
    fen: Option<String>,
    load: Option<String>,
}

fn parse_args(mut args: impl Iterator<Item = String>) -> Result<Options, String> {
    let mut options = Options::default();
    while let Some(arg) = args.next() {
        let mut value = |flag: &str| args.next().ok_or(format!("{flag} needs a value"));
        match arg.as_str() {
            "--vs-computer" => {
                options.computer = Some(match value("--vs-computer")?.as_str() {
                    "white" => Color::White,
                    "black" => Color::Black,
                    other => return Err(format!("--vs-computer expects white|black, got {other}")),
                });
            }
            "--depth" => {
                let text = value("--depth")?;
                options.depth = Some(text.parse().map_err(|_| format!("bad depth: {text}"))?);
            }
            "--random" => options.random = true,
            "--fen" => options.fen = Some(value("--fen")?),
            "--load" => options.load = Some(value("--load")?),
            "-h" | "--help" => return Err(usage()),
            other => return Err(format!("unknown argument: {other}\n{}", usage())),
        }
    }
    Ok(options)
}

fn usage() -> String {
    "usage: duel_chess [--vs-computer white|black] [--depth N] [--random] [--fen FEN | --load PATH]"
        .to_owned()
}

fn build_session(options: &Options) -> ChessResult<GameSession> {
    let mode = match options.computer {
        Some(computer) => GameMode::PlayerVsComputer {
            computer,
            depth: options.depth.unwrap_or(DEFAULT_SEARCH_DEPTH),
        },
        None => GameMode::PlayerVsPlayer,
    };

    let mut session = if let Some(path) = &options.load {
        load_session(Path::new(path))?
    } else if let Some(fen) = &options.fen {
        GameSession::from_fen(mode, fen)?
    } else {
        GameSession::new(mode)
    };

    if options.random {
        session.set_engine(Box::new(RandomEngine::new()));
    }
    Ok(session)
}

fn main() -> Result<(), String> {
    env_logger::init();

    let options = parse_args(std::env::args().skip(1))?;
    let mut session = build_session(&options).map_err(|e| e.to_string())?;

    let stdin = io::stdin();
    let mut input = stdin.lock();

    loop {
        print_position(&session);
        let result = session.classify();

        if !result.is_terminal() && session.is_computer_turn() {
            if let Err(err) = play_computer_move(&mut session) {
                println!("computer could not move: {err}");
                return Err(err.to_string());
            }
            continue;
        }

        if result.is_terminal() {
            println!("{}", describe_result(result, session.color_to_move()));
            println!("commands: new, save <path>, fen, quit");
        }

        let Some(line) = prompt(&mut input, &format!("{:?}> ", session.color_to_move())) else {
            return Ok(());
        };

        match run_command(&mut session, &mut input, &line) {
            Ok(true) => continue,
            Ok(false) => return Ok(()),
            Err(message) => println!("{message}"),
        }
    }
}

/// Returns `Ok(false)` when the user asked to quit.
fn run_command(
    session: &mut GameSession,
    input: &mut impl BufRead,
    line: &str,
) -> Result<bool, String> {
    let mut words = line.split_whitespace();
    let Some(command) = words.next() else {
        return Ok(true);
    };

    match command {
        "quit" | "exit" => return Ok(false),
        "new" => session.reset(),
        "fen" => println!("{}", session.game_state().get_fen()),
        "save" => {
            let path = words.next().ok_or("usage: save <path>")?;
            save_session(session, Path::new(path)).map_err(|e| e.to_string())?;
            println!("saved to {path}");
        }
        "moves" => {
            let square = words.next().ok_or("usage: moves <square>")?;
            let square = algebraic_to_square(square).map_err(|e| e.to_string())?;
            let moves: Vec<String> = session
                .legal_moves_from(square)
                .iter()
                .map(|mv| mv.to_string())
                .collect();
            println!("{}", if moves.is_empty() { "(none)".to_owned() } else { moves.join(" ") });
        }
        text => play_human_move(session, input, text)?,
    }
    Ok(true)
}

fn play_human_move(
    session: &mut GameSession,
    input: &mut impl BufRead,
    text: &str,
) -> Result<(), String> {
    let parsed = parse_long_algebraic(text).map_err(|e| format!("{e}; try e.g. e2e4"))?;

    let mut submission = session.submit_gesture(parsed.from, parsed.to, parsed.promotion);
    if let MoveSubmission::NeedsPromotionChoice(_) = submission {
        let choice = prompt(input, "promote to (q/r/b/n)? ").ok_or("no promotion chosen")?;
        let piece = match choice.trim().to_ascii_lowercase().as_str() {
            "q" => PieceKind::Queen,
            "r" => PieceKind::Rook,
            "b" => PieceKind::Bishop,
            "n" => PieceKind::Knight,
            other => return Err(format!("not a promotion piece: {other}")),
        };
        submission = session.submit_gesture(parsed.from, parsed.to, Some(piece));
    }

    match submission {
        MoveSubmission::Applied { mv, .. } => {
            println!("played {mv}");
            Ok(())
        }
        _ => Err(format!("illegal move: {text}")),
    }
}

fn play_computer_move(session: &mut GameSession) -> ChessResult<()> {
    session.start_computer_search()?;
    print!("thinking");
    io::stdout().flush().ok();

    let mut ticks = 0u32;
    loop {
        if let Some((mv, _)) = session.poll_computer_move()? {
            println!();
            println!("computer played {mv}");
            return Ok(());
        }
        if !session.is_search_pending() {
            // A stale result was dropped; search again for the current position.
            session.start_computer_search()?;
        }
        ticks += 1;
        if ticks % 50 == 0 {
            print!(".");
            io::stdout().flush().ok();
        }
        thread::sleep(Duration::from_millis(10));
    }
}

fn print_position(session: &GameSession) {
    let flipped = session.mode().computer_color() == Some(Color::White);
    println!();
    println!("{}", render_game_state(session.game_state(), flipped));
    if session.classify() == GameResult::Check {
        println!("{:?} is in check", session.color_to_move());
    }
}

fn describe_result(result: GameResult, to_move: Color) -> String {
    match result {
        GameResult::Checkmate => format!("checkmate, {:?} wins", to_move.opposite()),
        GameResult::Stalemate => "stalemate, draw".to_owned(),
        GameResult::DrawByRule(reason) => format!("draw: {reason:?}"),
        GameResult::Ongoing | GameResult::Check => "game in progress".to_owned(),
    }
}

fn prompt(input: &mut impl BufRead, text: &str) -> Option<String> {
    print!("{text}");
    io::stdout().flush().ok();
    let mut line = String::new();
    match input.read_line(&mut line) {
        Ok(0) | Err(_) => None,
        Ok(_) => Some(line.trim().to_owned()),
    }
}

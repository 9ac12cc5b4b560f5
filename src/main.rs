//! Interactive binary: load configuration, run the command loop,
//! append the result.
//!
//! Usage: `lanecast <game_config> <message_config>`
//!
//! Card definitions are read from `data/creatureCards.txt` and
//! `data/spellCards.txt`. Exit codes: 0 normal, 2 wrong arguments,
//! 3 configuration error.

use std::io::{self, BufRead, Write};
use std::process::ExitCode;

use lanecast::{append_result, load_registry, GameSetup, MessageTable, Session, SessionStatus};

const CREATURE_CARDS: &str = "data/creatureCards.txt";
const SPELL_CARDS: &str = "data/spellCards.txt";

fn main() -> ExitCode {
    let args: Vec<String> = std::env::args().collect();
    if args.len() != 3 {
        println!("[ERROR] Wrong number of parameters.");
        return ExitCode::from(2);
    }
    let game_cfg_path = &args[1];
    let msg_cfg_path = &args[2];

    let setup = match GameSetup::load(game_cfg_path) {
        Ok(setup) => setup,
        Err(err) => {
            eprintln!("[ERROR] Invalid file ({}): {}", game_cfg_path, err);
            return ExitCode::from(3);
        }
    };
    let messages = match MessageTable::load(msg_cfg_path) {
        Ok(messages) => messages,
        Err(err) => {
            eprintln!("[ERROR] Invalid file ({}): {}", msg_cfg_path, err);
            return ExitCode::from(3);
        }
    };
    let registry = match load_registry(CREATURE_CARDS, SPELL_CARDS) {
        Ok(registry) => registry,
        Err(err) => {
            eprintln!("[ERROR] Could not load card definitions: {}", err);
            return ExitCode::from(3);
        }
    };

    let mut session = match Session::new(setup, registry, messages) {
        Ok(session) => session,
        Err(err) => {
            eprintln!("[ERROR] Invalid file ({}): {}", game_cfg_path, err);
            return ExitCode::from(3);
        }
    };

    print!("{}", session.opening());

    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();
    while !session.is_over() {
        print!("{}", session.prompt());
        let _ = io::stdout().flush();

        let Some(Ok(line)) = lines.next() else {
            break;
        };
        let (output, status) = session.process(&line);
        print!("{}", output);
        if status == SessionStatus::Ended {
            break;
        }
    }

    if let Some(outcome) = session.outcome() {
        if append_result(game_cfg_path, outcome).is_err() {
            println!("<I_FILE_WRITE_FAILED>");
        }
    }
    ExitCode::SUCCESS
}

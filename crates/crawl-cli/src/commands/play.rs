//! Line-oriented play on stdin.

use std::io::{self, BufRead, Write};
use std::path::Path;

use colored::Colorize;
use crawl_play::{Command, Session, SessionConfig, parse_command};

/// Play the world at `path`, one command per input line, until `quit` or
/// end of input.
pub fn run(path: &Path, config: SessionConfig) -> Result<(), String> {
    let loaded = super::load(path)?;
    let mut session = Session::with_config(loaded, config).map_err(|e| e.to_string())?;

    println!("{}", session.intro());

    let stdin = io::stdin();
    let mut stdout = io::stdout();
    for line in stdin.lock().lines() {
        let line = line.map_err(|e| format!("failed to read input: {e}"))?;
        let command = parse_command(&line);
        let quit = command == Command::Quit;

        match session.execute(command) {
            Ok(text) => println!("{text}"),
            Err(e) => println!("{}", e.to_string().yellow()),
        }
        stdout.flush().map_err(|e| e.to_string())?;

        if quit {
            break;
        }
    }

    Ok(())
}

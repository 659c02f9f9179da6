//! Interactive and pipe query loops.
//!
//! REPL mode (stdin is a TTY): rustyline prompt with in-session history;
//! `quit`/`exit`/`q` leaves. Pipe mode: one query per stdin line.

use std::io::{self, BufRead};

use rustyline::error::ReadlineError;
use rustyline::DefaultEditor;

use kodeks_engine::Engine;

use crate::format::{format_results, OutputMode};

/// Run the interactive REPL.
pub fn run_repl(engine: &Engine, limit: usize, mode: OutputMode) {
    println!(
        "kodeks: {} articles indexed. Type a query, or 'quit' to leave.",
        engine.doc_count()
    );

    let mut rl = match DefaultEditor::new() {
        Ok(rl) => rl,
        Err(err) => {
            eprintln!("failed to initialize line editor: {err}");
            return;
        }
    };

    loop {
        match rl.readline("kodeks> ") {
            Ok(line) => {
                let query = line.trim();
                if query.is_empty() {
                    continue;
                }
                if matches!(query, "quit" | "exit" | "q") {
                    break;
                }
                let _ = rl.add_history_entry(query);
                execute(engine, query, limit, mode);
            }
            Err(ReadlineError::Interrupted) | Err(ReadlineError::Eof) => break,
            Err(err) => {
                eprintln!("input error: {err}");
                break;
            }
        }
    }
}

/// Run pipe mode: execute each stdin line as a query.
///
/// Returns a process exit code: 0 when every line executed.
pub fn run_pipe(engine: &Engine, limit: usize, mode: OutputMode) -> i32 {
    let stdin = io::stdin();
    for line in stdin.lock().lines() {
        match line {
            Ok(line) => {
                let query = line.trim();
                if query.is_empty() {
                    continue;
                }
                execute(engine, query, limit, mode);
            }
            Err(err) => {
                eprintln!("stdin error: {err}");
                return 1;
            }
        }
    }
    0
}

fn execute(engine: &Engine, query: &str, limit: usize, mode: OutputMode) {
    let results = engine.search(query, limit);
    println!("{}", format_results(engine, query, &results, mode));
}

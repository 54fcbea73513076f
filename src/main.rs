//! The CLI entry point: a REPL when invoked with no arguments, a one-shot
//! file runner when invoked with exactly one, per spec §6.
//!
//! Kept thin by design: all pipeline orchestration lives in
//! [`rook::driver`], so this file only owns process concerns (argument
//! parsing, exit codes, stdin/stdout wiring, logging setup).

use std::env;
use std::io::{self, BufRead, Write};
use std::path::Path;
use std::process;

use rook::driver;

fn main() {
    simple_logger::SimpleLogger::new()
        .with_level(log::LevelFilter::Off)
        .env()
        .init()
        .expect("logger already initialized");

    let mut args = env::args();
    let program = args.next().unwrap_or_else(|| "rook".to_string());
    let rest: Vec<String> = args.collect();

    let exit_code = match rest.as_slice() {
        [] => {
            run_prompt();
            0
        }
        [path] => run_file(path),
        _ => {
            println!("Usage: {} [script]", program);
            1
        }
    };

    process::exit(exit_code);
}

/// Reads `path`, runs it, and reports any read failure the way a runtime
/// error is reported (there is no source line to attach it to).
fn run_file(path: &str) -> i32 {
    match driver::run_file(Path::new(path)) {
        Ok(exit_code) => exit_code,
        Err(error) => {
            eprintln!("Failed to read '{}': {}", path, error);
            1
        }
    }
}

/// Runs an interactive prompt against one persistent [`driver::Repl`]
/// session: `> ` prompt, run each non-empty line, reset the lexical/
/// syntactic error flag between lines, exit on an empty line or EOF.
fn run_prompt() {
    let mut repl = driver::Repl::new();
    let stdin = io::stdin();
    let mut line = String::new();

    loop {
        print!("> ");
        io::stdout().flush().expect("failed to flush stdout");

        line.clear();
        let bytes_read = stdin
            .lock()
            .read_line(&mut line)
            .expect("failed to read from stdin");

        if bytes_read == 0 || line.trim().is_empty() {
            break;
        }

        repl.run_line(&line);
    }
}

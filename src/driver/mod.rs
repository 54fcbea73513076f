//! Ties the pipeline stages together for the REPL and file runner.
//!
//! Thin orchestration only: lex, parse, resolve, and — if no lexical,
//! syntactic, or resolution error was reported — interpret. Every stage
//! reports through the same [`Diagnostics`] sink so the caller can decide
//! what to do next (abort before interpretation, set a process exit code)
//! without each stage knowing about the others.
//!
//! # Module role
//!
//! [`run_source`] is the one-shot entry point both the file runner and the
//! test suite use directly. [`Repl`] wraps it for the REPL case, where a
//! single [`Interpreter`] (and thus one `globals` environment) must persist
//! across lines while the lexical/syntactic error flag resets between them.

use std::fs;
use std::io;
use std::path::Path;

use crate::diagnostics::Diagnostics;
use crate::interpreter::Interpreter;
use crate::lexer::Lexer;
use crate::parser::Parser;
use crate::resolver::{Locals, Resolver};

/// Runs `source` end-to-end: lex, parse, resolve, and (if error-free so
/// far) interpret, against a fresh [`Interpreter`].
///
/// Used directly by the file runner (one call per file) and by the
/// integration test suite, which exercises the library's public API rather
/// than spawning the binary for scenarios that don't need process-level
/// observation.
pub fn run_source(source: &str, diagnostics: &mut Diagnostics) {
    let tokens = Lexer::new(source).scan_tokens(diagnostics);
    let statements = Parser::new(tokens, diagnostics).parse();

    if diagnostics.had_error() {
        log::debug!("skipping resolution and interpretation: lex/parse error reported");
        return;
    }

    let locals = Resolver::new(diagnostics).resolve(&statements);

    if diagnostics.had_error() {
        log::debug!("skipping interpretation: resolution error reported");
        return;
    }

    let mut interpreter = Interpreter::new(locals);
    interpreter.interpret(&statements, diagnostics);
}

/// Reads `path`, runs it through [`run_source`], and returns the process
/// exit code spec §6 fixes: `0` on clean completion, `1` if any lexical,
/// syntactic, resolution, or runtime error was reported.
///
/// Returns `Err` only for the file-read I/O failure itself; the caller is
/// expected to report that separately (it has no line number to attach to
/// the shared diagnostic format).
pub fn run_file(path: &Path) -> io::Result<i32> {
    let source = fs::read_to_string(path)?;
    log::info!("running file {}", path.display());

    let mut diagnostics = Diagnostics::new();
    run_source(&source, &mut diagnostics);

    if diagnostics.had_error() || diagnostics.had_runtime_error() {
        Ok(1)
    } else {
        Ok(0)
    }
}

/// Owns the persistent REPL session: one [`Interpreter`] (and its
/// `globals` environment) and one [`Diagnostics`] sink across every line
/// typed at the prompt.
///
/// Each line is lexed, parsed, and resolved independently — a line's
/// expressions get fresh [`crate::ast::ExprId`]s every time, so the
/// resolver's output for that line is folded into the interpreter's
/// running side-table with [`Interpreter::extend_locals`] rather than
/// replacing it wholesale. The lexical/syntactic error flag resets between
/// lines (per spec §6) so one bad line doesn't poison the ones after it;
/// the runtime-error flag is cumulative for the whole session, since the
/// REPL's caller may want to know "did anything ever go wrong here".
pub struct Repl {
    interpreter: Interpreter,
    diagnostics: Diagnostics,
}

impl Repl {
    /// Starts a fresh session with an empty `globals` environment (plus
    /// the native builtins every `Interpreter` is pre-populated with).
    pub fn new() -> Self {
        Repl {
            interpreter: Interpreter::new(Locals::new()),
            diagnostics: Diagnostics::new(),
        }
    }

    /// Runs one line of input against the session's persistent state.
    ///
    /// Resets the lexical/syntactic error flag first, so a failed line
    /// doesn't prevent the next one from being attempted.
    pub fn run_line(&mut self, line: &str) {
        self.diagnostics.reset_error();

        let tokens = Lexer::new(line).scan_tokens(&mut self.diagnostics);
        let statements = Parser::new(tokens, &mut self.diagnostics).parse();

        if self.diagnostics.had_error() {
            return;
        }

        let locals = Resolver::new(&mut self.diagnostics).resolve(&statements);

        if self.diagnostics.had_error() {
            return;
        }

        self.interpreter.extend_locals(locals);
        self.interpreter.interpret(&statements, &mut self.diagnostics);
    }

    /// Whether any runtime error has occurred during this session.
    ///
    /// The REPL never exits because of this (spec §6: "Runtime errors in
    /// the REPL do not terminate the REPL"); it's exposed for callers
    /// (tests, an embedding host) that want to observe it.
    pub fn had_runtime_error(&self) -> bool {
        self.diagnostics.had_runtime_error()
    }
}

impl Default for Repl {
    fn default() -> Self {
        Self::new()
    }
}

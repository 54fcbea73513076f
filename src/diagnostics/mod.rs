//! Diagnostic reporting shared across every pipeline stage.
//!
//! Lexing, parsing, and resolution all report through a single [`Diagnostics`]
//! sink rather than short-circuiting on the first error. This lets the parser's
//! panic-mode recovery surface more than one syntax error per run, and lets the
//! driver decide whether to proceed to interpretation based on whether any
//! error was reported, independent of which stage reported it.
//!
//! # Format
//!
//! - Lexical, syntactic, and resolution errors: `[line L] Error<where>: <message>`,
//!   where `<where>` is `""`, `" at end"`, or `" at '<lexeme>'"`.
//! - Runtime errors: `<message>\n[line L]`.
//!
//! Both are written to stderr. Wording is a soft contract; this exact
//! structure is not.

use crate::interpreter::RuntimeError;
use crate::token::Token;

/// Accumulates whether an error has been reported, and reports diagnostics
/// to stderr in the structure the external interface fixes.
///
/// A single `Diagnostics` instance is threaded through an entire run (one
/// file, or one REPL line) so the driver can ask "did anything go wrong"
/// without each stage needing to propagate a `Result` for reporting.
#[derive(Debug, Default)]
pub struct Diagnostics {
    had_error: bool,
    had_runtime_error: bool,
}

impl Diagnostics {
    /// Creates a sink with no errors reported yet.
    pub fn new() -> Self {
        Diagnostics::default()
    }

    /// Reports a lexical error at `line`, with no token context.
    pub fn error(&mut self, line: usize, message: &str) {
        self.report(line, "", message);
    }

    /// Reports a syntactic or resolution error located at `token`.
    pub fn error_at(&mut self, token: &Token, message: &str) {
        self.report(token.line, &token.where_clause(), message);
    }

    fn report(&mut self, line: usize, location: &str, message: &str) {
        eprintln!("[line {}] Error{}: {}", line, location, message);
        log::error!("[line {}] Error{}: {}", line, location, message);
        self.had_error = true;
    }

    /// Reports a runtime error, in the `<message>\n[line L]` form.
    pub fn runtime_error(&mut self, error: &RuntimeError) {
        eprintln!("{}\n[line {}]", error.message, error.token.line);
        log::error!("runtime error at line {}: {}", error.token.line, error.message);
        self.had_runtime_error = true;
    }

    /// Whether a lexical, syntactic, or resolution error has been reported.
    pub fn had_error(&self) -> bool {
        self.had_error
    }

    /// Whether a runtime error has been reported.
    pub fn had_runtime_error(&self) -> bool {
        self.had_runtime_error
    }

    /// Clears the lexical/syntactic/resolution error flag.
    ///
    /// Called between REPL lines: each line gets its own chance to run even
    /// if a previous line failed to parse.
    pub fn reset_error(&mut self) {
        self.had_error = false;
    }
}

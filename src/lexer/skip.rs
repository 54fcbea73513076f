//! Whitespace and comment skipping for the lexer.

use super::Lexer;

impl Lexer {
    /// Skips a `//` line comment, if the cursor is positioned right after
    /// the opening `//`.
    ///
    /// Consumes up to, but not including, the terminating newline (the
    /// newline itself is handled by the ordinary whitespace case so that
    /// `line` is advanced exactly once).
    pub(super) fn skip_line_comment(&mut self) {
        while self.peek() != '\n' && !self.is_at_end() {
            self.advance();
        }
    }
}

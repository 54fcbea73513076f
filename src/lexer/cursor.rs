//! Cursor position management for the lexer.
//!
//! This module provides methods for tracking and advancing the lexer's
//! position within the input source code.

use super::Lexer;

impl Lexer {
    /// Returns `true` if the end of input has been reached.
    pub(super) fn is_at_end(&self) -> bool {
        self.current >= self.source.len()
    }

    /// Consumes and returns the current character.
    ///
    /// # Panics
    ///
    /// Panics if called at end of input; callers must check
    /// [`Lexer::is_at_end`] first.
    pub(super) fn advance(&mut self) -> char {
        let c = self.source[self.current];
        self.current += 1;
        c
    }

    /// Returns the current character without consuming it, or `'\0'` at
    /// end of input.
    pub(super) fn peek(&self) -> char {
        self.source.get(self.current).copied().unwrap_or('\0')
    }

    /// Returns the character one past the current one, or `'\0'` if that
    /// is at or past end of input.
    pub(super) fn peek_next(&self) -> char {
        self.source.get(self.current + 1).copied().unwrap_or('\0')
    }

    /// Consumes the current character if it equals `expected`.
    ///
    /// Used for the one/two-character operators, where the longer form is
    /// preferred when `=` immediately follows.
    pub(super) fn match_char(&mut self, expected: char) -> bool {
        if self.is_at_end() || self.source[self.current] != expected {
            return false;
        }
        self.current += 1;
        true
    }

    /// Returns the exact source slice from `start` to `current`.
    pub(super) fn lexeme(&self) -> String {
        self.source[self.start..self.current].iter().collect()
    }
}

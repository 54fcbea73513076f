//! Parser helper methods for token navigation and panic-mode recovery.

use super::Parser;
use super::error::ParseError;
use crate::token::{Token, TokenKind};

impl Parser<'_> {
    /// Returns the token at the current position.
    pub(super) fn peek(&self) -> &Token {
        &self.tokens[self.current]
    }

    /// Returns the most recently consumed token.
    pub(super) fn previous(&self) -> &Token {
        &self.tokens[self.current - 1]
    }

    /// Returns `true` once the current token is `EOF`.
    pub(super) fn is_at_end(&self) -> bool {
        self.peek().kind == TokenKind::Eof
    }

    /// Returns `true` if the current token has kind `kind`, without
    /// consuming it.
    pub(super) fn check(&self, kind: TokenKind) -> bool {
        !self.is_at_end() && self.peek().kind == kind
    }

    /// Consumes and returns the current token.
    pub(super) fn advance(&mut self) -> &Token {
        if !self.is_at_end() {
            self.current += 1;
        }
        self.previous()
    }

    /// Consumes the current token if it matches any of `kinds`.
    pub(super) fn match_any(&mut self, kinds: &[TokenKind]) -> bool {
        for kind in kinds {
            if self.check(*kind) {
                self.advance();
                return true;
            }
        }
        false
    }

    /// Consumes the current token if it has kind `kind`, otherwise reports
    /// `message` at the current token and raises [`ParseError`].
    pub(super) fn consume(&mut self, kind: TokenKind, message: &str) -> Result<Token, ParseError> {
        if self.check(kind) {
            Ok(self.advance().clone())
        } else {
            Err(self.error(message))
        }
    }

    /// Reports `message` at the current token and returns the signal to
    /// unwind to the nearest declaration boundary.
    pub(super) fn error(&mut self, message: &str) -> ParseError {
        let token = self.peek().clone();
        self.diagnostics.error_at(&token, message);
        ParseError
    }

    /// Discards tokens until just after the next `;`, or until the next
    /// token begins a new statement. Guarantees forward progress: at least
    /// one token is always consumed.
    pub(super) fn synchronize(&mut self) {
        self.advance();

        while !self.is_at_end() {
            if self.previous().kind == TokenKind::Semicolon {
                return;
            }

            if matches!(
                self.peek().kind,
                TokenKind::Class
                    | TokenKind::Fun
                    | TokenKind::Var
                    | TokenKind::For
                    | TokenKind::If
                    | TokenKind::While
                    | TokenKind::Print
                    | TokenKind::Return
            ) {
                return;
            }

            self.advance();
        }
    }
}

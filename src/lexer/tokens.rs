//! Token recognition and reading.

use super::Lexer;
use crate::diagnostics::Diagnostics;
use crate::token::{Literal, Token, TokenKind};

impl Lexer {
    /// Scans and returns the next token, advancing past it.
    ///
    /// Returns `None` for input that produces no token: whitespace, a line
    /// comment, or (after reporting an error) an unterminated string or an
    /// unexpected character.
    pub(super) fn scan_token(&mut self, diagnostics: &mut Diagnostics) -> Option<Token> {
        let c = self.advance();

        let kind = match c {
            '(' => TokenKind::LeftParen,
            ')' => TokenKind::RightParen,
            '{' => TokenKind::LeftBrace,
            '}' => TokenKind::RightBrace,
            ',' => TokenKind::Comma,
            '.' => TokenKind::Dot,
            '-' => TokenKind::Minus,
            '+' => TokenKind::Plus,
            ';' => TokenKind::Semicolon,
            '*' => TokenKind::Star,
            '!' => {
                if self.match_char('=') {
                    TokenKind::BangEqual
                } else {
                    TokenKind::Bang
                }
            }
            '=' => {
                if self.match_char('=') {
                    TokenKind::EqualEqual
                } else {
                    TokenKind::Equal
                }
            }
            '<' => {
                if self.match_char('=') {
                    TokenKind::LessEqual
                } else {
                    TokenKind::Less
                }
            }
            '>' => {
                if self.match_char('=') {
                    TokenKind::GreaterEqual
                } else {
                    TokenKind::Greater
                }
            }
            '/' => {
                if self.match_char('/') {
                    self.skip_line_comment();
                    return None;
                } else {
                    TokenKind::Slash
                }
            }
            ' ' | '\r' | '\t' => return None,
            '\n' => {
                self.line += 1;
                return None;
            }
            '"' => return self.string(diagnostics),
            c if c.is_ascii_digit() => return Some(self.number()),
            c if is_identifier_start(c) => return Some(self.identifier()),
            _ => {
                diagnostics.error(self.line, "Unexpected character.");
                return None;
            }
        };

        Some(Token::new(kind, self.lexeme(), self.line))
    }

    /// Scans a string literal, the opening `"` already consumed.
    ///
    /// Strings may span lines; each embedded newline advances `line`. The
    /// literal is the substring between the quotes, unmodified (no escape
    /// handling). Both an unterminated string and a successfully closed one
    /// are reported/tokenized at the line the opening `"` was on, matching
    /// every other token's "line the lexeme starts on" convention.
    fn string(&mut self, diagnostics: &mut Diagnostics) -> Option<Token> {
        let start_line = self.line;

        while self.peek() != '"' && !self.is_at_end() {
            if self.peek() == '\n' {
                self.line += 1;
            }
            self.advance();
        }

        if self.is_at_end() {
            diagnostics.error(start_line, "Unterminated string.");
            return None;
        }

        self.advance(); // the closing '"'

        let contents: String = self.source[self.start + 1..self.current - 1]
            .iter()
            .collect();
        Some(Token::with_literal(
            TokenKind::String,
            self.lexeme(),
            Literal::Str(contents),
            start_line,
        ))
    }

    /// Scans a number literal: one or more digits, optionally followed by
    /// `.` and one or more digits. A trailing `.` (not followed by a digit)
    /// is not consumed.
    fn number(&mut self) -> Token {
        while self.peek().is_ascii_digit() {
            self.advance();
        }

        if self.peek() == '.' && self.peek_next().is_ascii_digit() {
            self.advance(); // the '.'
            while self.peek().is_ascii_digit() {
                self.advance();
            }
        }

        let lexeme = self.lexeme();
        let value: f64 = lexeme.parse().expect("number lexeme must be valid f64");
        Token::with_literal(TokenKind::Number, lexeme, Literal::Number(value), self.line)
    }

    /// Scans an identifier or keyword: `[A-Za-z_][A-Za-z0-9_]*`.
    fn identifier(&mut self) -> Token {
        while is_identifier_continue(self.peek()) {
            self.advance();
        }

        let lexeme = self.lexeme();
        let kind = TokenKind::keyword(&lexeme).unwrap_or(TokenKind::Identifier);
        Token::new(kind, lexeme, self.line)
    }
}

fn is_identifier_start(c: char) -> bool {
    c.is_ascii_alphabetic() || c == '_'
}

fn is_identifier_continue(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_'
}

//! Statement and declaration parsing, including panic-mode recovery.
//!
//! ```text
//! program     → declaration* EOF
//! declaration → classDecl | funDecl | varDecl | statement
//! classDecl   → "class" IDENT "{" function* "}"
//! funDecl     → "fun" function
//! function    → IDENT "(" params? ")" block
//! params      → IDENT ("," IDENT)*
//! varDecl     → "var" IDENT ("=" expression)? ";"
//! statement   → exprStmt | printStmt | block | ifStmt | whileStmt | forStmt | returnStmt
//! block       → "{" declaration* "}"
//! ifStmt      → "if" "(" expression ")" statement ("else" statement)?
//! whileStmt   → "while" "(" expression ")" statement
//! forStmt     → "for" "(" (varDecl | exprStmt | ";") expression? ";" expression? ")" statement
//! returnStmt  → "return" expression? ";"
//! exprStmt    → expression ";"
//! printStmt   → "print" expression ";"
//! ```

use std::rc::Rc;

use super::Parser;
use super::error::ParseError;
use crate::ast::{Expr, ExprKind, FunctionDecl, LiteralValue, Stmt};
use crate::token::TokenKind;

impl Parser<'_> {
    /// Parses the whole token stream into a list of top-level statements.
    ///
    /// A declaration that fails to parse contributes nothing to the output;
    /// [`Parser::synchronize`] resumes parsing at the next likely statement
    /// boundary so later errors in the same run can still be reported.
    pub fn parse(&mut self) -> Vec<Stmt> {
        let mut statements = Vec::new();
        while !self.is_at_end() {
            if let Some(stmt) = self.declaration() {
                statements.push(stmt);
            }
        }
        log::debug!("parser produced {} top-level statements", statements.len());
        statements
    }

    fn declaration(&mut self) -> Option<Stmt> {
        let result = if self.match_any(&[TokenKind::Class]) {
            self.class_declaration()
        } else if self.match_any(&[TokenKind::Fun]) {
            self.function("function").map(Stmt::FunctionDecl)
        } else if self.match_any(&[TokenKind::Var]) {
            self.var_declaration()
        } else {
            self.statement()
        };

        match result {
            Ok(stmt) => Some(stmt),
            Err(_) => {
                self.synchronize();
                None
            }
        }
    }

    fn class_declaration(&mut self) -> Result<Stmt, ParseError> {
        let name = self.consume(TokenKind::Identifier, "Expect class name.")?;
        self.consume(TokenKind::LeftBrace, "Expect '{' before class body.")?;

        let mut methods = Vec::new();
        while !self.check(TokenKind::RightBrace) && !self.is_at_end() {
            methods.push(self.function("method")?);
        }

        self.consume(TokenKind::RightBrace, "Expect '}' after class body.")?;
        Ok(Stmt::ClassDecl { name, methods })
    }

    fn function(&mut self, kind: &str) -> Result<Rc<FunctionDecl>, ParseError> {
        let name = self.consume(TokenKind::Identifier, &format!("Expect {kind} name."))?;
        self.consume(
            TokenKind::LeftParen,
            &format!("Expect '(' after {kind} name."),
        )?;

        let mut params = Vec::new();
        if !self.check(TokenKind::RightParen) {
            loop {
                params.push(self.consume(TokenKind::Identifier, "Expect parameter name.")?);
                if !self.match_any(&[TokenKind::Comma]) {
                    break;
                }
            }
        }
        self.consume(TokenKind::RightParen, "Expect ')' after parameters.")?;

        self.consume(
            TokenKind::LeftBrace,
            &format!("Expect '{{' before {kind} body."),
        )?;
        let body = self.block()?;

        Ok(Rc::new(FunctionDecl { name, params, body }))
    }

    fn var_declaration(&mut self) -> Result<Stmt, ParseError> {
        let name = self.consume(TokenKind::Identifier, "Expect variable name.")?;

        let initializer = if self.match_any(&[TokenKind::Equal]) {
            Some(self.expression()?)
        } else {
            None
        };

        self.consume(
            TokenKind::Semicolon,
            "Expect ';' after variable declaration.",
        )?;
        Ok(Stmt::Var { name, initializer })
    }

    fn statement(&mut self) -> Result<Stmt, ParseError> {
        if self.match_any(&[TokenKind::For]) {
            return self.for_statement();
        }
        if self.match_any(&[TokenKind::If]) {
            return self.if_statement();
        }
        if self.match_any(&[TokenKind::Print]) {
            return self.print_statement();
        }
        if self.match_any(&[TokenKind::Return]) {
            return self.return_statement();
        }
        if self.match_any(&[TokenKind::While]) {
            return self.while_statement();
        }
        if self.match_any(&[TokenKind::LeftBrace]) {
            return Ok(Stmt::Block(self.block()?));
        }
        self.expression_statement()
    }

    fn block(&mut self) -> Result<Vec<Stmt>, ParseError> {
        let mut statements = Vec::new();
        while !self.check(TokenKind::RightBrace) && !self.is_at_end() {
            if let Some(stmt) = self.declaration() {
                statements.push(stmt);
            }
        }
        self.consume(TokenKind::RightBrace, "Expect '}' after block.")?;
        Ok(statements)
    }

    fn if_statement(&mut self) -> Result<Stmt, ParseError> {
        self.consume(TokenKind::LeftParen, "Expect '(' after 'if'.")?;
        let condition = self.expression()?;
        self.consume(TokenKind::RightParen, "Expect ')' after if condition.")?;

        let then_branch = Box::new(self.statement()?);
        let else_branch = if self.match_any(&[TokenKind::Else]) {
            Some(Box::new(self.statement()?))
        } else {
            None
        };

        Ok(Stmt::If {
            condition,
            then_branch,
            else_branch,
        })
    }

    fn while_statement(&mut self) -> Result<Stmt, ParseError> {
        self.consume(TokenKind::LeftParen, "Expect '(' after 'while'.")?;
        let condition = self.expression()?;
        self.consume(TokenKind::RightParen, "Expect ')' after condition.")?;
        let body = Box::new(self.statement()?);
        Ok(Stmt::While { condition, body })
    }

    /// Desugars into a block: `{ initializer; while (condition) { body; increment; } }`.
    /// A missing condition becomes the literal `true`.
    fn for_statement(&mut self) -> Result<Stmt, ParseError> {
        self.consume(TokenKind::LeftParen, "Expect '(' after 'for'.")?;

        let initializer = if self.match_any(&[TokenKind::Semicolon]) {
            None
        } else if self.match_any(&[TokenKind::Var]) {
            Some(self.var_declaration()?)
        } else {
            Some(self.expression_statement()?)
        };

        let condition = if self.check(TokenKind::Semicolon) {
            None
        } else {
            Some(self.expression()?)
        };
        self.consume(TokenKind::Semicolon, "Expect ';' after loop condition.")?;

        let increment = if self.check(TokenKind::RightParen) {
            None
        } else {
            Some(self.expression()?)
        };
        self.consume(TokenKind::RightParen, "Expect ')' after for clauses.")?;

        let mut body = self.statement()?;

        if let Some(increment) = increment {
            body = Stmt::Block(vec![body, Stmt::Expression(increment)]);
        }

        let condition =
            condition.unwrap_or_else(|| Expr::new(ExprKind::Literal(LiteralValue::Bool(true))));
        body = Stmt::While {
            condition,
            body: Box::new(body),
        };

        if let Some(initializer) = initializer {
            body = Stmt::Block(vec![initializer, body]);
        }

        Ok(body)
    }

    fn return_statement(&mut self) -> Result<Stmt, ParseError> {
        let keyword = self.previous().clone();
        let value = if self.check(TokenKind::Semicolon) {
            None
        } else {
            Some(self.expression()?)
        };
        self.consume(TokenKind::Semicolon, "Expect ';' after return value.")?;
        Ok(Stmt::Return { keyword, value })
    }

    fn print_statement(&mut self) -> Result<Stmt, ParseError> {
        let value = self.expression()?;
        self.consume(TokenKind::Semicolon, "Expect ';' after value.")?;
        Ok(Stmt::Print(value))
    }

    fn expression_statement(&mut self) -> Result<Stmt, ParseError> {
        let expr = self.expression()?;
        self.consume(TokenKind::Semicolon, "Expect ';' after expression.")?;
        Ok(Stmt::Expression(expr))
    }
}

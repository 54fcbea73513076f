//! Expression parsing: precedence climbing from assignment down to primary.
//!
//! ```text
//! expression  → assignment
//! assignment  → (call ".")? IDENT "=" assignment | logic_or
//! logic_or    → logic_and ("or" logic_and)*
//! logic_and   → equality ("and" equality)*
//! equality    → comparison (("!="|"==") comparison)*
//! comparison  → term ((">"|">="|"<"|"<=") term)*
//! term        → factor (("-"|"+") factor)*
//! factor      → unary (("/"|"*") unary)*
//! unary       → ("!"|"-") unary | call
//! call        → primary (("(" args? ")") | ("." IDENT))*
//! primary     → NUMBER | STRING | "true" | "false" | "nil"
//!             | "(" expression ")" | IDENT | "this"
//! ```

use super::Parser;
use super::error::ParseError;
use crate::ast::{Expr, ExprKind, LiteralValue};
use crate::token::{Literal, TokenKind};

impl Parser<'_> {
    pub(super) fn expression(&mut self) -> Result<Expr, ParseError> {
        self.assignment()
    }

    /// Parses the LHS as an ordinary expression, then — if `=` follows —
    /// retargets it into an `Assign` or `Set` node. A non-lvalue LHS is
    /// reported but does not raise; the original expression is returned.
    fn assignment(&mut self) -> Result<Expr, ParseError> {
        let expr = self.logic_or()?;

        if self.match_any(&[TokenKind::Equal]) {
            let equals = self.previous().clone();
            let value = self.assignment()?;

            return match expr.kind {
                ExprKind::Variable(name) => Ok(Expr::new(ExprKind::Assign {
                    name,
                    value: Box::new(value),
                })),
                ExprKind::Get { object, name } => Ok(Expr::new(ExprKind::Set {
                    object,
                    name,
                    value: Box::new(value),
                })),
                _ => {
                    self.diagnostics
                        .error_at(&equals, "Invalid assignment target.");
                    Ok(expr)
                }
            };
        }

        Ok(expr)
    }

    fn logic_or(&mut self) -> Result<Expr, ParseError> {
        let mut expr = self.logic_and()?;
        while self.match_any(&[TokenKind::Or]) {
            let op = self.previous().clone();
            let right = self.logic_and()?;
            expr = Expr::new(ExprKind::Logical {
                left: Box::new(expr),
                op,
                right: Box::new(right),
            });
        }
        Ok(expr)
    }

    fn logic_and(&mut self) -> Result<Expr, ParseError> {
        let mut expr = self.equality()?;
        while self.match_any(&[TokenKind::And]) {
            let op = self.previous().clone();
            let right = self.equality()?;
            expr = Expr::new(ExprKind::Logical {
                left: Box::new(expr),
                op,
                right: Box::new(right),
            });
        }
        Ok(expr)
    }

    fn equality(&mut self) -> Result<Expr, ParseError> {
        let mut expr = self.comparison()?;
        while self.match_any(&[TokenKind::BangEqual, TokenKind::EqualEqual]) {
            let op = self.previous().clone();
            let right = self.comparison()?;
            expr = Expr::new(ExprKind::Binary {
                left: Box::new(expr),
                op,
                right: Box::new(right),
            });
        }
        Ok(expr)
    }

    fn comparison(&mut self) -> Result<Expr, ParseError> {
        let mut expr = self.term()?;
        while self.match_any(&[
            TokenKind::Greater,
            TokenKind::GreaterEqual,
            TokenKind::Less,
            TokenKind::LessEqual,
        ]) {
            let op = self.previous().clone();
            let right = self.term()?;
            expr = Expr::new(ExprKind::Binary {
                left: Box::new(expr),
                op,
                right: Box::new(right),
            });
        }
        Ok(expr)
    }

    fn term(&mut self) -> Result<Expr, ParseError> {
        let mut expr = self.factor()?;
        while self.match_any(&[TokenKind::Minus, TokenKind::Plus]) {
            let op = self.previous().clone();
            let right = self.factor()?;
            expr = Expr::new(ExprKind::Binary {
                left: Box::new(expr),
                op,
                right: Box::new(right),
            });
        }
        Ok(expr)
    }

    fn factor(&mut self) -> Result<Expr, ParseError> {
        let mut expr = self.unary()?;
        while self.match_any(&[TokenKind::Slash, TokenKind::Star]) {
            let op = self.previous().clone();
            let right = self.unary()?;
            expr = Expr::new(ExprKind::Binary {
                left: Box::new(expr),
                op,
                right: Box::new(right),
            });
        }
        Ok(expr)
    }

    fn unary(&mut self) -> Result<Expr, ParseError> {
        if self.match_any(&[TokenKind::Bang, TokenKind::Minus]) {
            let op = self.previous().clone();
            let right = self.unary()?;
            return Ok(Expr::new(ExprKind::Unary {
                op,
                right: Box::new(right),
            }));
        }
        self.call()
    }

    fn call(&mut self) -> Result<Expr, ParseError> {
        let mut expr = self.primary()?;

        loop {
            if self.match_any(&[TokenKind::LeftParen]) {
                expr = self.finish_call(expr)?;
            } else if self.match_any(&[TokenKind::Dot]) {
                let name = self.consume(TokenKind::Identifier, "Expect property name after '.'.")?;
                expr = Expr::new(ExprKind::Get {
                    object: Box::new(expr),
                    name,
                });
            } else {
                break;
            }
        }

        Ok(expr)
    }

    fn finish_call(&mut self, callee: Expr) -> Result<Expr, ParseError> {
        let mut args = Vec::new();

        if !self.check(TokenKind::RightParen) {
            loop {
                args.push(self.expression()?);
                if !self.match_any(&[TokenKind::Comma]) {
                    break;
                }
            }
        }

        let paren = self.consume(TokenKind::RightParen, "Expect ')' after arguments.")?;
        Ok(Expr::new(ExprKind::Call {
            callee: Box::new(callee),
            paren,
            args,
        }))
    }

    fn primary(&mut self) -> Result<Expr, ParseError> {
        if self.match_any(&[TokenKind::False]) {
            return Ok(Expr::new(ExprKind::Literal(LiteralValue::Bool(false))));
        }
        if self.match_any(&[TokenKind::True]) {
            return Ok(Expr::new(ExprKind::Literal(LiteralValue::Bool(true))));
        }
        if self.match_any(&[TokenKind::Nil]) {
            return Ok(Expr::new(ExprKind::Literal(LiteralValue::Nil)));
        }

        if self.match_any(&[TokenKind::Number]) {
            let value = match self.previous().literal {
                Some(Literal::Number(n)) => n,
                _ => unreachable!("NUMBER token always carries Literal::Number"),
            };
            return Ok(Expr::new(ExprKind::Literal(LiteralValue::Number(value))));
        }

        if self.match_any(&[TokenKind::String]) {
            let value = match &self.previous().literal {
                Some(Literal::Str(s)) => s.clone(),
                _ => unreachable!("STRING token always carries Literal::Str"),
            };
            return Ok(Expr::new(ExprKind::Literal(LiteralValue::Str(value))));
        }

        if self.match_any(&[TokenKind::This]) {
            return Ok(Expr::new(ExprKind::This(self.previous().clone())));
        }

        if self.match_any(&[TokenKind::Identifier]) {
            return Ok(Expr::new(ExprKind::Variable(self.previous().clone())));
        }

        if self.match_any(&[TokenKind::LeftParen]) {
            let inner = self.expression()?;
            self.consume(TokenKind::RightParen, "Expect ')' after expression.")?;
            return Ok(Expr::new(ExprKind::Grouping(Box::new(inner))));
        }

        Err(self.error("Expect expression."))
    }
}

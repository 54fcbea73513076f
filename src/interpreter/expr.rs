//! Expression evaluation.

use std::cell::RefCell;
use std::rc::Rc;

use super::{Interpreter, RuntimeError, Unwind};
use crate::ast::{Expr, ExprKind, LiteralValue};
use crate::environment::Environment;
use crate::token::{Token, TokenKind};
use crate::value::{Callable, LoxInstance, Value};

impl Interpreter {
    pub(super) fn evaluate(&mut self, expr: &Expr) -> Result<Value, Unwind> {
        match &expr.kind {
            ExprKind::Literal(value) => Ok(literal_value(value)),
            ExprKind::Grouping(inner) => self.evaluate(inner),
            ExprKind::Unary { op, right } => self.evaluate_unary(op, right),
            ExprKind::Binary { left, op, right } => self.evaluate_binary(left, op, right),
            ExprKind::Logical { left, op, right } => self.evaluate_logical(left, op, right),
            ExprKind::Variable(name) => self.look_up_variable(name, expr),
            ExprKind::Assign { name, value } => self.evaluate_assign(expr, name, value),
            ExprKind::Call { callee, paren, args } => self.evaluate_call(callee, paren, args),
            ExprKind::Get { object, name } => self.evaluate_get(object, name),
            ExprKind::Set { object, name, value } => self.evaluate_set(object, name, value),
            ExprKind::This(keyword) => self.look_up_variable(keyword, expr),
        }
    }

    fn evaluate_unary(&mut self, op: &Token, right: &Expr) -> Result<Value, Unwind> {
        let right = self.evaluate(right)?;
        match op.kind {
            TokenKind::Minus => match right {
                Value::Number(n) => Ok(Value::Number(-n)),
                _ => Err(RuntimeError::new(op.clone(), "Operand must be a number.").into()),
            },
            TokenKind::Bang => Ok(Value::Bool(!right.is_truthy())),
            _ => unreachable!("parser only produces ! or - as unary operators"),
        }
    }

    fn evaluate_binary(&mut self, left: &Expr, op: &Token, right: &Expr) -> Result<Value, Unwind> {
        let left = self.evaluate(left)?;
        let right = self.evaluate(right)?;

        match op.kind {
            TokenKind::Minus => numeric(op, left, right, |a, b| Value::Number(a - b)),
            TokenKind::Slash => numeric(op, left, right, |a, b| Value::Number(a / b)),
            TokenKind::Star => numeric(op, left, right, |a, b| Value::Number(a * b)),
            TokenKind::Greater => numeric(op, left, right, |a, b| Value::Bool(a > b)),
            TokenKind::GreaterEqual => numeric(op, left, right, |a, b| Value::Bool(a >= b)),
            TokenKind::Less => numeric(op, left, right, |a, b| Value::Bool(a < b)),
            TokenKind::LessEqual => numeric(op, left, right, |a, b| Value::Bool(a <= b)),
            TokenKind::Plus => match (left, right) {
                (Value::Number(a), Value::Number(b)) => Ok(Value::Number(a + b)),
                (Value::Str(a), Value::Str(b)) => Ok(Value::Str(a + &b)),
                _ => Err(RuntimeError::new(
                    op.clone(),
                    "Operands must be two numbers or two strings.",
                )
                .into()),
            },
            TokenKind::BangEqual => Ok(Value::Bool(left != right)),
            TokenKind::EqualEqual => Ok(Value::Bool(left == right)),
            _ => unreachable!("parser only produces arithmetic/comparison/equality operators here"),
        }
    }

    fn evaluate_logical(&mut self, left: &Expr, op: &Token, right: &Expr) -> Result<Value, Unwind> {
        let left = self.evaluate(left)?;
        match op.kind {
            TokenKind::Or if left.is_truthy() => Ok(left),
            TokenKind::And if !left.is_truthy() => Ok(left),
            _ => self.evaluate(right),
        }
    }

    fn look_up_variable(&self, name: &Token, expr: &Expr) -> Result<Value, Unwind> {
        match self.locals.get(&expr.id) {
            Some(&depth) => Ok(Environment::get_at(&self.environment, depth, &name.lexeme)),
            None => Environment::get_global(&self.globals, name)
                .map_err(|message| RuntimeError::new(name.clone(), message).into()),
        }
    }

    fn evaluate_assign(&mut self, expr: &Expr, name: &Token, value: &Expr) -> Result<Value, Unwind> {
        let value = self.evaluate(value)?;
        match self.locals.get(&expr.id) {
            Some(&depth) => {
                Environment::assign_at(&self.environment, depth, &name.lexeme, value.clone());
            }
            None => {
                Environment::assign_global(&self.globals, name, value.clone())
                    .map_err(|message| RuntimeError::new(name.clone(), message))?;
            }
        }
        Ok(value)
    }

    fn evaluate_call(&mut self, callee: &Expr, paren: &Token, args: &[Expr]) -> Result<Value, Unwind> {
        let callee = self.evaluate(callee)?;

        let mut arguments = Vec::with_capacity(args.len());
        for arg in args {
            arguments.push(self.evaluate(arg)?);
        }

        match callee {
            Value::Callable(callable) => call_checked(self, callable.as_ref(), paren, arguments),
            Value::Class(class) => {
                if arguments.len() != class.arity() {
                    return Err(RuntimeError::new(
                        paren.clone(),
                        format!(
                            "Expected {} arguments but got {}.",
                            class.arity(),
                            arguments.len()
                        ),
                    )
                    .into());
                }

                let instance = Rc::new(RefCell::new(LoxInstance::new(Rc::clone(&class))));
                if let Some(initializer) = class.find_method("init") {
                    let bound = initializer.bind(Rc::clone(&instance));
                    bound.call(self, arguments).map_err(Unwind::from)?;
                }
                Ok(Value::Instance(instance))
            }
            _ => Err(RuntimeError::new(paren.clone(), "Can only call functions and classes.").into()),
        }
    }

    fn evaluate_get(&mut self, object: &Expr, name: &Token) -> Result<Value, Unwind> {
        match self.evaluate(object)? {
            Value::Instance(instance) => {
                LoxInstance::get(&instance, name).map_err(Unwind::from)
            }
            _ => Err(RuntimeError::new(name.clone(), "Only instances have properties.").into()),
        }
    }

    fn evaluate_set(&mut self, object: &Expr, name: &Token, value: &Expr) -> Result<Value, Unwind> {
        let object = self.evaluate(object)?;
        let instance = match object {
            Value::Instance(instance) => instance,
            _ => return Err(RuntimeError::new(name.clone(), "Only instances have fields.").into()),
        };
        let value = self.evaluate(value)?;
        instance.borrow_mut().set(name, value.clone());
        Ok(value)
    }
}

fn call_checked(
    interpreter: &mut Interpreter,
    callable: &dyn Callable,
    paren: &Token,
    arguments: Vec<Value>,
) -> Result<Value, Unwind> {
    if arguments.len() != callable.arity() {
        return Err(RuntimeError::new(
            paren.clone(),
            format!(
                "Expected {} arguments but got {}.",
                callable.arity(),
                arguments.len()
            ),
        )
        .into());
    }
    callable.call(interpreter, arguments).map_err(Unwind::from)
}

fn numeric(
    op: &Token,
    left: Value,
    right: Value,
    apply: impl FnOnce(f64, f64) -> Value,
) -> Result<Value, Unwind> {
    match (left, right) {
        (Value::Number(a), Value::Number(b)) => Ok(apply(a, b)),
        _ => Err(RuntimeError::new(op.clone(), "Operands must be numbers.").into()),
    }
}

fn literal_value(value: &LiteralValue) -> Value {
    match value {
        LiteralValue::Nil => Value::Nil,
        LiteralValue::Bool(b) => Value::Bool(*b),
        LiteralValue::Number(n) => Value::Number(*n),
        LiteralValue::Str(s) => Value::Str(s.clone()),
    }
}

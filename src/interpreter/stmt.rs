//! Statement execution.

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use super::{Interpreter, Unwind};
use crate::ast::{FunctionDecl, Stmt};
use crate::environment::Environment;
use crate::token::Token;
use crate::value::{LoxClass, LoxFunction, Value};

impl Interpreter {
    pub(super) fn execute(&mut self, stmt: &Stmt) -> Result<(), Unwind> {
        match stmt {
            Stmt::Expression(expr) => {
                self.evaluate(expr)?;
                Ok(())
            }
            Stmt::Print(expr) => {
                let value = self.evaluate(expr)?;
                println!("{}", value.stringify());
                Ok(())
            }
            Stmt::Var { name, initializer } => {
                let value = match initializer {
                    Some(expr) => self.evaluate(expr)?,
                    None => Value::Nil,
                };
                self.environment.borrow_mut().define(&name.lexeme, value);
                Ok(())
            }
            Stmt::Block(statements) => {
                let enclosing = Environment::new_enclosed(Rc::clone(&self.environment));
                self.execute_block(statements, enclosing)?;
                Ok(())
            }
            Stmt::If {
                condition,
                then_branch,
                else_branch,
            } => {
                if self.evaluate(condition)?.is_truthy() {
                    self.execute(then_branch)
                } else if let Some(else_branch) = else_branch {
                    self.execute(else_branch)
                } else {
                    Ok(())
                }
            }
            Stmt::While { condition, body } => {
                while self.evaluate(condition)?.is_truthy() {
                    self.execute(body)?;
                }
                Ok(())
            }
            Stmt::FunctionDecl(decl) => {
                let function = LoxFunction::new(Rc::clone(decl), Rc::clone(&self.environment), false);
                self.environment
                    .borrow_mut()
                    .define(&decl.name.lexeme, Value::Callable(Rc::new(function)));
                Ok(())
            }
            Stmt::Return { value, .. } => {
                let value = match value {
                    Some(expr) => self.evaluate(expr)?,
                    None => Value::Nil,
                };
                Err(Unwind::Return(value))
            }
            Stmt::ClassDecl { name, methods } => self.execute_class_decl(name, methods),
        }
    }

    /// Runs `self.execute` for every statement in `enclosing`, restoring the
    /// previously-current environment on every exit path — success, an
    /// early `return`, or a runtime error.
    pub(crate) fn execute_block(
        &mut self,
        statements: &[Stmt],
        enclosing: Rc<RefCell<Environment>>,
    ) -> Result<Value, Unwind> {
        let previous = std::mem::replace(&mut self.environment, enclosing);

        let mut result = Ok(Value::Nil);
        for statement in statements {
            match self.execute(statement) {
                Ok(()) => continue,
                Err(Unwind::Return(value)) => {
                    result = Ok(value);
                    break;
                }
                Err(err @ Unwind::Error(_)) => {
                    result = Err(err);
                    break;
                }
            }
        }

        self.environment = previous;
        result
    }

    fn execute_class_decl(
        &mut self,
        name: &Token,
        methods: &[Rc<FunctionDecl>],
    ) -> Result<(), Unwind> {
        let mut method_table = HashMap::with_capacity(methods.len());
        for method in methods {
            let is_initializer = method.name.lexeme == "init";
            let function = LoxFunction::new(Rc::clone(method), Rc::clone(&self.environment), is_initializer);
            method_table.insert(method.name.lexeme.clone(), Rc::new(function));
        }

        let class = LoxClass::new(name.lexeme.clone(), method_table);
        self.environment
            .borrow_mut()
            .define(&name.lexeme, Value::Class(Rc::new(class)));
        Ok(())
    }
}

//! Runtime value representation.
//!
//! # Overview
//!
//! [`Value`] is the sum type every expression evaluates to. Equality is
//! structural on the primitive variants (`Nil`, `Bool`, `Number`, `Str`) and
//! identity-based on the reference variants (`Callable`, `Class`,
//! `Instance`) — two distinct closures are never equal to each other even
//! if they close over the same body, matching how the language treats
//! functions, classes, and instances as boxed, individually-addressed
//! objects rather than values.
//!
//! [`Callable`] is the uniform call interface shared by native functions,
//! user-defined functions, and class constructors; [`LoxClass`] and
//! [`LoxInstance`] add method dispatch and per-instance field storage.

use std::cell::RefCell;
use std::collections::HashMap;
use std::fmt;
use std::rc::Rc;

use crate::ast::FunctionDecl;
use crate::environment::Environment;
use crate::interpreter::{Interpreter, RuntimeError};
use crate::token::Token;

/// A call target: a native builtin, a user-defined function, or a class
/// acting as its own constructor.
pub trait Callable: fmt::Debug {
    fn arity(&self) -> usize;
    fn call(&self, interpreter: &mut Interpreter, args: Vec<Value>) -> Result<Value, RuntimeError>;
    fn name(&self) -> &str;
}

/// Any runtime value an expression can evaluate to.
#[derive(Debug, Clone)]
pub enum Value {
    Nil,
    Bool(bool),
    Number(f64),
    Str(String),
    Callable(Rc<dyn Callable>),
    Class(Rc<LoxClass>),
    Instance(Rc<RefCell<LoxInstance>>),
}

impl Value {
    /// Everything is truthy except `nil` and `false`.
    pub fn is_truthy(&self) -> bool {
        !matches!(self, Value::Nil | Value::Bool(false))
    }

    /// The name used by `print` and string concatenation. Numbers format
    /// via the host's default double formatting with a trailing `.0`
    /// stripped; `nil` formats as `"nil"`.
    pub fn stringify(&self) -> String {
        match self {
            Value::Nil => "nil".to_string(),
            Value::Bool(b) => b.to_string(),
            Value::Number(n) => {
                let text = n.to_string();
                match text.strip_suffix(".0") {
                    Some(stripped) => stripped.to_string(),
                    None => text,
                }
            }
            Value::Str(s) => s.clone(),
            Value::Callable(c) => format!("<fn {}>", c.name()),
            Value::Class(c) => c.name.clone(),
            Value::Instance(i) => format!("{} instance", i.borrow().class.name),
        }
    }
}

impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Value::Nil, Value::Nil) => true,
            (Value::Bool(a), Value::Bool(b)) => a == b,
            (Value::Number(a), Value::Number(b)) => a == b,
            (Value::Str(a), Value::Str(b)) => a == b,
            (Value::Callable(a), Value::Callable(b)) => Rc::ptr_eq(a, b),
            (Value::Class(a), Value::Class(b)) => Rc::ptr_eq(a, b),
            (Value::Instance(a), Value::Instance(b)) => Rc::ptr_eq(a, b),
            _ => false,
        }
    }
}

/// A user-defined function: its declaration plus the environment it closed
/// over at the point it was declared. `is_initializer` marks a class's
/// `init` method, whose implicit return value is always the instance
/// itself regardless of what the body's `return` (if any) yields.
#[derive(Debug)]
pub struct LoxFunction {
    declaration: Rc<FunctionDecl>,
    closure: Rc<RefCell<Environment>>,
    is_initializer: bool,
}

impl LoxFunction {
    pub fn new(
        declaration: Rc<FunctionDecl>,
        closure: Rc<RefCell<Environment>>,
        is_initializer: bool,
    ) -> Self {
        LoxFunction {
            declaration,
            closure,
            is_initializer,
        }
    }

    /// Returns a copy of this function bound to `instance`: a new function
    /// sharing the same body, whose closure is a fresh environment wrapping
    /// the original one with `this` bound. Used when a method is looked up
    /// off an instance via `Get`.
    pub fn bind(&self, instance: Rc<RefCell<LoxInstance>>) -> LoxFunction {
        let environment = Environment::new_enclosed(Rc::clone(&self.closure));
        environment
            .borrow_mut()
            .define("this", Value::Instance(instance));
        LoxFunction {
            declaration: Rc::clone(&self.declaration),
            closure: environment,
            is_initializer: self.is_initializer,
        }
    }
}

impl Callable for LoxFunction {
    fn arity(&self) -> usize {
        self.declaration.params.len()
    }

    fn call(&self, interpreter: &mut Interpreter, args: Vec<Value>) -> Result<Value, RuntimeError> {
        let environment = Environment::new_enclosed(Rc::clone(&self.closure));
        for (param, arg) in self.declaration.params.iter().zip(args) {
            environment.borrow_mut().define(&param.lexeme, arg);
        }

        let result = interpreter
            .execute_block(&self.declaration.body, environment)
            .map_err(|unwind| match unwind {
                crate::interpreter::Unwind::Error(error) => error,
                crate::interpreter::Unwind::Return(_) => {
                    unreachable!("execute_block resolves a Return signal to Ok before returning")
                }
            });

        if self.is_initializer {
            result?;
            return Ok(Environment::get_at(&self.closure, 0, "this"));
        }

        result
    }

    fn name(&self) -> &str {
        &self.declaration.name.lexeme
    }
}

/// A class: a name and its method table, shared by every instance. Classes
/// are themselves callable — calling one constructs a new [`LoxInstance`]
/// and, if an `init` method is defined, runs it against the new instance.
#[derive(Debug)]
pub struct LoxClass {
    pub name: String,
    methods: HashMap<String, Rc<LoxFunction>>,
}

impl LoxClass {
    pub fn new(name: String, methods: HashMap<String, Rc<LoxFunction>>) -> Self {
        LoxClass { name, methods }
    }

    pub fn find_method(&self, name: &str) -> Option<Rc<LoxFunction>> {
        self.methods.get(name).cloned()
    }
}

impl LoxClass {
    /// The constructor arity: an `init` method's arity, or zero if the
    /// class defines none.
    pub fn arity(&self) -> usize {
        self.find_method("init").map_or(0, |init| init.arity())
    }
}

// `LoxClass` is not itself a `Callable`: constructing an instance needs the
// `Rc<LoxClass>` the class is stored behind (to hand to the new
// `LoxInstance`), which `&self` alone can't produce. Calling a class is
// handled directly in `interpreter::expr` by matching `Value::Class`.

/// A runtime object produced by instantiating a [`LoxClass`]. Fields are
/// dynamic: any name can be set on an instance regardless of its class.
#[derive(Debug)]
pub struct LoxInstance {
    pub class: Rc<LoxClass>,
    fields: HashMap<String, Value>,
}

impl LoxInstance {
    pub fn new(class: Rc<LoxClass>) -> Self {
        LoxInstance {
            class,
            fields: HashMap::new(),
        }
    }

    /// Looks up `name` as a field first, falling back to a bound method.
    ///
    /// # Errors
    ///
    /// Returns a runtime error if neither a field nor a method named `name`
    /// exists on this instance's class.
    pub fn get(
        instance: &Rc<RefCell<LoxInstance>>,
        name: &Token,
    ) -> Result<Value, RuntimeError> {
        if let Some(value) = instance.borrow().fields.get(&name.lexeme).cloned() {
            return Ok(value);
        }

        if let Some(method) = instance.borrow().class.find_method(&name.lexeme) {
            let bound = method.bind(Rc::clone(instance));
            return Ok(Value::Callable(Rc::new(bound)));
        }

        Err(RuntimeError::new(
            name.clone(),
            format!("Undefined property '{}'.", name.lexeme),
        ))
    }

    pub fn set(&mut self, name: &Token, value: Value) {
        self.fields.insert(name.lexeme.clone(), value);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truthiness() {
        assert!(!Value::Nil.is_truthy());
        assert!(!Value::Bool(false).is_truthy());
        assert!(Value::Bool(true).is_truthy());
        assert!(Value::Number(0.0).is_truthy());
        assert!(Value::Str(String::new()).is_truthy());
    }

    #[test]
    fn test_stringify_strips_trailing_integral_dot_zero() {
        assert_eq!(Value::Number(3.0).stringify(), "3");
        assert_eq!(Value::Number(3.5).stringify(), "3.5");
        assert_eq!(Value::Nil.stringify(), "nil");
    }

    #[test]
    fn test_equality_is_structural_on_primitives() {
        assert_eq!(Value::Number(1.0), Value::Number(1.0));
        assert_eq!(Value::Str("a".to_string()), Value::Str("a".to_string()));
        assert_ne!(Value::Number(1.0), Value::Bool(true));
    }

    #[test]
    fn test_equality_is_identity_based_on_instances() {
        let class = Rc::new(LoxClass::new("C".to_string(), HashMap::new()));
        let a = Rc::new(RefCell::new(LoxInstance::new(Rc::clone(&class))));
        let b = Rc::new(RefCell::new(LoxInstance::new(Rc::clone(&class))));
        assert_eq!(Value::Instance(Rc::clone(&a)), Value::Instance(Rc::clone(&a)));
        assert_ne!(Value::Instance(a), Value::Instance(b));
    }

    #[test]
    fn test_instance_fields_are_dynamic() {
        let class = Rc::new(LoxClass::new("C".to_string(), HashMap::new()));
        let instance = Rc::new(RefCell::new(LoxInstance::new(class)));
        instance
            .borrow_mut()
            .set(&Token::new(crate::token::TokenKind::Identifier, "x", 1), Value::Number(1.0));
        let got = LoxInstance::get(&instance, &Token::new(crate::token::TokenKind::Identifier, "x", 1));
        assert_eq!(got, Ok(Value::Number(1.0)));
    }
}

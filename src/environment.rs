//! The runtime environment chain: a mutable name-to-value mapping with an
//! optional parent link.
//!
//! Environments are the interpreter's sole mutable structure. A function's
//! closure environment is shared with every call frame derived from it, and
//! a later rebinding of an outer variable is immediately visible through any
//! live reference to it — there is no copy-on-write and no snapshotting.
//! `Rc<RefCell<_>>` is the ownership model used throughout: environments and
//! the callables that close over them form a genuinely shared, potentially
//! cyclic graph, which rules out exclusive ownership.

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use crate::token::Token;
use crate::value::Value;

/// A scoped name-to-value binding frame.
pub struct Environment {
    values: HashMap<String, Value>,
    parent: Option<Rc<RefCell<Environment>>>,
}

impl Environment {
    /// Creates a new root environment with no parent (the globals frame).
    pub fn new_global() -> Rc<RefCell<Environment>> {
        Rc::new(RefCell::new(Environment {
            values: HashMap::new(),
            parent: None,
        }))
    }

    /// Creates a new environment whose parent is `enclosing` (a block or
    /// function-call frame).
    pub fn new_enclosed(enclosing: Rc<RefCell<Environment>>) -> Rc<RefCell<Environment>> {
        log::trace!("environment created");
        Rc::new(RefCell::new(Environment {
            values: HashMap::new(),
            parent: Some(enclosing),
        }))
    }

    /// Inserts or overwrites `name` in this environment only.
    pub fn define(&mut self, name: &str, value: Value) {
        self.values.insert(name.to_string(), value);
    }

    fn ancestor(env: &Rc<RefCell<Environment>>, depth: usize) -> Rc<RefCell<Environment>> {
        let mut current = Rc::clone(env);
        for _ in 0..depth {
            let parent = current
                .borrow()
                .parent
                .clone()
                .expect("resolver-recorded depth must not exceed the environment chain length");
            current = parent;
        }
        current
    }

    /// Follows `depth` parent links from `env`, then fetches `name`.
    ///
    /// The resolver guarantees the binding's presence at this exact depth;
    /// absence here is a bug in the resolver or the interpreter, not a
    /// user-facing error.
    pub fn get_at(env: &Rc<RefCell<Environment>>, depth: usize, name: &str) -> Value {
        Environment::ancestor(env, depth)
            .borrow()
            .values
            .get(name)
            .cloned()
            .unwrap_or_else(|| panic!("resolved variable '{name}' missing at depth {depth}"))
    }

    /// Follows `depth` parent links from `env`, then overwrites `name`.
    pub fn assign_at(env: &Rc<RefCell<Environment>>, depth: usize, name: &str, value: Value) {
        Environment::ancestor(env, depth)
            .borrow_mut()
            .values
            .insert(name.to_string(), value);
    }

    /// Reads `name` from the root (globals) environment.
    ///
    /// # Errors
    ///
    /// Returns a message suitable for a runtime error if `name` is unbound.
    pub fn get_global(globals: &Rc<RefCell<Environment>>, token: &Token) -> Result<Value, String> {
        globals
            .borrow()
            .values
            .get(&token.lexeme)
            .cloned()
            .ok_or_else(|| format!("Undefined variable '{}'.", token.lexeme))
    }

    /// Overwrites `name` in the root (globals) environment.
    ///
    /// # Errors
    ///
    /// Returns a message suitable for a runtime error if `name` is unbound
    /// (assignment never implicitly creates a global).
    pub fn assign_global(
        globals: &Rc<RefCell<Environment>>,
        token: &Token,
        value: Value,
    ) -> Result<(), String> {
        let mut globals = globals.borrow_mut();
        if globals.values.contains_key(&token.lexeme) {
            globals.values.insert(token.lexeme.clone(), value);
            Ok(())
        } else {
            Err(format!("Undefined variable '{}'.", token.lexeme))
        }
    }
}

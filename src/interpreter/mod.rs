//! Tree-walking evaluation against a chain of lexical environments.
//!
//! # Overview
//!
//! The final pipeline stage: walks the statement list produced by the
//! parser, using the resolver's [`Locals`](crate::resolver::Locals) table
//! to jump straight to the owning environment for every variable reference
//! instead of re-deriving scope depth at runtime. A single statement at a
//! time executes against [`Interpreter::environment`], the current
//! environment pointer; blocks push a fresh child environment and restore
//! the previous one on every exit path, including an early `return` or a
//! [`RuntimeError`].
//!
//! # Module Structure
//!
//! - [`error`] - [`RuntimeError`], the single runtime failure kind
//! - `expr` - Expression evaluation
//! - `stmt` - Statement execution and the block/function-call environment dance
//! - `native` - Host-provided builtins installed into globals
//!
//! # See Also
//!
//! * [`crate::resolver`] - Produces the side-table this stage consumes
//! * [`crate::environment`] - The mutable environment chain evaluated against
//! * [`crate::value`] - The runtime value representation

mod error;
mod expr;
mod native;
mod stmt;


pub use error::RuntimeError;

use std::cell::RefCell;
use std::rc::Rc;

use crate::ast::Stmt;
use crate::diagnostics::Diagnostics;
use crate::environment::Environment;
use crate::resolver::Locals;
use crate::value::Value;

/// Non-local control flow threaded through statement execution's `Result`
/// error channel: an early `return` unwinds exactly like a runtime error
/// until it reaches the call frame that catches it, at which point it
/// becomes that call's ordinary result.
pub(crate) enum Unwind {
    Error(RuntimeError),
    Return(Value),
}

impl From<RuntimeError> for Unwind {
    fn from(error: RuntimeError) -> Self {
        Unwind::Error(error)
    }
}

/// Owns the environment chain and resolver side-table for one interpreter
/// session (one REPL invocation or one file run).
pub struct Interpreter {
    globals: Rc<RefCell<Environment>>,
    environment: Rc<RefCell<Environment>>,
    locals: Locals,
}

impl Interpreter {
    /// Creates an interpreter with a fresh globals environment pre-populated
    /// with the native builtins, resolved against `locals`.
    pub fn new(locals: Locals) -> Self {
        let globals = Environment::new_global();
        globals
            .borrow_mut()
            .define("clock", Value::Callable(Rc::new(native::Clock)));

        Interpreter {
            environment: Rc::clone(&globals),
            globals,
            locals,
        }
    }

    /// Merges additional resolver output into this interpreter's side-table.
    ///
    /// Used by the REPL: each line is resolved independently (fresh
    /// [`crate::ast::ExprId`]s every time), but all lines share one
    /// interpreter session, so each line's freshly resolved locals are
    /// folded into the running table rather than replacing it.
    pub fn extend_locals(&mut self, locals: Locals) {
        self.locals.extend(locals);
    }

    /// Executes `statements` in order against the current environment.
    ///
    /// Stops at the first runtime error: it is reported to `diagnostics`
    /// and no further statement in this call runs (already-executed
    /// statements' side effects, e.g. prior `print`s, stand). A `return`
    /// reaching here (top-level) is a resolver bug, never a user error —
    /// the resolver rejects top-level `return` before this stage runs.
    pub fn interpret(&mut self, statements: &[Stmt], diagnostics: &mut Diagnostics) {
        for statement in statements {
            match self.execute(statement) {
                Ok(()) => {}
                Err(Unwind::Error(error)) => {
                    diagnostics.runtime_error(&error);
                    return;
                }
                Err(Unwind::Return(_)) => {
                    unreachable!("resolver rejects top-level return before interpretation")
                }
            }
        }
    }
}

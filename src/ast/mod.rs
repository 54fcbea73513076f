//! Abstract Syntax Tree definitions for the interpreted language.
//!
//! This module defines the data structures that represent parsed programs.
//! The AST is produced by the [`crate::parser`], annotated by the
//! [`crate::resolver`], and consumed by the [`crate::interpreter`].
//!
//! # Structure
//!
//! - [`Expr`] / [`ExprKind`] - expressions, each carrying a stable [`ExprId`]
//!   so the resolver can key its side-table on node identity rather than
//!   structural equality.
//! - [`Stmt`] - statements; a program is simply `Vec<Stmt>`.
//! - [`FunctionDecl`] - the shared shape of a named function or method body,
//!   wrapped in `Rc` so closures and bound methods can cheaply share it.
//!
//! # Module Structure
//!
//! - [`expr`] - Expression nodes and kinds
//! - [`stmt`] - Statement nodes and the function-declaration shape
//!
//! # See Also
//!
//! * [`crate::parser`] - Produces the AST from tokens
//! * [`crate::resolver`] - Annotates the AST with scope-resolution depths
//! * [`crate::interpreter`] - Evaluates the AST

mod expr;
mod stmt;

pub use expr::{Expr, ExprId, ExprKind, LiteralValue};
pub use stmt::{FunctionDecl, Stmt};

//! Static lexical-scope resolution.
//!
//! # Overview
//!
//! A single forward pass over the parsed statement list that tracks a stack
//! of block scopes (`Vec<HashMap<String, bool>>`, innermost last) and, for
//! every variable reference, records how many scopes out from its use site
//! the binding lives. The interpreter uses this side-table to jump straight
//! to the owning environment instead of walking the chain doing name
//! lookups at every level, and — more importantly — to make each lexical
//! scope's behavior match its runtime behavior exactly, for every input,
//! including the pathological ones (self-referential initializers, stale
//! closures, redeclaration).
//!
//! The table is keyed on [`ExprId`](crate::ast::ExprId), the identity each
//! expression node is stamped with at construction, not on structural
//! equality: two syntactically identical variable reads at different call
//! sites must resolve independently.
//!
//! # See Also
//!
//! * [`crate::ast`] - The tree this pass walks
//! * [`crate::interpreter`] - The consumer of the resolution table produced here

use std::collections::HashMap;

use crate::ast::{Expr, ExprId, ExprKind, FunctionDecl, Stmt};
use crate::diagnostics::Diagnostics;
use crate::token::Token;

/// Side-table mapping a variable-reference expression to the number of
/// enclosing scopes to traverse at runtime to find its binding. An
/// expression absent from this table refers to a global.
pub type Locals = HashMap<ExprId, usize>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum FunctionType {
    None,
    Function,
    Method,
    Initializer,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ClassType {
    None,
    Class,
}

/// Walks a statement list once, producing a [`Locals`] table and reporting
/// semantic errors (duplicate local declarations, reads of a variable still
/// being initialized, misplaced `return`/`this`) to the shared diagnostic
/// sink.
pub struct Resolver<'d> {
    scopes: Vec<HashMap<String, bool>>,
    locals: Locals,
    current_function: FunctionType,
    current_class: ClassType,
    diagnostics: &'d mut Diagnostics,
}

impl<'d> Resolver<'d> {
    pub fn new(diagnostics: &'d mut Diagnostics) -> Self {
        Resolver {
            scopes: Vec::new(),
            locals: HashMap::new(),
            current_function: FunctionType::None,
            current_class: ClassType::None,
            diagnostics,
        }
    }

    /// Resolves a whole program, consuming `self` and returning the
    /// completed side-table.
    pub fn resolve(mut self, statements: &[Stmt]) -> Locals {
        self.resolve_stmts(statements);
        log::debug!("resolver produced {} local bindings", self.locals.len());
        self.locals
    }

    fn resolve_stmts(&mut self, statements: &[Stmt]) {
        for statement in statements {
            self.resolve_stmt(statement);
        }
    }

    fn begin_scope(&mut self) {
        self.scopes.push(HashMap::new());
        log::trace!("resolver entered scope, depth {}", self.scopes.len());
    }

    fn end_scope(&mut self) {
        self.scopes.pop();
        log::trace!("resolver exited scope, depth {}", self.scopes.len());
    }

    /// Adds `name` to the innermost scope, marked not-yet-ready. A name
    /// already present in that scope is a redeclaration error (global scope
    /// is exempt: the resolver does not track it at all).
    fn declare(&mut self, name: &Token) {
        if let Some(scope) = self.scopes.last_mut() {
            if scope.contains_key(&name.lexeme) {
                self.diagnostics
                    .error_at(name, "Already a variable with this name in this scope.");
            }
            scope.insert(name.lexeme.clone(), false);
        }
    }

    /// Marks `name` ready in the innermost scope, once its initializer (if
    /// any) has been resolved.
    fn define(&mut self, name: &Token) {
        if let Some(scope) = self.scopes.last_mut() {
            scope.insert(name.lexeme.clone(), true);
        }
    }

    /// Searches the scope stack innermost-out for `name`, recording the
    /// depth at which it's found. A miss leaves the expression absent from
    /// the table, i.e. a global reference.
    fn resolve_local(&mut self, expr_id: ExprId, name: &Token) {
        for (depth, scope) in self.scopes.iter().rev().enumerate() {
            if scope.contains_key(&name.lexeme) {
                self.locals.insert(expr_id, depth);
                return;
            }
        }
    }

    fn resolve_function(&mut self, decl: &FunctionDecl, kind: FunctionType) {
        let enclosing_function = self.current_function;
        self.current_function = kind;

        self.begin_scope();
        for param in &decl.params {
            self.declare(param);
            self.define(param);
        }
        self.resolve_stmts(&decl.body);
        self.end_scope();

        self.current_function = enclosing_function;
    }

    fn resolve_stmt(&mut self, stmt: &Stmt) {
        match stmt {
            Stmt::Expression(expr) => self.resolve_expr(expr),
            Stmt::Print(expr) => self.resolve_expr(expr),
            Stmt::Var { name, initializer } => {
                self.declare(name);
                if let Some(initializer) = initializer {
                    self.resolve_expr(initializer);
                }
                self.define(name);
            }
            Stmt::Block(statements) => {
                self.begin_scope();
                self.resolve_stmts(statements);
                self.end_scope();
            }
            Stmt::If {
                condition,
                then_branch,
                else_branch,
            } => {
                self.resolve_expr(condition);
                self.resolve_stmt(then_branch);
                if let Some(else_branch) = else_branch {
                    self.resolve_stmt(else_branch);
                }
            }
            Stmt::While { condition, body } => {
                self.resolve_expr(condition);
                self.resolve_stmt(body);
            }
            Stmt::FunctionDecl(decl) => {
                // Eagerly defined, unlike a plain variable, so the body can
                // recurse into the function's own name.
                self.declare(&decl.name);
                self.define(&decl.name);
                self.resolve_function(decl, FunctionType::Function);
            }
            Stmt::Return { keyword, value } => {
                if self.current_function == FunctionType::None {
                    self.diagnostics
                        .error_at(keyword, "Can't return from top-level code.");
                }
                if let Some(value) = value {
                    if self.current_function == FunctionType::Initializer {
                        self.diagnostics
                            .error_at(keyword, "Can't return a value from an initializer.");
                    }
                    self.resolve_expr(value);
                }
            }
            Stmt::ClassDecl { name, methods } => {
                let enclosing_class = self.current_class;
                self.current_class = ClassType::Class;

                self.declare(name);
                self.define(name);

                self.begin_scope();
                self.scopes
                    .last_mut()
                    .expect("scope just pushed by begin_scope")
                    .insert("this".to_string(), true);

                for method in methods {
                    let kind = if method.name.lexeme == "init" {
                        FunctionType::Initializer
                    } else {
                        FunctionType::Method
                    };
                    self.resolve_function(method, kind);
                }

                self.end_scope();
                self.current_class = enclosing_class;
            }
        }
    }

    fn resolve_expr(&mut self, expr: &Expr) {
        match &expr.kind {
            ExprKind::Literal(_) => {}
            ExprKind::Unary { right, .. } => self.resolve_expr(right),
            ExprKind::Binary { left, right, .. } | ExprKind::Logical { left, right, .. } => {
                self.resolve_expr(left);
                self.resolve_expr(right);
            }
            ExprKind::Grouping(inner) => self.resolve_expr(inner),
            ExprKind::Variable(name) => {
                if let Some(scope) = self.scopes.last() {
                    if scope.get(&name.lexeme) == Some(&false) {
                        self.diagnostics.error_at(
                            name,
                            "Can't read local variable in its own initializer.",
                        );
                    }
                }
                self.resolve_local(expr.id, name);
            }
            ExprKind::Assign { name, value } => {
                self.resolve_expr(value);
                self.resolve_local(expr.id, name);
            }
            ExprKind::Call { callee, args, .. } => {
                self.resolve_expr(callee);
                for arg in args {
                    self.resolve_expr(arg);
                }
            }
            ExprKind::Get { object, .. } => self.resolve_expr(object),
            ExprKind::Set { object, value, .. } => {
                self.resolve_expr(value);
                self.resolve_expr(object);
            }
            ExprKind::This(keyword) => {
                if self.current_class == ClassType::None {
                    self.diagnostics
                        .error_at(keyword, "Can't use 'this' outside of a class.");
                } else {
                    self.resolve_local(expr.id, keyword);
                }
            }
        }
    }
}

//! A tree-walking interpreter for a small dynamically-typed scripting
//! language.
//!
//! The pipeline is strictly staged and unidirectional: lexical analysis,
//! recursive-descent parsing with panic-mode error recovery, static
//! lexical-scope resolution, then tree-walking evaluation.
//!
//! # Modules
//!
//! - [`token`] - Token kinds and the literal/lexeme/line they carry
//! - [`lexer`] - Scans source text into a token stream
//! - [`ast`] - Expression and statement tree definitions
//! - [`parser`] - Recursive-descent parsing with panic-mode recovery
//! - [`resolver`] - Static lexical-scope analysis producing a resolution side-table
//! - [`environment`] - The runtime environment chain
//! - [`value`] - Runtime value representation and callables
//! - [`interpreter`] - Tree-walking statement execution and expression evaluation
//! - [`diagnostics`] - The shared error-reporting sink
//! - [`driver`] - Ties the pipeline stages together for the REPL and file runner
//!
//! # Example
//!
//! ```
//! use rook::diagnostics::Diagnostics;
//! use rook::driver;
//!
//! let mut diagnostics = Diagnostics::new();
//! driver::run_source("print 1 + 2;", &mut diagnostics);
//! assert!(!diagnostics.had_error());
//! assert!(!diagnostics.had_runtime_error());
//! ```

pub mod ast;
pub mod diagnostics;
pub mod driver;
pub mod environment;
pub mod interpreter;
pub mod lexer;
pub mod parser;
pub mod resolver;
pub mod token;
pub mod value;

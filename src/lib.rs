#![forbid(unsafe_code)]
//! Tarn Programming Language Front End
//!
//! Tarn is a small procedural language with C-like braces, `fn`/`extern`
//! declarations, `:=` declaration vs `=` assignment, and a directory-based
//! module system (`.tn` source files). This crate provides the front end:
//! lexer, recursive-descent parser, scope construction, and module-tree
//! assembly. Later compilation stages live elsewhere.
//!
//! ## Panic Policy
//!
//! This codebase follows explicit error handling:
//!
//! - **Production code**: Use `Result` or `Option` with `?` / `ok_or` / `map_err`.
//!   Parsing functions report a positioned diagnostic into the shared
//!   [`Diagnostics`] collector and abort the current file with the
//!   [`ErrorReported`] sentinel instead of panicking on bad input.
//!
//! - **Test code**: `.unwrap()` and `.expect()` are acceptable in tests.

pub mod cli;
pub mod frontend;

pub use frontend::ast;
pub use frontend::diagnostics;
pub use frontend::diagnostics::{Diagnostic, Diagnostics, ErrorReported};
pub use frontend::lexer;
pub use frontend::module::{BuildError, ModuleBuilder};
pub use frontend::parser;
pub use frontend::scope::{ScopeArena, ScopeError, ScopeId};

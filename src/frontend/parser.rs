//! Parser for the Tarn programming language
//!
//! Converts a token stream into top-level declarations by recursive descent,
//! with a precedence ladder for expressions. Top-level declarations bind
//! their symbols in the surrounding module scope as they are parsed.
//!
//! ## Examples
//!
//! ```rust,no_run
//! use std::path::Path;
//! use tarn::frontend::{diagnostics::Diagnostics, lexer, parser, scope::ScopeArena};
//!
//! let source = "fn answer() i32 { return 42; }";
//! let path = Path::new("answer.tn");
//! let mut diagnostics = Diagnostics::new();
//! let tokens = lexer::lex(path, source, &mut diagnostics).unwrap();
//! let mut scopes = ScopeArena::new();
//! let module_scope = scopes.universe();
//! let decls = parser::parse(&tokens, path, source, &mut scopes, module_scope, &mut diagnostics).unwrap();
//! assert_eq!(decls.len(), 1);
//! ```

use std::path::Path;

use crate::frontend::ast::*;
use crate::frontend::diagnostics::{Diagnostic, Diagnostics, ErrorReported, line_col};
use crate::frontend::lexer::{Token, TokenKind};
use crate::frontend::scope::{ScopeArena, ScopeError, ScopeId, Symbol, SymbolKind};

// NOTE: This module is split across multiple files using `include!` to keep all parser
// methods in the same Rust module (preserving privacy + call patterns) while avoiding
// a single large source file.

include!("parser/core.rs");
include!("parser/helpers.rs");
include!("parser/decl.rs");
include!("parser/types.rs");
include!("parser/stmts.rs");
include!("parser/expr.rs");
include!("parser/api.rs");
include!("parser/tests.rs");

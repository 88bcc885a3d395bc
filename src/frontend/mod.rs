//! Tarn Compiler Frontend
//!
//! This module contains all frontend components:
//! - `lexer`: tokenization of source code
//! - `parser`: parsing tokens into AST
//! - `ast`: abstract syntax tree definitions
//! - `scope`: chained symbol tables
//! - `diagnostics`: positioned error collection
//! - `module`: module-tree assembly from a source directory

pub mod ast;
pub mod diagnostics;
pub mod lexer;
pub mod module;
pub mod parser;
pub mod scope;

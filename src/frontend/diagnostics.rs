//! Positioned diagnostics.
//!
//! All lexer and parser errors flow through one [`Diagnostics`] collector per
//! build. Reporting returns the [`ErrorReported`] sentinel, so "diagnose then
//! abort the file" is a single expression and an abort without a recorded
//! diagnostic cannot be constructed by accident.

use std::fmt;
use std::path::PathBuf;

/// Marker that a diagnostic describing the failure is already in the
/// collector. Parsing functions return `Err(ErrorReported)` to unwind out of
/// the current file without restating the failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ErrorReported;

/// One positioned error message. Line and column are 1-based.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    pub path: PathBuf,
    pub line: usize,
    pub column: usize,
    pub message: String,
}

impl Diagnostic {
    pub fn new(path: PathBuf, line: usize, column: usize, message: String) -> Self {
        Self { path, line, column, message }
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}:{}:{}: {}",
            self.path.display(),
            self.line,
            self.column,
            self.message
        )
    }
}

/// Append-only diagnostic collector. One per build, passed `&mut` into every
/// lex and parse call.
#[derive(Debug, Default)]
pub struct Diagnostics {
    saved: Vec<Diagnostic>,
}

impl Diagnostics {
    pub fn new() -> Self {
        Self::default()
    }

    /// Saves `diagnostic` and hands back the sentinel for the caller to
    /// return.
    pub fn report_and_save(&mut self, diagnostic: Diagnostic) -> ErrorReported {
        self.saved.push(diagnostic);
        ErrorReported
    }

    pub fn iter(&self) -> impl Iterator<Item = &Diagnostic> {
        self.saved.iter()
    }

    pub fn len(&self) -> usize {
        self.saved.len()
    }

    pub fn is_empty(&self) -> bool {
        self.saved.is_empty()
    }
}

/// 1-based line and column of a byte offset within `source`.
pub fn line_col(source: &str, offset: usize) -> (usize, usize) {
    let mut line = 1;
    let mut column = 1;
    for (i, c) in source.char_indices() {
        if i >= offset {
            break;
        }
        if c == '\n' {
            line += 1;
            column = 1;
        } else {
            column += 1;
        }
    }
    (line, column)
}

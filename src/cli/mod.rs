//! CLI module for the Tarn front end
//!
//! ## Usage
//!
//! - `tarn <path>` - Check a `.tn` file or a program directory
//! - `tarn --lex <file>` - Tokenize only (debug)
//! - `tarn --parse <file>` - Parse only and dump the AST (debug)
//!
//! ## Design
//!
//! The CLI uses clap for argument parsing with derive macros.
//! Command functions return `CliResult<T>` instead of calling `process::exit`.
//! Only the top-level `run()` function handles errors and exits.

// Enforce explicit error handling - no panicking in production code
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]

pub mod commands;

use std::fmt;
use std::path::PathBuf;
use std::process;

use clap::Parser;

// ============================================================================
// CLI Error handling
// ============================================================================

/// Exit code for CLI operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExitCode(pub i32);

impl ExitCode {
    pub const SUCCESS: ExitCode = ExitCode(0);
    pub const FAILURE: ExitCode = ExitCode(1);
}

/// Error type for CLI operations.
///
/// Contains a user-facing message and an exit code. The CLI entry point
/// catches these errors, prints the message, and exits with the code.
#[derive(Debug)]
pub struct CliError {
    /// User-facing error message (already formatted for display)
    pub message: String,
    /// Exit code to return to the shell
    pub exit_code: ExitCode,
}

impl CliError {
    /// Create a new CLI error with a message and exit code.
    pub fn new(message: impl Into<String>, exit_code: ExitCode) -> Self {
        Self {
            message: message.into(),
            exit_code,
        }
    }

    /// Create a failure error (exit code 1).
    pub fn failure(message: impl Into<String>) -> Self {
        Self::new(message, ExitCode::FAILURE)
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for CliError {}

/// Result type for CLI operations.
pub type CliResult<T> = Result<T, CliError>;

const VERSION: &str = env!("CARGO_PKG_VERSION");

// ============================================================================
// Clap CLI definition
// ============================================================================

/// The Tarn programming language front end
#[derive(Parser, Debug)]
#[command(name = "tarn")]
#[command(version = VERSION)]
#[command(about = "The Tarn programming language front end", long_about = None)]
pub struct Cli {
    /// File or directory to check (default action)
    #[arg(value_name = "PATH")]
    pub path: Option<PathBuf>,

    // Debug/development flags
    /// Tokenize only (debug)
    #[arg(long = "lex", value_name = "FILE", conflicts_with = "path")]
    pub lex_file: Option<PathBuf>,

    /// Parse only and dump the AST (debug)
    #[arg(long = "parse", value_name = "FILE", conflicts_with = "path")]
    pub parse_file: Option<PathBuf>,
}

/// CLI entry point: parse arguments, dispatch, print errors, exit.
pub fn run() {
    let cli = Cli::parse();

    let result = if let Some(file) = cli.lex_file {
        commands::lex(&file)
    } else if let Some(file) = cli.parse_file {
        commands::parse(&file)
    } else if let Some(path) = cli.path {
        commands::check(&path)
    } else {
        eprintln!("error: no input given; see --help");
        process::exit(ExitCode::FAILURE.0);
    };

    if let Err(err) = result {
        eprintln!("{err}");
        process::exit(err.exit_code.0);
    }
}

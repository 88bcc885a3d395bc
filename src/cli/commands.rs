//! Command implementations for the Tarn CLI.
//!
//! Each command builds its own [`Diagnostics`] collector, prints whatever was
//! collected, and maps failures into [`CliError`] for `run()` to handle.

use std::fs;
use std::path::Path;

use tracing::info;

use super::{CliError, CliResult};
use crate::frontend::ast::Program;
use crate::frontend::diagnostics::Diagnostics;
use crate::frontend::lexer;
use crate::frontend::module::{BuildError, ModuleBuilder};

/// Default action: build the module tree (directory) or a single-file
/// program, printing every collected diagnostic.
pub fn check(path: &Path) -> CliResult<()> {
    let mut diagnostics = Diagnostics::new();
    let builder = ModuleBuilder::new(&mut diagnostics);
    let result = if path.is_dir() {
        builder.build(path)
    } else {
        builder.build_file(path)
    };

    for diagnostic in diagnostics.iter() {
        eprintln!("{diagnostic}");
    }

    match result {
        Ok(program) => {
            let (files, modules) = count(&program);
            info!(files, modules, "check passed");
            println!("checked {files} file(s) in {modules} module(s)");
            Ok(())
        }
        Err(BuildError::Syntax) => Err(CliError::failure(format!(
            "found {} error(s)",
            diagnostics.len()
        ))),
        Err(err) => Err(fatal(err)),
    }
}

/// `--lex`: tokenize one file and dump the token stream.
pub fn lex(path: &Path) -> CliResult<()> {
    let source = fs::read_to_string(path)
        .map_err(|err| CliError::failure(format!("failed to read {}: {err}", path.display())))?;

    let mut diagnostics = Diagnostics::new();
    match lexer::lex(path, &source, &mut diagnostics) {
        Ok(tokens) => {
            for token in &tokens {
                println!("{:?} @ {}..{}", token.kind, token.span.start, token.span.end);
            }
            Ok(())
        }
        Err(_) => {
            for diagnostic in diagnostics.iter() {
                eprintln!("{diagnostic}");
            }
            Err(CliError::failure(format!("found {} error(s)", diagnostics.len())))
        }
    }
}

/// `--parse`: parse one file and dump the AST.
pub fn parse(path: &Path) -> CliResult<()> {
    let mut diagnostics = Diagnostics::new();
    let result = ModuleBuilder::new(&mut diagnostics).build_file(path);

    for diagnostic in diagnostics.iter() {
        eprintln!("{diagnostic}");
    }

    match result {
        Ok(program) => {
            println!("{:#?}", program.root);
            Ok(())
        }
        Err(BuildError::Syntax) => Err(CliError::failure(format!(
            "found {} error(s)",
            diagnostics.len()
        ))),
        Err(err) => Err(fatal(err)),
    }
}

/// Render a fatal (filesystem) build error through miette so the io cause
/// chain is visible.
fn fatal(err: BuildError) -> CliError {
    let report = miette::Report::new(err);
    CliError::failure(format!("{report:?}"))
}

fn count(program: &Program) -> (usize, usize) {
    fn visit(module: &crate::frontend::ast::Module, files: &mut usize, modules: &mut usize) {
        *modules += 1;
        *files += module.files.len();
        for child in &module.modules {
            visit(child, files, modules);
        }
    }
    let (mut files, mut modules) = (0, 0);
    visit(&program.root, &mut files, &mut modules);
    (files, modules)
}

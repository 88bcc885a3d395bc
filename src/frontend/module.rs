//! Module-tree assembly.
//!
//! A Tarn program is a directory tree: every directory is a module named
//! after itself, every `.tn` file inside contributes declarations to that
//! module, and nested directories become nested modules with scopes chained
//! under their parent module's scope.
//!
//! Filesystem failures are fatal ([`BuildError`]); malformed source is not
//! fatal here, it surfaces as diagnostics in the shared collector and aborts
//! the build with [`BuildError::Syntax`].

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use miette::Diagnostic;
use thiserror::Error;
use tracing::debug;

use crate::frontend::ast::{File, Ident, Module, Program};
use crate::frontend::diagnostics::{Diagnostics, ErrorReported};
use crate::frontend::lexer;
use crate::frontend::parser;
use crate::frontend::scope::{ScopeArena, ScopeId, Symbol};

/// Extension of Tarn source files. Everything else in a program directory is
/// ignored.
pub const SOURCE_EXTENSION: &str = "tn";

#[derive(Debug, Error, Diagnostic)]
pub enum BuildError {
    #[error("failed to read directory {}", path.display())]
    ReadDir {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("failed to read {}", path.display())]
    ReadFile {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    /// Syntax errors were collected; the details live in the [`Diagnostics`]
    /// collector, not here.
    #[error("syntax errors were reported")]
    Syntax,
}

impl From<ErrorReported> for BuildError {
    fn from(_: ErrorReported) -> Self {
        BuildError::Syntax
    }
}

/// Builds a [`Program`] from source on disk. Owns the scope arena for the
/// build; diagnostics accumulate in the caller's collector.
pub struct ModuleBuilder<'a> {
    scopes: ScopeArena<Symbol>,
    diagnostics: &'a mut Diagnostics,
}

impl<'a> ModuleBuilder<'a> {
    pub fn new(diagnostics: &'a mut Diagnostics) -> Self {
        Self { scopes: ScopeArena::new(), diagnostics }
    }

    /// Walks the directory tree rooted at `root` and assembles the module
    /// tree. The root module's scope is the parent-less root of the scope
    /// chain. A syntax error in any file aborts the whole build.
    #[tracing::instrument(skip(self), fields(root = %root.display()))]
    pub fn build(mut self, root: &Path) -> Result<Program, BuildError> {
        let scope = self.scopes.universe();
        let mut module = Module {
            name: module_name(root),
            scope,
            is_root: true,
            modules: Vec::new(),
            files: Vec::new(),
        };
        self.walk(root, &mut module)?;
        Ok(Program { root: module, scopes: self.scopes })
    }

    /// Parses a single `.tn` file as a whole program, wrapping it in a
    /// synthesized root module named after the file's directory.
    #[tracing::instrument(skip(self), fields(file = %path.display()))]
    pub fn build_file(mut self, path: &Path) -> Result<Program, BuildError> {
        let universe = self.scopes.universe();
        let scope = self.scopes.child(universe);
        let file = self.parse_file(path, scope)?;
        let name = path
            .parent()
            .map(module_name)
            .filter(|name| !name.is_empty())
            .unwrap_or_else(|| "main".to_string());
        let module = Module {
            name,
            scope,
            is_root: true,
            modules: Vec::new(),
            files: vec![file],
        };
        Ok(Program { root: module, scopes: self.scopes })
    }

    fn walk(&mut self, dir: &Path, module: &mut Module) -> Result<(), BuildError> {
        let read_dir_err = |source| BuildError::ReadDir { path: dir.to_path_buf(), source };
        let mut entries = fs::read_dir(dir)
            .map_err(read_dir_err)?
            .collect::<Result<Vec<_>, io::Error>>()
            .map_err(read_dir_err)?;
        // Sort by name so module and file order is stable across platforms.
        entries.sort_by_key(|entry| entry.file_name());

        for entry in entries {
            let path = entry.path();
            if path.is_dir() {
                debug!(dir = %path.display(), "entering module directory");
                let scope = self.scopes.child(module.scope);
                let mut child = Module {
                    name: module_name(&path),
                    scope,
                    is_root: false,
                    modules: Vec::new(),
                    files: Vec::new(),
                };
                self.walk(&path, &mut child)?;
                module.modules.push(child);
            } else if path.extension().and_then(|ext| ext.to_str()) == Some(SOURCE_EXTENSION) {
                let file = self.parse_file(&path, module.scope)?;
                module.files.push(file);
            }
        }
        Ok(())
    }

    fn parse_file(&mut self, path: &Path, module_scope: ScopeId) -> Result<File, BuildError> {
        debug!(file = %path.display(), "parsing source file");
        let source = fs::read_to_string(path).map_err(|source| BuildError::ReadFile {
            path: path.to_path_buf(),
            source,
        })?;
        let tokens = lexer::lex(path, &source, self.diagnostics)?;
        let scope = self.scopes.child(module_scope);
        let decls = parser::parse(&tokens, path, &source, &mut self.scopes, module_scope, self.diagnostics)?;
        Ok(File { path: path.to_path_buf(), scope, decls })
    }
}

fn module_name(path: &Path) -> Ident {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_default()
}

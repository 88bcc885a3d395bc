//! Chained symbol tables.
//!
//! All scopes of a build live in a single [`ScopeArena`]; AST nodes refer to
//! them through copyable [`ScopeId`] handles, so the tree never owns its
//! scopes and lookups can walk parent chains without reference cycles.

use std::collections::HashMap;

use thiserror::Error;

use crate::frontend::ast::{Ident, Span};

/// Handle to a scope inside a [`ScopeArena`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ScopeId(usize);

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ScopeError {
    #[error("symbol '{0}' already declared in this scope")]
    DuplicateSymbol(Ident),
    #[error("symbol '{0}' not found in scope")]
    SymbolNotFound(Ident),
}

#[derive(Debug)]
struct ScopeRecord<V> {
    parent: Option<ScopeId>,
    bindings: HashMap<Ident, V>,
}

/// Arena of chained scopes. `V` is whatever a name binds to; the front end
/// binds [`Symbol`] records, tests bind small values directly.
#[derive(Debug)]
pub struct ScopeArena<V> {
    scopes: Vec<ScopeRecord<V>>,
}

impl<V> ScopeArena<V> {
    pub fn new() -> Self {
        Self { scopes: Vec::new() }
    }

    /// Creates a parent-less scope, the root of a chain.
    pub fn universe(&mut self) -> ScopeId {
        self.push(None)
    }

    /// Creates a scope chained under `parent`.
    pub fn child(&mut self, parent: ScopeId) -> ScopeId {
        self.push(Some(parent))
    }

    fn push(&mut self, parent: Option<ScopeId>) -> ScopeId {
        let id = ScopeId(self.scopes.len());
        self.scopes.push(ScopeRecord { parent, bindings: HashMap::new() });
        id
    }

    pub fn parent(&self, scope: ScopeId) -> Option<ScopeId> {
        self.scopes[scope.0].parent
    }

    /// Binds `name` in `scope` only. A name already bound in an ancestor is
    /// shadowed, not rejected; a name already bound locally is an error and
    /// leaves the existing binding untouched.
    pub fn insert(&mut self, scope: ScopeId, name: &str, value: V) -> Result<(), ScopeError> {
        let record = &mut self.scopes[scope.0];
        if record.bindings.contains_key(name) {
            return Err(ScopeError::DuplicateSymbol(name.to_string()));
        }
        record.bindings.insert(name.to_string(), value);
        Ok(())
    }

    /// Resolves `name` starting at `scope` and walking the parent chain.
    pub fn lookup(&self, scope: ScopeId, name: &str) -> Result<&V, ScopeError> {
        let mut current = Some(scope);
        while let Some(id) = current {
            let record = &self.scopes[id.0];
            if let Some(value) = record.bindings.get(name) {
                return Ok(value);
            }
            current = record.parent;
        }
        Err(ScopeError::SymbolNotFound(name.to_string()))
    }

    /// Resolves `name` in `scope` alone, without consulting ancestors.
    pub fn lookup_local(&self, scope: ScopeId, name: &str) -> Option<&V> {
        self.scopes[scope.0].bindings.get(name)
    }

    pub fn len(&self) -> usize {
        self.scopes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.scopes.is_empty()
    }
}

impl<V> Default for ScopeArena<V> {
    fn default() -> Self {
        Self::new()
    }
}

/// What a top-level declaration binds in a module scope.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Symbol {
    pub name: Ident,
    pub kind: SymbolKind,
    pub span: Span,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SymbolKind {
    Function,
}

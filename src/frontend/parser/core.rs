/// Parser state and the top-level parse loop.
///
/// The parser borrows the token stream, the build-wide scope arena, and the
/// shared diagnostics collector. `module_scope` is where top-level
/// declarations bind their symbols; `path` and `source` exist only so
/// diagnostics can carry a position.
pub struct Parser<'a> {
    tokens: &'a [Token],
    pos: usize,
    path: &'a Path,
    source: &'a str,
    scopes: &'a mut ScopeArena<Symbol>,
    module_scope: ScopeId,
    diagnostics: &'a mut Diagnostics,
}

impl<'a> Parser<'a> {
    pub fn new(
        tokens: &'a [Token],
        path: &'a Path,
        source: &'a str,
        scopes: &'a mut ScopeArena<Symbol>,
        module_scope: ScopeId,
        diagnostics: &'a mut Diagnostics,
    ) -> Self {
        Self {
            tokens,
            pos: 0,
            path,
            source,
            scopes,
            module_scope,
            diagnostics,
        }
    }

    /// Parse every top-level declaration in the stream. The first reported
    /// diagnostic aborts the file; there is no recovery point inside a file.
    pub fn parse(mut self) -> Result<Vec<Spanned<Declaration>>, ErrorReported> {
        let mut decls = Vec::new();
        while !self.is_at_end() {
            decls.push(self.declaration()?);
        }
        Ok(decls)
    }
}

/// Public entry points.
///
/// Parse one file's tokens into its top-level declarations. Symbols for the
/// declarations bind in `module_scope`; the first reported diagnostic aborts
/// the file via [`ErrorReported`].
#[tracing::instrument(skip_all, fields(file = %path.display(), tokens = tokens.len()))]
pub fn parse(
    tokens: &[Token],
    path: &Path,
    source: &str,
    scopes: &mut ScopeArena<Symbol>,
    module_scope: ScopeId,
    diagnostics: &mut Diagnostics,
) -> Result<Vec<Spanned<Declaration>>, ErrorReported> {
    Parser::new(tokens, path, source, scopes, module_scope, diagnostics).parse()
}

/// Lex and parse a standalone expression snippet against a fresh scope
/// arena. Intended for tests and tooling.
pub fn parse_expr_from(source: &str, diagnostics: &mut Diagnostics) -> Result<Spanned<Expr>, ErrorReported> {
    let path = Path::new("<expr>");
    let tokens = crate::frontend::lexer::lex(path, source, diagnostics)?;
    let mut scopes = ScopeArena::new();
    let module_scope = scopes.universe();
    let mut parser = Parser::new(&tokens, path, source, &mut scopes, module_scope, diagnostics);
    parser.expression()
}

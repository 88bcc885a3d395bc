/// Token-stream helpers and diagnostic plumbing.
///
/// Low-level primitives used throughout parsing:
/// - Peeking/consuming tokens (`peek`, `peek_next`, `advance`)
/// - Matching / expecting token kinds (`check`, `match_token`, `expect`)
/// - Reporting positioned diagnostics (`report`, `expected`)
impl<'a> Parser<'a> {
    // ========================================================================
    // Helpers
    // ========================================================================

    /// Return `true` if the current token is [`TokenKind::Eof`].
    fn is_at_end(&self) -> bool {
        matches!(self.peek().kind, TokenKind::Eof)
    }

    /// Return the current token without consuming it.
    fn peek(&self) -> &Token {
        &self.tokens[self.pos]
    }

    /// Return the token after the current token without consuming it.
    fn peek_next(&self) -> &Token {
        if self.pos + 1 < self.tokens.len() {
            &self.tokens[self.pos + 1]
        } else {
            &self.tokens[self.tokens.len() - 1]
        }
    }

    /// Advance to the next token and return the token we just consumed.
    fn advance(&mut self) -> &Token {
        if !self.is_at_end() {
            self.pos += 1;
        }
        &self.tokens[self.pos - 1]
    }

    /// Return `true` if the current token matches `kind`.
    ///
    /// Data-bearing tokens (identifiers, literals) compare by variant only;
    /// the payload is ignored.
    fn check(&self, kind: &TokenKind) -> bool {
        std::mem::discriminant(kind) == std::mem::discriminant(&self.peek().kind)
    }

    /// If the current token matches `kind`, consume it and return `true`.
    fn match_token(&mut self, kind: &TokenKind) -> bool {
        if self.check(kind) {
            self.advance();
            true
        } else {
            false
        }
    }

    /// Consume a token of kind `kind` or report `expected {what}, not ...`
    /// at the current position.
    fn expect(&mut self, kind: &TokenKind, what: &str) -> Result<Token, ErrorReported> {
        if self.check(kind) {
            Ok(self.advance().clone())
        } else {
            Err(self.expected(what))
        }
    }

    /// Consume an identifier token or report `expected {what}, not ...`.
    fn identifier(&mut self, what: &str) -> Result<Spanned<Ident>, ErrorReported> {
        match &self.peek().kind {
            TokenKind::Ident(name) => {
                let name = name.clone();
                let span = self.peek().span;
                self.advance();
                Ok(Spanned::new(name, span))
            }
            _ => Err(self.expected(what)),
        }
    }

    /// Report an `expected {what}, not {found}` diagnostic at the current
    /// token.
    fn expected(&mut self, what: &str) -> ErrorReported {
        let span = self.peek().span;
        let found = self.peek().kind.clone();
        self.report(span, format!("expected {what}, not {found}"))
    }

    /// Save a diagnostic positioned at `span` and return the sentinel.
    fn report(&mut self, span: Span, message: String) -> ErrorReported {
        let (line, column) = line_col(self.source, span.start);
        self.diagnostics
            .report_and_save(Diagnostic::new(self.path.to_path_buf(), line, column, message))
    }

    fn current_span(&self) -> Span {
        self.peek().span
    }

    /// Span of the most recently consumed token.
    fn prev_span(&self) -> Span {
        self.tokens[self.pos.saturating_sub(1)].span
    }
}

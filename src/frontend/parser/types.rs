/// Type expressions: primitives, pointers, and named types.
impl<'a> Parser<'a> {
    // ========================================================================
    // Types
    // ========================================================================

    fn type_expr(&mut self) -> Result<Spanned<Type>, ErrorReported> {
        let token = self.peek().clone();
        match token.kind {
            // `*T` nests, so `**i32` is a pointer to a pointer.
            TokenKind::Star => {
                self.advance();
                let inner = self.type_expr()?;
                let span = Span::new(token.span.start, inner.span.end);
                Ok(Spanned::new(Type::Pointer(Box::new(inner)), span))
            }
            TokenKind::Primitive(kind) => {
                self.advance();
                Ok(Spanned::new(Type::Basic(kind), token.span))
            }
            TokenKind::Ident(name) => {
                self.advance();
                Ok(Spanned::new(Type::Named(name), token.span))
            }
            _ => Err(self.expected("type")),
        }
    }
}

/// Top-level declarations: functions and extern blocks.
impl<'a> Parser<'a> {
    // ========================================================================
    // Declarations
    // ========================================================================

    fn declaration(&mut self) -> Result<Spanned<Declaration>, ErrorReported> {
        let start = self.current_span().start;
        let decl = match self.peek().kind {
            TokenKind::Fn => Declaration::Function(self.function_decl()?),
            TokenKind::Extern => Declaration::Extern(self.extern_decl()?),
            _ => {
                let span = self.current_span();
                return Err(self.report(
                    span,
                    "unexpected non-declaration statement at file scope".to_string(),
                ));
            }
        };
        let end = self.prev_span().end;
        Ok(Spanned::new(decl, Span::new(start, end)))
    }

    /// `fn name(params) [type] { ... }`. The function's symbol binds in the
    /// module scope as soon as its header is parsed; the body scope chains
    /// under the module scope.
    fn function_decl(&mut self) -> Result<FunctionDecl, ErrorReported> {
        self.expect(&TokenKind::Fn, "'fn'")?;
        let name = self.identifier("function name")?;
        let params = self.param_list()?;
        let return_type = self.return_type(false)?;
        let body = self.block()?;
        let scope = self.scopes.child(self.module_scope);

        let symbol = Symbol {
            name: name.node.clone(),
            kind: SymbolKind::Function,
            span: name.span,
        };
        if let Err(ScopeError::DuplicateSymbol(_)) = self.scopes.insert(self.module_scope, &name.node, symbol) {
            return Err(self.report(
                name.span,
                format!("function '{}' already declared in this scope", name.node),
            ));
        }

        Ok(FunctionDecl { name, params, return_type, body, scope })
    }

    /// `extern name { fn ...; fn ...; }`. Prototypes are signatures only and
    /// each ends with a semicolon.
    fn extern_decl(&mut self) -> Result<ExternDecl, ErrorReported> {
        self.expect(&TokenKind::Extern, "'extern'")?;
        let name = self.identifier("extern block name")?;
        self.expect(&TokenKind::LBrace, "'{'")?;
        let mut prototypes = Vec::new();
        while !self.check(&TokenKind::RBrace) {
            prototypes.push(self.prototype()?);
        }
        self.expect(&TokenKind::RBrace, "'}'")?;
        Ok(ExternDecl { name, prototypes })
    }

    fn prototype(&mut self) -> Result<Spanned<Prototype>, ErrorReported> {
        let start = self.current_span().start;
        self.expect(&TokenKind::Fn, "prototype or '}'")?;
        let name = self.identifier("prototype name")?;
        let params = self.param_list()?;
        let return_type = self.return_type(true)?;
        self.expect(&TokenKind::Semicolon, "';' at the end of prototype")?;
        let end = self.prev_span().end;
        Ok(Spanned::new(Prototype { name, params, return_type }, Span::new(start, end)))
    }

    /// Parenthesized parameter list. `...` marks the list variadic and must
    /// be the final entry.
    fn param_list(&mut self) -> Result<ParamList, ErrorReported> {
        self.expect(&TokenKind::LParen, "'('")?;
        let mut params = Vec::new();
        let mut is_variadic = false;
        while !self.check(&TokenKind::RParen) {
            if self.check(&TokenKind::Ellipsis) {
                let span = self.current_span();
                self.advance();
                is_variadic = true;
                if !self.check(&TokenKind::RParen) {
                    return Err(self.report(
                        span,
                        "'...' is only allowed at the end of a parameter list".to_string(),
                    ));
                }
                break;
            }
            let start = self.current_span().start;
            let name = self.identifier("parameter name or ')'")?;
            let ty = self.type_expr()?;
            let end = self.prev_span().end;
            params.push(Spanned::new(Param { name, ty }, Span::new(start, end)));
            if !self.match_token(&TokenKind::Comma) {
                break;
            }
        }
        self.expect(&TokenKind::RParen, "')'")?;
        Ok(ParamList { params, is_variadic })
    }

    /// Return type between the parameter list and the body. Omitted types
    /// default to `void`: the next token is then `{`, or `;` when parsing a
    /// prototype.
    fn return_type(&mut self, is_prototype: bool) -> Result<Spanned<Type>, ErrorReported> {
        if self.check(&TokenKind::LBrace) || (is_prototype && self.check(&TokenKind::Semicolon)) {
            let here = self.current_span().start;
            return Ok(Spanned::new(
                Type::Basic(PrimitiveKind::Void),
                Span::new(here, here),
            ));
        }
        self.type_expr()
    }
}

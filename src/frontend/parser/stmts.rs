/// Statements: blocks, returns, variable statements, conditionals, loops.
impl<'a> Parser<'a> {
    // ========================================================================
    // Statements
    // ========================================================================

    fn block(&mut self) -> Result<Block, ErrorReported> {
        let open = self.expect(&TokenKind::LBrace, "'{'")?;
        let mut stmts = Vec::new();
        while !self.check(&TokenKind::RBrace) {
            match self.statement()? {
                Some(stmt) => stmts.push(stmt),
                // Not a statement starter; the close-brace expect below
                // produces the diagnostic.
                None => break,
            }
        }
        let close = self.expect(&TokenKind::RBrace, "statement or '}'")?;
        Ok(Block {
            stmts,
            span: Span::new(open.span.start, close.span.end),
        })
    }

    /// Parse one statement, or `None` if the current token cannot start one.
    fn statement(&mut self) -> Result<Option<Spanned<Statement>>, ErrorReported> {
        let start = self.current_span().start;
        let stmt = match self.peek().kind {
            TokenKind::Return => self.return_stmt()?,
            TokenKind::Ident(_) => {
                let stmt = self.id_stmt()?;
                self.expect(&TokenKind::Semicolon, "';' at the end of statement")?;
                stmt
            }
            TokenKind::If => self.cond_stmt()?,
            TokenKind::For => self.for_loop()?,
            TokenKind::While => self.while_loop()?,
            _ => return Ok(None),
        };
        let end = self.prev_span().end;
        Ok(Some(Spanned::new(stmt, Span::new(start, end))))
    }

    fn return_stmt(&mut self) -> Result<Statement, ErrorReported> {
        self.expect(&TokenKind::Return, "'return'")?;
        if self.match_token(&TokenKind::Semicolon) {
            return Ok(Statement::Return(ReturnStmt { value: None }));
        }
        let value = self.expression()?;
        self.expect(&TokenKind::Semicolon, "';' at the end of statement")?;
        Ok(Statement::Return(ReturnStmt { value: Some(value) }))
    }

    /// Statement starting with an identifier. One token of lookahead picks
    /// the shape: `(` is a call, `.` a field access, anything else a
    /// variable statement.
    fn id_stmt(&mut self) -> Result<Statement, ErrorReported> {
        match self.peek_next().kind {
            TokenKind::LParen => Ok(Statement::Call(self.call()?)),
            TokenKind::Dot => Ok(Statement::Field(self.field_access()?)),
            _ => self.var_stmt(),
        }
    }

    /// Comma-separated names (each with an optional type), `:=` or `=`, then
    /// an expression list. Name and value counts must match; one binding
    /// yields [`Statement::Var`], several the parallel [`Statement::MultiVar`].
    fn var_stmt(&mut self) -> Result<Statement, ErrorReported> {
        let mut names: Vec<(Spanned<Ident>, Option<Spanned<Type>>)> = Vec::new();
        let is_decl;
        loop {
            let name = self.identifier("variable name")?;
            let ty = match self.peek().kind {
                TokenKind::ColonEq | TokenKind::Eq | TokenKind::Comma => None,
                _ => Some(self.type_expr()?),
            };
            names.push((name, ty));
            match self.peek().kind {
                TokenKind::ColonEq => {
                    self.advance();
                    is_decl = true;
                    break;
                }
                TokenKind::Eq => {
                    self.advance();
                    is_decl = false;
                    break;
                }
                TokenKind::Comma => {
                    self.advance();
                }
                _ => return Err(self.expected("':=' or '='")),
            }
        }

        let values = self.expr_list(&[TokenKind::Semicolon, TokenKind::RParen])?;
        if names.len() != values.len() {
            let span = self.current_span();
            return Err(self.report(
                span,
                format!(
                    "variable statement has {} name(s) but {} expression(s)",
                    names.len(),
                    values.len()
                ),
            ));
        }

        let mut vars: Vec<VarStmt> = names
            .into_iter()
            .zip(values)
            .map(|((name, ty), value)| VarStmt {
                needs_inference: ty.is_none(),
                name,
                ty,
                value,
                is_decl,
            })
            .collect();
        if vars.len() == 1 {
            Ok(Statement::Var(vars.remove(0)))
        } else {
            Ok(Statement::MultiVar(MultiVarStmt { is_decl, vars }))
        }
    }

    /// Comma-separated expressions, stopping (without consuming) at any of
    /// `ends`.
    fn expr_list(&mut self, ends: &[TokenKind]) -> Result<Vec<Spanned<Expr>>, ErrorReported> {
        let mut exprs = Vec::new();
        loop {
            if ends.iter().any(|end| self.check(end)) {
                break;
            }
            exprs.push(self.expression()?);
            if !self.match_token(&TokenKind::Comma) {
                break;
            }
        }
        Ok(exprs)
    }

    /// `if cond { } [elif cond { }]* [else { }]`. Conditions take no
    /// parentheses.
    fn cond_stmt(&mut self) -> Result<Statement, ErrorReported> {
        self.expect(&TokenKind::If, "'if'")?;
        let cond = self.expression()?;
        let block = self.block()?;
        let if_arm = CondArm { cond, block };

        let mut elif_arms = Vec::new();
        while self.match_token(&TokenKind::Elif) {
            let cond = self.expression()?;
            let block = self.block()?;
            elif_arms.push(CondArm { cond, block });
        }

        let else_block = if self.match_token(&TokenKind::Else) {
            Some(self.block()?)
        } else {
            None
        };

        Ok(Statement::Cond(CondStmt { if_arm, elif_arms, else_block }))
    }

    /// `for (init; cond; update) { }`. Init and update reuse the variable
    /// statement parser, so parallel bindings work in headers.
    fn for_loop(&mut self) -> Result<Statement, ErrorReported> {
        self.expect(&TokenKind::For, "'for'")?;
        self.expect(&TokenKind::LParen, "'('")?;

        let start = self.current_span().start;
        let init = self.var_stmt()?;
        let init = Spanned::new(init, Span::new(start, self.prev_span().end));
        self.expect(&TokenKind::Semicolon, "';'")?;

        let cond = self.expression()?;
        self.expect(&TokenKind::Semicolon, "';'")?;

        let start = self.current_span().start;
        let update = self.var_stmt()?;
        let update = Spanned::new(update, Span::new(start, self.prev_span().end));
        self.expect(&TokenKind::RParen, "')'")?;

        let block = self.block()?;
        Ok(Statement::For(ForLoop {
            init: Box::new(init),
            cond,
            update: Box::new(update),
            block,
        }))
    }

    fn while_loop(&mut self) -> Result<Statement, ErrorReported> {
        self.expect(&TokenKind::While, "'while'")?;
        let cond = self.expression()?;
        let block = self.block()?;
        Ok(Statement::While(WhileLoop { cond, block }))
    }
}

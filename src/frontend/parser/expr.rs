/// Expressions, parsed as a precedence ladder.
///
/// Lowest to highest: logical (`and`/`or`/`==`/`!=`), comparison
/// (`<`/`<=`/`>`/`>=`), term (`+`/`-`), factor (`*`/`/`), unary
/// (`not`/`-`), primary. Binary levels fold left-associatively; unary is
/// right-recursive.
impl<'a> Parser<'a> {
    // ========================================================================
    // Expressions
    // ========================================================================

    fn expression(&mut self) -> Result<Spanned<Expr>, ErrorReported> {
        self.logical()
    }

    fn logical(&mut self) -> Result<Spanned<Expr>, ErrorReported> {
        let mut left = self.comparison()?;
        loop {
            let op = match self.peek().kind {
                TokenKind::And => BinaryOp::And,
                TokenKind::Or => BinaryOp::Or,
                TokenKind::EqEq => BinaryOp::Eq,
                TokenKind::NotEq => BinaryOp::NotEq,
                _ => break,
            };
            self.advance();
            let right = self.comparison()?;
            let span = left.span.merge(right.span);
            left = Spanned::new(Expr::Binary(Box::new(left), op, Box::new(right)), span);
        }
        Ok(left)
    }

    fn comparison(&mut self) -> Result<Spanned<Expr>, ErrorReported> {
        let mut left = self.term()?;
        loop {
            let op = match self.peek().kind {
                TokenKind::Lt => BinaryOp::Lt,
                TokenKind::LtEq => BinaryOp::LtEq,
                TokenKind::Gt => BinaryOp::Gt,
                TokenKind::GtEq => BinaryOp::GtEq,
                _ => break,
            };
            self.advance();
            let right = self.term()?;
            let span = left.span.merge(right.span);
            left = Spanned::new(Expr::Binary(Box::new(left), op, Box::new(right)), span);
        }
        Ok(left)
    }

    fn term(&mut self) -> Result<Spanned<Expr>, ErrorReported> {
        let mut left = self.factor()?;
        loop {
            let op = match self.peek().kind {
                TokenKind::Plus => BinaryOp::Add,
                TokenKind::Minus => BinaryOp::Sub,
                _ => break,
            };
            self.advance();
            let right = self.factor()?;
            let span = left.span.merge(right.span);
            left = Spanned::new(Expr::Binary(Box::new(left), op, Box::new(right)), span);
        }
        Ok(left)
    }

    fn factor(&mut self) -> Result<Spanned<Expr>, ErrorReported> {
        let mut left = self.unary()?;
        loop {
            let op = match self.peek().kind {
                TokenKind::Star => BinaryOp::Mul,
                TokenKind::Slash => BinaryOp::Div,
                _ => break,
            };
            self.advance();
            let right = self.unary()?;
            let span = left.span.merge(right.span);
            left = Spanned::new(Expr::Binary(Box::new(left), op, Box::new(right)), span);
        }
        Ok(left)
    }

    fn unary(&mut self) -> Result<Spanned<Expr>, ErrorReported> {
        let op = match self.peek().kind {
            TokenKind::Not => UnaryOp::Not,
            TokenKind::Minus => UnaryOp::Neg,
            _ => return self.primary(),
        };
        let start = self.current_span().start;
        self.advance();
        // Right-recursive: `not not a` and `--1` nest.
        let operand = self.unary()?;
        let span = Span::new(start, operand.span.end);
        Ok(Spanned::new(Expr::Unary(op, Box::new(operand)), span))
    }

    fn primary(&mut self) -> Result<Spanned<Expr>, ErrorReported> {
        let token = self.peek().clone();
        match token.kind {
            TokenKind::Ident(name) => match self.peek_next().kind {
                TokenKind::LParen => {
                    let start = token.span.start;
                    let call = self.call()?;
                    let span = Span::new(start, self.prev_span().end);
                    Ok(Spanned::new(Expr::Call(call), span))
                }
                TokenKind::Dot => {
                    let access = self.field_access()?;
                    let span = access.left.span.merge(access.right.span);
                    Ok(Spanned::new(Expr::Field(access), span))
                }
                _ => {
                    self.advance();
                    Ok(Spanned::new(Expr::Id(name), token.span))
                }
            },
            TokenKind::LParen => {
                self.advance();
                let expr = self.expression()?;
                self.expect(&TokenKind::RParen, "')'")?;
                Ok(expr)
            }
            TokenKind::Int(lexeme) => {
                self.advance();
                Ok(Spanned::new(
                    Expr::Literal(LiteralExpr { kind: LiteralKind::Int, lexeme }),
                    token.span,
                ))
            }
            TokenKind::Str(lexeme) => {
                self.advance();
                Ok(Spanned::new(
                    Expr::Literal(LiteralExpr { kind: LiteralKind::Str, lexeme }),
                    token.span,
                ))
            }
            TokenKind::True => {
                self.advance();
                Ok(Spanned::new(
                    Expr::Literal(LiteralExpr { kind: LiteralKind::Bool, lexeme: "true".to_string() }),
                    token.span,
                ))
            }
            TokenKind::False => {
                self.advance();
                Ok(Spanned::new(
                    Expr::Literal(LiteralExpr { kind: LiteralKind::Bool, lexeme: "false".to_string() }),
                    token.span,
                ))
            }
            _ => Err(self.expected("expression")),
        }
    }

    /// `name(args)`. Used both as an expression and as a statement.
    fn call(&mut self) -> Result<FunctionCall, ErrorReported> {
        let name = self.identifier("function name")?;
        self.expect(&TokenKind::LParen, "'('")?;
        let args = self.expr_list(&[TokenKind::RParen])?;
        self.expect(&TokenKind::RParen, "')'")?;
        Ok(FunctionCall { name, args })
    }

    /// `left.right`, where the right side re-enters primary. Chains compose
    /// right-nested (`a.b.c` is `a.(b.c)`) and a call after the dot is the
    /// right side of the access.
    fn field_access(&mut self) -> Result<FieldAccess, ErrorReported> {
        let id = self.identifier("field access target")?;
        let left = Spanned::new(Expr::Id(id.node), id.span);
        self.expect(&TokenKind::Dot, "'.'")?;
        let right = self.primary()?;
        Ok(FieldAccess {
            left: Box::new(left),
            right: Box::new(right),
        })
    }
}

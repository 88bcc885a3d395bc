#[cfg(test)]
mod tests {
    use super::*;

    struct ParseOutcome {
        result: Result<Vec<Spanned<Declaration>>, ErrorReported>,
        scopes: ScopeArena<Symbol>,
        module_scope: ScopeId,
        diagnostics: Diagnostics,
    }

    fn parse_source(source: &str) -> ParseOutcome {
        let path = Path::new("test.tn");
        let mut diagnostics = Diagnostics::new();
        let tokens = crate::frontend::lexer::lex(path, source, &mut diagnostics).expect("lexing failed");
        let mut scopes = ScopeArena::new();
        let module_scope = scopes.universe();
        let result = parse(&tokens, path, source, &mut scopes, module_scope, &mut diagnostics);
        ParseOutcome { result, scopes, module_scope, diagnostics }
    }

    fn parse_ok(source: &str) -> Vec<Spanned<Declaration>> {
        let outcome = parse_source(source);
        outcome.result.expect("parse failed")
    }

    /// Collects the diagnostic messages of a source that must fail to parse.
    fn parse_err(source: &str) -> Vec<String> {
        let outcome = parse_source(source);
        assert_eq!(outcome.result, Err(ErrorReported), "expected a parse failure");
        assert!(!outcome.diagnostics.is_empty());
        outcome.diagnostics.iter().map(|d| d.message.clone()).collect()
    }

    fn expr(source: &str) -> Spanned<Expr> {
        let mut diagnostics = Diagnostics::new();
        parse_expr_from(source, &mut diagnostics).expect("expression should parse")
    }

    fn function(decl: &Spanned<Declaration>) -> &FunctionDecl {
        match &decl.node {
            Declaration::Function(f) => f,
            other => panic!("expected a function declaration, got {other:?}"),
        }
    }

    // ------------------------------------------------------------------
    // Declarations
    // ------------------------------------------------------------------

    #[test]
    fn minimal_function() {
        let decls = parse_ok("fn main() i32 { return 0; }");
        assert_eq!(decls.len(), 1);
        let f = function(&decls[0]);
        assert_eq!(f.name.node, "main");
        assert!(f.params.params.is_empty());
        assert!(!f.params.is_variadic);
        assert_eq!(f.return_type.node, Type::Basic(PrimitiveKind::I32));
        assert_eq!(f.body.stmts.len(), 1);
    }

    #[test]
    fn omitted_return_type_defaults_to_void() {
        let decls = parse_ok("fn noop() { return; }");
        let f = function(&decls[0]);
        assert_eq!(f.return_type.node, Type::Basic(PrimitiveKind::Void));
        match &f.body.stmts[0].node {
            Statement::Return(ret) => assert!(ret.value.is_none()),
            other => panic!("expected return, got {other:?}"),
        }
    }

    #[test]
    fn function_symbol_binds_in_module_scope() {
        let outcome = parse_source("fn main() i32 { return 0; }");
        outcome.result.unwrap();
        let symbol = outcome.scopes.lookup(outcome.module_scope, "main").unwrap();
        assert_eq!(symbol.kind, SymbolKind::Function);
    }

    #[test]
    fn function_scope_chains_under_module_scope() {
        let outcome = parse_source("fn main() i32 { return 0; }");
        let decls = outcome.result.unwrap();
        let f = function(&decls[0]);
        assert_eq!(outcome.scopes.parent(f.scope), Some(outcome.module_scope));
    }

    #[test]
    fn duplicate_function_is_reported() {
        let messages = parse_err("fn f() { return; }\nfn f() { return; }");
        assert!(messages[0].contains("'f' already declared"));
    }

    #[test]
    fn parameters_with_pointer_types() {
        let decls = parse_ok("fn f(a i32, b *i32) { return; }");
        let f = function(&decls[0]);
        assert_eq!(f.params.params.len(), 2);
        assert_eq!(f.params.params[0].node.ty.node, Type::Basic(PrimitiveKind::I32));
        match &f.params.params[1].node.ty.node {
            Type::Pointer(inner) => assert_eq!(inner.node, Type::Basic(PrimitiveKind::I32)),
            other => panic!("expected pointer type, got {other:?}"),
        }
    }

    #[test]
    fn trailing_ellipsis_marks_variadic() {
        let decls = parse_ok("fn f(fmt *i8, ...) { return; }");
        let f = function(&decls[0]);
        assert_eq!(f.params.params.len(), 1);
        assert!(f.params.is_variadic);
    }

    #[test]
    fn ellipsis_before_other_params_is_rejected() {
        let messages = parse_err("fn f(a i32, ..., b i32) { return; }");
        assert!(messages[0].contains("only allowed at the end"));
    }

    #[test]
    fn extern_block_with_prototypes() {
        let decls = parse_ok("extern libc {\n  fn puts(s *i8) i32;\n  fn abort();\n}");
        match &decls[0].node {
            Declaration::Extern(ext) => {
                assert_eq!(ext.name.node, "libc");
                assert_eq!(ext.prototypes.len(), 2);
                assert_eq!(ext.prototypes[0].node.name.node, "puts");
                // A prototype ending right at `;` has a void return type.
                assert_eq!(
                    ext.prototypes[1].node.return_type.node,
                    Type::Basic(PrimitiveKind::Void)
                );
            }
            other => panic!("expected extern declaration, got {other:?}"),
        }
    }

    #[test]
    fn prototype_without_semicolon_is_rejected() {
        let messages = parse_err("extern libc { fn puts(s *i8) i32 }");
        assert!(messages[0].contains("';' at the end of prototype"));
    }

    #[test]
    fn top_level_statement_is_rejected() {
        let messages = parse_err("a := 1;");
        assert!(messages[0].contains("file scope"));
    }

    // ------------------------------------------------------------------
    // Statements
    // ------------------------------------------------------------------

    fn single_stmt(source: &str) -> Statement {
        let decls = parse_ok(source);
        let f = function(&decls[0]);
        assert_eq!(f.body.stmts.len(), 1);
        f.body.stmts[0].node.clone()
    }

    #[test]
    fn declaration_vs_assignment() {
        match single_stmt("fn f() { a := 1; }") {
            Statement::Var(var) => {
                assert!(var.is_decl);
                assert!(var.needs_inference);
                assert!(var.ty.is_none());
            }
            other => panic!("expected var, got {other:?}"),
        }
        match single_stmt("fn f() { a = 1; }") {
            Statement::Var(var) => assert!(!var.is_decl),
            other => panic!("expected var, got {other:?}"),
        }
    }

    #[test]
    fn explicit_type_disables_inference() {
        match single_stmt("fn f() { a i32 := 1; }") {
            Statement::Var(var) => {
                assert_eq!(var.ty.as_ref().unwrap().node, Type::Basic(PrimitiveKind::I32));
                assert!(!var.needs_inference);
            }
            other => panic!("expected var, got {other:?}"),
        }
    }

    #[test]
    fn parallel_bindings_pair_positionally() {
        match single_stmt("fn f() { a, b := 1, 2; }") {
            Statement::MultiVar(multi) => {
                assert!(multi.is_decl);
                assert_eq!(multi.vars.len(), 2);
                assert_eq!(multi.vars[0].name.node, "a");
                assert_eq!(multi.vars[1].name.node, "b");
                match &multi.vars[1].value.node {
                    Expr::Literal(lit) => assert_eq!(lit.lexeme, "2"),
                    other => panic!("expected literal, got {other:?}"),
                }
            }
            other => panic!("expected multi var, got {other:?}"),
        }
    }

    #[test]
    fn binding_count_mismatch_is_reported() {
        let messages = parse_err("fn f() { a, b := 1; }");
        assert!(messages[0].contains("2 name(s) but 1 expression(s)"));
    }

    #[test]
    fn call_statement() {
        match single_stmt("fn f() { g(1, x); }") {
            Statement::Call(call) => {
                assert_eq!(call.name.node, "g");
                assert_eq!(call.args.len(), 2);
            }
            other => panic!("expected call, got {other:?}"),
        }
    }

    #[test]
    fn field_access_statement() {
        match single_stmt("fn f() { io.println(); }") {
            Statement::Field(access) => {
                assert_eq!(access.left.node, Expr::Id("io".to_string()));
                assert!(matches!(access.right.node, Expr::Call(_)));
            }
            other => panic!("expected field access, got {other:?}"),
        }
    }

    #[test]
    fn missing_statement_semicolon_is_reported() {
        let messages = parse_err("fn f() { g() }");
        assert!(messages[0].contains("';' at the end of statement"));
    }

    #[test]
    fn if_elif_else_arms() {
        match single_stmt("fn f() { if a { g(); } elif b { g(); } elif c { g(); } else { g(); } }") {
            Statement::Cond(cond) => {
                assert_eq!(cond.elif_arms.len(), 2);
                assert!(cond.else_block.is_some());
                assert_eq!(cond.if_arm.block.stmts.len(), 1);
            }
            other => panic!("expected conditional, got {other:?}"),
        }
    }

    #[test]
    fn for_loop_header_reuses_variable_statements() {
        match single_stmt("fn f() { for (i := 0; i < 10; i = i + 1) { g(i); } }") {
            Statement::For(loop_) => {
                match &loop_.init.node {
                    Statement::Var(init) => assert!(init.is_decl),
                    other => panic!("expected var init, got {other:?}"),
                }
                match &loop_.update.node {
                    Statement::Var(update) => assert!(!update.is_decl),
                    other => panic!("expected var update, got {other:?}"),
                }
                assert!(matches!(loop_.cond.node, Expr::Binary(_, BinaryOp::Lt, _)));
            }
            other => panic!("expected for loop, got {other:?}"),
        }
    }

    #[test]
    fn while_loop() {
        match single_stmt("fn f() { while a < b { g(); } }") {
            Statement::While(loop_) => {
                assert!(matches!(loop_.cond.node, Expr::Binary(_, BinaryOp::Lt, _)));
                assert_eq!(loop_.block.stmts.len(), 1);
            }
            other => panic!("expected while loop, got {other:?}"),
        }
    }

    #[test]
    fn empty_block() {
        let decls = parse_ok("fn f() { }");
        assert!(function(&decls[0]).body.stmts.is_empty());
    }

    #[test]
    fn unclosed_block_is_reported() {
        let messages = parse_err("fn f() { return 0;");
        assert!(messages[0].contains("statement or '}'"));
    }

    // ------------------------------------------------------------------
    // Expressions
    // ------------------------------------------------------------------

    fn binary(e: &Spanned<Expr>) -> (&Spanned<Expr>, BinaryOp, &Spanned<Expr>) {
        match &e.node {
            Expr::Binary(left, op, right) => (left, *op, right),
            other => panic!("expected binary expression, got {other:?}"),
        }
    }

    #[test]
    fn multiplication_binds_tighter_than_addition() {
        let e = expr("1 + 2 * 3");
        let (left, op, right) = binary(&e);
        assert_eq!(op, BinaryOp::Add);
        assert!(matches!(left.node, Expr::Literal(_)));
        assert_eq!(binary(right).1, BinaryOp::Mul);

        let e = expr("1 * 2 + 3");
        let (left, op, right) = binary(&e);
        assert_eq!(op, BinaryOp::Add);
        assert_eq!(binary(left).1, BinaryOp::Mul);
        assert!(matches!(right.node, Expr::Literal(_)));
    }

    #[test]
    fn comparison_binds_tighter_than_logical() {
        let e = expr("a < b and c > d");
        let (left, op, right) = binary(&e);
        assert_eq!(op, BinaryOp::And);
        assert_eq!(binary(left).1, BinaryOp::Lt);
        assert_eq!(binary(right).1, BinaryOp::Gt);
    }

    #[test]
    fn unary_not_applies_before_and() {
        let e = expr("not a and b");
        let (left, op, _) = binary(&e);
        assert_eq!(op, BinaryOp::And);
        assert!(matches!(left.node, Expr::Unary(UnaryOp::Not, _)));
    }

    #[test]
    fn unary_is_right_recursive() {
        let e = expr("not not a");
        match &e.node {
            Expr::Unary(UnaryOp::Not, inner) => {
                assert!(matches!(inner.node, Expr::Unary(UnaryOp::Not, _)));
            }
            other => panic!("expected unary, got {other:?}"),
        }
    }

    #[test]
    fn grouping_overrides_precedence() {
        let e = expr("(1 + 2) * 3");
        let (left, op, _) = binary(&e);
        assert_eq!(op, BinaryOp::Mul);
        assert_eq!(binary(left).1, BinaryOp::Add);
    }

    #[test]
    fn equal_precedence_folds_left() {
        // (1 - 2) + 3
        let e = expr("1 - 2 + 3");
        let (left, op, _) = binary(&e);
        assert_eq!(op, BinaryOp::Add);
        assert_eq!(binary(left).1, BinaryOp::Sub);
    }

    #[test]
    fn field_access_chains_nest_right() {
        let e = expr("a.b.c");
        match &e.node {
            Expr::Field(outer) => {
                assert_eq!(outer.left.node, Expr::Id("a".to_string()));
                match &outer.right.node {
                    Expr::Field(inner) => {
                        assert_eq!(inner.left.node, Expr::Id("b".to_string()));
                        assert_eq!(inner.right.node, Expr::Id("c".to_string()));
                    }
                    other => panic!("expected nested field access, got {other:?}"),
                }
            }
            other => panic!("expected field access, got {other:?}"),
        }
    }

    #[test]
    fn call_after_dot_is_the_right_side() {
        let e = expr("a.f(x)");
        match &e.node {
            Expr::Field(access) => match &access.right.node {
                Expr::Call(call) => {
                    assert_eq!(call.name.node, "f");
                    assert_eq!(call.args.len(), 1);
                }
                other => panic!("expected call, got {other:?}"),
            },
            other => panic!("expected field access, got {other:?}"),
        }
    }

    #[test]
    fn string_and_bool_literals() {
        match &expr("\"hi\"").node {
            Expr::Literal(lit) => {
                assert_eq!(lit.kind, LiteralKind::Str);
                assert_eq!(lit.lexeme, "hi");
            }
            other => panic!("expected literal, got {other:?}"),
        }
        match &expr("true").node {
            Expr::Literal(lit) => assert_eq!(lit.kind, LiteralKind::Bool),
            other => panic!("expected literal, got {other:?}"),
        }
    }

    #[test]
    fn expression_spans_cover_operands() {
        let e = expr("1 + 23");
        assert_eq!(e.span, Span::new(0, 6));
    }

    #[test]
    fn diagnostics_carry_line_and_column() {
        let outcome = parse_source("fn f() {\n  return 0\n}");
        assert_eq!(outcome.result, Err(ErrorReported));
        let diag = outcome.diagnostics.iter().next().unwrap();
        // The `}` that should have been `;` sits on line 3.
        assert_eq!(diag.line, 3);
        assert!(diag.to_string().starts_with("test.tn:3:"));
    }
}

//! Abstract syntax tree definitions.
//!
//! AST nodes are plain data, immutable once built. Nodes that own a scope
//! (modules, files, functions) hold a copyable [`ScopeId`] into the build's
//! [`ScopeArena`] rather than owning the scope itself.

use std::path::PathBuf;

use crate::frontend::scope::{ScopeArena, ScopeId, Symbol};

/// Byte range into a file's source text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Span {
    pub start: usize,
    pub end: usize,
}

impl Span {
    pub fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    /// Smallest span covering both `self` and `other`.
    pub fn merge(self, other: Span) -> Span {
        Span::new(self.start.min(other.start), self.end.max(other.end))
    }
}

/// A value paired with the source span it came from.
#[derive(Debug, Clone, PartialEq)]
pub struct Spanned<T> {
    pub node: T,
    pub span: Span,
}

impl<T> Spanned<T> {
    pub fn new(node: T, span: Span) -> Self {
        Self { node, span }
    }
}

pub type Ident = String;

/// A fully assembled program: the module tree plus the scope arena all of its
/// nodes point into.
#[derive(Debug)]
pub struct Program {
    pub root: Module,
    pub scopes: ScopeArena<Symbol>,
}

/// One directory's worth of source, named after the directory.
#[derive(Debug)]
pub struct Module {
    pub name: Ident,
    pub scope: ScopeId,
    pub is_root: bool,
    pub modules: Vec<Module>,
    pub files: Vec<File>,
}

/// A parsed source file. Its scope chains under the owning module's scope;
/// top-level declarations bind in the module scope, not here.
#[derive(Debug)]
pub struct File {
    pub path: PathBuf,
    pub scope: ScopeId,
    pub decls: Vec<Spanned<Declaration>>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Declaration {
    Function(FunctionDecl),
    Extern(ExternDecl),
}

#[derive(Debug, Clone, PartialEq)]
pub struct FunctionDecl {
    pub name: Spanned<Ident>,
    pub params: ParamList,
    pub return_type: Spanned<Type>,
    pub body: Block,
    /// Scope for the function body, chained under the module scope.
    pub scope: ScopeId,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ParamList {
    pub params: Vec<Spanned<Param>>,
    /// `...` appeared as the final entry.
    pub is_variadic: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Param {
    pub name: Spanned<Ident>,
    pub ty: Spanned<Type>,
}

/// `extern <name> { ...prototypes... }` foreign-function block.
#[derive(Debug, Clone, PartialEq)]
pub struct ExternDecl {
    pub name: Spanned<Ident>,
    pub prototypes: Vec<Spanned<Prototype>>,
}

/// Bodiless `fn` signature inside an extern block.
#[derive(Debug, Clone, PartialEq)]
pub struct Prototype {
    pub name: Spanned<Ident>,
    pub params: ParamList,
    pub return_type: Spanned<Type>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Block {
    pub stmts: Vec<Spanned<Statement>>,
    pub span: Span,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Statement {
    Var(VarStmt),
    MultiVar(MultiVarStmt),
    Return(ReturnStmt),
    Cond(CondStmt),
    For(ForLoop),
    While(WhileLoop),
    Call(FunctionCall),
    Field(FieldAccess),
}

/// Single-name variable declaration (`:=`) or assignment (`=`).
#[derive(Debug, Clone, PartialEq)]
pub struct VarStmt {
    pub name: Spanned<Ident>,
    pub ty: Option<Spanned<Type>>,
    pub value: Spanned<Expr>,
    /// `:=` (declaration) rather than `=` (assignment).
    pub is_decl: bool,
    /// No explicit type was written; a later stage must infer one.
    pub needs_inference: bool,
}

/// `a, b := 1, 2` parallel form. Names and values pair positionally.
#[derive(Debug, Clone, PartialEq)]
pub struct MultiVarStmt {
    pub is_decl: bool,
    pub vars: Vec<VarStmt>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ReturnStmt {
    /// `None` is the bare `return;` of a void function.
    pub value: Option<Spanned<Expr>>,
}

/// `if` / zero-or-more `elif` / optional `else`.
#[derive(Debug, Clone, PartialEq)]
pub struct CondStmt {
    pub if_arm: CondArm,
    pub elif_arms: Vec<CondArm>,
    pub else_block: Option<Block>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct CondArm {
    pub cond: Spanned<Expr>,
    pub block: Block,
}

/// `for (init; cond; update) { ... }`. Init and update are full variable
/// statements, so parallel bindings work in headers too.
#[derive(Debug, Clone, PartialEq)]
pub struct ForLoop {
    pub init: Box<Spanned<Statement>>,
    pub cond: Spanned<Expr>,
    pub update: Box<Spanned<Statement>>,
    pub block: Block,
}

#[derive(Debug, Clone, PartialEq)]
pub struct WhileLoop {
    pub cond: Spanned<Expr>,
    pub block: Block,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    Literal(LiteralExpr),
    Id(Ident),
    Unary(UnaryOp, Box<Spanned<Expr>>),
    Binary(Box<Spanned<Expr>>, BinaryOp, Box<Spanned<Expr>>),
    Call(FunctionCall),
    Field(FieldAccess),
}

/// Literal with its raw lexeme preserved; numeric interpretation is a later
/// stage's job.
#[derive(Debug, Clone, PartialEq)]
pub struct LiteralExpr {
    pub kind: LiteralKind,
    pub lexeme: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LiteralKind {
    Int,
    Str,
    Bool,
}

#[derive(Debug, Clone, PartialEq)]
pub struct FunctionCall {
    pub name: Spanned<Ident>,
    pub args: Vec<Spanned<Expr>>,
}

/// `left.right`. Chains nest to the right: `a.b.c` is `a.(b.c)`.
#[derive(Debug, Clone, PartialEq)]
pub struct FieldAccess {
    pub left: Box<Spanned<Expr>>,
    pub right: Box<Spanned<Expr>>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UnaryOp {
    Not,
    Neg,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BinaryOp {
    Or,
    And,
    Eq,
    NotEq,
    Lt,
    LtEq,
    Gt,
    GtEq,
    Add,
    Sub,
    Mul,
    Div,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Type {
    Basic(PrimitiveKind),
    Pointer(Box<Spanned<Type>>),
    Named(Ident),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PrimitiveKind {
    Bool,
    I8,
    I16,
    I32,
    I64,
    U8,
    U16,
    U32,
    U64,
    Void,
}

impl PrimitiveKind {
    pub fn as_str(self) -> &'static str {
        match self {
            PrimitiveKind::Bool => "bool",
            PrimitiveKind::I8 => "i8",
            PrimitiveKind::I16 => "i16",
            PrimitiveKind::I32 => "i32",
            PrimitiveKind::I64 => "i64",
            PrimitiveKind::U8 => "u8",
            PrimitiveKind::U16 => "u16",
            PrimitiveKind::U32 => "u32",
            PrimitiveKind::U64 => "u64",
            PrimitiveKind::Void => "void",
        }
    }
}

impl std::fmt::Display for PrimitiveKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

//! Token definitions and the keyword table.

use std::fmt;

use phf::phf_map;

use crate::frontend::ast::{PrimitiveKind, Span};

#[derive(Debug, Clone, PartialEq)]
pub enum TokenKind {
    // Keywords
    Fn,
    Extern,
    Return,
    If,
    Elif,
    Else,
    For,
    While,
    And,
    Or,
    Not,
    True,
    False,
    /// Primitive-type keyword (`bool`, `i8`..`u64`, `void`).
    Primitive(PrimitiveKind),

    // Identifiers and literals
    Ident(String),
    /// Integer literal, raw lexeme preserved.
    Int(String),
    /// String literal contents, without the surrounding quotes.
    Str(String),

    // Operators
    Plus,
    Minus,
    Star,
    Slash,
    Eq,
    ColonEq,
    EqEq,
    NotEq,
    Lt,
    LtEq,
    Gt,
    GtEq,

    // Punctuation
    LParen,
    RParen,
    LBrace,
    RBrace,
    Comma,
    Semicolon,
    Dot,
    Ellipsis,

    Eof,
}

/// Keyword spellings, resolved by the lexer before falling back to `Ident`.
pub static KEYWORDS: phf::Map<&'static str, TokenKind> = phf_map! {
    "fn" => TokenKind::Fn,
    "extern" => TokenKind::Extern,
    "return" => TokenKind::Return,
    "if" => TokenKind::If,
    "elif" => TokenKind::Elif,
    "else" => TokenKind::Else,
    "for" => TokenKind::For,
    "while" => TokenKind::While,
    "and" => TokenKind::And,
    "or" => TokenKind::Or,
    "not" => TokenKind::Not,
    "true" => TokenKind::True,
    "false" => TokenKind::False,
    "bool" => TokenKind::Primitive(PrimitiveKind::Bool),
    "i8" => TokenKind::Primitive(PrimitiveKind::I8),
    "i16" => TokenKind::Primitive(PrimitiveKind::I16),
    "i32" => TokenKind::Primitive(PrimitiveKind::I32),
    "i64" => TokenKind::Primitive(PrimitiveKind::I64),
    "u8" => TokenKind::Primitive(PrimitiveKind::U8),
    "u16" => TokenKind::Primitive(PrimitiveKind::U16),
    "u32" => TokenKind::Primitive(PrimitiveKind::U32),
    "u64" => TokenKind::Primitive(PrimitiveKind::U64),
    "void" => TokenKind::Primitive(PrimitiveKind::Void),
};

impl fmt::Display for TokenKind {
    /// Spelling used in "expected X, not Y" diagnostics.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            TokenKind::Fn => "'fn'",
            TokenKind::Extern => "'extern'",
            TokenKind::Return => "'return'",
            TokenKind::If => "'if'",
            TokenKind::Elif => "'elif'",
            TokenKind::Else => "'else'",
            TokenKind::For => "'for'",
            TokenKind::While => "'while'",
            TokenKind::And => "'and'",
            TokenKind::Or => "'or'",
            TokenKind::Not => "'not'",
            TokenKind::True => "'true'",
            TokenKind::False => "'false'",
            TokenKind::Primitive(kind) => return write!(f, "'{kind}'"),
            TokenKind::Ident(name) => return write!(f, "identifier '{name}'"),
            TokenKind::Int(_) => "integer literal",
            TokenKind::Str(_) => "string literal",
            TokenKind::Plus => "'+'",
            TokenKind::Minus => "'-'",
            TokenKind::Star => "'*'",
            TokenKind::Slash => "'/'",
            TokenKind::Eq => "'='",
            TokenKind::ColonEq => "':='",
            TokenKind::EqEq => "'=='",
            TokenKind::NotEq => "'!='",
            TokenKind::Lt => "'<'",
            TokenKind::LtEq => "'<='",
            TokenKind::Gt => "'>'",
            TokenKind::GtEq => "'>='",
            TokenKind::LParen => "'('",
            TokenKind::RParen => "')'",
            TokenKind::LBrace => "'{'",
            TokenKind::RBrace => "'}'",
            TokenKind::Comma => "','",
            TokenKind::Semicolon => "';'",
            TokenKind::Dot => "'.'",
            TokenKind::Ellipsis => "'...'",
            TokenKind::Eof => "end of file",
        };
        f.write_str(text)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Token {
    pub kind: TokenKind,
    pub span: Span,
}

impl Token {
    pub fn new(kind: TokenKind, span: Span) -> Self {
        Self { kind, span }
    }
}

//! Hand-written scanner producing a flat token stream with byte-offset spans.
//!
//! Lexical errors go through the same [`Diagnostics`] collector as parse
//! errors and abort the file via the [`ErrorReported`] sentinel.

mod tokens;

pub use tokens::{KEYWORDS, Token, TokenKind};

use std::iter::Peekable;
use std::path::Path;
use std::str::CharIndices;

use crate::frontend::ast::Span;
use crate::frontend::diagnostics::{Diagnostic, Diagnostics, ErrorReported, line_col};

/// Tokenizes `source`, appending a trailing [`TokenKind::Eof`].
#[tracing::instrument(skip_all, fields(file = %path.display()))]
pub fn lex(path: &Path, source: &str, diagnostics: &mut Diagnostics) -> Result<Vec<Token>, ErrorReported> {
    Lexer::new(path, source, diagnostics).tokenize()
}

struct Lexer<'a> {
    path: &'a Path,
    source: &'a str,
    chars: Peekable<CharIndices<'a>>,
    /// Offset just past the last consumed char.
    current_pos: usize,
    tokens: Vec<Token>,
    diagnostics: &'a mut Diagnostics,
}

impl<'a> Lexer<'a> {
    fn new(path: &'a Path, source: &'a str, diagnostics: &'a mut Diagnostics) -> Self {
        Self {
            path,
            source,
            chars: source.char_indices().peekable(),
            current_pos: 0,
            tokens: Vec::new(),
            diagnostics,
        }
    }

    fn tokenize(mut self) -> Result<Vec<Token>, ErrorReported> {
        loop {
            self.skip_trivia();
            let start = self.current_pos;
            let Some(c) = self.advance() else { break };
            self.scan(c, start)?;
        }
        self.tokens
            .push(Token::new(TokenKind::Eof, Span::new(self.current_pos, self.current_pos)));
        Ok(self.tokens)
    }

    fn scan(&mut self, c: char, start: usize) -> Result<(), ErrorReported> {
        match c {
            '(' => self.push(TokenKind::LParen, start),
            ')' => self.push(TokenKind::RParen, start),
            '{' => self.push(TokenKind::LBrace, start),
            '}' => self.push(TokenKind::RBrace, start),
            ',' => self.push(TokenKind::Comma, start),
            ';' => self.push(TokenKind::Semicolon, start),
            '+' => self.push(TokenKind::Plus, start),
            '-' => self.push(TokenKind::Minus, start),
            '*' => self.push(TokenKind::Star, start),
            // Comments are consumed by skip_trivia, so a lone slash is division.
            '/' => self.push(TokenKind::Slash, start),
            '.' => {
                if self.match_char('.') {
                    if !self.match_char('.') {
                        return Err(self.error(start, "unexpected '..', did you mean '...'?".to_string()));
                    }
                    self.push(TokenKind::Ellipsis, start);
                } else {
                    self.push(TokenKind::Dot, start);
                }
            }
            '=' => {
                let kind = if self.match_char('=') { TokenKind::EqEq } else { TokenKind::Eq };
                self.push(kind, start);
            }
            ':' => {
                if !self.match_char('=') {
                    return Err(self.error(start, "unexpected character ':'".to_string()));
                }
                self.push(TokenKind::ColonEq, start);
            }
            '!' => {
                if !self.match_char('=') {
                    return Err(self.error(start, "unexpected character '!'".to_string()));
                }
                self.push(TokenKind::NotEq, start);
            }
            '<' => {
                let kind = if self.match_char('=') { TokenKind::LtEq } else { TokenKind::Lt };
                self.push(kind, start);
            }
            '>' => {
                let kind = if self.match_char('=') { TokenKind::GtEq } else { TokenKind::Gt };
                self.push(kind, start);
            }
            '"' => self.string(start)?,
            c if c.is_ascii_digit() => self.number(start),
            c if c.is_alphabetic() || c == '_' => self.identifier(start),
            c => return Err(self.error(start, format!("unexpected character '{c}'"))),
        }
        Ok(())
    }

    fn identifier(&mut self, start: usize) {
        while let Some(c) = self.peek() {
            if c.is_alphanumeric() || c == '_' {
                self.advance();
            } else {
                break;
            }
        }
        let text = &self.source[start..self.current_pos];
        let kind = KEYWORDS
            .get(text)
            .cloned()
            .unwrap_or_else(|| TokenKind::Ident(text.to_string()));
        self.push(kind, start);
    }

    fn number(&mut self, start: usize) {
        while let Some(c) = self.peek() {
            if c.is_ascii_digit() {
                self.advance();
            } else {
                break;
            }
        }
        let text = self.source[start..self.current_pos].to_string();
        self.push(TokenKind::Int(text), start);
    }

    fn string(&mut self, start: usize) -> Result<(), ErrorReported> {
        loop {
            match self.advance() {
                None => return Err(self.error(start, "unterminated string literal".to_string())),
                Some('"') => break,
                // Keep escaped quotes inside the literal.
                Some('\\') => {
                    self.advance();
                }
                Some(_) => {}
            }
        }
        let contents = self.source[start + 1..self.current_pos - 1].to_string();
        self.push(TokenKind::Str(contents), start);
        Ok(())
    }

    fn skip_trivia(&mut self) {
        loop {
            match self.peek() {
                Some(c) if c.is_whitespace() => {
                    self.advance();
                }
                Some('/') if self.peek_next() == Some('/') => {
                    while let Some(c) = self.peek() {
                        if c == '\n' {
                            break;
                        }
                        self.advance();
                    }
                }
                _ => break,
            }
        }
    }

    fn push(&mut self, kind: TokenKind, start: usize) {
        self.tokens.push(Token::new(kind, Span::new(start, self.current_pos)));
    }

    fn peek(&mut self) -> Option<char> {
        self.chars.peek().map(|&(_, c)| c)
    }

    fn peek_next(&self) -> Option<char> {
        let mut ahead = self.chars.clone();
        ahead.next();
        ahead.next().map(|(_, c)| c)
    }

    fn advance(&mut self) -> Option<char> {
        let (offset, c) = self.chars.next()?;
        self.current_pos = offset + c.len_utf8();
        Some(c)
    }

    fn match_char(&mut self, expected: char) -> bool {
        if self.peek() == Some(expected) {
            self.advance();
            return true;
        }
        false
    }

    fn error(&mut self, offset: usize, message: String) -> ErrorReported {
        let (line, column) = line_col(self.source, offset);
        self.diagnostics
            .report_and_save(Diagnostic::new(self.path.to_path_buf(), line, column, message))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::frontend::ast::PrimitiveKind;

    fn kinds(source: &str) -> Vec<TokenKind> {
        let mut diagnostics = Diagnostics::new();
        lex(Path::new("test.tn"), source, &mut diagnostics)
            .expect("lexing failed")
            .into_iter()
            .map(|token| token.kind)
            .collect()
    }

    #[test]
    fn keywords_and_identifiers() {
        assert_eq!(
            kinds("fn main i32 foo"),
            vec![
                TokenKind::Fn,
                TokenKind::Ident("main".to_string()),
                TokenKind::Primitive(PrimitiveKind::I32),
                TokenKind::Ident("foo".to_string()),
                TokenKind::Eof,
            ]
        );
    }

    #[test]
    fn two_char_operators() {
        assert_eq!(
            kinds(":= == != <= >= < > ="),
            vec![
                TokenKind::ColonEq,
                TokenKind::EqEq,
                TokenKind::NotEq,
                TokenKind::LtEq,
                TokenKind::GtEq,
                TokenKind::Lt,
                TokenKind::Gt,
                TokenKind::Eq,
                TokenKind::Eof,
            ]
        );
    }

    #[test]
    fn ellipsis_and_dot() {
        assert_eq!(
            kinds("a.b ..."),
            vec![
                TokenKind::Ident("a".to_string()),
                TokenKind::Dot,
                TokenKind::Ident("b".to_string()),
                TokenKind::Ellipsis,
                TokenKind::Eof,
            ]
        );
    }

    #[test]
    fn line_comments_are_skipped() {
        assert_eq!(
            kinds("1 // comment until end of line\n2"),
            vec![
                TokenKind::Int("1".to_string()),
                TokenKind::Int("2".to_string()),
                TokenKind::Eof,
            ]
        );
    }

    #[test]
    fn string_literal_keeps_contents() {
        assert_eq!(
            kinds("\"hello\""),
            vec![TokenKind::Str("hello".to_string()), TokenKind::Eof]
        );
    }

    #[test]
    fn unterminated_string_is_reported() {
        let mut diagnostics = Diagnostics::new();
        let result = lex(Path::new("test.tn"), "\"oops", &mut diagnostics);
        assert_eq!(result, Err(ErrorReported));
        assert!(diagnostics.iter().any(|d| d.message.contains("unterminated")));
    }

    #[test]
    fn lone_colon_is_reported_with_position() {
        let mut diagnostics = Diagnostics::new();
        let result = lex(Path::new("test.tn"), "a\n  :", &mut diagnostics);
        assert_eq!(result, Err(ErrorReported));
        let diag = diagnostics.iter().next().unwrap();
        assert_eq!((diag.line, diag.column), (2, 3));
    }

    #[test]
    fn spans_are_byte_offsets() {
        let mut diagnostics = Diagnostics::new();
        let tokens = lex(Path::new("test.tn"), "ab cd", &mut diagnostics).unwrap();
        assert_eq!(tokens[0].span, Span::new(0, 2));
        assert_eq!(tokens[1].span, Span::new(3, 5));
    }
}

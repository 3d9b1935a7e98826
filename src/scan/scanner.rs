use std::iter::Peekable;
use std::ops::Range;
use std::str::CharIndices;

use crate::span::Span;

use super::{Literal, ScanError, ScanErrorKind, Token, TokenKind};

/// Scans `source` in one pass.
pub fn scan(source: &str) -> Scanned {
    Scanner::new(source).scan()
}

/// Result of a scan: every token that could be classified, terminated by
/// [`TokenKind::Eof`], plus the lexical errors in the order they were found.
#[derive(Debug, Clone, PartialEq)]
pub struct Scanned {
    pub tokens: Vec<Token>,
    pub errors: Vec<ScanError>,
}

impl Scanned {
    pub fn has_error(&self) -> bool {
        !self.errors.is_empty()
    }
}

#[derive(Debug)]
pub struct Scanner<'a> {
    source: &'a str,
    chars: Peekable<CharIndices<'a>>,
    tokens: Vec<Token>,
    errors: Vec<ScanError>,
    cursor: Range<usize>,
    /// Line the current lexeme starts on.
    start_line: usize,
    line: usize,
}

impl<'a> Scanner<'a> {
    pub fn new(source: &'a str) -> Self {
        Self {
            source,
            chars: source.char_indices().peekable(),
            tokens: vec![],
            errors: vec![],
            cursor: 0..0,
            start_line: 1,
            line: 1,
        }
    }

    pub fn scan(mut self) -> Scanned {
        while !self.is_end() {
            self.cursor.start = self.cursor.end;
            self.start_line = self.line;
            self.scan_token();
        }

        self.tokens.push(Token::eof(self.source.len(), self.line));

        Scanned {
            tokens: self.tokens,
            errors: self.errors,
        }
    }
}

impl Scanner<'_> {
    fn is_end(&self) -> bool {
        self.cursor.end == self.source.len()
    }

    fn lexeme(&self) -> &str {
        self.source.get(self.cursor.clone()).unwrap_or_default()
    }

    fn add_token(&mut self, kind: TokenKind) {
        self.add_literal(kind, None);
    }

    fn add_literal(&mut self, kind: TokenKind, literal: Option<Literal>) {
        let span = Span::new(self.cursor.clone(), self.start_line);
        let token = Token::new(kind, self.lexeme(), literal, span);
        self.tokens.push(token);
    }

    fn error(&mut self, kind: ScanErrorKind) {
        self.errors.push(ScanError {
            kind,
            span: Span::new(self.cursor.clone(), self.line),
        });
    }

    fn scan_token(&mut self) {
        let Some(c) = self.advance() else {
            return;
        };

        match c {
            '(' => self.add_token(TokenKind::LeftParen),
            ')' => self.add_token(TokenKind::RightParen),
            '{' => self.add_token(TokenKind::LeftBrace),
            '}' => self.add_token(TokenKind::RightBrace),
            ',' => self.add_token(TokenKind::Comma),
            '.' => self.add_token(TokenKind::Dot),
            '-' => self.add_token(TokenKind::Minus),
            '+' => self.add_token(TokenKind::Plus),
            ';' => self.add_token(TokenKind::Semicolon),
            '*' => self.add_token(TokenKind::Star),
            '!' => {
                let kind = if self.expect_char('=') {
                    TokenKind::BangEqual
                } else {
                    TokenKind::Bang
                };
                self.add_token(kind)
            }
            '=' => {
                let kind = if self.expect_char('=') {
                    TokenKind::EqualEqual
                } else {
                    TokenKind::Equal
                };
                self.add_token(kind)
            }
            '<' => {
                let kind = if self.expect_char('=') {
                    TokenKind::LessEqual
                } else {
                    TokenKind::Less
                };
                self.add_token(kind)
            }
            '>' => {
                let kind = if self.expect_char('=') {
                    TokenKind::GreaterEqual
                } else {
                    TokenKind::Greater
                };
                self.add_token(kind)
            }
            '/' => {
                if self.expect_char('/') {
                    while self.expect_pred(|c| c != '\n') {}
                } else {
                    self.add_token(TokenKind::Slash);
                }
            }
            ' ' | '\r' | '\t' => (),
            '\n' => self.line += 1,
            '"' => self.string(),
            c if c.is_ascii_digit() => self.number(),
            c if is_alpha(c) => self.identifier(),
            c => self.error(ScanErrorKind::UnexpectedCharacter(c)),
        }
    }

    fn string(&mut self) {
        loop {
            let Some(c) = self.advance() else {
                self.error(ScanErrorKind::UnterminatedString);
                return;
            };

            if c == '"' {
                break;
            }

            if c == '\n' {
                self.line += 1;
            }
        }

        // both quotes are one byte wide
        let body = &self.source[self.cursor.start + 1..self.cursor.end - 1];
        let literal = Literal::String(body.into());
        self.add_literal(TokenKind::String, Some(literal));
    }

    fn number(&mut self) {
        while self.expect_pred(|c| c.is_ascii_digit()) {}

        if self.peek() == Some('.') && self.peek_next_is(|c| c.is_ascii_digit()) {
            let _ = self.advance();

            while self.expect_pred(|c| c.is_ascii_digit()) {}
        }

        let x = self
            .lexeme()
            .parse::<f64>()
            .expect("ASCII digits with an optional fraction always parse as f64");
        self.add_literal(TokenKind::Number, Some(Literal::Number(x)));
    }

    fn identifier(&mut self) {
        while self.expect_pred(|c| is_alpha(c) || c.is_ascii_digit()) {}

        self.add_token(TokenKind::Identifier)
    }

    fn advance(&mut self) -> Option<char> {
        let (_, c) = self.chars.next()?;
        self.cursor.end = self
            .chars
            .peek()
            .map(|(i, _)| *i)
            .unwrap_or(self.source.len());
        Some(c)
    }

    fn peek(&mut self) -> Option<char> {
        self.chars.peek().map(|(_, c)| *c)
    }

    /// Looks one character past [`Self::peek`].
    fn peek_next_is<F>(&self, pred: F) -> bool
    where
        F: FnOnce(char) -> bool,
    {
        let mut rest = self.source.get(self.cursor.end..).unwrap_or_default().chars();
        let _ = rest.next();
        rest.next().is_some_and(pred)
    }

    fn expect_char(&mut self, expected: char) -> bool {
        self.expect_pred(|c| c == expected)
    }

    fn expect_pred<F>(&mut self, pred: F) -> bool
    where
        F: FnOnce(char) -> bool,
    {
        if self.peek().is_some_and(pred) {
            let _ = self.advance();
            true
        } else {
            false
        }
    }
}

fn is_alpha(c: char) -> bool {
    c.is_ascii_alphabetic() || c == '_'
}

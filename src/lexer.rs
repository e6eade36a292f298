use crate::error::ScanError;
use crate::keyword::keyword;
use crate::report::Reporter;
use crate::token::{Literal, Token, TokenType};

/// Single-pass scanner over one source text. Looks ahead at most two
/// characters and never backtracks.
pub struct Scanner<'s, 'r> {
    source: &'s str,
    start: usize,
    current: usize,
    line: u32,
    tokens: Vec<Token<'s>>,
    reporter: &'r mut dyn Reporter,
}

/// Scans `source` to completion, sending any lexical errors to `reporter`.
pub fn scan<'s>(source: &'s str, reporter: &mut dyn Reporter) -> Vec<Token<'s>> {
    Scanner::new(source, reporter).scan_tokens()
}

impl<'s, 'r> Scanner<'s, 'r> {
    pub fn new(source: &'s str, reporter: &'r mut dyn Reporter) -> Self {
        Self {
            source,
            start: 0,
            current: 0,
            line: 1,
            tokens: Vec::new(),
            reporter,
        }
    }

    /// Always ends with an `Eof` token.
    pub fn scan_tokens(mut self) -> Vec<Token<'s>> {
        while !self.is_end() {
            self.start = self.current;
            self.scan_token();
        }

        self.tokens.push(Token::eof(self.line));
        self.tokens
    }

    fn scan_token(&mut self) {
        let c = self.next_char();
        match c {
            '(' => self.add_token(TokenType::LeftParen),
            ')' => self.add_token(TokenType::RightParen),
            '{' => self.add_token(TokenType::LeftBrace),
            '}' => self.add_token(TokenType::RightBrace),
            ',' => self.add_token(TokenType::Comma),
            '.' => self.add_token(TokenType::Dot),
            '-' => self.add_token(TokenType::Minus),
            '+' => self.add_token(TokenType::Plus),
            ';' => self.add_token(TokenType::Semicolon),
            '*' => self.add_token(TokenType::Star),
            '!' => self.add_either('=', TokenType::BangEqual, TokenType::Bang),
            '=' => self.add_either('=', TokenType::EqualEqual, TokenType::Equal),
            '<' => self.add_either('=', TokenType::LessEqual, TokenType::Less),
            '>' => self.add_either('=', TokenType::GreaterEqual, TokenType::Greater),
            '/' => {
                if self.match_next('/') {
                    // The newline itself is left for the whitespace rule.
                    while self.peek_char() != '\n' && !self.is_end() {
                        let _ = self.next_char();
                    }
                } else {
                    self.add_token(TokenType::Slash);
                }
            }
            ' ' | '\r' | '\t' => {}
            '\n' => self.line += 1,
            '"' => self.string(),
            '0'..='9' => self.number(),
            'a'..='z' | 'A'..='Z' | '_' => self.identifier(),
            _ => self.error(ScanError::UnexpectedCharacter {
                character: c,
                line: self.line,
            }),
        }
    }

    fn is_end(&self) -> bool {
        self.current >= self.source.len()
    }

    /// Callers must check `is_end` first.
    fn next_char(&mut self) -> char {
        let c = self.peek_char();
        self.current += c.len_utf8();
        c
    }

    fn peek_char(&self) -> char {
        self.source[self.current..].chars().next().unwrap_or('\0')
    }

    fn peek_next_char(&self) -> char {
        self.source[self.current..].chars().nth(1).unwrap_or('\0')
    }

    fn match_next(&mut self, expected: char) -> bool {
        if self.is_end() || self.peek_char() != expected {
            return false;
        }
        self.current += expected.len_utf8();
        true
    }

    fn add_either(&mut self, second: char, matched: TokenType, single: TokenType) {
        if self.match_next(second) {
            self.add_token(matched);
        } else {
            self.add_token(single);
        }
    }

    fn add_token(&mut self, token_type: TokenType) {
        self.add_literal(token_type, None);
    }

    fn add_literal(&mut self, token_type: TokenType, literal: Option<Literal<'s>>) {
        let lexeme = &self.source[self.start..self.current];
        self.tokens.push(Token::new(token_type, lexeme, literal, self.line));
    }

    fn error(&mut self, error: ScanError) {
        self.reporter.report(error.line(), &error.to_string());
    }

    fn string(&mut self) {
        while self.peek_char() != '"' && !self.is_end() {
            if self.next_char() == '\n' {
                self.line += 1;
            }
        }

        if self.is_end() {
            self.error(ScanError::UnterminatedString { line: self.line });
            return;
        }

        // Consume the closing quote.
        let _ = self.next_char();
        let value = &self.source[self.start + 1..self.current - 1];
        self.add_literal(TokenType::String, Some(Literal::Str(value)));
    }

    fn number(&mut self) {
        while self.peek_char().is_ascii_digit() {
            let _ = self.next_char();
        }

        if self.peek_char() == '.' && self.peek_next_char().is_ascii_digit() {
            let _ = self.next_char();

            while self.peek_char().is_ascii_digit() {
                let _ = self.next_char();
            }
        }

        let lexeme = &self.source[self.start..self.current];
        let value = lexeme
            .parse::<f64>()
            .expect("digit run with at most one interior dot is a valid f64");
        self.add_literal(TokenType::Number, Some(Literal::Number(value)));
    }

    fn identifier(&mut self) {
        while self.peek_char().is_ascii_alphanumeric() || self.peek_char() == '_' {
            let _ = self.next_char();
        }

        let text = &self.source[self.start..self.current];
        self.add_token(keyword(text).unwrap_or(TokenType::Identifier));
    }
}

use std::fmt::Display;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenType {
    // Single-character tokens.
    LeftParen,
    RightParen,
    LeftBrace,
    RightBrace,
    Comma,
    Dot,
    Minus,
    Plus,
    Semicolon,
    Slash,
    Star,
    // One or two character tokens.
    Bang,
    BangEqual,
    Equal,
    EqualEqual,
    Greater,
    GreaterEqual,
    Less,
    LessEqual,
    // Literals.
    Identifier,
    String,
    Number,
    // Keywords.
    And,
    Class,
    Else,
    False,
    For,
    Fun,
    If,
    Nul,
    Or,
    Print,
    Return,
    Super,
    This,
    True,
    Var,
    While,

    Eof,
}

impl Display for TokenType {
    /// Renders the kind as `SCREAMING_SNAKE`, e.g. `BANG_EQUAL`.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = format!("{:?}", self);
        let mut out = String::with_capacity(name.len() + 4);
        for (i, c) in name.char_indices() {
            if c.is_ascii_uppercase() && i > 0 {
                out.push('_');
            }
            out.push(c.to_ascii_uppercase());
        }
        f.write_str(&out)
    }
}

/// Decoded value carried by `String` and `Number` tokens.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Literal<'s> {
    /// Text between the quotes, no escapes processed.
    Str(&'s str),
    Number(f64),
}

impl Display for Literal<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Literal::Str(s) => write!(f, "{}", s),
            // Debug keeps the fractional part: 123.0 rather than 123.
            Literal::Number(n) => write!(f, "{:?}", n),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Token<'s> {
    pub kind: TokenType,
    pub lexeme: &'s str,
    pub literal: Option<Literal<'s>>,
    pub line: u32,
}

impl<'s> Token<'s> {
    pub fn new(kind: TokenType, lexeme: &'s str, literal: Option<Literal<'s>>, line: u32) -> Self {
        Self {
            kind,
            lexeme,
            literal,
            line,
        }
    }

    pub fn eof(line: u32) -> Self {
        Self::new(TokenType::Eof, "", None, line)
    }
}

impl Display for Token<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.kind)?;
        if !self.lexeme.is_empty() {
            write!(f, " {}", self.lexeme)?;
        }
        if let Some(literal) = &self.literal {
            write!(f, " {}", literal)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {

    use super::*;

    #[test]
    fn test_kind_names() {
        assert_eq!(TokenType::LeftParen.to_string(), "LEFT_PAREN");
        assert_eq!(TokenType::BangEqual.to_string(), "BANG_EQUAL");
        assert_eq!(TokenType::Nul.to_string(), "NUL");
        assert_eq!(TokenType::Eof.to_string(), "EOF");
    }

    #[test]
    fn test_token_display() {
        let number = Token::new(TokenType::Number, "123", Some(Literal::Number(123.0)), 1);
        assert_eq!(number.to_string(), "NUMBER 123 123.0");

        let string = Token::new(TokenType::String, "\"hi\"", Some(Literal::Str("hi")), 2);
        assert_eq!(string.to_string(), "STRING \"hi\" hi");

        let ident = Token::new(TokenType::Identifier, "foo", None, 3);
        assert_eq!(ident.to_string(), "IDENTIFIER foo");

        assert_eq!(Token::eof(4).to_string(), "EOF");
    }

    #[test]
    fn test_fractional_number_display() {
        assert_eq!(Literal::Number(45.67).to_string(), "45.67");
    }

    #[test]
    fn test_large_number_display() {
        // Rust float formatting, not Java's: 1e16 rather than 1.0E16.
        assert_eq!(Literal::Number(1e16).to_string(), "1e16");
        assert_eq!(Literal::Number(f64::INFINITY).to_string(), "inf");
    }
}

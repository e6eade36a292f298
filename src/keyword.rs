use std::collections::HashMap;

use lazy_static::lazy_static;

use crate::token::TokenType;

lazy_static! {
    static ref KEYWORDS: HashMap<&'static str, TokenType> = HashMap::from([
        ("and", TokenType::And),
        ("class", TokenType::Class),
        ("else", TokenType::Else),
        ("false", TokenType::False),
        ("fun", TokenType::Fun),
        ("for", TokenType::For),
        ("if", TokenType::If),
        ("nul", TokenType::Nul),
        ("or", TokenType::Or),
        ("print", TokenType::Print),
        ("return", TokenType::Return),
        ("super", TokenType::Super),
        ("this", TokenType::This),
        ("true", TokenType::True),
        ("var", TokenType::Var),
        ("while", TokenType::While),
    ]);
}

/// Reserved kind for an exact spelling, if any.
pub fn keyword(text: &str) -> Option<TokenType> {
    KEYWORDS.get(text).copied()
}

#[cfg(test)]
mod tests {

    use super::*;

    #[test]
    fn test_all_reserved_words() {
        let words = [
            "and", "class", "else", "false", "fun", "for", "if", "nul", "or", "print", "return",
            "super", "this", "true", "var", "while",
        ];
        for word in words {
            assert!(keyword(word).is_some(), "{} should be reserved", word);
        }
        assert_eq!(KEYWORDS.len(), 16);
    }

    #[test]
    fn test_exact_match_only() {
        assert_eq!(keyword("class"), Some(TokenType::Class));
        assert_eq!(keyword("classy"), None);
        assert_eq!(keyword("Class"), None);
        assert_eq!(keyword("nil"), None);
        assert_eq!(keyword(""), None);
    }
}

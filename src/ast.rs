use std::fmt::Display;

use crate::token::Token;

#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Number(f64),
    Str(String),
    Bool(bool),
    Nul,
}

impl Display for Value {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Value::Number(v) => write!(f, "{:?}", v),
            Value::Str(v) => write!(f, "{}", v),
            Value::Bool(v) => write!(f, "{}", v),
            Value::Nul => write!(f, "nil"),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Expr<'s> {
    Binary {
        left: Box<Expr<'s>>,
        operator: Token<'s>,
        right: Box<Expr<'s>>,
    },
    Grouping(Box<Expr<'s>>),
    Literal(Value),
    Unary {
        operator: Token<'s>,
        right: Box<Expr<'s>>,
    },
}

/// Renders an expression in prefix form, e.g. `(* (- 123.0) (group 45.67))`.
pub fn print(expr: &Expr) -> String {
    match expr {
        Expr::Binary {
            left,
            operator,
            right,
        } => parenthesize(operator.lexeme, &[left.as_ref(), right.as_ref()]),
        Expr::Grouping(inner) => parenthesize("group", &[inner.as_ref()]),
        Expr::Literal(value) => value.to_string(),
        Expr::Unary { operator, right } => parenthesize(operator.lexeme, &[right.as_ref()]),
    }
}

fn parenthesize(name: &str, exprs: &[&Expr]) -> String {
    let mut out = format!("({}", name);
    for expr in exprs {
        out.push(' ');
        out.push_str(&print(expr));
    }
    out.push(')');
    out
}

#[cfg(test)]
mod tests {

    use super::*;
    use crate::token::TokenType;

    #[test]
    fn test_print_nested() {
        let expr = Expr::Binary {
            left: Box::new(Expr::Unary {
                operator: Token::new(TokenType::Minus, "-", None, 1),
                right: Box::new(Expr::Literal(Value::Number(123.0))),
            }),
            operator: Token::new(TokenType::Star, "*", None, 1),
            right: Box::new(Expr::Grouping(Box::new(Expr::Literal(Value::Number(45.67))))),
        };
        assert_eq!(print(&expr), "(* (- 123.0) (group 45.67))");
    }

    #[test]
    fn test_print_literals() {
        assert_eq!(print(&Expr::Literal(Value::Nul)), "nil");
        assert_eq!(print(&Expr::Literal(Value::Bool(true))), "true");
        assert_eq!(print(&Expr::Literal(Value::Str("hi".to_string()))), "hi");
        assert_eq!(print(&Expr::Literal(Value::Number(1e16))), "1e16");
    }

    #[test]
    fn test_print_from_scanned_tokens() {
        let mut errors: Vec<(u32, String)> = Vec::new();
        let tokens = crate::lexer::scan("!true", &mut errors);
        let expr = Expr::Unary {
            operator: tokens[0],
            right: Box::new(Expr::Literal(Value::Bool(true))),
        };
        assert_eq!(print(&expr), "(! true)");
    }
}

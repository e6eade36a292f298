pub mod ast;
pub mod error;
pub mod keyword;
pub mod lexer;
pub mod report;
pub mod token;

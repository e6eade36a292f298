use thiserror::Error;

/// Lexical errors. None of them stop a scan.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ScanError {
    #[error("Unexpected character '{character}'")]
    UnexpectedCharacter { character: char, line: u32 },
    #[error("Unterminated string")]
    UnterminatedString { line: u32 },
}

impl ScanError {
    pub fn line(&self) -> u32 {
        match self {
            ScanError::UnexpectedCharacter { line, .. } => *line,
            ScanError::UnterminatedString { line } => *line,
        }
    }
}

#[cfg(test)]
mod tests {

    use super::*;

    #[test]
    fn test_messages() {
        let err = ScanError::UnexpectedCharacter {
            character: '@',
            line: 3,
        };
        assert_eq!(err.to_string(), "Unexpected character '@'");
        assert_eq!(err.line(), 3);

        let err = ScanError::UnterminatedString { line: 7 };
        assert_eq!(err.to_string(), "Unterminated string");
        assert_eq!(err.line(), 7);
    }
}

//! Classified output unit of the engine
//!
//! A token pairs a lexeme with a numeric attribute code, or records an
//! automaton rejection together with the source line it occurred on.
//! Deduplication identity is the lexeme text alone.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Result of token creation
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Token {
    /// Automaton-accepted lexeme with its category-derived attribute
    Valid { lexeme: String, attribute: i64 },
    /// Automaton-rejected lexeme with the line it was read from
    Error { lexeme: String, line: u32 },
}

impl Token {
    pub fn valid(lexeme: &str, attribute: i64) -> Self {
        Token::Valid {
            lexeme: lexeme.to_string(),
            attribute,
        }
    }

    pub fn error(lexeme: &str, line: u32) -> Self {
        Token::Error {
            lexeme: lexeme.to_string(),
            line,
        }
    }

    pub fn lexeme(&self) -> &str {
        match self {
            Token::Valid { lexeme, .. } | Token::Error { lexeme, .. } => lexeme,
        }
    }

    /// Attribute code for valid tokens; rejected tokens have none
    pub fn attribute(&self) -> Option<i64> {
        match self {
            Token::Valid { attribute, .. } => Some(*attribute),
            Token::Error { .. } => None,
        }
    }

    /// Source line for rejected tokens
    pub fn line(&self) -> Option<u32> {
        match self {
            Token::Valid { .. } => None,
            Token::Error { line, .. } => Some(*line),
        }
    }

    pub fn is_error(&self) -> bool {
        matches!(self, Token::Error { .. })
    }

    /// Lexeme-text identity used for symbol-table deduplication
    pub fn same_symbol(&self, other: &Token) -> bool {
        self.lexeme() == other.lexeme()
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Token::Valid { lexeme, attribute } => {
                write!(f, "{} [{}]", lexeme, attribute)
            }
            Token::Error { lexeme, line } => {
                write!(f, "{} [rejected at line {}]", lexeme, line)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;

    #[test]
    fn test_valid_token_accessors() {
        let token = Token::valid("count", 103);

        assert_eq!(token.lexeme(), "count");
        assert_eq!(token.attribute(), Some(103));
        assert_eq!(token.line(), None);
        assert!(!token.is_error());
    }

    #[test]
    fn test_error_token_accessors() {
        let token = Token::error("!", 12);

        assert_eq!(token.lexeme(), "!");
        assert_eq!(token.attribute(), None);
        assert_eq!(token.line(), Some(12));
        assert!(token.is_error());
    }

    #[test]
    fn test_symbol_identity_ignores_attribute() {
        let first = Token::valid("x", 100);
        let second = Token::valid("x", 101);
        let other = Token::valid("y", 100);

        assert!(first.same_symbol(&second));
        assert!(!first.same_symbol(&other));
    }

    #[test]
    fn test_display() {
        assert_eq!(Token::valid("if", 1).to_string(), "if [1]");
        assert_eq!(Token::error("@", 4).to_string(), "@ [rejected at line 4]");
    }

    #[test]
    fn test_serde_round_trip() {
        let token = Token::valid("if", 1);
        let json = serde_json::to_string(&token).unwrap();
        let back: Token = serde_json::from_str(&json).unwrap();

        assert_matches!(back, Token::Valid { attribute: 1, .. });
        assert_eq!(back.lexeme(), "if");
    }
}

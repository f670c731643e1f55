//! Error types for expression parsing

use crate::expr::symbol::Symbol;
use std::fmt;

/// Reasons a symbol sequence is rejected
///
/// Positions are symbol indices into the parser input. When the cursor ran past the end,
/// `position` equals the input length and `found` is [`Symbol::Eof`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParseError {
    /// A digit was required but another symbol was found
    ExpectedLiteral { position: usize, found: Symbol },
    /// A specific symbol was required but another symbol was found
    ExpectedSymbol {
        position: usize,
        expected: Symbol,
        found: Symbol,
    },
}

impl ParseError {
    pub fn position(&self) -> usize {
        match self {
            ParseError::ExpectedLiteral { position, .. }
            | ParseError::ExpectedSymbol { position, .. } => *position,
        }
    }

    pub fn found(&self) -> Symbol {
        match self {
            ParseError::ExpectedLiteral { found, .. }
            | ParseError::ExpectedSymbol { found, .. } => *found,
        }
    }
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParseError::ExpectedLiteral { position, found } => {
                write!(f, "digit expected at position {} but found {}", position, found)
            }
            ParseError::ExpectedSymbol {
                position,
                expected,
                found,
            } => write!(
                f,
                "{} expected at position {} but found {}",
                expected, position, found
            ),
        }
    }
}

impl std::error::Error for ParseError {}

/// Type alias for parser results
pub type ParseResult<T> = Result<T, ParseError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_expected_literal_display() {
        let err = ParseError::ExpectedLiteral {
            position: 1,
            found: Symbol::Add,
        };
        assert_eq!(err.to_string(), "digit expected at position 1 but found +");
        assert_eq!(err.position(), 1);
        assert_eq!(err.found(), Symbol::Add);
    }

    #[test]
    fn test_expected_symbol_display() {
        let err = ParseError::ExpectedSymbol {
            position: 3,
            expected: Symbol::CloseBracket,
            found: Symbol::Eof,
        };
        assert_eq!(
            err.to_string(),
            ") expected at position 3 but found end of input"
        );
        assert_eq!(err.found(), Symbol::Eof);
    }
}

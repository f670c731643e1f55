//! Symbol alphabet for filter expressions
//!
//!     The parser never sees characters. It works on a flat sequence of symbols drawn from a
//!     closed alphabet, produced by the [lexing](crate::expr::lexing) stage (or by any other
//!     tokenizer honouring the same contract).
//!
//! Alphabet
//!
//!     - Literals: the decimal digits `0` to `9`, one symbol per digit.
//!     - Operators: `+`, `-`, `*`.
//!     - Grouping markers: `(`, `)`.
//!     - The end-of-input sentinel. It is never part of parser input; the parser synthesizes it
//!       whenever its cursor runs past the end, so diagnostics can name it.
//!
//!     The same type labels tree nodes: digits label leaves, operators label binary nodes and
//!     `(` labels group nodes. `)` and the sentinel never label a node.

use std::fmt;
use std::str::FromStr;

/// A decimal digit in `0..=9`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Digit(u8);

impl Digit {
    /// Returns `None` when `value` is not a single decimal digit.
    pub fn new(value: u8) -> Option<Self> {
        (value <= 9).then_some(Digit(value))
    }

    pub fn from_char(ch: char) -> Option<Self> {
        ch.to_digit(10).map(|value| Digit(value as u8))
    }

    pub fn value(self) -> u8 {
        self.0
    }

    pub fn as_char(self) -> char {
        char::from(b'0' + self.0)
    }
}

impl fmt::Display for Digit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Binary operators of the expression grammar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operator {
    Add,
    Subtract,
    Multiply,
}

impl Operator {
    /// Binding strength; higher binds tighter.
    ///
    /// `*` is reserved for a tighter layer beneath `+`/`-`. The current grammar only produces
    /// the additive level, but formatters already respect the ordering.
    pub fn precedence(self) -> u8 {
        match self {
            Operator::Add | Operator::Subtract => 1,
            Operator::Multiply => 2,
        }
    }

    pub fn symbol(self) -> Symbol {
        Symbol::from(self)
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&Symbol::from(*self), f)
    }
}

/// A terminal value of the expression grammar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Symbol {
    Digit(Digit),
    Add,
    Subtract,
    Multiply,
    OpenBracket,
    CloseBracket,
    /// End-of-input sentinel, synthesized by the parser.
    Eof,
}

impl Symbol {
    /// Shorthand for a digit symbol. Returns `None` for values above 9.
    pub fn digit(value: u8) -> Option<Self> {
        Digit::new(value).map(Symbol::Digit)
    }

    pub fn is_digit(&self) -> bool {
        matches!(self, Symbol::Digit(_))
    }

    pub fn as_digit(&self) -> Option<Digit> {
        match self {
            Symbol::Digit(digit) => Some(*digit),
            _ => None,
        }
    }

    pub fn as_operator(&self) -> Option<Operator> {
        match self {
            Symbol::Add => Some(Operator::Add),
            Symbol::Subtract => Some(Operator::Subtract),
            Symbol::Multiply => Some(Operator::Multiply),
            _ => None,
        }
    }

    /// `+` or `-`, the operators folded by the expression production.
    pub fn is_additive(&self) -> bool {
        matches!(self, Symbol::Add | Symbol::Subtract)
    }

    /// Number of children a node labeled with this symbol carries.
    ///
    /// `None` for symbols that never label a node (`)` and the sentinel).
    pub fn arity(&self) -> Option<usize> {
        match self {
            Symbol::Digit(_) => Some(0),
            Symbol::Add | Symbol::Subtract | Symbol::Multiply => Some(2),
            Symbol::OpenBracket => Some(1),
            Symbol::CloseBracket | Symbol::Eof => None,
        }
    }
}

impl From<Digit> for Symbol {
    fn from(digit: Digit) -> Self {
        Symbol::Digit(digit)
    }
}

impl From<Operator> for Symbol {
    fn from(op: Operator) -> Self {
        match op {
            Operator::Add => Symbol::Add,
            Operator::Subtract => Symbol::Subtract,
            Operator::Multiply => Symbol::Multiply,
        }
    }
}

impl fmt::Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Symbol::Digit(digit) => write!(f, "{}", digit),
            Symbol::Add => write!(f, "+"),
            Symbol::Subtract => write!(f, "-"),
            Symbol::Multiply => write!(f, "*"),
            Symbol::OpenBracket => write!(f, "("),
            Symbol::CloseBracket => write!(f, ")"),
            Symbol::Eof => write!(f, "end of input"),
        }
    }
}

/// Labels serialize as their source text (`"+"`, `"7"`).
impl serde::Serialize for Symbol {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.collect_str(self)
    }
}

/// Error for text that is not part of the symbol alphabet
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownSymbol(pub String);

impl fmt::Display for UnknownSymbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Unknown symbol '{}'", self.0)
    }
}

impl std::error::Error for UnknownSymbol {}

impl TryFrom<char> for Symbol {
    type Error = UnknownSymbol;

    fn try_from(ch: char) -> Result<Self, Self::Error> {
        if let Some(digit) = Digit::from_char(ch) {
            return Ok(Symbol::Digit(digit));
        }
        match ch {
            '+' => Ok(Symbol::Add),
            '-' => Ok(Symbol::Subtract),
            '*' => Ok(Symbol::Multiply),
            '(' => Ok(Symbol::OpenBracket),
            ')' => Ok(Symbol::CloseBracket),
            other => Err(UnknownSymbol(other.to_string())),
        }
    }
}

impl FromStr for Symbol {
    type Err = UnknownSymbol;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.chars();
        match (chars.next(), chars.next()) {
            (Some(ch), None) => Symbol::try_from(ch).map_err(|_| UnknownSymbol(s.to_string())),
            _ => Err(UnknownSymbol(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_digit_bounds() {
        assert_eq!(Digit::new(0).map(Digit::value), Some(0));
        assert_eq!(Digit::new(9).map(Digit::value), Some(9));
        assert_eq!(Digit::new(10), None);
        assert_eq!(Digit::from_char('7').map(Digit::as_char), Some('7'));
        assert_eq!(Digit::from_char('x'), None);
    }

    #[test]
    fn test_symbol_display() {
        assert_eq!(Symbol::digit(4).unwrap().to_string(), "4");
        assert_eq!(Symbol::Add.to_string(), "+");
        assert_eq!(Symbol::Subtract.to_string(), "-");
        assert_eq!(Symbol::Multiply.to_string(), "*");
        assert_eq!(Symbol::OpenBracket.to_string(), "(");
        assert_eq!(Symbol::CloseBracket.to_string(), ")");
        assert_eq!(Symbol::Eof.to_string(), "end of input");
    }

    #[test]
    fn test_symbol_from_str() {
        assert_eq!("3".parse::<Symbol>(), Ok(Symbol::digit(3).unwrap()));
        assert_eq!("-".parse::<Symbol>(), Ok(Symbol::Subtract));
        assert_eq!(")".parse::<Symbol>(), Ok(Symbol::CloseBracket));
        assert_eq!(
            "12".parse::<Symbol>(),
            Err(UnknownSymbol("12".to_string()))
        );
        assert_eq!("".parse::<Symbol>(), Err(UnknownSymbol(String::new())));
        assert_eq!("a".parse::<Symbol>(), Err(UnknownSymbol("a".to_string())));
    }

    #[test]
    fn test_arity() {
        assert_eq!(Symbol::digit(0).unwrap().arity(), Some(0));
        assert_eq!(Symbol::Add.arity(), Some(2));
        assert_eq!(Symbol::Multiply.arity(), Some(2));
        assert_eq!(Symbol::OpenBracket.arity(), Some(1));
        assert_eq!(Symbol::CloseBracket.arity(), None);
        assert_eq!(Symbol::Eof.arity(), None);
    }

    #[test]
    fn test_operator_round_trip() {
        for op in [Operator::Add, Operator::Subtract, Operator::Multiply] {
            assert_eq!(op.symbol().as_operator(), Some(op));
        }
        assert!(Operator::Multiply.precedence() > Operator::Add.precedence());
        assert_eq!(Operator::Add.precedence(), Operator::Subtract.precedence());
    }

    #[test]
    fn test_is_additive() {
        assert!(Symbol::Add.is_additive());
        assert!(Symbol::Subtract.is_additive());
        assert!(!Symbol::Multiply.is_additive());
        assert!(!Symbol::Eof.is_additive());
    }

    #[test]
    fn test_serializes_as_text() {
        let json = serde_json::to_string(&Symbol::Subtract).unwrap();
        assert_eq!(json, "\"-\"");
    }
}

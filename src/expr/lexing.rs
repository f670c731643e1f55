//! Tokenization of filter expression text
//!
//! This module turns source strings into the [`Symbol`] sequences consumed by the parser,
//! using the logos lexer library.
//!
//! Lexing is intentionally dumb: every digit is its own symbol and whitespace is dropped.
//! Whether symbols are in a legal order is the parser's call, so `12` lexes fine as two
//! digits and is rejected later.

use super::symbol::{Digit, Symbol};
use logos::Logos;
use std::fmt;
use std::ops::Range;

#[derive(Logos, Debug, Clone, Copy, PartialEq)]
#[logos(skip r"[ \t\r\n]+")]
enum RawToken {
    #[regex("[0-9]", |lex| lex.slice().chars().next().and_then(Digit::from_char))]
    Digit(Digit),
    #[token("+")]
    Add,
    #[token("-")]
    Subtract,
    #[token("*")]
    Multiply,
    #[token("(")]
    OpenBracket,
    #[token(")")]
    CloseBracket,
}

impl From<RawToken> for Symbol {
    fn from(token: RawToken) -> Self {
        match token {
            RawToken::Digit(digit) => Symbol::Digit(digit),
            RawToken::Add => Symbol::Add,
            RawToken::Subtract => Symbol::Subtract,
            RawToken::Multiply => Symbol::Multiply,
            RawToken::OpenBracket => Symbol::OpenBracket,
            RawToken::CloseBracket => Symbol::CloseBracket,
        }
    }
}

/// Text that does not belong to the symbol alphabet
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LexError {
    /// Byte range of the offending text
    pub span: Range<usize>,
    pub text: String,
}

impl fmt::Display for LexError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Unexpected character '{}' at {}..{}",
            self.text, self.span.start, self.span.end
        )
    }
}

impl std::error::Error for LexError {}

pub type LexResult<T> = Result<T, LexError>;

/// Tokenize source text, keeping the byte range of every symbol.
///
/// Stops at the first character outside the alphabet.
pub fn tokenize_with_spans(source: &str) -> LexResult<Vec<(Symbol, Range<usize>)>> {
    let mut lexer = RawToken::lexer(source);
    let mut symbols = Vec::new();

    while let Some(result) = lexer.next() {
        match result {
            Ok(token) => symbols.push((Symbol::from(token), lexer.span())),
            Err(()) => {
                let error = LexError {
                    span: lexer.span(),
                    text: lexer.slice().to_string(),
                };
                tracing::debug!(%error, "rejecting expression text");
                return Err(error);
            }
        }
    }

    tracing::trace!(count = symbols.len(), "tokenized expression");
    Ok(symbols)
}

/// Tokenize source text into symbols.
pub fn tokenize(source: &str) -> LexResult<Vec<Symbol>> {
    Ok(tokenize_with_spans(source)?
        .into_iter()
        .map(|(symbol, _)| symbol)
        .collect())
}

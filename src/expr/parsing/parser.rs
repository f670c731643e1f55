//! Recursive descent parser for filter expressions
//!
//!     The parser reads symbols left to right with one symbol of lookahead. Each grammar
//!     production is a method, so tighter-binding layers (a `factor` production for `*`, a
//!     bracketed group) can be slotted beneath [`Parser::expression`] without touching the
//!     tree model.
//!
//! Saved Subtree
//!
//!     Operators are folded iteratively. After the first term, the tree built so far is set
//!     aside as the saved subtree, the operator and the next term are consumed, and a new node
//!     labeled with the operator takes `[saved, term]` as children. The new node becomes the
//!     working tree and the loop repeats, which makes `+` and `-` left-associative.
//!
//! End of Input
//!
//!     Running past the last symbol yields [`Symbol::Eof`] instead of failing, so every
//!     diagnostic can name what was actually found. The fold stops at the first symbol that is
//!     not `+` or `-`; anything from there on is left unconsumed (see [`Parser::remaining`]).

use super::error::{ParseError, ParseResult};
use crate::expr::symbol::{Operator, Symbol};
use crate::expr::tree::Node;

/// Parse a symbol sequence into an expression tree.
///
/// Returns `Ok(None)` for an empty sequence.
pub fn parse(symbols: &[Symbol]) -> ParseResult<Option<Node>> {
    Parser::new(symbols).parse()
}

/// Parser state for a single symbol sequence.
#[derive(Debug, Clone)]
pub struct Parser<'a> {
    input: &'a [Symbol],
    pos: usize,
}

impl<'a> Parser<'a> {
    pub fn new(input: &'a [Symbol]) -> Self {
        Parser { input, pos: 0 }
    }

    /// Index of the next unconsumed symbol.
    pub fn position(&self) -> usize {
        self.pos
    }

    /// Symbols not consumed so far.
    pub fn remaining(&self) -> &'a [Symbol] {
        &self.input[self.pos..]
    }

    /// Parse the whole input from the start.
    ///
    /// The cursor is reset first, so calling this twice gives the same answer.
    pub fn parse(&mut self) -> ParseResult<Option<Node>> {
        self.pos = 0;
        if self.peek() == Symbol::Eof {
            return Ok(None);
        }

        let result = self.expression();
        match &result {
            Ok(tree) => tracing::trace!(
                consumed = self.pos,
                nodes = tree.node_count(),
                "parsed expression"
            ),
            Err(error) => tracing::debug!(%error, "rejected expression"),
        }
        result.map(Some)
    }

    /// Consume `expected`, or fail without consuming anything.
    pub fn expect(&mut self, expected: Symbol) -> ParseResult<Symbol> {
        let found = self.peek();
        if found == expected {
            return Ok(self.advance());
        }
        Err(ParseError::ExpectedSymbol {
            position: self.pos,
            expected,
            found,
        })
    }

    /// `expression := term ( ('+' | '-') term )*`
    fn expression(&mut self) -> ParseResult<Node> {
        let mut tree = self.term()?;
        while let Some(op) = self.peek_additive() {
            let saved = tree;
            tree = self.operation(op, saved)?;
        }
        Ok(tree)
    }

    /// Consume `op` and the term after it, combining them with the saved left operand.
    fn operation(&mut self, op: Operator, saved: Node) -> ParseResult<Node> {
        self.expect(op.symbol())?;
        let right = self.term()?;
        Ok(Node::binary(op, saved, right))
    }

    /// `term := DIGIT`
    fn term(&mut self) -> ParseResult<Node> {
        self.number()
    }

    fn number(&mut self) -> ParseResult<Node> {
        match self.peek() {
            Symbol::Digit(digit) => {
                self.advance();
                Ok(Node::leaf(digit))
            }
            found => Err(ParseError::ExpectedLiteral {
                position: self.pos,
                found,
            }),
        }
    }

    fn peek_additive(&self) -> Option<Operator> {
        let next = self.peek();
        if next.is_additive() {
            next.as_operator()
        } else {
            None
        }
    }

    fn peek(&self) -> Symbol {
        self.input.get(self.pos).copied().unwrap_or(Symbol::Eof)
    }

    fn advance(&mut self) -> Symbol {
        let symbol = self.peek();
        if self.pos < self.input.len() {
            self.pos += 1;
            tracing::trace!(position = self.pos - 1, %symbol, "consumed symbol");
        }
        symbol
    }
}

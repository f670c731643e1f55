//! # filterexpr
//!
//! A parser for the filter expressions used inside path-query bracket predicates.
//!
//! The pipeline is deliberately small:
//!
//!     text --(expr::lexing)--> symbols --(expr::parsing)--> tree --(expr::formats)--> output
//!
//! Only the parsing stage carries real grammar. Lexing exists so the parser can be driven
//! from strings, and formats exist so trees can be inspected. Evaluating a tree is the
//! business of the surrounding path-query engine.
//!
//! For writing parser tests, see the [testing module](crate::expr::testing).

pub mod expr;

pub use expr::parsing::{parse, ParseError, ParseResult};
pub use expr::symbol::{Digit, Operator, Symbol};
pub use expr::tree::Node;

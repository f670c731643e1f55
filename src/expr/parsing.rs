//! Parsing module for filter expressions
//!
//! Turns a symbol sequence into an expression [`Node`](crate::expr::tree::Node) tree.
//!
//! ## Grammar
//!
//! ```text
//! expression := term ( ('+' | '-') term )*
//! term       := DIGIT
//! ```
//!
//! Same-precedence operators associate to the left: `1+2-3` is `(1+2)-3`.
//!
//! ## Outcomes
//!
//! - `Ok(None)`: the input was empty. Nothing to parse is not an error.
//! - `Ok(Some(root))`: the parsed tree.
//! - `Err(ParseError)`: the input is malformed. The whole input is rejected, no partial tree
//!   is produced.

mod error;
mod parser;

pub use error::{ParseError, ParseResult};
pub use parser::{parse, Parser};

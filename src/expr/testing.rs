//! Testing utilities for expression trees
//!
//!     Parser tests should check the whole shape of a tree, not just its root or its node
//!     count. Two helpers make that cheap:
//!
//!         1. [symbols] builds parser input from compact text, so tests read like the
//!            expression they exercise.
//!         2. [assert_tree](fn@assert_tree) walks a tree with a fluent API and reports the
//!            path of the failing node (`root[0][1]`).
//!
//!     ```rust,ignore
//!     use filterexpr::expr::parsing::parse;
//!     use filterexpr::expr::testing::{assert_tree, symbols};
//!
//!     let tree = parse(&symbols("1+2-3")).unwrap().unwrap();
//!
//!     assert_tree(&tree)
//!         .label("-")
//!         .child_count(2)
//!         .child(0, |left| {
//!             left.label("+").child(0, |c| c.leaf("1")).child(1, |c| c.leaf("2"));
//!         })
//!         .child(1, |right| {
//!             right.leaf("3");
//!         });
//!     ```
//!
//!     The helpers panic on failure and are meant for tests only.

mod tree_assertions;

pub use tree_assertions::{assert_tree, NodeAssertion};

use crate::expr::lexing::tokenize;
use crate::expr::symbol::Symbol;

/// Tokenize `source` for use as parser input.
///
/// Panics if `source` contains characters outside the symbol alphabet.
pub fn symbols(source: &str) -> Vec<Symbol> {
    match tokenize(source) {
        Ok(symbols) => symbols,
        Err(error) => panic!("invalid test expression {:?}: {}", source, error),
    }
}

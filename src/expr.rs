//! Main module for filter expression functionality

pub mod formats;
pub mod lexing;
pub mod parsing;
pub mod symbol;
pub mod testing;
pub mod tree;

//! Output formats for expression trees
//!
//! Trees can be serialized through a [`FormatRegistry`] of named [`Formatter`]s:
//!
//! - `tree`: indented one-line-per-node dump, for logs and tests
//! - `json` / `yaml`: structural serialization of labels and children
//! - `infix`: expression text that tokenizes back into the same symbols
//!
//! None of these is a stable interchange format.

pub mod indented;
pub mod infix;
pub mod registry;
pub mod structured;

pub use indented::{to_indented_str, IndentedFormatter, RenderOptions};
pub use infix::{to_infix_str, InfixFormatter};
pub use registry::{FormatError, FormatRegistry, Formatter};
pub use structured::{JsonFormatter, YamlFormatter, MAX_SERIALIZE_DEPTH};

//! Structured (serde-backed) formatters
//!
//! Both formats emit the same shape: `label` as the symbol text and `children` as a list.
//!
//! Serde walks the tree recursively, one set of stack frames per level, so trees deeper
//! than [`MAX_SERIALIZE_DEPTH`] are refused with a [`FormatError`] before serializing.
//! Long chains can still be printed with the `tree` and `infix` formats.

use super::registry::{FormatError, Formatter};
use crate::expr::tree::Node;

/// Deepest tree the serde-backed formats will serialize
pub const MAX_SERIALIZE_DEPTH: usize = 256;

fn check_depth(node: &Node) -> Result<(), FormatError> {
    let depth = node.depth();
    if depth > MAX_SERIALIZE_DEPTH {
        return Err(FormatError::SerializationError(format!(
            "tree depth {depth} exceeds the limit of {MAX_SERIALIZE_DEPTH}"
        )));
    }
    Ok(())
}

/// Pretty-printed JSON
pub struct JsonFormatter;

impl Formatter for JsonFormatter {
    fn name(&self) -> &str {
        "json"
    }

    fn serialize(&self, node: &Node) -> Result<String, FormatError> {
        check_depth(node)?;
        serde_json::to_string_pretty(node)
            .map_err(|e| FormatError::SerializationError(e.to_string()))
    }

    fn description(&self) -> &str {
        "Tree as pretty-printed JSON"
    }
}

/// YAML, matching the documents path queries usually run against
pub struct YamlFormatter;

impl Formatter for YamlFormatter {
    fn name(&self) -> &str {
        "yaml"
    }

    fn serialize(&self, node: &Node) -> Result<String, FormatError> {
        check_depth(node)?;
        serde_yaml::to_string(node).map_err(|e| FormatError::SerializationError(e.to_string()))
    }

    fn description(&self) -> &str {
        "Tree as YAML"
    }
}

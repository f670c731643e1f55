//! Indented formatter for expression trees
//!
//! One line per node, children beneath their parent and indented one level deeper. Group
//! nodes print as `()`.
//!
//! Example, `1 + 2 - 3` with the default four spaces per level:
//!
//!     -
//!         +
//!             1
//!             2
//!         3
//!
//! With `frame` set, the dump is wrapped between two `---` lines so it stands out in logs.

use super::registry::{FormatError, Formatter};
use crate::expr::tree::Node;

/// Layout knobs for the indented dump
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenderOptions {
    /// Spaces per nesting level
    pub indent_width: usize,
    /// Wrap output between `---` lines
    pub frame: bool,
}

impl Default for RenderOptions {
    fn default() -> Self {
        RenderOptions {
            indent_width: 4,
            frame: false,
        }
    }
}

/// Render `node` as an indented multi-line string. Every line ends with a newline.
pub fn to_indented_str(node: &Node, options: &RenderOptions) -> String {
    let mut output = String::new();
    if options.frame {
        output.push_str("---\n");
    }
    write_node(node, options.indent_width, &mut output);
    if options.frame {
        output.push_str("---\n");
    }
    output
}

fn write_node(root: &Node, indent_width: usize, output: &mut String) {
    let mut pending = vec![(root, 0)];
    while let Some((node, depth)) = pending.pop() {
        output.push_str(&" ".repeat(depth * indent_width));
        if node.is_group() {
            output.push_str("()");
        } else {
            output.push_str(&node.label().to_string());
        }
        output.push('\n');

        pending.extend(node.children().iter().rev().map(|child| (child, depth + 1)));
    }
}

/// Formatter implementation for the indented dump
#[derive(Debug, Clone, Default)]
pub struct IndentedFormatter {
    pub options: RenderOptions,
}

impl IndentedFormatter {
    pub fn new(options: RenderOptions) -> Self {
        IndentedFormatter { options }
    }
}

impl Formatter for IndentedFormatter {
    fn name(&self) -> &str {
        "tree"
    }

    fn serialize(&self, node: &Node) -> Result<String, FormatError> {
        Ok(to_indented_str(node, &self.options))
    }

    fn description(&self) -> &str {
        "Indented tree, one node per line"
    }
}

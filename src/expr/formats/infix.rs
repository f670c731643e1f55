//! Infix formatter
//!
//! Turns a tree back into expression text, the inverse of tokenize + parse. Brackets are
//! only emitted where operator precedence or left-associativity would otherwise regroup the
//! operands, and for explicit group nodes.

use super::registry::{FormatError, Formatter};
use crate::expr::symbol::{Operator, Symbol};
use crate::expr::tree::Node;

/// Render `node` as single-line infix text, e.g. `1 + 2 - 3`.
pub fn to_infix_str(node: &Node) -> String {
    let mut output = String::new();
    let mut pending = vec![Piece::Node(node)];

    // Pieces are pushed in reverse so they pop in reading order.
    while let Some(piece) = pending.pop() {
        match piece {
            Piece::Text(text) => output.push_str(text),
            Piece::Literal(symbol) => output.push_str(&symbol.to_string()),
            Piece::Operator(op) => {
                output.push(' ');
                output.push_str(&op.to_string());
                output.push(' ');
            }
            Piece::Node(node) => expand(node, &mut pending),
        }
    }
    output
}

enum Piece<'a> {
    Node(&'a Node),
    Literal(Symbol),
    Operator(Operator),
    Text(&'static str),
}

fn expand<'a>(node: &'a Node, pending: &mut Vec<Piece<'a>>) {
    let children = node.children();

    if let Some(op) = node.operator() {
        let left = &children[0];
        let right = &children[1];
        // A right operand at the same level needs brackets to stop the left fold.
        let left_bracketed = binds_looser(left, op.precedence());
        let right_bracketed = binds_looser(right, op.precedence() + 1);

        push_operand(right, right_bracketed, pending);
        pending.push(Piece::Operator(op));
        push_operand(left, left_bracketed, pending);
    } else if node.is_group() {
        push_operand(&children[0], true, pending);
    } else {
        pending.push(Piece::Literal(node.label()));
    }
}

fn binds_looser(node: &Node, precedence: u8) -> bool {
    node.operator()
        .map(|op| op.precedence() < precedence)
        .unwrap_or(false)
}

fn push_operand<'a>(node: &'a Node, bracketed: bool, pending: &mut Vec<Piece<'a>>) {
    if bracketed {
        pending.push(Piece::Text(")"));
        pending.push(Piece::Node(node));
        pending.push(Piece::Text("("));
    } else {
        pending.push(Piece::Node(node));
    }
}

/// Formatter implementation for infix text
pub struct InfixFormatter;

impl Formatter for InfixFormatter {
    fn name(&self) -> &str {
        "infix"
    }

    fn serialize(&self, node: &Node) -> Result<String, FormatError> {
        Ok(format!("{}\n", to_infix_str(node)))
    }

    fn description(&self) -> &str {
        "Expression text with minimal brackets"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::expr::symbol::Digit;

    fn leaf(value: u8) -> Node {
        Node::leaf(Digit::new(value).unwrap())
    }

    #[test]
    fn test_leaf() {
        assert_eq!(to_infix_str(&leaf(8)), "8");
    }

    #[test]
    fn test_left_fold_needs_no_brackets() {
        let node = Node::binary(
            Operator::Subtract,
            Node::binary(Operator::Add, leaf(1), leaf(2)),
            leaf(3),
        );
        assert_eq!(to_infix_str(&node), "1 + 2 - 3");
    }

    #[test]
    fn test_right_nesting_is_bracketed() {
        let node = Node::binary(
            Operator::Subtract,
            leaf(1),
            Node::binary(Operator::Subtract, leaf(2), leaf(3)),
        );
        assert_eq!(to_infix_str(&node), "1 - (2 - 3)");
    }

    #[test]
    fn test_precedence() {
        let product_of_sum = Node::binary(
            Operator::Multiply,
            Node::binary(Operator::Add, leaf(1), leaf(2)),
            leaf(3),
        );
        assert_eq!(to_infix_str(&product_of_sum), "(1 + 2) * 3");

        let sum_of_product = Node::binary(
            Operator::Add,
            leaf(1),
            Node::binary(Operator::Multiply, leaf(2), leaf(3)),
        );
        assert_eq!(to_infix_str(&sum_of_product), "1 + 2 * 3");
    }

    #[test]
    fn test_group() {
        let node = Node::group(Node::binary(Operator::Add, leaf(1), leaf(2)));
        assert_eq!(to_infix_str(&node), "(1 + 2)");
    }

    #[test]
    fn test_formatter_appends_newline() {
        assert_eq!(InfixFormatter.serialize(&leaf(4)), Ok("4\n".to_string()));
    }
}

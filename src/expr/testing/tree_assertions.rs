//! Fluent assertion API for expression trees

use crate::expr::tree::Node;

/// Create an assertion builder for the root of a tree
pub fn assert_tree(node: &Node) -> NodeAssertion<'_> {
    NodeAssertion {
        node,
        context: "root".to_string(),
    }
}

pub struct NodeAssertion<'a> {
    pub(crate) node: &'a Node,
    pub(crate) context: String,
}

impl<'a> NodeAssertion<'a> {
    /// Assert the node label, compared by its text (`"+"`, `"7"`, `"("`)
    pub fn label(self, expected: &str) -> Self {
        let actual = self.node.label().to_string();
        assert_eq!(
            actual, expected,
            "{}: Expected label '{}', found '{}'",
            self.context, expected, actual
        );
        self
    }

    /// Assert the node is a leaf with the given label
    pub fn leaf(self, expected: &str) -> Self {
        assert!(
            self.node.is_leaf(),
            "{}: Expected leaf '{}', found node with {} children",
            self.context,
            expected,
            self.node.children().len()
        );
        self.label(expected)
    }

    pub fn child_count(self, expected: usize) -> Self {
        let actual = self.node.children().len();
        assert_eq!(
            actual, expected,
            "{}: Expected {} children, found {}",
            self.context, expected, actual
        );
        self
    }

    pub fn child<F>(self, index: usize, assertion: F) -> Self
    where
        F: FnOnce(NodeAssertion<'a>),
    {
        let child = self.node.child(index).unwrap_or_else(|| {
            panic!(
                "{}: Child index {} out of bounds ({} children)",
                self.context,
                index,
                self.node.children().len()
            )
        });
        assertion(NodeAssertion {
            node: child,
            context: format!("{}[{}]", self.context, index),
        });
        self
    }

    pub fn depth(self, expected: usize) -> Self {
        let actual = self.node.depth();
        assert_eq!(
            actual, expected,
            "{}: Expected depth {}, found {}",
            self.context, expected, actual
        );
        self
    }

    pub fn node_count(self, expected: usize) -> Self {
        let actual = self.node.node_count();
        assert_eq!(
            actual, expected,
            "{}: Expected {} nodes, found {}",
            self.context, expected, actual
        );
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::expr::symbol::{Digit, Operator};

    fn sample() -> Node {
        Node::binary(
            Operator::Add,
            Node::leaf(Digit::new(1).unwrap()),
            Node::leaf(Digit::new(2).unwrap()),
        )
    }

    #[test]
    fn test_passing_chain() {
        assert_tree(&sample())
            .label("+")
            .child_count(2)
            .depth(1)
            .node_count(3)
            .child(0, |c| {
                c.leaf("1");
            })
            .child(1, |c| {
                c.leaf("2");
            });
    }

    #[test]
    #[should_panic(expected = "root[1]: Expected label '3', found '2'")]
    fn test_reports_child_path() {
        assert_tree(&sample()).child(1, |c| {
            c.label("3");
        });
    }

    #[test]
    #[should_panic(expected = "root: Expected leaf '+', found node with 2 children")]
    fn test_leaf_rejects_operator() {
        assert_tree(&sample()).leaf("+");
    }

    #[test]
    #[should_panic(expected = "root: Child index 2 out of bounds (2 children)")]
    fn test_child_out_of_bounds() {
        assert_tree(&sample()).child(2, |_| {});
    }
}

//! Expression tree nodes
//!
//!     A parsed expression is a tree of [`Node`]s. Every node carries a [`Symbol`] label and
//!     an ordered list of owned children, and the label alone determines how many children
//!     there are:
//!
//!         - digit leaves have none
//!         - binary operators have two (left operand, right operand)
//!         - groups, labeled `(`, have one (the enclosed expression)
//!
//!     Fields are private and the constructors only accept well-formed shapes, so consumers
//!     can index children without checking. Nodes are never mutated; combining two subtrees
//!     builds a new parent that takes ownership of both.
//!
//!     `1 + 2 - 3` is the tree:
//!
//!                 -
//!               /   \
//!              +     3
//!             / \
//!            1   2
//!
//!     Grouping is represented by a dedicated node rather than by returning the inner tree,
//!     so `(1+2)` keeps one extra level and counts one extra node.
//!
//! Deep Trees
//!
//!     Every `+`/`-` in a chain adds a level, so a tree is as deep as its input is long.
//!     Dropping, cloning, comparing, hashing and measuring a node all walk the tree with an
//!     explicit worklist and never recurse. `Debug` and `Serialize` are derived and do
//!     recurse; the serde formats cap the depth they accept (see
//!     [`MAX_SERIALIZE_DEPTH`](crate::expr::formats::MAX_SERIALIZE_DEPTH)).

use super::symbol::{Digit, Operator, Symbol};
use std::fmt;
use std::hash::{Hash, Hasher};

/// One grammar production instance in an expression tree.
#[derive(Debug, Eq, serde::Serialize)]
pub struct Node {
    label: Symbol,
    children: Vec<Node>,
}

impl Node {
    /// A literal leaf.
    pub fn leaf(digit: Digit) -> Self {
        Node {
            label: Symbol::Digit(digit),
            children: Vec::new(),
        }
    }

    /// An operator node over `left` and `right`.
    pub fn binary(op: Operator, left: Node, right: Node) -> Self {
        Node {
            label: op.symbol(),
            children: vec![left, right],
        }
    }

    /// A group node enclosing `inner`.
    pub fn group(inner: Node) -> Self {
        Node {
            label: Symbol::OpenBracket,
            children: vec![inner],
        }
    }

    pub fn label(&self) -> Symbol {
        self.label
    }

    pub fn children(&self) -> &[Node] {
        &self.children
    }

    pub fn child(&self, index: usize) -> Option<&Node> {
        self.children.get(index)
    }

    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }

    pub fn is_group(&self) -> bool {
        self.label == Symbol::OpenBracket
    }

    /// The operator labeling this node, if it is a binary node.
    pub fn operator(&self) -> Option<Operator> {
        self.label.as_operator()
    }

    /// Length of the longest path from this node down to a leaf. A leaf has depth 0.
    pub fn depth(&self) -> usize {
        let mut deepest = 0;
        let mut pending = vec![(self, 0)];
        while let Some((node, depth)) = pending.pop() {
            deepest = deepest.max(depth);
            pending.extend(node.children.iter().map(|child| (child, depth + 1)));
        }
        deepest
    }

    /// Number of nodes in this subtree, including itself.
    pub fn node_count(&self) -> usize {
        let mut count = 0;
        let mut pending = vec![self];
        while let Some(node) = pending.pop() {
            count += 1;
            pending.extend(node.children.iter());
        }
        count
    }
}

impl Drop for Node {
    fn drop(&mut self) {
        // Detach descendants first so each node is dropped with no children left.
        let mut pending = std::mem::take(&mut self.children);
        while let Some(mut node) = pending.pop() {
            pending.append(&mut node.children);
        }
    }
}

impl Clone for Node {
    fn clone(&self) -> Self {
        // Post-order rebuild: a node is finished once its children sit at the end of `built`.
        let mut built: Vec<Node> = Vec::new();
        let mut pending: Vec<(&Node, bool)> =
            self.children.iter().rev().map(|child| (child, false)).collect();
        while let Some((node, expanded)) = pending.pop() {
            if expanded {
                let children = built.split_off(built.len() - node.children.len());
                built.push(Node {
                    label: node.label,
                    children,
                });
            } else {
                pending.push((node, true));
                pending.extend(node.children.iter().rev().map(|child| (child, false)));
            }
        }
        Node {
            label: self.label,
            children: built,
        }
    }
}

impl PartialEq for Node {
    fn eq(&self, other: &Self) -> bool {
        let mut pending = vec![(self, other)];
        while let Some((left, right)) = pending.pop() {
            if left.label != right.label || left.children.len() != right.children.len() {
                return false;
            }
            pending.extend(left.children.iter().zip(right.children.iter()));
        }
        true
    }
}

impl Hash for Node {
    fn hash<H: Hasher>(&self, state: &mut H) {
        let mut pending = vec![self];
        while let Some(node) = pending.pop() {
            node.label.hash(state);
            node.children.len().hash(state);
            pending.extend(node.children.iter().rev());
        }
    }
}

impl fmt::Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let options = crate::expr::formats::RenderOptions::default();
        write!(f, "{}", crate::expr::formats::to_indented_str(self, &options))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn digit(value: u8) -> Node {
        Node::leaf(Digit::new(value).unwrap())
    }

    #[test]
    fn test_leaf() {
        let node = digit(7);
        assert_eq!(node.label(), Symbol::digit(7).unwrap());
        assert!(node.is_leaf());
        assert!(node.children().is_empty());
        assert_eq!(node.depth(), 0);
        assert_eq!(node.node_count(), 1);
    }

    #[test]
    fn test_binary() {
        let node = Node::binary(Operator::Add, digit(1), digit(2));
        assert_eq!(node.label(), Symbol::Add);
        assert_eq!(node.operator(), Some(Operator::Add));
        assert_eq!(node.children(), &[digit(1), digit(2)]);
        assert_eq!(node.child(0), Some(&digit(1)));
        assert_eq!(node.child(2), None);
        assert_eq!(node.depth(), 1);
        assert_eq!(node.node_count(), 3);
    }

    #[test]
    fn test_group_adds_a_level() {
        let inner = Node::binary(Operator::Subtract, digit(4), digit(5));
        let node = Node::group(inner.clone());
        assert!(node.is_group());
        assert_eq!(node.operator(), None);
        assert_eq!(node.children(), &[inner]);
        assert_eq!(node.depth(), 2);
        assert_eq!(node.node_count(), 4);
    }

    #[test]
    fn test_child_count_matches_arity() {
        let tree = Node::binary(
            Operator::Multiply,
            Node::group(Node::binary(Operator::Add, digit(1), digit(2))),
            digit(3),
        );

        fn check(node: &Node) {
            assert_eq!(Some(node.children().len()), node.label().arity());
            node.children().iter().for_each(check);
        }
        check(&tree);
    }

    /// `0 + 1 + 2 + ...`, built bottom-up without the parser
    fn left_chain(terms: usize) -> Node {
        let mut tree = digit(0);
        for i in 1..terms {
            tree = Node::binary(Operator::Add, tree, digit((i % 10) as u8));
        }
        tree
    }

    #[test]
    fn test_clone_and_eq() {
        let tree = Node::binary(
            Operator::Subtract,
            Node::group(Node::binary(Operator::Add, digit(1), digit(2))),
            digit(3),
        );
        let copy = tree.clone();
        assert_eq!(copy, tree);
        assert_eq!(copy.to_string(), tree.to_string());
        assert_ne!(copy, Node::binary(Operator::Subtract, digit(1), digit(3)));
    }

    #[test]
    fn test_equal_trees_hash_equal() {
        use std::collections::HashSet;

        let set: HashSet<Node> = [left_chain(5), left_chain(5), left_chain(6)]
            .into_iter()
            .collect();
        assert_eq!(set.len(), 2);
    }

    #[test]
    fn test_deep_tree_walks_do_not_recurse() {
        let tree = left_chain(200_000);
        assert_eq!(tree.depth(), 199_999);
        assert_eq!(tree.node_count(), 399_999);

        let copy = tree.clone();
        assert!(copy == tree);
        drop(copy);
        drop(tree);
    }

    #[test]
    fn test_serialize() {
        let node = Node::binary(Operator::Add, digit(1), digit(2));
        let value = serde_json::to_value(&node).unwrap();
        assert_eq!(
            value,
            serde_json::json!({
                "label": "+",
                "children": [
                    {"label": "1", "children": []},
                    {"label": "2", "children": []},
                ],
            })
        );
    }
}

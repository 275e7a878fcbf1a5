//! Printable traversals of a [`Tree`][crate::tree::Tree].

use std::fmt;

use crate::tree::Node;

/// The order in which a traversal visits a node relative to its subtrees.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Order {
    /// Node, left subtree, right subtree.
    Pre,
    /// Left subtree, node, right subtree.
    In,
    /// Left subtree, right subtree, node.
    Post,
}

impl fmt::Display for Order {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::Pre => "preorder",
            Self::In => "inorder",
            Self::Post => "postorder",
        };
        f.write_str(label)
    }
}

/// The nodes of a tree in some [`Order`]. Displays as a single labelled line such as
/// `inorder : [1:a] [2:b]`, or `inorder : None` for an empty tree.
pub struct Traversal<'a, K, V> {
    order: Order,
    nodes: Vec<&'a Node<K, V>>,
}

impl<'a, K, V> Traversal<'a, K, V> {
    pub(crate) fn new(order: Order, nodes: Vec<&'a Node<K, V>>) -> Self {
        Self { order, nodes }
    }

    /// Which order the nodes were visited in.
    pub fn order(&self) -> Order {
        self.order
    }

    /// The visited nodes.
    pub fn nodes(&self) -> &[&'a Node<K, V>] {
        &self.nodes
    }
}

impl<K, V> fmt::Display for Traversal<'_, K, V>
where
    K: fmt::Display,
    V: fmt::Display,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} :", self.order)?;
        if self.nodes.is_empty() {
            return write!(f, " None");
        }
        for node in &self.nodes {
            write!(f, " {}", node)?;
        }
        Ok(())
    }
}

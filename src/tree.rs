//! A mutable, unbalanced BST. Every `Node` exclusively owns its two children, so inserting,
//! deleting and reshaping the tree only ever moves `Box`es between slots.
//!
//! # Examples
//!
//! ```
//! use dslab::tree::{Order, Tree};
//!
//! let mut tree = Tree::new();
//!
//! // Nothing in here yet.
//! assert_eq!(tree.find(&5), None);
//! assert_eq!(tree.height(), 0);
//!
//! tree.insert(5, "a");
//! tree.insert(3, "b");
//! tree.insert(8, "c");
//! tree.insert(1, "d");
//!
//! assert_eq!(tree.traversal(Order::In).to_string(), "inorder : [1:d] [3:b] [5:a] [8:c]");
//! assert_eq!(tree.height(), 3);
//!
//! // Deleting a node returns its value.
//! assert_eq!(tree.delete(&3), Some("b"));
//! assert_eq!(tree.find(&3), None);
//! assert_eq!(tree.traversal(Order::In).to_string(), "inorder : [1:d] [5:a] [8:c]");
//! ```

use std::cmp::Ordering;
use std::fmt;
use std::mem;

use log::trace;

use crate::error::LcaError;
use crate::queue::Queue;

pub use crate::traversal::{Order, Traversal};

/// A Binary Search Tree. This can be used for inserting, finding, and deleting keys and values,
/// and for a handful of structural queries. Nothing rebalances it so its height depends entirely
/// on insertion order.
#[derive(Clone, Debug)]
pub enum Tree<K, V> {
    /// A marker for the empty slot at the bottom of a subtree.
    Leaf,
    /// A `Node` that has a key, value, and two children (which are both `Tree`s).
    Node(Box<Node<K, V>>),
}

impl<K, V> Default for Tree<K, V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K, V> Tree<K, V> {
    /// Generates a new, empty `Tree`.
    pub fn new() -> Self {
        Self::Leaf
    }

    /// Whether this tree has no nodes.
    pub fn is_empty(&self) -> bool {
        matches!(self, Self::Leaf)
    }

    /// The node at the root of this tree, if there is one.
    pub fn root(&self) -> Option<&Node<K, V>> {
        match self {
            Self::Leaf => None,
            Self::Node(n) => Some(n),
        }
    }

    /// Inserts the given value into the tree stored at the given key. Inserting a new value for an
    /// existing key overwrites its value and returns the old one.
    ///
    /// # Examples
    ///
    /// ```
    /// use dslab::tree::Tree;
    ///
    /// let mut tree = Tree::new();
    ///
    /// assert_eq!(tree.insert(1, 2), None);
    /// assert_eq!(tree.find(&1), Some(&2));
    ///
    /// assert_eq!(tree.insert(1, 3), Some(2));
    /// assert_eq!(tree.find(&1), Some(&3));
    /// ```
    pub fn insert(&mut self, key: K, value: V) -> Option<V>
    where
        K: Ord,
    {
        match self {
            Self::Leaf => {
                *self = Self::Node(Box::new(Node::new(key, value)));
                None
            }
            Self::Node(n) => match key.cmp(&n.key) {
                Ordering::Less => n.left.insert(key, value),
                Ordering::Equal => Some(mem::replace(&mut n.value, value)),
                Ordering::Greater => n.right.insert(key, value),
            },
        }
    }

    /// Potentially finds the value associated with the given key in this tree. If no node has the
    /// corresponding key, `None` is returned.
    ///
    /// # Examples
    ///
    /// ```
    /// use dslab::tree::Tree;
    ///
    /// let mut tree = Tree::new();
    /// tree.insert(1, 2);
    ///
    /// assert_eq!(tree.find(&1), Some(&2));
    /// assert_eq!(tree.find(&42), None);
    /// ```
    pub fn find(&self, key: &K) -> Option<&V>
    where
        K: Ord,
    {
        self.find_node(key).map(Node::value)
    }

    /// Like [`find`][Tree::find] but returns the whole node.
    pub fn find_node(&self, key: &K) -> Option<&Node<K, V>>
    where
        K: Ord,
    {
        match self {
            Self::Leaf => None,
            Self::Node(n) => match key.cmp(&n.key) {
                Ordering::Less => n.left.find_node(key),
                Ordering::Equal => Some(n),
                Ordering::Greater => n.right.find_node(key),
            },
        }
    }

    /// Deletes the node containing the given key from the tree and returns its value. If the tree
    /// does not contain a node with the key, nothing happens.
    ///
    /// A node with two children is replaced by its in-order successor, the smallest node in its
    /// right subtree.
    ///
    /// # Examples
    ///
    /// ```
    /// use dslab::tree::Tree;
    ///
    /// let mut tree = Tree::new();
    /// tree.insert(1, 2);
    ///
    /// assert_eq!(tree.delete(&1), Some(2));
    /// assert_eq!(tree.find(&1), None);
    /// assert_eq!(tree.delete(&1), None);
    /// ```
    pub fn delete(&mut self, key: &K) -> Option<V>
    where
        K: Ord,
    {
        match self {
            Self::Leaf => None,
            Self::Node(n) => match key.cmp(&n.key) {
                Ordering::Less => n.left.delete(key),
                Ordering::Equal => self.delete_root(),
                Ordering::Greater => n.right.delete(key),
            },
        }
    }

    /// Removes the root node of this subtree, relinking its children, and returns its value.
    fn delete_root(&mut self) -> Option<V> {
        let Self::Node(node) = mem::take(self) else {
            return None;
        };
        let Node {
            value, left, right, ..
        } = *node;

        *self = match (left, right) {
            (left, Self::Leaf) => left,
            (Self::Leaf, right) => right,
            (left, Self::Node(right)) => {
                trace!("Deleted node had two children, promoting its successor");
                let (mut successor, rest) = right.remove_min();
                successor.left = left;
                successor.right = rest;
                Self::Node(successor)
            }
        };

        Some(value)
    }

    /// The node with the smallest key.
    pub fn min(&self) -> Option<&Node<K, V>> {
        let mut node = self.root()?;
        while let Some(left) = node.left.root() {
            node = left;
        }
        Some(node)
    }

    /// The node with the largest key.
    pub fn max(&self) -> Option<&Node<K, V>> {
        let mut node = self.root()?;
        while let Some(right) = node.right.root() {
            node = right;
        }
        Some(node)
    }

    /// The nodes in preorder: each node, then its left subtree, then its right subtree.
    pub fn preorder(&self) -> Vec<&Node<K, V>> {
        self.walk(Order::Pre)
    }

    /// The nodes in inorder: left subtree, node, right subtree. For a BST this is sorted by key.
    pub fn inorder(&self) -> Vec<&Node<K, V>> {
        self.walk(Order::In)
    }

    /// The nodes in postorder: left subtree, right subtree, then the node itself.
    pub fn postorder(&self) -> Vec<&Node<K, V>> {
        self.walk(Order::Post)
    }

    /// The nodes in the given order.
    pub fn walk(&self, order: Order) -> Vec<&Node<K, V>> {
        let mut nodes = Vec::new();
        self.walk_into(order, &mut nodes);
        nodes
    }

    fn walk_into<'a>(&'a self, order: Order, nodes: &mut Vec<&'a Node<K, V>>) {
        let Self::Node(n) = self else {
            return;
        };

        match order {
            Order::Pre => {
                nodes.push(n);
                n.left.walk_into(order, nodes);
                n.right.walk_into(order, nodes);
            }
            Order::In => {
                n.left.walk_into(order, nodes);
                nodes.push(n);
                n.right.walk_into(order, nodes);
            }
            Order::Post => {
                n.left.walk_into(order, nodes);
                n.right.walk_into(order, nodes);
                nodes.push(n);
            }
        }
    }

    /// A printable, labelled listing of the nodes in the given order.
    ///
    /// # Examples
    ///
    /// ```
    /// use dslab::tree::{Order, Tree};
    ///
    /// let mut tree = Tree::new();
    /// assert_eq!(tree.traversal(Order::Pre).to_string(), "preorder : None");
    ///
    /// tree.insert(2, 'b');
    /// tree.insert(1, 'a');
    /// assert_eq!(tree.traversal(Order::Post).to_string(), "postorder : [1:a] [2:b]");
    /// ```
    pub fn traversal(&self, order: Order) -> Traversal<'_, K, V> {
        Traversal::new(order, self.walk(order))
    }

    /// How many levels are in this tree. An empty tree has a height of 0 and a single node has a
    /// height of 1.
    pub fn height(&self) -> usize {
        match self {
            Self::Leaf => 0,
            Self::Node(n) => n.left.height().max(n.right.height()) + 1,
        }
    }

    /// Whether this is a complete binary tree: every level is full except possibly the last, and
    /// the last level is filled from the left.
    ///
    /// Visits the tree in level order. Once an empty slot is seen, no further node may appear.
    ///
    /// # Examples
    ///
    /// ```
    /// use dslab::tree::Tree;
    ///
    /// let mut tree = Tree::new();
    /// for key in [2, 1, 3] {
    ///     tree.insert(key, ());
    /// }
    /// assert!(tree.is_complete());
    ///
    /// // 4 hangs off the right of 3 while 1 has no children.
    /// tree.insert(4, ());
    /// assert!(!tree.is_complete());
    /// ```
    pub fn is_complete(&self) -> bool {
        let mut level_order = Queue::new();
        level_order.enqueue(self);
        let mut seen_gap = false;

        while let Some(tree) = level_order.dequeue() {
            match tree {
                Self::Leaf => seen_gap = true,
                Self::Node(_) if seen_gap => return false,
                Self::Node(n) => {
                    level_order.enqueue(&n.left);
                    level_order.enqueue(&n.right);
                }
            }
        }

        true
    }

    /// Reshapes the tree in place into a chain of right children in key order. Every node is
    /// kept, so it remains a valid BST (with a height equal to its size).
    ///
    /// Works by rotating right at each node of the chain until it has no left child, then
    /// stepping to its right child.
    ///
    /// # Examples
    ///
    /// ```
    /// use dslab::tree::Tree;
    ///
    /// let mut tree = Tree::new();
    /// for key in [4, 2, 6, 1, 3, 5, 7] {
    ///     tree.insert(key, key);
    /// }
    /// tree.flatten();
    ///
    /// assert_eq!(tree.height(), 7);
    /// let keys: Vec<_> = tree.preorder().into_iter().map(|n| *n.key()).collect();
    /// assert_eq!(keys, vec![1, 2, 3, 4, 5, 6, 7]);
    /// ```
    pub fn flatten(&mut self) {
        let mut cursor = self;
        loop {
            let has_left = matches!(cursor, Self::Node(n) if !n.left.is_empty());
            if has_left {
                cursor.rotate_right();
                continue;
            }

            match cursor {
                Self::Node(n) => cursor = &mut n.right,
                Self::Leaf => break,
            }
        }
    }

    /// Rotate self to the right. This moves the left child up and self down to become the left
    /// child's right child. Does nothing without a left child.
    ///
    /// ```text
    ///      old_root               new_root
    ///      /     \                /     \
    ///  new_root   z   rotate ->  x    old_root
    ///   /  \                            /  \
    ///  x    y                          y    z
    /// ```
    fn rotate_right(&mut self) {
        let Self::Node(mut old_root) = mem::take(self) else {
            return;
        };
        let Self::Node(mut new_root) = mem::take(&mut old_root.left) else {
            *self = Self::Node(old_root);
            return;
        };

        old_root.left = mem::take(&mut new_root.right);
        new_root.right = Self::Node(old_root);
        *self = Self::Node(new_root);
    }

    /// Finds the deepest node that has both keys in its subtree.
    ///
    /// Both keys have to be in the tree. Otherwise [`LcaError::MissingKey`] is returned (or
    /// [`LcaError::EmptyTree`] when there is nothing to search).
    ///
    /// # Examples
    ///
    /// ```
    /// use dslab::error::LcaError;
    /// use dslab::tree::Tree;
    ///
    /// let mut tree = Tree::new();
    /// for key in [6, 2, 8, 0, 4, 7, 9, 3, 5] {
    ///     tree.insert(key, key * 10);
    /// }
    ///
    /// assert_eq!(tree.lowest_common_ancestor(&3, &5).map(|n| *n.key()), Ok(4));
    /// assert_eq!(tree.lowest_common_ancestor(&0, &5).map(|n| *n.key()), Ok(2));
    /// assert_eq!(tree.lowest_common_ancestor(&3, &9).map(|n| *n.key()), Ok(6));
    /// assert_eq!(
    ///     tree.lowest_common_ancestor(&3, &1).map(|n| *n.key()),
    ///     Err(LcaError::MissingKey)
    /// );
    /// ```
    pub fn lowest_common_ancestor(&self, k1: &K, k2: &K) -> Result<&Node<K, V>, LcaError>
    where
        K: Ord,
    {
        let root = self.root().ok_or(LcaError::EmptyTree)?;
        if self.find(k1).is_none() || self.find(k2).is_none() {
            return Err(LcaError::MissingKey);
        }

        Ok(root.lowest_common_ancestor(k1, k2).unwrap_or(root))
    }
}

/// A `Node` has a key that is used for searching/sorting and a value that is associated with that
/// key. It always has two children although those children may be [`Leaf`][Tree::Leaf]s.
#[derive(Clone, Debug)]
pub struct Node<K, V> {
    key: K,
    value: V,
    left: Tree<K, V>,
    right: Tree<K, V>,
}

impl<K, V> Node<K, V> {
    /// Construct a new childless `Node` with the given `key` and `value`.
    fn new(key: K, value: V) -> Self {
        Self {
            key,
            value,
            left: Tree::Leaf,
            right: Tree::Leaf,
        }
    }

    /// The key this node is sorted by.
    pub fn key(&self) -> &K {
        &self.key
    }

    /// The value stored with the key.
    pub fn value(&self) -> &V {
        &self.value
    }

    /// The subtree of smaller keys.
    pub fn left(&self) -> &Tree<K, V> {
        &self.left
    }

    /// The subtree of larger keys.
    pub fn right(&self) -> &Tree<K, V> {
        &self.right
    }

    /// Detaches the smallest node of this subtree. Returns that node (with its children cleared)
    /// and what remains of the subtree.
    fn remove_min(mut self: Box<Self>) -> (Box<Self>, Tree<K, V>) {
        match mem::take(&mut self.left) {
            Tree::Leaf => {
                let rest = mem::take(&mut self.right);
                (self, rest)
            }
            Tree::Node(left) => {
                let (min, rest) = left.remove_min();
                self.left = rest;
                (min, Tree::Node(self))
            }
        }
    }

    /// Descends while both keys fall on the same side. Returns `None` if the descent runs off the
    /// bottom of the tree, which can only happen when a key is missing.
    fn lowest_common_ancestor(&self, k1: &K, k2: &K) -> Option<&Self>
    where
        K: Ord,
    {
        match (k1.cmp(&self.key), k2.cmp(&self.key)) {
            (Ordering::Less, Ordering::Less) => self.left.root()?.lowest_common_ancestor(k1, k2),
            (Ordering::Greater, Ordering::Greater) => {
                self.right.root()?.lowest_common_ancestor(k1, k2)
            }
            _ => Some(self),
        }
    }
}

impl<K, V> fmt::Display for Node<K, V>
where
    K: fmt::Display,
    V: fmt::Display,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}:{}]", self.key, self.value)
    }
}


#[cfg(test)]
mod quicktests {
    use std::collections::BTreeMap;

    use super::*;
    use crate::test::quick::Op;

    /// Applies a set of operations to a tree and a `BTreeMap`.
    /// This way we can ensure that after a random smattering of inserts
    /// and deletes we have the same keys and values in both, in the same order.
    fn do_ops<K, V>(ops: &[Op<K, V>], bst: &mut Tree<K, V>, map: &mut BTreeMap<K, V>)
    where
        K: Clone + Ord + fmt::Debug,
        V: Clone + PartialEq + fmt::Debug,
    {
        for op in ops {
            match op {
                Op::Insert(k, v) => {
                    assert_eq!(
                        bst.insert(k.clone(), v.clone()),
                        map.insert(k.clone(), v.clone())
                    );
                }
                Op::Remove(k) => {
                    assert_eq!(bst.delete(k), map.remove(k));
                }
                Op::Iter => {
                    let inorder: Vec<_> = bst
                        .inorder()
                        .into_iter()
                        .map(|n| (n.key(), n.value()))
                        .collect();
                    assert_eq!(inorder, map.iter().collect::<Vec<_>>());
                }
            }
        }
    }

    quickcheck::quickcheck! {
        fn fuzz_multiple_operations_i8(ops: Vec<Op<i8, i8>>) -> bool {
            let mut tree = Tree::new();
            let mut map = BTreeMap::new();

            do_ops(&ops, &mut tree, &mut map);
            map.keys().all(|key| tree.find(key) == map.get(key))
        }
    }

    quickcheck::quickcheck! {
        fn flatten_keeps_every_entry(xs: Vec<i8>) -> bool {
            let mut tree = Tree::new();
            for x in &xs {
                tree.insert(*x, *x);
            }
            let before: Vec<_> = tree.inorder().into_iter().map(|n| *n.key()).collect();

            tree.flatten();
            let after: Vec<_> = tree.preorder().into_iter().map(|n| *n.key()).collect();

            before == after && tree.height() == before.len()
        }
    }
}

//! This crate collects a few classic data structure exercises, mostly for educational purposes:
//! a linked [`queue`], a binary search [`tree`] and a Pascal's triangle calculator ([`pascal`])
//! with a small [`command`] reader driving it.
//!
//! ## Binary Search Tree
//!
//! A Binary Search Tree is a data structure supporting operations to
//! insert, find, and delete stored records. BSTs are typically defined
//! recursively using the notion of a `Node`. A `Node` will typically store
//! some sort of value (the value that was inserted, for example) and will
//! sometimes have child `Node`s. The most important invariants of a BST are:
//!
//! 1. For every `Node` in a BST, all the `Node`s in its left subtree have a
//!    key less than its own key.
//! 2. For every `Node` in a BST, all the `Node`s in its right subtree have a
//!    key greater than its own key.
//!
//! > Note that some `Node`s have no children. These `Node`s are called "leaf nodes".
//!
//! Searching for a key takes `O(height)` (where `height` is the longest path from the root `Node`
//! to a leaf `Node`). The tree here never rebalances itself so inserting keys in sorted order makes
//! it as tall as it has nodes. BSTs also naturally support sorted iteration by visiting the
//! left subtree, then the subtree root, then the right subtree.
//!
//! ## Queue
//!
//! The queue is a singly linked list with a pointer to its last node. Besides the usual FIFO
//! `enqueue`/`dequeue` it can `pop` its most recently enqueued element, which costs a walk over the
//! whole list.
//!
//! ## Logging
//!
//! The library logs through the [`log`] facade. The `pascal` binary installs a logger configured
//! by the `DSLAB_LOG` environment variable, see [`logging`].

#![deny(missing_docs, clippy::clone_on_ref_ptr)]

pub mod command;
pub mod error;
pub mod logging;
pub mod pascal;
pub mod queue;
pub mod traversal;
pub mod tree;

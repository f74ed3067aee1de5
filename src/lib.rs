//! This crate exposes two classic in-memory data structures written without any recursion,
//! mostly for educational purposes.
//!
//! ## Binary Search Tree
//!
//! [`tree::Tree`] is a Binary Search Tree keyed by `char` with `i32` values. The most important
//! invariants of a BST are:
//!
//! 1. For every `Node` in a BST, all the `Node`s in its left subtree have a
//!    key less than its own key.
//! 2. For every `Node` in a BST, all the `Node`s in its right subtree have a
//!    key greater than its own key.
//!
//! BSTs are usually searched, traversed and torn down recursively. Here every operation is a
//! loop: lookups walk a cursor down the tree and the preorder, inorder and postorder traversals
//! keep the nodes still to be visited on an explicit [`stack::Stack`]. The tree is never
//! rebalanced, so its height can be as large as the number of nodes; nothing in this crate
//! grows the call stack with the height.
//!
//! ## Hash Table
//!
//! [`table::HashTable`] maps `String` keys to `f32` values. It has a fixed number of buckets,
//! picked when the table is built, and keeps keys that land in the same bucket in a linked
//! chain.

#![deny(missing_docs, clippy::clone_on_ref_ptr)]

mod error;
pub mod stack;
pub mod table;
pub mod tree;

pub use error::{Error, Result};

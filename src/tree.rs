//! An unbalanced BST keyed by `char` with `i32` values. Every operation is iterative: lookups
//! walk a cursor down the tree and traversals keep their pending nodes on an explicit
//! [`Stack`] instead of the call stack.
//!
//! # Examples
//!
//! ```
//! use stackwalk::tree::Tree;
//!
//! let mut tree = Tree::new();
//!
//! // Nothing in here yet.
//! assert_eq!(tree.search('a'), None);
//!
//! tree.insert('a', 1);
//! assert_eq!(tree.search('a'), Some(1));
//!
//! // Inserting a new value for the same key overwrites the value.
//! tree.insert('a', 2);
//! assert_eq!(tree.search('a'), Some(2));
//! assert_eq!(tree.len(), 1);
//!
//! // Deleting a node returns its value.
//! assert_eq!(tree.delete('a'), Some(2));
//! assert_eq!(tree.search('a'), None);
//! ```

use std::cmp::Ordering;
use std::fmt;
use std::iter::FusedIterator;

use tracing::{debug, trace};

use crate::stack::{FlagStack, Stack};

type Link = Option<Box<Node>>;

/// A Binary Search Tree that is never rebalanced. Inserting keys in sorted order gives a tree
/// whose height is its length, which is fine because nothing here recurses.
pub struct Tree {
    root: Link,
    len: usize,
}

impl Default for Tree {
    fn default() -> Self {
        Self::new()
    }
}

impl Drop for Tree {
    fn drop(&mut self) {
        self.dispose();
    }
}

impl Clone for Tree {
    // Re-inserting in preorder rebuilds the exact same shape.
    fn clone(&self) -> Self {
        let mut tree = Self::new();
        for entry in self.preorder() {
            tree.insert(entry.key, entry.value);
        }
        tree
    }
}

impl fmt::Debug for Tree {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map()
            .entries(self.inorder().map(|entry| (entry.key, entry.value)))
            .finish()
    }
}

impl Tree {
    /// Generate a new, empty `Tree`.
    pub fn new() -> Self {
        Self { root: None, len: 0 }
    }

    /// The number of nodes in the tree.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Whether the tree has no nodes.
    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// Finds the value stored at `key`, if any.
    ///
    /// # Examples
    ///
    /// ```
    /// use stackwalk::tree::Tree;
    ///
    /// let mut tree = Tree::new();
    /// tree.insert('b', 2);
    ///
    /// assert_eq!(tree.search('b'), Some(2));
    /// assert_eq!(tree.search('z'), None);
    /// ```
    pub fn search(&self, key: char) -> Option<i32> {
        let mut node = self.root.as_deref();
        while let Some(n) = node {
            match key.cmp(&n.key) {
                Ordering::Less => node = n.left.as_deref(),
                Ordering::Equal => return Some(n.value),
                Ordering::Greater => node = n.right.as_deref(),
            }
        }
        None
    }

    /// Inserts `value` at `key`. An existing key has its value overwritten in place, otherwise a
    /// new leaf is attached where the search for `key` fell off the tree.
    pub fn insert(&mut self, key: char, value: i32) {
        let mut link = &mut self.root;
        while let Some(node) = link {
            match key.cmp(&node.key) {
                Ordering::Less => link = &mut node.left,
                Ordering::Equal => {
                    node.value = value;
                    return;
                }
                Ordering::Greater => link = &mut node.right,
            }
        }

        *link = Some(Node::new_boxed(key, value));
        self.len += 1;
    }

    /// Deletes the node containing `key` and returns its value. If the tree does not contain the
    /// key, nothing happens.
    ///
    /// A node with two children keeps its place in the tree and takes over the key and value of
    /// the largest node in its left subtree, which is removed instead.
    ///
    /// # Examples
    ///
    /// ```
    /// use stackwalk::tree::Tree;
    ///
    /// let mut tree = Tree::new();
    /// for (key, value) in [('d', 4), ('b', 2), ('f', 6), ('a', 1), ('c', 3)] {
    ///     tree.insert(key, value);
    /// }
    ///
    /// assert_eq!(tree.delete('d'), Some(4));
    ///
    /// // `c` was the largest key left of `d` so it is the new root.
    /// let preorder: String = tree.preorder().map(|entry| entry.key).collect();
    /// assert_eq!(preorder, "cbaf");
    /// ```
    pub fn delete(&mut self, key: char) -> Option<i32> {
        let mut link = &mut self.root;
        while let Some(ordering) = link
            .as_deref()
            .map(|node| key.cmp(&node.key))
            .filter(|ordering| *ordering != Ordering::Equal)
        {
            let Some(node) = link else {
                unreachable!("loop condition saw a node")
            };
            link = match ordering {
                Ordering::Less => &mut node.left,
                _ => &mut node.right,
            };
        }

        let node = link.as_deref_mut()?;
        let value = node.value;
        if node.left.is_some() && node.right.is_some() {
            trace!(%key, "deleting node with two children");
            node.replace_by_rightmost();
        } else {
            trace!(%key, "deleting node with at most one child");
            if let Some(mut removed) = link.take() {
                *link = removed.left.take().or_else(|| removed.right.take());
            }
        }

        self.len -= 1;
        Some(value)
    }

    /// Releases every node, leaving the tree as it was after [`Tree::new`].
    ///
    /// Nodes are released from an explicit stack so that even a completely degenerate tree is
    /// released without recursion.
    pub fn dispose(&mut self) {
        let mut to_release = Stack::new();
        push_left_spine(self.root.take(), &mut to_release);

        let mut released = 0usize;
        while !to_release.is_empty() {
            let mut node = to_release.pop();
            push_left_spine(node.right.take(), &mut to_release);
            drop(node);
            released += 1;
        }

        debug_assert_eq!(released, self.len);
        self.len = 0;
        if released > 0 {
            debug!(released, "disposed tree");
        }
    }

    /// Visits every node before its children, left subtree first.
    ///
    /// # Examples
    ///
    /// ```
    /// use stackwalk::tree::Tree;
    ///
    /// let mut tree = Tree::new();
    /// for (key, value) in [('b', 2), ('a', 1), ('c', 3)] {
    ///     tree.insert(key, value);
    /// }
    ///
    /// let printed: Vec<_> = tree.preorder().map(|entry| entry.to_string()).collect();
    /// assert_eq!(printed, ["[b,2]", "[a,1]", "[c,3]"]);
    /// ```
    pub fn preorder(&self) -> Preorder<'_> {
        Preorder {
            to_visit: Stack::new(),
            descent: self.root.as_deref(),
        }
    }

    /// Visits every node between its left and right subtrees, i.e. in ascending key order.
    pub fn inorder(&self) -> Inorder<'_> {
        let mut iter = Inorder {
            to_visit: Stack::new(),
        };
        iter.push_leftmost(self.root.as_deref());
        iter
    }

    /// Visits every node after both of its subtrees.
    pub fn postorder(&self) -> Postorder<'_> {
        let mut iter = Postorder {
            to_visit: Stack::new(),
            first_visit: FlagStack::new(),
        };
        iter.push_leftmost(self.root.as_deref());
        iter
    }
}

/// Pushes `link` and all its left descendants, detaching each from its parent on the way down.
fn push_left_spine(mut link: Link, stack: &mut Stack<Box<Node>>) {
    while let Some(mut node) = link {
        link = node.left.take();
        stack.push(node);
    }
}

/// A key and value visited by one of the traversals. Displays as `[key,value]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Entry {
    /// The node's key.
    pub key: char,
    /// The value stored at `key`.
    pub value: i32,
}

impl fmt::Display for Entry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{},{}]", self.key, self.value)
    }
}

struct Node {
    key: char,
    value: i32,
    left: Link,
    right: Link,
}

impl Node {
    fn new_boxed(key: char, value: i32) -> Box<Self> {
        Box::new(Node {
            key,
            value,
            left: None,
            right: None,
        })
    }

    fn entry(&self) -> Entry {
        Entry {
            key: self.key,
            value: self.value,
        }
    }

    /// Moves the key and value of the rightmost node of the left subtree into `self` and removes
    /// that node. The rightmost node may still have a left child, which takes its place; that
    /// place is either its parent's right link or `self.left` itself.
    ///
    /// Does nothing without a left subtree.
    fn replace_by_rightmost(&mut self) {
        let mut link = &mut self.left;
        while link.as_ref().map_or(false, |node| node.right.is_some()) {
            let Some(node) = link else {
                unreachable!("loop condition saw a node")
            };
            link = &mut node.right;
        }

        if let Some(mut rightmost) = link.take() {
            *link = rightmost.left.take();
            self.key = rightmost.key;
            self.value = rightmost.value;
        }
    }
}

/// Iterator returned by [`Tree::preorder`].
pub struct Preorder<'a> {
    to_visit: Stack<&'a Node>,
    /// The next node of the current leftmost descent. Nodes are emitted as the descent reaches
    /// them.
    descent: Option<&'a Node>,
}

impl<'a> Iterator for Preorder<'a> {
    type Item = Entry;

    fn next(&mut self) -> Option<Entry> {
        loop {
            if let Some(node) = self.descent {
                self.to_visit.push(node);
                self.descent = node.left.as_deref();
                return Some(node.entry());
            }

            if self.to_visit.is_empty() {
                return None;
            }
            let node = self.to_visit.pop();
            self.descent = node.right.as_deref();
        }
    }
}

impl FusedIterator for Preorder<'_> {}

/// Iterator returned by [`Tree::inorder`].
pub struct Inorder<'a> {
    to_visit: Stack<&'a Node>,
}

impl<'a> Inorder<'a> {
    fn push_leftmost(&mut self, mut node: Option<&'a Node>) {
        while let Some(n) = node {
            self.to_visit.push(n);
            node = n.left.as_deref();
        }
    }
}

impl<'a> Iterator for Inorder<'a> {
    type Item = Entry;

    fn next(&mut self) -> Option<Entry> {
        if self.to_visit.is_empty() {
            return None;
        }

        let node = self.to_visit.pop();
        self.push_leftmost(node.right.as_deref());
        Some(node.entry())
    }
}

impl FusedIterator for Inorder<'_> {}

/// Iterator returned by [`Tree::postorder`].
pub struct Postorder<'a> {
    to_visit: Stack<&'a Node>,
    /// Parallel to `to_visit`: `true` until the node's right subtree has been pushed.
    first_visit: FlagStack,
}

impl<'a> Postorder<'a> {
    fn push_leftmost(&mut self, mut node: Option<&'a Node>) {
        while let Some(n) = node {
            self.to_visit.push(n);
            self.first_visit.push(true);
            node = n.left.as_deref();
        }
    }
}

impl<'a> Iterator for Postorder<'a> {
    type Item = Entry;

    fn next(&mut self) -> Option<Entry> {
        while !self.to_visit.is_empty() {
            let node = self.to_visit.pop();
            if self.first_visit.pop() {
                self.to_visit.push(node);
                self.first_visit.push(false);
                self.push_leftmost(node.right.as_deref());
            } else {
                return Some(node.entry());
            }
        }

        debug_assert!(self.first_visit.is_empty());
        None
    }
}

impl FusedIterator for Postorder<'_> {}

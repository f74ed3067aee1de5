//! A small LIFO container used by the [`tree`][crate::tree] module to keep the state that a
//! recursive traversal would otherwise keep on the call stack.
//!
//! The same container holds borrowed nodes (traversals), owned nodes (disposal) and the
//! first-visit flags of the postorder traversal.
//!
//! # Examples
//!
//! ```
//! use stackwalk::stack::Stack;
//!
//! let mut stack = Stack::new();
//! stack.push('a');
//! stack.push('b');
//!
//! assert_eq!(stack.top(), &'b');
//! assert_eq!(stack.pop(), 'b');
//! assert_eq!(stack.pop(), 'a');
//! assert!(stack.is_empty());
//! ```

/// A stack of first-visit markers, as used by the postorder traversal.
pub type FlagStack = Stack<bool>;

/// A growable LIFO sequence. Popping or peeking an empty stack is a bug in the caller and
/// panics.
#[derive(Debug, Clone)]
pub struct Stack<T> {
    items: Vec<T>,
}

impl<T> Default for Stack<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Stack<T> {
    /// Creates a new, empty `Stack`.
    pub fn new() -> Self {
        Self { items: Vec::new() }
    }

    /// Pushes `item` on top of the stack.
    pub fn push(&mut self, item: T) {
        self.items.push(item);
    }

    /// Removes and returns the top item.
    ///
    /// ## Panics
    ///
    /// When the stack is empty.
    pub fn pop(&mut self) -> T {
        match self.items.pop() {
            Some(item) => item,
            None => panic!("pop called on an empty stack"),
        }
    }

    /// Returns the top item without removing it.
    ///
    /// ## Panics
    ///
    /// When the stack is empty.
    pub fn top(&self) -> &T {
        match self.items.last() {
            Some(item) => item,
            None => panic!("top called on an empty stack"),
        }
    }

    /// Whether there is nothing left on the stack.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// How many items are on the stack.
    pub fn len(&self) -> usize {
        self.items.len()
    }
}

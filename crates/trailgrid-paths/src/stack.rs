//! LIFO container used as the depth-first search frontier.

use crate::error::EmptyStack;

/// A last-in first-out stack.
///
/// `pop` and `peek` report [`EmptyStack`] instead of returning `None`, so
/// misuse is distinguishable from an ordinary exhausted frontier at the
/// call site.
#[derive(Debug, Clone)]
pub struct Stack<T> {
    items: Vec<T>,
    size: usize,
}

impl<T> Default for Stack<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Stack<T> {
    /// Create an empty stack.
    pub fn new() -> Self {
        Self {
            items: Vec::new(),
            size: 0,
        }
    }

    /// Push `item` on top.
    pub fn push(&mut self, item: T) {
        self.items.push(item);
        self.size += 1;
        self.check_invariant();
    }

    /// Remove and return the most recently pushed item.
    pub fn pop(&mut self) -> Result<T, EmptyStack> {
        let item = self.items.pop().ok_or(EmptyStack::Pop)?;
        self.size -= 1;
        self.check_invariant();
        Ok(item)
    }

    /// The most recently pushed item, without removing it.
    pub fn peek(&self) -> Result<&T, EmptyStack> {
        self.items.last().ok_or(EmptyStack::Peek)
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.size
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.size == 0
    }

    // Reported size matches the live elements; top is absent iff size is 0.
    #[inline]
    fn check_invariant(&self) {
        debug_assert_eq!(self.size, self.items.len());
        debug_assert_eq!(self.items.last().is_none(), self.size == 0);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lifo_order() {
        let mut s = Stack::new();
        s.push(1);
        s.push(2);
        s.push(3);
        assert_eq!(s.len(), 3);
        assert_eq!(s.peek(), Ok(&3));
        assert_eq!(s.pop(), Ok(3));
        assert_eq!(s.pop(), Ok(2));
        s.push(4);
        assert_eq!(s.pop(), Ok(4));
        assert_eq!(s.pop(), Ok(1));
        assert!(s.is_empty());
    }

    #[test]
    fn empty_pop_and_peek() {
        let mut s: Stack<u8> = Stack::default();
        assert_eq!(s.pop(), Err(EmptyStack::Pop));
        assert_eq!(s.peek(), Err(EmptyStack::Peek));
        assert_eq!(s.pop().unwrap_err().to_string(), "cannot pop from an empty stack");
        assert_eq!(s.peek().unwrap_err().to_string(), "cannot peek at an empty stack");
        assert_eq!(s.len(), 0);
    }

    #[test]
    fn size_tracks_pushes_and_pops() {
        let mut s = Stack::new();
        for i in 0..5 {
            s.push(i);
            assert_eq!(s.len(), i + 1);
        }
        while s.pop().is_ok() {}
        assert_eq!(s.len(), 0);
        assert!(s.is_empty());
        // A failed pop leaves the count alone.
        assert_eq!(s.pop(), Err(EmptyStack::Pop));
        assert_eq!(s.len(), 0);
        s.push(9);
        assert_eq!(s.len(), 1);
        assert!(!s.is_empty());
    }

    #[test]
    fn peek_does_not_remove() {
        let mut s = Stack::new();
        s.push("a");
        assert_eq!(s.peek(), Ok(&"a"));
        assert_eq!(s.peek(), Ok(&"a"));
        assert_eq!(s.len(), 1);
        assert_eq!(s.pop(), Ok("a"));
        assert_eq!(s.pop(), Err(EmptyStack::Pop));
    }
}

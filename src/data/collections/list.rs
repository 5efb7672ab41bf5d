//! # Singly-linked list
//!
//! Values are inserted and removed at the head only, both in constant time.
use std::fmt;
use std::fmt::Display;
use std::iter::FromIterator;

use itertools::Itertools;

/// Owned chain of nodes, the head being the most recently inserted value.
#[derive(Debug)]
pub struct LinkedList<T> {
    head: Option<Box<Node<T>>>,
    len: usize,
}

#[derive(Debug)]
struct Node<T> {
    value: T,
    next: Option<Box<Node<T>>>,
}

impl<T> LinkedList<T> {
    /// Create an empty list.
    pub fn new() -> Self {
        Self { head: None, len: 0, }
    }

    /// Insert a value before all other values.
    pub fn push_front(&mut self, value: T) {
        let next = self.head.take();
        self.head = Some(Box::new(Node { value, next, }));
        self.len += 1;
    }

    /// Remove the first value.
    ///
    /// # Return value
    ///
    /// `None` if the list is empty.
    pub fn pop_front(&mut self) -> Option<T> {
        self.head.take().map(|node| {
            let Node { value, next } = *node;
            self.head = next;
            self.len -= 1;
            value
        })
    }

    /// The first value, if there is one.
    pub fn peek_front(&self) -> Option<&T> {
        self.head.as_ref().map(|node| &node.value)
    }

    /// Number of values in the list.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Whether the list contains no values.
    pub fn is_empty(&self) -> bool {
        self.head.is_none()
    }

    /// Iterate from the head to the tail of the list.
    pub fn iter(&self) -> Iter<'_, T> {
        Iter { next: self.head.as_deref(), }
    }
}

impl<T> Default for LinkedList<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Clone> Clone for LinkedList<T> {
    fn clone(&self) -> Self {
        // Pushing at the head reverses, so push the values tail first
        let values = self.iter().cloned().collect::<Vec<_>>();
        let mut list = Self::new();
        for value in values.into_iter().rev() {
            list.push_front(value);
        }

        list
    }
}

impl<T: PartialEq> PartialEq for LinkedList<T> {
    fn eq(&self, other: &Self) -> bool {
        self.len == other.len && self.iter().eq(other.iter())
    }
}

impl<T: Eq> Eq for LinkedList<T> {}

/// The first value of the iterator ends up at the head.
impl<T> FromIterator<T> for LinkedList<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut list = Self::new();
        for value in iter {
            list.push_front(value);
        }

        list
    }
}

impl<T> Drop for LinkedList<T> {
    fn drop(&mut self) {
        // Unlink iteratively, the default recursive drop can overflow the stack on long lists
        let mut next = self.head.take();
        while let Some(mut node) = next {
            next = node.next.take();
        }
    }
}

impl<T: Display> Display for LinkedList<T> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.iter().join(" "))
    }
}

/// Borrowing iterator over a `LinkedList`, head first.
pub struct Iter<'a, T> {
    next: Option<&'a Node<T>>,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        self.next.map(|node| {
            self.next = node.next.as_deref();
            &node.value
        })
    }
}

//! # Bounded stack
//!
//! A last-in-first-out stack with a maximum number of elements, pushing and popping at the head
//! of a `LinkedList`.
use std::fmt;
use std::fmt::Display;

use log::trace;

use crate::data::collections::error::{CollectionError, Result};
use crate::data::collections::LinkedList;

/// Capacity of a stack created through `Default`.
const DEFAULT_CAPACITY: usize = 10;

/// Stack that refuses to grow beyond a capacity fixed at creation.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct BoundedStack<T> {
    values: LinkedList<T>,
    capacity: usize,
}

impl<T> BoundedStack<T> {
    /// Create an empty stack.
    ///
    /// # Arguments
    ///
    /// * `capacity`: Maximum number of elements on the stack.
    ///
    /// # Errors
    ///
    /// `InvalidCapacity` if the capacity is zero.
    pub fn new(capacity: usize) -> Result<Self> {
        if capacity == 0 {
            return Err(CollectionError::InvalidCapacity);
        }

        Ok(Self { values: LinkedList::new(), capacity, })
    }

    /// Put a value on top of the stack.
    ///
    /// # Errors
    ///
    /// `Full` if the stack already holds `capacity` values, the stack is not modified.
    pub fn push(&mut self, value: T) -> Result<()> {
        if self.is_full() {
            return Err(CollectionError::Full { capacity: self.capacity });
        }

        self.values.push_front(value);
        trace!("Pushed onto stack, {} of {} used", self.len(), self.capacity);

        Ok(())
    }

    /// Take the value from the top of the stack.
    ///
    /// # Errors
    ///
    /// `Empty` if there is nothing on the stack.
    pub fn pop(&mut self) -> Result<T> {
        let value = self.values.pop_front().ok_or(CollectionError::Empty)?;
        trace!("Popped from stack, {} of {} used", self.len(), self.capacity);

        Ok(value)
    }

    /// The value on top of the stack, if any.
    pub fn peek(&self) -> Option<&T> {
        self.values.peek_front()
    }

    /// Number of values on the stack.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Maximum number of values on the stack.
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Whether there are no values on the stack.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Whether no more values can be pushed.
    pub fn is_full(&self) -> bool {
        self.len() == self.capacity
    }
}

impl<T> Default for BoundedStack<T> {
    fn default() -> Self {
        Self { values: LinkedList::new(), capacity: DEFAULT_CAPACITY, }
    }
}

/// Top of the stack first.
impl<T: Display> Display for BoundedStack<T> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        Display::fmt(&self.values, f)
    }
}

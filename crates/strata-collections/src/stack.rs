//! Fixed-capacity LIFO stack.

use strata_arena::{ArenaError, StackArena};
use strata_core::{BoundedCount, CollectionError};

use crate::array::Array;

/// Last-in-first-out stack over arena memory.
///
/// Only the newest value can be read or removed.
#[derive(Debug)]
pub struct Stack<'a, T> {
    array: Array<'a, T>,
    count: usize,
}

impl<'a, T: Copy> Stack<'a, T> {
    /// Allocate an empty stack with room for `capacity` values.
    ///
    /// # Panics
    ///
    /// Panics if the arena cannot hold the storage.
    pub fn allocate(arena: &'a StackArena, capacity: usize, fill: T) -> Self {
        Self::try_allocate(arena, capacity, fill).unwrap_or_else(|err| panic!("{err}"))
    }

    /// Allocate an empty stack, or report why the arena refused.
    pub fn try_allocate(
        arena: &'a StackArena,
        capacity: usize,
        fill: T,
    ) -> Result<Self, ArenaError> {
        Ok(Self {
            array: Array::try_allocate(arena, capacity, fill)?,
            count: 0,
        })
    }

    /// Push `value` on top, returning a reference to the stored copy.
    ///
    /// # Panics
    ///
    /// Panics if the stack is full.
    pub fn push(&mut self, value: T) -> &mut T {
        match self.try_push(value) {
            Ok(slot) => slot,
            Err(err) => panic!("{err}"),
        }
    }

    /// Push `value`, or report that the stack is full.
    pub fn try_push(&mut self, value: T) -> Result<&mut T, CollectionError> {
        if self.count >= self.array.len() {
            return Err(CollectionError::CapacityExceeded {
                count: self.count,
                capacity: self.array.len(),
            });
        }
        let slot = &mut self.array[self.count];
        *slot = value;
        self.count += 1;
        Ok(slot)
    }

    /// Remove and return the top value.
    ///
    /// # Panics
    ///
    /// Panics if the stack is empty.
    pub fn pop(&mut self) -> T {
        self.try_pop()
            .unwrap_or_else(|| panic!("{}", CollectionError::Empty))
    }

    /// Remove and return the top value, if any.
    pub fn try_pop(&mut self) -> Option<T> {
        if self.count == 0 {
            return None;
        }
        self.count -= 1;
        Some(self.array[self.count])
    }
}

impl<'a, T> Stack<'a, T> {
    /// The top value.
    ///
    /// # Panics
    ///
    /// Panics if the stack is empty.
    pub fn peek(&self) -> &T {
        match self.count {
            0 => panic!("{}", CollectionError::Empty),
            n => &self.array[n - 1],
        }
    }

    /// The top value, mutably.
    ///
    /// # Panics
    ///
    /// Panics if the stack is empty.
    pub fn peek_mut(&mut self) -> &mut T {
        match self.count {
            0 => panic!("{}", CollectionError::Empty),
            n => &mut self.array[n - 1],
        }
    }

    /// Drop every value logically.
    pub fn clear(&mut self) {
        self.count = 0;
    }

    /// Iterate from the bottom of the stack to the top.
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.array.as_slice()[..self.count].iter()
    }

    /// Hand the memory back to the arena.
    ///
    /// # Panics
    ///
    /// Panics if something allocated after this stack is still outstanding.
    pub fn free(self) {
        self.array.free();
    }
}

impl<T> BoundedCount for Stack<'_, T> {
    fn count(&self) -> usize {
        self.count
    }

    fn capacity(&self) -> usize {
        self.array.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pop_then_peek_sees_older_value() {
        let arena = StackArena::new(1024);
        let mut stack = Stack::allocate(&arena, 12, 0i32);
        let i = 2;
        stack.push(i);
        stack.push(3);
        assert_eq!(stack.pop(), 3);
        assert_eq!(*stack.peek(), i);
    }

    #[test]
    fn iteration_is_bottom_to_top() {
        let arena = StackArena::new(1024);
        let mut stack = Stack::allocate(&arena, 4, 0u8);
        for v in 1..=3 {
            stack.push(v);
        }
        assert_eq!(stack.iter().copied().collect::<Vec<_>>(), vec![1, 2, 3]);
    }

    #[test]
    fn peek_mut_edits_top() {
        let arena = StackArena::new(1024);
        let mut stack = Stack::allocate(&arena, 4, 0u8);
        stack.push(1);
        *stack.peek_mut() = 9;
        assert_eq!(stack.pop(), 9);
    }

    #[test]
    fn try_pop_on_empty_is_none() {
        let arena = StackArena::new(1024);
        let mut stack = Stack::allocate(&arena, 4, 0u8);
        assert_eq!(stack.try_pop(), None);
    }

    #[test]
    #[should_panic(expected = "container is empty")]
    fn peek_on_empty_panics() {
        let arena = StackArena::new(1024);
        let stack = Stack::allocate(&arena, 4, 0u8);
        let _ = stack.peek();
    }

    #[test]
    fn push_past_capacity_errors() {
        let arena = StackArena::new(1024);
        let mut stack = Stack::allocate(&arena, 1, 0u8);
        stack.push(1);
        assert!(stack.try_push(2).is_err());
        assert_eq!(stack.count(), 1);
    }
}

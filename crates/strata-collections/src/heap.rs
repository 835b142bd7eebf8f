//! Binary min-heap keyed by an injected priority function.
//!
//! Storage is 1-indexed: slot 0 is never used, the root lives at slot 1 and
//! the children of slot `i` are `2i` and `2i + 1`. Each occupied slot caches
//! its value's priority so sifting never re-runs the priority function.

use strata_arena::{ArenaError, StackArena};
use strata_core::{BoundedCount, CollectionError, HashFn, KeyPair, Slot};
use tracing::debug;

use crate::array::Array;

/// Fixed-capacity priority queue over arena memory. Smallest priority first.
#[derive(Debug)]
pub struct Heap<'a, T> {
    slots: Array<'a, Slot<T>>,
    count: usize,
    priority: HashFn<T>,
}

impl<'a, T: Copy> Heap<'a, T> {
    /// Allocate an empty heap with room for `capacity` values.
    ///
    /// # Panics
    ///
    /// Panics if the arena cannot hold the storage.
    pub fn allocate(arena: &'a StackArena, capacity: usize, priority: HashFn<T>) -> Self {
        Self::try_allocate(arena, capacity, priority).unwrap_or_else(|err| panic!("{err}"))
    }

    /// Allocate an empty heap, or report why the arena refused.
    pub fn try_allocate(
        arena: &'a StackArena,
        capacity: usize,
        priority: HashFn<T>,
    ) -> Result<Self, ArenaError> {
        let slots = Array::try_allocate(arena, capacity + 1, Slot::Empty)?;
        debug!(capacity, "heap allocated");
        Ok(Self {
            slots,
            count: 0,
            priority,
        })
    }

    /// Add `value`.
    ///
    /// # Panics
    ///
    /// Panics if the heap is full.
    pub fn insert(&mut self, value: T) {
        if let Err(err) = self.try_insert(value) {
            panic!("{err}");
        }
    }

    /// Add `value`, or report that the heap is full.
    pub fn try_insert(&mut self, value: T) -> Result<(), CollectionError> {
        if self.count >= self.capacity() {
            return Err(CollectionError::CapacityExceeded {
                count: self.count,
                capacity: self.capacity(),
            });
        }
        self.count += 1;
        let key = (self.priority)(&value);
        self.slots[self.count] = Slot::occupied(key, value);
        self.sift_up(self.count);
        Ok(())
    }

    /// Remove and return the value with the smallest priority.
    ///
    /// # Panics
    ///
    /// Panics if the heap is empty.
    pub fn pop(&mut self) -> T {
        self.try_pop()
            .unwrap_or_else(|| panic!("{}", CollectionError::Empty))
    }

    /// Remove and return the smallest value, if any.
    pub fn try_pop(&mut self) -> Option<T> {
        if self.count == 0 {
            return None;
        }
        let top = self.slots[1].take();
        self.slots.swap(1, self.count);
        self.count -= 1;
        self.sift_down(1);
        top.value().copied()
    }
}

impl<'a, T> Heap<'a, T> {
    /// The value with the smallest priority.
    ///
    /// # Panics
    ///
    /// Panics if the heap is empty.
    pub fn peek(&self) -> &T {
        self.try_peek()
            .unwrap_or_else(|| panic!("{}", CollectionError::Empty))
    }

    /// The smallest value, if any.
    pub fn try_peek(&self) -> Option<&T> {
        match self.count {
            0 => None,
            _ => self.slots[1].value(),
        }
    }

    /// Priority of the smallest value, if any.
    pub fn peek_priority(&self) -> Option<usize> {
        match self.count {
            0 => None,
            _ => self.slots[1].key(),
        }
    }

    /// Drop every value logically.
    pub fn clear(&mut self) {
        self.count = 0;
    }

    /// Iterate over stored values in storage order, not priority order.
    pub fn iter(&self) -> impl Iterator<Item = &T> + '_ {
        self.slots.as_slice()[1..=self.count]
            .iter()
            .filter_map(Slot::value)
    }

    /// Hand the memory back to the arena.
    ///
    /// # Panics
    ///
    /// Panics if something allocated after this heap is still outstanding.
    pub fn free(self) {
        self.slots.free();
    }

    fn key(&self, index: usize) -> usize {
        match &self.slots[index] {
            Slot::Occupied(KeyPair { key, .. }) => *key,
            Slot::Empty => unreachable!("heap slot {index} inside count is empty"),
        }
    }

    fn sift_up(&mut self, mut index: usize) {
        while index > 1 {
            let parent = index / 2;
            if self.key(index) >= self.key(parent) {
                break;
            }
            self.slots.swap(index, parent);
            index = parent;
        }
    }

    fn sift_down(&mut self, mut index: usize) {
        loop {
            let left = index * 2;
            if left > self.count {
                break;
            }
            let right = left + 1;
            let child = if right <= self.count && self.key(right) < self.key(left) {
                right
            } else {
                left
            };
            if self.key(child) >= self.key(index) {
                break;
            }
            self.slots.swap(index, child);
            index = child;
        }
    }
}

impl<T> BoundedCount for Heap<'_, T> {
    fn count(&self) -> usize {
        self.count
    }

    fn capacity(&self) -> usize {
        self.slots.len() - 1
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strata_test_utils::{job_priority, Job};

    fn identity(v: &usize) -> usize {
        *v
    }

    #[test]
    fn smaller_priority_comes_out_first() {
        let arena = StackArena::new(1024);
        let mut heap = Heap::allocate(&arena, 8, identity);
        heap.insert(6);
        heap.insert(5);
        assert_eq!(heap.pop(), 5);
        assert_eq!(heap.pop(), 6);
        assert!(heap.is_empty());
    }

    #[test]
    fn capacity_eight_example() {
        let arena = StackArena::new(1024);
        let mut heap = Heap::allocate(&arena, 8, job_priority);
        heap.insert(Job::new(6, 0));
        heap.insert(Job::new(5, 1));
        assert_eq!(heap.peek().id, 1);
        assert_eq!(heap.count(), 2);
        assert_eq!(heap.capacity(), 8);
        heap.clear();
        assert_eq!(heap.count(), 0);
    }

    #[test]
    fn peek_does_not_remove() {
        let arena = StackArena::new(1024);
        let mut heap = Heap::allocate(&arena, 4, identity);
        heap.insert(3);
        heap.insert(1);
        assert_eq!(*heap.peek(), 1);
        assert_eq!(heap.peek_priority(), Some(1));
        assert_eq!(heap.count(), 2);
    }

    #[test]
    fn priority_comes_from_function_not_value() {
        let arena = StackArena::new(1024);
        let mut heap = Heap::allocate(&arena, 4, job_priority);
        heap.insert(Job::new(9, 0));
        heap.insert(Job::new(2, 1));
        heap.insert(Job::new(4, 2));
        assert_eq!(heap.pop().id, 1);
        assert_eq!(heap.pop().id, 2);
        assert_eq!(heap.pop().id, 0);
    }

    #[test]
    fn full_heap_rejects_insert() {
        let arena = StackArena::new(1024);
        let mut heap = Heap::allocate(&arena, 2, identity);
        heap.insert(1);
        heap.insert(2);
        assert!(heap.is_full());
        assert_eq!(
            heap.try_insert(3),
            Err(CollectionError::CapacityExceeded {
                count: 2,
                capacity: 2,
            })
        );
    }

    #[test]
    #[should_panic(expected = "container is empty")]
    fn pop_on_empty_panics() {
        let arena = StackArena::new(1024);
        let mut heap = Heap::allocate(&arena, 4, identity);
        heap.pop();
    }

    #[test]
    #[should_panic(expected = "container is empty")]
    fn peek_on_empty_panics() {
        let arena = StackArena::new(1024);
        let heap = Heap::allocate(&arena, 4, identity);
        let _ = heap.peek();
    }

    #[test]
    fn clear_then_reuse() {
        let arena = StackArena::new(1024);
        let mut heap = Heap::allocate(&arena, 4, identity);
        heap.insert(7);
        heap.insert(8);
        heap.clear();
        assert_eq!(heap.try_peek(), None);
        heap.insert(9);
        assert_eq!(heap.pop(), 9);
    }

    #[test]
    fn iter_visits_every_value() {
        let arena = StackArena::new(1024);
        let mut heap = Heap::allocate(&arena, 8, identity);
        for v in [4, 8, 1, 6] {
            heap.insert(v);
        }
        let mut seen: Vec<usize> = heap.iter().copied().collect();
        seen.sort_unstable();
        assert_eq!(seen, vec![1, 4, 6, 8]);
    }

    mod proptests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn pops_in_nondecreasing_order(
                values in proptest::collection::vec(0usize..1000, 0..48),
            ) {
                let arena = StackArena::new(8192);
                let mut heap = Heap::allocate(&arena, values.len(), identity);
                for &v in &values {
                    heap.insert(v);
                }
                let mut drained = Vec::new();
                while let Some(v) = heap.try_pop() {
                    drained.push(v);
                }
                let mut sorted = values.clone();
                sorted.sort_unstable();
                prop_assert_eq!(drained, sorted);
            }

            #[test]
            fn interleaved_ops_track_minimum(
                ops in proptest::collection::vec(proptest::option::of(0usize..100), 0..64),
            ) {
                let arena = StackArena::new(8192);
                let mut heap = Heap::allocate(&arena, 64, identity);
                let mut model: Vec<usize> = Vec::new();
                for op in ops {
                    match op {
                        Some(v) => {
                            heap.insert(v);
                            model.push(v);
                        }
                        None => {
                            let min = model.iter().copied().min();
                            if let Some(m) = min {
                                let at = model.iter().position(|&x| x == m).unwrap();
                                model.swap_remove(at);
                            }
                            prop_assert_eq!(heap.try_pop(), min);
                        }
                    }
                    prop_assert_eq!(heap.try_peek().copied(), model.iter().copied().min());
                }
            }
        }
    }
}

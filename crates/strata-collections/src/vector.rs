//! Unordered fixed-capacity vector.
//!
//! A [`Vector`] is an [`Array`] plus a logical count. Indexing reaches the
//! whole backing storage; iteration stops at the count. Capacity never grows.

use std::ops::{Index, IndexMut};

use strata_arena::{ArenaError, StackArena};
use strata_core::{BoundedCount, CollectionError, IndexedStorage};

use crate::array::Array;

/// Unordered vector over arena memory with a fixed capacity.
#[derive(Debug)]
pub struct Vector<'a, T> {
    array: Array<'a, T>,
    count: usize,
}

impl<'a, T: Copy> Vector<'a, T> {
    /// Allocate an empty vector with room for `capacity` values.
    ///
    /// Every slot is initialised to `fill`.
    ///
    /// # Panics
    ///
    /// Panics if the arena cannot hold the storage.
    pub fn allocate(arena: &'a StackArena, capacity: usize, fill: T) -> Self {
        Self::try_allocate(arena, capacity, fill).unwrap_or_else(|err| panic!("{err}"))
    }

    /// Allocate an empty vector, or report why the arena refused.
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

    /// Allocate a vector holding a copy of `src`, with capacity `src.len()`.
    ///
    /// # Panics
    ///
    /// Panics if the arena cannot hold the storage.
    pub fn allocate_from(arena: &'a StackArena, src: &[T]) -> Self {
        Self {
            array: Array::allocate_from(arena, src),
            count: src.len(),
        }
    }

    /// Append `value`, returning a reference to the stored copy.
    ///
    /// # Panics
    ///
    /// Panics if the vector is full.
    pub fn add(&mut self, value: T) -> &mut T {
        match self.try_add(value) {
            Ok(slot) => slot,
            Err(err) => panic!("{err}"),
        }
    }

    /// Append `value`, or report that the vector is full.
    pub fn try_add(&mut self, value: T) -> Result<&mut T, CollectionError> {
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

    /// Remove the value at `index` by moving the last value into its place.
    ///
    /// # Panics
    ///
    /// Panics if `index >= count`.
    pub fn remove_at(&mut self, index: usize) -> T {
        assert!(
            index < self.count,
            "{}",
            CollectionError::IndexOutOfBounds {
                index,
                len: self.count,
            }
        );
        self.count -= 1;
        self.array.swap(index, self.count);
        self.array[self.count]
    }
}

impl<'a, T> Vector<'a, T> {
    /// Set the logical count directly.
    ///
    /// Values between the old and new count keep whatever the storage held.
    ///
    /// # Panics
    ///
    /// Panics if `count` exceeds the capacity.
    pub fn set_count(&mut self, count: usize) {
        assert!(
            count <= self.array.len(),
            "{}",
            CollectionError::CapacityExceeded {
                count,
                capacity: self.array.len(),
            }
        );
        self.count = count;
    }

    /// Drop every value logically. Storage is untouched.
    pub fn clear(&mut self) {
        self.count = 0;
    }

    /// The stored values, `[0, count)`.
    pub fn items(&self) -> &[T] {
        &self.array.as_slice()[..self.count]
    }

    /// The stored values, mutably.
    pub fn items_mut(&mut self) -> &mut [T] {
        let count = self.count;
        &mut self.array.as_mut_slice()[..count]
    }

    /// Iterate over the stored values.
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.items().iter()
    }

    /// Iterate mutably over the stored values.
    pub fn iter_mut(&mut self) -> std::slice::IterMut<'_, T> {
        self.items_mut().iter_mut()
    }

    /// Swap the slots at `a` and `b` anywhere in the backing storage.
    pub fn swap(&mut self, a: usize, b: usize) {
        self.array.swap(a, b);
    }

    /// Hand the memory back to the arena.
    ///
    /// # Panics
    ///
    /// Panics if something allocated after this vector is still outstanding.
    pub fn free(self) {
        self.array.free();
    }
}

impl<T> BoundedCount for Vector<'_, T> {
    fn count(&self) -> usize {
        self.count
    }

    fn capacity(&self) -> usize {
        self.array.len()
    }
}

impl<T> IndexedStorage<T> for Vector<'_, T> {
    fn as_slice(&self) -> &[T] {
        self.array.as_slice()
    }

    fn as_mut_slice(&mut self) -> &mut [T] {
        self.array.as_mut_slice()
    }
}

impl<T> Index<usize> for Vector<'_, T> {
    type Output = T;

    fn index(&self, index: usize) -> &T {
        &self.array[index]
    }
}

impl<T> IndexMut<usize> for Vector<'_, T> {
    fn index_mut(&mut self, index: usize) -> &mut T {
        &mut self.array[index]
    }
}

impl<'s, T> IntoIterator for &'s Vector<'_, T> {
    type Item = &'s T;
    type IntoIter = std::slice::Iter<'s, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn iteration_stops_at_count() {
        let arena = StackArena::new(1024);
        let mut vec = Vector::allocate(&arena, 12, 0i32);
        vec.set_count(2);
        vec[0] = 2;
        vec[1] = 4;
        vec.add(6);
        vec[3] = 8;

        let mut n = 0;
        for &i in &vec {
            n += 1;
            assert!(n <= 3);
            assert_ne!(i, 8);
            assert_eq!(n * 2, i);
        }
        assert_eq!(n, 3);
    }

    #[test]
    fn add_returns_stored_slot() {
        let arena = StackArena::new(1024);
        let mut vec = Vector::allocate(&arena, 4, 0u32);
        *vec.add(1) += 10;
        assert_eq!(vec.items(), &[11]);
    }

    #[test]
    fn add_past_capacity_errors() {
        let arena = StackArena::new(1024);
        let mut vec = Vector::allocate(&arena, 2, 0u8);
        vec.add(1);
        vec.add(2);
        assert!(vec.is_full());
        assert_eq!(
            vec.try_add(3),
            Err(CollectionError::CapacityExceeded {
                count: 2,
                capacity: 2,
            })
        );
    }

    #[test]
    #[should_panic(expected = "capacity exceeded")]
    fn add_past_capacity_panics() {
        let arena = StackArena::new(1024);
        let mut vec = Vector::allocate(&arena, 1, 0u8);
        vec.add(1);
        vec.add(2);
    }

    #[test]
    fn remove_at_moves_last_into_hole() {
        let arena = StackArena::new(1024);
        let mut vec = Vector::allocate_from(&arena, &[10, 20, 30, 40]);
        assert_eq!(vec.remove_at(1), 20);
        assert_eq!(vec.items(), &[10, 40, 30]);
        assert_eq!(vec.count(), 3);
    }

    #[test]
    #[should_panic(expected = "out of bounds")]
    fn remove_past_count_panics() {
        let arena = StackArena::new(1024);
        let mut vec = Vector::allocate(&arena, 4, 0u8);
        vec.remove_at(0);
    }

    #[test]
    fn clear_keeps_storage() {
        let arena = StackArena::new(1024);
        let mut vec = Vector::allocate(&arena, 4, 0u8);
        vec.add(5);
        vec.clear();
        assert!(vec.is_empty());
        assert_eq!(vec[0], 5);
    }
}

//! Fixed-length array over arena memory.
//!
//! [`Array`] is the storage layer every other container builds on: a
//! [`Span`] plus index arithmetic. It never owns its memory; [`Array::free`]
//! hands the span back to the arena it came from.

use std::ops::{Index, IndexMut};

use strata_arena::{Allocation, ArenaError, Span, StackArena};
use strata_core::IndexedStorage;
use tracing::trace;

/// A fixed-length array borrowed from a [`StackArena`].
#[derive(Debug)]
pub struct Array<'a, T> {
    span: Span<'a, T>,
}

impl<'a, T: Copy> Array<'a, T> {
    /// Allocate `len` elements, each set to `fill`.
    ///
    /// # Panics
    ///
    /// Panics if the arena cannot hold the array.
    pub fn allocate(arena: &'a StackArena, len: usize, fill: T) -> Self {
        Self::try_allocate(arena, len, fill).unwrap_or_else(|err| panic!("{err}"))
    }

    /// Allocate `len` elements set to `fill`, or report why the arena refused.
    pub fn try_allocate(arena: &'a StackArena, len: usize, fill: T) -> Result<Self, ArenaError> {
        let span = arena.try_alloc_filled(len, fill)?;
        trace!(len, offset = span.allocation().offset(), "array allocated");
        Ok(Self { span })
    }

    /// Allocate a copy of `src`.
    ///
    /// # Panics
    ///
    /// Panics if the arena cannot hold the array.
    pub fn allocate_from(arena: &'a StackArena, src: &[T]) -> Self {
        Self::try_allocate_from(arena, src).unwrap_or_else(|err| panic!("{err}"))
    }

    /// Allocate a copy of `src`, or report why the arena refused.
    pub fn try_allocate_from(arena: &'a StackArena, src: &[T]) -> Result<Self, ArenaError> {
        let span = arena.try_alloc_copied(src)?;
        trace!(
            len = src.len(),
            offset = span.allocation().offset(),
            "array copied"
        );
        Ok(Self { span })
    }
}

impl<'a, T> Array<'a, T> {
    /// Number of elements.
    pub fn len(&self) -> usize {
        self.span.len()
    }

    /// Whether the array has no elements.
    pub fn is_empty(&self) -> bool {
        self.span.is_empty()
    }

    /// Shared access to the element at `index`.
    pub fn get(&self, index: usize) -> Option<&T> {
        self.span.get(index)
    }

    /// Mutable access to the element at `index`.
    pub fn get_mut(&mut self, index: usize) -> Option<&mut T> {
        self.span.get_mut(index)
    }

    /// Swap the elements at `a` and `b`.
    ///
    /// # Panics
    ///
    /// Panics if either index is out of bounds.
    pub fn swap(&mut self, a: usize, b: usize) {
        let len = self.len();
        assert!(
            a < len && b < len,
            "swap({a}, {b}) out of bounds for length {len}"
        );
        self.span.swap(a, b);
    }

    /// All elements as a slice.
    pub fn as_slice(&self) -> &[T] {
        self.span.as_slice()
    }

    /// All elements as a mutable slice.
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        self.span.as_mut_slice()
    }

    /// Raw pointer to the backing storage.
    pub fn as_ptr(&self) -> *const T {
        self.span.as_ptr()
    }

    /// Iterate over all elements.
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.span.iter()
    }

    /// Iterate mutably over all elements.
    pub fn iter_mut(&mut self) -> std::slice::IterMut<'_, T> {
        self.span.iter_mut()
    }

    /// The arena record behind this array.
    pub fn allocation(&self) -> &Allocation<'a> {
        self.span.allocation()
    }

    /// Hand the memory back to the arena.
    ///
    /// # Panics
    ///
    /// Panics if something allocated after this array is still outstanding.
    pub fn free(self) {
        self.span.release();
    }

    /// Hand the memory back, or report why it cannot be released yet.
    pub fn try_free(self) -> Result<(), ArenaError> {
        self.span.try_release()
    }
}

impl<T> Index<usize> for Array<'_, T> {
    type Output = T;

    fn index(&self, index: usize) -> &T {
        &self.span[index]
    }
}

impl<T> IndexMut<usize> for Array<'_, T> {
    fn index_mut(&mut self, index: usize) -> &mut T {
        &mut self.span[index]
    }
}

impl<T> IndexedStorage<T> for Array<'_, T> {
    fn as_slice(&self) -> &[T] {
        self.span.as_slice()
    }

    fn as_mut_slice(&mut self) -> &mut [T] {
        self.span.as_mut_slice()
    }
}

impl<'s, T> IntoIterator for &'s Array<'_, T> {
    type Item = &'s T;
    type IntoIter = std::slice::Iter<'s, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<'s, T> IntoIterator for &'s mut Array<'_, T> {
    type Item = &'s mut T;
    type IntoIter = std::slice::IterMut<'s, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter_mut()
    }
}

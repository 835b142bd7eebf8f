//! Capability traits shared by the bounded containers.
//!
//! Containers compose these rather than inheriting from a common base:
//! [`IndexedStorage`] is raw positional access to the backing storage,
//! [`BoundedCount`] is the logical fill level on top of a fixed capacity.
//! The keyed containers only implement [`BoundedCount`], since handing out
//! positional write access would let callers break their ordering invariants.

/// Hash or priority function injected into a keyed container.
pub type HashFn<T> = fn(&T) -> usize;

/// Positional access to a fixed-length backing store.
pub trait IndexedStorage<T> {
    /// The backing storage as a slice, covering every addressable element.
    fn as_slice(&self) -> &[T];

    /// The backing storage as a mutable slice.
    fn as_mut_slice(&mut self) -> &mut [T];

    /// Number of addressable elements.
    fn len(&self) -> usize {
        self.as_slice().len()
    }

    /// Shared access to the element at `index`.
    fn get(&self, index: usize) -> Option<&T> {
        self.as_slice().get(index)
    }

    /// Mutable access to the element at `index`.
    fn get_mut(&mut self, index: usize) -> Option<&mut T> {
        self.as_mut_slice().get_mut(index)
    }

    /// Swap the elements at `a` and `b`.
    ///
    /// # Panics
    ///
    /// Panics if either index is out of bounds.
    fn swap(&mut self, a: usize, b: usize) {
        self.as_mut_slice().swap(a, b);
    }
}

/// A logical element count bounded by a fixed capacity.
pub trait BoundedCount {
    /// Number of values currently stored.
    fn count(&self) -> usize;

    /// Maximum number of values the container can hold.
    fn capacity(&self) -> usize;

    /// Whether no values are stored.
    fn is_empty(&self) -> bool {
        self.count() == 0
    }

    /// Whether the container cannot accept another value.
    fn is_full(&self) -> bool {
        self.count() >= self.capacity()
    }

    /// Free room left before the container is full.
    fn remaining(&self) -> usize {
        self.capacity().saturating_sub(self.count())
    }
}

//! Typed views over arena allocations.
//!
//! A [`Span`] pairs an [`Allocation`] record with a typed pointer into the
//! region. It does not own memory: handing it back is bookkeeping only and
//! never runs destructors. Spans fresh from
//! [`StackArena::typed_allocate`](crate::StackArena::typed_allocate) hold
//! `MaybeUninit<T>` and become `Span<T>` once every element is written.

use std::fmt;
use std::mem::MaybeUninit;
use std::ops::{Deref, DerefMut};
use std::ptr::NonNull;

use crate::error::ArenaError;
use crate::handle::Allocation;

/// A typed, non-owning view of one arena allocation.
///
/// Every element of a `Span<T>` is initialised. Slice access lives in
/// the crate's `raw` module alongside the other pointer work.
pub struct Span<'a, T> {
    pub(crate) ptr: NonNull<T>,
    pub(crate) len: usize,
    allocation: Allocation<'a>,
}

impl<'a, T> Span<'a, T> {
    pub(crate) fn new(ptr: NonNull<T>, len: usize, allocation: Allocation<'a>) -> Self {
        Self {
            ptr,
            len,
            allocation,
        }
    }

    /// Number of elements.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Whether the span holds no elements.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// The allocation record backing this span.
    pub fn allocation(&self) -> &Allocation<'a> {
        &self.allocation
    }

    /// Raw pointer to the first element.
    pub fn as_ptr(&self) -> *const T {
        self.ptr.as_ptr()
    }

    /// Hand the span back to the arena. Elements are not dropped.
    ///
    /// # Panics
    ///
    /// Panics if a newer allocation is still outstanding.
    pub fn release(self) {
        self.allocation.release();
    }

    /// Hand the span back, or report why it cannot be released yet.
    pub fn try_release(self) -> Result<(), ArenaError> {
        self.allocation.try_release()
    }
}

impl<'a, T: Copy> Span<'a, MaybeUninit<T>> {
    /// Initialise every element with `value`.
    pub fn fill(mut self, value: T) -> Span<'a, T> {
        for slot in self.as_mut_slice() {
            *slot = MaybeUninit::new(value);
        }
        self.assume_init()
    }

    /// Initialise the span by copying `src` into it.
    ///
    /// # Panics
    ///
    /// Panics if `src.len()` differs from the span length.
    pub fn copy_from(mut self, src: &[T]) -> Span<'a, T> {
        assert_eq!(
            src.len(),
            self.len,
            "source length {} does not match span length {}",
            src.len(),
            self.len
        );
        for (slot, value) in self.as_mut_slice().iter_mut().zip(src) {
            *slot = MaybeUninit::new(*value);
        }
        self.assume_init()
    }

    /// Only called once every element has been written.
    fn assume_init(self) -> Span<'a, T> {
        Span {
            ptr: self.ptr.cast(),
            len: self.len,
            allocation: self.allocation,
        }
    }
}

impl<T> Deref for Span<'_, T> {
    type Target = [T];

    fn deref(&self) -> &[T] {
        self.as_slice()
    }
}

impl<T> DerefMut for Span<'_, T> {
    fn deref_mut(&mut self) -> &mut [T] {
        self.as_mut_slice()
    }
}

impl<T: fmt::Debug> fmt::Debug for Span<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Span")
            .field("allocation", &self.allocation)
            .field("data", &self.as_slice())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use crate::StackArena;

    #[test]
    fn fill_initialises_every_element() {
        let arena = StackArena::new(1024);
        let span = arena.typed_allocate::<u32>(10).fill(7);
        assert_eq!(span.len(), 10);
        assert!(span.iter().all(|&v| v == 7));
    }

    #[test]
    fn copy_from_matches_source() {
        let arena = StackArena::new(1024);
        let span = arena.typed_allocate::<i16>(4).copy_from(&[1, -2, 3, -4]);
        assert_eq!(&*span, &[1, -2, 3, -4]);
    }

    #[test]
    #[should_panic(expected = "does not match span length")]
    fn copy_from_wrong_length_panics() {
        let arena = StackArena::new(1024);
        let _ = arena.typed_allocate::<u8>(3).copy_from(&[1, 2]);
    }

    #[test]
    fn writes_are_visible_through_slice() {
        let arena = StackArena::new(1024);
        let mut span = arena.alloc_filled(5, 0u64);
        span[0] = 1;
        span[4] = 5;
        assert_eq!(span.as_slice(), &[1, 0, 0, 0, 5]);
    }

    #[test]
    fn neighbouring_spans_do_not_overlap() {
        let arena = StackArena::new(1024);
        let mut a = arena.alloc_filled(3, 1u8);
        let mut b = arena.alloc_filled(3, 2u8);
        a.as_mut_slice().fill(9);
        b[0] = 4;
        assert_eq!(a.as_slice(), &[9, 9, 9]);
        assert_eq!(b.as_slice(), &[4, 2, 2]);
    }

    #[test]
    fn zero_length_span_is_empty() {
        let arena = StackArena::new(64);
        let span = arena.alloc_filled(0, 0u32);
        assert!(span.is_empty());
        assert_eq!(span.allocation().words(), 0);
        span.release();
        assert_eq!(arena.used_words(), 0);
    }

    #[test]
    fn release_rewinds_arena() {
        let arena = StackArena::new(256);
        let before = arena.available_words();
        let span = arena.alloc_copied(&[1u32, 2, 3]);
        assert!(arena.available_words() < before);
        span.release();
        assert_eq!(arena.available_words(), before);
    }
}

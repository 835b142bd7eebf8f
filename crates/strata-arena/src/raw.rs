//! Low-level primitives for arena memory operations.
//!
//! This is the only module in the crate that contains `unsafe` code. It owns
//! the word region and its LIFO cursor, and turns span pointers back into
//! slices. Every `unsafe` block carries a `// SAFETY:` comment.
//!
//! Region invariants upheld here:
//! - `cursor <= words.len()`.
//! - If `cursor > 0`, the word at `cursor - 1` is the length word written by
//!   the `push` that produced the current cursor. `push` writes that word
//!   before moving the cursor; `pop` moves the cursor back exactly past one
//!   `push`; `reset` only zeroes the cursor.

#![allow(unsafe_code)]

use std::cell::{Cell, UnsafeCell};
use std::mem::MaybeUninit;
use std::ptr::NonNull;

use crate::span::Span;

/// One machine word of region storage.
///
/// `MaybeUninit` because span bytes may be padding; `UnsafeCell` because
/// spans write through pointers derived from a shared borrow of the region.
type Word = UnsafeCell<MaybeUninit<usize>>;

/// The arena's word region plus its bump cursor.
pub(crate) struct Region {
    words: Box<[Word]>,
    cursor: Cell<usize>,
    depth: Cell<usize>,
}

impl Region {
    /// Reserve `capacity` words.
    pub(crate) fn new(capacity: usize) -> Self {
        let words = (0..capacity)
            .map(|_| UnsafeCell::new(MaybeUninit::uninit()))
            .collect();
        Self {
            words,
            cursor: Cell::new(0),
            depth: Cell::new(0),
        }
    }

    pub(crate) fn capacity(&self) -> usize {
        self.words.len()
    }

    pub(crate) fn cursor(&self) -> usize {
        self.cursor.get()
    }

    /// Number of pushes not yet popped.
    pub(crate) fn depth(&self) -> usize {
        self.depth.get()
    }

    /// Reserve `len` words followed by one length word.
    ///
    /// Returns the span's word offset, or `None` if the region cannot hold
    /// `len + 1` more words.
    pub(crate) fn push(&self, len: usize) -> Option<usize> {
        let offset = self.cursor.get();
        let end = offset.checked_add(len)?.checked_add(1)?;
        if end > self.words.len() {
            return None;
        }
        let length_word = self.words[offset + len].get();
        // SAFETY: `offset + len < end <= words.len()`, so the pointer is in
        // bounds. The word lies past the cursor, so no live span covers it.
        unsafe { length_word.write(MaybeUninit::new(len)) };
        self.cursor.set(end);
        self.depth.set(self.depth.get() + 1);
        Some(offset)
    }

    /// Undo the most recent push, returning the span length it recorded.
    pub(crate) fn pop(&self) -> Option<usize> {
        let cursor = self.cursor.get();
        if cursor == 0 {
            return None;
        }
        let length_word = self.words[cursor - 1].get();
        // SAFETY: by the region invariant the word at `cursor - 1` was
        // initialised by the push that produced this cursor, and nothing
        // writes between a span's end and its length word.
        let len = unsafe { length_word.read().assume_init() };
        self.cursor.set(cursor - len - 1);
        self.depth.set(self.depth.get() - 1);
        Some(len)
    }

    pub(crate) fn reset(&mut self) {
        self.cursor.set(0);
        self.depth.set(0);
    }

    /// Pointer to the first byte of the word at `offset`, typed as `T`.
    ///
    /// # Panics
    ///
    /// Panics if `offset` is not below the region capacity.
    pub(crate) fn span_ptr<T>(&self, offset: usize) -> NonNull<T> {
        assert!(offset < self.words.len(), "span offset {offset} outside region");
        // Derive from the whole slice so the pointer may cover the full span.
        let base = self.words.as_ptr();
        // SAFETY: `offset < words.len()`, so the result stays inside the
        // boxed slice allocation.
        let word = unsafe { base.add(offset) };
        let ptr = UnsafeCell::raw_get(word).cast::<T>();
        // SAFETY: derived from a boxed slice pointer, which is never null.
        unsafe { NonNull::new_unchecked(ptr) }
    }
}

impl<T> Span<'_, T> {
    /// The span's elements as a slice.
    pub fn as_slice(&self) -> &[T] {
        // SAFETY: `ptr` addresses `len` elements inside the arena region,
        // aligned to at most a word. The region outlives `'a` because the
        // span's allocation borrows the arena. The range is disjoint from
        // every other span and from all length words, and it stays reserved
        // while the allocation is outstanding: only consuming this span or a
        // `&mut StackArena` can hand it back. Every element is initialised,
        // which `Span<T>` guarantees for all `T` it is built with.
        unsafe { std::slice::from_raw_parts(self.ptr.as_ptr(), self.len) }
    }

    /// The span's elements as a mutable slice.
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        // SAFETY: as for `as_slice`; `&mut self` makes this the only live
        // reference into the range.
        unsafe { std::slice::from_raw_parts_mut(self.ptr.as_ptr(), self.len) }
    }
}

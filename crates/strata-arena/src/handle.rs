//! Allocation records.
//!
//! An [`Allocation`] is the explicit form of the length word the arena writes
//! after every span: it names the span's word offset and word length, and it
//! is the unique token for handing that span back. It borrows the arena, so
//! [`StackArena::free`](crate::StackArena::free) and
//! [`StackArena::reset`](crate::StackArena::reset), which need `&mut`, cannot
//! run while any record is alive.

use std::fmt;

use crate::error::ArenaError;
use crate::stack::StackArena;

/// Record of one outstanding arena allocation.
///
/// Not `Clone`: exactly one record exists per span. Dropping a record without
/// releasing it leaves the span outstanding until the arena is freed past it
/// or reset.
#[must_use]
pub struct Allocation<'a> {
    arena: &'a StackArena,
    offset: usize,
    words: usize,
}

impl<'a> Allocation<'a> {
    pub(crate) fn new(arena: &'a StackArena, offset: usize, words: usize) -> Self {
        Self {
            arena,
            offset,
            words,
        }
    }

    /// Word offset of the span within the region.
    pub fn offset(&self) -> usize {
        self.offset
    }

    /// Length of the span in words, excluding the length word.
    pub fn words(&self) -> usize {
        self.words
    }

    /// Words this allocation consumes, including its length word.
    pub fn footprint(&self) -> usize {
        self.words + 1
    }

    /// The arena the span was carved from.
    pub fn arena(&self) -> &'a StackArena {
        self.arena
    }

    /// Hand the span back to the arena.
    ///
    /// # Panics
    ///
    /// Panics if a newer allocation is still outstanding.
    pub fn release(self) {
        if let Err(err) = self.try_release() {
            panic!("{err}");
        }
    }

    /// Hand the span back, or report why it cannot be released yet.
    ///
    /// On error the span stays outstanding.
    pub fn try_release(self) -> Result<(), ArenaError> {
        self.arena.release(&self)
    }
}

impl fmt::Debug for Allocation<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Allocation")
            .field("offset", &self.offset)
            .field("words", &self.words)
            .finish()
    }
}

impl fmt::Display for Allocation<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Allocation(off={}, words={})", self.offset, self.words)
    }
}

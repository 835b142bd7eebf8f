//! The stack allocator.
//!
//! A [`StackArena`] reserves one contiguous region of machine words and hands
//! out sub-ranges from a bump cursor. After each span it writes one extra
//! word holding the span's length, so [`StackArena::free`] can rewind the most
//! recent allocation without a side ledger:
//!
//! ```text
//! word:  0   1   2   3   4   5   6   7 ...
//!       [ span A  ][3][ span B ][2][ free ...
//!                                  ^ cursor
//! ```
//!
//! Frees must mirror allocations in LIFO order. There is no free list, so the
//! region never fragments.

use std::mem::{align_of, size_of, MaybeUninit};

use tracing::{debug, trace};

use crate::config::ArenaConfig;
use crate::error::ArenaError;
use crate::handle::Allocation;
use crate::raw::Region;
use crate::span::Span;

/// Size of one region word in bytes.
pub const WORD_BYTES: usize = size_of::<usize>();

/// Largest element alignment a span can satisfy.
pub const WORD_ALIGN: usize = align_of::<usize>();

/// Number of whole words needed to hold `bytes` bytes.
pub fn words_for(bytes: usize) -> usize {
    bytes.div_ceil(WORD_BYTES)
}

/// Single-region LIFO allocator.
///
/// Allocation takes `&self`, so any number of spans can be live at once.
/// Each span borrows the arena, and the rewinding operations that ignore
/// individual records ([`free`](Self::free), [`reset`](Self::reset)) take
/// `&mut self`, so they only compile once every span is gone. Spans handed
/// back one by one go through [`Allocation::release`], which checks that the
/// record is on top.
///
/// The arena is `!Sync`; it is meant to be driven by one owner.
pub struct StackArena {
    region: Region,
    config: ArenaConfig,
}

impl StackArena {
    /// Reserve a region of at least `capacity_bytes` bytes.
    pub fn new(capacity_bytes: usize) -> Self {
        Self::with_config(ArenaConfig::new(capacity_bytes))
    }

    /// Reserve a region of exactly `words` words.
    pub fn with_words(words: usize) -> Self {
        Self::with_config(ArenaConfig::with_words(words))
    }

    /// Reserve a region as described by `config`.
    pub fn with_config(config: ArenaConfig) -> Self {
        let words = config.capacity_words();
        debug!(
            capacity_bytes = config.capacity_bytes,
            capacity_words = words,
            "reserving stack arena"
        );
        Self {
            region: Region::new(words),
            config,
        }
    }

    /// The configuration the arena was built with.
    pub fn config(&self) -> &ArenaConfig {
        &self.config
    }

    /// Allocate a span of at least `bytes` bytes.
    ///
    /// The span is rounded up to whole words and followed by one length word.
    ///
    /// # Panics
    ///
    /// Panics if the span plus its length word does not fit.
    pub fn allocate(&self, bytes: usize) -> Allocation<'_> {
        self.try_allocate(bytes).unwrap_or_else(|err| panic!("{err}"))
    }

    /// Allocate a span of at least `bytes` bytes, or report why it does not fit.
    pub fn try_allocate(&self, bytes: usize) -> Result<Allocation<'_>, ArenaError> {
        let words = words_for(bytes);
        let offset = self
            .region
            .push(words)
            .ok_or_else(|| ArenaError::CapacityExceeded {
                requested_words: words,
                available_words: self.available_words(),
            })?;
        trace!(offset, words, "arena allocate");
        Ok(Allocation::new(self, offset, words))
    }

    /// Undo the most recent outstanding allocation.
    ///
    /// Pure bookkeeping: the memory is not touched and no destructors run.
    ///
    /// # Panics
    ///
    /// Panics if nothing is outstanding.
    pub fn free(&mut self) {
        if let Err(err) = self.try_free() {
            panic!("{err}");
        }
    }

    /// Undo the most recent outstanding allocation, returning the number of
    /// words it occupied (excluding its length word).
    pub fn try_free(&mut self) -> Result<usize, ArenaError> {
        let words = self.region.pop().ok_or(ArenaError::NothingToFree)?;
        trace!(words, cursor = self.region.cursor(), "arena free");
        Ok(words)
    }

    /// Free `allocation` if it is the most recent one outstanding.
    pub(crate) fn release(&self, allocation: &Allocation<'_>) -> Result<(), ArenaError> {
        let cursor = self.region.cursor();
        if allocation.offset() + allocation.footprint() != cursor {
            return Err(ArenaError::OutOfOrderFree {
                offset: allocation.offset(),
                words: allocation.words(),
                cursor,
            });
        }
        let words = self.region.pop().ok_or(ArenaError::NothingToFree)?;
        debug_assert_eq!(words, allocation.words());
        trace!(offset = allocation.offset(), words, "arena release");
        Ok(())
    }

    /// Allocate room for `count` values of `T`, uninitialised.
    ///
    /// # Panics
    ///
    /// Panics if `T` needs more than word alignment, if the byte size
    /// overflows, or if the span does not fit.
    pub fn typed_allocate<T>(&self, count: usize) -> Span<'_, MaybeUninit<T>> {
        self.try_typed_allocate(count)
            .unwrap_or_else(|err| panic!("{err}"))
    }

    /// Allocate room for `count` values of `T`, or report why it cannot be done.
    pub fn try_typed_allocate<T>(
        &self,
        count: usize,
    ) -> Result<Span<'_, MaybeUninit<T>>, ArenaError> {
        if align_of::<T>() > WORD_ALIGN {
            return Err(ArenaError::UnsupportedAlignment {
                align: align_of::<T>(),
                max_align: WORD_ALIGN,
            });
        }
        let bytes = count
            .checked_mul(size_of::<T>())
            .ok_or(ArenaError::SizeOverflow {
                count,
                elem_size: size_of::<T>(),
            })?;
        let allocation = self.try_allocate(bytes)?;
        let ptr = self.region.span_ptr(allocation.offset());
        Ok(Span::new(ptr, count, allocation))
    }

    /// Allocate `len` values, each initialised to `fill`.
    ///
    /// # Panics
    ///
    /// As for [`typed_allocate`](Self::typed_allocate).
    pub fn alloc_filled<T: Copy>(&self, len: usize, fill: T) -> Span<'_, T> {
        self.typed_allocate(len).fill(fill)
    }

    /// Allocate `len` values initialised to `fill`, or report why it cannot be done.
    pub fn try_alloc_filled<T: Copy>(
        &self,
        len: usize,
        fill: T,
    ) -> Result<Span<'_, T>, ArenaError> {
        Ok(self.try_typed_allocate(len)?.fill(fill))
    }

    /// Allocate a copy of `src`.
    ///
    /// # Panics
    ///
    /// As for [`typed_allocate`](Self::typed_allocate).
    pub fn alloc_copied<T: Copy>(&self, src: &[T]) -> Span<'_, T> {
        self.typed_allocate(src.len()).copy_from(src)
    }

    /// Allocate a copy of `src`, or report why it cannot be done.
    pub fn try_alloc_copied<T: Copy>(&self, src: &[T]) -> Result<Span<'_, T>, ArenaError> {
        Ok(self.try_typed_allocate(src.len())?.copy_from(src))
    }

    /// Rewind the cursor to the start of the region.
    ///
    /// Every outstanding allocation is dropped at once. Memory is not touched.
    pub fn reset(&mut self) {
        debug!(
            released_words = self.region.cursor(),
            released_allocations = self.region.depth(),
            "resetting stack arena"
        );
        self.region.reset();
    }

    /// Words still available for the next span.
    ///
    /// One word is held back for that span's length word.
    pub fn available_words(&self) -> usize {
        self.region
            .capacity()
            .saturating_sub(self.region.cursor() + 1)
    }

    /// Bytes still available for the next span.
    pub fn available_bytes(&self) -> usize {
        self.available_words() * WORD_BYTES
    }

    /// Words consumed so far, length words included.
    pub fn used_words(&self) -> usize {
        self.region.cursor()
    }

    /// Total words in the region.
    pub fn capacity_words(&self) -> usize {
        self.region.capacity()
    }

    /// Number of allocations not yet freed.
    pub fn depth(&self) -> usize {
        self.region.depth()
    }
}

impl Default for StackArena {
    fn default() -> Self {
        Self::with_config(ArenaConfig::default())
    }
}

impl std::fmt::Debug for StackArena {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StackArena")
            .field("capacity_words", &self.capacity_words())
            .field("used_words", &self.used_words())
            .field("depth", &self.depth())
            .finish()
    }
}

//! Arena configuration parameters.

use crate::stack::{words_for, WORD_BYTES};

/// Configuration for a [`StackArena`](crate::StackArena).
///
/// The region is reserved once at construction and never grows, so the
/// capacity chosen here is the hard ceiling for everything allocated from it,
/// length words included.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ArenaConfig {
    /// Requested region size in bytes.
    ///
    /// Rounded up to whole words. Default: 1 MiB.
    pub capacity_bytes: usize,
}

impl ArenaConfig {
    /// Default region size: 1 MiB.
    pub const DEFAULT_CAPACITY_BYTES: usize = 1 << 20;

    /// Create a config for a region of at least `capacity_bytes` bytes.
    pub fn new(capacity_bytes: usize) -> Self {
        Self { capacity_bytes }
    }

    /// Create a config for a region of exactly `words` words.
    pub fn with_words(words: usize) -> Self {
        Self {
            capacity_bytes: words.saturating_mul(WORD_BYTES),
        }
    }

    /// Region size in words after rounding up.
    pub fn capacity_words(&self) -> usize {
        words_for(self.capacity_bytes)
    }

    /// Region size in bytes after rounding up.
    pub fn region_bytes(&self) -> usize {
        self.capacity_words() * WORD_BYTES
    }
}

impl Default for ArenaConfig {
    fn default() -> Self {
        Self::new(Self::DEFAULT_CAPACITY_BYTES)
    }
}

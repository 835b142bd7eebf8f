//! Arena-specific error types.

use std::error::Error;
use std::fmt;

/// Errors that can occur during arena operations.
///
/// All of these are contract violations. The panicking entry points
/// ([`StackArena::allocate`](crate::StackArena::allocate),
/// [`StackArena::free`](crate::StackArena::free)) abort with the error's
/// message; the `try_*` entry points return it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ArenaError {
    /// Not enough words left for the span plus its length word.
    CapacityExceeded {
        /// Words requested for the span, excluding the length word.
        requested_words: usize,
        /// Words available for a span at the time of the request.
        available_words: usize,
    },
    /// `free` was called with no allocation outstanding.
    NothingToFree,
    /// An allocation was released while a newer one was still outstanding.
    OutOfOrderFree {
        /// Word offset of the allocation being released.
        offset: usize,
        /// Words it occupies, excluding the length word.
        words: usize,
        /// Current cursor of the arena.
        cursor: usize,
    },
    /// The requested element type needs stricter alignment than a word.
    UnsupportedAlignment {
        /// Alignment of the requested type.
        align: usize,
        /// Largest alignment the region guarantees.
        max_align: usize,
    },
    /// `count * size_of::<T>()` does not fit in `usize`.
    SizeOverflow {
        /// Number of elements requested.
        count: usize,
        /// Size of one element in bytes.
        elem_size: usize,
    },
}

impl fmt::Display for ArenaError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::CapacityExceeded {
                requested_words,
                available_words,
            } => {
                write!(
                    f,
                    "arena capacity exceeded: requested {requested_words} words, {available_words} available"
                )
            }
            Self::NothingToFree => write!(f, "arena free with no outstanding allocation"),
            Self::OutOfOrderFree {
                offset,
                words,
                cursor,
            } => {
                write!(
                    f,
                    "out-of-order free: allocation at word {offset} ({words} words) is not on top of cursor {cursor}"
                )
            }
            Self::UnsupportedAlignment { align, max_align } => {
                write!(
                    f,
                    "alignment {align} exceeds the arena word alignment {max_align}"
                )
            }
            Self::SizeOverflow { count, elem_size } => {
                write!(
                    f,
                    "allocation size overflow: {count} elements of {elem_size} bytes"
                )
            }
        }
    }
}

impl Error for ArenaError {}

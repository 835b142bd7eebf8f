//! Single-region LIFO stack allocator for strata containers.
//!
//! A [`StackArena`] reserves one block of machine words up front and hands
//! out sub-ranges from a bump cursor. Each allocation is followed by one
//! length word, which is what lets [`StackArena::free`] rewind the newest
//! allocation without any side table. Frees are strictly last-in-first-out;
//! there is no free list and therefore no fragmentation.
//!
//! # Architecture
//!
//! ```text
//! StackArena
//! ├── Region (raw.rs: word storage + cursor, the only unsafe code)
//! ├── Allocation (explicit {offset, words} record, one per span)
//! └── Span<T> (typed, non-owning view handed to containers)
//! ```
//!
//! # Ownership
//!
//! Spans and allocation records borrow the arena. Releasing one record goes
//! through [`Allocation::release`], which refuses anything but the newest
//! allocation. The record-less rewinds, [`StackArena::free`] and
//! [`StackArena::reset`], take `&mut self` and so cannot run while any span
//! is alive.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(unsafe_code)]

pub mod config;
pub mod error;
pub mod handle;
mod raw;
pub mod span;
pub mod stack;

// Public re-exports for the primary API surface.
pub use config::ArenaConfig;
pub use error::ArenaError;
pub use handle::Allocation;
pub use span::Span;
pub use stack::{words_for, StackArena, WORD_ALIGN, WORD_BYTES};

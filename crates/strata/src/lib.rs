//! Strata: a stack-discipline arena allocator with fixed-capacity containers.
//!
//! This is the facade crate that re-exports the public API of the strata
//! sub-crates. For most users, adding `strata` as a single dependency is
//! sufficient.
//!
//! # Quick start
//!
//! ```rust
//! use strata::prelude::*;
//!
//! fn by_value(v: &u32) -> usize {
//!     *v as usize
//! }
//!
//! let arena = StackArena::new(4096);
//!
//! let mut seen = OpenMap::allocate(&arena, 16, by_value);
//! let mut queue = Heap::allocate(&arena, 8, by_value);
//! for v in [6, 5, 6, 9] {
//!     if seen.insert(v) {
//!         queue.insert(v);
//!     }
//! }
//! assert_eq!(queue.pop(), 5);
//! assert_eq!(queue.count(), 2);
//!
//! // Newest first.
//! queue.free();
//! seen.free();
//! assert_eq!(arena.used_words(), 0);
//! ```
//!
//! # Modules
//!
//! | Module | Sub-crate | Contents |
//! |--------|-----------|----------|
//! | [`arena`] | `strata-arena` | `StackArena`, allocation records, typed spans |
//! | [`types`] | `strata-core` | Slots, capability traits, `CollectionError` |
//! | [`collections`] | `strata-collections` | Array, vector, stack, open map, heap |

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

/// The LIFO arena (`strata-arena`).
///
/// [`arena::StackArena`] hands out [`arena::Span`]s that must be freed
/// newest first.
pub use strata_arena as arena;

/// Slots, capability traits and errors (`strata-core`).
pub use strata_core as types;

/// Fixed-capacity containers (`strata-collections`).
///
/// Every container borrows its storage from a [`arena::StackArena`].
pub use strata_collections as collections;

/// Common imports for typical strata usage.
///
/// ```rust
/// use strata::prelude::*;
/// ```
pub mod prelude {
    // Arena
    pub use strata_arena::{ArenaConfig, ArenaError, StackArena};

    // Traits and errors
    pub use strata_core::{BoundedCount, CollectionError, HashFn, IndexedStorage};

    // Containers
    pub use strata_collections::{Array, Heap, OpenMap, Stack, Vector};
}

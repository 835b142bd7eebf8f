//! Fixed-capacity containers over a [`StackArena`](strata_arena::StackArena).
//!
//! None of these containers own their memory. Each is built on an
//! [`Array`], which borrows a span from the arena and hands it back with
//! `free`. The arena's LIFO rule therefore applies to containers too: free
//! them in the reverse order they were allocated.
//!
//! # Containers
//!
//! ```text
//! Array    fixed length, positional access
//! Vector   Array + count, swap-with-last removal
//! Stack    Array + count, LIFO push/pop/peek
//! OpenMap  open-addressing set with ordered probe groups
//! Heap     1-indexed binary min-heap keyed by a priority function
//! ```
//!
//! Capacities never grow. Every fallible operation has a panicking form and
//! a `try_` form returning [`CollectionError`](strata_core::CollectionError)
//! or [`ArenaError`](strata_arena::ArenaError).

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod array;
pub mod hash_map;
pub mod heap;
pub mod stack;
pub mod vector;

pub use array::Array;
pub use hash_map::OpenMap;
pub use heap::Heap;
pub use stack::Stack;
pub use vector::Vector;

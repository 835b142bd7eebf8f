//! Core types and traits for the strata container family.
//!
//! This is the leaf crate with zero internal dependencies. It defines the
//! slot shapes stored by the keyed containers, the capability traits every
//! container implements, and the shared error type.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod error;
pub mod slot;
pub mod traits;

pub use error::CollectionError;
pub use slot::{KeyPair, Slot};
pub use traits::{BoundedCount, HashFn, IndexedStorage};

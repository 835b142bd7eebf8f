//! Error types for container operations.
//!
//! Every condition here is a contract violation. The panicking container
//! methods format these errors into their abort message; the `try_*`
//! variants hand them back to the caller instead.

use std::error::Error;
use std::fmt;

/// Errors raised by bounded containers.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum CollectionError {
    /// The container has no room for another value.
    CapacityExceeded {
        /// Number of values currently stored.
        count: usize,
        /// Maximum number of values the container accepts.
        capacity: usize,
    },
    /// The value to remove is not stored in the container.
    NotFound,
    /// A read or removal was attempted on an empty container.
    Empty,
    /// A probe table is completely full, so lookups cannot terminate on a gap.
    NoFreeSlot {
        /// Number of slots in the table.
        capacity: usize,
    },
    /// An index fell outside the container's bounds.
    IndexOutOfBounds {
        /// The offending index.
        index: usize,
        /// Number of addressable elements.
        len: usize,
    },
}

impl fmt::Display for CollectionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::CapacityExceeded { count, capacity } => {
                write!(
                    f,
                    "container capacity exceeded: {count} values stored, capacity {capacity}"
                )
            }
            Self::NotFound => write!(f, "value not found in container"),
            Self::Empty => write!(f, "container is empty"),
            Self::NoFreeSlot { capacity } => {
                write!(f, "probe table of {capacity} slots has no free slot")
            }
            Self::IndexOutOfBounds { index, len } => {
                write!(f, "index {index} out of bounds for length {len}")
            }
        }
    }
}

impl Error for CollectionError {}

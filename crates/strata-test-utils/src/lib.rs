//! Test fixtures for strata development.
//!
//! Small `Copy` value types and hand-picked hash functions that force the
//! keyed containers into their interesting paths: long collision groups,
//! neighbouring groups, and runs that wrap past the end of the table.

#![forbid(unsafe_code)]
#![allow(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod fixtures;

pub use fixtures::{
    clustering_hashers, constant_hash, job_priority, low_bits_hash, probe_hash, wrapping_hash,
    Job, Probe,
};

//! Reusable value types and hash functions.
//!
//! - [`Probe`]: a plain record hashed by its field, the workhorse value.
//! - [`Job`]: a record whose heap priority differs from its identity.
//! - [`constant_hash`], [`low_bits_hash`], [`wrapping_hash`]: adversarial
//!   hashers for the open-addressing map.

use strata_core::HashFn;

/// A small `Copy` record. Hashes to its own field.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Probe {
    pub i: i32,
}

impl Probe {
    pub fn new(i: i32) -> Self {
        Self { i }
    }
}

impl Default for Probe {
    fn default() -> Self {
        Self { i: -1 }
    }
}

/// Hash a [`Probe`] by its field. Negative values wrap, which is fine for
/// the modulo the map applies.
pub fn probe_hash(p: &Probe) -> usize {
    p.i as usize
}

/// Sends every value to the same home, so the whole table is one group.
pub fn constant_hash<T>(_: &T) -> usize {
    0
}

/// Keeps only the low three bits: values 8 apart collide.
pub fn low_bits_hash(v: &usize) -> usize {
    v & 0b111
}

/// Hashes close to `usize::MAX`, so homes land near the end of any table
/// whose size divides evenly and groups wrap to the front.
pub fn wrapping_hash(v: &usize) -> usize {
    usize::MAX - (v % 4)
}

/// Every adversarial hasher over `usize`, with a label for test output.
pub fn clustering_hashers() -> Vec<(&'static str, HashFn<usize>)> {
    vec![
        ("constant", constant_hash::<usize> as HashFn<usize>),
        ("low_bits", low_bits_hash as HashFn<usize>),
        ("wrapping", wrapping_hash as HashFn<usize>),
    ]
}

/// A queued job: ordered by `priority`, identified by `id`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Job {
    pub priority: usize,
    pub id: u32,
}

impl Job {
    pub fn new(priority: usize, id: u32) -> Self {
        Self { priority, id }
    }
}

/// Priority function for [`Job`].
pub fn job_priority(job: &Job) -> usize {
    job.priority
}

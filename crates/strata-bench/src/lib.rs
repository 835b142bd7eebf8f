//! Workload builders shared by the strata benchmarks.
//!
//! - [`spread_values`]: distinct keys with a fixed multiplicative spread
//! - [`nested_sizes`]: byte sizes for nested allocate/free rounds
//! - [`load_factor_count`]: how many values fill a table to a given load

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

use strata_core::HashFn;

/// Generate `n` distinct values, deterministic for a given `seed`.
///
/// Multiplying by an odd constant is a bijection on `usize`, so the values
/// never repeat.
pub fn spread_values(n: usize, seed: u64) -> Vec<usize> {
    let offset = seed.wrapping_mul(6364136223846793005) as usize;
    (0..n)
        .map(|i| i.wrapping_mul(0x9E37_79B9).wrapping_add(offset))
        .collect()
}

/// Byte sizes for `rounds` nested rounds of `depth` allocations each.
pub fn nested_sizes(rounds: usize, depth: usize) -> Vec<Vec<usize>> {
    (0..rounds)
        .map(|r| (0..depth).map(|d| (r * 37 + d * 11) % 256 + 1).collect())
        .collect()
}

/// Number of values that fills `slot_count` slots to `load` (0.0..1.0),
/// never exceeding the table's usable capacity.
pub fn load_factor_count(slot_count: usize, load: f64) -> usize {
    let wanted = (slot_count as f64 * load) as usize;
    wanted.min(slot_count.saturating_sub(1))
}

/// Identity hash for `usize` keys.
pub fn identity_hash(v: &usize) -> usize {
    *v
}

/// [`identity_hash`] as a [`HashFn`].
pub const IDENTITY: HashFn<usize> = identity_hash;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn spread_values_are_distinct() {
        let values = spread_values(1000, 42);
        let unique: std::collections::HashSet<usize> = values.iter().copied().collect();
        assert_eq!(unique.len(), 1000);
    }

    #[test]
    fn spread_values_deterministic() {
        assert_eq!(spread_values(16, 7), spread_values(16, 7));
    }

    #[test]
    fn load_factor_leaves_a_gap() {
        assert_eq!(load_factor_count(10, 1.0), 9);
        assert_eq!(load_factor_count(100, 0.5), 50);
    }

    #[test]
    fn nested_sizes_shape() {
        let sizes = nested_sizes(4, 3);
        assert_eq!(sizes.len(), 4);
        assert!(sizes.iter().all(|round| round.len() == 3));
        assert!(sizes.iter().flatten().all(|&s| (1..=256).contains(&s)));
    }
}

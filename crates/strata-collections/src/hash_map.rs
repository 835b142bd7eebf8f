//! Open-addressing hash set with ordered probe groups.
//!
//! Values live in a fixed table of [`Slot`]s. Each occupied slot records its
//! value's *home*, the index `hash(value) % slots` it was first assigned to.
//! All values sharing a home form a *group*, and groups are kept contiguous
//! and ordered by home along the probe sequence:
//!
//! ```text
//! index:  0    1    2    3    4    5    6    7
//! home:  [7]  [ ]  [2]  [2]  [3]  [ ]  [ ]  [7]
//!         └ wrapped from 7     └ group 3 sits after group 2
//! ```
//!
//! Ordering is cyclic, so it is compared through displacement (distance
//! from home to the slot actually occupied) rather than raw home values.
//! That is what lets a lookup stop at the first empty slot or the first slot
//! belonging to a later group, and what keeps a run that wraps past the end
//! of the table correctly ordered.
//!
//! The table always keeps at least one empty slot, so every probe sequence
//! terminates on a gap.

use strata_arena::{ArenaError, StackArena};
use strata_core::{BoundedCount, CollectionError, HashFn, Slot};
use tracing::{debug, trace};

use crate::array::Array;

/// Fixed-capacity open-addressing set over arena memory.
///
/// Duplicate inserts are no-ops. Holds at most `slot_count - 1` values.
#[derive(Debug)]
pub struct OpenMap<'a, T> {
    slots: Array<'a, Slot<T>>,
    count: usize,
    hasher: HashFn<T>,
}

impl<'a, T: Copy + PartialEq> OpenMap<'a, T> {
    /// Allocate an empty table of `slot_count` slots hashed by `hasher`.
    ///
    /// # Panics
    ///
    /// Panics if `slot_count` is zero or the arena cannot hold the table.
    pub fn allocate(arena: &'a StackArena, slot_count: usize, hasher: HashFn<T>) -> Self {
        Self::try_allocate(arena, slot_count, hasher).unwrap_or_else(|err| panic!("{err}"))
    }

    /// Allocate an empty table, or report why the arena refused.
    ///
    /// # Panics
    ///
    /// Panics if `slot_count` is zero.
    pub fn try_allocate(
        arena: &'a StackArena,
        slot_count: usize,
        hasher: HashFn<T>,
    ) -> Result<Self, ArenaError> {
        assert!(slot_count > 0, "open map needs at least one slot");
        let slots = Array::try_allocate(arena, slot_count, Slot::Empty)?;
        debug!(slot_count, "open map allocated");
        Ok(Self {
            slots,
            count: 0,
            hasher,
        })
    }

    /// Whether `value` is stored.
    pub fn contains(&self, value: &T) -> bool {
        self.find(value).is_some()
    }

    /// Slot index holding `value`, if stored.
    ///
    /// # Panics
    ///
    /// Panics if the table has no empty slot left.
    pub fn find(&self, value: &T) -> Option<usize> {
        self.assert_gap();
        let slot_count = self.slot_count();
        let home = self.home(value);
        for probe in 0..slot_count {
            let index = (home + probe) % slot_count;
            let pair = match &self.slots[index] {
                Slot::Empty => return None,
                Slot::Occupied(pair) => pair,
            };
            if self.displacement(index, pair.key) < probe {
                // This slot's group starts after `home`, so ours has ended.
                return None;
            }
            if pair.key == home && pair.value == *value {
                return Some(index);
            }
        }
        None
    }

    /// Store `value`. Returns `false` if it was already present.
    ///
    /// # Panics
    ///
    /// Panics if storing it would leave no empty slot.
    pub fn insert(&mut self, value: T) -> bool {
        self.try_insert(value).unwrap_or_else(|err| panic!("{err}"))
    }

    /// Store `value`, or report that the table is full.
    ///
    /// Returns `Ok(false)` if the value was already present.
    pub fn try_insert(&mut self, value: T) -> Result<bool, CollectionError> {
        if self.contains(&value) {
            return Ok(false);
        }
        if self.count >= self.max_count() {
            return Err(CollectionError::CapacityExceeded {
                count: self.count,
                capacity: self.max_count(),
            });
        }

        let slot_count = self.slot_count();
        let home = self.home(&value);
        let at = (0..slot_count)
            .map(|probe| (probe, (home + probe) % slot_count))
            .find(|&(probe, index)| match &self.slots[index] {
                Slot::Empty => true,
                Slot::Occupied(pair) => self.displacement(index, pair.key) < probe,
            })
            .map(|(_, index)| index)
            .expect("table keeps at least one empty slot");

        // Open a gap at `at` by walking the next empty slot back to it.
        let gap = self
            .next_empty(at)
            .expect("table keeps at least one empty slot");
        let mut hole = gap;
        while hole != at {
            let prev = (hole + slot_count - 1) % slot_count;
            self.slots.swap(hole, prev);
            hole = prev;
        }
        self.slots[at] = Slot::occupied(home, value);
        self.count += 1;
        trace!(
            home,
            index = at,
            shifted = (gap + slot_count - at) % slot_count,
            "open map insert"
        );
        Ok(true)
    }

    /// Remove `value`.
    ///
    /// # Panics
    ///
    /// Panics if `value` is not stored.
    pub fn erase(&mut self, value: &T) {
        if let Err(err) = self.try_erase(value) {
            panic!("{err}");
        }
    }

    /// Remove `value`. Returns `false` if it was not stored.
    pub fn remove(&mut self, value: &T) -> bool {
        self.try_erase(value).is_ok()
    }

    /// Remove `value`, or report that it is not stored.
    pub fn try_erase(&mut self, value: &T) -> Result<(), CollectionError> {
        let index = self.find(value).ok_or(CollectionError::NotFound)?;
        let slot_count = self.slot_count();
        let home = self.home(value);

        // The group's last member fills the hole so the group stays contiguous.
        let mut last = index;
        loop {
            let next = (last + 1) % slot_count;
            if next == index || self.slots[next].key() != Some(home) {
                break;
            }
            last = next;
        }
        self.slots[index] = Slot::Empty;
        self.slots.swap(index, last);

        // Later groups displaced past the hole move back one place.
        let mut hole = last;
        for _ in 0..slot_count {
            let next = (hole + 1) % slot_count;
            let displaced = match &self.slots[next] {
                Slot::Empty => false,
                Slot::Occupied(pair) => self.displacement(next, pair.key) > 0,
            };
            if !displaced {
                break;
            }
            self.slots.swap(hole, next);
            hole = next;
        }

        self.count -= 1;
        trace!(home, index, compacted_to = hole, "open map erase");
        Ok(())
    }
}

impl<'a, T> OpenMap<'a, T> {
    /// Number of slots in the table.
    pub fn slot_count(&self) -> usize {
        self.slots.len()
    }

    /// Most values the table will hold: one slot always stays empty.
    pub fn max_count(&self) -> usize {
        self.slot_count() - 1
    }

    /// Remove every value.
    pub fn clear(&mut self) {
        self.slots.as_mut_slice().fill_with(|| Slot::Empty);
        self.count = 0;
    }

    /// Iterate over stored values in table order.
    pub fn iter(&self) -> impl Iterator<Item = &T> + '_ {
        self.slots.iter().filter_map(Slot::value)
    }

    /// The raw table, for inspection.
    pub fn slots(&self) -> &[Slot<T>] {
        self.slots.as_slice()
    }

    /// Hand the table back to the arena.
    ///
    /// # Panics
    ///
    /// Panics if something allocated after this map is still outstanding.
    pub fn free(self) {
        self.slots.free();
    }

    fn home(&self, value: &T) -> usize {
        (self.hasher)(value) % self.slot_count()
    }

    /// Distance from `home` forward to `index`.
    fn displacement(&self, index: usize, home: usize) -> usize {
        let slot_count = self.slot_count();
        (index + slot_count - home) % slot_count
    }

    fn next_empty(&self, from: usize) -> Option<usize> {
        let slot_count = self.slot_count();
        (0..slot_count)
            .map(|step| (from + step) % slot_count)
            .find(|&index| self.slots[index].is_empty())
    }

    fn assert_gap(&self) {
        assert!(
            self.count < self.slot_count(),
            "{}",
            CollectionError::NoFreeSlot {
                capacity: self.slot_count(),
            }
        );
    }
}

impl<T> BoundedCount for OpenMap<'_, T> {
    fn count(&self) -> usize {
        self.count
    }

    /// Counts values, so this is one less than [`OpenMap::slot_count`].
    fn capacity(&self) -> usize {
        self.max_count()
    }
}

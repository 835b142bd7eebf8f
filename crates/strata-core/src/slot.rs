//! Slot shapes stored by the keyed containers.
//!
//! A [`KeyPair`] couples a value with an integer key: the home slot index for
//! the open-addressing map, the priority for the heap. [`Slot`] wraps it in
//! an explicit empty/occupied state so an empty slot can never be mistaken
//! for a value whose key happens to be zero or `usize::MAX`.

/// A value together with the integer key it is filed under.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct KeyPair<T> {
    /// The stored value.
    pub value: T,
    /// Home slot (map) or priority (heap).
    pub key: usize,
}

impl<T> KeyPair<T> {
    /// Pair `value` with `key`.
    pub fn new(key: usize, value: T) -> Self {
        Self { value, key }
    }
}

/// A container slot: either empty or holding a [`KeyPair`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Slot<T> {
    /// No value stored.
    #[default]
    Empty,
    /// A stored value and its key.
    Occupied(KeyPair<T>),
}

impl<T> Slot<T> {
    /// Build an occupied slot.
    pub fn occupied(key: usize, value: T) -> Self {
        Self::Occupied(KeyPair::new(key, value))
    }

    /// Whether the slot holds nothing.
    pub fn is_empty(&self) -> bool {
        matches!(self, Self::Empty)
    }

    /// The key of an occupied slot.
    pub fn key(&self) -> Option<usize> {
        match self {
            Self::Empty => None,
            Self::Occupied(pair) => Some(pair.key),
        }
    }

    /// The value of an occupied slot.
    pub fn value(&self) -> Option<&T> {
        match self {
            Self::Empty => None,
            Self::Occupied(pair) => Some(&pair.value),
        }
    }

    /// The pair of an occupied slot.
    pub fn pair(&self) -> Option<&KeyPair<T>> {
        match self {
            Self::Empty => None,
            Self::Occupied(pair) => Some(pair),
        }
    }

    /// Replace the slot with [`Slot::Empty`], returning the previous contents.
    pub fn take(&mut self) -> Self {
        std::mem::take(self)
    }
}

use super::*;
use std::{fmt::Debug, hash::Hash};

/// A hash set that cannot change after it has been built.
///
/// The backing table is sized exactly for its contents, so it never carries
/// the slack a growing set keeps around for future inserts.
#[derive(Clone, PartialEq, Eq)]
pub struct FrozenSet<T: SetItem> {
    pub(crate) store: FxHashSet<T>,
}

impl<T: SetItem> Default for FrozenSet<T> {
    fn default() -> Self {
        Self {
            store: Default::default(),
        }
    }
}

impl<T: SetItem + Debug> Debug for FrozenSet<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_set().entries(self.store.iter()).finish()
    }
}

impl<T: SetItem> FrozenSet<T> {
    /// Returns the number of elements in the set.
    pub fn len(&self) -> usize {
        self.store.len()
    }

    /// Returns `true` if the set contains no elements.
    pub fn is_empty(&self) -> bool {
        self.store.is_empty()
    }

    /// Returns an iterator over the elements in the set.
    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.store.iter()
    }

    /// Returns `true` if the set contains the specified value.
    pub fn contains(&self, value: &T) -> bool {
        self.store.contains(value)
    }
}

impl<T: SetItem> FromIterator<T> for FrozenSet<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut store: FxHashSet<T> = iter.into_iter().collect();
        // Duplicates in the source leave spare room behind.
        store.shrink_to_fit();
        Self { store }
    }
}

impl<T: SetItem> From<&[T]> for FrozenSet<T> {
    fn from(values: &[T]) -> Self {
        let mut store =
            FxHashSet::with_capacity_and_hasher(values.len(), fxhash::FxBuildHasher::default());
        store.extend(values.iter().cloned());
        store.shrink_to_fit();
        Self { store }
    }
}

impl<T: SetItem> From<FxHashSet<T>> for FrozenSet<T> {
    fn from(mut store: FxHashSet<T>) -> Self {
        store.shrink_to_fit();
        Self { store }
    }
}

impl<T: SetItem> IntoIterator for FrozenSet<T> {
    type Item = T;
    type IntoIter = std::collections::hash_set::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.store.into_iter()
    }
}

impl<T: SetItem> Hash for FrozenSet<T> {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        // Order independent so that equal sets hash equally.
        let mut acc = 0u64;
        for item in self.store.iter() {
            acc = acc.wrapping_add(fxhash::hash64(item));
        }
        state.write_usize(self.store.len());
        state.write_u64(acc);
    }
}

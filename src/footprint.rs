use super::*;
use std::{collections::HashSet, hash::BuildHasher, mem::size_of};

/// Control bytes are scanned in groups of this many (SSE2).
const GROUP_WIDTH: usize = 16;

/// Bytes consumed by a container's own bookkeeping and slot storage.
///
/// Memory owned by the elements themselves is never counted, so a
/// `Vec<String>` reports the slots holding the `String` headers but not the
/// string data they point to.
pub trait ShallowSize {
    fn shallow_size(&self) -> usize;
}

impl<T> ShallowSize for Vec<T> {
    fn shallow_size(&self) -> usize {
        size_of::<Self>() + self.capacity() * size_of::<T>()
    }
}

impl<T, S: BuildHasher> ShallowSize for HashSet<T, S> {
    fn shallow_size(&self) -> usize {
        size_of::<Self>() + table_bytes::<T>(buckets_for_capacity(self.capacity()))
    }
}

impl<T: SetItem> ShallowSize for FrozenSet<T> {
    fn shallow_size(&self) -> usize {
        self.store.shallow_size()
    }
}

/// Bucket count of a SwissTable that reports the given capacity.
///
/// Tables under 8 buckets hold `buckets - 1` items, larger ones are kept at
/// most 7/8 full.
pub(crate) fn buckets_for_capacity(capacity: usize) -> usize {
    match capacity {
        0 => 0,
        1..=3 => 4,
        4..=7 => 8,
        _ => (capacity / 7 * 8).next_power_of_two(),
    }
}

/// Size of the single allocation backing a table with `buckets` slots.
pub(crate) fn table_bytes<T>(buckets: usize) -> usize {
    if buckets == 0 {
        return 0;
    }
    let align = std::mem::align_of::<T>().max(GROUP_WIDTH);
    let data = (buckets * size_of::<T>() + align - 1) & !(align - 1);
    data + buckets + GROUP_WIDTH
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vec_counts_capacity_not_len() {
        let mut data: Vec<u64> = Vec::with_capacity(32);
        data.push(1);
        assert_eq!(data.shallow_size(), size_of::<Vec<u64>>() + 32 * 8);
    }

    #[test]
    fn test_vec_excludes_element_contents() {
        let data = vec![String::from("a fairly long string that lives on the heap")];
        assert_eq!(
            data.shallow_size(),
            size_of::<Vec<String>>() + data.capacity() * size_of::<String>()
        );
    }

    #[test]
    fn test_empty_vec() {
        let data: Vec<u64> = Vec::new();
        assert_eq!(data.shallow_size(), size_of::<Vec<u64>>());
    }

    #[test]
    fn test_buckets_for_capacity() {
        assert_eq!(buckets_for_capacity(0), 0);
        assert_eq!(buckets_for_capacity(3), 4);
        assert_eq!(buckets_for_capacity(7), 8);
        assert_eq!(buckets_for_capacity(14), 16);
        assert_eq!(buckets_for_capacity(28), 32);
        assert_eq!(buckets_for_capacity(896), 1024);
    }

    #[test]
    fn test_buckets_hold_reported_capacity() {
        for n in [1usize, 5, 10, 100, 1000, 10_000] {
            let set: FxHashSet<u64> = (0..n as u64).collect();
            let buckets = buckets_for_capacity(set.capacity());
            assert!(buckets.is_power_of_two());
            assert!(buckets > set.capacity());
        }
    }

    #[test]
    fn test_table_bytes() {
        assert_eq!(table_bytes::<u64>(0), 0);
        assert_eq!(table_bytes::<u64>(16), 16 * 8 + 16 + GROUP_WIDTH);
        // Data section is padded up to the group alignment.
        assert_eq!(table_bytes::<u8>(4), 16 + 4 + GROUP_WIDTH);
    }

    #[test]
    fn test_empty_set_has_no_table() {
        let set: FxHashSet<u64> = FxHashSet::default();
        assert_eq!(set.shallow_size(), size_of::<FxHashSet<u64>>());
    }

    #[test]
    fn test_set_larger_than_vec() {
        for n in [10u64, 100, 1000, 100_000] {
            let data: Vec<u64> = (0..n).collect();
            let set: FxHashSet<u64> = data.iter().copied().collect();
            let frozen = FrozenSet::from(data.as_slice());

            assert!(set.shallow_size() > data.shallow_size());
            assert!(frozen.shallow_size() > data.shallow_size());
        }
    }

    #[test]
    fn test_frozen_not_larger_than_mutable() {
        let data: Vec<u64> = (0..10_000).collect();
        let mut set: FxHashSet<u64> = FxHashSet::default();
        for value in data.iter() {
            set.insert(*value);
        }
        let frozen = FrozenSet::from(data.as_slice());

        assert!(frozen.shallow_size() <= set.shallow_size());
    }
}

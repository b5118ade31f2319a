//! Collection aliases used by the pipeline.

use rustc_hash::{FxBuildHasher, FxHashMap, FxHasher};

/// Optimized `HashMap` type for internal lookups.
/// Uses `FastHasher` (`rustc_hash::FxHasher`) for faster hashing in non-cryptographic contexts.
///
/// # Security Warning
///
/// ⚠️ **Not DoS-resistant**: keys hashed here come from decoded coordinates, which
/// are bounded by the payload size; do not reuse this alias for unbounded
/// attacker-controlled key sets.
///
/// # Examples
///
/// ```rust
/// use pointset_triangulation::core::collections::FastHashMap;
///
/// let mut map: FastHashMap<u64, usize> = FastHashMap::default();
/// map.insert(123, 456);
/// ```
pub type FastHashMap<K, V> = FxHashMap<K, V>;

/// Fast non-cryptographic hasher alias for internal collections.
pub type FastHasher = FxHasher;

/// Build hasher that instantiates [`FastHasher`].
pub type FastBuildHasher = FxBuildHasher;

/// Creates a `FastHashMap` with pre-allocated capacity using the optimal hasher.
///
/// # Examples
///
/// ```rust
/// use pointset_triangulation::core::collections::fast_hash_map_with_capacity;
///
/// let map = fast_hash_map_with_capacity::<u64, usize>(1000);
/// assert!(map.capacity() >= 1000);
/// ```
#[inline]
#[must_use]
pub fn fast_hash_map_with_capacity<K, V>(capacity: usize) -> FastHashMap<K, V> {
    FastHashMap::with_capacity_and_hasher(capacity, FastBuildHasher::default())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::hash::{BuildHasher, Hasher};

    #[test]
    fn test_fast_hash_map_with_capacity() {
        let mut map = fast_hash_map_with_capacity::<u32, u32>(64);
        assert!(map.capacity() >= 64);
        map.insert(1, 2);
        assert_eq!(map.get(&1), Some(&2));
    }

    #[test]
    fn test_fast_hasher_is_deterministic() {
        let mut a: FastHasher = FastBuildHasher::default().build_hasher();
        let mut b: FastHasher = FastBuildHasher::default().build_hasher();
        a.write_u32(42);
        b.write_u32(42);
        assert_eq!(a.finish(), b.finish());
    }
}

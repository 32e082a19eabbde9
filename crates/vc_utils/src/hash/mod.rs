//! Provide hash containers, re-exports *hashbrown* and *foldhash*.

// -----------------------------------------------------------------------------
// Modules

mod hasher;

// -----------------------------------------------------------------------------
// Exports

pub use hasher::{FixedHashState, FixedHasher};
pub use hasher::{NoOpHashState, NoOpHasher};

/// A [`hashbrown::HashMap`] using [`FixedHashState`].
///
/// Iteration order only depends on the inserted keys, so it is stable
/// between runs of the same program.
pub type HashMap<K, V> = hashbrown::HashMap<K, V, FixedHashState>;

/// A [`hashbrown::HashSet`] using [`FixedHashState`].
pub type HashSet<T> = hashbrown::HashSet<T, FixedHashState>;

// -----------------------------------------------------------------------------
// Re-export crates

pub use foldhash;
pub use hashbrown;

#[cfg(test)]
mod tests {
    use super::{HashMap, HashSet};

    #[test]
    fn fixed_state_is_deterministic() {
        let build = || {
            let mut map = HashMap::default();
            for (idx, name) in ["red", "green", "blue", "cyan", "navy"].iter().enumerate() {
                map.insert(*name, idx);
            }
            map.into_iter().collect::<alloc::vec::Vec<_>>()
        };
        assert_eq!(build(), build());
    }

    #[test]
    fn set_alias() {
        let mut set = HashSet::default();
        assert!(set.insert(3_u8));
        assert!(!set.insert(3_u8));
        assert_eq!(set.len(), 1);
    }
}

use std::hash::Hash;

use indexmap::{map::Entry, IndexMap};

/// copy-on-first-reference for id-keyed scenario collections. the first
/// reference to an id creates the entry, later references reuse it unchanged.
pub trait Upsert<K, V> {
    /// returns the entry stored at `key`, creating it with `create` if absent.
    /// `create` is only called when the key is missing, so it may perform
    /// fallible lookups into a source scenario.
    fn upsert_with<E, F>(&mut self, key: &K, create: F) -> Result<&mut V, E>
    where
        F: FnOnce() -> Result<V, E>;
}

impl<K, V> Upsert<K, V> for IndexMap<K, V>
where
    K: Hash + Eq + Clone,
{
    fn upsert_with<E, F>(&mut self, key: &K, create: F) -> Result<&mut V, E>
    where
        F: FnOnce() -> Result<V, E>,
    {
        match self.entry(key.clone()) {
            Entry::Occupied(entry) => Ok(entry.into_mut()),
            Entry::Vacant(entry) => {
                let value = create()?;
                Ok(entry.insert(value))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_upsert_creates_once() {
        let mut map: IndexMap<String, usize> = IndexMap::new();
        let mut calls = 0;
        for _ in 0..3 {
            let result: Result<&mut usize, String> = map.upsert_with(&"a".to_string(), || {
                calls += 1;
                Ok(7)
            });
            assert_eq!(*result.expect("test invariant failed: upsert"), 7);
        }
        assert_eq!(calls, 1);
        assert_eq!(map.len(), 1);
    }

    #[test]
    fn test_upsert_failure_leaves_map_untouched() {
        let mut map: IndexMap<String, usize> = IndexMap::new();
        let result: Result<&mut usize, String> =
            map.upsert_with(&"a".to_string(), || Err("missing".to_string()));
        assert!(result.is_err());
        assert!(map.is_empty());
    }
}

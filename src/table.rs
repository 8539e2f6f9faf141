//! HashTable: the public container over the hash and chain layers.

use crate::chain::Chain;
use crate::error::TableError;
use crate::hash;

/// A string-keyed hash table with separate chaining.
///
/// The capacity (bucket count) is fixed at creation and doubles only
/// through an explicit [`resize`](HashTable::resize) call; it is also
/// the modulus for bucket selection, so every entry lives in bucket
/// `hash::bucket_index(key, capacity)`.
pub struct HashTable {
    buckets: Vec<Chain>,
    len: usize,
}

impl HashTable {
    /// Creates a table with `capacity` empty buckets.
    ///
    /// Rejects `capacity == 0`: the capacity doubles as the hash
    /// modulus.
    pub fn new(capacity: usize) -> Result<Self, TableError> {
        if capacity == 0 {
            return Err(TableError::InvalidCapacity);
        }
        Ok(HashTable {
            buckets: (0..capacity).map(|_| Chain::new()).collect(),
            len: 0,
        })
    }

    /// Number of buckets; also the current hash modulus.
    pub fn capacity(&self) -> usize {
        self.buckets.len()
    }

    /// Number of stored entries.
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Entry count over capacity. Not acted on internally; callers can
    /// watch it to decide when to invoke [`resize`](HashTable::resize).
    pub fn load_factor(&self) -> f64 {
        self.len as f64 / self.capacity() as f64
    }

    fn bucket(&self, key: &str) -> &Chain {
        &self.buckets[hash::bucket_index(key, self.buckets.len())]
    }

    fn bucket_mut(&mut self, key: &str) -> &mut Chain {
        let idx = hash::bucket_index(key, self.buckets.len());
        &mut self.buckets[idx]
    }

    /// Inserts `key`/`value`.
    ///
    /// A new key appends at the tail of its bucket's chain; an existing
    /// key has its value overwritten in place, leaving the chain's
    /// shape and every other entry untouched.
    pub fn insert(&mut self, key: String, value: String) {
        if self.bucket_mut(&key).insert(key, value) {
            self.len += 1;
        }
    }

    /// Looks up `key`, returning the stored value.
    ///
    /// An absent key — empty bucket or exhausted chain scan alike —
    /// returns [`TableError::KeyNotFound`]. An empty stored value is
    /// `Ok("")`, distinct from absence.
    pub fn get(&self, key: &str) -> Result<&str, TableError> {
        self.bucket(key).get(key).ok_or(TableError::KeyNotFound)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.bucket(key).get(key).is_some()
    }

    /// Removes `key`, returning its value.
    ///
    /// Returns [`TableError::KeyNotFound`] without mutating anything
    /// when the key is absent.
    pub fn remove(&mut self, key: &str) -> Result<String, TableError> {
        let value = self
            .bucket_mut(key)
            .remove(key)
            .ok_or(TableError::KeyNotFound)?;
        self.len -= 1;
        Ok(value)
    }

    /// Doubles the capacity and rehashes every entry.
    ///
    /// Bucket assignment depends on the modulus, so a fresh bucket
    /// vector is built and each entry re-indexed under the new
    /// capacity; nothing is carried over from the old layout. Entry
    /// count and key/value pairs are preserved exactly; the old chains
    /// and bucket vector are released.
    pub fn resize(&mut self) {
        let new_capacity = self.buckets.len() * 2;
        let old_buckets = std::mem::replace(
            &mut self.buckets,
            (0..new_capacity).map(|_| Chain::new()).collect(),
        );
        for mut chain in old_buckets {
            while let Some((key, value)) = chain.pop() {
                // Keys are unique table-wide, so this always appends.
                self.buckets[hash::bucket_index(&key, new_capacity)].insert(key, value);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Invariant: every entry lives in the bucket its key hashes to
    /// under the current capacity.
    #[test]
    fn entries_land_in_hashed_bucket() {
        let mut t = HashTable::new(8).unwrap();
        for key in ["alpha", "beta", "gamma", "delta"] {
            t.insert(key.to_string(), key.to_uppercase());
            let idx = hash::bucket_index(key, 8);
            assert_eq!(t.buckets[idx].get(key), Some(key.to_uppercase().as_str()));
        }
    }

    /// Invariant: resize recomputes bucket assignment from scratch;
    /// entries whose index changes under the doubled modulus move.
    #[test]
    fn resize_rehashes_under_new_modulus() {
        let mut t = HashTable::new(2).unwrap();
        t.insert("line_1".to_string(), "a".to_string());
        t.insert("line_2".to_string(), "b".to_string());
        t.insert("line_3".to_string(), "c".to_string());
        // Modulus 2: line_1 and line_3 share bucket 1, line_2 sits in 0.
        assert_eq!(t.buckets[1].len(), 2);
        assert_eq!(t.buckets[0].len(), 1);

        t.resize();
        // Modulus 4: the three keys spread to buckets 1, 2, 3.
        assert_eq!(t.capacity(), 4);
        assert!(t.buckets[0].is_empty());
        assert_eq!(t.buckets[1].get("line_1"), Some("a"));
        assert_eq!(t.buckets[2].get("line_2"), Some("b"));
        assert_eq!(t.buckets[3].get("line_3"), Some("c"));
        assert_eq!(t.len(), 3);
    }

    /// Invariant: len tracks appends, overwrites, and removals.
    #[test]
    fn len_bookkeeping() {
        let mut t = HashTable::new(1).unwrap();
        assert!(t.is_empty());
        t.insert("a".to_string(), "1".to_string());
        t.insert("b".to_string(), "2".to_string());
        assert_eq!(t.len(), 2);
        t.insert("a".to_string(), "one".to_string());
        assert_eq!(t.len(), 2);
        t.remove("a").unwrap();
        assert_eq!(t.len(), 1);
        assert_eq!(t.remove("a"), Err(TableError::KeyNotFound));
        assert_eq!(t.len(), 1);
    }

    /// Invariant: load factor is entries over buckets.
    #[test]
    fn load_factor_reflects_fill() {
        let mut t = HashTable::new(4).unwrap();
        assert_eq!(t.load_factor(), 0.0);
        t.insert("a".to_string(), "1".to_string());
        t.insert("b".to_string(), "2".to_string());
        assert_eq!(t.load_factor(), 0.5);
        t.resize();
        assert_eq!(t.load_factor(), 0.25);
    }
}

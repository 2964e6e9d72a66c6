use tracing::warn;

use crate::dict::error::HashError;
use crate::dict::hash::djb2_hash;
use crate::dict::DICT_RESIZE_RATIO;

/// One key/value pair stored in a bucket chain. Key and value are owned
/// copies, never borrowed from the caller.
#[derive(Debug, Clone, PartialEq)]
pub struct DictEntry {
    pub(crate) key: String,
    pub(crate) val: String,
}

impl DictEntry {
    pub fn new(key: String, val: String) -> Self {
        Self { key, val }
    }

    #[inline]
    pub fn get_key(&self) -> &str {
        &self.key
    }

    #[inline]
    pub fn get_val(&self) -> &str {
        &self.val
    }

    #[inline]
    pub fn set_val(&mut self, val: String) {
        self.val = val
    }
}

/// Separate chaining hash table with owned string keys and values.
///
/// Every entry in bucket `i` satisfies `djb2_hash(key, capacity) == i`, and
/// a key appears at most once in the whole table. Capacity is fixed at
/// creation and only changes through an explicit [`Dict::resize`].
#[derive(Debug, Clone)]
pub struct Dict {
    /// bucket array; each bucket is one chain in insertion order
    pub(crate) ht_table: Vec<Vec<DictEntry>>,
    /// live entry count across all buckets
    ht_used: usize,
}

impl Dict {
    /// Allocate a table with `capacity` empty buckets.
    pub fn create(capacity: usize) -> Result<Self, HashError> {
        if capacity == 0 {
            return Err(HashError::InvalidCapacity(capacity));
        }
        Ok(Self {
            ht_table: vec![Vec::new(); capacity],
            ht_used: 0,
        })
    }

    /// Insert `(key, val)`, overwriting the value in place if `key` is
    /// already present. A new entry always lands at the chain tail; an
    /// overwrite leaves chain order and entry count untouched. Capacity
    /// never changes here.
    pub fn insert(&mut self, key: String, val: String) -> Result<(), HashError> {
        if key.is_empty() {
            return Err(HashError::EmptyKey);
        }
        self.insert_entry(key, val);
        Ok(())
    }

    /// Chain-scan insert shared by [`Dict::insert`] and [`Dict::resize`].
    /// Scans the whole chain from the head before appending, so a key can
    /// never appear twice even if an earlier entry was the match.
    fn insert_entry(&mut self, key: String, val: String) {
        let idx = djb2_hash(&key, self.capacity());
        for entry in &mut self.ht_table[idx] {
            if entry.key == key {
                entry.set_val(val);
                return;
            }
        }
        self.ht_table[idx].push(DictEntry::new(key, val));
        self.ht_used += 1;
    }

    /// Unlink and release the entry for `key`. Returns `false` on a missing
    /// key; the table is left unchanged in that case. At most one entry is
    /// removed per call.
    pub fn remove(&mut self, key: &str) -> bool {
        let idx = djb2_hash(key, self.capacity());
        let chain = &mut self.ht_table[idx];
        match chain.iter().position(|entry| entry.key == key) {
            Some(pos) => {
                chain.remove(pos);
                self.ht_used -= 1;
                true
            }
            None => {
                warn!("unable to remove entry with key: {}", key);
                false
            }
        }
    }

    /// Borrow the value stored for `key`, or `None` if absent.
    ///
    /// The borrow is tied to the table: any later insert, remove or resize
    /// requires the view to be dropped first.
    pub fn retrieve(&self, key: &str) -> Option<&str> {
        let idx = djb2_hash(key, self.capacity());
        for entry in &self.ht_table[idx] {
            if entry.key == key {
                return Some(&entry.val);
            }
        }
        warn!("unable to find entry with key: {}", key);
        None
    }

    /// Rebuild into a table with double the capacity.
    ///
    /// Every entry is re-inserted through the regular insert algorithm, so
    /// chains are redistributed under the new modulus rather than relinked.
    /// Consumes the old table; its storage is fully released once migration
    /// is done.
    pub fn resize(self) -> Dict {
        let mut new_dict = Dict {
            ht_table: vec![Vec::new(); self.capacity() * DICT_RESIZE_RATIO],
            ht_used: 0,
        };
        for chain in self.ht_table {
            for entry in chain {
                // Keys were validated non-empty on the way in.
                new_dict.insert_entry(entry.key, entry.val);
            }
        }
        new_dict
    }

    /// Release every entry but keep the bucket array at its current
    /// capacity.
    pub fn clear(&mut self) {
        for chain in &mut self.ht_table {
            chain.clear();
        }
        self.ht_used = 0;
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.ht_used
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.ht_used == 0
    }

    #[inline]
    pub fn capacity(&self) -> usize {
        self.ht_table.len()
    }
}

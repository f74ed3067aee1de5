//! A hash table with a fixed number of buckets, mapping `String` keys to `f32` values. Keys that
//! hash to the same bucket (synonyms) are kept in a singly linked chain hanging off that bucket.
//!
//! The bucket count is chosen when the table is built and never changes, so long chains are the
//! price of a table that is too small.
//!
//! # Examples
//!
//! ```
//! use stackwalk::table::HashTable;
//!
//! // A single bucket: every key is a synonym of every other key.
//! let mut table = HashTable::with_buckets(1)?;
//!
//! table.insert("x", 1.0);
//! table.insert("y", 2.0);
//! assert_eq!(table.get("x"), Some(1.0));
//! assert_eq!(table.get("y"), Some(2.0));
//!
//! assert_eq!(table.delete("x"), Some(1.0));
//! assert!(table.search("x").is_none());
//! assert_eq!(table.get("y"), Some(2.0));
//! # Ok::<(), stackwalk::Error>(())
//! ```

use std::fmt;

use tracing::{debug, trace};

use crate::error::{Error, Result};

/// The bucket count used by [`HashTable::new`].
pub const DEFAULT_BUCKETS: usize = 101;

type Chain = Option<Box<Item>>;

/// A fixed-size hash table with separately chained synonyms.
pub struct HashTable {
    slots: Box<[Chain]>,
    len: usize,
}

impl Default for HashTable {
    fn default() -> Self {
        Self::new()
    }
}

impl Drop for HashTable {
    fn drop(&mut self) {
        self.delete_all();
    }
}

impl fmt::Debug for HashTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.iter()).finish()
    }
}

/// A stored key and value. Items are only handed out by reference, see [`HashTable::search`]
/// and [`HashTable::search_mut`].
#[derive(Debug)]
pub struct Item {
    key: String,
    value: f32,
    next: Chain,
}

impl Item {
    /// The item's key.
    pub fn key(&self) -> &str {
        &self.key
    }

    /// The value currently stored for the key.
    pub fn value(&self) -> f32 {
        self.value
    }

    /// Overwrites the stored value.
    pub fn set_value(&mut self, value: f32) {
        self.value = value;
    }
}

impl HashTable {
    /// A table with [`DEFAULT_BUCKETS`] buckets.
    pub fn new() -> Self {
        Self::empty(DEFAULT_BUCKETS)
    }

    /// A table with `buckets` buckets.
    ///
    /// # Errors
    ///
    /// [`Error::ZeroBuckets`] when `buckets` is zero.
    pub fn with_buckets(buckets: usize) -> Result<Self> {
        if buckets == 0 {
            return Err(Error::ZeroBuckets);
        }
        Ok(Self::empty(buckets))
    }

    fn empty(buckets: usize) -> Self {
        debug!(buckets, "creating hash table");
        Self {
            slots: (0..buckets).map(|_| None).collect(),
            len: 0,
        }
    }

    /// How many buckets the table hashes into.
    pub fn buckets(&self) -> usize {
        self.slots.len()
    }

    /// How many distinct keys are stored.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Whether no key is stored.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// The bucket `key` belongs to: one plus the sum of its bytes, modulo the bucket count.
    ///
    /// This spreads short keys poorly (anagrams always collide) but only chain lengths depend on
    /// it.
    ///
    /// # Examples
    ///
    /// ```
    /// use stackwalk::table::HashTable;
    ///
    /// let table = HashTable::with_buckets(7)?;
    ///
    /// assert_eq!(table.bucket_of(""), 1);
    /// assert_eq!(table.bucket_of("ab"), table.bucket_of("ba"));
    /// # Ok::<(), stackwalk::Error>(())
    /// ```
    pub fn bucket_of(&self, key: &str) -> usize {
        let sum = key
            .bytes()
            .fold(1usize, |sum, byte| sum.wrapping_add(usize::from(byte)));
        sum % self.slots.len()
    }

    /// Finds the item stored for `key`.
    pub fn search(&self, key: &str) -> Option<&Item> {
        let mut item = self.slots[self.bucket_of(key)].as_deref();
        while let Some(i) = item {
            if i.key == key {
                return Some(i);
            }
            item = i.next.as_deref();
        }
        None
    }

    /// Finds the item stored for `key`, allowing its value to be changed in place.
    pub fn search_mut(&mut self, key: &str) -> Option<&mut Item> {
        let bucket = self.bucket_of(key);
        let mut item = self.slots[bucket].as_deref_mut();
        while let Some(i) = item {
            if i.key == key {
                return Some(i);
            }
            item = i.next.as_deref_mut();
        }
        None
    }

    /// Stores `value` for `key`, overwriting the value of an existing key. A new key is put at
    /// the head of its bucket's chain.
    pub fn insert(&mut self, key: &str, value: f32) {
        if let Some(item) = self.search_mut(key) {
            item.value = value;
            return;
        }

        let bucket = self.bucket_of(key);
        let next = self.slots[bucket].take();
        self.slots[bucket] = Some(Box::new(Item {
            key: key.to_owned(),
            value,
            next,
        }));
        self.len += 1;
    }

    /// Gets a copy of the value stored for `key`.
    pub fn get(&self, key: &str) -> Option<f32> {
        self.search(key).map(Item::value)
    }

    /// Removes `key` from the table and returns its value. If the key isn't stored, nothing
    /// happens.
    pub fn delete(&mut self, key: &str) -> Option<f32> {
        let bucket = self.bucket_of(key);

        // `link` is the slot head or the predecessor's `next`.
        let mut link = &mut self.slots[bucket];
        while link.as_ref().map_or(false, |item| item.key != key) {
            let Some(item) = link else {
                unreachable!("loop condition saw an item")
            };
            link = &mut item.next;
        }

        let mut removed = link.take()?;
        *link = removed.next.take();
        self.len -= 1;
        trace!(key, bucket, "deleted item");
        Some(removed.value)
    }

    /// Removes every item, leaving the table as it was when built.
    pub fn delete_all(&mut self) {
        let mut released = 0usize;
        for slot in self.slots.iter_mut() {
            let mut chain = slot.take();
            while let Some(mut item) = chain {
                chain = item.next.take();
                released += 1;
            }
        }

        debug_assert_eq!(released, self.len);
        self.len = 0;
        if released > 0 {
            debug!(released, "cleared hash table");
        }
    }

    /// Iterates over every key and value, bucket by bucket.
    pub fn iter(&self) -> Iter<'_> {
        Iter {
            slots: self.slots.iter(),
            chain: None,
        }
    }
}

/// Iterator returned by [`HashTable::iter`].
pub struct Iter<'a> {
    slots: std::slice::Iter<'a, Chain>,
    chain: Option<&'a Item>,
}

impl<'a> Iterator for Iter<'a> {
    type Item = (&'a str, f32);

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Some(item) = self.chain {
                self.chain = item.next.as_deref();
                return Some((&item.key, item.value));
            }
            self.chain = self.slots.next()?.as_deref();
        }
    }
}

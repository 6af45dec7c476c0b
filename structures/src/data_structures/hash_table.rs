//! Hash table with separate chaining and a fixed bucket count.
//!
//! Variables:
//!   buckets : Vec<Vec<(K,V)>>  — chain per slot, length C fixed at construction
//!   len     : usize            — number of live entries
//!   C       : usize            — bucket count, C >= 1, never changes
//!
//! Equations:
//!   h(s: string) = (sum of code points of s) mod C
//!   h(i: int)    = i mod C   (non-negative remainder)
//!   h(k: other)  = std hash(k) mod C
//!   load_factor  = len / C   (reported only; no rehash ever happens)
//!
//!   put(k,v):   scan chain h(k); replace on hit, else push    O(1 + len/C)
//!   get(k):     scan chain h(k)                                O(1 + len/C)
//!   remove(k):  scan chain h(k), swap out the entry            O(1 + len/C)

use std::collections::hash_map::DefaultHasher;
use std::fmt;
use std::hash::{Hash, Hasher};

use tracing::{debug, trace};

use crate::error::StructureError;

pub const DEFAULT_BUCKETS: usize = 10;

/// Maps a key to one of `buckets` slots.
pub trait TableKey: Eq {
    fn bucket_index(&self, buckets: usize) -> usize;
}

fn code_point_sum(s: &str) -> u64 {
    s.chars().map(|c| u64::from(u32::from(c))).sum()
}

impl TableKey for String {
    fn bucket_index(&self, buckets: usize) -> usize {
        (code_point_sum(self) % buckets as u64) as usize
    }
}

impl TableKey for &str {
    fn bucket_index(&self, buckets: usize) -> usize {
        (code_point_sum(self) % buckets as u64) as usize
    }
}

impl TableKey for char {
    fn bucket_index(&self, buckets: usize) -> usize {
        (u64::from(u32::from(*self)) % buckets as u64) as usize
    }
}

impl TableKey for bool {
    fn bucket_index(&self, buckets: usize) -> usize {
        usize::from(*self) % buckets
    }
}

macro_rules! signed_key {
    ($($t:ty),*) => {$(
        impl TableKey for $t {
            fn bucket_index(&self, buckets: usize) -> usize {
                (*self as i128).rem_euclid(buckets as i128) as usize
            }
        }
    )*};
}

macro_rules! unsigned_key {
    ($($t:ty),*) => {$(
        impl TableKey for $t {
            fn bucket_index(&self, buckets: usize) -> usize {
                (*self as u128 % buckets as u128) as usize
            }
        }
    )*};
}

signed_key!(i8, i16, i32, i64, i128, isize);
unsigned_key!(u8, u16, u32, u64, u128, usize);

/// Bucket index from the standard hasher, for key types without a
/// dedicated rule.
pub fn std_bucket_index<K: Hash + ?Sized>(key: &K, buckets: usize) -> usize {
    let mut h = DefaultHasher::new();
    key.hash(&mut h);
    (h.finish() % buckets as u64) as usize
}

pub struct HashTable<K: TableKey, V> {
    buckets: Vec<Vec<(K, V)>>,
    len: usize,
}

impl<K: TableKey, V> HashTable<K, V> {
    pub fn new() -> Self {
        Self { buckets: Self::empty_buckets(DEFAULT_BUCKETS), len: 0 }
    }

    pub fn with_buckets(buckets: usize) -> Result<Self, StructureError> {
        if buckets == 0 {
            return Err(StructureError::InvalidBucketCount(buckets));
        }
        Ok(Self { buckets: Self::empty_buckets(buckets), len: 0 })
    }

    fn empty_buckets(n: usize) -> Vec<Vec<(K, V)>> {
        std::iter::repeat_with(Vec::new).take(n).collect()
    }

    pub fn bucket_of(&self, key: &K) -> usize {
        key.bucket_index(self.buckets.len())
    }

    pub fn put(&mut self, key: K, value: V) {
        let index = self.bucket_of(&key);
        let bucket = &mut self.buckets[index];
        match bucket.iter_mut().find(|(k, _)| *k == key) {
            Some(entry) => {
                trace!(bucket = index, "replacing existing entry");
                entry.1 = value;
            }
            None => {
                if !bucket.is_empty() {
                    debug!(bucket = index, chain = bucket.len() + 1, "collision, chaining entry");
                }
                bucket.push((key, value));
                self.len += 1;
            }
        }
    }

    pub fn get(&self, key: &K) -> Option<&V> {
        self.buckets[self.bucket_of(key)]
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v)
    }

    pub fn get_mut(&mut self, key: &K) -> Option<&mut V> {
        let index = self.bucket_of(key);
        self.buckets[index]
            .iter_mut()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v)
    }

    pub fn remove(&mut self, key: &K) -> bool {
        let index = self.bucket_of(key);
        let bucket = &mut self.buckets[index];
        match bucket.iter().position(|(k, _)| k == key) {
            Some(pos) => {
                bucket.remove(pos);
                self.len -= 1;
                true
            }
            None => false,
        }
    }

    pub fn contains(&self, key: &K) -> bool {
        self.get(key).is_some()
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn bucket_count(&self) -> usize {
        self.buckets.len()
    }

    pub fn load_factor(&self) -> f64 {
        self.len as f64 / self.buckets.len() as f64
    }

    /// Entries in bucket order, chain order within a bucket.
    pub fn iter(&self) -> impl Iterator<Item = (&K, &V)> + '_ {
        self.buckets.iter().flatten().map(|(k, v)| (k, v))
    }

    pub fn keys(&self) -> impl Iterator<Item = &K> + '_ {
        self.iter().map(|(k, _)| k)
    }

    /// Length of every chain, indexed by bucket.
    pub fn chain_lengths(&self) -> Vec<usize> {
        self.buckets.iter().map(Vec::len).collect()
    }
}

impl<K: TableKey, V> Default for HashTable<K, V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K: TableKey + fmt::Debug, V: fmt::Debug> fmt::Debug for HashTable<K, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.iter()).finish()
    }
}

impl<K: TableKey + fmt::Display, V: fmt::Display> fmt::Display for HashTable<K, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("{")?;
        for (i, (k, v)) in self.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{k}: {v}")?;
        }
        f.write_str("}")
    }
}

//! 哈希表模块
//!
//! `i32` 键到 `i32` 值的链式哈希表，桶数固定为 [`HASH_BUCKET_COUNT`]。
//! 新键插入到链表头部，因此每个桶按最近插入在前的顺序列出条目。

use std::fmt;

use crate::core::{encode_list, encode_rows, HASH_BUCKET_COUNT, HASH_MISS};

type Chain = Option<Box<HashNode>>;

#[derive(Debug)]
struct HashNode {
    key: i32,
    value: i32,
    next: Chain,
}

/// A `key:value` pair as it appears in the serialized table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HashEntry {
    pub key: i32,
    pub value: i32,
}

impl fmt::Display for HashEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.key, self.value)
    }
}

#[derive(Debug)]
pub struct HashTable {
    buckets: Vec<Chain>,
    len: usize,
}

impl HashTable {
    pub fn new() -> Self {
        Self {
            buckets: (0..HASH_BUCKET_COUNT).map(|_| None).collect(),
            len: 0,
        }
    }

    /// Bucket index: `|key| mod 10`.
    ///
    /// `i32::MIN` has no positive counterpart; its magnitude is taken as
    /// unsigned (bucket 8) and the key is reported.
    pub fn bucket_index(key: i32) -> usize {
        if key == i32::MIN {
            log::warn!("hash key {} has no representable absolute value", key);
        }
        (key.unsigned_abs() as usize) % HASH_BUCKET_COUNT
    }

    /// Inserts or updates `key`.
    pub fn insert(&mut self, key: i32, value: i32) {
        let index = Self::bucket_index(key);

        let mut current = self.buckets[index].as_deref_mut();
        while let Some(node) = current {
            if node.key == key {
                node.value = value;
                return;
            }
            current = node.next.as_deref_mut();
        }

        let next = self.buckets[index].take();
        self.buckets[index] = Some(Box::new(HashNode { key, value, next }));
        self.len += 1;
    }

    /// Value stored for `key`, or `-1` when absent.
    ///
    /// A stored `-1` is indistinguishable from a miss; use [`HashTable::get`]
    /// when that matters.
    pub fn search(&self, key: i32) -> i32 {
        self.get(key).unwrap_or(HASH_MISS)
    }

    pub fn get(&self, key: i32) -> Option<i32> {
        let mut current = self.buckets[Self::bucket_index(key)].as_deref();
        while let Some(node) = current {
            if node.key == key {
                return Some(node.value);
            }
            current = node.next.as_deref();
        }
        None
    }

    pub fn contains_key(&self, key: i32) -> bool {
        self.get(key).is_some()
    }

    /// Entries of one bucket in chain order.
    pub fn bucket(&self, index: usize) -> Vec<HashEntry> {
        let mut entries = Vec::new();
        let mut current = self.buckets.get(index).and_then(|chain| chain.as_deref());
        while let Some(node) = current {
            entries.push(HashEntry {
                key: node.key,
                value: node.value,
            });
            current = node.next.as_deref();
        }
        entries
    }

    /// All buckets, e.g. `[[],[11:2,1:1],[],...]`.
    pub fn get_table(&self) -> String {
        encode_rows((0..self.buckets.len()).map(|index| self.bucket(index)))
    }

    /// Serializes a single bucket.
    pub fn get_bucket(&self, index: usize) -> String {
        encode_list(self.bucket(index))
    }

    /// Drops every chain; the bucket count stays fixed.
    pub fn clear(&mut self) {
        for chain in self.buckets.iter_mut() {
            let mut current = chain.take();
            while let Some(mut node) = current {
                current = node.next.take();
            }
        }
        self.len = 0;
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
}

impl Default for HashTable {
    fn default() -> Self {
        Self::new()
    }
}

impl Drop for HashTable {
    fn drop(&mut self) {
        self.clear();
    }
}

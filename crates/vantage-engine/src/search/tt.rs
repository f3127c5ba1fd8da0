//! Transposition cache: memoized static evaluations keyed by position hash.
//!
//! Entries are never replaced or evicted. A key maps to the evaluator's score
//! for the position with that hash; no depth, bound, or move is stored.

use std::collections::HashMap;

/// Unbounded map from position hash to static score.
#[derive(Debug, Clone, Default)]
pub struct TranspositionCache {
    entries: HashMap<u64, i32>,
}

impl TranspositionCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// The cached score for `key`, if any.
    #[inline]
    pub fn get(&self, key: u64) -> Option<i32> {
        self.entries.get(&key).copied()
    }

    /// Store `score` under `key`, overwriting any previous score.
    #[inline]
    pub fn put(&mut self, key: u64, score: i32) {
        self.entries.insert(key, score);
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Drop every entry.
    pub fn clear(&mut self) {
        self.entries.clear();
    }
}

//! Chained, resizable frequency table.
//!
//! This is the keyed counter backing both the per-round pair statistics and
//! the long-lived vocabulary. Keys hash with a polynomial rolling hash
//! (`value = value * 37 + byte`) reduced modulo the bucket count, and the
//! table doubles whenever an insertion would push the load factor to the
//! configured threshold.

use crate::error::{Result, VocabError};
use compact_str::CompactString;

/// Default number of buckets when no capacity is given (or 0 is given).
pub const DEFAULT_BUCKETS: usize = 10_000;

/// Default load factor threshold that triggers a doubling resize.
pub const DEFAULT_LOAD_THRESHOLD: f64 = 0.7;

/// One key/count entry in a bucket chain.
#[derive(Debug, Clone)]
struct Entry {
    key: CompactString,
    count: u64,
}

/// Chained hash table mapping a token string to an occurrence count.
///
/// The invariant `len() / bucket_count() < load_threshold` holds immediately
/// after every inserting operation; a violation is resolved by doubling the
/// bucket array before the insert completes. Chain order within a bucket is
/// not meaningful and not preserved across resizes.
#[derive(Debug, Clone)]
pub struct FrequencyTable {
    buckets: Vec<Vec<Entry>>,
    distinct: usize,
    load_threshold: f64,
}

impl FrequencyTable {
    /// Create a table with the default capacity and load threshold.
    pub fn new() -> Result<Self> {
        Self::with_capacity(DEFAULT_BUCKETS)
    }

    /// Create a table with the given bucket count and the default threshold.
    ///
    /// A capacity of 0 selects the default bucket count.
    pub fn with_capacity(capacity: usize) -> Result<Self> {
        Self::with_capacity_and_threshold(capacity, DEFAULT_LOAD_THRESHOLD)
    }

    /// Create a table with the given bucket count and load threshold.
    pub fn with_capacity_and_threshold(capacity: usize, load_threshold: f64) -> Result<Self> {
        if !(load_threshold > 0.0 && load_threshold <= 1.0) {
            return Err(VocabError::Config(format!(
                "load threshold must be in (0, 1], got {}",
                load_threshold
            )));
        }

        let capacity = if capacity == 0 {
            DEFAULT_BUCKETS
        } else {
            capacity
        };

        let mut buckets: Vec<Vec<Entry>> = Vec::new();
        buckets
            .try_reserve_exact(capacity)
            .map_err(|_| VocabError::Allocation(format!("{} buckets", capacity)))?;
        buckets.resize_with(capacity, Vec::new);

        Ok(Self {
            buckets,
            distinct: 0,
            load_threshold,
        })
    }

    /// Polynomial rolling hash reduced modulo the bucket count.
    fn bucket_index(key: &str, bucket_count: usize) -> usize {
        let mut value: u64 = 0;
        for &byte in key.as_bytes() {
            value = value.wrapping_mul(37).wrapping_add(u64::from(byte));
        }
        (value % bucket_count as u64) as usize
    }

    /// Look up the count stored for a key.
    pub fn find(&self, key: &str) -> Option<u64> {
        let slot = Self::bucket_index(key, self.buckets.len());
        self.buckets[slot]
            .iter()
            .find(|entry| entry.key == key)
            .map(|entry| entry.count)
    }

    /// Insert a key with count 1, or increment its existing count.
    pub fn insert_or_increment(&mut self, key: &str) -> Result<()> {
        self.add_count(key, 1)
    }

    /// Add `count` to a key, inserting it if absent.
    pub fn add_count(&mut self, key: &str, count: u64) -> Result<()> {
        // The load check precedes the lookup: the table is probed as it
        // would stand after a fresh insert, so an increment on a near-full
        // table grows it too.
        self.grow_if_needed()?;

        let slot = Self::bucket_index(key, self.buckets.len());
        if let Some(entry) = self.buckets[slot].iter_mut().find(|entry| entry.key == key) {
            entry.count += count;
            return Ok(());
        }

        self.buckets[slot].push(Entry {
            key: CompactString::new(key),
            count,
        });
        self.distinct += 1;
        Ok(())
    }

    /// Set a key's count, inserting it if absent.
    ///
    /// This is the overwrite upsert: an existing count is replaced, never
    /// accumulated.
    pub fn set_count(&mut self, key: &str, count: u64) -> Result<()> {
        self.grow_if_needed()?;

        let slot = Self::bucket_index(key, self.buckets.len());
        if let Some(entry) = self.buckets[slot].iter_mut().find(|entry| entry.key == key) {
            entry.count = count;
            return Ok(());
        }

        self.buckets[slot].push(Entry {
            key: CompactString::new(key),
            count,
        });
        self.distinct += 1;
        Ok(())
    }

    /// Fold another table's counts into this one, adding by key.
    pub fn merge_from(&mut self, other: FrequencyTable) -> Result<()> {
        for bucket in other.buckets {
            for entry in bucket {
                self.add_count(&entry.key, entry.count)?;
            }
        }
        Ok(())
    }

    /// Rehash every entry into a freshly sized bucket array.
    ///
    /// Either the resize fully completes or the table remains exactly as it
    /// was: the new bucket array is allocated before any entry moves.
    pub fn resize(&mut self, new_bucket_count: usize) -> Result<()> {
        if new_bucket_count == 0 {
            return Err(VocabError::Config("cannot resize to zero buckets".into()));
        }

        let mut fresh: Vec<Vec<Entry>> = Vec::new();
        fresh
            .try_reserve_exact(new_bucket_count)
            .map_err(|_| VocabError::Allocation(format!("{} buckets", new_bucket_count)))?;
        fresh.resize_with(new_bucket_count, Vec::new);

        let old = std::mem::replace(&mut self.buckets, fresh);
        for bucket in old {
            for entry in bucket {
                let slot = Self::bucket_index(&entry.key, self.buckets.len());
                self.buckets[slot].push(entry);
            }
        }
        Ok(())
    }

    /// Double the bucket array until one more entry stays under the
    /// threshold. A single doubling suffices on the growth path; the loop
    /// also restores the invariant after an explicit shrinking resize.
    fn grow_if_needed(&mut self) -> Result<()> {
        while (self.distinct + 1) as f64 / self.buckets.len() as f64 >= self.load_threshold {
            self.resize(self.buckets.len() * 2)?;
        }
        Ok(())
    }

    /// Number of distinct keys stored.
    #[inline]
    pub fn len(&self) -> usize {
        self.distinct
    }

    /// Check whether the table holds no keys.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.distinct == 0
    }

    /// Current number of buckets.
    #[inline]
    pub fn bucket_count(&self) -> usize {
        self.buckets.len()
    }

    /// Current ratio of stored keys to buckets.
    #[inline]
    pub fn load_factor(&self) -> f64 {
        self.distinct as f64 / self.buckets.len() as f64
    }

    /// Iterate over `(key, count)` pairs in bucket order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, u64)> + '_ {
        self.buckets
            .iter()
            .flat_map(|bucket| bucket.iter().map(|entry| (entry.key.as_str(), entry.count)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_distinct_inserts() {
        let mut table = FrequencyTable::with_capacity(8).unwrap();
        for i in 0..100 {
            table.insert_or_increment(&format!("token{}", i)).unwrap();
        }
        assert_eq!(table.len(), 100);
        for i in 0..100 {
            assert_eq!(table.find(&format!("token{}", i)), Some(1));
        }
    }

    #[test]
    fn test_increment_same_key() {
        let mut table = FrequencyTable::new().unwrap();
        for _ in 0..7 {
            table.insert_or_increment("[C]").unwrap();
        }
        assert_eq!(table.find("[C]"), Some(7));
        assert_eq!(table.len(), 1);
    }

    #[test]
    fn test_load_factor_invariant() {
        let mut table = FrequencyTable::with_capacity(4).unwrap();
        for i in 0..500 {
            table.insert_or_increment(&format!("k{}", i)).unwrap();
            assert!(table.load_factor() < DEFAULT_LOAD_THRESHOLD);
        }
        assert_eq!(table.len(), 500);
    }

    #[test]
    fn test_resize_preserves_counts() {
        let mut table = FrequencyTable::with_capacity(64).unwrap();
        for i in 0..20 {
            for _ in 0..=i {
                table.insert_or_increment(&format!("k{}", i)).unwrap();
            }
        }
        table.resize(7).unwrap();
        assert_eq!(table.bucket_count(), 7);
        assert_eq!(table.len(), 20);
        for i in 0..20 {
            assert_eq!(table.find(&format!("k{}", i)), Some(i + 1));
        }
    }

    #[test]
    fn test_insert_after_shrink_restores_invariant() {
        let mut table = FrequencyTable::with_capacity(64).unwrap();
        for i in 0..30 {
            table.insert_or_increment(&format!("k{}", i)).unwrap();
        }
        table.resize(4).unwrap();
        table.insert_or_increment("fresh").unwrap();
        assert!(table.load_factor() < DEFAULT_LOAD_THRESHOLD);
        assert_eq!(table.len(), 31);
    }

    #[test]
    fn test_set_count_overwrites() {
        let mut table = FrequencyTable::new().unwrap();
        table.insert_or_increment("[C][C]").unwrap();
        table.insert_or_increment("[C][C]").unwrap();
        table.set_count("[C][C]", 9).unwrap();
        assert_eq!(table.find("[C][C]"), Some(9));

        table.set_count("[N]", 3).unwrap();
        assert_eq!(table.find("[N]"), Some(3));
        assert_eq!(table.len(), 2);
    }

    #[test]
    fn test_merge_from_adds_by_key() {
        let mut left = FrequencyTable::with_capacity(16).unwrap();
        left.add_count("a", 2).unwrap();
        left.add_count("b", 1).unwrap();

        let mut right = FrequencyTable::with_capacity(16).unwrap();
        right.add_count("b", 4).unwrap();
        right.add_count("c", 3).unwrap();

        left.merge_from(right).unwrap();
        assert_eq!(left.find("a"), Some(2));
        assert_eq!(left.find("b"), Some(5));
        assert_eq!(left.find("c"), Some(3));
        assert_eq!(left.len(), 3);
    }

    #[test]
    fn test_zero_capacity_uses_default() {
        let table = FrequencyTable::with_capacity(0).unwrap();
        assert_eq!(table.bucket_count(), DEFAULT_BUCKETS);
    }

    #[test]
    fn test_invalid_threshold_rejected() {
        assert!(FrequencyTable::with_capacity_and_threshold(16, 0.0).is_err());
        assert!(FrequencyTable::with_capacity_and_threshold(16, 1.5).is_err());
    }

    #[test]
    fn test_find_missing() {
        let table = FrequencyTable::new().unwrap();
        assert_eq!(table.find("absent"), None);
    }
}

//! Sharded concurrent accumulator.
//!
//! Parallel ranking workers add partial scores for the same document ids.
//! Instead of one lock around one map, keys are routed to one of `N`
//! independently locked ordered maps, so writers touching different shards
//! never contend. Once every writer has finished, [`snapshot`] consumes the
//! accumulator and merges the shards into a single ordered map.
//!
//! [`snapshot`]: ConcurrentAccumulator::snapshot
//!
//! # Examples
//!
//! ```
//! use pike::search::accumulator::ConcurrentAccumulator;
//!
//! let acc: ConcurrentAccumulator<i32, u64> = ConcurrentAccumulator::new(8);
//! acc.add(1, 2);
//! acc.add(1, 3);
//! acc.add(7, 1);
//!
//! let merged = acc.snapshot();
//! assert_eq!(merged[&1], 5);
//! assert_eq!(merged[&7], 1);
//! ```

use std::collections::BTreeMap;
use std::hash::{BuildHasher, Hash};
use std::ops::AddAssign;

use ahash::RandomState;
use parking_lot::Mutex;

/// Key to value accumulator split into independently locked shards.
#[derive(Debug)]
pub struct ConcurrentAccumulator<K, V> {
    shards: Vec<Mutex<BTreeMap<K, V>>>,
    hasher: RandomState,
}

impl<K, V> ConcurrentAccumulator<K, V>
where
    K: Ord + Hash,
{
    /// Create an accumulator with `shard_count` shards (at least one).
    pub fn new(shard_count: usize) -> Self {
        let shards = (0..shard_count.max(1))
            .map(|_| Mutex::new(BTreeMap::new()))
            .collect();

        ConcurrentAccumulator {
            shards,
            hasher: RandomState::new(),
        }
    }

    /// Number of shards.
    pub fn shard_count(&self) -> usize {
        self.shards.len()
    }

    fn shard_index(&self, key: &K) -> usize {
        (self.hasher.hash_one(key) % self.shards.len() as u64) as usize
    }

    /// Insert-or-increment `key` by `delta`, locking only the key's shard.
    pub fn add<D>(&self, key: K, delta: D)
    where
        V: Default + AddAssign<D>,
    {
        let mut shard = self.shards[self.shard_index(&key)].lock();
        *shard.entry(key).or_default() += delta;
    }

    /// Merge all shards into one ordered map.
    ///
    /// Takes the accumulator by value: a snapshot can only be taken once all
    /// borrows held by writers have ended.
    pub fn snapshot(self) -> BTreeMap<K, V> {
        let mut merged = BTreeMap::new();
        for shard in self.shards {
            // Shards hold disjoint keys.
            merged.extend(shard.into_inner());
        }
        merged
    }
}

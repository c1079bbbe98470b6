//! Sharded concurrent accumulator (§4.2): a fixed array of independently
//! locked shards, keyed by an integer routed with unsigned remainder.
//!
//! This is the Rust generalization of the original `ConcurrentMap<K, V>`
//! used by the parallel top-k path; it owns its own locking the same way
//! a dedicated rayon pool owns its threads, and is the only component in
//! this crate with intra-call internal concurrency.

use std::collections::BTreeMap;
use std::ops::AddAssign;

use parking_lot::Mutex;

use crate::core::types::DocId;

/// A key that can be routed to one of `N` shards.
pub trait ShardKey: Copy + Ord {
    fn shard_index(&self, shard_count: usize) -> usize;
}

impl ShardKey for DocId {
    fn shard_index(&self, shard_count: usize) -> usize {
        debug_assert!(self.0 >= 0, "ConcurrentMap keys must be non-negative document ids");
        (self.0 as u64 % shard_count as u64) as usize
    }
}

/// `N`-shard map from `K` to an accumulating `V`. Each shard is guarded by
/// its own `parking_lot::Mutex`; accumulates on distinct shards never
/// contend with one another.
pub struct ConcurrentMap<K, V> {
    shards: Vec<Mutex<BTreeMap<K, V>>>,
}

impl<K, V> ConcurrentMap<K, V>
where
    K: ShardKey,
    V: Copy + Default + AddAssign,
{
    pub fn new(shard_count: usize) -> Self {
        assert!(shard_count > 0, "ConcurrentMap needs at least one shard");
        let mut shards = Vec::with_capacity(shard_count);
        shards.resize_with(shard_count, || Mutex::new(BTreeMap::new()));
        ConcurrentMap { shards }
    }

    pub fn shard_count(&self) -> usize {
        self.shards.len()
    }

    /// Acquire the shard owning `key`, add `delta` to the existing value
    /// (or insert it if absent), release. Linearizable per key.
    pub fn accumulate(&self, key: K, delta: V) {
        let idx = key.shard_index(self.shards.len());
        let mut shard = self.shards[idx].lock();
        shard.entry(key).or_insert_with(V::default).add_assign(delta);
    }

    /// Acquire every shard in order, merge into a single ordered map,
    /// release. No writer can observe a partial merge: all shards are
    /// held for the duration of the snapshot.
    pub fn build_ordered_snapshot(&self) -> BTreeMap<K, V> {
        let guards: Vec<_> = self.shards.iter().map(|s| s.lock()).collect();
        let mut merged = BTreeMap::new();
        for guard in guards {
            for (&k, &v) in guard.iter() {
                merged.insert(k, v);
            }
        }
        merged
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rayon::prelude::*;

    #[test]
    fn accumulates_within_a_shard() {
        let map: ConcurrentMap<DocId, f64> = ConcurrentMap::new(4);
        map.accumulate(DocId(1), 0.5);
        map.accumulate(DocId(1), 0.25);
        let snap = map.build_ordered_snapshot();
        assert_eq!(snap[&DocId(1)], 0.75);
    }

    #[test]
    fn routes_by_unsigned_remainder() {
        let map: ConcurrentMap<DocId, f64> = ConcurrentMap::new(3);
        map.accumulate(DocId(0), 1.0);
        map.accumulate(DocId(3), 1.0);
        map.accumulate(DocId(6), 1.0);
        let snap = map.build_ordered_snapshot();
        assert_eq!(snap.len(), 3);
    }

    #[test]
    fn sum_is_associative_across_parallel_accumulates() {
        let map: ConcurrentMap<DocId, f64> = ConcurrentMap::new(100);
        (0..10_000).into_par_iter().for_each(|i| {
            map.accumulate(DocId(i % 37), 1.0);
        });
        let snap = map.build_ordered_snapshot();
        let total: f64 = snap.values().sum();
        assert_eq!(total, 10_000.0);
    }
}

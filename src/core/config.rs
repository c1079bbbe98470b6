use crate::core::types::BUCKETS_COUNT;

/// Tunables for the parallel execution paths. None of this affects
/// sequential behavior or observable results, only how parallel work is
/// sharded and scheduled.
#[derive(Debug, Clone)]
pub struct SearchServerConfig {
    /// Shard count for the concurrent accumulator used by parallel top-k.
    pub shard_count: usize,
    /// Worker threads for the dedicated rayon pool. `None` uses rayon's
    /// global pool, sized to hardware concurrency.
    pub worker_threads: Option<usize>,
}

impl Default for SearchServerConfig {
    fn default() -> Self {
        SearchServerConfig {
            shard_count: BUCKETS_COUNT,
            worker_threads: None,
        }
    }
}

impl SearchServerConfig {
    pub fn with_worker_threads(mut self, threads: usize) -> Self {
        self.worker_threads = Some(threads);
        self
    }

    pub fn with_shard_count(mut self, shard_count: usize) -> Self {
        self.shard_count = shard_count;
        self
    }

    pub fn resolved_worker_threads(&self) -> usize {
        self.worker_threads.unwrap_or_else(num_cpus::get)
    }
}

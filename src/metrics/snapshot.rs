//! Copyable counter snapshots.

/// Point-in-time copy of a cache's operation counters.
///
/// `*_calls` counts invocations, `*_found`/`*_hits` the subset that located
/// an entry. `get_calls` is always `get_hits + get_misses`. `cache_len` and
/// `capacity` are gauges captured at snapshot time.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct RecencyMetricsSnapshot {
    pub get_calls: u64,
    pub get_hits: u64,
    pub get_misses: u64,

    pub insert_calls: u64,
    pub insert_updates: u64,
    pub insert_new: u64,

    pub evict_calls: u64,
    pub evicted_entries: u64,
    pub clear_calls: u64,

    pub pop_lru_calls: u64,
    pub pop_lru_found: u64,
    pub peek_calls: u64,
    pub peek_found: u64,
    pub peek_lru_calls: u64,
    pub peek_lru_found: u64,
    pub touch_calls: u64,
    pub touch_found: u64,
    pub recency_rank_calls: u64,
    pub recency_rank_found: u64,
    pub recency_rank_scan_steps: u64,
    pub stats_calls: u64,

    pub cache_len: usize,
    pub capacity: usize,
}

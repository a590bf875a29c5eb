//! Operation counters for the recency cache (feature `metrics`).
//!
//! Recording, snapshotting, and consumption are split the same way the cache
//! traits are:
//!
//! - recorder traits ([`traits`]) only write counters;
//! - [`RecencyMetrics`] is the per-cache counter block, embedded in
//!   [`BoundedRecencyCache`](crate::policy::recency::BoundedRecencyCache);
//! - [`snapshot::RecencyMetricsSnapshot`] is the copyable export type,
//!   obtained through [`traits::MetricsSnapshotProvider`].
//!
//! Counters on `&mut self` paths (insert, get, touch, pop) are plain `u64`;
//! counters on `&self` read paths (peek, peek_lru, recency_rank, stats) live
//! in a [`cell::MetricsCell`] so recording does not require mutable access.
//! All of it is observational: no counter influences cache behavior.

pub mod cell;
pub mod snapshot;
pub mod traits;

use self::cell::MetricsCell;
use self::traits::{CoreMetricsRecorder, RecencyMetricsReadRecorder, RecencyMetricsRecorder};

/// Counter block for one cache instance.
///
/// Field names match the snapshot fields one-for-one; see
/// [`snapshot::RecencyMetricsSnapshot`] for their meaning.
#[derive(Debug, Default)]
pub struct RecencyMetrics {
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
    pub touch_calls: u64,
    pub touch_found: u64,
    pub peek_calls: MetricsCell,
    pub peek_found: MetricsCell,
    pub peek_lru_calls: MetricsCell,
    pub peek_lru_found: MetricsCell,
    pub recency_rank_calls: MetricsCell,
    pub recency_rank_found: MetricsCell,
    pub recency_rank_scan_steps: MetricsCell,
    pub stats_calls: MetricsCell,
}

impl CoreMetricsRecorder for RecencyMetrics {
    fn record_get_hit(&mut self) {
        self.get_hits += 1;
    }

    fn record_get_miss(&mut self) {
        self.get_misses += 1;
    }

    fn record_insert_call(&mut self) {
        self.insert_calls += 1;
    }

    fn record_insert_new(&mut self) {
        self.insert_new += 1;
    }

    fn record_insert_update(&mut self) {
        self.insert_updates += 1;
    }

    fn record_evict_call(&mut self) {
        self.evict_calls += 1;
    }

    fn record_evicted_entry(&mut self) {
        self.evicted_entries += 1;
    }

    fn record_clear(&mut self) {
        self.clear_calls += 1;
    }
}

impl RecencyMetricsRecorder for RecencyMetrics {
    fn record_pop_lru_call(&mut self) {
        self.pop_lru_calls += 1;
    }

    fn record_pop_lru_found(&mut self) {
        self.pop_lru_found += 1;
    }

    fn record_touch_call(&mut self) {
        self.touch_calls += 1;
    }

    fn record_touch_found(&mut self) {
        self.touch_found += 1;
    }
}

impl RecencyMetricsReadRecorder for &RecencyMetrics {
    fn record_peek_call(&self) {
        self.peek_calls.incr();
    }

    fn record_peek_found(&self) {
        self.peek_found.incr();
    }

    fn record_peek_lru_call(&self) {
        self.peek_lru_calls.incr();
    }

    fn record_peek_lru_found(&self) {
        self.peek_lru_found.incr();
    }

    fn record_recency_rank_call(&self) {
        self.recency_rank_calls.incr();
    }

    fn record_recency_rank_found(&self) {
        self.recency_rank_found.incr();
    }

    fn record_recency_rank_scan_step(&self) {
        self.recency_rank_scan_steps.incr();
    }

    fn record_stats_call(&self) {
        self.stats_calls.incr();
    }
}

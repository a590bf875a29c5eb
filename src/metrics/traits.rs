//! # Metrics Trait Hierarchy
//!
//! Mirrors the cache trait design by separating *recording* from
//! *snapshotting*:
//!
//! ```text
//!   ┌─────────────────────────────┐
//!   │     CoreMetricsRecorder     │
//!   │  get_hit/get_miss/insert    │
//!   │  evict/clear                │
//!   └──────────────┬──────────────┘
//!                  │
//!                  ▼
//!   ┌─────────────────────────────┐     ┌──────────────────────────────┐
//!   │   RecencyMetricsRecorder    │     │ RecencyMetricsReadRecorder   │
//!   │  pop_lru/touch (&mut paths) │     │ peek/rank/stats (&self paths)│
//!   └─────────────────────────────┘     └──────────────────────────────┘
//!
//!   Consumption (decoupled from recording):
//!   ┌──────────────────────────────┐
//!   │ MetricsSnapshotProvider<S>   │
//!   └──────────────────────────────┘
//! ```
//!
//! Recorders only write counters; providers only read. Nothing here affects
//! cache behavior.

/// Common counters for any cache policy.
pub trait CoreMetricsRecorder {
    fn record_get_hit(&mut self);
    fn record_get_miss(&mut self);
    fn record_insert_call(&mut self);
    fn record_insert_new(&mut self);
    fn record_insert_update(&mut self);
    fn record_evict_call(&mut self);
    fn record_evicted_entry(&mut self);
    fn record_clear(&mut self);
}

/// Counters for recency-specific operations on `&mut self` paths.
pub trait RecencyMetricsRecorder: CoreMetricsRecorder {
    fn record_pop_lru_call(&mut self);
    fn record_pop_lru_found(&mut self);
    fn record_touch_call(&mut self);
    fn record_touch_found(&mut self);
}

/// Counters for recency-specific operations on `&self` read paths.
///
/// Implemented for `&RecencyMetrics` so read-only cache methods can record
/// through a shared reference.
pub trait RecencyMetricsReadRecorder {
    fn record_peek_call(&self);
    fn record_peek_found(&self);
    fn record_peek_lru_call(&self);
    fn record_peek_lru_found(&self);
    fn record_recency_rank_call(&self);
    fn record_recency_rank_found(&self);
    fn record_recency_rank_scan_step(&self);
    fn record_stats_call(&self);
}

/// Types that can export a copyable counter snapshot.
pub trait MetricsSnapshotProvider<S> {
    fn snapshot(&self) -> S;
}

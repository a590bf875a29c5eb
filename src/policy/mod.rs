//! Cache eviction policy cores.
//!
//! One policy ships today: [`recency`], a bounded cache that evicts the
//! least-recently-accessed entry.

pub mod recency;

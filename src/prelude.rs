//! Convenience re-exports for the common surface.

pub use crate::error::{ConfigError, InvariantError};
#[cfg(feature = "metrics")]
pub use crate::metrics::snapshot::RecencyMetricsSnapshot;
pub use crate::policy::recency::{BoundedRecencyCache, CacheStats, Keys};
pub use crate::traits::{CoreCache, MutableCache, RecencyCache};

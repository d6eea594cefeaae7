//! Database metrics collection.

use metrics::histogram;
use std::time::Instant;

/// Times one store operation and records its duration.
///
/// Usage:
/// ```ignore
/// let timer = QueryTimer::new("leads", "filter");
/// let result = qb.build_query_as::<LeadEntity>().fetch_all(&pool).await;
/// timer.record();
/// ```
pub struct QueryTimer {
    collection: &'static str,
    operation: &'static str,
    start: Instant,
}

impl QueryTimer {
    /// Create a new timer for the given collection and operation.
    pub fn new(collection: &'static str, operation: &'static str) -> Self {
        Self {
            collection,
            operation,
            start: Instant::now(),
        }
    }

    /// Record the elapsed duration to metrics.
    pub fn record(self) {
        let duration = self.start.elapsed().as_secs_f64();
        histogram!(
            "store_query_duration_seconds",
            "collection" => self.collection,
            "operation" => self.operation
        )
        .record(duration);
    }
}

//! In-memory request metrics registry.
//!
//! Keys are structural composites, never joined strings: an endpoint such as
//! `/api/sample_2` carries an underscore legitimately and must round-trip
//! through the registry untouched. Entries are accumulate-only for the
//! process lifetime; there is no decrement, deletion, or reset.

use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;

use dashmap::DashMap;

/// Counter key: one entry per distinct (method, endpoint, status).
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RequestKey {
    pub method: String,
    pub endpoint: String,
    pub status: u16,
}

/// Duration key: one entry per distinct (method, endpoint), all statuses.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RouteKey {
    pub method: String,
    pub endpoint: String,
}

/// Count + running sum of observed durations for one route.
///
/// The sum accumulates in integer nanoseconds so concurrent observers can use
/// plain `fetch_add`; the renderer converts to float seconds on the way out.
#[derive(Default)]
struct DurationStats {
    count: AtomicU64,
    sum_nanos: AtomicU64,
}

/// Consistent point-in-time copy of both maps, sorted by key.
///
/// Taken under the map's shard locks, then rendered lock-free so a `/metrics`
/// scrape never blocks in-flight increments during string formatting.
pub(crate) struct Snapshot {
    pub(crate) requests: Vec<(RequestKey, u64)>,
    pub(crate) durations: Vec<(RouteKey, u64, u64)>,
}

/// Process-wide request metrics.
///
/// Constructed explicitly and passed by reference into the HTTP layer, so
/// tests can instantiate independent registries. Thread-safe: `record` may be
/// called from arbitrarily many concurrent callers without lost updates, and
/// `render` may interleave with them freely.
#[derive(Default)]
pub struct RequestMetrics {
    requests: DashMap<RequestKey, AtomicU64>,
    durations: DashMap<RouteKey, DurationStats>,
}

impl RequestMetrics {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record one completed request.
    ///
    /// Never fails: label values are accepted verbatim (empty strings,
    /// separator characters, anything the HTTP layer hands over). A metrics
    /// write must never be able to break the response path.
    pub fn record(&self, method: &str, endpoint: &str, status: u16, elapsed: Duration) {
        let key = RequestKey {
            method: method.to_string(),
            endpoint: endpoint.to_string(),
            status,
        };
        self.requests
            .entry(key)
            .or_insert_with(|| AtomicU64::new(0))
            .fetch_add(1, Ordering::Relaxed);

        let key = RouteKey {
            method: method.to_string(),
            endpoint: endpoint.to_string(),
        };
        let stats = self.durations.entry(key).or_insert_with(DurationStats::default);
        stats.count.fetch_add(1, Ordering::Relaxed);
        stats.sum_nanos.fetch_add(elapsed.as_nanos() as u64, Ordering::Relaxed);
    }

    /// Render the current state in Prometheus text exposition format.
    ///
    /// Pure read. Output is sorted by key, so repeated calls with no
    /// intervening `record` yield byte-identical strings.
    pub fn render(&self) -> String {
        super::exposition::render(&self.snapshot())
    }

    fn snapshot(&self) -> Snapshot {
        let mut requests: Vec<(RequestKey, u64)> = self
            .requests
            .iter()
            .map(|r| (r.key().clone(), r.value().load(Ordering::Relaxed)))
            .collect();
        requests.sort();

        let mut durations: Vec<(RouteKey, u64, u64)> = self
            .durations
            .iter()
            .map(|r| {
                (
                    r.key().clone(),
                    r.value().count.load(Ordering::Relaxed),
                    r.value().sum_nanos.load(Ordering::Relaxed),
                )
            })
            .collect();
        durations.sort();

        Snapshot { requests, durations }
    }
}

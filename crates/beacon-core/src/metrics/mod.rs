//! Request metrics: registry plus text exposition.
//!
//! No external metrics crates are used; counters and duration accumulators
//! are atomics backed by `DashMap`, and the `/metrics` body is produced by a
//! small renderer over a sorted snapshot. The HTTP layer feeds the registry
//! one `(method, endpoint, status, elapsed)` tuple per completed request and
//! serves `render()` verbatim.

pub mod exposition;
pub mod registry;

pub use exposition::CONTENT_TYPE;
pub use registry::{RequestKey, RequestMetrics, RouteKey};

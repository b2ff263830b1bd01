//! beacon core: request metrics registry and Prometheus text exposition.
//!
//! This crate holds the only stateful component of beacon, the per-route
//! request counters and duration accumulators, plus the renderer that
//! serializes them into the Prometheus text format. It carries no transport
//! or runtime dependencies so it can be embedded in any HTTP stack.
//!
//! # Defensive guarantees
//! Panics, `unwrap`, and `expect` are compile-denied here
//! (`#![deny(clippy::panic, clippy::unwrap_used, clippy::expect_used)]`).
//! Recording metrics sits on the hot request path and must never be able to
//! break a response; both `record` and `render` are infallible by contract.

#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]

pub mod error;
pub mod metrics;

pub use error::{BeaconError, Result};
pub use metrics::RequestMetrics;

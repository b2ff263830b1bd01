//! Request instrumentation.
//!
//! The metrics registry itself lives in `beacon-core`; this module is the
//! thin middleware that feeds it from the axum request pipeline.

pub mod middleware;

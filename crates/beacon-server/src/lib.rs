//! beacon server library entry.
//!
//! This crate wires the HTTP routes, request instrumentation middleware, and
//! the WebSocket echo/chat transport around the metrics core. It is intended
//! to be consumed by the binary (`main.rs`) and by integration tests.

pub mod api;
pub mod app_state;
pub mod config;
pub mod obs;
pub mod ops;
pub mod router;
pub mod transport;

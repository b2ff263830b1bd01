//! WebSocket transport.

pub mod ws;

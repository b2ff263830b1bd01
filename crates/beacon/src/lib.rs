//! Top-level facade crate for beacon.
//!
//! Re-exports the metrics core and the server library so users can depend on
//! a single crate.

pub mod core {
    pub use beacon_core::*;
}

pub mod server {
    pub use beacon_server::*;
}

//! # nextfile-observability
//!
//! Subscriber installation and per-operation spans. The history engine only
//! emits `tracing` events; binaries embedding it call
//! [`tracing_setup::init`] once at startup.

pub mod tracing_setup;

pub use tracing_setup::init;

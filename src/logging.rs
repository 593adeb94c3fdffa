//! Logging initialization helpers.
//!
//! The engine itself emits `tracing` events and returns structured
//! [`RunEvent`](crate::engine::RunEvent)s; these helpers wire a
//! `tracing-subscriber` for embedders that want console output.

use tracing_subscriber::{fmt, EnvFilter};

/// Initializes a console subscriber.
///
/// Log level comes from `RUST_LOG` (default `info`), e.g.
/// `RUST_LOG=shift_roster=debug`.
pub fn init() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    fmt()
        .with_env_filter(filter)
        .with_target(true)
        .init();
}

/// Initializes a test subscriber at `debug`, writing through the test
/// harness. Safe to call from multiple tests.
pub fn init_test() {
    let _ = fmt()
        .with_env_filter(EnvFilter::new("debug"))
        .with_test_writer()
        .try_init();
}

//! Logging utilities and structured logging support
//!
//! The library only emits through the `log` facade. Binaries and tests that
//! want output call [`init`] (or [`try_init`]) once at startup and pick a level
//! with `RUST_LOG`, e.g. `RUST_LOG=collider2d=trace` to see every resolved pair.

pub use log::{debug, info, warn, error, trace};

/// Initialize the logging system
pub fn init() {
    env_logger::init();
}

/// Initialize the logging system, ignoring the call if a logger is already installed
///
/// Useful from tests, where many cases may race to install the logger.
pub fn try_init() {
    let _ = env_logger::builder().is_test(true).try_init();
}

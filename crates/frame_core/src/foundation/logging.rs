//! Logging utilities
//!
//! The crate logs through the `log` facade; binaries pick the backend.
//! [`init`] wires up `env_logger` so `RUST_LOG` controls verbosity.

pub use log::{debug, error, info, trace, warn, LevelFilter};

/// Initialize the logging system from `RUST_LOG`, defaulting to `info`
///
/// Calling this more than once is harmless; later calls are ignored.
pub fn init() {
    let env = env_logger::Env::default().default_filter_or("info");
    if env_logger::Builder::from_env(env).try_init().is_err() {
        log::debug!("Logger already initialized");
    }
}

/// Initialize the logging system with a fixed level, ignoring `RUST_LOG`
pub fn init_with_level(level: LevelFilter) {
    if env_logger::Builder::new()
        .filter_level(level)
        .try_init()
        .is_err()
    {
        log::debug!("Logger already initialized");
    }
}

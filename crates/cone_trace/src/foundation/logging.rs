//! Logging utilities and structured logging support
//!
//! The library only emits through the `log` facade. Binaries pick the backend.

pub use log::{debug, info, warn, error, trace};

/// Initialize the logging system from `RUST_LOG`
pub fn init() {
    env_logger::init();
}

/// Initialize the logging system with a default filter, still overridable by
/// `RUST_LOG`. Safe to call more than once; later calls are ignored.
pub fn init_with_level(level: &str) {
    let env = env_logger::Env::default().default_filter_or(level);
    let _ = env_logger::Builder::from_env(env).try_init();
}

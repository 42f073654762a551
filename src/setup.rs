//! One-time host setup.

use std::sync::Once;

static INIT: Once = Once::new();

/// Performs process-wide setup before the first run.
///
/// Installs the `env_logger` logger (filter from `RUST_LOG`, default `info`).
/// Safe to call repeatedly and a no-op if the host already installed a logger.
pub fn initialize() {
    INIT.call_once(|| {
        let installed = env_logger::Builder::from_env(
            env_logger::Env::default().default_filter_or("info"),
        )
        .try_init();

        if installed.is_err() {
            log::debug!("Logger already installed by host");
        }
    });
}

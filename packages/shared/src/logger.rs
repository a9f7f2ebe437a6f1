//! Process-wide logging setup.
//!
//! Library code only emits `tracing` events. Binaries call [`setup_logger`]
//! once at startup to install the subscriber.

use tracing_subscriber::EnvFilter;

/// Build the filter directive used when `RUST_LOG` is not set.
///
/// The crate named after the binary and the kitchen crate log at `level`;
/// noisy dependencies are capped at `warn`.
pub fn default_directive(bin_name: &str, level: &str) -> String {
    let target = bin_name.replace('-', "_");
    format!("{level},{target}={level},mealmax_kitchen={level},sqlx=warn,reqwest=warn,hyper=warn")
}

/// Install a fmt subscriber filtered by `RUST_LOG`, falling back to `level`.
///
/// Calling this more than once is harmless; later calls are ignored.
pub fn setup_logger(bin_name: &str, level: &str) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directive(bin_name, level)));

    let installed = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_level(true)
        .try_init();
    if let Err(e) = installed {
        // The subscriber from the first call stays in place.
        tracing::debug!(error = %e, "Logger already initialized");
    }
}

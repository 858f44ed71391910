//! Logging setup.

use tracing_subscriber::EnvFilter;

/// Environment variable holding the log filter.
pub const LOG_ENV: &str = "RNLINK_LOG";

/// Installs a stderr subscriber.
///
/// `RNLINK_LOG` takes precedence; otherwise the level is `debug` when
/// `verbose` is set and `info` when not. A subscriber that is already
/// installed is left in place.
pub fn init(verbose: bool) {
    let default_level = if verbose { "debug" } else { "info" };
    let filter =
        EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(default_level));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

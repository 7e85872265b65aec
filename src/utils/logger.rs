use std::sync::Once;
use tracing_subscriber::EnvFilter;

static INIT: Once = Once::new();

/// Environment variable holding the log filter, e.g. `LOGLEVEL=debug`
pub const LOG_LEVEL_ENV: &str = "LOGLEVEL";

/// Installs a global `tracing` subscriber
///
/// The filter is read from `LOGLEVEL` (any `EnvFilter` directive, default `info`).
/// Safe to call more than once; only the first call has an effect.
pub fn setup_logger() {
    INIT.call_once(|| {
        let filter = std::env::var(LOG_LEVEL_ENV)
            .ok()
            .and_then(|level| EnvFilter::try_new(level.to_lowercase()).ok())
            .unwrap_or_else(|| EnvFilter::new("info"));

        let _ = tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(false)
            .try_init();
    });
}

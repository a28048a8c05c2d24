use tracing_subscriber::EnvFilter;

/// Environment variable holding the log filter (`EnvFilter` syntax)
pub const LOG_ENV: &str = "JUMBLE_LOG";

/// Install the fmt subscriber. Defaults to `info` when `JUMBLE_LOG` is unset
/// or invalid; later calls are no-ops.
pub fn init_tracing() {
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("info"));
    let _ = tracing_subscriber::fmt().with_env_filter(filter).try_init();
}

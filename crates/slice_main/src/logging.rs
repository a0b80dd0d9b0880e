use tracing_subscriber::EnvFilter;

const LOG_FILTER_VAR: &str = "SLICE_LOG";

/// Sends diagnostics to standard error, keeping standard output for the
/// extracted bytes. `SLICE_LOG` takes precedence over `debug`.
pub fn init_tracing(debug: bool) {
    let fallback = if debug { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_env(LOG_FILTER_VAR).unwrap_or_else(|_| EnvFilter::new(fallback));

    // Only fails when a global subscriber is already installed.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .with_target(false)
        .without_time()
        .try_init();
}

use tracing_subscriber::{EnvFilter, fmt};

/// Install the stderr tracing subscriber.
///
/// `RUST_LOG` wins when set; otherwise `debug` if verbose, else `warn`.
pub fn init(verbose: bool) {
    let fallback = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(fallback));

    // Already installed.
    let _ = fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

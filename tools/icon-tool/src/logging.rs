use tracing_subscriber::EnvFilter;

/// Initialise logging to stderr. The default level is `info`; `verbose`
/// raises it to `debug` and lets `RUST_LOG` override the level.
pub fn init(verbose: bool) {
    // RUST_LOG is only honored with --verbose.
    let filter = if verbose {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug"))
    } else {
        EnvFilter::new("info")
    };

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}

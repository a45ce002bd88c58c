use tracing_subscriber::{EnvFilter, fmt, prelude::*};

/// Install the global subscriber: `RUST_LOG`-style filtering with an `info`
/// default, human-readable output on stderr.
pub fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let stderr_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_ansi(true)
        .with_target(false);

    tracing_subscriber::registry()
        .with(filter)
        .with(stderr_layer)
        .init();
}

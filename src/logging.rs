use tracing_subscriber::EnvFilter;

const DEFAULT_FILTER: &str = "warn";

/// Diagnostics go to stderr so stdout carries only the normalized text.
pub fn init() {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

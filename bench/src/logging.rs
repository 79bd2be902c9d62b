//! Tracing configuration
//!
//! The filter is taken from `DECLENUM_LOG`, falling back to `RUST_LOG`,
//! and defaults to `info`.  Output goes to stderr,
//! alongside the progress bar.

use tracing_subscriber::EnvFilter;

const LOG_VAR: &str = "DECLENUM_LOG";

fn build_filter() -> EnvFilter {
    if let Ok(val) = std::env::var(LOG_VAR) {
        EnvFilter::builder().parse_lossy(val)
    } else if std::env::var("RUST_LOG").is_ok() {
        EnvFilter::from_default_env()
    } else {
        EnvFilter::new("info")
    }
}

/// Initialise the global tracing subscriber.
pub fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(build_filter())
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

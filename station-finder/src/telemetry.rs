//! Log output setup shared by both binaries.

use tracing_subscriber::EnvFilter;

/// Install a formatted tracing subscriber.
///
/// Verbosity comes from `RUST_LOG`, defaulting to `info`.
pub fn init() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt().with_env_filter(filter).init();
}

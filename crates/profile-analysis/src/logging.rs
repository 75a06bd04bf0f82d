// File: crates/profile-analysis/src/logging.rs
// Summary: tracing-subscriber setup shared by the analysis binaries.

use tracing_subscriber::EnvFilter;

/// Log to stderr at `info` (`debug` when `verbose`); `RUST_LOG` takes precedence.
pub fn init_tracing(verbose: bool) {
    let default = if verbose { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    // a second init (e.g. from tests) keeps the first subscriber
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}

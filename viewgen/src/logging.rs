//! Log output setup.
//!
//! Logs go to stderr so that stdout only carries rendered documents.

use tracing_subscriber::EnvFilter;

/// Install the global subscriber.
///
/// `-v` selects `debug`, `-vv` and above select `trace`. Without `-v` the
/// filter comes from `RUST_LOG`, falling back to `warn`.
pub fn init(verbose: u8) {
    let filter = match verbose {
        0 => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        1 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

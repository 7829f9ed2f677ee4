//! Diagnostic logging to stderr.
//!
//! The default filter is `warn` so a normal run prints nothing besides its
//! summary line. Set `RUST_LOG=debug` to trace each file read and write.

use tracing_subscriber::{fmt, prelude::*, EnvFilter, Registry};

const DEFAULT_FILTER: &str = "warn";

/// Install the global subscriber. A second call is a no-op.
pub fn init() {
    let layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false);
    let subscriber = Registry::default().with(build_env_filter()).with(layer);
    // an already-installed subscriber wins
    let _ = tracing::subscriber::set_global_default(subscriber);
}

fn build_env_filter() -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn init_twice_does_not_panic() {
        init();
        init();
    }
}

//! Logging setup for the `roster` binary.
//!
//! Logs go to stderr so stdout only ever carries the rendered directory.

use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

/// Installs the global subscriber. `level` is an `EnvFilter` directive
/// (`warn`, `debug`, `rusty_roster=trace`, ...); an unparsable directive
/// falls back to `warn`.
pub fn init_tracing(level: &str) {
    let filter = EnvFilter::try_new(level).unwrap_or_else(|_| EnvFilter::new("warn"));

    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_writer(std::io::stderr),
        )
        .try_init();

    tracing::debug!(level, "tracing initialized");
}

//! Diagnostic logging setup

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer};

/// Default filter when `RUST_LOG` is unset
pub const DEFAULT_FILTER: &str = "warn";

/// Initialize the tracing subscriber.
///
/// Logs go to stderr, filtered by `RUST_LOG` (defaults to WARN when unset),
/// so that the scheduler's journal picks them up and stdout stays clean.
pub fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false)
                .with_filter(filter),
        )
        .init();
}

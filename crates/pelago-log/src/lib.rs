//! Structured logging for the planet generator.
//!
//! Console logging via the `tracing` ecosystem, with environment-based
//! filtering and an optional level override from the CLI.

use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Default filter when neither `RUST_LOG` nor a CLI level is set.
const DEFAULT_FILTER: &str = "info";

/// Initialize the tracing subscriber.
///
/// Filter precedence: the `RUST_LOG` environment variable wins, then
/// the explicit `log_level` override, then `info`. Safe to call once
/// at process start; a second call would fail to install and is not
/// supported.
pub fn init_logging(log_level: Option<&str>) {
    let fallback = log_level.unwrap_or(DEFAULT_FILTER);
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(fallback));

    let console_layer = fmt::layer()
        .with_target(true)
        .with_level(true)
        .with_timer(fmt::time::uptime());

    tracing_subscriber::registry()
        .with(env_filter)
        .with(console_layer)
        .init();
}

/// An `EnvFilter` with the default filter string, for tests and for
/// consistent defaults.
#[must_use]
pub fn default_env_filter() -> EnvFilter {
    EnvFilter::new(DEFAULT_FILTER)
}

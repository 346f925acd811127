//! Diagnostic logging setup.
//!
//! Console report lines are printed by the reporter; this only covers the
//! `tracing` events emitted while resolving settings and launching processes.

use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Environment variable holding the log filter directives.
pub const LOG_ENV: &str = "E2E_RUNNER_LOG";

/// Initializes stderr logging. Defaults to warnings only.
///
/// Calling it twice is harmless; the second subscriber is ignored.
pub fn init() {
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("warn"));

    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false)
                .compact(),
        )
        .try_init();
}

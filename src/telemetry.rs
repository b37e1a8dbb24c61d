//! Tracing subscriber bootstrap for hosts and tests.
//!
//! The library only emits `tracing` events; installing a subscriber is
//! the host's choice. `init_tracing` is a convenience for hosts that
//! want the default formatted output.

use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

use crate::error::TelemetryError;

/// Environment variable holding the filter directive.
pub const LOG_ENV: &str = "STAFFGRID_LOG";

/// Installs a global fmt subscriber.
///
/// The filter comes from `STAFFGRID_LOG`, falling back to
/// `default_filter` (e.g. `"u_staffgrid=info"`).
///
/// # Errors
/// Returns an error if the directive is invalid or a global subscriber
/// is already installed.
pub fn init_tracing(default_filter: &str) -> Result<(), TelemetryError> {
    let filter = match std::env::var(LOG_ENV) {
        Ok(directive) if !directive.trim().is_empty() => EnvFilter::try_new(directive),
        _ => EnvFilter::try_new(default_filter),
    }?;

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .finish()
        .try_init()?;
    Ok(())
}

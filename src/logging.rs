//! Log output for native binaries and tests.
//!
//! The library itself only emits `tracing` events. Installing a subscriber is
//! up to the application; [`init`] is a convenience for the common case.

use tracing_subscriber::filter::ParseError;
use tracing_subscriber::EnvFilter;

/// Why a subscriber could not be installed.
#[derive(Debug, thiserror::Error)]
pub enum LoggingError {
    /// The fallback filter directive did not parse.
    #[error("invalid log filter: {0}")]
    Filter(#[from] ParseError),

    /// A global subscriber is already installed.
    #[error("failed to install subscriber: {0}")]
    Install(String),
}

/// Install a global `fmt` subscriber.
///
/// `RUST_LOG` takes precedence when set and valid; otherwise `filter` is
/// used, e.g. `"flowdom=debug"`. Fails if a subscriber is already installed.
pub fn init(filter: &str) -> Result<(), LoggingError> {
    let filter = match EnvFilter::try_from_default_env() {
        Ok(from_env) => from_env,
        Err(_) => EnvFilter::try_new(filter)?,
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .try_init()
        .map_err(|err| LoggingError::Install(err.to_string()))
}

//! Tracing subscriber setup.

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::LogLevel;
use crate::{CliError, Result};

/// Installs the global subscriber.
///
/// `RUST_LOG` takes precedence over `level`. Events go to stderr so command
/// output on stdout stays machine-readable.
pub fn init_tracing(level: LogLevel) -> Result<()> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(level.as_filter_str()));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false),
        )
        .try_init()
        .map_err(|e| CliError::Config(format!("failed to initialise logging: {}", e)))
}

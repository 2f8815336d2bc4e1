//! CLI error types.

use pricer_core::types::PricingError;
use pricer_models::greeks::GreeksConfigError;
use thiserror::Error;

/// Errors surfaced by `bsm` commands.
#[derive(Debug, Error)]
pub enum CliError {
    /// User input outside the accepted bounds.
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// Configuration file or environment could not be used.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Pricing or Greeks evaluation failed.
    #[error(transparent)]
    Pricing(#[from] PricingError),

    /// Greeks configuration rejected.
    #[error(transparent)]
    Greeks(#[from] GreeksConfigError),

    /// Output could not be serialised.
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Result type for CLI operations.
pub type Result<T> = std::result::Result<T, CliError>;

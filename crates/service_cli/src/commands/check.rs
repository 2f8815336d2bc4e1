//! Check command implementation
//!
//! Validates the resolved configuration and prints it back as TOML.

use pricer_core::types::OptionKind;
use pricer_models::analytical::BlackScholes;
use pricer_models::greeks::SensitivityEngine;
use tracing::info;

use crate::config::CliConfig;
use crate::{CliError, Result};

/// Run the check command
pub fn run(config: &CliConfig) -> Result<String> {
    config.validate()?;

    // Smoke-test the configured engine on the default market.
    let engine = SensitivityEngine::new(BlackScholes::new(), config.greeks)?;
    let spec = config.market.to_spec(OptionKind::Call)?;
    let greeks = engine.compute_all(&spec)?;
    info!(?greeks, "configuration check passed");

    let resolved = toml::to_string_pretty(config)
        .map_err(|e| CliError::Config(format!("failed to render configuration: {}", e)))?;

    Ok(format!("Configuration OK\n\n{}", resolved.trim_end()))
}

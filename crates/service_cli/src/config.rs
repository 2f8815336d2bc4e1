//! CLI configuration management
//!
//! Handles loading configuration from TOML files, environment variables
//! and command-line flags.

use std::path::{Path, PathBuf};
use std::str::FromStr;

use pricer_core::types::{OptionKind, OptionSpec};
use pricer_models::greeks::GreeksConfig;
use serde::{Deserialize, Serialize};

use crate::error::{CliError, Result};

/// Environment variable overriding the log level.
pub const ENV_LOG_LEVEL: &str = "BSM_LOG_LEVEL";

/// Environment variable overriding the finite-difference step.
pub const ENV_EPSILON: &str = "BSM_EPSILON";

/// Smallest accepted maturity, in years.
pub const MIN_MATURITY: f64 = 0.01;
/// Smallest accepted volatility.
pub const MIN_VOLATILITY: f64 = 0.01;

/// Log levels supported by the CLI
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Trace,
    Debug,
    Info,
    #[default]
    Warn,
    Error,
}

impl FromStr for LogLevel {
    type Err = CliError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "trace" => Ok(LogLevel::Trace),
            "debug" => Ok(LogLevel::Debug),
            "info" => Ok(LogLevel::Info),
            "warn" => Ok(LogLevel::Warn),
            "error" => Ok(LogLevel::Error),
            _ => Err(CliError::Config(format!(
                "invalid log level: {}. Must be one of: trace, debug, info, warn, error",
                s
            ))),
        }
    }
}

impl LogLevel {
    /// Convert log level to tracing filter string
    pub fn as_filter_str(&self) -> &'static str {
        match self {
            LogLevel::Trace => "trace",
            LogLevel::Debug => "debug",
            LogLevel::Info => "info",
            LogLevel::Warn => "warn",
            LogLevel::Error => "error",
        }
    }
}

impl std::fmt::Display for LogLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_filter_str())
    }
}

/// Default market inputs, `[market]` in the config file.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MarketConfig {
    /// Spot price of the underlying
    pub spot: f64,
    /// Strike price
    pub strike: f64,
    /// Time to maturity in years
    pub maturity: f64,
    /// Risk-free rate
    pub rate: f64,
    /// Annualised volatility
    pub volatility: f64,
}

impl Default for MarketConfig {
    fn default() -> Self {
        Self {
            spot: 100.0,
            strike: 100.0,
            maturity: 1.0,
            rate: 0.03,
            volatility: 0.20,
        }
    }
}

impl MarketConfig {
    /// Checks the input bounds accepted by the CLI.
    ///
    /// Spot and strike must be positive, maturity and volatility at least
    /// 0.01, and the rate non-negative.
    pub fn validate(&self) -> Result<()> {
        let checks = [
            ("spot", self.spot, self.spot > 0.0, "> 0"),
            ("strike", self.strike, self.strike > 0.0, "> 0"),
            (
                "maturity",
                self.maturity,
                self.maturity >= MIN_MATURITY,
                ">= 0.01",
            ),
            (
                "volatility",
                self.volatility,
                self.volatility >= MIN_VOLATILITY,
                ">= 0.01",
            ),
            ("rate", self.rate, self.rate >= 0.0, ">= 0"),
        ];

        for (name, value, ok, bound) in checks {
            if !value.is_finite() || !ok {
                return Err(CliError::InvalidArgument(format!(
                    "{} must be {}, got {}",
                    name, bound, value
                )));
            }
        }
        Ok(())
    }

    /// Builds the option spec for `kind`.
    pub fn to_spec(&self, kind: OptionKind) -> Result<OptionSpec> {
        self.validate()?;
        Ok(OptionSpec::new(
            self.spot,
            self.strike,
            self.maturity,
            self.rate,
            self.volatility,
            kind,
        )?)
    }

    /// Applies per-field overrides (CLI takes precedence).
    pub fn merge(&mut self, overrides: &MarketOverrides) {
        if let Some(spot) = overrides.spot {
            self.spot = spot;
        }
        if let Some(strike) = overrides.strike {
            self.strike = strike;
        }
        if let Some(maturity) = overrides.maturity {
            self.maturity = maturity;
        }
        if let Some(rate) = overrides.rate {
            self.rate = rate;
        }
        if let Some(volatility) = overrides.volatility {
            self.volatility = volatility;
        }
    }
}

/// Optional market inputs given on the command line.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct MarketOverrides {
    /// Spot override
    pub spot: Option<f64>,
    /// Strike override
    pub strike: Option<f64>,
    /// Maturity override
    pub maturity: Option<f64>,
    /// Rate override
    pub rate: Option<f64>,
    /// Volatility override
    pub volatility: Option<f64>,
}

/// CLI configuration structure
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CliConfig {
    /// Log level
    #[serde(deserialize_with = "deserialize_log_level")]
    pub log_level: LogLevel,
    /// Default market inputs
    pub market: MarketConfig,
    /// Greeks calculation settings
    pub greeks: GreeksConfig,
}

fn deserialize_log_level<'de, D>(deserializer: D) -> std::result::Result<LogLevel, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let s = String::deserialize(deserializer)?;
    LogLevel::from_str(&s).map_err(serde::de::Error::custom)
}

impl CliConfig {
    /// Load configuration from a TOML file
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            CliError::Config(format!("failed to read {}: {}", path.display(), e))
        })?;
        Self::from_toml(&content)
    }

    /// Parse configuration from TOML text
    pub fn from_toml(content: &str) -> Result<Self> {
        let config: CliConfig = toml::from_str(content)
            .map_err(|e| CliError::Config(format!("failed to parse TOML: {}", e)))?;
        config.validate()?;
        Ok(config)
    }

    /// Applies environment overrides read through `lookup`.
    pub fn apply_env<F>(&mut self, lookup: F) -> Result<()>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(level) = lookup(ENV_LOG_LEVEL) {
            self.log_level = LogLevel::from_str(&level)?;
        }
        if let Some(eps) = lookup(ENV_EPSILON) {
            self.greeks.epsilon = eps.trim().parse().map_err(|_| {
                CliError::Config(format!("{} is not a number: {}", ENV_EPSILON, eps))
            })?;
        }
        Ok(())
    }

    /// Merge with CLI arguments (CLI takes precedence)
    pub fn merge_with_cli(&mut self, cli: &CliArgs) -> Result<()> {
        if let Some(level) = &cli.log_level {
            self.log_level = LogLevel::from_str(level)?;
        }
        Ok(())
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<()> {
        self.market.validate()?;
        self.greeks.validate()?;
        Ok(())
    }
}

/// Global CLI arguments relevant to configuration
#[derive(Debug, Clone, Default)]
pub struct CliArgs {
    /// Config file path
    pub config_file: Option<PathBuf>,
    /// Log level override
    pub log_level: Option<String>,
}

/// Build configuration from all sources
///
/// Priority (highest to lowest):
/// 1. CLI arguments
/// 2. Environment variables
/// 3. Config file
/// 4. Default values
pub fn build_config(cli: &CliArgs) -> Result<CliConfig> {
    build_config_with_env(cli, |key| std::env::var(key).ok())
}

/// [`build_config`] with an explicit environment lookup.
pub fn build_config_with_env<F>(cli: &CliArgs, lookup: F) -> Result<CliConfig>
where
    F: Fn(&str) -> Option<String>,
{
    let mut config = match &cli.config_file {
        Some(path) => CliConfig::from_file(path)?,
        None => CliConfig::default(),
    };

    config.apply_env(lookup)?;
    config.merge_with_cli(cli)?;

    config.validate()?;
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pricer_models::greeks::{DifferenceScheme, GreeksMode};
    use std::collections::HashMap;

    fn env(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| map.get(key).cloned()
    }

    #[test]
    fn test_default_config() {
        let config = CliConfig::default();
        assert_eq!(config.log_level, LogLevel::Warn);
        assert_eq!(config.market, MarketConfig::default());
        assert_eq!(config.market.spot, 100.0);
        assert_eq!(config.market.volatility, 0.20);
        assert_eq!(config.greeks, GreeksConfig::default());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_log_level_parsing() {
        assert_eq!(LogLevel::from_str("trace").unwrap(), LogLevel::Trace);
        assert_eq!(LogLevel::from_str("DEBUG").unwrap(), LogLevel::Debug);
        assert_eq!(LogLevel::from_str("Info").unwrap(), LogLevel::Info);
        assert!(LogLevel::from_str("verbose").is_err());
    }

    #[test]
    fn test_from_toml_partial() {
        let config = CliConfig::from_toml(
            r#"
            log_level = "debug"

            [market]
            spot = 120.0
            volatility = 0.35

            [greeks]
            epsilon = 1e-4
            scheme = "central"
            "#,
        )
        .unwrap();

        assert_eq!(config.log_level, LogLevel::Debug);
        assert_eq!(config.market.spot, 120.0);
        assert_eq!(config.market.strike, 100.0);
        assert_eq!(config.market.volatility, 0.35);
        assert_eq!(config.greeks.epsilon, 1e-4);
        assert_eq!(config.greeks.scheme, DifferenceScheme::Central);
        assert_eq!(config.greeks.mode, GreeksMode::BumpRevalue);
    }

    #[test]
    fn test_from_toml_rejects_bad_values() {
        assert!(matches!(
            CliConfig::from_toml("[market]\nmaturity = 0.001\n"),
            Err(CliError::InvalidArgument(_))
        ));
        assert!(matches!(
            CliConfig::from_toml("[greeks]\nepsilon = 0.0\n"),
            Err(CliError::Greeks(_))
        ));
        assert!(matches!(
            CliConfig::from_toml("log_level = \"loud\"\n"),
            Err(CliError::Config(_))
        ));
    }

    #[test]
    fn test_market_bounds() {
        let ok = MarketConfig {
            rate: 0.0,
            maturity: MIN_MATURITY,
            volatility: MIN_VOLATILITY,
            ..MarketConfig::default()
        };
        assert!(ok.validate().is_ok());

        let bad = [
            MarketConfig { spot: 0.0, ..ok },
            MarketConfig { strike: -1.0, ..ok },
            MarketConfig { maturity: 0.005, ..ok },
            MarketConfig { volatility: 0.0, ..ok },
            MarketConfig { rate: -0.01, ..ok },
            MarketConfig { spot: f64::NAN, ..ok },
        ];
        for market in bad {
            assert!(matches!(
                market.validate(),
                Err(CliError::InvalidArgument(_))
            ));
        }
    }

    #[test]
    fn test_market_merge() {
        let mut market = MarketConfig::default();
        market.merge(&MarketOverrides {
            strike: Some(110.0),
            rate: Some(0.0),
            ..MarketOverrides::default()
        });
        assert_eq!(market.spot, 100.0);
        assert_eq!(market.strike, 110.0);
        assert_eq!(market.rate, 0.0);

        let spec = market.to_spec(OptionKind::Put).unwrap();
        assert_eq!(spec.strike(), 110.0);
        assert_eq!(spec.kind(), OptionKind::Put);
    }

    #[test]
    fn test_priority_cli_over_env() {
        let cli = CliArgs {
            config_file: None,
            log_level: Some("error".to_string()),
        };
        let config = build_config_with_env(
            &cli,
            env(&[(ENV_LOG_LEVEL, "debug"), (ENV_EPSILON, "0.001")]),
        )
        .unwrap();

        assert_eq!(config.log_level, LogLevel::Error);
        assert_eq!(config.greeks.epsilon, 0.001);
    }

    #[test]
    fn test_env_validation() {
        let cli = CliArgs::default();
        assert!(build_config_with_env(&cli, env(&[(ENV_EPSILON, "tiny")])).is_err());
        assert!(matches!(
            build_config_with_env(&cli, env(&[(ENV_EPSILON, "0.5")])),
            Err(CliError::Greeks(_))
        ));
    }

    #[test]
    fn test_missing_config_file() {
        let cli = CliArgs {
            config_file: Some(PathBuf::from("/nonexistent/bsm.toml")),
            log_level: None,
        };
        assert!(matches!(
            build_config_with_env(&cli, env(&[])),
            Err(CliError::Config(_))
        ));
    }
}

//! CLI command implementations
//!
//! Each submodule implements a specific CLI command. Commands render their
//! output to a `String`; `main` prints it.

use clap::Args;

use crate::config::{CliConfig, MarketConfig, MarketOverrides};
use crate::Result;

pub mod check;
pub mod payoff;
pub mod price;

/// Market inputs shared by `price` and `payoff`.
///
/// Unset flags fall back to the `[market]` section of the configuration.
#[derive(Debug, Clone, Default, Args)]
pub struct MarketArgs {
    /// Spot price of the underlying (> 0)
    #[arg(short, long)]
    pub spot: Option<f64>,

    /// Strike price (> 0)
    #[arg(short = 'k', long)]
    pub strike: Option<f64>,

    /// Time to maturity in years (>= 0.01)
    #[arg(short = 't', long)]
    pub maturity: Option<f64>,

    /// Risk-free rate, e.g. 0.03 for 3% (>= 0)
    #[arg(short, long)]
    pub rate: Option<f64>,

    /// Volatility, e.g. 0.2 for 20% (>= 0.01)
    #[arg(short, long, alias = "vol")]
    pub volatility: Option<f64>,
}

impl MarketArgs {
    fn overrides(&self) -> MarketOverrides {
        MarketOverrides {
            spot: self.spot,
            strike: self.strike,
            maturity: self.maturity,
            rate: self.rate,
            volatility: self.volatility,
        }
    }

    /// Configured market inputs with these flags applied, validated.
    pub fn resolve(&self, config: &CliConfig) -> Result<MarketConfig> {
        let mut market = config.market;
        market.merge(&self.overrides());
        market.validate()?;
        Ok(market)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::CliError;

    #[test]
    fn test_resolve_uses_config_defaults() {
        let market = MarketArgs::default().resolve(&CliConfig::default()).unwrap();
        assert_eq!(market, MarketConfig::default());
    }

    #[test]
    fn test_resolve_rejects_out_of_bounds() {
        let args = MarketArgs {
            volatility: Some(0.001),
            ..MarketArgs::default()
        };
        assert!(matches!(
            args.resolve(&CliConfig::default()),
            Err(CliError::InvalidArgument(_))
        ));
    }
}

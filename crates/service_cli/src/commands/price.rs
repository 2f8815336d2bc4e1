//! Price command implementation
//!
//! Values the call and the put on the same market inputs and reports the
//! price together with the five Greeks.

use clap::{Args, ValueEnum};
use pricer_core::types::OptionKind;
use pricer_models::analytical::BlackScholes;
use pricer_models::greeks::{DifferenceScheme, GreeksConfig, GreeksMode, SensitivityEngine};
use pricer_models::valuation::{value_call_and_put, OptionValuation};
use serde::Serialize;
use tracing::info;

use super::MarketArgs;
use crate::config::{CliConfig, MarketConfig};
use crate::Result;

/// Output format of the `price` command.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum PriceFormat {
    /// Two-column text table
    Table,
    /// Pretty-printed JSON
    Json,
}

/// Arguments of the `price` command.
#[derive(Debug, Clone, Args)]
pub struct PriceArgs {
    #[command(flatten)]
    pub market: MarketArgs,

    /// Finite-difference step (0 < epsilon <= 0.1)
    #[arg(short, long)]
    pub epsilon: Option<f64>,

    /// Difference scheme (forward, central)
    #[arg(long)]
    pub scheme: Option<DifferenceScheme>,

    /// Use closed-form Greeks instead of bump-and-revalue
    #[arg(long)]
    pub analytical: bool,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = PriceFormat::Table)]
    pub format: PriceFormat,
}

#[derive(Debug, Serialize)]
struct PriceReport {
    market: MarketConfig,
    greeks_config: GreeksConfig,
    call: OptionValuation,
    put: OptionValuation,
}

/// Greeks settings from the configuration with the command flags applied.
pub fn resolve_greeks(config: &CliConfig, args: &PriceArgs) -> Result<GreeksConfig> {
    let mode = if args.analytical {
        GreeksMode::Analytical
    } else {
        config.greeks.mode
    };

    let greeks = GreeksConfig::builder()
        .mode(mode)
        .epsilon(args.epsilon.unwrap_or(config.greeks.epsilon))
        .scheme(args.scheme.unwrap_or(config.greeks.scheme))
        .build()?;
    Ok(greeks)
}

/// Run the price command
pub fn run(config: &CliConfig, args: &PriceArgs) -> Result<String> {
    let market = args.market.resolve(config)?;
    let greeks_config = resolve_greeks(config, args)?;

    info!(
        spot = market.spot,
        strike = market.strike,
        maturity = market.maturity,
        rate = market.rate,
        volatility = market.volatility,
        mode = %greeks_config.mode,
        scheme = %greeks_config.scheme,
        epsilon = greeks_config.epsilon,
        "pricing call and put"
    );

    let engine = SensitivityEngine::new(BlackScholes::new(), greeks_config)?;
    let spec = market.to_spec(OptionKind::Call)?;
    let (call, put) = value_call_and_put(&engine, &spec)?;

    match args.format {
        PriceFormat::Table => Ok(render_table(&market, &greeks_config, &call, &put)),
        PriceFormat::Json => {
            let report = PriceReport {
                market,
                greeks_config,
                call,
                put,
            };
            Ok(serde_json::to_string_pretty(&report)?)
        }
    }
}

fn render_table(
    market: &MarketConfig,
    greeks: &GreeksConfig,
    call: &OptionValuation,
    put: &OptionValuation,
) -> String {
    let method = match greeks.mode {
        GreeksMode::Analytical => "closed form".to_string(),
        GreeksMode::BumpRevalue => {
            format!("{} difference, eps={:e}", greeks.scheme, greeks.epsilon)
        }
    };

    let mut lines = vec![
        format!(
            "S={:.2}  K={:.2}  T={:.2}y  r={:.2}%  vol={:.2}%",
            market.spot,
            market.strike,
            market.maturity,
            market.rate * 100.0,
            market.volatility * 100.0
        ),
        format!("Greeks: {}", method),
        String::new(),
        format!("{:<8}{:>14}{:>14}", "", "Call", "Put"),
        format!(
            "{:<8}{:>14}{:>14}",
            "Price",
            format!("${:.2}", call.price),
            format!("${:.2}", put.price)
        ),
    ];

    let rows = [
        ("Delta", call.greeks.delta, put.greeks.delta),
        ("Gamma", call.greeks.gamma, put.greeks.gamma),
        ("Theta", call.greeks.theta, put.greeks.theta),
        ("Vega", call.greeks.vega, put.greeks.vega),
        ("Rho", call.greeks.rho, put.greeks.rho),
    ];
    for (name, c, p) in rows {
        lines.push(format!("{:<8}{:>14.4}{:>14.4}", name, c, p));
    }

    lines.join("\n")
}

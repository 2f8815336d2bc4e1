//! Payoff command implementation
//!
//! Prices the option, then samples its profit-and-loss at expiry around
//! the current spot.

use clap::{Args, ValueEnum};
use pricer_core::types::OptionKind;
use pricer_models::analytical::BlackScholes;
use pricer_models::payoff::{PayoffDiagram, DEFAULT_POINTS};
use tracing::{debug, info};

use super::MarketArgs;
use crate::config::{CliConfig, MarketConfig};
use crate::{CliError, Result};

/// Which option sides to chart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum KindSelection {
    /// Long call only
    Call,
    /// Long put only
    Put,
    /// Call followed by put
    Both,
}

impl KindSelection {
    fn kinds(self) -> &'static [OptionKind] {
        match self {
            KindSelection::Call => &[OptionKind::Call],
            KindSelection::Put => &[OptionKind::Put],
            KindSelection::Both => &[OptionKind::Call, OptionKind::Put],
        }
    }
}

/// Output format of the `payoff` command.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum PayoffFormat {
    /// Text table with profit/loss regions
    Table,
    /// `kind,spot,pnl` rows
    Csv,
    /// Pretty-printed JSON
    Json,
}

/// Arguments of the `payoff` command.
#[derive(Debug, Clone, Args)]
pub struct PayoffArgs {
    #[command(flatten)]
    pub market: MarketArgs,

    /// Option side to chart
    #[arg(long, value_enum, default_value_t = KindSelection::Both)]
    pub kind: KindSelection,

    /// Number of samples between 0.5x and 1.5x spot (>= 2)
    #[arg(short = 'n', long, default_value_t = DEFAULT_POINTS)]
    pub points: usize,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = PayoffFormat::Table)]
    pub format: PayoffFormat,
}

/// Builds one diagram per selected side, premium from Black-Scholes.
pub fn diagrams(market: &MarketConfig, args: &PayoffArgs) -> Result<Vec<PayoffDiagram>> {
    if args.points < 2 {
        return Err(CliError::InvalidArgument(format!(
            "points must be >= 2, got {}",
            args.points
        )));
    }

    let model = BlackScholes::new();
    args.kind
        .kinds()
        .iter()
        .map(|&kind| -> Result<PayoffDiagram> {
            let premium = model.calculate_price(&market.to_spec(kind)?)?;
            debug!(%kind, premium, "payoff premium");
            let diagram = PayoffDiagram::generate(market.spot, market.strike, premium, kind)?
                .with_range(0.5, 1.5, args.points)?;
            Ok(diagram)
        })
        .collect()
}

/// Run the payoff command
pub fn run(config: &CliConfig, args: &PayoffArgs) -> Result<String> {
    let market = args.market.resolve(config)?;
    info!(
        spot = market.spot,
        strike = market.strike,
        points = args.points,
        "generating payoff diagram"
    );

    let diagrams = diagrams(&market, args)?;

    match args.format {
        PayoffFormat::Table => Ok(diagrams
            .iter()
            .map(render_table)
            .collect::<Vec<_>>()
            .join("\n\n")),
        PayoffFormat::Csv => Ok(render_csv(&diagrams)),
        PayoffFormat::Json => Ok(serde_json::to_string_pretty(&diagrams)?),
    }
}

fn render_table(diagram: &PayoffDiagram) -> String {
    let mut lines = vec![
        format!(
            "Long {} payoff at expiry (premium ${:.2}, breakeven {:.2}, max loss {:.2}, spot {:.2})",
            diagram.kind(),
            diagram.premium(),
            diagram.breakeven(),
            diagram.max_loss(),
            diagram.spot()
        ),
        format!("{:>12}{:>12}  {}", "Spot", "P/L", "Region"),
    ];

    for point in diagram.points() {
        let region = if point.pnl >= 0.0 { "profit" } else { "loss" };
        lines.push(format!("{:>12.2}{:>12.2}  {}", point.spot, point.pnl, region));
    }
    lines.join("\n")
}

fn render_csv(diagrams: &[PayoffDiagram]) -> String {
    let mut lines = vec!["kind,spot,pnl".to_string()];
    for diagram in diagrams {
        for point in diagram.points() {
            lines.push(format!(
                "{},{:.4},{:.4}",
                diagram.kind(),
                point.spot,
                point.pnl
            ));
        }
    }
    lines.join("\n")
}

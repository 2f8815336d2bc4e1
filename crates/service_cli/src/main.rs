//! BSM CLI - Black-Scholes pricing from the command line
//!
//! # Commands
//!
//! - `bsm price` - Price a call and a put and report their Greeks
//! - `bsm payoff` - Sample the expiry P/L of a long option
//! - `bsm check` - Validate the resolved configuration
//!
//! # Example
//!
//! ```text
//! bsm price --spot 105 --volatility 0.25 --scheme central
//! bsm payoff --kind put --format csv
//! ```

use std::path::PathBuf;

use anyhow::Context;
use clap::{Parser, Subcommand};
use tracing::debug;

use service_cli::commands::{self, payoff::PayoffArgs, price::PriceArgs};
use service_cli::config::{build_config, CliArgs};
use service_cli::logging::init_tracing;

/// Black-Scholes option pricing with finite-difference Greeks
#[derive(Parser)]
#[command(name = "bsm")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Configuration file path (TOML)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, global = true)]
    log_level: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Price a European call and put and compute their Greeks
    Price(PriceArgs),

    /// Generate the profit-and-loss profile at expiry
    Payoff(PayoffArgs),

    /// Check configuration and print the resolved settings
    Check,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let args = CliArgs {
        config_file: cli.config.clone(),
        log_level: cli.log_level.clone(),
    };
    let config = build_config(&args).context("failed to load configuration")?;

    init_tracing(config.log_level)?;
    debug!(?config, "resolved configuration");

    let output = match &cli.command {
        Commands::Price(price) => commands::price::run(&config, price)?,
        Commands::Payoff(payoff) => commands::payoff::run(&config, payoff)?,
        Commands::Check => commands::check::run(&config)?,
    };

    println!("{}", output);
    Ok(())
}

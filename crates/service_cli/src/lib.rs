//! Command-line front end for Black-Scholes pricing and Greeks.
//!
//! The `bsm` binary wires the pricer crates to a clap interface:
//!
//! - `bsm price` - call and put prices with their Greeks
//! - `bsm payoff` - profit-and-loss at expiry around the current spot
//! - `bsm check` - validate and print the resolved configuration
//!
//! Configuration is layered: CLI flags over `BSM_*` environment variables
//! over a TOML file over built-in defaults.

pub mod commands;
pub mod config;
pub mod error;
pub mod logging;

pub use error::{CliError, Result};

//! # Pricer Models (L2: Business Logic)
//!
//! Black-Scholes valuation of European options and their Greeks.
//!
//! This crate provides:
//! - The closed-form Black-Scholes pricing engine
//! - Bump-and-revalue Greeks over any `PricingModel`
//! - Combined call/put valuation reports
//! - Expiry payoff diagrams
//!
//! ## Design Principles
//!
//! - **Price as the only primitive** for finite-difference Greeks
//! - **Immutable specs**: bumps build modified copies, inputs are never mutated
//! - **Builder pattern** for Greeks configuration with sensible defaults
//!
//! ## Example
//!
//! ```
//! use pricer_core::types::{OptionKind, OptionSpec};
//! use pricer_models::greeks::SensitivityEngine;
//! use pricer_models::valuation::value_call_and_put;
//!
//! let spec = OptionSpec::new(100.0, 100.0, 1.0, 0.03, 0.2, OptionKind::Call).unwrap();
//! let engine = SensitivityEngine::with_defaults();
//!
//! let (call, put) = value_call_and_put(&engine, &spec).unwrap();
//! assert!(call.price > put.price);
//! ```

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]

pub mod analytical;
pub mod greeks;
pub mod payoff;
pub mod valuation;

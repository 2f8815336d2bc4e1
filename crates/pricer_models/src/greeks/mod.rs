//! Finite-difference Greeks.
//!
//! - [`GreeksConfig`]: bump size, difference scheme and mode
//! - [`SensitivityEngine`]: bump-and-revalue over any [`PricingModel`]
//!
//! Forward differences with `ε = 1e-6` are the default. Central
//! differences and closed-form Greeks are opt-in through the config.
//!
//! [`PricingModel`]: pricer_core::traits::PricingModel

mod config;
mod engine;

pub use config::{
    DifferenceScheme, GreeksConfig, GreeksConfigBuilder, GreeksConfigError, GreeksMode,
    DEFAULT_EPSILON, MAX_EPSILON,
};
pub use engine::SensitivityEngine;

//! Analytical pricing formulas for European options.
//!
//! This module provides the closed-form Black-Scholes-Merton model:
//! - `calculate_price` for calls and puts
//! - Analytic Greeks (Delta, Gamma, Vega, Theta, Rho)
//!
//! ## Design Principles
//!
//! - **Stateless engine**: inputs travel in `OptionSpec`
//! - **Numerical accuracy**: Uses the erfc-based CDF from `pricer_core`
//! - **No silent NaN**: non-finite prices surface as `PricingError::Domain`

pub mod black_scholes;

// Re-export main types at module level
pub use black_scholes::BlackScholes;

//! Core option and error types.
//!
//! This module provides:
//! - `option`: `OptionKind` and the validated `OptionSpec` value object
//! - `greeks`: The five-sensitivity `Greeks` record
//! - `error`: Structured error types for pricing operations
//!
//! # Re-exports
//!
//! For convenience, commonly used types are re-exported at this module level:
//! - [`OptionKind`], [`OptionSpec`] from `option`
//! - [`Greeks`] from `greeks`
//! - [`PricingError`] from `error`

pub mod error;
pub mod greeks;
pub mod option;

// Re-export commonly used types at module level
pub use error::PricingError;
pub use greeks::Greeks;
pub use option::{OptionKind, OptionSpec};

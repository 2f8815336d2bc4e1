//! Core traits for pricing models.
//!
//! - [`PricingModel`]: price an [`OptionSpec`](crate::types::OptionSpec)
//!
//! Traits are consumed through generics, not trait objects.

pub mod priceable;

pub use priceable::PricingModel;

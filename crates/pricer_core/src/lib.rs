//! # pricer_core: Foundation types for the Black-Scholes-Merton pricer
//!
//! ## Layer 1 (Foundation) Role
//!
//! pricer_core is the bottom layer of the workspace, providing:
//! - Option value objects: `OptionKind`, `OptionSpec` (`types::option`)
//! - Error types: `PricingError` (`types::error`)
//! - Standard normal CDF/PDF (`math::distributions`)
//! - The `PricingModel` trait (`traits`)
//!
//! ## Minimal Dependency Principle
//!
//! Layer 1 has no dependencies on other pricer_* crates:
//! - statrs: erfc for a double-precision normal CDF
//! - thiserror: Error derive
//! - serde: Serialisation support (optional)
//!
//! ## Usage Examples
//!
//! ```rust
//! use pricer_core::math::norm_cdf;
//! use pricer_core::types::{OptionKind, OptionSpec};
//!
//! let spec = OptionSpec::new(100.0, 105.0, 0.5, 0.03, 0.25, OptionKind::Put).unwrap();
//! assert_eq!(spec.mirrored().kind(), OptionKind::Call);
//!
//! assert!((norm_cdf(0.0) - 0.5).abs() < 1e-15);
//! ```
//!
//! ## Feature Flags
//!
//! - `serde` (default): Serialisation for `OptionKind` and `OptionSpec`

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]

pub mod math;
pub mod traits;
pub mod types;

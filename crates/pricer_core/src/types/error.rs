//! Error types for structured error handling.
//!
//! This module provides:
//! - `PricingError`: Errors from option construction and pricing operations

use thiserror::Error;

/// Categorised pricing errors.
///
/// Every failure the pricing core can signal falls into one of two classes.
/// Neither is transient: the same inputs always fail the same way, so callers
/// should reject the request rather than retry.
///
/// # Variants
/// - `InvalidArgument`: Parameters outside the model's domain, or an
///   unrecognised option kind
/// - `Domain`: A formula evaluation produced a non-finite number
///
/// # Examples
/// ```
/// use pricer_core::types::PricingError;
///
/// let err = PricingError::invalid_argument("option kind must be call or put");
/// assert_eq!(
///     format!("{}", err),
///     "Invalid argument: option kind must be call or put"
/// );
/// ```
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PricingError {
    /// Invalid input data or parameters.
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// Non-finite result from log/sqrt/division on out-of-domain inputs.
    #[error("Domain error: {0}")]
    Domain(String),
}

impl PricingError {
    /// Creates an `InvalidArgument` error.
    pub fn invalid_argument(msg: impl Into<String>) -> Self {
        Self::InvalidArgument(msg.into())
    }

    /// Creates a `Domain` error.
    pub fn domain(msg: impl Into<String>) -> Self {
        Self::Domain(msg.into())
    }

    /// Returns true for `InvalidArgument`.
    pub fn is_invalid_argument(&self) -> bool {
        matches!(self, Self::InvalidArgument(_))
    }

    /// Returns true for `Domain`.
    pub fn is_domain(&self) -> bool {
        matches!(self, Self::Domain(_))
    }
}

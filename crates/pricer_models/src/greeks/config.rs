//! Greeks calculation configuration.
//!
//! Provides [`GreeksConfig`] for configuring the bump width, difference
//! scheme and calculation mode, together with its builder and validation
//! error.

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

/// Default finite-difference step.
pub const DEFAULT_EPSILON: f64 = 1e-6;

/// Largest accepted finite-difference step.
pub const MAX_EPSILON: f64 = 0.1;

/// Calculation mode for Greeks computation.
///
/// # Variants
///
/// * `BumpRevalue` - Finite differences over the pricing model (default)
/// * `Analytical` - Closed-form Greeks from the model, where available
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "kebab-case"))]
pub enum GreeksMode {
    /// Bump-and-revalue using finite differences.
    ///
    /// Every Greek re-evaluates the model's price at a bumped input.
    #[default]
    BumpRevalue,

    /// Closed-form Greeks.
    ///
    /// Values differ slightly from bump-and-revalue; only used when
    /// explicitly requested.
    Analytical,
}

impl fmt::Display for GreeksMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GreeksMode::BumpRevalue => write!(f, "bump-revalue"),
            GreeksMode::Analytical => write!(f, "analytical"),
        }
    }
}

impl FromStr for GreeksMode {
    type Err = GreeksConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "bump-revalue" | "bump" | "fd" => Ok(GreeksMode::BumpRevalue),
            "analytical" | "analytic" | "closed-form" => Ok(GreeksMode::Analytical),
            other => Err(GreeksConfigError::UnknownMode(other.to_string())),
        }
    }
}

/// Finite-difference scheme for bump-and-revalue.
///
/// # Variants
///
/// * `Forward` - `(f(x+ε) - f(x)) / ε`, two evaluations per Greek (default)
/// * `Central` - `(f(x+ε) - f(x-ε)) / 2ε`, second-order accurate
///
/// Theta bumps maturity downwards, so its "forward" step is `T - ε`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum DifferenceScheme {
    /// One-sided forward difference.
    #[default]
    Forward,
    /// Symmetric central difference.
    Central,
}

impl fmt::Display for DifferenceScheme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DifferenceScheme::Forward => write!(f, "forward"),
            DifferenceScheme::Central => write!(f, "central"),
        }
    }
}

impl FromStr for DifferenceScheme {
    type Err = GreeksConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "forward" => Ok(DifferenceScheme::Forward),
            "central" | "centered" => Ok(DifferenceScheme::Central),
            other => Err(GreeksConfigError::UnknownScheme(other.to_string())),
        }
    }
}

/// Configuration for Greeks calculation.
///
/// Use the builder pattern via [`GreeksConfig::builder()`] for construction.
///
/// # Default Values
///
/// | Parameter | Default | Description |
/// |-----------|---------|-------------|
/// | `mode` | `BumpRevalue` | Finite differences over the price |
/// | `epsilon` | 1e-6 | Absolute bump applied to every input |
/// | `scheme` | `Forward` | One-sided difference |
///
/// # Examples
///
/// ```rust
/// use pricer_models::greeks::{DifferenceScheme, GreeksConfig};
///
/// // Use defaults
/// let config = GreeksConfig::default();
/// assert_eq!(config.epsilon, 1e-6);
///
/// // Use builder for custom values
/// let config = GreeksConfig::builder()
///     .epsilon(1e-4)
///     .scheme(DifferenceScheme::Central)
///     .build()
///     .unwrap();
/// assert_eq!(config.scheme, DifferenceScheme::Central);
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct GreeksConfig {
    /// Calculation mode (BumpRevalue or Analytical).
    pub mode: GreeksMode,

    /// Absolute bump applied to spot, volatility, maturity and rate.
    pub epsilon: f64,

    /// Difference scheme used in `BumpRevalue` mode.
    pub scheme: DifferenceScheme,
}

impl Default for GreeksConfig {
    fn default() -> Self {
        Self {
            mode: GreeksMode::default(),
            epsilon: DEFAULT_EPSILON,
            scheme: DifferenceScheme::default(),
        }
    }
}

impl GreeksConfig {
    /// Creates a new builder for constructing a `GreeksConfig`.
    pub fn builder() -> GreeksConfigBuilder {
        GreeksConfigBuilder::default()
    }

    /// Validates the configuration.
    ///
    /// Returns an error if the bump is not a finite value in (0, 0.1].
    pub fn validate(&self) -> Result<(), GreeksConfigError> {
        if !self.epsilon.is_finite() || self.epsilon <= 0.0 {
            return Err(GreeksConfigError::InvalidEpsilon(format!(
                "epsilon must be a positive finite number, got {}",
                self.epsilon
            )));
        }
        if self.epsilon > MAX_EPSILON {
            return Err(GreeksConfigError::InvalidEpsilon(format!(
                "epsilon must be <= {}, got {}",
                MAX_EPSILON, self.epsilon
            )));
        }
        Ok(())
    }
}

/// Builder for [`GreeksConfig`].
#[derive(Debug, Default)]
pub struct GreeksConfigBuilder {
    mode: Option<GreeksMode>,
    epsilon: Option<f64>,
    scheme: Option<DifferenceScheme>,
}

impl GreeksConfigBuilder {
    /// Sets the calculation mode.
    pub fn mode(mut self, mode: GreeksMode) -> Self {
        self.mode = Some(mode);
        self
    }

    /// Sets the finite-difference step (default: 1e-6).
    pub fn epsilon(mut self, epsilon: f64) -> Self {
        self.epsilon = Some(epsilon);
        self
    }

    /// Sets the difference scheme (default: forward).
    pub fn scheme(mut self, scheme: DifferenceScheme) -> Self {
        self.scheme = Some(scheme);
        self
    }

    /// Builds the configuration, validating all parameters.
    ///
    /// # Errors
    ///
    /// Returns [`GreeksConfigError`] if any parameter is invalid.
    pub fn build(self) -> Result<GreeksConfig, GreeksConfigError> {
        let config = GreeksConfig {
            mode: self.mode.unwrap_or_default(),
            epsilon: self.epsilon.unwrap_or(DEFAULT_EPSILON),
            scheme: self.scheme.unwrap_or_default(),
        };

        config.validate()?;
        Ok(config)
    }
}

/// Error type for [`GreeksConfig`] validation and parsing.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum GreeksConfigError {
    /// Invalid finite-difference step.
    #[error("Invalid epsilon: {0}")]
    InvalidEpsilon(String),
    /// Unrecognised calculation mode name.
    #[error("Unknown Greeks mode: {0}. Supported: bump-revalue, analytical")]
    UnknownMode(String),
    /// Unrecognised difference scheme name.
    #[error("Unknown difference scheme: {0}. Supported: forward, central")]
    UnknownScheme(String),
}

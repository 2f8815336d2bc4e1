//! European option contract and market inputs.
//!
//! This module provides:
//! - `OptionKind`: Call or put
//! - `OptionSpec`: The five Black-Scholes scalars plus the option kind
//!
//! `OptionSpec` is an immutable value. Construction through [`OptionSpec::new`]
//! validates every field; the `with_*` builders return modified copies without
//! validation so that finite-difference bumps can step outside the domain and
//! let the pricing model report what happens there.

use std::fmt;
use std::str::FromStr;

use super::error::PricingError;

/// Type of European option.
///
/// # Examples
/// ```
/// use pricer_core::types::OptionKind;
///
/// let kind: OptionKind = "Put".parse().unwrap();
/// assert_eq!(kind, OptionKind::Put);
/// assert!("straddle".parse::<OptionKind>().is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum OptionKind {
    /// Right to buy at the strike: max(S - K, 0)
    Call,
    /// Right to sell at the strike: max(K - S, 0)
    Put,
}

impl OptionKind {
    /// Payoff direction: +1 for call, -1 for put.
    #[inline]
    pub fn phi(&self) -> f64 {
        match self {
            OptionKind::Call => 1.0,
            OptionKind::Put => -1.0,
        }
    }

    /// Intrinsic value at the given underlying price.
    #[inline]
    pub fn intrinsic(&self, spot: f64, strike: f64) -> f64 {
        match self {
            OptionKind::Call => (spot - strike).max(0.0),
            OptionKind::Put => (strike - spot).max(0.0),
        }
    }

    /// The other side of the parity pair.
    #[inline]
    pub fn opposite(&self) -> Self {
        match self {
            OptionKind::Call => OptionKind::Put,
            OptionKind::Put => OptionKind::Call,
        }
    }

    /// Lowercase name (`call` / `put`).
    pub fn as_str(&self) -> &'static str {
        match self {
            OptionKind::Call => "call",
            OptionKind::Put => "put",
        }
    }
}

impl fmt::Display for OptionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for OptionKind {
    type Err = PricingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "call" | "c" => Ok(OptionKind::Call),
            "put" | "p" => Ok(OptionKind::Put),
            _ => Err(PricingError::invalid_argument(
                "option kind must be call or put",
            )),
        }
    }
}

/// Market and contract inputs for one Black-Scholes valuation.
///
/// # Invariants
/// When built through [`OptionSpec::new`]:
/// - all numeric fields are finite
/// - `spot`, `strike`, `maturity` and `volatility` are strictly positive
/// - `rate` may be negative
///
/// # Examples
/// ```
/// use pricer_core::types::{OptionKind, OptionSpec};
///
/// let spec = OptionSpec::new(100.0, 100.0, 1.0, 0.03, 0.2, OptionKind::Call).unwrap();
/// let bumped = spec.with_spot(spec.spot() + 1e-6);
///
/// assert_eq!(spec.spot(), 100.0);
/// assert!(bumped.spot() > spec.spot());
///
/// assert!(OptionSpec::new(100.0, 100.0, 0.0, 0.03, 0.2, OptionKind::Call).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "RawOptionSpec"))]
pub struct OptionSpec {
    spot: f64,
    strike: f64,
    maturity: f64,
    rate: f64,
    volatility: f64,
    kind: OptionKind,
}

impl OptionSpec {
    /// Creates a validated option specification.
    ///
    /// # Arguments
    /// * `spot` - Current price of the underlying (> 0)
    /// * `strike` - Contract strike (> 0)
    /// * `maturity` - Time to expiry in years (> 0)
    /// * `rate` - Continuously-compounded risk-free rate (finite)
    /// * `volatility` - Annualised volatility of log-returns (> 0)
    /// * `kind` - Call or put
    ///
    /// # Errors
    /// `PricingError::InvalidArgument` naming the first offending field.
    pub fn new(
        spot: f64,
        strike: f64,
        maturity: f64,
        rate: f64,
        volatility: f64,
        kind: OptionKind,
    ) -> Result<Self, PricingError> {
        ensure_positive("spot", spot)?;
        ensure_positive("strike", strike)?;
        ensure_positive("maturity", maturity)?;
        if !rate.is_finite() {
            return Err(PricingError::invalid_argument(format!(
                "rate must be finite, got {}",
                rate
            )));
        }
        ensure_positive("volatility", volatility)?;

        Ok(Self {
            spot,
            strike,
            maturity,
            rate,
            volatility,
            kind,
        })
    }

    /// Returns the underlying price.
    #[inline]
    pub fn spot(&self) -> f64 {
        self.spot
    }

    /// Returns the strike.
    #[inline]
    pub fn strike(&self) -> f64 {
        self.strike
    }

    /// Returns the time to expiry in years.
    #[inline]
    pub fn maturity(&self) -> f64 {
        self.maturity
    }

    /// Returns the risk-free rate.
    #[inline]
    pub fn rate(&self) -> f64 {
        self.rate
    }

    /// Returns the volatility.
    #[inline]
    pub fn volatility(&self) -> f64 {
        self.volatility
    }

    /// Returns the option kind.
    #[inline]
    pub fn kind(&self) -> OptionKind {
        self.kind
    }

    /// Copy with a different spot. Not validated.
    #[inline]
    pub fn with_spot(self, spot: f64) -> Self {
        Self { spot, ..self }
    }

    /// Copy with a different strike. Not validated.
    #[inline]
    pub fn with_strike(self, strike: f64) -> Self {
        Self { strike, ..self }
    }

    /// Copy with a different maturity. Not validated.
    #[inline]
    pub fn with_maturity(self, maturity: f64) -> Self {
        Self { maturity, ..self }
    }

    /// Copy with a different rate. Not validated.
    #[inline]
    pub fn with_rate(self, rate: f64) -> Self {
        Self { rate, ..self }
    }

    /// Copy with a different volatility. Not validated.
    #[inline]
    pub fn with_volatility(self, volatility: f64) -> Self {
        Self { volatility, ..self }
    }

    /// Copy with a different option kind.
    #[inline]
    pub fn with_kind(self, kind: OptionKind) -> Self {
        Self { kind, ..self }
    }

    /// Same contract with the opposite kind (call <-> put).
    #[inline]
    pub fn mirrored(self) -> Self {
        self.with_kind(self.kind.opposite())
    }

    /// Discount factor e^(-rT).
    #[inline]
    pub fn discount_factor(&self) -> f64 {
        (-self.rate * self.maturity).exp()
    }

    /// Intrinsic value at the current spot.
    #[inline]
    pub fn intrinsic(&self) -> f64 {
        self.kind.intrinsic(self.spot, self.strike)
    }
}

fn ensure_positive(name: &str, value: f64) -> Result<(), PricingError> {
    if !value.is_finite() {
        return Err(PricingError::invalid_argument(format!(
            "{} must be finite, got {}",
            name, value
        )));
    }
    if value <= 0.0 {
        return Err(PricingError::invalid_argument(format!(
            "{} must be positive, got {}",
            name, value
        )));
    }
    Ok(())
}

/// Unvalidated wire form; deserialisation goes through [`OptionSpec::new`].
#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
struct RawOptionSpec {
    spot: f64,
    strike: f64,
    maturity: f64,
    rate: f64,
    volatility: f64,
    kind: OptionKind,
}

#[cfg(feature = "serde")]
impl TryFrom<RawOptionSpec> for OptionSpec {
    type Error = PricingError;

    fn try_from(raw: RawOptionSpec) -> Result<Self, Self::Error> {
        OptionSpec::new(
            raw.spot,
            raw.strike,
            raw.maturity,
            raw.rate,
            raw.volatility,
            raw.kind,
        )
    }
}

//! Black-Scholes pricing model for European options.
//!
//! This module provides the closed-form Black-Scholes-Merton valuation used
//! as the primitive for every sensitivity in [`crate::greeks`], plus the
//! analytic Greeks offered as an opt-in alternative to bump-and-revalue.
//!
//! ## Mathematical Formulas
//!
//! **Call Price**: C = S·N(d₁) - K·e^(-rT)·N(d₂)
//! **Put Price**: P = K·e^(-rT)·N(-d₂) - S·N(-d₁)
//!
//! Where:
//! - d₁ = (ln(S/K) + (r + σ²/2)T) / (σ√T)
//! - d₂ = d₁ - σ√T

use pricer_core::math::{norm_cdf, norm_pdf};
use pricer_core::traits::PricingModel;
use pricer_core::types::{Greeks, OptionKind, OptionSpec, PricingError};
use tracing::debug;

/// Black-Scholes model for European option pricing.
///
/// Stateless: all market and contract inputs travel in the [`OptionSpec`],
/// so one engine value can price any number of specs, from any thread.
///
/// # Examples
/// ```
/// use pricer_core::types::{OptionKind, OptionSpec};
/// use pricer_models::analytical::BlackScholes;
///
/// let call = OptionSpec::new(100.0, 100.0, 1.0, 0.05, 0.2, OptionKind::Call).unwrap();
/// let put = call.mirrored();
///
/// let c = BlackScholes.calculate_price(&call).unwrap();
/// let p = BlackScholes.calculate_price(&put).unwrap();
///
/// // Put-call parity: C - P = S - K*exp(-rT)
/// let parity = c - p - (100.0 - 100.0 * (-0.05_f64).exp());
/// assert!(parity.abs() < 1e-10);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BlackScholes;

impl BlackScholes {
    /// Creates the engine.
    pub fn new() -> Self {
        Self
    }

    /// Computes the d1 and d2 terms of the Black-Scholes formula.
    ///
    /// d₁ = (ln(S/K) + (r + σ²/2)T) / (σ√T), d₂ = d₁ - σ√T
    ///
    /// No guarding is done here: a zero or negative maturity or volatility
    /// yields infinities or NaN, which [`calculate_price`](Self::calculate_price)
    /// turns into a `Domain` error.
    #[inline]
    pub fn d1_d2(&self, spec: &OptionSpec) -> (f64, f64) {
        let sqrt_t = spec.maturity().sqrt();
        let vol = spec.volatility();
        let vol_sqrt_t = vol * sqrt_t;

        let log_moneyness = (spec.spot() / spec.strike()).ln();
        let drift = (spec.rate() + 0.5 * vol * vol) * spec.maturity();

        let d1 = (log_moneyness + drift) / vol_sqrt_t;
        let d2 = d1 - vol_sqrt_t;
        (d1, d2)
    }

    /// Computes the fair value of the option.
    ///
    /// - Call: S·N(d₁) - K·e^(-rT)·N(d₂)
    /// - Put: K·e^(-rT)·N(-d₂) - S·N(-d₁)
    ///
    /// Deterministic: calling twice on the same spec gives bit-identical
    /// results. The result is never negative.
    ///
    /// # Errors
    /// - `PricingError::Domain` if the result is not finite (only reachable
    ///   through unvalidated `with_*` specs, e.g. maturity ≤ 0)
    pub fn calculate_price(&self, spec: &OptionSpec) -> Result<f64, PricingError> {
        let (d1, d2) = self.d1_d2(spec);
        let discount = spec.discount_factor();
        let spot = spec.spot();
        let strike = spec.strike();

        let price = match spec.kind() {
            OptionKind::Call => spot * norm_cdf(d1) - strike * discount * norm_cdf(d2),
            OptionKind::Put => strike * discount * norm_cdf(-d2) - spot * norm_cdf(-d1),
        };

        if !price.is_finite() {
            debug!(
                spot,
                strike,
                maturity = spec.maturity(),
                rate = spec.rate(),
                volatility = spec.volatility(),
                kind = %spec.kind(),
                "non-finite Black-Scholes price"
            );
            return Err(PricingError::domain(format!(
                "non-finite {} price {} (S={}, K={}, T={}, r={}, sigma={})",
                spec.kind(),
                price,
                spot,
                strike,
                spec.maturity(),
                spec.rate(),
                spec.volatility()
            )));
        }

        // cancellation can leave a worthless side a few ulps below zero
        Ok(price.max(0.0))
    }

    /// Computes Delta (∂V/∂S) in closed form.
    ///
    /// - Call Delta = N(d₁)
    /// - Put Delta = N(d₁) - 1
    #[inline]
    pub fn delta(&self, spec: &OptionSpec) -> f64 {
        let (d1, _) = self.d1_d2(spec);
        match spec.kind() {
            OptionKind::Call => norm_cdf(d1),
            OptionKind::Put => norm_cdf(d1) - 1.0,
        }
    }

    /// Computes Gamma (∂²V/∂S²) in closed form.
    ///
    /// Gamma = φ(d₁) / (S·σ·√T), identical for calls and puts.
    #[inline]
    pub fn gamma(&self, spec: &OptionSpec) -> f64 {
        let (d1, _) = self.d1_d2(spec);
        norm_pdf(d1) / (spec.spot() * spec.volatility() * spec.maturity().sqrt())
    }

    /// Computes Vega (∂V/∂σ) in closed form.
    ///
    /// Vega = S·√T·φ(d₁), identical for calls and puts.
    #[inline]
    pub fn vega(&self, spec: &OptionSpec) -> f64 {
        let (d1, _) = self.d1_d2(spec);
        spec.spot() * spec.maturity().sqrt() * norm_pdf(d1)
    }

    /// Computes Theta in closed form, as the change in value per unit
    /// decrease in time to maturity (-∂V/∂T), per year.
    ///
    /// - Call Theta = -(S·σ·φ(d₁))/(2√T) - r·K·e^(-rT)·N(d₂)
    /// - Put Theta = -(S·σ·φ(d₁))/(2√T) + r·K·e^(-rT)·N(-d₂)
    #[inline]
    pub fn theta(&self, spec: &OptionSpec) -> f64 {
        let (d1, d2) = self.d1_d2(spec);
        let sqrt_t = spec.maturity().sqrt();
        let discount = spec.discount_factor();
        let carry = spec.rate() * spec.strike() * discount;

        let decay = -(spec.spot() * spec.volatility() * norm_pdf(d1)) / (2.0 * sqrt_t);

        match spec.kind() {
            OptionKind::Call => decay - carry * norm_cdf(d2),
            OptionKind::Put => decay + carry * norm_cdf(-d2),
        }
    }

    /// Computes Rho (∂V/∂r) in closed form.
    ///
    /// - Call Rho = K·T·e^(-rT)·N(d₂)
    /// - Put Rho = -K·T·e^(-rT)·N(-d₂)
    #[inline]
    pub fn rho(&self, spec: &OptionSpec) -> f64 {
        let (_, d2) = self.d1_d2(spec);
        let scale = spec.strike() * spec.maturity() * spec.discount_factor();
        match spec.kind() {
            OptionKind::Call => scale * norm_cdf(d2),
            OptionKind::Put => -scale * norm_cdf(-d2),
        }
    }

    /// All five closed-form Greeks.
    ///
    /// These differ slightly from the bump-and-revalue values; select them
    /// explicitly through [`GreeksMode::Analytical`](crate::greeks::GreeksMode).
    ///
    /// # Errors
    /// `PricingError::Domain` if any sensitivity is not finite.
    pub fn analytic_greeks(&self, spec: &OptionSpec) -> Result<Greeks, PricingError> {
        let greeks = Greeks::new(
            self.delta(spec),
            self.gamma(spec),
            self.theta(spec),
            self.vega(spec),
            self.rho(spec),
        );
        if !greeks.is_finite() {
            return Err(PricingError::domain(format!(
                "non-finite analytic Greeks for {} (T={}, sigma={})",
                spec.kind(),
                spec.maturity(),
                spec.volatility()
            )));
        }
        Ok(greeks)
    }
}

impl PricingModel for BlackScholes {
    fn price(&self, spec: &OptionSpec) -> Result<f64, PricingError> {
        self.calculate_price(spec)
    }

    fn analytic_greeks(&self, spec: &OptionSpec) -> Result<Greeks, PricingError> {
        BlackScholes::analytic_greeks(self, spec)
    }

    fn name(&self) -> &'static str {
        "black-scholes"
    }
}

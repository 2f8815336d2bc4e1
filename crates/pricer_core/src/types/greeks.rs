//! Option Greeks.
//!
//! First-order sensitivities plus gamma, as produced by either
//! bump-and-revalue or closed-form evaluation.

/// Option Greeks (sensitivities of price to each model input).
///
/// All values are per unit change of the input: vega per 1.00 of
/// volatility, rho per 1.00 of rate, theta per year of elapsed time.
///
/// # Examples
/// ```
/// use pricer_core::types::Greeks;
///
/// let g = Greeks::new(0.6, 0.02, -5.0, 37.5, 53.2);
/// let position = g.scale(10.0);
/// assert!((position.delta - 6.0).abs() < 1e-12);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Greeks {
    /// Delta: dV/dS (sensitivity to spot)
    pub delta: f64,
    /// Gamma: d²V/dS² (sensitivity of delta to spot)
    pub gamma: f64,
    /// Theta: change in value per unit decrease in time to maturity
    pub theta: f64,
    /// Vega: dV/dσ (sensitivity to volatility)
    pub vega: f64,
    /// Rho: dV/dr (sensitivity to interest rate)
    pub rho: f64,
}

impl Greeks {
    /// Creates a Greeks record.
    pub fn new(delta: f64, gamma: f64, theta: f64, vega: f64, rho: f64) -> Self {
        Self {
            delta,
            gamma,
            theta,
            vega,
            rho,
        }
    }

    /// Scale Greeks by a factor (e.g., for position size)
    pub fn scale(&self, factor: f64) -> Self {
        Self {
            delta: self.delta * factor,
            gamma: self.gamma * factor,
            theta: self.theta * factor,
            vega: self.vega * factor,
            rho: self.rho * factor,
        }
    }

    /// True when every sensitivity is finite.
    pub fn is_finite(&self) -> bool {
        [self.delta, self.gamma, self.theta, self.vega, self.rho]
            .iter()
            .all(|v| v.is_finite())
    }
}

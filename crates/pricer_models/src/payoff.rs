//! Expiry profit-and-loss profiles for long option positions.

use pricer_core::types::{OptionKind, PricingError};

/// Default number of samples in a diagram.
pub const DEFAULT_POINTS: usize = 100;

/// One sample of the P/L curve.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PayoffPoint {
    /// Underlying price at expiry.
    pub spot: f64,
    /// Intrinsic value minus the premium paid.
    pub pnl: f64,
}

/// P/L at expiry of a long call or put, sampled over a band of spots.
///
/// # Examples
/// ```
/// use pricer_core::types::OptionKind;
/// use pricer_models::payoff::PayoffDiagram;
///
/// let diagram = PayoffDiagram::generate(100.0, 100.0, 9.41, OptionKind::Call).unwrap();
/// assert_eq!(diagram.points().len(), 100);
/// assert_eq!(diagram.points()[0].spot, 50.0);
/// assert_eq!(diagram.points()[99].spot, 150.0);
/// assert_eq!(diagram.max_loss(), -9.41);
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct PayoffDiagram {
    kind: OptionKind,
    spot: f64,
    strike: f64,
    premium: f64,
    points: Vec<PayoffPoint>,
}

impl PayoffDiagram {
    /// Samples `[0.5·spot, 1.5·spot]` at [`DEFAULT_POINTS`] evenly spaced
    /// spots, endpoints included.
    ///
    /// # Errors
    /// `PricingError::InvalidArgument` if spot or strike is not positive
    /// and finite, or the premium is negative or not finite.
    pub fn generate(
        spot: f64,
        strike: f64,
        premium: f64,
        kind: OptionKind,
    ) -> Result<Self, PricingError> {
        check_positive("spot", spot)?;
        check_positive("strike", strike)?;
        if !premium.is_finite() || premium < 0.0 {
            return Err(PricingError::invalid_argument(format!(
                "premium must be a non-negative finite number, got {}",
                premium
            )));
        }

        let diagram = Self {
            kind,
            spot,
            strike,
            premium,
            points: Vec::new(),
        };
        diagram.with_range(0.5, 1.5, DEFAULT_POINTS)
    }

    /// Resamples over `[lo_mult·spot, hi_mult·spot]` with `points` samples.
    ///
    /// # Errors
    /// `PricingError::InvalidArgument` unless `0 < lo_mult < hi_mult` and
    /// `points >= 2`.
    pub fn with_range(
        mut self,
        lo_mult: f64,
        hi_mult: f64,
        points: usize,
    ) -> Result<Self, PricingError> {
        check_positive("lower multiple", lo_mult)?;
        if !hi_mult.is_finite() || hi_mult <= lo_mult {
            return Err(PricingError::invalid_argument(format!(
                "upper multiple {} must exceed lower multiple {}",
                hi_mult, lo_mult
            )));
        }
        if points < 2 {
            return Err(PricingError::invalid_argument(format!(
                "a payoff diagram needs at least 2 points, got {}",
                points
            )));
        }

        let lo = lo_mult * self.spot;
        let hi = hi_mult * self.spot;
        let step = (hi - lo) / (points - 1) as f64;

        self.points = (0..points)
            .map(|i| {
                // pin the last sample to the exact upper bound
                let s = if i == points - 1 { hi } else { lo + step * i as f64 };
                PayoffPoint {
                    spot: s,
                    pnl: self.kind.intrinsic(s, self.strike) - self.premium,
                }
            })
            .collect();
        Ok(self)
    }

    /// Samples in increasing spot order.
    pub fn points(&self) -> &[PayoffPoint] {
        &self.points
    }

    /// Option side.
    pub fn kind(&self) -> OptionKind {
        self.kind
    }

    /// Current spot, for the vertical reference line.
    pub fn spot(&self) -> f64 {
        self.spot
    }

    /// Contract strike.
    pub fn strike(&self) -> f64 {
        self.strike
    }

    /// Premium paid for the option.
    pub fn premium(&self) -> f64 {
        self.premium
    }

    /// Expiry spot at which P/L crosses zero.
    pub fn breakeven(&self) -> f64 {
        match self.kind {
            OptionKind::Call => self.strike + self.premium,
            OptionKind::Put => self.strike - self.premium,
        }
    }

    /// Worst case for the holder: the premium.
    pub fn max_loss(&self) -> f64 {
        -self.premium
    }

    /// Samples with P/L ≥ 0.
    pub fn profit_points(&self) -> impl Iterator<Item = &PayoffPoint> {
        self.points.iter().filter(|p| p.pnl >= 0.0)
    }

    /// Samples with P/L < 0.
    pub fn loss_points(&self) -> impl Iterator<Item = &PayoffPoint> {
        self.points.iter().filter(|p| p.pnl < 0.0)
    }
}

fn check_positive(name: &str, value: f64) -> Result<(), PricingError> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(PricingError::invalid_argument(format!(
            "{} must be positive and finite, got {}",
            name, value
        )))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_linspace_sampling() {
        let diagram = PayoffDiagram::generate(100.0, 100.0, 5.0, OptionKind::Put).unwrap();
        let points = diagram.points();

        assert_eq!(points.len(), DEFAULT_POINTS);
        assert_eq!(points[0].spot, 50.0);
        assert_eq!(points[DEFAULT_POINTS - 1].spot, 150.0);
        assert_relative_eq!(points[1].spot - points[0].spot, 100.0 / 99.0, epsilon = 1e-12);
        assert!(points.windows(2).all(|w| w[0].spot < w[1].spot));
    }

    #[test]
    fn test_call_pnl() {
        let diagram = PayoffDiagram::generate(100.0, 100.0, 10.0, OptionKind::Call).unwrap();
        let points = diagram.points();

        assert_eq!(points[0].pnl, -10.0);
        assert_relative_eq!(points[DEFAULT_POINTS - 1].pnl, 40.0, epsilon = 1e-12);
        assert_eq!(diagram.breakeven(), 110.0);
        assert_eq!(diagram.max_loss(), -10.0);
        assert!(points.iter().all(|p| p.pnl >= diagram.max_loss()));
    }

    #[test]
    fn test_put_breakeven_and_regions() {
        let diagram = PayoffDiagram::generate(100.0, 100.0, 6.0, OptionKind::Put).unwrap();
        assert_eq!(diagram.breakeven(), 94.0);

        assert!(diagram.profit_points().all(|p| p.spot <= 94.0 + 1e-9));
        assert!(diagram.loss_points().all(|p| p.spot > 94.0 - 1e-9));
        assert_eq!(
            diagram.profit_points().count() + diagram.loss_points().count(),
            DEFAULT_POINTS
        );
    }

    #[test]
    fn test_with_range() {
        let diagram = PayoffDiagram::generate(80.0, 100.0, 2.0, OptionKind::Call)
            .unwrap()
            .with_range(1.0, 2.0, 5)
            .unwrap();
        let spots: Vec<f64> = diagram.points().iter().map(|p| p.spot).collect();

        assert_eq!(spots, vec![80.0, 100.0, 120.0, 140.0, 160.0]);
        assert_eq!(diagram.spot(), 80.0);
    }

    #[test]
    fn test_invalid_inputs() {
        assert!(PayoffDiagram::generate(0.0, 100.0, 1.0, OptionKind::Call).is_err());
        assert!(PayoffDiagram::generate(100.0, f64::NAN, 1.0, OptionKind::Call).is_err());
        assert!(PayoffDiagram::generate(100.0, 100.0, -1.0, OptionKind::Call).is_err());

        let diagram = PayoffDiagram::generate(100.0, 100.0, 1.0, OptionKind::Call).unwrap();
        assert!(diagram.clone().with_range(1.5, 0.5, 10).is_err());
        assert!(diagram.clone().with_range(0.5, 1.5, 1).is_err());
        assert!(diagram.with_range(-0.5, 1.5, 10).is_err());
    }
}

//! Bump-and-revalue sensitivity engine.

use pricer_core::traits::PricingModel;
use pricer_core::types::{Greeks, OptionSpec, PricingError};
use tracing::trace;

use super::config::{DifferenceScheme, GreeksConfig, GreeksConfigError, GreeksMode};
use crate::analytical::BlackScholes;

/// Computes option Greeks by re-pricing a model at bumped inputs.
///
/// The model's `price` is the only primitive: each Greek perturbs exactly
/// one field of a copy of the [`OptionSpec`], re-prices and takes a finite
/// difference. Gamma differences [`SensitivityEngine::delta`] rather than
/// the price. The caller's spec is never modified.
///
/// With the default configuration (forward differences, `ε = 1e-6`):
///
/// | Greek | Bump | Result |
/// |-------|------|--------|
/// | delta | spot + ε | `(P(S+ε) - P(S)) / ε` |
/// | gamma | spot + ε | `(Δ(S+ε) - Δ(S)) / ε` |
/// | vega | vol + ε | `(P(σ+ε) - P(σ)) / ε` |
/// | theta | maturity - ε | `(P(T-ε) - P(T)) / ε` |
/// | rho | rate + ε | `(P(r+ε) - P(r)) / ε` |
///
/// Theta is not negated: it is the change in value per unit *decrease*
/// of time to maturity.
///
/// # Examples
/// ```
/// use pricer_core::types::{OptionKind, OptionSpec};
/// use pricer_models::greeks::SensitivityEngine;
///
/// let spec = OptionSpec::new(100.0, 100.0, 1.0, 0.03, 0.2, OptionKind::Call).unwrap();
/// let engine = SensitivityEngine::with_defaults();
///
/// let delta = engine.delta(&spec).unwrap();
/// assert!(delta > 0.0 && delta < 1.0);
/// ```
#[derive(Debug, Clone)]
pub struct SensitivityEngine<M: PricingModel = BlackScholes> {
    model: M,
    config: GreeksConfig,
}

impl SensitivityEngine<BlackScholes> {
    /// Black-Scholes engine with forward differences and `ε = 1e-6`.
    pub fn with_defaults() -> Self {
        Self {
            model: BlackScholes::new(),
            config: GreeksConfig::default(),
        }
    }
}

impl Default for SensitivityEngine<BlackScholes> {
    fn default() -> Self {
        Self::with_defaults()
    }
}

impl<M: PricingModel> SensitivityEngine<M> {
    /// Creates an engine over `model`.
    ///
    /// # Errors
    /// Returns [`GreeksConfigError`] if `config` fails validation.
    pub fn new(model: M, config: GreeksConfig) -> Result<Self, GreeksConfigError> {
        config.validate()?;
        Ok(Self { model, config })
    }

    /// The underlying pricing model.
    pub fn model(&self) -> &M {
        &self.model
    }

    /// The active configuration.
    pub fn config(&self) -> &GreeksConfig {
        &self.config
    }

    /// Price of `spec` under the engine's model.
    pub fn price(&self, spec: &OptionSpec) -> Result<f64, PricingError> {
        self.model.price(spec)
    }

    /// Sensitivity of price to spot.
    pub fn delta(&self, spec: &OptionSpec) -> Result<f64, PricingError> {
        if self.config.mode == GreeksMode::Analytical {
            return Ok(self.model.analytic_greeks(spec)?.delta);
        }
        self.difference(spec.spot(), 1.0, |s| self.model.price(&spec.with_spot(s)))
    }

    /// Sensitivity of delta to spot.
    ///
    /// In bump mode this nests two deltas, so one gamma costs four price
    /// evaluations (forward) and is more sensitive to the step size than
    /// the first-order Greeks.
    pub fn gamma(&self, spec: &OptionSpec) -> Result<f64, PricingError> {
        if self.config.mode == GreeksMode::Analytical {
            return Ok(self.model.analytic_greeks(spec)?.gamma);
        }
        self.difference(spec.spot(), 1.0, |s| self.delta(&spec.with_spot(s)))
    }

    /// Sensitivity of price to volatility.
    pub fn vega(&self, spec: &OptionSpec) -> Result<f64, PricingError> {
        if self.config.mode == GreeksMode::Analytical {
            return Ok(self.model.analytic_greeks(spec)?.vega);
        }
        self.difference(spec.volatility(), 1.0, |v| {
            self.model.price(&spec.with_volatility(v))
        })
    }

    /// Change in value per unit decrease of time to maturity.
    ///
    /// # Errors
    /// `PricingError::Domain` if bumping maturity down by `ε` would reach
    /// or cross expiry.
    pub fn theta(&self, spec: &OptionSpec) -> Result<f64, PricingError> {
        if self.config.mode == GreeksMode::Analytical {
            return Ok(self.model.analytic_greeks(spec)?.theta);
        }
        if spec.maturity() <= self.config.epsilon {
            return Err(PricingError::domain(format!(
                "maturity {} must exceed the bump size {} to compute theta",
                spec.maturity(),
                self.config.epsilon
            )));
        }
        self.difference(spec.maturity(), -1.0, |t| {
            self.model.price(&spec.with_maturity(t))
        })
    }

    /// Sensitivity of price to the risk-free rate.
    pub fn rho(&self, spec: &OptionSpec) -> Result<f64, PricingError> {
        if self.config.mode == GreeksMode::Analytical {
            return Ok(self.model.analytic_greeks(spec)?.rho);
        }
        self.difference(spec.rate(), 1.0, |r| self.model.price(&spec.with_rate(r)))
    }

    /// All five Greeks for `spec`.
    pub fn compute_all(&self, spec: &OptionSpec) -> Result<Greeks, PricingError> {
        if self.config.mode == GreeksMode::Analytical {
            return self.model.analytic_greeks(spec);
        }

        let greeks = Greeks {
            delta: self.delta(spec)?,
            gamma: self.gamma(spec)?,
            theta: self.theta(spec)?,
            vega: self.vega(spec)?,
            rho: self.rho(spec)?,
        };
        trace!(
            model = self.model.name(),
            scheme = %self.config.scheme,
            epsilon = self.config.epsilon,
            ?greeks,
            "bump-and-revalue Greeks"
        );
        Ok(greeks)
    }

    /// Finite difference of `f` around `x`, stepping `direction * ε`.
    fn difference<F>(&self, x: f64, direction: f64, f: F) -> Result<f64, PricingError>
    where
        F: Fn(f64) -> Result<f64, PricingError>,
    {
        let eps = self.config.epsilon;
        let h = eps * direction;

        let value = match self.config.scheme {
            DifferenceScheme::Forward => (f(x + h)? - f(x)?) / eps,
            DifferenceScheme::Central => (f(x + h)? - f(x - h)?) / (2.0 * eps),
        };

        if value.is_finite() {
            Ok(value)
        } else {
            Err(PricingError::domain(format!(
                "finite difference at {} is not finite",
                x
            )))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use pricer_core::types::OptionKind;

    fn spec(kind: OptionKind) -> OptionSpec {
        OptionSpec::new(100.0, 100.0, 1.0, 0.03, 0.2, kind).unwrap()
    }

    fn engine(epsilon: f64, scheme: DifferenceScheme) -> SensitivityEngine {
        let config = GreeksConfig::builder()
            .epsilon(epsilon)
            .scheme(scheme)
            .build()
            .unwrap();
        SensitivityEngine::new(BlackScholes::new(), config).unwrap()
    }

    #[test]
    fn test_default_engine_matches_closed_form() {
        let engine = SensitivityEngine::with_defaults();
        let bs = BlackScholes::new();

        for kind in [OptionKind::Call, OptionKind::Put] {
            let s = spec(kind);
            assert_relative_eq!(engine.delta(&s).unwrap(), bs.delta(&s), epsilon = 1e-5);
            assert_relative_eq!(engine.vega(&s).unwrap(), bs.vega(&s), epsilon = 1e-3);
            assert_relative_eq!(engine.theta(&s).unwrap(), bs.theta(&s), epsilon = 1e-3);
            assert_relative_eq!(engine.rho(&s).unwrap(), bs.rho(&s), epsilon = 1e-3);
        }
    }

    #[test]
    fn test_gamma_with_wider_step() {
        // Nested forward differences at 1e-6 are dominated by round-off.
        let engine = engine(1e-3, DifferenceScheme::Forward);
        let s = spec(OptionKind::Call);
        assert_relative_eq!(
            engine.gamma(&s).unwrap(),
            BlackScholes::new().gamma(&s),
            max_relative = 1e-3
        );
    }

    #[test]
    fn test_central_more_accurate_than_forward() {
        let s = spec(OptionKind::Call);
        let exact = BlackScholes::new().vega(&s);

        let forward = engine(1e-2, DifferenceScheme::Forward).vega(&s).unwrap();
        let central = engine(1e-2, DifferenceScheme::Central).vega(&s).unwrap();

        assert!((central - exact).abs() < (forward - exact).abs());
    }

    #[test]
    fn test_delta_converges_as_epsilon_shrinks() {
        let s = spec(OptionKind::Put);
        let exact = BlackScholes::new().delta(&s);

        let errors: Vec<f64> = [1e-1, 1e-2, 1e-3]
            .iter()
            .map(|&eps| {
                let delta = engine(eps, DifferenceScheme::Forward).delta(&s).unwrap();
                (delta - exact).abs()
            })
            .collect();

        assert!(errors[0] > errors[1]);
        assert!(errors[1] > errors[2]);
    }

    #[test]
    fn test_theta_sign_convention() {
        // Less time to expiry means a cheaper call.
        let engine = SensitivityEngine::with_defaults();
        assert!(engine.theta(&spec(OptionKind::Call)).unwrap() < 0.0);
    }

    #[test]
    fn test_theta_rejects_maturity_inside_bump() {
        let engine = engine(0.05, DifferenceScheme::Forward);
        let s = OptionSpec::new(100.0, 100.0, 0.02, 0.03, 0.2, OptionKind::Call).unwrap();
        assert!(engine.theta(&s).unwrap_err().is_domain());

        // accepted by validation, expired by the default bump
        let tiny = OptionSpec::new(100.0, 100.0, 5e-7, 0.03, 0.2, OptionKind::Put).unwrap();
        let err = SensitivityEngine::with_defaults().compute_all(&tiny).unwrap_err();
        assert!(err.is_domain(), "{:?}", err);
    }

    #[test]
    fn test_spec_unchanged_and_idempotent() {
        let engine = SensitivityEngine::with_defaults();
        let s = spec(OptionKind::Call);
        let before = s;

        let first = engine.compute_all(&s).unwrap();
        let second = engine.compute_all(&s).unwrap();

        assert_eq!(s, before);
        assert_eq!(first, second);
        assert_eq!(
            engine.price(&s).unwrap(),
            BlackScholes::new().calculate_price(&s).unwrap()
        );
    }

    #[test]
    fn test_analytical_mode() {
        let config = GreeksConfig::builder()
            .mode(GreeksMode::Analytical)
            .build()
            .unwrap();
        let engine = SensitivityEngine::new(BlackScholes::new(), config).unwrap();
        let s = spec(OptionKind::Put);

        let greeks = engine.compute_all(&s).unwrap();
        assert_eq!(greeks, BlackScholes::new().analytic_greeks(&s).unwrap());
        assert_eq!(engine.gamma(&s).unwrap(), greeks.gamma);
    }

    struct Intrinsic;

    impl PricingModel for Intrinsic {
        fn price(&self, spec: &OptionSpec) -> Result<f64, PricingError> {
            Ok(spec.intrinsic())
        }
    }

    #[test]
    fn test_generic_model() {
        let engine = SensitivityEngine::new(Intrinsic, GreeksConfig::default()).unwrap();
        let itm = OptionSpec::new(110.0, 100.0, 1.0, 0.0, 0.2, OptionKind::Call).unwrap();

        assert_relative_eq!(engine.delta(&itm).unwrap(), 1.0, epsilon = 1e-6);
        assert_eq!(engine.vega(&itm).unwrap(), 0.0);
    }

    #[test]
    fn test_analytical_mode_unsupported_model() {
        let config = GreeksConfig::builder()
            .mode(GreeksMode::Analytical)
            .build()
            .unwrap();
        let engine = SensitivityEngine::new(Intrinsic, config).unwrap();
        let err = engine.compute_all(&spec(OptionKind::Call)).unwrap_err();
        assert!(err.is_invalid_argument());
    }

    #[test]
    fn test_new_rejects_invalid_config() {
        let config = GreeksConfig {
            epsilon: -1.0,
            ..GreeksConfig::default()
        };
        assert!(SensitivityEngine::new(BlackScholes::new(), config).is_err());
    }

    #[test]
    fn test_engine_by_reference() {
        let model = BlackScholes::new();
        let engine = SensitivityEngine::new(&model, GreeksConfig::default()).unwrap();
        assert!(engine.rho(&spec(OptionKind::Call)).unwrap() > 0.0);
    }
}

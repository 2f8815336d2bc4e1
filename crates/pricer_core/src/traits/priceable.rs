//! Trait for closed-form option pricing models.
//!
//! This module defines [`PricingModel`], the single primitive the
//! sensitivity layer builds on: every Greek is derived by re-evaluating
//! `price` at a bumped [`OptionSpec`].

use crate::types::{Greeks, OptionSpec, PricingError};

/// A model that values a European option from an [`OptionSpec`].
///
/// # Design Philosophy
///
/// Implementations must be pure: the same spec always yields the same
/// bit-identical price, and the spec is only borrowed. This is what lets
/// bump-and-revalue Greeks run concurrently on independent specs.
///
/// Use generics (`SensitivityEngine<M: PricingModel>`) rather than
/// `Box<dyn PricingModel>`; the engine is monomorphised per model.
///
/// # Examples
/// ```
/// use pricer_core::traits::PricingModel;
/// use pricer_core::types::{OptionKind, OptionSpec, PricingError};
///
/// /// Values every option at its intrinsic value.
/// struct Intrinsic;
///
/// impl PricingModel for Intrinsic {
///     fn price(&self, spec: &OptionSpec) -> Result<f64, PricingError> {
///         Ok(spec.intrinsic())
///     }
/// }
///
/// let spec = OptionSpec::new(110.0, 100.0, 1.0, 0.0, 0.2, OptionKind::Call).unwrap();
/// assert_eq!(Intrinsic.price(&spec).unwrap(), 10.0);
/// ```
pub trait PricingModel {
    /// Calculate the fair value of the option described by `spec`.
    ///
    /// # Errors
    /// - `PricingError::InvalidArgument` for inputs the model rejects
    /// - `PricingError::Domain` when the evaluation is not finite
    fn price(&self, spec: &OptionSpec) -> Result<f64, PricingError>;

    /// Closed-form sensitivities, for models that have them.
    ///
    /// # Errors
    /// The default implementation returns `PricingError::InvalidArgument`:
    /// the model only supports bump-and-revalue.
    fn analytic_greeks(&self, spec: &OptionSpec) -> Result<Greeks, PricingError> {
        let _ = spec;
        Err(PricingError::invalid_argument(format!(
            "{} model has no closed-form Greeks",
            self.name()
        )))
    }

    /// Short model name used in logs and reports.
    fn name(&self) -> &'static str {
        "unnamed"
    }
}

impl<M: PricingModel + ?Sized> PricingModel for &M {
    fn price(&self, spec: &OptionSpec) -> Result<f64, PricingError> {
        (**self).price(spec)
    }

    fn analytic_greeks(&self, spec: &OptionSpec) -> Result<Greeks, PricingError> {
        (**self).analytic_greeks(spec)
    }

    fn name(&self) -> &'static str {
        (**self).name()
    }
}

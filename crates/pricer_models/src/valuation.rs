//! Price-plus-Greeks reports for a single option side.

use pricer_core::traits::PricingModel;
use pricer_core::types::{Greeks, OptionKind, OptionSpec, PricingError};
use tracing::{debug, info_span};

use crate::greeks::SensitivityEngine;

/// Price and Greeks of one option.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct OptionValuation {
    /// Option side the figures belong to.
    pub kind: OptionKind,
    /// Model price.
    pub price: f64,
    /// Sensitivities as configured on the engine.
    pub greeks: Greeks,
}

/// Values `spec` with `engine`: one price and five Greeks.
///
/// # Errors
/// Propagates any [`PricingError`] from the model or the finite differences.
pub fn value_option<M: PricingModel>(
    engine: &SensitivityEngine<M>,
    spec: &OptionSpec,
) -> Result<OptionValuation, PricingError> {
    let span = info_span!(
        "value_option",
        kind = %spec.kind(),
        spot = spec.spot(),
        strike = spec.strike(),
        maturity = spec.maturity(),
        rate = spec.rate(),
        volatility = spec.volatility(),
    );
    let _guard = span.enter();

    let price = engine.price(spec)?;
    let greeks = engine.compute_all(spec)?;
    debug!(price, ?greeks, "valued option");

    Ok(OptionValuation {
        kind: spec.kind(),
        price,
        greeks,
    })
}

/// Values the call and the put sharing the market inputs of `spec`.
///
/// The kind carried by `spec` is ignored. Returns `(call, put)`.
pub fn value_call_and_put<M: PricingModel>(
    engine: &SensitivityEngine<M>,
    spec: &OptionSpec,
) -> Result<(OptionValuation, OptionValuation), PricingError> {
    let call = value_option(engine, &spec.with_kind(OptionKind::Call))?;
    let put = value_option(engine, &spec.with_kind(OptionKind::Put))?;
    Ok((call, put))
}

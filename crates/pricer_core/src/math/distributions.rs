//! Standard normal distribution functions.
//!
//! This module provides:
//! - `norm_cdf`: Cumulative distribution function (CDF)
//! - `norm_pdf`: Probability density function (PDF)
//!
//! The CDF is evaluated through the complementary error function from
//! `statrs`, which keeps full double precision in both tails. A polynomial
//! erfc approximation (Abramowitz and Stegun 7.1.26) is only good to ~1e-7
//! and is not accurate enough for finite-difference Greeks.

use statrs::function::erf::erfc;

/// 1 / sqrt(2)
const FRAC_1_SQRT_2: f64 = std::f64::consts::FRAC_1_SQRT_2;

/// 1 / sqrt(2 * pi)
const FRAC_1_SQRT_2PI: f64 = 0.398_942_280_401_432_7;

/// Standard normal cumulative distribution function.
///
/// Computes P(X <= x) where X ~ N(0, 1).
///
/// # Mathematical Definition
/// Φ(x) = (1/2) * erfc(-x / sqrt(2))
///
/// # Accuracy
/// Matches reference values to better than 1e-14 absolute for all finite x.
///
/// # Examples
/// ```
/// use pricer_core::math::norm_cdf;
///
/// assert!((norm_cdf(0.0) - 0.5).abs() < 1e-15);
/// assert!(norm_cdf(-3.0) < 0.01);
/// assert!(norm_cdf(3.0) > 0.99);
/// ```
#[inline]
pub fn norm_cdf(x: f64) -> f64 {
    0.5 * erfc(-x * FRAC_1_SQRT_2)
}

/// Standard normal probability density function.
///
/// # Mathematical Definition
/// φ(x) = (1 / sqrt(2π)) * exp(-x² / 2)
///
/// # Examples
/// ```
/// use pricer_core::math::norm_pdf;
///
/// // φ(0) = 1 / sqrt(2π) ≈ 0.3989
/// assert!((norm_pdf(0.0) - 0.3989422804).abs() < 1e-10);
/// ```
#[inline]
pub fn norm_pdf(x: f64) -> f64 {
    FRAC_1_SQRT_2PI * (-0.5 * x * x).exp()
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::{assert_abs_diff_eq, assert_relative_eq};

    // ==========================================================
    // norm_cdf tests
    // ==========================================================

    #[test]
    fn test_norm_cdf_at_zero() {
        assert_abs_diff_eq!(norm_cdf(0.0), 0.5, epsilon = 1e-15);
    }

    #[test]
    fn test_norm_cdf_reference_values() {
        // Reference values to 1e-10 absolute
        let cases = [
            (1.0, 0.841_344_746_068_542_9),
            (-1.0, 0.158_655_253_931_457_05),
            (2.0, 0.977_249_868_051_820_8),
            (-2.0, 0.022_750_131_948_179_195),
            (3.0, 0.998_650_101_968_369_9),
            (0.25, 0.598_706_325_682_923_6),
            (0.05, 0.519_938_805_838_372_3),
            (-1.96, 0.024_997_895_148_220_435),
        ];
        for (x, expected) in cases {
            assert_abs_diff_eq!(norm_cdf(x), expected, epsilon = 1e-10);
        }
    }

    #[test]
    fn test_norm_cdf_symmetry() {
        for i in -60..=60 {
            let x = i as f64 * 0.1;
            assert_abs_diff_eq!(norm_cdf(x) + norm_cdf(-x), 1.0, epsilon = 1e-14);
        }
    }

    #[test]
    fn test_norm_cdf_tails() {
        // Φ(-8) ≈ 6.22e-16: relative precision is kept in the lower tail
        assert_relative_eq!(norm_cdf(-8.0), 6.220_960_574_271_785e-16, max_relative = 1e-8);
        assert!(norm_cdf(40.0) <= 1.0);
        assert!(norm_cdf(-40.0) >= 0.0);
    }

    #[test]
    fn test_norm_cdf_monotonic() {
        let values: Vec<f64> = (-50..=50).map(|i| i as f64 * 0.1).collect();
        for pair in values.windows(2) {
            assert!(
                norm_cdf(pair[1]) > norm_cdf(pair[0]),
                "CDF not monotonic at x = {}",
                pair[0]
            );
        }
    }

    // ==========================================================
    // norm_pdf tests
    // ==========================================================

    #[test]
    fn test_norm_pdf_reference_values() {
        assert_relative_eq!(norm_pdf(0.0), FRAC_1_SQRT_2PI, epsilon = 1e-15);
        assert_relative_eq!(norm_pdf(1.0), 0.241_970_724_519_143_37, epsilon = 1e-12);
        assert_relative_eq!(norm_pdf(2.0), 0.053_990_966_513_188_06, epsilon = 1e-12);
    }

    #[test]
    fn test_norm_pdf_symmetry() {
        for x in [0.5, 1.0, 1.5, 2.0, 2.5, 3.0] {
            assert_relative_eq!(norm_pdf(x), norm_pdf(-x), epsilon = 1e-15);
        }
    }

    #[test]
    fn test_cdf_pdf_relationship() {
        // Central difference of the CDF approximates the PDF
        let h = 1e-5;
        for x in [-2.0, -1.0, 0.0, 1.0, 2.0] {
            let numerical = (norm_cdf(x + h) - norm_cdf(x - h)) / (2.0 * h);
            assert_relative_eq!(numerical, norm_pdf(x), epsilon = 1e-8);
        }
    }

    // ==========================================================
    // Property-based tests
    // ==========================================================

    mod property_tests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #![proptest_config(ProptestConfig::with_cases(1000))]

            #[test]
            fn test_norm_cdf_reflection(x in -10.0..10.0f64) {
                prop_assert!((norm_cdf(x) + norm_cdf(-x) - 1.0).abs() < 1e-14);
            }

            #[test]
            fn test_norm_cdf_non_decreasing(x in -10.0..10.0f64, dx in 0.0..1.0f64) {
                // ulp-level slack across erfc's approximation intervals
                prop_assert!(norm_cdf(x + dx) >= norm_cdf(x) - 1e-15);
            }

            #[test]
            fn test_norm_cdf_in_unit_interval(x in -40.0..40.0f64) {
                let p = norm_cdf(x);
                prop_assert!((0.0..=1.0).contains(&p), "Φ({}) = {}", x, p);
            }

            #[test]
            fn test_norm_pdf_positive_and_even(x in -30.0..30.0f64) {
                prop_assert!(norm_pdf(x) >= 0.0);
                prop_assert_eq!(norm_pdf(x), norm_pdf(-x));
            }
        }
    }
}

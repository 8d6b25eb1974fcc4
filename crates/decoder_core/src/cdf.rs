//! Standard normal CDF approximations.
//!
//! Maps a z-score to an approximate `Φ(z) ∈ (0, 1)`, the probability that a
//! standard normal variable is at most `z`. In the decoder this is a
//! decorrelating step: it turns a roughly normal walk statistic back into a
//! roughly uniform variate suitable for indexing.
//!
//! Two numerically distinct approximations are provided and tested against
//! each other. Both are generic over `T: Float` to support `f64` and `f32`.

use num_traits::Float;

/// Square root of 2.
const SQRT_2: f64 = std::f64::consts::SQRT_2;

/// Selector for the two interchangeable CDF approximations.
///
/// Either may be chosen per call; the two agree with each other, and with
/// the true normal CDF, to within about 1e-6 over the z-scores the walk
/// model actually produces (`|z| ≲ 6`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CdfVariant {
    /// Rational approximation with coefficients c1..c7.
    #[default]
    Rational,
    /// Abramowitz and Stegun 7.1.26 complementary-error-function form.
    ErfPolynomial,
}

/// Approximate `Φ(z)` with the selected variant.
#[inline]
pub fn norm_cdf(z: f64, variant: CdfVariant) -> f64 {
    match variant {
        CdfVariant::Rational => norm_cdf_rational(z),
        CdfVariant::ErfPolynomial => norm_cdf_erf(z),
    }
}

/// Rational approximation of the standard normal CDF.
///
/// Uses the sign convention `sign(0) = +1`, `t = 1 + c7·s·z`, and a rational
/// combination of `t..t⁴` with fixed coefficients.
///
/// # Examples
/// ```
/// use decoder_core::cdf::norm_cdf_rational;
///
/// let p = norm_cdf_rational(0.0_f64);
/// assert!((p - 0.5).abs() < 1e-9);
/// ```
#[inline]
pub fn norm_cdf_rational<T: Float>(z: T) -> T {
    let half = T::from(0.5).unwrap();
    let one = T::one();

    let c1 = T::from(2.506628275).unwrap();
    let c2 = T::from(0.31938153).unwrap();
    let c3 = T::from(-0.356563782).unwrap();
    let c4 = T::from(1.781477937).unwrap();
    let c5 = T::from(-1.821255978).unwrap();
    let c6 = T::from(1.330274429).unwrap();
    let c7 = T::from(0.2316419).unwrap();

    // sign(0) = +1
    let s = if z < T::zero() { -one } else { one };

    let t = one + c7 * s * z;
    let t2 = t * t;
    let t3 = t2 * t;
    let t4 = t2 * t2;

    let tail = (c2 + (c6 + c5 * t + c4 * t2 + c3 * t3) / t4) / (c1 * (half * z * z).exp() * t);

    half + s * (half - tail)
}

/// Abramowitz and Stegun 7.1.26 approximation of the standard normal CDF.
///
/// Computes `erf(|z|/√2)` with the a1..a5 polynomial (maximum error 1.5e-7)
/// and folds the sign back in: `Φ(z) = 0.5·(1 + sign(z)·erf(|z|/√2))`.
///
/// # Examples
/// ```
/// use decoder_core::cdf::norm_cdf_erf;
///
/// let p = norm_cdf_erf(1.625_f64);
/// assert!((p - 0.9479).abs() < 1e-4);
/// ```
#[inline]
pub fn norm_cdf_erf<T: Float>(z: T) -> T {
    let half = T::from(0.5).unwrap();
    let one = T::one();

    // Abramowitz and Stegun constants (7.1.26)
    let a1 = T::from(0.254829592).unwrap();
    let a2 = T::from(-0.284496736).unwrap();
    let a3 = T::from(1.421413741).unwrap();
    let a4 = T::from(-1.453152027).unwrap();
    let a5 = T::from(1.061405429).unwrap();
    let p = T::from(0.3275911).unwrap();

    let s = if z < T::zero() { -one } else { one };
    let x = z.abs() / T::from(SQRT_2).unwrap();

    // t = 1 / (1 + p·x), Horner's method for the polynomial
    let t = one / (one + p * x);
    let poly = t * (a1 + t * (a2 + t * (a3 + t * (a4 + t * a5))));
    let y = one - poly * (-x * x).exp();

    half * (one + s * y)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use proptest::prelude::*;

    const VARIANTS: [CdfVariant; 2] = [CdfVariant::Rational, CdfVariant::ErfPolynomial];

    #[test]
    fn test_cdf_at_zero_is_half() {
        for variant in VARIANTS {
            let p = norm_cdf(0.0, variant);
            assert_relative_eq!(p, 0.5, epsilon = 1e-7);
        }
    }

    #[test]
    fn test_reference_values() {
        // Reference values from standard normal tables.
        let references = [
            (1.0, 0.8413447460685429),
            (-1.0, 0.15865525393145707),
            (2.0, 0.9772498680518208),
            (-2.0, 0.022750131948179195),
            (3.0, 0.9986501019683699),
        ];
        for variant in VARIANTS {
            for (z, phi) in references {
                assert_relative_eq!(norm_cdf(z, variant), phi, epsilon = 1e-6);
            }
        }
    }

    #[test]
    fn test_reference_walk_z_score() {
        // z = 1.625 from the 65536-bit walk with ct = 416.
        for variant in VARIANTS {
            let p = norm_cdf(1.625, variant);
            assert_relative_eq!(p, 0.9479, epsilon = 1e-4);
        }
    }

    #[test]
    fn test_symmetry() {
        for variant in VARIANTS {
            for z in [0.25, 0.5, 1.0, 1.625, 2.5, 4.0] {
                let sum = norm_cdf(z, variant) + norm_cdf(-z, variant);
                assert_relative_eq!(sum, 1.0, epsilon = 1e-6);
            }
        }
    }

    #[test]
    fn test_variants_agree_on_grid() {
        // |z| <= 6 covers the z-scores the walk model actually produces.
        for i in -600..=600 {
            let z = i as f64 * 0.01;
            let a = norm_cdf_rational(z);
            let b = norm_cdf_erf(z);
            assert!(
                (a - b).abs() < 1e-6,
                "variants disagree at z = {}: {} vs {}",
                z,
                a,
                b
            );
        }
    }

    #[test]
    fn test_output_in_open_unit_interval() {
        for variant in VARIANTS {
            for i in -600..=600 {
                let z = i as f64 * 0.01;
                let p = norm_cdf(z, variant);
                assert!(p > 0.0 && p < 1.0, "p = {} at z = {}", p, z);
            }
        }
    }

    #[test]
    fn test_f32_compatibility() {
        let p = norm_cdf_erf(0.0_f32);
        assert!((p - 0.5).abs() < 1e-5);
        let q = norm_cdf_rational(0.0_f32);
        assert!((q - 0.5).abs() < 1e-5);
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(1000))]

        #[test]
        fn test_variants_agree(z in -6.0f64..6.0) {
            let a = norm_cdf_rational(z);
            let b = norm_cdf_erf(z);
            prop_assert!((a - b).abs() < 1e-6);
        }

        #[test]
        fn test_monotone_non_decreasing(z in -6.0f64..5.9, dz in 1e-6f64..0.1) {
            for variant in VARIANTS {
                let lo = norm_cdf(z, variant);
                let hi = norm_cdf(z + dz, variant);
                // Allow approximation-level wiggle; the trend must not invert.
                prop_assert!(hi >= lo - 1e-9, "variant {:?} decreases at z = {}", variant, z);
            }
        }
    }
}

//! The beta membership function.

use serde::{Deserialize, Serialize};

use crate::error::MembershipError;
use crate::variable::Variable;

/// Evaluates `1 / (1 + (((x − m)/a)²)^b)`; the exponent applies to the
/// squared distance, so `μ = 1/2` at `x = m ± a` for every `b`.
///
/// The result lies in `(0, 1]` for finite `x` and peaks at exactly 1 when
/// `x == m`, provided `b > 0`. A NaN input yields NaN. `a` must be non-zero
/// and `b` positive; both are checked when parameter sets are built, not here.
#[inline]
pub fn beta_membership(x: f64, a: f64, b: f64, m: f64) -> f64 {
    let z = (x - m) / a;
    1.0 / (1.0 + (z * z).powf(b))
}

/// Shape triplet of one species' beta membership function for one variable.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BetaParams {
    /// Half-width.
    pub a: f64,
    /// Slope exponent.
    pub b: f64,
    /// Center.
    pub m: f64,
}

impl BetaParams {
    /// Creates a parameter triplet. Call [`BetaParams::validate`] before use
    /// in a scoring loop.
    pub fn new(a: f64, b: f64, m: f64) -> Self {
        Self { a, b, m }
    }

    /// Evaluates the membership function at `x`.
    #[inline]
    pub fn membership(&self, x: f64) -> f64 {
        beta_membership(x, self.a, self.b, self.m)
    }

    /// Checks that all parameters are finite, `a` is non-zero and `b` is
    /// positive.
    pub fn validate(&self, variable: Variable, species: usize) -> Result<(), MembershipError> {
        if !self.a.is_finite() || !self.b.is_finite() || !self.m.is_finite() {
            return Err(MembershipError::NonFiniteParameter { variable, species });
        }
        if self.a == 0.0 {
            return Err(MembershipError::ZeroWidth { variable, species });
        }
        if self.b <= 0.0 {
            return Err(MembershipError::NonPositiveExponent {
                variable,
                species,
                b: self.b,
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn peak_at_center() {
        assert_eq!(beta_membership(12.5, 3.0, 2.0, 12.5), 1.0);
        assert_eq!(BetaParams::new(-4.0, 10.0, 0.0).membership(0.0), 1.0);
    }

    #[test]
    fn half_at_one_width_for_any_b() {
        // ((x − m)/a)² == 1 makes the denominator 2 regardless of b.
        for b in [0.5, 1.0, 3.0, 20.0] {
            assert_relative_eq!(beta_membership(7.0, 2.0, b, 5.0), 0.5, epsilon = 1e-12);
            assert_relative_eq!(beta_membership(3.0, 2.0, b, 5.0), 0.5, epsilon = 1e-12);
        }
    }

    #[test]
    fn bounded_in_unit_interval() {
        let p = BetaParams::new(5.0, 3.0, 20.0);
        for i in -100..=100 {
            let x = i as f64 * 0.7;
            let mu = p.membership(x);
            assert!(mu > 0.0 && mu <= 1.0, "mu({x}) = {mu}");
        }
    }

    #[test]
    fn symmetric_about_center() {
        let p = BetaParams::new(1.5, 4.0, 0.3);
        assert_relative_eq!(p.membership(0.3 + 0.8), p.membership(0.3 - 0.8), epsilon = 1e-15);
    }

    #[test]
    fn negative_width_same_as_positive() {
        assert_relative_eq!(
            beta_membership(4.0, -2.0, 3.0, 1.0),
            beta_membership(4.0, 2.0, 3.0, 1.0),
            epsilon = 1e-15
        );
    }

    #[test]
    fn nan_propagates() {
        assert!(beta_membership(f64::NAN, 1.0, 1.0, 0.0).is_nan());
    }

    #[test]
    fn validate_rejects_zero_width() {
        let err = BetaParams::new(0.0, 1.0, 0.0)
            .validate(Variable::Dr, 2)
            .unwrap_err();
        assert!(matches!(
            err,
            MembershipError::ZeroWidth {
                variable: Variable::Dr,
                species: 2
            }
        ));
    }

    #[test]
    fn validate_rejects_non_positive_exponent() {
        for b in [0.0, -2.0] {
            let err = BetaParams::new(5.0, b, 30.0)
                .validate(Variable::Dz, 1)
                .unwrap_err();
            assert!(matches!(
                err,
                MembershipError::NonPositiveExponent {
                    variable: Variable::Dz,
                    species: 1,
                    ..
                }
            ));
        }
        assert!(BetaParams::new(5.0, 0.1, 30.0).validate(Variable::Dz, 1).is_ok());
    }

    #[test]
    fn validate_rejects_nan() {
        let err = BetaParams::new(1.0, f64::NAN, 0.0)
            .validate(Variable::T, 0)
            .unwrap_err();
        assert!(matches!(err, MembershipError::NonFiniteParameter { .. }));
    }
}

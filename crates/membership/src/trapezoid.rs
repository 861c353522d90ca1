//! Trapezoidal temperature membership.
//!
//! Unlike the beta form, a trapezoid reaches exactly zero outside its outer
//! breakpoints, which penalises species that cannot exist at a given
//! temperature (e.g. rain well below freezing).

use serde::{Deserialize, Serialize};

use crate::error::MembershipError;

/// Four ordered breakpoints: `low ≤ low_mid ≤ high_mid ≤ high`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Trapezoid {
    /// Lower outer breakpoint (membership 0 below).
    pub low: f64,
    /// Lower inner breakpoint (membership 1 from here).
    pub low_mid: f64,
    /// Upper inner breakpoint (membership 1 up to here).
    pub high_mid: f64,
    /// Upper outer breakpoint (membership 0 above).
    pub high: f64,
}

impl Trapezoid {
    /// Creates a trapezoid from its four breakpoints.
    pub fn new(low: f64, low_mid: f64, high_mid: f64, high: f64) -> Self {
        Self {
            low,
            low_mid,
            high_mid,
            high,
        }
    }

    /// Evaluates the membership at `x`.
    ///
    /// Zero-width ramps behave as vertical edges: the inner plateau is closed,
    /// the outer support is closed, and NaN propagates.
    pub fn membership(&self, x: f64) -> f64 {
        if x.is_nan() {
            return f64::NAN;
        }
        if x < self.low || x > self.high {
            0.0
        } else if x < self.low_mid {
            (x - self.low) / (self.low_mid - self.low)
        } else if x <= self.high_mid {
            1.0
        } else {
            (self.high - x) / (self.high - self.high_mid)
        }
    }

    /// Checks that the breakpoints are finite and non-decreasing.
    pub fn validate(&self, species: usize) -> Result<(), MembershipError> {
        let pts = [self.low, self.low_mid, self.high_mid, self.high];
        if pts.iter().any(|p| !p.is_finite()) {
            return Err(MembershipError::InvalidTrapezoid {
                species,
                reason: "breakpoints must be finite".to_string(),
            });
        }
        if pts.windows(2).any(|w| w[0] > w[1]) {
            return Err(MembershipError::InvalidTrapezoid {
                species,
                reason: format!(
                    "breakpoints must be non-decreasing, got [{}, {}, {}, {}]",
                    self.low, self.low_mid, self.high_mid, self.high
                ),
            });
        }
        Ok(())
    }
}

/// One temperature trapezoid per species, aligned by species index.
#[derive(Debug, Clone, PartialEq)]
pub struct TrapezoidSet {
    trapezoids: Vec<Trapezoid>,
}

impl TrapezoidSet {
    /// Builds a validated set.
    ///
    /// # Errors
    ///
    /// Returns [`MembershipError::InvalidTrapezoid`] for the first species
    /// whose breakpoints are non-finite or out of order.
    pub fn new(trapezoids: Vec<Trapezoid>) -> Result<Self, MembershipError> {
        for (species, t) in trapezoids.iter().enumerate() {
            t.validate(species)?;
        }
        Ok(Self { trapezoids })
    }

    /// Temperature membership of `species` at `temperature`.
    ///
    /// # Panics
    ///
    /// Panics if `species` is out of range.
    #[inline]
    pub fn membership(&self, species: usize, temperature: f64) -> f64 {
        self.trapezoids[species].membership(temperature)
    }

    /// Number of species covered.
    pub fn len(&self) -> usize {
        self.trapezoids.len()
    }

    /// Returns `true` when the set holds no species.
    pub fn is_empty(&self) -> bool {
        self.trapezoids.is_empty()
    }

    /// Borrow the trapezoids.
    pub fn trapezoids(&self) -> &[Trapezoid] {
        &self.trapezoids
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn rain() -> Trapezoid {
        Trapezoid::new(-5.0, 0.0, 30.0, 40.0)
    }

    #[test]
    fn zero_outside_support() {
        let t = rain();
        assert_eq!(t.membership(-10.0), 0.0);
        assert_eq!(t.membership(-5.0), 0.0);
        assert_eq!(t.membership(40.0), 0.0);
        assert_eq!(t.membership(55.0), 0.0);
    }

    #[test]
    fn one_on_plateau() {
        let t = rain();
        assert_eq!(t.membership(0.0), 1.0);
        assert_eq!(t.membership(15.0), 1.0);
        assert_eq!(t.membership(30.0), 1.0);
    }

    #[test]
    fn linear_ramps() {
        let t = rain();
        assert_relative_eq!(t.membership(-2.5), 0.5);
        assert_relative_eq!(t.membership(35.0), 0.5);
        assert_relative_eq!(t.membership(32.5), 0.75);
    }

    #[test]
    fn rises_then_falls() {
        let t = rain();
        let xs: Vec<f64> = (-100..=500).map(|i| i as f64 * 0.1).collect();
        let mu: Vec<f64> = xs.iter().map(|&x| t.membership(x)).collect();
        let peak = mu.iter().position(|&m| m == 1.0).unwrap();
        assert!(mu[..=peak].windows(2).all(|w| w[0] <= w[1]));
        let last_peak = mu.iter().rposition(|&m| m == 1.0).unwrap();
        assert!(mu[last_peak..].windows(2).all(|w| w[0] >= w[1]));
        assert!(mu.iter().all(|&m| (0.0..=1.0).contains(&m)));
    }

    #[test]
    fn vertical_edges() {
        let t = Trapezoid::new(-10.0, -10.0, 0.0, 0.0);
        assert_eq!(t.membership(-10.0), 1.0);
        assert_eq!(t.membership(0.0), 1.0);
        assert_eq!(t.membership(-10.001), 0.0);
        assert_eq!(t.membership(0.001), 0.0);
    }

    #[test]
    fn nan_propagates() {
        assert!(rain().membership(f64::NAN).is_nan());
    }

    #[test]
    fn set_rejects_unordered() {
        let err = TrapezoidSet::new(vec![rain(), Trapezoid::new(0.0, 5.0, 2.0, 10.0)]).unwrap_err();
        assert!(matches!(err, MembershipError::InvalidTrapezoid { species: 1, .. }));
    }

    #[test]
    fn set_lookup_by_species() {
        let set = TrapezoidSet::new(vec![rain(), Trapezoid::new(-40.0, -30.0, -5.0, 0.0)]).unwrap();
        assert_eq!(set.len(), 2);
        assert_eq!(set.membership(0, 10.0), 1.0);
        assert_eq!(set.membership(1, 10.0), 0.0);
    }
}

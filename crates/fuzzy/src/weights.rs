//! Per-variable weights for the weighted-sum part of the score.

use std::collections::BTreeMap;

use hca_membership::Variable;

use crate::error::FhcError;

/// Nonnegative weight per variable. Variables without an entry weigh zero.
///
/// The default table is DZ 1.5, DR 0.8, KD 1.0, RH 0.8, LD 0.5, T 0.4.
#[derive(Debug, Clone, PartialEq)]
pub struct Weights {
    values: BTreeMap<Variable, f64>,
}

impl Weights {
    /// A table with every weight zero.
    pub fn zero() -> Self {
        Self {
            values: BTreeMap::new(),
        }
    }

    /// Sets one weight.
    pub fn with(mut self, variable: Variable, weight: f64) -> Self {
        self.values.insert(variable, weight);
        self
    }

    /// Weight of `variable` (zero if unset).
    pub fn get(&self, variable: Variable) -> f64 {
        self.values.get(&variable).copied().unwrap_or(0.0)
    }

    /// Checks that every weight is finite and nonnegative.
    pub fn validate(&self) -> Result<(), FhcError> {
        for (&variable, &weight) in &self.values {
            if !weight.is_finite() || weight < 0.0 {
                return Err(FhcError::InvalidWeight { variable, weight });
            }
        }
        Ok(())
    }
}

impl Default for Weights {
    fn default() -> Self {
        Self::zero()
            .with(Variable::Dz, 1.5)
            .with(Variable::Dr, 0.8)
            .with(Variable::Kd, 1.0)
            .with(Variable::Rh, 0.8)
            .with(Variable::Ld, 0.5)
            .with(Variable::T, 0.4)
    }
}

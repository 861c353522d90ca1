//! Per-species membership parameter sets.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::beta::BetaParams;
use crate::error::MembershipError;
use crate::variable::Variable;

/// Column-oriented beta parameters for one variable: `a[c]`, `b[c]`, `m[c]`
/// for every species `c`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct VariableParams {
    /// Half-widths.
    pub a: Vec<f64>,
    /// Slope exponents.
    pub b: Vec<f64>,
    /// Centers.
    pub m: Vec<f64>,
}

impl VariableParams {
    /// Creates column-oriented parameters.
    pub fn new(a: Vec<f64>, b: Vec<f64>, m: Vec<f64>) -> Self {
        Self { a, b, m }
    }

    /// Converts to one [`BetaParams`] per species, checking column lengths.
    pub fn to_beta(&self, variable: Variable, n_types: usize) -> Result<Vec<BetaParams>, MembershipError> {
        for (field, col) in [("a", &self.a), ("b", &self.b), ("m", &self.m)] {
            if col.len() != n_types {
                return Err(MembershipError::LengthMismatch {
                    variable,
                    field,
                    expected: n_types,
                    got: col.len(),
                });
            }
        }
        Ok((0..n_types)
            .map(|c| BetaParams::new(self.a[c], self.b[c], self.m[c]))
            .collect())
    }
}

/// Validated membership parameters for `n_types` species.
///
/// Every stored variable has exactly one [`BetaParams`] per species, each with
/// finite values and non-zero width.
#[derive(Debug, Clone, PartialEq)]
pub struct MembershipSet {
    species: Vec<String>,
    params: BTreeMap<Variable, Vec<BetaParams>>,
}

impl MembershipSet {
    /// Builds a validated set.
    ///
    /// # Errors
    ///
    /// * [`MembershipError::NoSpecies`] if `species` is empty.
    /// * [`MembershipError::LengthMismatch`] if a variable does not carry one
    ///   triplet per species.
    /// * [`MembershipError::ZeroWidth`], [`MembershipError::NonPositiveExponent`]
    ///   or [`MembershipError::NonFiniteParameter`] for invalid triplets.
    pub fn new(
        species: Vec<String>,
        params: BTreeMap<Variable, Vec<BetaParams>>,
    ) -> Result<Self, MembershipError> {
        let n = species.len();
        if n == 0 {
            return Err(MembershipError::NoSpecies);
        }
        for (&variable, triplets) in &params {
            if triplets.len() != n {
                return Err(MembershipError::LengthMismatch {
                    variable,
                    field: "a",
                    expected: n,
                    got: triplets.len(),
                });
            }
            for (c, p) in triplets.iter().enumerate() {
                p.validate(variable, c)?;
            }
        }
        Ok(Self { species, params })
    }

    /// Number of species.
    pub fn n_types(&self) -> usize {
        self.species.len()
    }

    /// Species names, in index order.
    pub fn species(&self) -> &[String] {
        &self.species
    }

    /// Returns `true` if the set carries parameters for `variable`.
    pub fn contains(&self, variable: Variable) -> bool {
        self.params.contains_key(&variable)
    }

    /// All species' parameters for `variable`.
    pub fn params(&self, variable: Variable) -> Option<&[BetaParams]> {
        self.params.get(&variable).map(Vec::as_slice)
    }

    /// Parameters of one species for one variable.
    pub fn get(&self, variable: Variable, species: usize) -> Option<&BetaParams> {
        self.params.get(&variable).and_then(|p| p.get(species))
    }

    /// Variables that have parameters.
    pub fn variables(&self) -> impl Iterator<Item = Variable> + '_ {
        self.params.keys().copied()
    }
}

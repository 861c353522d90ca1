//! Combines per-variable memberships into one score per species and bin.
//!
//! ```text
//! linear:  score = Σ w_k·μ_k / Σ w_k          k ∈ DR, KD, RH, LD, T, DZ (present)
//! hybrid:  score = core · μ_T · μ_DZ
//!          core  = Σ w_k·μ_k / Σ w_k          k ∈ DR, KD, RH, LD (present), else 1
//! ```
//!
//! Sums run in the listed variable order so results are reproducible bit for bit.

use hca_membership::{BetaParams, MembershipSet, TrapezoidSet, Variable};

use crate::error::FhcError;
use crate::measurands::FlatMeasurands;
use crate::method::{ScoringMethod, TemperatureModel};
use crate::weights::Weights;

/// Membership form of one term.
enum Membership<'a> {
    Beta(&'a [BetaParams]),
    Trapezoid(&'a TrapezoidSet),
}

impl Membership<'_> {
    #[inline]
    fn eval(&self, species: usize, x: f64) -> f64 {
        match self {
            Membership::Beta(params) => params[species].membership(x),
            Membership::Trapezoid(set) => set.membership(species, x),
        }
    }
}

/// One variable's contribution: its data, weight and membership functions.
struct Term<'a> {
    weight: f64,
    data: &'a [f64],
    membership: Membership<'a>,
}

/// Per-call scoring plan, resolved once and reused for every species.
///
/// Under the linear method a trapezoid temperature term still carries `w_T`
/// inside the weighted sum, which keeps linear scores in `[0, 1]`.
pub(crate) struct Aggregator<'a> {
    weight_sum: f64,
    pol_flag: bool,
    summed: Vec<Term<'a>>,
    gates: Vec<Term<'a>>,
}

impl<'a> Aggregator<'a> {
    /// Resolves which variables take part and how.
    ///
    /// `use_temp` must already reflect whether temperature was supplied.
    /// `trapezoids` is consulted only for [`TemperatureModel::Trapezoid`].
    pub(crate) fn new(
        flat: &'a FlatMeasurands,
        set: &'a MembershipSet,
        trapezoids: Option<&'a TrapezoidSet>,
        weights: &Weights,
        method: ScoringMethod,
        use_temp: bool,
        temperature_model: TemperatureModel,
    ) -> Result<Self, FhcError> {
        let present = move |v: Variable| flat.contains(v) && (v != Variable::T || use_temp);

        let term = move |variable: Variable| -> Result<Term<'a>, FhcError> {
            let data = flat
                .get(variable)
                .ok_or(FhcError::MissingParameters { variable })?;
            let membership = match (variable, temperature_model) {
                (Variable::T, TemperatureModel::Trapezoid) => {
                    Membership::Trapezoid(trapezoids.ok_or(FhcError::MissingTrapezoids)?)
                }
                _ => Membership::Beta(
                    set.params(variable)
                        .ok_or(FhcError::MissingParameters { variable })?,
                ),
            };
            Ok(Term {
                weight: weights.get(variable),
                data,
                membership,
            })
        };

        let mut summed = Vec::new();
        for &variable in method.summed_variables() {
            if present(variable) {
                summed.push(term(variable)?);
            }
        }

        let mut gates = Vec::new();
        if method == ScoringMethod::Hybrid {
            if present(Variable::T) {
                gates.push(term(Variable::T)?);
            }
            gates.push(term(Variable::Dz)?);
        }

        let pol_flag = Variable::POLARIMETRIC.into_iter().any(present);
        let weight_sum: f64 = summed.iter().map(|t| t.weight).sum();
        if !summed.is_empty() && weight_sum == 0.0 {
            return Err(FhcError::DegenerateWeightSum { method });
        }

        Ok(Self {
            weight_sum,
            pol_flag,
            summed,
            gates,
        })
    }

    /// Sum of the weights of the summed variables.
    pub(crate) fn weight_sum(&self) -> f64 {
        self.weight_sum
    }

    /// Whether any polarimetric variable takes part in the weighted sum.
    pub(crate) fn pol_flag(&self) -> bool {
        self.pol_flag
    }

    /// Writes the score of `species` for every bin into `out`.
    pub(crate) fn score_into(&self, species: usize, out: &mut [f64]) {
        if self.summed.is_empty() {
            out.fill(1.0);
        } else {
            out.fill(0.0);
            for term in &self.summed {
                for (o, &x) in out.iter_mut().zip(term.data) {
                    *o += term.weight * term.membership.eval(species, x);
                }
            }
            for o in out.iter_mut() {
                *o /= self.weight_sum;
            }
        }
        for gate in &self.gates {
            for (o, &x) in out.iter_mut().zip(gate.data) {
                *o *= gate.membership.eval(species, x);
            }
        }
    }
}

//! Per-bin radar measurands.

use std::collections::BTreeMap;

use hca_membership::Variable;
use ndarray::{Array, ArrayD, Dimension, IxDyn};

use crate::error::FhcError;

/// A set of measurand arrays sharing one shape.
///
/// Any dimensionality is accepted, including 0-D scalars. Shapes are not
/// broadcast: [`Measurands::shape`] rejects arrays that disagree.
///
/// # Example
///
/// ```
/// use hca_fuzzy::Measurands;
/// use hca_membership::Variable;
/// use ndarray::array;
///
/// let m = Measurands::new()
///     .with(Variable::Dz, array![[35.0, 40.0], [10.0, 55.0]])
///     .with(Variable::T, array![[5.0, 2.0], [-10.0, 0.0]]);
/// assert_eq!(m.shape().unwrap(), vec![2, 2]);
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Measurands {
    fields: BTreeMap<Variable, ArrayD<f64>>,
}

impl Measurands {
    /// Creates an empty set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds (or replaces) one variable.
    pub fn with<D: Dimension>(mut self, variable: Variable, values: Array<f64, D>) -> Self {
        self.insert(variable, values);
        self
    }

    /// Adds (or replaces) one variable as a 0-D scalar.
    pub fn with_scalar(self, variable: Variable, value: f64) -> Self {
        self.with(variable, ArrayD::from_elem(IxDyn(&[]), value))
    }

    /// Adds (or replaces) one variable in place.
    pub fn insert<D: Dimension>(&mut self, variable: Variable, values: Array<f64, D>) {
        self.fields.insert(variable, values.into_dyn());
    }

    /// Returns a copy without `variable`.
    pub fn without(&self, variable: Variable) -> Self {
        let mut fields = self.fields.clone();
        fields.remove(&variable);
        Self { fields }
    }

    /// Borrow one variable's array.
    pub fn get(&self, variable: Variable) -> Option<&ArrayD<f64>> {
        self.fields.get(&variable)
    }

    /// Returns `true` if `variable` was supplied.
    pub fn contains(&self, variable: Variable) -> bool {
        self.fields.contains_key(&variable)
    }

    /// Supplied variables in key order.
    pub fn variables(&self) -> impl Iterator<Item = Variable> + '_ {
        self.fields.keys().copied()
    }

    /// Returns `true` when nothing was supplied.
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// The common shape of all supplied arrays.
    ///
    /// Reflectivity is the reference when present.
    ///
    /// # Errors
    ///
    /// * [`FhcError::MissingReflectivity`] if the set is empty.
    /// * [`FhcError::ShapeMismatch`] for the first array that disagrees.
    pub fn shape(&self) -> Result<Vec<usize>, FhcError> {
        let reference = self
            .fields
            .get(&Variable::Dz)
            .or_else(|| self.fields.values().next())
            .ok_or(FhcError::MissingReflectivity)?;
        let expected = reference.shape().to_vec();
        for (&variable, values) in &self.fields {
            if values.shape() != expected.as_slice() {
                return Err(FhcError::ShapeMismatch {
                    variable,
                    expected,
                    got: values.shape().to_vec(),
                });
            }
        }
        Ok(expected)
    }

    /// Flattens every array in row-major order after checking shapes.
    pub(crate) fn flatten(&self) -> Result<FlatMeasurands, FhcError> {
        let shape = self.shape()?;
        let fields = self
            .fields
            .iter()
            .map(|(&v, a)| (v, a.iter().copied().collect::<Vec<f64>>()))
            .collect();
        let len = shape.iter().product();
        Ok(FlatMeasurands { shape, len, fields })
    }
}

/// Measurands flattened to one dimension, with the original shape recorded.
#[derive(Debug, Clone)]
pub(crate) struct FlatMeasurands {
    pub(crate) shape: Vec<usize>,
    pub(crate) len: usize,
    fields: BTreeMap<Variable, Vec<f64>>,
}

impl FlatMeasurands {
    pub(crate) fn get(&self, variable: Variable) -> Option<&[f64]> {
        self.fields.get(&variable).map(Vec::as_slice)
    }

    pub(crate) fn contains(&self, variable: Variable) -> bool {
        self.fields.contains_key(&variable)
    }
}

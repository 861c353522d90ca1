//! Per-species score cubes and their arg-max reduction.

use ndarray::{ArrayD, ArrayViewD, Axis, IxDyn};

use crate::error::FhcError;

/// Category assigned to a bin whose scores cannot be compared (NaN input).
pub const UNCLASSIFIED: i32 = 0;

/// Index of the largest value, first index on ties.
///
/// Returns `None` for an empty column or when any value is NaN, so invalid
/// input never produces a spurious species.
pub fn argmax<I: IntoIterator<Item = f64>>(column: I) -> Option<usize> {
    let mut best: Option<(usize, f64)> = None;
    for (i, v) in column.into_iter().enumerate() {
        if v.is_nan() {
            return None;
        }
        match best {
            Some((_, b)) if v <= b => {}
            _ => best = Some((i, v)),
        }
    }
    best.map(|(i, _)| i)
}

/// Membership scores with shape `(n_types, *bin_shape)`.
#[derive(Debug, Clone, PartialEq)]
pub struct ScoreCube {
    scores: ArrayD<f64>,
    species: Vec<String>,
}

impl ScoreCube {
    /// Builds a cube from species-major flat scores.
    ///
    /// # Errors
    ///
    /// Returns [`FhcError::Shape`] if `flat.len()` is not
    /// `species.len() × product(bin_shape)`.
    pub fn from_flat(flat: Vec<f64>, bin_shape: &[usize], species: Vec<String>) -> Result<Self, FhcError> {
        let mut shape = Vec::with_capacity(bin_shape.len() + 1);
        shape.push(species.len());
        shape.extend_from_slice(bin_shape);
        let scores = ArrayD::from_shape_vec(IxDyn(&shape), flat)?;
        Ok(Self { scores, species })
    }

    /// Number of species.
    pub fn n_types(&self) -> usize {
        self.species.len()
    }

    /// Species names, in index order.
    pub fn species_names(&self) -> &[String] {
        &self.species
    }

    /// Shape of one species slice (the measurand shape).
    pub fn bin_shape(&self) -> &[usize] {
        &self.scores.shape()[1..]
    }

    /// The full cube.
    pub fn scores(&self) -> &ArrayD<f64> {
        &self.scores
    }

    /// Scores of one species.
    ///
    /// # Panics
    ///
    /// Panics if `species >= n_types()`.
    pub fn species(&self, species: usize) -> ArrayViewD<'_, f64> {
        self.scores.index_axis(Axis(0), species)
    }

    /// Consumes the cube, returning the raw array.
    pub fn into_scores(self) -> ArrayD<f64> {
        self.scores
    }

    /// 1-based arg-max species per bin; `unclassified` where a column holds NaN.
    pub fn categories(&self, unclassified: i32) -> Result<ArrayD<i32>, FhcError> {
        self.categories_with(|c| c as i32 + 1, unclassified)
    }

    /// Arg-max per bin mapped through `label`, `unclassified` where a column holds NaN.
    pub fn categories_with<F>(&self, label: F, unclassified: i32) -> Result<ArrayD<i32>, FhcError>
    where
        F: Fn(usize) -> i32,
    {
        let cats: Vec<i32> = self
            .scores
            .lanes(Axis(0))
            .into_iter()
            .map(|lane| argmax(lane.iter().copied()).map_or(unclassified, &label))
            .collect();
        Ok(ArrayD::from_shape_vec(IxDyn(self.bin_shape()), cats)?)
    }
}

//! Result types for winter classification.

use hca_fuzzy::ScoreCube;
use ndarray::ArrayD;

use crate::category::WinterCategory;

/// Per-stage categorizations and scores, returned on request.
#[derive(Debug, Clone)]
pub struct WinterIntermediates {
    /// Melt categorization with wet snow rewritten to 5.
    pub melt: ArrayD<i32>,
    /// Warm-regime categories (6 or 7, -1 for NaN bins).
    pub warm: ArrayD<i32>,
    /// Cold-regime categories (1 to 4, -1 for NaN bins).
    pub cold: ArrayD<i32>,
    /// The detector's own score cube, if it produced one.
    pub melt_scores: Option<ArrayD<f64>>,
    /// Warm-regime score cube.
    pub warm_scores: ScoreCube,
    /// Cold-regime score cube.
    pub cold_scores: ScoreCube,
}

/// Output of [`classify_winter`](crate::classify_winter).
#[derive(Debug, Clone)]
pub struct WinterResult {
    categories: ArrayD<i32>,
    melt_height: f64,
    intermediates: Option<WinterIntermediates>,
}

impl WinterResult {
    /// Creates a new result.
    pub fn new(
        categories: ArrayD<i32>,
        melt_height: f64,
        intermediates: Option<WinterIntermediates>,
    ) -> Self {
        Self {
            categories,
            melt_height,
            intermediates,
        }
    }

    /// Final winter codes, same shape as the input measurands.
    pub fn categories(&self) -> &ArrayD<i32> {
        &self.categories
    }

    /// Consumes self and returns the final codes.
    pub fn into_categories(self) -> ArrayD<i32> {
        self.categories
    }

    /// Melting-layer height estimate reported by the detector, in km.
    pub fn melt_height(&self) -> f64 {
        self.melt_height
    }

    /// Category of one bin by flat (row-major) index.
    pub fn category_at(&self, index: usize) -> Option<WinterCategory> {
        self.categories
            .iter()
            .nth(index)
            .and_then(|&c| WinterCategory::from_code(c))
    }

    /// Intermediate stages, if requested.
    pub fn intermediates(&self) -> Option<&WinterIntermediates> {
        self.intermediates.as_ref()
    }
}

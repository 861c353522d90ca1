//! Result types for summer classification.

use ndarray::ArrayD;

use crate::cube::ScoreCube;

/// Output of [`classify_summer`](crate::classify_summer).
#[derive(Debug, Clone)]
pub struct SummerResult {
    /// 1-based species per bin, [`UNCLASSIFIED`](crate::UNCLASSIFIED) for NaN bins.
    categories: ArrayD<i32>,
    /// Species names, index `category - 1`.
    species: Vec<String>,
    /// The full score cube, when requested.
    scores: Option<ScoreCube>,
}

impl SummerResult {
    /// Creates a new result.
    pub fn new(categories: ArrayD<i32>, species: Vec<String>, scores: Option<ScoreCube>) -> Self {
        Self {
            categories,
            species,
            scores,
        }
    }

    /// Returns the categories, same shape as the input measurands.
    pub fn categories(&self) -> &ArrayD<i32> {
        &self.categories
    }

    /// Consumes self and returns the categories.
    pub fn into_categories(self) -> ArrayD<i32> {
        self.categories
    }

    /// Returns the species names.
    pub fn species(&self) -> &[String] {
        &self.species
    }

    /// Name of a 1-based category, `None` for the sentinel or out of range.
    pub fn label(&self, category: i32) -> Option<&str> {
        let idx = usize::try_from(category).ok()?.checked_sub(1)?;
        self.species.get(idx).map(String::as_str)
    }

    /// Returns the score cube, if it was requested.
    pub fn scores(&self) -> Option<&ScoreCube> {
        self.scores.as_ref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::{IxDyn, array};

    #[test]
    fn labels() {
        let r = SummerResult::new(
            array![1, 2].into_dyn(),
            vec!["Drizzle".into(), "Rain".into()],
            None,
        );
        assert_eq!(r.label(1), Some("Drizzle"));
        assert_eq!(r.label(2), Some("Rain"));
        assert_eq!(r.label(0), None);
        assert_eq!(r.label(3), None);
        assert_eq!(r.label(-1), None);
        assert!(r.scores().is_none());
    }

    #[test]
    fn into_categories() {
        let r = SummerResult::new(ArrayD::from_elem(IxDyn(&[]), 4), Vec::new(), None);
        assert_eq!(r.into_categories().ndim(), 0);
    }
}

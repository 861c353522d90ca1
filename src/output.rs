//! JSON output structures for classification results.

use std::collections::BTreeMap;
use std::path::Path;

use anyhow::{Context, Result};
use hca_fuzzy::{ScoreCube, SummerResult};
use hca_winter::{WinterCategory, WinterResult};
use ndarray::ArrayD;
use serde::Serialize;
use tracing::info;

/// Top-level classification output.
#[derive(Debug, Serialize)]
pub struct ClassificationOutput {
    /// Bin shape; every flat array below is row-major in this shape.
    pub shape: Vec<usize>,
    pub categories: Vec<i32>,
    /// category code -> label
    pub labels: BTreeMap<i32, String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub melt_height: Option<f64>,
    /// stage -> categories (winter only)
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub stages: BTreeMap<String, Vec<i32>>,
    /// stage -> score cube
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub scores: BTreeMap<String, ScoresOutput>,
}

/// A flattened score cube. NaN is written as `null`.
#[derive(Debug, Serialize)]
pub struct ScoresOutput {
    /// `[n_types, *bin_shape]`
    pub shape: Vec<usize>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub species: Vec<String>,
    pub values: Vec<Option<f64>>,
}

impl ScoresOutput {
    fn from_array(scores: &ArrayD<f64>, species: Vec<String>) -> Self {
        Self {
            shape: scores.shape().to_vec(),
            species,
            values: scores
                .iter()
                .map(|&v| if v.is_nan() { None } else { Some(v) })
                .collect(),
        }
    }

    fn from_cube(cube: &ScoreCube) -> Self {
        Self::from_array(cube.scores(), cube.species_names().to_vec())
    }
}

fn flat(a: &ArrayD<i32>) -> Vec<i32> {
    a.iter().copied().collect()
}

impl ClassificationOutput {
    /// Builds the summer output. Category 0 is labelled unclassified.
    pub fn from_summer(result: &SummerResult) -> Self {
        let mut labels: BTreeMap<i32, String> = result
            .species()
            .iter()
            .zip(1..)
            .map(|(name, code)| (code, name.clone()))
            .collect();
        labels.insert(hca_fuzzy::UNCLASSIFIED, "Unclassified".to_string());

        let mut scores = BTreeMap::new();
        if let Some(cube) = result.scores() {
            scores.insert("summer".to_string(), ScoresOutput::from_cube(cube));
        }
        Self {
            shape: result.categories().shape().to_vec(),
            categories: flat(result.categories()),
            labels,
            melt_height: None,
            stages: BTreeMap::new(),
            scores,
        }
    }

    /// Builds the winter output, with stages and cubes when present.
    ///
    /// The melt stage may contain code 0, which never appears in the final
    /// categories; it is labelled only when stages are written.
    pub fn from_winter(result: &WinterResult) -> Self {
        let mut labels: BTreeMap<i32, String> = WinterCategory::ALL
            .iter()
            .map(|c| (c.code(), c.label().to_string()))
            .collect();

        let mut stages = BTreeMap::new();
        let mut scores = BTreeMap::new();
        if let Some(inter) = result.intermediates() {
            labels.insert(0, "Unclassified (melt)".to_string());
            stages.insert("melt".to_string(), flat(&inter.melt));
            stages.insert("warm".to_string(), flat(&inter.warm));
            stages.insert("cold".to_string(), flat(&inter.cold));
            if let Some(melt) = &inter.melt_scores {
                scores.insert("melt".to_string(), ScoresOutput::from_array(melt, Vec::new()));
            }
            scores.insert("warm".to_string(), ScoresOutput::from_cube(&inter.warm_scores));
            scores.insert("cold".to_string(), ScoresOutput::from_cube(&inter.cold_scores));
        }
        Self {
            shape: result.categories().shape().to_vec(),
            categories: flat(result.categories()),
            labels,
            melt_height: Some(result.melt_height()).filter(|h| h.is_finite()),
            stages,
            scores,
        }
    }

    /// Writes pretty JSON to `path`, or to stdout when `path` is `None`.
    pub fn write(&self, path: Option<&Path>) -> Result<()> {
        let json = serde_json::to_string_pretty(self).context("failed to serialize result")?;
        match path {
            Some(path) => {
                info!(path = %path.display(), "writing result");
                std::fs::write(path, json)
                    .with_context(|| format!("failed to write result: {}", path.display()))?;
            }
            None => println!("{json}"),
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use hca_winter::WinterIntermediates;
    use ndarray::{IxDyn, array};

    #[test]
    fn summer_json_shape() {
        let cube = ScoreCube::from_flat(
            vec![0.2, f64::NAN, 0.8, f64::NAN],
            &[2],
            vec!["Drizzle".into(), "Rain".into()],
        )
        .unwrap();
        let result = SummerResult::new(
            array![2, 0].into_dyn(),
            vec!["Drizzle".into(), "Rain".into()],
            Some(cube),
        );
        let out = ClassificationOutput::from_summer(&result);
        let json: serde_json::Value = serde_json::to_value(&out).unwrap();

        assert_eq!(json["shape"], serde_json::json!([2]));
        assert_eq!(json["categories"], serde_json::json!([2, 0]));
        assert_eq!(json["labels"]["1"], "Drizzle");
        assert_eq!(json["labels"]["0"], "Unclassified");
        assert_eq!(json["scores"]["summer"]["shape"], serde_json::json!([2, 2]));
        assert!(json["scores"]["summer"]["values"][1].is_null());
        assert!(json.get("stages").is_none());
        assert!(json.get("melt_height").is_none());
    }

    #[test]
    fn winter_json_without_intermediates() {
        let result = WinterResult::new(ArrayD::from_elem(IxDyn(&[3]), 7), f64::NAN, None);
        let out = ClassificationOutput::from_winter(&result);
        let json: serde_json::Value = serde_json::to_value(&out).unwrap();

        assert_eq!(json["categories"], serde_json::json!([7, 7, 7]));
        assert_eq!(json["labels"]["-1"], "Unclassified");
        assert_eq!(json["labels"]["5"], "Wet Snow");
        assert!(json.get("melt_height").is_none());
        assert!(json.get("scores").is_none());
    }

    #[test]
    fn winter_json_labels_melt_stage_zero() {
        let cube = |n: usize| {
            ScoreCube::from_flat(vec![0.5; 2 * n], &[2], (0..n).map(|i| format!("s{i}")).collect())
                .unwrap()
        };
        let inter = WinterIntermediates {
            melt: array![0, 5].into_dyn(),
            warm: array![7, 6].into_dyn(),
            cold: array![1, 2].into_dyn(),
            melt_scores: None,
            warm_scores: cube(2),
            cold_scores: cube(4),
        };
        let result = WinterResult::new(array![-1, 5].into_dyn(), 3.5, Some(inter));
        let out = ClassificationOutput::from_winter(&result);
        let json: serde_json::Value = serde_json::to_value(&out).unwrap();

        assert_eq!(json["stages"]["melt"], serde_json::json!([0, 5]));
        assert_eq!(json["labels"]["0"], "Unclassified (melt)");
        assert_eq!(json["labels"]["-1"], "Unclassified");
        assert_eq!(json["melt_height"], 3.5);
    }
}

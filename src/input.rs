//! JSON bin files.
//!
//! ```json
//! {
//!   "shape": [2, 3],
//!   "fields": { "DZ": [35.0, 40.0, null, 10.0, 55.0, 20.0], "T": [...] },
//!   "regime": [0, 0, 1, 2, 2, 2],
//!   "melt_category": [1, 1, 2, 1, 1, -1],
//!   "melt_height": 3.4
//! }
//! ```
//!
//! Arrays are flat in row-major order. `null` marks a missing value and is
//! read as NaN. The melting-layer keys are only used by `hca winter`.

use std::collections::BTreeMap;
use std::path::Path;

use anyhow::{Context, Result, bail};
use hca_fuzzy::Measurands;
use hca_membership::Variable;
use hca_winter::{MeltingLayer, WinterInput};
use ndarray::{ArrayD, IxDyn};
use serde::Deserialize;

/// Contents of one bin file.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct BinFile {
    pub shape: Vec<usize>,
    pub fields: BTreeMap<Variable, Vec<Option<f64>>>,
    #[serde(default)]
    pub regime: Option<Vec<u8>>,
    #[serde(default)]
    pub melt_category: Option<Vec<i32>>,
    #[serde(default)]
    pub melt_height: Option<f64>,
    #[serde(default)]
    pub heights: Option<Vec<Option<f64>>>,
    #[serde(default)]
    pub azimuths: Option<Vec<f64>>,
}

impl BinFile {
    /// Reads and parses a bin file.
    pub fn read(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read bin file: {}", path.display()))?;
        serde_json::from_str(&text)
            .with_context(|| format!("failed to parse bin file: {}", path.display()))
    }

    /// Number of bins implied by `shape`.
    pub fn n_bins(&self) -> usize {
        self.shape.iter().product()
    }

    fn reshape<T>(&self, name: &str, values: Vec<T>) -> Result<ArrayD<T>> {
        if values.len() != self.n_bins() {
            bail!(
                "{name} has {} values but shape {:?} holds {}",
                values.len(),
                self.shape,
                self.n_bins()
            );
        }
        ArrayD::from_shape_vec(IxDyn(&self.shape), values)
            .with_context(|| format!("failed to reshape {name}"))
    }

    /// Builds the measurand set, `null` becoming NaN.
    pub fn measurands(&self) -> Result<Measurands> {
        let mut m = Measurands::new();
        for (&variable, values) in &self.fields {
            let values: Vec<f64> = values.iter().map(|v| v.unwrap_or(f64::NAN)).collect();
            m.insert(variable, self.reshape(variable.key(), values)?);
        }
        Ok(m)
    }

    /// Builds the winter input: measurands plus optional geometry.
    pub fn winter_input(&self) -> Result<WinterInput> {
        let mut input = WinterInput::new(self.measurands()?);
        if let Some(heights) = &self.heights {
            let heights: Vec<f64> = heights.iter().map(|v| v.unwrap_or(f64::NAN)).collect();
            input = input.with_heights(self.reshape("heights", heights)?);
        }
        if let Some(azimuths) = &self.azimuths {
            input = input.with_azimuths(azimuths.clone());
        }
        Ok(input)
    }

    /// Builds the stored melting-layer partition.
    ///
    /// A missing height estimate is recorded as NaN.
    pub fn melting_layer(&self) -> Result<MeltingLayer> {
        let regime = self
            .regime
            .clone()
            .context("winter classification needs a \"regime\" array")?;
        let melt = self
            .melt_category
            .clone()
            .context("winter classification needs a \"melt_category\" array")?;
        Ok(MeltingLayer::new(
            self.reshape("regime", regime)?,
            self.melt_height.unwrap_or(f64::NAN),
            self.reshape("melt_category", melt)?,
        ))
    }
}

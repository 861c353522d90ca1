//! The melting-layer seam: request, result, detector trait and a replaying
//! detector.
//!
//! Detection itself (bright-band search over sectors, wet-snow scoring) lives
//! outside this crate. Anything implementing [`MeltingLayerDetector`] can be
//! plugged into [`classify_winter`](crate::classify_winter).

use std::fmt;
use std::str::FromStr;

use hca_fuzzy::Measurands;
use hca_membership::Band;
use ndarray::ArrayD;
use tracing::debug;

use crate::error::WinterError;

/// Vertical position of a bin relative to the melting layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Regime {
    /// Below the melting layer (code 0).
    Warm,
    /// Inside the melting layer (code 1).
    Transition,
    /// Above the melting layer (code 2).
    Cold,
}

impl Regime {
    /// Parses a mask code.
    pub fn from_code(value: u8) -> Result<Self, WinterError> {
        match value {
            0 => Ok(Regime::Warm),
            1 => Ok(Regime::Transition),
            2 => Ok(Regime::Cold),
            _ => Err(WinterError::InvalidRegime { value }),
        }
    }

    /// Mask code.
    pub fn code(self) -> u8 {
        match self {
            Regime::Warm => 0,
            Regime::Transition => 1,
            Regime::Cold => 2,
        }
    }
}

/// Melting-layer categorization of one bin.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MeltClass {
    /// No data (code -1).
    NoData,
    /// Data present but not classified (code 0).
    Unclassified,
    /// Ice-type echo (code 1).
    IceType,
    /// Wet snow (code 2).
    WetSnow,
}

impl MeltClass {
    /// Parses a detector category code.
    pub fn from_code(value: i32) -> Result<Self, WinterError> {
        match value {
            -1 => Ok(MeltClass::NoData),
            0 => Ok(MeltClass::Unclassified),
            1 => Ok(MeltClass::IceType),
            2 => Ok(MeltClass::WetSnow),
            _ => Err(WinterError::InvalidMeltCategory { value }),
        }
    }

    /// Detector category code.
    pub fn code(self) -> i32 {
        match self {
            MeltClass::NoData => -1,
            MeltClass::Unclassified => 0,
            MeltClass::IceType => 1,
            MeltClass::WetSnow => 2,
        }
    }
}

/// Scan geometry of the input volume.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ScanType {
    /// Plan position indicator (constant elevation sweep).
    #[default]
    Ppi,
    /// Range height indicator (constant azimuth sweep).
    Rhi,
    /// Cartesian grid.
    Grid,
}

impl fmt::Display for ScanType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ScanType::Ppi => f.write_str("ppi"),
            ScanType::Rhi => f.write_str("rhi"),
            ScanType::Grid => f.write_str("grid"),
        }
    }
}

impl FromStr for ScanType {
    type Err = WinterError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "ppi" => Ok(ScanType::Ppi),
            "rhi" => Ok(ScanType::Rhi),
            "grid" => Ok(ScanType::Grid),
            _ => Err(WinterError::UnknownScanType {
                name: s.to_string(),
            }),
        }
    }
}

/// Everything a detector is given.
#[derive(Debug, Clone, Copy)]
pub struct MeltingLayerRequest<'a> {
    /// Full measurand set, RH and SN included when supplied.
    pub measurands: &'a Measurands,
    /// Beam height of every bin in km, measurand shape.
    pub heights: Option<&'a ArrayD<f64>>,
    /// Ray azimuths in degrees.
    pub azimuths: Option<&'a [f64]>,
    /// Scan geometry.
    pub scan_type: ScanType,
    /// Radar band.
    pub band: Band,
    /// Climatological melting-layer height in km.
    pub expected_melt_height: f64,
    /// Minimum correlation coefficient for a usable bin.
    pub min_rh: f64,
    /// Signal-to-noise threshold.
    pub sn_thresh: f64,
    /// Number of azimuthal sectors searched independently.
    pub n_sectors: usize,
}

/// A detector's partition of the volume.
#[derive(Debug, Clone, PartialEq)]
pub struct MeltingLayer {
    regime: ArrayD<u8>,
    melt_height: f64,
    categories: ArrayD<i32>,
    scores: Option<ArrayD<f64>>,
}

impl MeltingLayer {
    /// Creates a result from a regime mask, a height estimate and a
    /// per-bin melt categorization.
    pub fn new(regime: ArrayD<u8>, melt_height: f64, categories: ArrayD<i32>) -> Self {
        Self {
            regime,
            melt_height,
            categories,
            scores: None,
        }
    }

    /// Attaches the detector's own score cube (species axis first).
    pub fn with_scores(mut self, scores: ArrayD<f64>) -> Self {
        self.scores = Some(scores);
        self
    }

    /// Regime mask, codes 0/1/2.
    pub fn regime(&self) -> &ArrayD<u8> {
        &self.regime
    }

    /// Estimated melting-layer height in km.
    pub fn melt_height(&self) -> f64 {
        self.melt_height
    }

    /// Melt categorization, codes -1/0/1/2.
    pub fn categories(&self) -> &ArrayD<i32> {
        &self.categories
    }

    /// The detector's score cube, if it produced one.
    pub fn scores(&self) -> Option<&ArrayD<f64>> {
        self.scores.as_ref()
    }

    /// Checks shapes against the measurand shape and every code against its domain.
    pub fn validate(&self, shape: &[usize]) -> Result<(), WinterError> {
        check_shape("regime", self.regime.shape(), shape)?;
        check_shape("melt_category", self.categories.shape(), shape)?;
        if let Some(scores) = &self.scores
            && scores.shape().get(1..) != Some(shape)
        {
            return Err(WinterError::ShapeMismatch {
                field: "melt_scores",
                expected: shape.to_vec(),
                got: scores.shape().to_vec(),
            });
        }
        self.regime_classes()?;
        self.melt_classes()?;
        Ok(())
    }

    /// Regime mask in row-major order.
    pub fn regime_classes(&self) -> Result<Vec<Regime>, WinterError> {
        self.regime.iter().map(|&r| Regime::from_code(r)).collect()
    }

    /// Melt categorization in row-major order.
    pub fn melt_classes(&self) -> Result<Vec<MeltClass>, WinterError> {
        self.categories.iter().map(|&c| MeltClass::from_code(c)).collect()
    }
}

pub(crate) fn check_shape(field: &'static str, got: &[usize], expected: &[usize]) -> Result<(), WinterError> {
    if got != expected {
        return Err(WinterError::ShapeMismatch {
            field,
            expected: expected.to_vec(),
            got: got.to_vec(),
        });
    }
    Ok(())
}

/// Partitions a volume into warm, transition and cold regimes.
pub trait MeltingLayerDetector {
    /// Runs detection for one call.
    fn detect(&self, request: &MeltingLayerRequest<'_>) -> Result<MeltingLayer, WinterError>;
}

impl<D: MeltingLayerDetector + ?Sized> MeltingLayerDetector for &D {
    fn detect(&self, request: &MeltingLayerRequest<'_>) -> Result<MeltingLayer, WinterError> {
        (**self).detect(request)
    }
}

/// Replays a stored [`MeltingLayer`] regardless of the request.
///
/// Useful when detection ran upstream and its output was saved alongside the
/// measurands.
#[derive(Debug, Clone, PartialEq)]
pub struct PrecomputedMeltingLayer {
    layer: MeltingLayer,
}

impl PrecomputedMeltingLayer {
    /// Wraps a stored result.
    pub fn new(layer: MeltingLayer) -> Self {
        Self { layer }
    }

    /// The stored result.
    pub fn layer(&self) -> &MeltingLayer {
        &self.layer
    }
}

impl MeltingLayerDetector for PrecomputedMeltingLayer {
    fn detect(&self, request: &MeltingLayerRequest<'_>) -> Result<MeltingLayer, WinterError> {
        debug!(
            scan_type = %request.scan_type,
            melt_height = self.layer.melt_height,
            "replaying precomputed melting layer"
        );
        Ok(self.layer.clone())
    }
}

//! Configuration for winter classification.

use hca_fuzzy::{ScoringMethod, Weights};
use hca_membership::Band;

use crate::error::WinterError;
use crate::melting::ScanType;

/// Configuration for [`classify_winter`](crate::classify_winter).
///
/// Defaults: S band radar scored against the C band winter tables, hybrid
/// method, default weights, `sn_thresh = 5.0`, `expected_melt_height = 4.0`
/// km, 36 sectors, `min_rh = 0.5`, PPI scan, 4 cold species, no scores
/// returned.
#[derive(Debug, Clone, PartialEq)]
pub struct WinterConfig {
    /// Radar band, passed to the detector.
    band: Band,
    /// Band of the warm and cold parameter sets.
    scoring_band: Band,
    method: ScoringMethod,
    weights: Weights,
    sn_thresh: f64,
    /// Climatological melting-layer height in km.
    expected_melt_height: f64,
    n_sectors: usize,
    min_rh: f64,
    scan_type: ScanType,
    n_cold_types: usize,
    return_scores: bool,
}

impl WinterConfig {
    /// Creates a configuration with the defaults.
    pub fn new() -> Self {
        Self {
            band: Band::S,
            scoring_band: Band::C,
            method: ScoringMethod::Hybrid,
            weights: Weights::default(),
            sn_thresh: 5.0,
            expected_melt_height: 4.0,
            n_sectors: 36,
            min_rh: 0.5,
            scan_type: ScanType::Ppi,
            n_cold_types: 4,
            return_scores: false,
        }
    }

    /// Sets the radar band.
    pub fn with_band(mut self, band: Band) -> Self {
        self.band = band;
        self
    }

    /// Sets the band of the winter parameter sets.
    pub fn with_scoring_band(mut self, band: Band) -> Self {
        self.scoring_band = band;
        self
    }

    /// Sets the combination strategy for the warm and cold passes.
    pub fn with_method(mut self, method: ScoringMethod) -> Self {
        self.method = method;
        self
    }

    /// Sets the weights for the warm and cold passes.
    pub fn with_weights(mut self, weights: Weights) -> Self {
        self.weights = weights;
        self
    }

    /// Sets the signal-to-noise threshold.
    pub fn with_sn_thresh(mut self, sn_thresh: f64) -> Self {
        self.sn_thresh = sn_thresh;
        self
    }

    /// Sets the expected melting-layer height in km.
    pub fn with_expected_melt_height(mut self, height: f64) -> Self {
        self.expected_melt_height = height;
        self
    }

    /// Sets the number of azimuthal sectors.
    pub fn with_n_sectors(mut self, n_sectors: usize) -> Self {
        self.n_sectors = n_sectors;
        self
    }

    /// Sets the minimum correlation coefficient.
    pub fn with_min_rh(mut self, min_rh: f64) -> Self {
        self.min_rh = min_rh;
        self
    }

    /// Sets the scan geometry.
    pub fn with_scan_type(mut self, scan_type: ScanType) -> Self {
        self.scan_type = scan_type;
        self
    }

    /// Sets the number of cold-regime species.
    pub fn with_n_cold_types(mut self, n: usize) -> Self {
        self.n_cold_types = n;
        self
    }

    /// Sets whether intermediate categorizations and score cubes are returned.
    pub fn with_return_scores(mut self, return_scores: bool) -> Self {
        self.return_scores = return_scores;
        self
    }

    // --- Accessors ---

    /// Returns the radar band.
    pub fn band(&self) -> Band {
        self.band
    }

    /// Returns the band of the winter parameter sets.
    pub fn scoring_band(&self) -> Band {
        self.scoring_band
    }

    /// Returns the combination strategy.
    pub fn method(&self) -> ScoringMethod {
        self.method
    }

    /// Returns the weights.
    pub fn weights(&self) -> &Weights {
        &self.weights
    }

    /// Returns the signal-to-noise threshold.
    pub fn sn_thresh(&self) -> f64 {
        self.sn_thresh
    }

    /// Returns the expected melting-layer height in km.
    pub fn expected_melt_height(&self) -> f64 {
        self.expected_melt_height
    }

    /// Returns the number of azimuthal sectors.
    pub fn n_sectors(&self) -> usize {
        self.n_sectors
    }

    /// Returns the minimum correlation coefficient.
    pub fn min_rh(&self) -> f64 {
        self.min_rh
    }

    /// Returns the scan geometry.
    pub fn scan_type(&self) -> ScanType {
        self.scan_type
    }

    /// Returns the number of cold-regime species.
    pub fn n_cold_types(&self) -> usize {
        self.n_cold_types
    }

    /// Returns whether intermediates are returned.
    pub fn return_scores(&self) -> bool {
        self.return_scores
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<(), WinterError> {
        self.weights.validate()?;
        if self.n_sectors == 0 {
            return Err(WinterError::InvalidConfig {
                reason: "n_sectors must be >= 1".to_string(),
            });
        }
        if !(1..=4).contains(&self.n_cold_types) {
            return Err(WinterError::InvalidConfig {
                reason: format!("n_cold_types must be in 1..=4, got {}", self.n_cold_types),
            });
        }
        if !self.sn_thresh.is_finite() {
            return Err(WinterError::InvalidConfig {
                reason: format!("sn_thresh must be finite, got {}", self.sn_thresh),
            });
        }
        if !self.expected_melt_height.is_finite() || self.expected_melt_height <= 0.0 {
            return Err(WinterError::InvalidConfig {
                reason: format!(
                    "expected_melt_height must be finite and > 0, got {}",
                    self.expected_melt_height
                ),
            });
        }
        if !(0.0..=1.0).contains(&self.min_rh) {
            return Err(WinterError::InvalidConfig {
                reason: format!("min_rh must be in [0, 1], got {}", self.min_rh),
            });
        }
        Ok(())
    }
}

impl Default for WinterConfig {
    fn default() -> Self {
        Self::new()
    }
}

//! Configuration for scoring and summer classification.

use hca_membership::Band;

use crate::error::FhcError;
use crate::method::{ScoringMethod, TemperatureModel};
use crate::weights::Weights;

/// How one species score is built from the measurands.
///
/// Defaults: [`Weights::default`], hybrid method, temperature used, beta
/// temperature model.
#[derive(Debug, Clone, PartialEq)]
pub struct ScoringOptions {
    /// Per-variable weights for the weighted sum.
    weights: Weights,
    /// Combination strategy.
    method: ScoringMethod,
    /// Whether temperature is scored (ignored when T is not supplied).
    use_temp: bool,
    /// Membership form for temperature.
    temperature_model: TemperatureModel,
}

impl ScoringOptions {
    /// Creates options with the defaults.
    pub fn new() -> Self {
        Self {
            weights: Weights::default(),
            method: ScoringMethod::Hybrid,
            use_temp: true,
            temperature_model: TemperatureModel::Beta,
        }
    }

    /// Sets the weights.
    pub fn with_weights(mut self, weights: Weights) -> Self {
        self.weights = weights;
        self
    }

    /// Sets the combination strategy.
    pub fn with_method(mut self, method: ScoringMethod) -> Self {
        self.method = method;
        self
    }

    /// Sets whether temperature is scored.
    pub fn with_use_temp(mut self, use_temp: bool) -> Self {
        self.use_temp = use_temp;
        self
    }

    /// Sets the temperature membership form.
    pub fn with_temperature_model(mut self, model: TemperatureModel) -> Self {
        self.temperature_model = model;
        self
    }

    /// Returns the weights.
    pub fn weights(&self) -> &Weights {
        &self.weights
    }

    /// Returns the combination strategy.
    pub fn method(&self) -> ScoringMethod {
        self.method
    }

    /// Returns whether temperature is scored.
    pub fn use_temp(&self) -> bool {
        self.use_temp
    }

    /// Returns the temperature membership form.
    pub fn temperature_model(&self) -> TemperatureModel {
        self.temperature_model
    }

    /// Validates the options.
    pub fn validate(&self) -> Result<(), FhcError> {
        self.weights.validate()
    }
}

impl Default for ScoringOptions {
    fn default() -> Self {
        Self::new()
    }
}

/// Configuration for [`classify_summer`](crate::classify_summer).
///
/// Defaults: default [`ScoringOptions`], S band, 10 species,
/// `temp_factor = 1.0`, no score cube returned.
///
/// # Example
///
/// ```
/// use hca_fuzzy::{ScoringMethod, SummerConfig};
/// use hca_membership::Band;
///
/// let config = SummerConfig::new()
///     .with_band(Band::C)
///     .with_method(ScoringMethod::Linear)
///     .with_return_scores(true);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct SummerConfig {
    scoring: ScoringOptions,
    band: Band,
    n_types: usize,
    temp_factor: f64,
    return_scores: bool,
}

impl SummerConfig {
    /// Creates a configuration with the defaults.
    pub fn new() -> Self {
        Self {
            scoring: ScoringOptions::new(),
            band: Band::S,
            n_types: 10,
            temp_factor: 1.0,
            return_scores: false,
        }
    }

    /// Replaces all scoring options at once.
    pub fn with_scoring(mut self, scoring: ScoringOptions) -> Self {
        self.scoring = scoring;
        self
    }

    /// Sets the weights.
    pub fn with_weights(mut self, weights: Weights) -> Self {
        self.scoring = self.scoring.with_weights(weights);
        self
    }

    /// Sets the combination strategy.
    pub fn with_method(mut self, method: ScoringMethod) -> Self {
        self.scoring = self.scoring.with_method(method);
        self
    }

    /// Sets whether temperature is scored.
    pub fn with_use_temp(mut self, use_temp: bool) -> Self {
        self.scoring = self.scoring.with_use_temp(use_temp);
        self
    }

    /// Sets the temperature membership form.
    pub fn with_temperature_model(mut self, model: TemperatureModel) -> Self {
        self.scoring = self.scoring.with_temperature_model(model);
        self
    }

    /// Sets the radar band.
    pub fn with_band(mut self, band: Band) -> Self {
        self.band = band;
        self
    }

    /// Sets the number of species.
    pub fn with_n_types(mut self, n_types: usize) -> Self {
        self.n_types = n_types;
        self
    }

    /// Sets the temperature broadening factor.
    pub fn with_temp_factor(mut self, temp_factor: f64) -> Self {
        self.temp_factor = temp_factor;
        self
    }

    /// Sets whether the score cube is returned alongside the categories.
    pub fn with_return_scores(mut self, return_scores: bool) -> Self {
        self.return_scores = return_scores;
        self
    }

    // --- Accessors ---

    /// Returns the scoring options.
    pub fn scoring(&self) -> &ScoringOptions {
        &self.scoring
    }

    /// Returns the combination strategy.
    pub fn method(&self) -> ScoringMethod {
        self.scoring.method()
    }

    /// Returns the radar band.
    pub fn band(&self) -> Band {
        self.band
    }

    /// Returns the number of species.
    pub fn n_types(&self) -> usize {
        self.n_types
    }

    /// Returns the temperature broadening factor.
    pub fn temp_factor(&self) -> f64 {
        self.temp_factor
    }

    /// Returns whether the score cube is returned.
    pub fn return_scores(&self) -> bool {
        self.return_scores
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<(), FhcError> {
        self.scoring.validate()?;
        if self.n_types == 0 {
            return Err(FhcError::InvalidConfig {
                reason: "n_types must be >= 1".to_string(),
            });
        }
        if !self.temp_factor.is_finite() || self.temp_factor <= 0.0 {
            return Err(FhcError::InvalidConfig {
                reason: format!("temp_factor must be finite and > 0, got {}", self.temp_factor),
            });
        }
        Ok(())
    }
}

impl Default for SummerConfig {
    fn default() -> Self {
        Self::new()
    }
}

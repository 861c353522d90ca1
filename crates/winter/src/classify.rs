//! The winter classification pipeline.

use hca_fuzzy::{FhcError, Measurands, ScoreCube, ScoringOptions, score_species};
use hca_membership::{Band, MembershipProvider, ParamRequest, Season, Variable};
use ndarray::{ArrayD, IxDyn};
use tracing::{debug, warn};

use crate::blend::{adjusted_melt_code, blend};
use crate::category::WinterCategory;
use crate::config::WinterConfig;
use crate::error::WinterError;
use crate::melting::{MeltingLayerDetector, MeltingLayerRequest, check_shape};
use crate::result::{WinterIntermediates, WinterResult};

/// Measurands plus the geometry a melting-layer detector may need.
#[derive(Debug, Clone, Default)]
pub struct WinterInput {
    measurands: Measurands,
    heights: Option<ArrayD<f64>>,
    azimuths: Option<Vec<f64>>,
}

impl WinterInput {
    /// Wraps a measurand set with no geometry.
    pub fn new(measurands: Measurands) -> Self {
        Self {
            measurands,
            heights: None,
            azimuths: None,
        }
    }

    /// Sets the beam height of every bin, in km.
    pub fn with_heights(mut self, heights: ArrayD<f64>) -> Self {
        self.heights = Some(heights);
        self
    }

    /// Sets the ray azimuths, in degrees.
    pub fn with_azimuths(mut self, azimuths: Vec<f64>) -> Self {
        self.azimuths = Some(azimuths);
        self
    }

    /// Returns the measurands.
    pub fn measurands(&self) -> &Measurands {
        &self.measurands
    }

    /// Returns the bin heights, if set.
    pub fn heights(&self) -> Option<&ArrayD<f64>> {
        self.heights.as_ref()
    }

    /// Returns the azimuths, if set.
    pub fn azimuths(&self) -> Option<&[f64]> {
        self.azimuths.as_deref()
    }
}

/// Scores one winter regime's parameter set.
fn score_regime<P: MembershipProvider>(
    measurands: &Measurands,
    provider: &P,
    band: Band,
    season: Season,
    n_types: usize,
    options: &ScoringOptions,
) -> Result<ScoreCube, WinterError> {
    let request = ParamRequest::new(band, season, n_types)
        .with_use_temp(options.use_temp() && measurands.contains(Variable::T));
    let set = provider.membership_set(&request)?;
    if set.n_types() != n_types {
        return Err(FhcError::SpeciesCountMismatch {
            expected: n_types,
            got: set.n_types(),
        }
        .into());
    }
    debug!(%season, %band, n_types, "scoring winter regime");
    Ok(score_species(measurands, &set, None, options)?)
}

/// Arg-max per bin mapped through a fixed category table.
fn regime_categories(cube: &ScoreCube, table: &[WinterCategory]) -> Result<ArrayD<i32>, WinterError> {
    let unclassified = WinterCategory::Unclassified.code();
    Ok(cube.categories_with(
        |c| table.get(c).map_or(unclassified, |cat| cat.code()),
        unclassified,
    )?)
}

/// Classifies cold-season bins into the fixed winter categories.
///
/// 1. The detector partitions the volume into warm, transition and cold
///    regimes and categorizes melting-layer bins.
/// 2. The warm (2 species) and cold (`n_cold_types` species) parameter sets
///    of the scoring band are scored without RH or LD, with temperature
///    whenever it is supplied.
/// 3. The results are blended per [`blend`](crate::blend()).
///
/// # Errors
///
/// * [`WinterError::MissingReflectivity`] if DZ is absent.
/// * [`WinterError::ShapeMismatch`] if heights or detector output disagree
///   with the measurand shape.
/// * [`WinterError::InvalidRegime`] / [`WinterError::InvalidMeltCategory`]
///   for out-of-domain detector codes.
/// * Any detector, provider or scoring error.
#[tracing::instrument(skip_all, fields(scan_type = %config.scan_type(), method = %config.method()))]
pub fn classify_winter<P, D>(
    input: &WinterInput,
    config: &WinterConfig,
    provider: &P,
    detector: &D,
) -> Result<WinterResult, WinterError>
where
    P: MembershipProvider,
    D: MeltingLayerDetector,
{
    let measurands = input.measurands();
    if !measurands.contains(Variable::Dz) {
        warn!("reflectivity missing, cannot classify");
        return Err(WinterError::MissingReflectivity);
    }
    config.validate()?;
    let shape = measurands.shape()?;
    if let Some(heights) = input.heights() {
        check_shape("heights", heights.shape(), &shape)?;
    }

    let request = MeltingLayerRequest {
        measurands,
        heights: input.heights(),
        azimuths: input.azimuths(),
        scan_type: config.scan_type(),
        band: config.band(),
        expected_melt_height: config.expected_melt_height(),
        min_rh: config.min_rh(),
        sn_thresh: config.sn_thresh(),
        n_sectors: config.n_sectors(),
    };
    let layer = detector.detect(&request)?;
    layer.validate(&shape)?;
    let regime = layer.regime_classes()?;
    let melt = layer.melt_classes()?;

    let scoring = measurands.without(Variable::Rh).without(Variable::Ld);
    let options = ScoringOptions::new()
        .with_weights(config.weights().clone())
        .with_method(config.method())
        .with_use_temp(true);
    let band = config.scoring_band();

    let warm_scores = score_regime(
        &scoring,
        provider,
        band,
        Season::WinterWarm,
        WinterCategory::WARM.len(),
        &options,
    )?;
    let warm = regime_categories(&warm_scores, &WinterCategory::WARM)?;
    let cold_scores = score_regime(
        &scoring,
        provider,
        band,
        Season::WinterCold,
        config.n_cold_types(),
        &options,
    )?;
    let cold = regime_categories(&cold_scores, &WinterCategory::COLD)?;

    let warm_flat: Vec<i32> = warm.iter().copied().collect();
    let cold_flat: Vec<i32> = cold.iter().copied().collect();
    let blended = blend(&regime, &melt, &warm_flat, &cold_flat, config.scan_type())?;
    let categories = ArrayD::from_shape_vec(IxDyn(&shape), blended)?;
    debug!(
        bins = categories.len(),
        melt_height = layer.melt_height(),
        "winter classification done"
    );

    let intermediates = if config.return_scores() {
        let melt_codes: Vec<i32> = melt.iter().map(|&m| adjusted_melt_code(m)).collect();
        Some(WinterIntermediates {
            melt: ArrayD::from_shape_vec(IxDyn(&shape), melt_codes)?,
            warm,
            cold,
            melt_scores: layer.scores().cloned(),
            warm_scores,
            cold_scores,
        })
    } else {
        None
    };
    Ok(WinterResult::new(categories, layer.melt_height(), intermediates))
}

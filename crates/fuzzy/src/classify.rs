//! Scoring entry points.

use hca_membership::{MembershipProvider, MembershipSet, ParamRequest, Season, TrapezoidSet, Variable};
use tracing::{debug, warn};

use crate::aggregate::Aggregator;
use crate::config::{ScoringOptions, SummerConfig};
use crate::cube::{ScoreCube, UNCLASSIFIED};
use crate::error::FhcError;
use crate::measurands::Measurands;
use crate::method::TemperatureModel;
use crate::result::SummerResult;

/// Whether temperature takes part, given the options and the data.
fn temperature_used(measurands: &Measurands, options: &ScoringOptions) -> bool {
    options.use_temp() && measurands.contains(Variable::T)
}

/// Scores every species of `set` at every bin.
///
/// This is the season-agnostic core shared by summer classification and the
/// winter warm/cold passes. Temperature is silently dropped when it is not
/// among the measurands.
///
/// # Errors
///
/// * [`FhcError::InvalidWeight`] if a weight is negative or not finite.
/// * [`FhcError::MissingReflectivity`] if DZ is absent.
/// * [`FhcError::ShapeMismatch`] if the arrays disagree in shape.
/// * [`FhcError::MissingParameters`] if `set` lacks a supplied variable.
/// * [`FhcError::MissingTrapezoids`] / [`FhcError::SpeciesCountMismatch`] for
///   an unusable trapezoid temperature model.
/// * [`FhcError::DegenerateWeightSum`] if the summed weights are zero.
pub fn score_species(
    measurands: &Measurands,
    set: &MembershipSet,
    trapezoids: Option<&TrapezoidSet>,
    options: &ScoringOptions,
) -> Result<ScoreCube, FhcError> {
    options.validate()?;
    if !measurands.contains(Variable::Dz) {
        return Err(FhcError::MissingReflectivity);
    }
    let flat = measurands.flatten()?;
    let use_temp = temperature_used(measurands, options);
    let n_types = set.n_types();

    if use_temp && options.temperature_model() == TemperatureModel::Trapezoid {
        let traps = trapezoids.ok_or(FhcError::MissingTrapezoids)?;
        if traps.len() != n_types {
            return Err(FhcError::SpeciesCountMismatch {
                expected: n_types,
                got: traps.len(),
            });
        }
    }

    let aggregator = Aggregator::new(
        &flat,
        set,
        trapezoids,
        options.weights(),
        options.method(),
        use_temp,
        options.temperature_model(),
    )?;
    debug!(
        method = %options.method(),
        use_temp,
        pol = aggregator.pol_flag(),
        weight_sum = aggregator.weight_sum(),
        bins = flat.len,
        n_types,
        "scoring species"
    );

    let mut buf = vec![0.0; n_types * flat.len];
    if flat.len > 0 {
        for (species, out) in buf.chunks_exact_mut(flat.len).enumerate() {
            aggregator.score_into(species, out);
        }
    }
    ScoreCube::from_flat(buf, &flat.shape, set.species().to_vec())
}

/// Classifies warm-season bins into the 1-based species of the summer set.
///
/// Parameters come from `provider` for the configured band. Bins whose score
/// column contains NaN get [`UNCLASSIFIED`].
///
/// # Errors
///
/// Everything [`score_species`] returns, plus configuration and provider
/// failures.
///
/// # Example
///
/// ```
/// use hca_fuzzy::{Measurands, SummerConfig, classify_summer};
/// use hca_membership::{Band, MembershipTable, Season, TableEntry, Variable, VariableParams};
///
/// let table = MembershipTable::new().with_set(
///     TableEntry::new(Band::S, Season::Summer, ["Drizzle", "Rain"]).with_params(
///         Variable::Dz,
///         VariableParams::new(vec![10.0, 10.0], vec![5.0, 5.0], vec![15.0, 40.0]),
///     ),
/// );
/// let bins = Measurands::new().with_scalar(Variable::Dz, 38.0);
/// let config = SummerConfig::new().with_n_types(2);
///
/// let result = classify_summer(&bins, &config, &table).unwrap();
/// assert_eq!(result.categories().iter().copied().collect::<Vec<_>>(), vec![2]);
/// ```
#[tracing::instrument(skip_all, fields(band = %config.band(), method = %config.method()))]
pub fn classify_summer<P: MembershipProvider>(
    measurands: &Measurands,
    config: &SummerConfig,
    provider: &P,
) -> Result<SummerResult, FhcError> {
    if !measurands.contains(Variable::Dz) {
        warn!("reflectivity missing, cannot classify");
        return Err(FhcError::MissingReflectivity);
    }
    config.validate()?;

    let scoring = config.scoring();
    let use_temp = temperature_used(measurands, scoring);
    let request = ParamRequest::new(config.band(), Season::Summer, config.n_types())
        .with_use_temp(use_temp)
        .with_temp_factor(config.temp_factor());
    let set = provider.membership_set(&request)?;
    if set.n_types() != config.n_types() {
        return Err(FhcError::SpeciesCountMismatch {
            expected: config.n_types(),
            got: set.n_types(),
        });
    }
    let trapezoids = if use_temp && scoring.temperature_model() == TemperatureModel::Trapezoid {
        Some(provider.trapezoids(&request)?)
    } else {
        None
    };

    let options = scoring.clone().with_use_temp(use_temp);
    let cube = score_species(measurands, &set, trapezoids.as_ref(), &options)?;
    let categories = cube.categories(UNCLASSIFIED)?;
    debug!(
        variables = ?measurands.variables().collect::<Vec<_>>(),
        "summer classification done"
    );

    let species = set.species().to_vec();
    let scores = config.return_scores().then_some(cube);
    Ok(SummerResult::new(categories, species, scores))
}

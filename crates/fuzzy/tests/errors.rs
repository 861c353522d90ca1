//! Integration tests for FhcError variants.

use hca_fuzzy::{
    FhcError, Measurands, ScoringMethod, ScoringOptions, SummerConfig, TemperatureModel, Weights,
    classify_summer, score_species,
};
use hca_membership::{
    Band, MembershipError, MembershipProvider, MembershipTable, ParamRequest, Season, TableEntry,
    Variable, VariableParams,
};
use ndarray::array;

fn table() -> MembershipTable {
    let p = || VariableParams::new(vec![10.0, 10.0], vec![5.0, 5.0], vec![15.0, 40.0]);
    MembershipTable::new().with_set(
        TableEntry::new(Band::S, Season::Summer, ["Drizzle", "Rain"])
            .with_params(Variable::Dz, p())
            .with_params(Variable::Dr, p())
            .with_params(Variable::T, p()),
    )
}

fn config() -> SummerConfig {
    SummerConfig::new().with_n_types(2)
}

#[test]
fn error_missing_reflectivity() {
    let bins = Measurands::new().with_scalar(Variable::Dr, 1.0);
    let result = classify_summer(&bins, &config(), &table());
    assert!(matches!(result, Err(FhcError::MissingReflectivity)));
}

#[test]
fn error_unknown_method() {
    let err = "fuzzy".parse::<ScoringMethod>().unwrap_err();
    assert!(matches!(err, FhcError::UnknownMethod { ref name } if name == "fuzzy"));
}

#[test]
fn error_shape_mismatch() {
    let bins = Measurands::new()
        .with(Variable::Dz, array![1.0, 2.0])
        .with(Variable::Dr, array![1.0, 2.0, 3.0]);
    let result = classify_summer(&bins, &config(), &table());
    assert!(matches!(
        result,
        Err(FhcError::ShapeMismatch {
            variable: Variable::Dr,
            ..
        })
    ));
}

#[test]
fn error_degenerate_weights() {
    let bins = Measurands::new()
        .with_scalar(Variable::Dz, 30.0)
        .with_scalar(Variable::Dr, 1.0);
    let config = config().with_weights(Weights::zero().with(Variable::Dz, 1.0));
    let result = classify_summer(&bins, &config, &table());
    assert!(matches!(
        result,
        Err(FhcError::DegenerateWeightSum {
            method: ScoringMethod::Hybrid
        })
    ));
}

#[test]
fn zero_weights_without_summed_terms_are_fine() {
    // hybrid with DZ only has no weighted sum to divide
    let bins = Measurands::new().with_scalar(Variable::Dz, 30.0);
    let config = config().with_weights(Weights::zero());
    assert!(classify_summer(&bins, &config, &table()).is_ok());
}

#[test]
fn error_missing_parameters() {
    let bins = Measurands::new()
        .with_scalar(Variable::Dz, 30.0)
        .with_scalar(Variable::Kd, 1.0);
    let result = classify_summer(&bins, &config(), &table());
    assert!(matches!(
        result,
        Err(FhcError::MissingParameters {
            variable: Variable::Kd
        })
    ));
}

#[test]
fn error_missing_trapezoids() {
    let bins = Measurands::new()
        .with_scalar(Variable::Dz, 30.0)
        .with_scalar(Variable::T, 1.0);
    let config = config().with_temperature_model(TemperatureModel::Trapezoid);
    let result = classify_summer(&bins, &config, &table());
    assert!(matches!(
        result,
        Err(FhcError::Membership(MembershipError::MissingTrapezoids { .. }))
    ));
}

#[test]
fn error_not_enough_species() {
    let bins = Measurands::new().with_scalar(Variable::Dz, 30.0);
    let result = classify_summer(&bins, &SummerConfig::new(), &table());
    assert!(matches!(
        result,
        Err(FhcError::Membership(MembershipError::NotEnoughSpecies {
            requested: 10,
            available: 2
        }))
    ));
}

#[test]
fn error_missing_band() {
    let bins = Measurands::new().with_scalar(Variable::Dz, 30.0);
    let result = classify_summer(&bins, &config().with_band(Band::X), &table());
    assert!(matches!(
        result,
        Err(FhcError::Membership(MembershipError::MissingSet {
            band: Band::X,
            season: Season::Summer
        }))
    ));
}

#[test]
fn error_invalid_config() {
    let bins = Measurands::new().with_scalar(Variable::Dz, 30.0);
    let result = classify_summer(&bins, &config().with_temp_factor(-1.0), &table());
    assert!(matches!(result, Err(FhcError::InvalidConfig { .. })));
}

#[test]
fn error_negative_weight_in_direct_scoring() {
    let set = table()
        .membership_set(&ParamRequest::new(Band::S, Season::Summer, 2))
        .unwrap();
    let bins = Measurands::new()
        .with_scalar(Variable::Dz, 30.0)
        .with_scalar(Variable::Dr, 1.0)
        .with_scalar(Variable::Kd, 1.0);
    let options =
        ScoringOptions::new().with_weights(Weights::zero().with(Variable::Dr, 1.0).with(Variable::Kd, -0.5));
    let result = score_species(&bins, &set, None, &options);
    assert!(matches!(
        result,
        Err(FhcError::InvalidWeight {
            variable: Variable::Kd,
            ..
        })
    ));
}

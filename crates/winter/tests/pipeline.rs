//! End-to-end tests for the winter pipeline with a replayed melting layer.

use hca_fuzzy::{FhcError, Measurands};
use hca_membership::{Band, MembershipTable, Season, TableEntry, Variable, VariableParams};
use hca_winter::{
    MeltingLayer, MeltingLayerDetector, MeltingLayerRequest, PrecomputedMeltingLayer, ScanType,
    WinterCategory, WinterConfig, WinterError, WinterInput, classify_winter,
};
use ndarray::{Array2, ArrayD, IxDyn, array};

fn params(n: usize, a: f64, m: &[f64]) -> VariableParams {
    VariableParams::new(vec![a; n], vec![5.0; n], m.to_vec())
}

/// C band winter sets keyed on DZ and T only.
fn table() -> MembershipTable {
    MembershipTable::new()
        .with_set(
            TableEntry::new(Band::C, Season::WinterWarm, ["Frozen Precip", "Rain"])
                .with_params(Variable::Dz, params(2, 10.0, &[25.0, 35.0]))
                .with_params(Variable::T, params(2, 5.0, &[-5.0, 5.0])),
        )
        .with_set(
            TableEntry::new(
                Band::C,
                Season::WinterCold,
                ["Ice Crystals", "Plates", "Dendrites", "Aggregates"],
            )
            .with_params(Variable::Dz, params(4, 5.0, &[0.0, 10.0, 20.0, 30.0]))
            .with_params(Variable::T, params(4, 10.0, &[-15.0; 4])),
        )
}

/// Six bins of DZ 35: warm picks rain (7), cold picks aggregates (4).
fn bins() -> Measurands {
    Measurands::new().with(Variable::Dz, ArrayD::from_elem(IxDyn(&[6]), 35.0))
}

fn layer() -> MeltingLayer {
    MeltingLayer::new(
        array![0u8, 0, 2, 2, 1, 0].into_dyn(),
        3.2,
        array![1, 0, 2, 1, 1, -1].into_dyn(),
    )
}

fn codes(a: &ArrayD<i32>) -> Vec<i32> {
    a.iter().copied().collect()
}

#[test]
fn blend_precedence() {
    let detector = PrecomputedMeltingLayer::new(layer());
    let input = WinterInput::new(bins());
    let result = classify_winter(&input, &WinterConfig::new(), &table(), &detector).unwrap();

    // warm, no data over warm, wet snow over cold, cold, transition, no data
    assert_eq!(codes(result.categories()), vec![7, -1, 5, 4, -1, -1]);
    assert_eq!(result.melt_height(), 3.2);
    assert_eq!(result.category_at(0), Some(WinterCategory::Rain));
    assert_eq!(result.category_at(2), Some(WinterCategory::WetSnow));
    assert!(result.intermediates().is_none());
}

#[test]
fn grid_transition_takes_cold_result() {
    let detector = PrecomputedMeltingLayer::new(layer());
    let input = WinterInput::new(bins());
    let config = WinterConfig::new().with_scan_type(ScanType::Grid);
    let result = classify_winter(&input, &config, &table(), &detector).unwrap();
    assert_eq!(codes(result.categories()), vec![7, -1, 5, 4, 4, -1]);
}

#[test]
fn intermediates_returned_on_request() {
    let detector = PrecomputedMeltingLayer::new(
        layer().with_scores(ArrayD::from_elem(IxDyn(&[3, 6]), 0.5)),
    );
    let input = WinterInput::new(bins());
    let config = WinterConfig::new().with_return_scores(true);
    let result = classify_winter(&input, &config, &table(), &detector).unwrap();

    let inter = result.intermediates().unwrap();
    assert_eq!(codes(&inter.melt), vec![1, 0, 5, 1, 1, -1]);
    assert_eq!(codes(&inter.warm), vec![7; 6]);
    assert_eq!(codes(&inter.cold), vec![4; 6]);
    assert_eq!(inter.warm_scores.scores().shape(), &[2, 6]);
    assert_eq!(inter.cold_scores.scores().shape(), &[4, 6]);
    assert_eq!(inter.melt_scores.as_ref().unwrap().shape(), &[3, 6]);
}

#[test]
fn temperature_drives_warm_regime() {
    // DZ 30 sits midway between the warm species; T breaks the tie
    let dz = array![30.0, 30.0, 30.0];
    let layer = MeltingLayer::new(array![0u8, 0, 0].into_dyn(), 3.0, array![1, 1, 1].into_dyn());
    let detector = PrecomputedMeltingLayer::new(layer);

    let with_t = Measurands::new()
        .with(Variable::Dz, dz.clone())
        .with(Variable::T, array![-5.0, 5.0, f64::NAN]);
    let result = classify_winter(
        &WinterInput::new(with_t),
        &WinterConfig::new(),
        &table(),
        &detector,
    )
    .unwrap();
    assert_eq!(codes(result.categories()), vec![6, 7, -1]);

    let without_t = Measurands::new().with(Variable::Dz, dz);
    let result = classify_winter(
        &WinterInput::new(without_t),
        &WinterConfig::new(),
        &table(),
        &detector,
    )
    .unwrap();
    assert_eq!(codes(result.categories()), vec![6, 6, 6]);
}

/// Fails unless RH reaches the detector.
struct NeedsRh(MeltingLayer);

impl MeltingLayerDetector for NeedsRh {
    fn detect(&self, request: &MeltingLayerRequest<'_>) -> Result<MeltingLayer, WinterError> {
        if !request.measurands.contains(Variable::Rh) {
            return Err(WinterError::Detection {
                reason: "RH required".to_string(),
            });
        }
        assert_eq!(request.n_sectors, 12);
        assert_eq!(request.scan_type, ScanType::Rhi);
        assert_eq!(request.heights.map(|h| h.len()), Some(6));
        Ok(self.0.clone())
    }
}

#[test]
fn rh_reaches_detector_but_not_scoring() {
    // the winter sets have no RH parameters, so scoring with RH would fail
    let input = WinterInput::new(bins().with(Variable::Rh, ArrayD::from_elem(IxDyn(&[6]), 0.98)))
        .with_heights(ArrayD::from_elem(IxDyn(&[6]), 2.0));
    let config = WinterConfig::new()
        .with_n_sectors(12)
        .with_scan_type(ScanType::Rhi);
    let result = classify_winter(&input, &config, &table(), &NeedsRh(layer())).unwrap();
    assert_eq!(codes(result.categories()), vec![7, -1, 5, 4, -1, -1]);
}

#[test]
fn two_dimensional_shape_preserved() {
    let dz = Array2::from_elem((2, 3), 35.0);
    let layer = MeltingLayer::new(
        array![[0u8, 2, 1], [2, 0, 0]].into_dyn(),
        4.1,
        array![[1, 1, 1], [2, 1, -1]].into_dyn(),
    );
    let input = WinterInput::new(Measurands::new().with(Variable::Dz, dz));
    let result = classify_winter(
        &input,
        &WinterConfig::new(),
        &table(),
        &PrecomputedMeltingLayer::new(layer),
    )
    .unwrap();
    assert_eq!(result.categories().shape(), &[2, 3]);
    assert_eq!(codes(result.categories()), vec![7, 4, -1, 5, 7, -1]);
}

#[test]
fn fewer_cold_species() {
    // with two cold species, DZ 35 falls to plates
    let detector = PrecomputedMeltingLayer::new(layer());
    let config = WinterConfig::new().with_n_cold_types(2);
    let result = classify_winter(&WinterInput::new(bins()), &config, &table(), &detector).unwrap();
    assert_eq!(codes(result.categories()), vec![7, -1, 5, 2, -1, -1]);
}

#[test]
fn error_missing_reflectivity() {
    let input = WinterInput::new(Measurands::new().with_scalar(Variable::Dr, 0.5));
    let detector = PrecomputedMeltingLayer::new(layer());
    let result = classify_winter(&input, &WinterConfig::new(), &table(), &detector);
    assert!(matches!(result, Err(WinterError::MissingReflectivity)));
}

#[test]
fn error_detector_shape_mismatch() {
    let short = MeltingLayer::new(array![0u8, 0].into_dyn(), 3.0, array![1, 1].into_dyn());
    let result = classify_winter(
        &WinterInput::new(bins()),
        &WinterConfig::new(),
        &table(),
        &PrecomputedMeltingLayer::new(short),
    );
    assert!(matches!(
        result,
        Err(WinterError::ShapeMismatch { field: "regime", .. })
    ));
}

#[test]
fn error_heights_shape_mismatch() {
    let input = WinterInput::new(bins()).with_heights(ArrayD::zeros(IxDyn(&[5])));
    let result = classify_winter(
        &input,
        &WinterConfig::new(),
        &table(),
        &PrecomputedMeltingLayer::new(layer()),
    );
    assert!(matches!(
        result,
        Err(WinterError::ShapeMismatch { field: "heights", .. })
    ));
}

#[test]
fn error_invalid_regime_code() {
    let bad = MeltingLayer::new(
        array![0u8, 0, 3, 2, 1, 0].into_dyn(),
        3.0,
        array![1, 1, 1, 1, 1, 1].into_dyn(),
    );
    let result = classify_winter(
        &WinterInput::new(bins()),
        &WinterConfig::new(),
        &table(),
        &PrecomputedMeltingLayer::new(bad),
    );
    assert!(matches!(result, Err(WinterError::InvalidRegime { value: 3 })));
}

#[test]
fn error_detection_propagates() {
    let result = classify_winter(
        &WinterInput::new(bins()),
        &WinterConfig::new(),
        &table(),
        &NeedsRh(layer()),
    );
    assert!(matches!(result, Err(WinterError::Detection { .. })));
}

#[test]
fn error_missing_winter_set() {
    let detector = PrecomputedMeltingLayer::new(layer());
    let config = WinterConfig::new().with_scoring_band(Band::X);
    let result = classify_winter(&WinterInput::new(bins()), &config, &table(), &detector);
    assert!(matches!(result, Err(WinterError::Membership(_))));
}

#[test]
fn error_scoring_failure_is_wrapped() {
    // LD is dropped, but KD has no winter parameters
    let input = WinterInput::new(bins().with(Variable::Kd, ArrayD::zeros(IxDyn(&[6]))));
    let detector = PrecomputedMeltingLayer::new(layer());
    let result = classify_winter(&input, &WinterConfig::new(), &table(), &detector);
    assert!(matches!(
        result,
        Err(WinterError::Fuzzy(FhcError::MissingParameters {
            variable: Variable::Kd
        }))
    ));
}

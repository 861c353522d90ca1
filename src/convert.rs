//! Pure conversion functions: TOML config structs -> crate API config types.

use std::collections::BTreeMap;
use std::path::Path;

use anyhow::{Context, Result};
use hca_fuzzy::{ScoringMethod, SummerConfig, TemperatureModel, Weights};
use hca_membership::{MembershipTable, Variable};
use hca_winter::{ScanType, WinterConfig};

use crate::config::{SummerToml, WinterToml};

/// Applies per-variable overrides on top of the default weight table.
pub fn build_weights(overrides: &BTreeMap<Variable, f64>) -> Weights {
    overrides
        .iter()
        .fold(Weights::default(), |w, (&variable, &weight)| {
            w.with(variable, weight)
        })
}

/// Parses a scoring method, preferring a command-line override.
pub fn parse_method(configured: &str, cli: Option<&str>) -> Result<ScoringMethod> {
    let name = cli.unwrap_or(configured);
    name.parse()
        .with_context(|| format!("invalid scoring method {name:?}"))
}

/// Builds a [`SummerConfig`] from the TOML summer configuration.
pub fn build_summer_config(
    summer: &SummerToml,
    weights: Weights,
    method: ScoringMethod,
    return_scores: bool,
) -> Result<SummerConfig> {
    let model: TemperatureModel = summer
        .temperature_model
        .parse()
        .with_context(|| format!("invalid temperature model {:?}", summer.temperature_model))?;
    let cfg = SummerConfig::new()
        .with_band(summer.band)
        .with_method(method)
        .with_weights(weights)
        .with_use_temp(summer.use_temp)
        .with_temperature_model(model)
        .with_n_types(summer.n_types)
        .with_temp_factor(summer.temp_factor)
        .with_return_scores(return_scores);
    cfg.validate().context("invalid [summer] configuration")?;
    Ok(cfg)
}

/// Builds a [`WinterConfig`] from the TOML winter configuration.
pub fn build_winter_config(
    winter: &WinterToml,
    weights: Weights,
    method: ScoringMethod,
    return_scores: bool,
) -> Result<WinterConfig> {
    let scan_type: ScanType = winter
        .scan_type
        .parse()
        .with_context(|| format!("invalid scan type {:?}", winter.scan_type))?;
    let cfg = WinterConfig::new()
        .with_band(winter.band)
        .with_scoring_band(winter.scoring_band)
        .with_method(method)
        .with_weights(weights)
        .with_sn_thresh(winter.sn_thresh)
        .with_expected_melt_height(winter.expected_melt_height)
        .with_n_sectors(winter.n_sectors)
        .with_min_rh(winter.min_rh)
        .with_scan_type(scan_type)
        .with_n_cold_types(winter.n_cold_types)
        .with_return_scores(return_scores);
    cfg.validate().context("invalid [winter] configuration")?;
    Ok(cfg)
}

/// Loads and validates a membership table, choosing the format by extension.
pub fn load_membership_table(path: &Path) -> Result<MembershipTable> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read membership table: {}", path.display()))?;
    let is_json = path
        .extension()
        .is_some_and(|e| e.eq_ignore_ascii_case("json"));
    let table: MembershipTable = if is_json {
        serde_json::from_str(&text).context("failed to parse membership JSON")?
    } else {
        toml::from_str(&text).context("failed to parse membership TOML")?
    };
    table
        .validate()
        .with_context(|| format!("invalid membership table: {}", path.display()))?;
    Ok(table)
}

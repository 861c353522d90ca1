use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use hca_membership::{Band, Variable};
use serde::Deserialize;

/// Top-level HCA configuration.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct HcaConfig {
    /// Membership parameter table (TOML or JSON), relative to the config file.
    pub membership: PathBuf,

    /// Per-variable weight overrides on top of the default table.
    #[serde(default)]
    pub weights: BTreeMap<Variable, f64>,

    /// Summer classifier settings.
    #[serde(default)]
    pub summer: SummerToml,

    /// Winter classifier settings.
    #[serde(default)]
    pub winter: WinterToml,
}

impl HcaConfig {
    /// Reads and parses a config file, resolving the membership path
    /// against the file's directory.
    pub fn load(path: &Path) -> Result<Self> {
        let toml_str = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config file: {}", path.display()))?;
        let mut config: HcaConfig =
            toml::from_str(&toml_str).context("failed to parse TOML config")?;
        if config.membership.is_relative()
            && let Some(dir) = path.parent()
        {
            config.membership = dir.join(&config.membership);
        }
        Ok(config)
    }
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SummerToml {
    #[serde(default)]
    pub band: Band,
    #[serde(default = "default_method")]
    pub method: String,
    #[serde(default = "default_true")]
    pub use_temp: bool,
    #[serde(default = "default_temperature_model")]
    pub temperature_model: String,
    #[serde(default = "default_n_types")]
    pub n_types: usize,
    #[serde(default = "default_temp_factor")]
    pub temp_factor: f64,
}

impl Default for SummerToml {
    fn default() -> Self {
        Self {
            band: Band::default(),
            method: default_method(),
            use_temp: true,
            temperature_model: default_temperature_model(),
            n_types: default_n_types(),
            temp_factor: default_temp_factor(),
        }
    }
}

fn default_method() -> String {
    "hybrid".to_string()
}
fn default_true() -> bool {
    true
}
fn default_temperature_model() -> String {
    "beta".to_string()
}
fn default_n_types() -> usize {
    10
}
fn default_temp_factor() -> f64 {
    1.0
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct WinterToml {
    #[serde(default)]
    pub band: Band,
    #[serde(default = "default_scoring_band")]
    pub scoring_band: Band,
    #[serde(default = "default_method")]
    pub method: String,
    #[serde(default = "default_sn_thresh")]
    pub sn_thresh: f64,
    #[serde(default = "default_expected_melt_height")]
    pub expected_melt_height: f64,
    #[serde(default = "default_n_sectors")]
    pub n_sectors: usize,
    #[serde(default = "default_min_rh")]
    pub min_rh: f64,
    #[serde(default = "default_scan_type")]
    pub scan_type: String,
    #[serde(default = "default_n_cold_types")]
    pub n_cold_types: usize,
}

impl Default for WinterToml {
    fn default() -> Self {
        Self {
            band: Band::default(),
            scoring_band: default_scoring_band(),
            method: default_method(),
            sn_thresh: default_sn_thresh(),
            expected_melt_height: default_expected_melt_height(),
            n_sectors: default_n_sectors(),
            min_rh: default_min_rh(),
            scan_type: default_scan_type(),
            n_cold_types: default_n_cold_types(),
        }
    }
}

fn default_scoring_band() -> Band {
    Band::C
}
fn default_sn_thresh() -> f64 {
    5.0
}
fn default_expected_melt_height() -> f64 {
    4.0
}
fn default_n_sectors() -> usize {
    36
}
fn default_min_rh() -> f64 {
    0.5
}
fn default_scan_type() -> String {
    "ppi".to_string()
}
fn default_n_cold_types() -> usize {
    4
}

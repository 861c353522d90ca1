//! Winter command: classify cold-season bins against a stored melting layer.

use anyhow::{Context, Result};
use hca_winter::{PrecomputedMeltingLayer, WinterCategory, classify_winter};
use tracing::{info, info_span};

use crate::cli::ClassifyArgs;
use crate::config::HcaConfig;
use crate::convert;
use crate::input::BinFile;
use crate::output::ClassificationOutput;

/// Run winter classification.
pub fn run(args: ClassifyArgs) -> Result<()> {
    let _cmd = info_span!("winter").entered();

    // 1. Load config and membership table
    let config = HcaConfig::load(&args.config)?;
    let table = convert::load_membership_table(&config.membership)?;
    let method = convert::parse_method(&config.winter.method, args.method.as_deref())?;
    let winter_cfg = convert::build_winter_config(
        &config.winter,
        convert::build_weights(&config.weights),
        method,
        args.scores,
    )?;

    // 2. Read bins and the stored partition
    info!(path = %args.input.display(), "reading bins");
    let bins = BinFile::read(&args.input)?;
    let input = bins.winter_input()?;
    let detector = PrecomputedMeltingLayer::new(bins.melting_layer()?);
    info!(n_bins = bins.n_bins(), "bins loaded");

    // 3. Classify
    let result = classify_winter(&input, &winter_cfg, &table, &detector)
        .context("winter classification failed")?;
    let n_unclassified = result
        .categories()
        .iter()
        .filter(|&&c| c == WinterCategory::Unclassified.code())
        .count();
    info!(n_unclassified, "winter classification complete");

    // 4. Write
    ClassificationOutput::from_winter(&result).write(args.output.as_deref())
}

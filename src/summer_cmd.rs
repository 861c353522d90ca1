//! Summer command: classify warm-season bins from a JSON bin file.

use anyhow::{Context, Result};
use hca_fuzzy::classify_summer;
use tracing::{info, info_span};

use crate::cli::ClassifyArgs;
use crate::config::HcaConfig;
use crate::convert;
use crate::input::BinFile;
use crate::output::ClassificationOutput;

/// Run summer classification.
pub fn run(args: ClassifyArgs) -> Result<()> {
    let _cmd = info_span!("summer").entered();

    // 1. Load config and membership table
    let config = HcaConfig::load(&args.config)?;
    let table = convert::load_membership_table(&config.membership)?;
    let method = convert::parse_method(&config.summer.method, args.method.as_deref())?;
    let summer_cfg = convert::build_summer_config(
        &config.summer,
        convert::build_weights(&config.weights),
        method,
        args.scores,
    )?;

    // 2. Read bins
    info!(path = %args.input.display(), "reading bins");
    let bins = BinFile::read(&args.input)?;
    let measurands = bins.measurands()?;
    info!(
        n_bins = bins.n_bins(),
        n_fields = bins.fields.len(),
        "bins loaded"
    );

    // 3. Classify
    let result = classify_summer(&measurands, &summer_cfg, &table)
        .context("summer classification failed")?;
    let n_unclassified = result
        .categories()
        .iter()
        .filter(|&&c| c == hca_fuzzy::UNCLASSIFIED)
        .count();
    info!(n_unclassified, "summer classification complete");

    // 4. Write
    ClassificationOutput::from_summer(&result).write(args.output.as_deref())
}

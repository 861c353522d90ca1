use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Polarimetric radar hydrometeor classification.
#[derive(Parser)]
#[command(
    name = "hca",
    version,
    about = "Fuzzy-logic hydrometeor classification of polarimetric radar bins"
)]
pub struct Cli {
    /// Increase verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Subcommand to run.
    #[command(subcommand)]
    pub command: Command,
}

/// Available subcommands.
#[derive(Subcommand)]
pub enum Command {
    /// Classify warm-season bins.
    Summer(ClassifyArgs),
    /// Classify cold-season bins against a stored melting-layer partition.
    Winter(ClassifyArgs),
}

/// Arguments shared by both classifiers.
#[derive(clap::Args)]
pub struct ClassifyArgs {
    /// Path to TOML configuration file.
    #[arg(short, long, default_value = "hca.toml")]
    pub config: PathBuf,

    /// Path to the JSON bin file.
    #[arg(short, long)]
    pub input: PathBuf,

    /// Path for the JSON result (stdout if omitted).
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Include score cubes (and winter intermediates) in the output.
    #[arg(long)]
    pub scores: bool,

    /// Override the scoring method from config (hybrid or linear).
    #[arg(short, long)]
    pub method: Option<String>,
}

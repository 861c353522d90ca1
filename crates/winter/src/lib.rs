//! Cold-season hydrometeor classification.
//!
//! Winter bins are scored twice with the fuzzy machinery of `hca-fuzzy`,
//! once against the warm-regime parameter set and once against the
//! cold-regime set. A melting-layer detector decides per bin which result
//! applies, and its own wet-snow and no-data findings override both.
//!
//! ```text
//!                 ┌─▶ MeltingLayerDetector ──▶ regime mask + melt classes ─┐
//! WinterInput ────┤                                                        ├─▶ blend ──▶ codes −1, 1..7
//!                 └─▶ score_species(warm) / score_species(cold) ───────────┘
//! ```
//!
//! Detection is pluggable. [`PrecomputedMeltingLayer`] replays a partition
//! computed elsewhere.

mod blend;
mod category;
mod classify;
mod config;
mod error;
mod melting;
mod result;

pub use blend::{adjusted_melt_code, blend};
pub use category::WinterCategory;
pub use classify::{WinterInput, classify_winter};
pub use config::WinterConfig;
pub use error::WinterError;
pub use melting::{
    MeltClass, MeltingLayer, MeltingLayerDetector, MeltingLayerRequest, PrecomputedMeltingLayer,
    Regime, ScanType,
};
pub use result::{WinterIntermediates, WinterResult};

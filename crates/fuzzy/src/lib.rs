//! Fuzzy-logic scoring and summer hydrometeor classification.
//!
//! Each bin is scored against every species by combining per-variable
//! membership values, then assigned the species with the highest score.
//!
//! ```text
//! Measurands ──flatten──▶ Aggregator (linear | hybrid) ──▶ ScoreCube ──argmax──▶ categories
//!                              ▲
//!              MembershipSet ──┘ (from a MembershipProvider)
//! ```
//!
//! Categories are 1-based; [`UNCLASSIFIED`] marks bins whose scores contain
//! NaN. The score cube has the species axis first and is returned only when
//! asked for.
//!
//! [`score_species`] is season-agnostic and is reused by the winter
//! classifier.

mod aggregate;
mod classify;
mod config;
mod cube;
mod error;
mod measurands;
mod method;
mod result;
mod weights;

pub use classify::{classify_summer, score_species};
pub use config::{ScoringOptions, SummerConfig};
pub use cube::{ScoreCube, UNCLASSIFIED, argmax};
pub use error::FhcError;
pub use measurands::Measurands;
pub use method::{ScoringMethod, TemperatureModel};
pub use result::SummerResult;
pub use weights::Weights;

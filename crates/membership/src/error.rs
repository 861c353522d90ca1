//! Error types for the hca-membership crate.

use crate::variable::{Band, Season, Variable};

/// Error type for all fallible operations in the hca-membership crate.
#[derive(Debug, Clone, thiserror::Error)]
pub enum MembershipError {
    /// Returned when a beta width parameter `a` is zero.
    #[error("beta width a is zero for {variable}, species {species}")]
    ZeroWidth {
        /// Variable whose parameters are invalid.
        variable: Variable,
        /// Zero-based species index.
        species: usize,
    },

    /// Returned when a beta parameter is NaN or infinite.
    #[error("non-finite beta parameter for {variable}, species {species}")]
    NonFiniteParameter {
        /// Variable whose parameters are invalid.
        variable: Variable,
        /// Zero-based species index.
        species: usize,
    },

    /// Returned when a beta slope exponent `b` is zero or negative.
    #[error("beta exponent b must be > 0 for {variable}, species {species}, got {b}")]
    NonPositiveExponent {
        /// Variable whose parameters are invalid.
        variable: Variable,
        /// Zero-based species index.
        species: usize,
        /// The offending exponent.
        b: f64,
    },

    /// Returned when a parameter vector does not have one entry per species.
    #[error("{variable}.{field} has {got} entries, expected {expected}")]
    LengthMismatch {
        /// Variable whose parameters are invalid.
        variable: Variable,
        /// Which of `a`, `b`, `m` is wrong.
        field: &'static str,
        /// Number of species.
        expected: usize,
        /// Actual vector length.
        got: usize,
    },

    /// Returned when no table entry exists for a band/season combination.
    #[error("no membership set for band {band}, season {season}")]
    MissingSet {
        /// Requested band.
        band: Band,
        /// Requested season.
        season: Season,
    },

    /// Returned when trapezoids were requested but the table has none.
    #[error("no temperature trapezoids for band {band}, season {season}")]
    MissingTrapezoids {
        /// Requested band.
        band: Band,
        /// Requested season.
        season: Season,
    },

    /// Returned when more species are requested than a table provides.
    #[error("requested {requested} species but only {available} are available")]
    NotEnoughSpecies {
        /// Requested species count.
        requested: usize,
        /// Species count in the table.
        available: usize,
    },

    /// Returned when a trapezoid's breakpoints are not ordered or not finite.
    #[error("invalid trapezoid for species {species}: {reason}")]
    InvalidTrapezoid {
        /// Zero-based species index.
        species: usize,
        /// Description of the problem.
        reason: String,
    },

    /// Returned when the temperature broadening factor is not finite and positive.
    #[error("temp_factor must be finite and > 0, got {factor}")]
    InvalidTempFactor {
        /// The invalid factor.
        factor: f64,
    },

    /// Returned when a set is requested with zero species.
    #[error("n_types must be >= 1")]
    NoSpecies,

    /// Returned when a band name cannot be parsed.
    #[error("unknown radar band: {name} (expected S, C or X)")]
    UnknownBand {
        /// The unparsed name.
        name: String,
    },

    /// Returned when a variable key cannot be parsed.
    #[error("unknown variable: {name}")]
    UnknownVariable {
        /// The unparsed name.
        name: String,
    },

    /// Returned when a season name cannot be parsed.
    #[error("unknown season: {name}")]
    UnknownSeason {
        /// The unparsed name.
        name: String,
    },
}

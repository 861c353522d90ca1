//! Error types for the hca-winter crate.

use hca_fuzzy::FhcError;
use hca_membership::MembershipError;

/// Error type for all fallible operations in the hca-winter crate.
#[derive(Debug, Clone, thiserror::Error)]
pub enum WinterError {
    /// Returned when reflectivity is absent; no classification is possible.
    #[error("no reflectivity field: winter classification requires DZ")]
    MissingReflectivity,

    /// Returned when an auxiliary array does not match the measurand shape.
    #[error("{field} has shape {got:?}, expected {expected:?}")]
    ShapeMismatch {
        /// Name of the offending array.
        field: &'static str,
        /// Measurand shape.
        expected: Vec<usize>,
        /// Shape that was supplied.
        got: Vec<usize>,
    },

    /// Returned when a regime mask value is outside {0, 1, 2}.
    #[error("invalid regime code {value} (expected 0, 1 or 2)")]
    InvalidRegime {
        /// The offending code.
        value: u8,
    },

    /// Returned when a melt category is outside {-1, 0, 1, 2}.
    #[error("invalid melt category {value} (expected -1, 0, 1 or 2)")]
    InvalidMeltCategory {
        /// The offending code.
        value: i32,
    },

    /// Returned when a scan type name is not `ppi`, `rhi` or `grid`.
    #[error("unknown scan type: {name} (expected ppi, rhi or grid)")]
    UnknownScanType {
        /// The unparsed name.
        name: String,
    },

    /// Returned when a configuration parameter is invalid.
    #[error("invalid configuration: {reason}")]
    InvalidConfig {
        /// Description of the problem.
        reason: String,
    },

    /// Returned by a melting-layer detector that could not produce a partition.
    #[error("melting-layer detection failed: {reason}")]
    Detection {
        /// Description of the failure.
        reason: String,
    },

    /// Wrapped error from the fuzzy scoring crate.
    #[error(transparent)]
    Fuzzy(#[from] FhcError),

    /// Wrapped error from the membership crate.
    #[error(transparent)]
    Membership(#[from] MembershipError),

    /// Wrapped array shape error.
    #[error(transparent)]
    Shape(#[from] ndarray::ShapeError),
}

//! Error types for the hca-fuzzy crate.

use hca_membership::{MembershipError, Variable};

use crate::method::ScoringMethod;

/// Error type for all fallible operations in the hca-fuzzy crate.
#[derive(Debug, Clone, thiserror::Error)]
pub enum FhcError {
    /// Returned when reflectivity is absent; no classification is possible.
    #[error("no reflectivity field: classification requires DZ")]
    MissingReflectivity,

    /// Returned when a scoring method name is not `linear` or `hybrid`.
    #[error("unknown scoring method: {name} (expected hybrid or linear)")]
    UnknownMethod {
        /// The unparsed name.
        name: String,
    },

    /// Returned when a temperature model name is not `beta` or `trapezoid`.
    #[error("unknown temperature model: {name} (expected beta or trapezoid)")]
    UnknownTemperatureModel {
        /// The unparsed name.
        name: String,
    },

    /// Returned when the weights of the summed variables add up to zero.
    #[error("sum of weights is zero for {method} scoring")]
    DegenerateWeightSum {
        /// Method whose weighted sum would divide by zero.
        method: ScoringMethod,
    },

    /// Returned when a measurand's shape differs from the reference shape.
    #[error("shape mismatch for {variable}: expected {expected:?}, got {got:?}")]
    ShapeMismatch {
        /// Offending variable.
        variable: Variable,
        /// Reference shape.
        expected: Vec<usize>,
        /// Shape of the offending array.
        got: Vec<usize>,
    },

    /// Returned when a variable will be scored but the set has no parameters for it.
    #[error("membership set has no parameters for {variable}")]
    MissingParameters {
        /// Variable lacking parameters.
        variable: Variable,
    },

    /// Returned when trapezoidal temperature scoring is requested without trapezoids.
    #[error("trapezoid temperature model requested but no trapezoids were supplied")]
    MissingTrapezoids,

    /// Returned when a provider's set does not hold the requested species count.
    #[error("species count mismatch: expected {expected}, got {got}")]
    SpeciesCountMismatch {
        /// Requested number of species.
        expected: usize,
        /// Number of species supplied.
        got: usize,
    },

    /// Returned when a weight is negative or non-finite.
    #[error("weight for {variable} must be finite and >= 0, got {weight}")]
    InvalidWeight {
        /// Variable whose weight is invalid.
        variable: Variable,
        /// The invalid weight.
        weight: f64,
    },

    /// Returned when a configuration parameter is invalid.
    #[error("invalid configuration: {reason}")]
    InvalidConfig {
        /// Description of the problem.
        reason: String,
    },

    /// Wrapped error from the membership crate.
    #[error(transparent)]
    Membership(#[from] MembershipError),

    /// Wrapped array shape error.
    #[error(transparent)]
    Shape(#[from] ndarray::ShapeError),
}

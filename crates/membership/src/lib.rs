//! Membership functions and parameter tables for fuzzy-logic hydrometeor
//! classification.
//!
//! Every species the classifier can emit is described, per radar variable,
//! by a bell-shaped beta membership function `μ(x) = 1 / (1 + (((x − m)/a)²)^b)`.
//! Temperature may alternatively be described by a trapezoid with hard
//! cutoffs. This crate owns those primitives plus the parameter sets that
//! feed them.
//!
//! # Quick start
//!
//! ```
//! use hca_membership::{BetaParams, beta_membership};
//!
//! let rain_dz = BetaParams::new(15.0, 5.0, 40.0);
//! assert_eq!(rain_dz.membership(40.0), 1.0);
//! assert!(beta_membership(25.0, 15.0, 5.0, 40.0) < 0.5);
//! ```
//!
//! # Parameter lookup
//!
//! ```text
//! MembershipProvider (trait)
//!   ├─ membership_set(&ParamRequest) -> MembershipSet   (beta a/b/m per species)
//!   └─ trapezoids(&ParamRequest)     -> TrapezoidSet    (temperature only)
//!
//! MembershipTable    serde-deserializable stock provider (TOML / JSON)
//! ```
//!
//! Sets are validated at construction: a zero width `a` would divide by
//! zero in the per-bin loop, so it is rejected here instead.

mod beta;
mod error;
mod provider;
mod set;
mod table;
mod trapezoid;
mod variable;

pub use beta::{BetaParams, beta_membership};
pub use error::MembershipError;
pub use provider::{MembershipProvider, ParamRequest};
pub use set::{MembershipSet, VariableParams};
pub use table::{MembershipTable, TableEntry};
pub use trapezoid::{Trapezoid, TrapezoidSet};
pub use variable::{Band, Season, Variable};

//! The parameter-lookup seam between the classifiers and their tables.

use crate::error::MembershipError;
use crate::set::MembershipSet;
use crate::trapezoid::TrapezoidSet;
use crate::variable::{Band, Season};

/// What a classifier asks its provider for.
///
/// Defaults: temperature used, `temp_factor = 1.0`.
#[derive(Debug, Clone, PartialEq)]
pub struct ParamRequest {
    band: Band,
    season: Season,
    n_types: usize,
    use_temp: bool,
    temp_factor: f64,
}

impl ParamRequest {
    /// Creates a request for `n_types` species of `season` at `band`.
    pub fn new(band: Band, season: Season, n_types: usize) -> Self {
        Self {
            band,
            season,
            n_types,
            use_temp: true,
            temp_factor: 1.0,
        }
    }

    /// Sets whether temperature parameters are needed.
    pub fn with_use_temp(mut self, use_temp: bool) -> Self {
        self.use_temp = use_temp;
        self
    }

    /// Sets the temperature broadening factor (> 1 widens the T functions).
    pub fn with_temp_factor(mut self, temp_factor: f64) -> Self {
        self.temp_factor = temp_factor;
        self
    }

    /// Returns the radar band.
    pub fn band(&self) -> Band {
        self.band
    }

    /// Returns the season.
    pub fn season(&self) -> Season {
        self.season
    }

    /// Returns the number of species requested.
    pub fn n_types(&self) -> usize {
        self.n_types
    }

    /// Returns whether temperature parameters are needed.
    pub fn use_temp(&self) -> bool {
        self.use_temp
    }

    /// Returns the temperature broadening factor.
    pub fn temp_factor(&self) -> f64 {
        self.temp_factor
    }

    /// Validates the request.
    pub fn validate(&self) -> Result<(), MembershipError> {
        if self.n_types == 0 {
            return Err(MembershipError::NoSpecies);
        }
        if !self.temp_factor.is_finite() || self.temp_factor <= 0.0 {
            return Err(MembershipError::InvalidTempFactor {
                factor: self.temp_factor,
            });
        }
        Ok(())
    }
}

/// Supplies membership parameters. Implementations are pure lookups: the
/// same request must always produce the same set.
pub trait MembershipProvider {
    /// Beta parameters for the requested species.
    ///
    /// The returned set must hold exactly `request.n_types()` species.
    fn membership_set(&self, request: &ParamRequest) -> Result<MembershipSet, MembershipError>;

    /// Temperature trapezoids for the requested species.
    ///
    /// The default implementation reports that none are available.
    fn trapezoids(&self, request: &ParamRequest) -> Result<TrapezoidSet, MembershipError> {
        Err(MembershipError::MissingTrapezoids {
            band: request.band(),
            season: request.season(),
        })
    }
}

impl<P: MembershipProvider + ?Sized> MembershipProvider for &P {
    fn membership_set(&self, request: &ParamRequest) -> Result<MembershipSet, MembershipError> {
        (**self).membership_set(request)
    }

    fn trapezoids(&self, request: &ParamRequest) -> Result<TrapezoidSet, MembershipError> {
        (**self).trapezoids(request)
    }
}

//! In-memory parameter tables, loadable from TOML or JSON.
//!
//! ```toml
//! [[sets]]
//! band = "S"
//! season = "summer"
//! species = ["Drizzle", "Rain"]
//!
//! [sets.params.DZ]
//! a = [12.0, 15.0]
//! b = [5.0, 5.0]
//! m = [12.0, 38.0]
//!
//! [[sets.trapezoids]]
//! low = -5.0
//! low_mid = 0.0
//! high_mid = 40.0
//! high = 45.0
//! ```

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::MembershipError;
use crate::provider::{MembershipProvider, ParamRequest};
use crate::set::{MembershipSet, VariableParams};
use crate::trapezoid::{Trapezoid, TrapezoidSet};
use crate::variable::{Band, Season, Variable};

/// Parameters of all species for one band and season.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TableEntry {
    /// Radar band the parameters were derived for.
    pub band: Band,
    /// Season family.
    pub season: Season,
    /// Species names in index order.
    pub species: Vec<String>,
    /// Beta parameters per variable.
    #[serde(default)]
    pub params: BTreeMap<Variable, VariableParams>,
    /// Optional temperature trapezoids, one per species.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub trapezoids: Vec<Trapezoid>,
}

impl TableEntry {
    /// Creates an entry with no parameters.
    pub fn new<S: Into<String>>(band: Band, season: Season, species: impl IntoIterator<Item = S>) -> Self {
        Self {
            band,
            season,
            species: species.into_iter().map(Into::into).collect(),
            params: BTreeMap::new(),
            trapezoids: Vec::new(),
        }
    }

    /// Adds or replaces the parameters of one variable.
    pub fn with_params(mut self, variable: Variable, params: VariableParams) -> Self {
        self.params.insert(variable, params);
        self
    }

    /// Sets the temperature trapezoids.
    pub fn with_trapezoids(mut self, trapezoids: Vec<Trapezoid>) -> Self {
        self.trapezoids = trapezoids;
        self
    }

    /// Checks every variable and trapezoid against the species count.
    pub fn validate(&self) -> Result<(), MembershipError> {
        let n = self.species.len();
        let mut beta = BTreeMap::new();
        for (&variable, vp) in &self.params {
            beta.insert(variable, vp.to_beta(variable, n)?);
        }
        MembershipSet::new(self.species.clone(), beta)?;
        if !self.trapezoids.is_empty() {
            if self.trapezoids.len() != n {
                return Err(MembershipError::LengthMismatch {
                    variable: Variable::T,
                    field: "trapezoids",
                    expected: n,
                    got: self.trapezoids.len(),
                });
            }
            TrapezoidSet::new(self.trapezoids.clone())?;
        }
        Ok(())
    }

    fn check_count(&self, request: &ParamRequest) -> Result<usize, MembershipError> {
        request.validate()?;
        let n = request.n_types();
        if n > self.species.len() {
            return Err(MembershipError::NotEnoughSpecies {
                requested: n,
                available: self.species.len(),
            });
        }
        Ok(n)
    }
}

/// A collection of [`TableEntry`] values keyed by band and season.
///
/// Requests for fewer species than an entry holds take the leading
/// `n_types` species. Temperature widths are multiplied by the request's
/// `temp_factor`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct MembershipTable {
    #[serde(default)]
    sets: Vec<TableEntry>,
}

impl MembershipTable {
    /// Creates an empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds an entry, replacing any existing entry for the same band and season.
    pub fn with_set(mut self, entry: TableEntry) -> Self {
        self.sets
            .retain(|e| !(e.band == entry.band && e.season == entry.season));
        self.sets.push(entry);
        self
    }

    /// All entries.
    pub fn sets(&self) -> &[TableEntry] {
        &self.sets
    }

    /// Validates every entry. Call after deserializing.
    pub fn validate(&self) -> Result<(), MembershipError> {
        self.sets.iter().try_for_each(TableEntry::validate)
    }

    fn entry(&self, band: Band, season: Season) -> Result<&TableEntry, MembershipError> {
        self.sets
            .iter()
            .find(|e| e.band == band && e.season == season)
            .ok_or(MembershipError::MissingSet { band, season })
    }
}

impl MembershipProvider for MembershipTable {
    fn membership_set(&self, request: &ParamRequest) -> Result<MembershipSet, MembershipError> {
        let entry = self.entry(request.band(), request.season())?;
        let n = entry.check_count(request)?;
        let n_all = entry.species.len();

        let mut params = BTreeMap::new();
        for (&variable, vp) in &entry.params {
            if variable == Variable::T && !request.use_temp() {
                continue;
            }
            let mut beta = vp.to_beta(variable, n_all)?;
            beta.truncate(n);
            if variable == Variable::T {
                for p in &mut beta {
                    p.a *= request.temp_factor();
                }
            }
            params.insert(variable, beta);
        }

        debug!(
            band = %request.band(),
            season = %request.season(),
            n_types = n,
            n_variables = params.len(),
            "membership set resolved"
        );
        MembershipSet::new(entry.species[..n].to_vec(), params)
    }

    fn trapezoids(&self, request: &ParamRequest) -> Result<TrapezoidSet, MembershipError> {
        let entry = self.entry(request.band(), request.season())?;
        if entry.trapezoids.is_empty() {
            return Err(MembershipError::MissingTrapezoids {
                band: request.band(),
                season: request.season(),
            });
        }
        let n = entry.check_count(request)?;
        if entry.trapezoids.len() < n {
            return Err(MembershipError::NotEnoughSpecies {
                requested: n,
                available: entry.trapezoids.len(),
            });
        }
        TrapezoidSet::new(entry.trapezoids[..n].to_vec())
    }
}

//! Radar variables, frequency bands and parameter seasons.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::MembershipError;

/// A measurand the classifier can score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum Variable {
    /// Reflectivity (dBZ).
    Dz,
    /// Differential reflectivity (dB).
    Dr,
    /// Specific differential phase (deg/km).
    Kd,
    /// Co-polar correlation coefficient.
    Rh,
    /// Linear depolarization ratio (dB).
    Ld,
    /// Temperature (°C).
    T,
    /// Signal-to-noise ratio (dB). Only consumed by melting-layer detection.
    Sn,
}

impl Variable {
    /// All variables in key order.
    pub const ALL: [Variable; 7] = [
        Variable::Dz,
        Variable::Dr,
        Variable::Kd,
        Variable::Rh,
        Variable::Ld,
        Variable::T,
        Variable::Sn,
    ];

    /// Polarimetric variables, in the order they are summed.
    pub const POLARIMETRIC: [Variable; 4] =
        [Variable::Dr, Variable::Kd, Variable::Rh, Variable::Ld];

    /// Returns the conventional short key (`"DZ"`, `"DR"`, ...).
    pub fn key(self) -> &'static str {
        match self {
            Variable::Dz => "DZ",
            Variable::Dr => "DR",
            Variable::Kd => "KD",
            Variable::Rh => "RH",
            Variable::Ld => "LD",
            Variable::T => "T",
            Variable::Sn => "SN",
        }
    }

    /// Returns `true` for DR, KD, RH and LD.
    pub fn is_polarimetric(self) -> bool {
        Self::POLARIMETRIC.contains(&self)
    }
}

impl fmt::Display for Variable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for Variable {
    type Err = MembershipError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let upper = s.trim().to_ascii_uppercase();
        Variable::ALL
            .into_iter()
            .find(|v| v.key() == upper)
            .ok_or_else(|| MembershipError::UnknownVariable { name: s.to_string() })
    }
}

impl TryFrom<String> for Variable {
    type Error = MembershipError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

impl From<Variable> for String {
    fn from(v: Variable) -> Self {
        v.key().to_string()
    }
}

/// Radar frequency band. Membership functions differ per band.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum Band {
    /// S band (~10 cm).
    #[default]
    S,
    /// C band (~5 cm).
    C,
    /// X band (~3 cm).
    X,
}

impl fmt::Display for Band {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Band::S => "S",
            Band::C => "C",
            Band::X => "X",
        };
        f.write_str(s)
    }
}

impl FromStr for Band {
    type Err = MembershipError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "S" => Ok(Band::S),
            "C" => Ok(Band::C),
            "X" => Ok(Band::X),
            _ => Err(MembershipError::UnknownBand { name: s.to_string() }),
        }
    }
}

impl TryFrom<String> for Band {
    type Error = MembershipError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

impl From<Band> for String {
    fn from(b: Band) -> Self {
        b.to_string()
    }
}

/// Which family of parameter sets is being requested.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Season {
    /// Warm-season species (drizzle, rain, graupel, hail, ...).
    Summer,
    /// Cold-season sets below the melting layer (frozen precip vs rain).
    WinterWarm,
    /// Cold-season sets above the melting layer (ice crystals, plates, ...).
    WinterCold,
}

impl fmt::Display for Season {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Season::Summer => "summer",
            Season::WinterWarm => "winter_warm",
            Season::WinterCold => "winter_cold",
        };
        f.write_str(s)
    }
}

impl FromStr for Season {
    type Err = MembershipError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "summer" => Ok(Season::Summer),
            "winter_warm" => Ok(Season::WinterWarm),
            "winter_cold" => Ok(Season::WinterCold),
            _ => Err(MembershipError::UnknownSeason { name: s.to_string() }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn variable_keys_round_trip() {
        for v in Variable::ALL {
            assert_eq!(v.key().parse::<Variable>().unwrap(), v);
        }
    }

    #[test]
    fn variable_parse_is_case_insensitive() {
        assert_eq!("dz".parse::<Variable>().unwrap(), Variable::Dz);
        assert_eq!(" Rh ".parse::<Variable>().unwrap(), Variable::Rh);
    }

    #[test]
    fn variable_parse_unknown() {
        let err = "ZDR".parse::<Variable>().unwrap_err();
        assert!(matches!(err, MembershipError::UnknownVariable { .. }));
    }

    #[test]
    fn polarimetric_membership() {
        assert!(Variable::Kd.is_polarimetric());
        assert!(!Variable::Dz.is_polarimetric());
        assert!(!Variable::T.is_polarimetric());
        assert!(!Variable::Sn.is_polarimetric());
    }

    #[test]
    fn band_parse() {
        assert_eq!("s".parse::<Band>().unwrap(), Band::S);
        assert_eq!("X".parse::<Band>().unwrap(), Band::X);
        assert!("K".parse::<Band>().is_err());
        assert_eq!(Band::default(), Band::S);
    }

    #[test]
    fn season_display_round_trip() {
        for s in [Season::Summer, Season::WinterWarm, Season::WinterCold] {
            assert_eq!(s.to_string().parse::<Season>().unwrap(), s);
        }
    }
}

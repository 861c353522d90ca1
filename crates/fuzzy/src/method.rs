//! Scoring-method and temperature-model dispatch.

use std::fmt;
use std::str::FromStr;

use hca_membership::Variable;

use crate::error::FhcError;

/// How per-variable memberships combine into one species score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ScoringMethod {
    /// Weighted mean of every present variable, reflectivity and temperature included.
    Linear,
    /// Weighted mean of the polarimetric variables, multiplied by the
    /// temperature and reflectivity memberships.
    #[default]
    Hybrid,
}

impl ScoringMethod {
    /// Variables entering the weighted sum, in summation order.
    pub fn summed_variables(self) -> &'static [Variable] {
        match self {
            ScoringMethod::Linear => &[
                Variable::Dr,
                Variable::Kd,
                Variable::Rh,
                Variable::Ld,
                Variable::T,
                Variable::Dz,
            ],
            ScoringMethod::Hybrid => &Variable::POLARIMETRIC,
        }
    }
}

impl fmt::Display for ScoringMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ScoringMethod::Linear => f.write_str("linear"),
            ScoringMethod::Hybrid => f.write_str("hybrid"),
        }
    }
}

impl FromStr for ScoringMethod {
    type Err = FhcError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "linear" => Ok(ScoringMethod::Linear),
            "hybrid" => Ok(ScoringMethod::Hybrid),
            _ => Err(FhcError::UnknownMethod { name: s.to_string() }),
        }
    }
}

/// Which membership form scores temperature.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TemperatureModel {
    /// Beta function, like every other variable.
    #[default]
    Beta,
    /// Trapezoid with hard zero outside the plausible range.
    Trapezoid,
}

impl fmt::Display for TemperatureModel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TemperatureModel::Beta => f.write_str("beta"),
            TemperatureModel::Trapezoid => f.write_str("trapezoid"),
        }
    }
}

impl FromStr for TemperatureModel {
    type Err = FhcError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "beta" => Ok(TemperatureModel::Beta),
            "trapezoid" | "trap" => Ok(TemperatureModel::Trapezoid),
            _ => Err(FhcError::UnknownTemperatureModel { name: s.to_string() }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_methods() {
        assert_eq!("linear".parse::<ScoringMethod>().unwrap(), ScoringMethod::Linear);
        assert_eq!("HYBRID".parse::<ScoringMethod>().unwrap(), ScoringMethod::Hybrid);
    }

    #[test]
    fn parse_unknown_method() {
        let err = "weighted".parse::<ScoringMethod>().unwrap_err();
        assert!(matches!(err, FhcError::UnknownMethod { ref name } if name == "weighted"));
    }

    #[test]
    fn default_is_hybrid() {
        assert_eq!(ScoringMethod::default(), ScoringMethod::Hybrid);
        assert_eq!(TemperatureModel::default(), TemperatureModel::Beta);
    }

    #[test]
    fn hybrid_sums_polarimetric_only() {
        let vars = ScoringMethod::Hybrid.summed_variables();
        assert!(vars.iter().all(|v| v.is_polarimetric()));
        assert_eq!(vars.len(), 4);
    }

    #[test]
    fn linear_sums_everything_but_sn() {
        let vars = ScoringMethod::Linear.summed_variables();
        assert_eq!(vars.len(), 6);
        assert!(!vars.contains(&Variable::Sn));
        assert_eq!(vars.last(), Some(&Variable::Dz));
    }

    #[test]
    fn parse_temperature_model() {
        assert_eq!("trap".parse::<TemperatureModel>().unwrap(), TemperatureModel::Trapezoid);
        assert!("gaussian".parse::<TemperatureModel>().is_err());
    }
}

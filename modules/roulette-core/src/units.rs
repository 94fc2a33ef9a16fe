//! Distance unit conversion. Meters are the canonical unit everywhere else.

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum UnitError {
    #[error("unknown unit provided: {0:?}")]
    UnknownUnit(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LengthUnit {
    Mile,
    Kilometer,
    Meter,
}

impl LengthUnit {
    /// Length of one unit in meters.
    pub fn meters(self) -> f64 {
        match self {
            LengthUnit::Mile => 1609.344,
            LengthUnit::Kilometer => 1000.0,
            LengthUnit::Meter => 1.0,
        }
    }
}

/// Exact match against the accepted spellings. Callers lowercase first.
impl FromStr for LengthUnit {
    type Err = UnitError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "mi" | "mile" | "miles" => Ok(LengthUnit::Mile),
            "km" | "kilometer" | "kilometers" | "kilometre" | "kilometres" => {
                Ok(LengthUnit::Kilometer)
            }
            "m" | "meter" | "meters" | "metre" | "metres" => Ok(LengthUnit::Meter),
            other => Err(UnitError::UnknownUnit(other.to_string())),
        }
    }
}

impl fmt::Display for LengthUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LengthUnit::Mile => write!(f, "miles"),
            LengthUnit::Kilometer => write!(f, "kilometers"),
            LengthUnit::Meter => write!(f, "meters"),
        }
    }
}

pub fn to_meters(value: f64, unit_name: &str) -> Result<f64, UnitError> {
    let unit: LengthUnit = unit_name.parse()?;
    Ok(value * unit.meters())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_close(actual: f64, expected: f64) {
        assert!(
            (actual - expected).abs() < 1e-6,
            "expected {expected}, got {actual}"
        );
    }

    #[test]
    fn miles_spellings() {
        assert_close(to_meters(25.0, "miles").unwrap(), 40233.6);
        assert_close(to_meters(10.0, "mile").unwrap(), 16093.44);
        assert_close(to_meters(15.0, "mi").unwrap(), 24140.16);
    }

    #[test]
    fn kilometer_spellings() {
        for name in ["km", "kilometer", "kilometers", "kilometre", "kilometres"] {
            assert_close(to_meters(25.0, name).unwrap(), 25000.0);
        }
    }

    #[test]
    fn meter_spellings() {
        for name in ["m", "meter", "meters", "metre", "metres"] {
            assert_close(to_meters(15.0, name).unwrap(), 15.0);
        }
    }

    #[test]
    fn unknown_unit_is_an_error() {
        let err = to_meters(15.0, "random-unit").unwrap_err();
        assert_eq!(err, UnitError::UnknownUnit("random-unit".into()));
        assert_eq!(err.to_string(), "unknown unit provided: \"random-unit\"");
    }

    #[test]
    fn empty_unit_does_not_default_to_meters() {
        assert!(to_meters(15.0, "").is_err());
    }

    #[test]
    fn lookup_is_case_sensitive() {
        assert!(to_meters(1.0, "MI").is_err());
    }

    #[test]
    fn display_round_trips_through_from_str() {
        for unit in [LengthUnit::Mile, LengthUnit::Kilometer, LengthUnit::Meter] {
            assert_eq!(unit.to_string().parse::<LengthUnit>().unwrap(), unit);
        }
    }
}

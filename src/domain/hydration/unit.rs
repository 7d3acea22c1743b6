//! Volume display units and conversions to the canonical milliliter value

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Milliliters per centiliter
pub const ML_PER_CL: f64 = 10.0;

/// Milliliters per liter
pub const ML_PER_L: f64 = 1000.0;

/// Milliliters per US fluid ounce
pub const ML_PER_OZ: f64 = 29.5735;

/// Error returned when a unit symbol is not recognized
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("Unknown volume unit '{0}'. Expected one of: mL, cL, L, oz")]
pub struct UnitParseError(pub String);

/// Unit a volume is displayed or entered in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum VolumeUnit {
    #[default]
    Milliliter,
    Centiliter,
    Liter,
    FluidOunce,
}

impl VolumeUnit {
    pub const ALL: [VolumeUnit; 4] = [
        VolumeUnit::Milliliter,
        VolumeUnit::Centiliter,
        VolumeUnit::Liter,
        VolumeUnit::FluidOunce,
    ];

    /// Short symbol shown to users
    pub fn symbol(&self) -> &'static str {
        match self {
            Self::Milliliter => "mL",
            Self::Centiliter => "cL",
            Self::Liter => "L",
            Self::FluidOunce => "oz",
        }
    }

    /// How many milliliters one unit holds
    pub fn milliliters_per_unit(&self) -> f64 {
        match self {
            Self::Milliliter => 1.0,
            Self::Centiliter => ML_PER_CL,
            Self::Liter => ML_PER_L,
            Self::FluidOunce => ML_PER_OZ,
        }
    }

    /// Number of decimals used when showing a value in this unit
    pub fn display_precision(&self) -> usize {
        match self {
            Self::Milliliter | Self::Centiliter => 0,
            Self::Liter => 2,
            Self::FluidOunce => 1,
        }
    }

    /// Format a value already expressed in this unit, e.g. `1.5 L`
    pub fn format_value(&self, value: f64) -> String {
        format!("{} {}", format_number(value, self.display_precision()), self.symbol())
    }
}

impl fmt::Display for VolumeUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

impl FromStr for VolumeUnit {
    type Err = UnitParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "ml" | "milliliter" | "milliliters" => Ok(Self::Milliliter),
            "cl" | "centiliter" | "centiliters" => Ok(Self::Centiliter),
            "l" | "liter" | "liters" => Ok(Self::Liter),
            "oz" | "fl oz" | "ounce" | "ounces" => Ok(Self::FluidOunce),
            _ => Err(UnitParseError(s.to_string())),
        }
    }
}

impl TryFrom<String> for VolumeUnit {
    type Error = UnitParseError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<VolumeUnit> for String {
    fn from(unit: VolumeUnit) -> Self {
        unit.symbol().to_string()
    }
}

/// Convert a value expressed in `unit` to milliliters
pub fn to_milliliters(value: f64, unit: VolumeUnit) -> f64 {
    match unit {
        VolumeUnit::Milliliter => value,
        other => value * other.milliliters_per_unit(),
    }
}

/// Convert a milliliter value to `unit`
pub fn from_milliliters(value_ml: f64, unit: VolumeUnit) -> f64 {
    match unit {
        VolumeUnit::Milliliter => value_ml,
        other => value_ml / other.milliliters_per_unit(),
    }
}

/// Round to `precision` decimals and drop trailing zeros
fn format_number(value: f64, precision: usize) -> String {
    let formatted = format!("{:.*}", precision, value);

    if formatted.contains('.') {
        formatted
            .trim_end_matches('0')
            .trim_end_matches('.')
            .to_string()
    } else {
        formatted
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_to_milliliters() {
        assert_eq!(to_milliliters(250.0, VolumeUnit::Milliliter), 250.0);
        assert_eq!(to_milliliters(25.0, VolumeUnit::Centiliter), 250.0);
        assert_eq!(to_milliliters(2.5, VolumeUnit::Liter), 2500.0);
    }

    #[test]
    fn test_ounces_to_milliliters() {
        let ml = to_milliliters(67.6, VolumeUnit::FluidOunce);
        assert!((ml - 1999.1686).abs() < 1e-3);
    }

    #[test]
    fn test_liters_round_trip() {
        let ml = to_milliliters(2.5, VolumeUnit::Liter);
        assert_eq!(ml, 2500.0);
        assert_eq!(from_milliliters(ml, VolumeUnit::Liter), 2.5);
    }

    #[test]
    fn test_parse_symbols() {
        assert_eq!("mL".parse::<VolumeUnit>().unwrap(), VolumeUnit::Milliliter);
        assert_eq!("CL".parse::<VolumeUnit>().unwrap(), VolumeUnit::Centiliter);
        assert_eq!(" l ".parse::<VolumeUnit>().unwrap(), VolumeUnit::Liter);
        assert_eq!("oz".parse::<VolumeUnit>().unwrap(), VolumeUnit::FluidOunce);
    }

    #[test]
    fn test_parse_unknown_unit() {
        let err = "gallon".parse::<VolumeUnit>().unwrap_err();
        assert_eq!(err, UnitParseError("gallon".to_string()));
        assert!(err.to_string().contains("gallon"));
    }

    #[test]
    fn test_display_parses_back() {
        for unit in VolumeUnit::ALL {
            assert_eq!(unit.to_string().parse::<VolumeUnit>().unwrap(), unit);
        }
    }

    #[test]
    fn test_serde_uses_symbols() {
        let json = serde_json::to_string(&VolumeUnit::FluidOunce).unwrap();
        assert_eq!(json, "\"oz\"");

        let unit: VolumeUnit = serde_json::from_str("\"cL\"").unwrap();
        assert_eq!(unit, VolumeUnit::Centiliter);

        assert!(serde_json::from_str::<VolumeUnit>("\"cup\"").is_err());
    }

    #[test]
    fn test_format_value() {
        assert_eq!(VolumeUnit::Liter.format_value(1.5), "1.5 L");
        assert_eq!(VolumeUnit::Liter.format_value(4.0), "4 L");
        assert_eq!(VolumeUnit::Milliliter.format_value(1500.0), "1500 mL");
        assert_eq!(VolumeUnit::FluidOunce.format_value(50.7210), "50.7 oz");
        assert_eq!(VolumeUnit::FluidOunce.format_value(135.2562), "135.3 oz");
    }
}

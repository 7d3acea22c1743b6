//! Physiological inputs for the goal calculation

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors that can occur while building a [`HydrationProfile`]
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ProfileValidationError {
    #[error("Weight must be a positive number of kilograms, got {0}")]
    InvalidWeight(f64),

    #[error("Age cannot be negative, got {0}")]
    NegativeAge(i32),

    #[error("Temperature must be a finite number of degrees Celsius")]
    InvalidTemperature,

    #[error("Unknown sex '{0}'. Expected 'male' or 'female'")]
    UnknownSex(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sex {
    Male,
    Female,
}

impl fmt::Display for Sex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Male => write!(f, "male"),
            Self::Female => write!(f, "female"),
        }
    }
}

impl FromStr for Sex {
    type Err = ProfileValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "male" | "m" => Ok(Self::Male),
            "female" | "f" => Ok(Self::Female),
            _ => Err(ProfileValidationError::UnknownSex(s.to_string())),
        }
    }
}

/// Validated calculator input
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct HydrationProfile {
    age: i32,
    sex: Sex,
    weight_kg: f64,
    temperature_celsius: f64,
}

impl HydrationProfile {
    /// Create a profile after validation
    ///
    /// Rules:
    /// - Weight must be finite and strictly positive
    /// - Age must be zero or more
    /// - Temperature must be finite
    pub fn new(
        age: i32,
        sex: Sex,
        weight_kg: f64,
        temperature_celsius: f64,
    ) -> Result<Self, ProfileValidationError> {
        if !weight_kg.is_finite() || weight_kg <= 0.0 {
            return Err(ProfileValidationError::InvalidWeight(weight_kg));
        }

        if age < 0 {
            return Err(ProfileValidationError::NegativeAge(age));
        }

        if !temperature_celsius.is_finite() {
            return Err(ProfileValidationError::InvalidTemperature);
        }

        Ok(Self {
            age,
            sex,
            weight_kg,
            temperature_celsius,
        })
    }

    pub fn age(&self) -> i32 {
        self.age
    }

    pub fn sex(&self) -> Sex {
        self.sex
    }

    pub fn weight_kg(&self) -> f64 {
        self.weight_kg
    }

    pub fn temperature_celsius(&self) -> f64 {
        self.temperature_celsius
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_profile() {
        let profile = HydrationProfile::new(30, Sex::Male, 70.0, 20.0).unwrap();
        assert_eq!(profile.age(), 30);
        assert_eq!(profile.sex(), Sex::Male);
        assert_eq!(profile.weight_kg(), 70.0);
        assert_eq!(profile.temperature_celsius(), 20.0);
    }

    #[test]
    fn test_rejects_non_positive_weight() {
        assert_eq!(
            HydrationProfile::new(30, Sex::Female, 0.0, 20.0),
            Err(ProfileValidationError::InvalidWeight(0.0))
        );
        assert_eq!(
            HydrationProfile::new(30, Sex::Female, -5.0, 20.0),
            Err(ProfileValidationError::InvalidWeight(-5.0))
        );
        assert!(HydrationProfile::new(30, Sex::Female, f64::NAN, 20.0).is_err());
    }

    #[test]
    fn test_rejects_negative_age() {
        assert_eq!(
            HydrationProfile::new(-1, Sex::Female, 60.0, 20.0),
            Err(ProfileValidationError::NegativeAge(-1))
        );
    }

    #[test]
    fn test_rejects_non_finite_temperature() {
        assert_eq!(
            HydrationProfile::new(30, Sex::Male, 60.0, f64::INFINITY),
            Err(ProfileValidationError::InvalidTemperature)
        );
    }

    #[test]
    fn test_negative_temperature_is_allowed() {
        assert!(HydrationProfile::new(30, Sex::Male, 60.0, -12.5).is_ok());
    }

    #[test]
    fn test_parse_sex() {
        assert_eq!("male".parse::<Sex>().unwrap(), Sex::Male);
        assert_eq!("Female".parse::<Sex>().unwrap(), Sex::Female);
        assert_eq!(
            "other".parse::<Sex>(),
            Err(ProfileValidationError::UnknownSex("other".to_string()))
        );
    }

    #[test]
    fn test_sex_serialization() {
        assert_eq!(serde_json::to_string(&Sex::Female).unwrap(), "\"female\"");
        assert_eq!(serde_json::from_str::<Sex>("\"male\"").unwrap(), Sex::Male);
    }
}

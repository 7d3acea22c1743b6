use thiserror::Error;

use super::hydration::{
    GoalOutOfRange, IntakeValidationError, ProfileValidationError, UnitParseError,
};

/// Core domain errors
#[derive(Debug, Error)]
pub enum DomainError {
    #[error("Validation error: {message}")]
    Validation { message: String },

    #[error("Internal error: {message}")]
    Internal { message: String },
}

impl DomainError {
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation {
            message: message.into(),
        }
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal {
            message: message.into(),
        }
    }
}

impl From<ProfileValidationError> for DomainError {
    fn from(err: ProfileValidationError) -> Self {
        Self::validation(err.to_string())
    }
}

impl From<UnitParseError> for DomainError {
    fn from(err: UnitParseError) -> Self {
        Self::validation(err.to_string())
    }
}

impl From<IntakeValidationError> for DomainError {
    fn from(err: IntakeValidationError) -> Self {
        Self::validation(err.to_string())
    }
}

impl From<GoalOutOfRange> for DomainError {
    fn from(err: GoalOutOfRange) -> Self {
        Self::validation(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_error() {
        let error = DomainError::validation("Invalid input");
        assert_eq!(error.to_string(), "Validation error: Invalid input");
    }

    #[test]
    fn test_from_profile_error() {
        let error: DomainError = ProfileValidationError::NegativeAge(-3).into();
        assert_eq!(
            error.to_string(),
            "Validation error: Age cannot be negative, got -3"
        );
    }

    #[test]
    fn test_from_unit_error() {
        let error: DomainError = UnitParseError("cup".to_string()).into();
        assert!(matches!(error, DomainError::Validation { .. }));
    }
}

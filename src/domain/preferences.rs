//! Per-user display preferences
//!
//! Loaded once at startup and passed by reference to whatever needs them.
//! There is no global instance.

use serde::{Deserialize, Serialize};

use super::hydration::VolumeUnit;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct Preferences {
    /// Unit used when a request does not name one
    pub display_unit: VolumeUnit,
}

impl Preferences {
    pub fn new(display_unit: VolumeUnit) -> Self {
        Self { display_unit }
    }

    /// Pick the requested unit, falling back to the preferred one
    pub fn unit_or_default(&self, requested: Option<VolumeUnit>) -> VolumeUnit {
        requested.unwrap_or(self.display_unit)
    }

    /// Preferences after logout
    pub fn cleared() -> Self {
        Self::default()
    }

    pub fn clear(&mut self) {
        *self = Self::cleared();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unit_fallback() {
        let prefs = Preferences::new(VolumeUnit::Liter);
        assert_eq!(prefs.unit_or_default(None), VolumeUnit::Liter);
        assert_eq!(
            prefs.unit_or_default(Some(VolumeUnit::FluidOunce)),
            VolumeUnit::FluidOunce
        );
    }

    #[test]
    fn test_clear_resets_to_defaults() {
        let mut prefs = Preferences::new(VolumeUnit::FluidOunce);
        prefs.clear();

        assert_eq!(prefs, Preferences::cleared());
        assert_eq!(prefs.display_unit, VolumeUnit::Milliliter);
    }

    #[test]
    fn test_deserialize_partial() {
        let prefs: Preferences = serde_json::from_str(r#"{"display_unit": "cL"}"#).unwrap();
        assert_eq!(prefs.display_unit, VolumeUnit::Centiliter);
    }
}

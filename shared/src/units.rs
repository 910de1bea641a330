//! Unit system handling and normalization
//!
//! All computation happens on metric values (kg, cm). Imperial input is
//! converted at the boundary before any formula runs; metric input passes
//! through unchanged.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Pounds per kilogram conversion factor
pub const LB_TO_KG: f64 = 0.45359237;
/// Inches per centimeter conversion factor
pub const IN_TO_CM: f64 = 2.54;

/// Unit system selected by the user
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum UnitSystem {
    /// Pounds / inches
    Imperial,
    /// Kilograms / centimeters
    #[default]
    Metric,
}

impl UnitSystem {
    /// Normalize a weight value in this system to kilograms
    pub fn weight_to_kg(&self, value: f64) -> f64 {
        match self {
            UnitSystem::Imperial => value * LB_TO_KG,
            UnitSystem::Metric => value,
        }
    }

    /// Normalize a height value in this system to centimeters
    pub fn height_to_cm(&self, value: f64) -> f64 {
        match self {
            UnitSystem::Imperial => value * IN_TO_CM,
            UnitSystem::Metric => value,
        }
    }

    /// Convert kilograms back to this system's weight unit
    pub fn weight_from_kg(&self, kg: f64) -> f64 {
        match self {
            UnitSystem::Imperial => kg / LB_TO_KG,
            UnitSystem::Metric => kg,
        }
    }

    /// Convert centimeters back to this system's height unit
    pub fn height_from_cm(&self, cm: f64) -> f64 {
        match self {
            UnitSystem::Imperial => cm / IN_TO_CM,
            UnitSystem::Metric => cm,
        }
    }

    /// Weight unit abbreviation
    pub fn weight_abbreviation(&self) -> &'static str {
        match self {
            UnitSystem::Imperial => "lbs",
            UnitSystem::Metric => "kg",
        }
    }

    /// Height unit abbreviation
    pub fn height_abbreviation(&self) -> &'static str {
        match self {
            UnitSystem::Imperial => "in",
            UnitSystem::Metric => "cm",
        }
    }
}

impl fmt::Display for UnitSystem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UnitSystem::Imperial => write!(f, "imperial"),
            UnitSystem::Metric => write!(f, "metric"),
        }
    }
}

impl std::str::FromStr for UnitSystem {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "imperial" | "us" => Ok(UnitSystem::Imperial),
            "metric" | "si" => Ok(UnitSystem::Metric),
            _ => Err(format!("Unknown unit system: {}", s)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_known_conversions() {
        // 154 lbs = 69.853 kg
        let kg = UnitSystem::Imperial.weight_to_kg(154.0);
        assert!((kg - 69.853).abs() < 0.001);

        // 69 inches = 175.26 cm
        let cm = UnitSystem::Imperial.height_to_cm(69.0);
        assert!((cm - 175.26).abs() < 0.001);
    }

    #[test]
    fn test_metric_passthrough() {
        assert_eq!(UnitSystem::Metric.weight_to_kg(70.0), 70.0);
        assert_eq!(UnitSystem::Metric.height_to_cm(175.0), 175.0);
    }

    #[test]
    fn test_abbreviations() {
        assert_eq!(UnitSystem::Imperial.weight_abbreviation(), "lbs");
        assert_eq!(UnitSystem::Imperial.height_abbreviation(), "in");
        assert_eq!(UnitSystem::Metric.weight_abbreviation(), "kg");
        assert_eq!(UnitSystem::Metric.height_abbreviation(), "cm");
    }

    #[test]
    fn test_unit_system_parsing() {
        assert_eq!("imperial".parse::<UnitSystem>().unwrap(), UnitSystem::Imperial);
        assert_eq!("metric".parse::<UnitSystem>().unwrap(), UnitSystem::Metric);
        assert!("nautical".parse::<UnitSystem>().is_err());
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(100))]

        /// Property: weight conversion round-trip preserves value
        #[test]
        fn prop_weight_roundtrip(lbs in 40.0f64..1100.0) {
            let kg = UnitSystem::Imperial.weight_to_kg(lbs);
            let back = UnitSystem::Imperial.weight_from_kg(kg);
            prop_assert!((lbs - back).abs() < 0.0001,
                "Round-trip failed: {} -> {} -> {}", lbs, kg, back);
        }

        /// Property: height conversion round-trip preserves value
        #[test]
        fn prop_height_roundtrip(inches in 20.0f64..100.0) {
            let cm = UnitSystem::Imperial.height_to_cm(inches);
            let back = UnitSystem::Imperial.height_from_cm(cm);
            prop_assert!((inches - back).abs() < 0.0001,
                "Round-trip failed: {} -> {} -> {}", inches, cm, back);
        }

        /// Property: imperial weights normalize to fewer kilograms than pounds
        #[test]
        fn prop_imperial_weight_shrinks(lbs in 1.0f64..1100.0) {
            prop_assert!(UnitSystem::Imperial.weight_to_kg(lbs) < lbs);
        }
    }
}

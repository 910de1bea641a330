//! MacroMatch WASM Module
//!
//! WebAssembly bindings over the shared computational core, so the
//! browser client computes caloric targets and workout selections
//! locally with the same code the backend uses. Structured inputs and
//! outputs cross the boundary as JSON strings.

use macromatch_shared::metabolics::{self, BiometricInput, GoalPreferences};
use wasm_bindgen::prelude::*;

/// Run the full metabolic calculation.
///
/// `biometrics_json` and `goals_json` are the same shapes the backend's
/// calculator endpoint accepts; the return value is the serialized
/// CalculationResult. Validation failures become JS errors carrying the
/// field-level message.
#[wasm_bindgen]
pub fn compute_targets(biometrics_json: &str, goals_json: &str) -> Result<String, JsError> {
    compute_targets_json(biometrics_json, goals_json).map_err(|e| JsError::new(&e))
}

// JsError can only be constructed inside a wasm runtime; keeping the
// logic on plain strings lets native tests cover both paths.
fn compute_targets_json(biometrics_json: &str, goals_json: &str) -> Result<String, String> {
    let biometrics: BiometricInput = serde_json::from_str(biometrics_json)
        .map_err(|e| format!("Invalid biometrics: {}", e))?;
    let goals: GoalPreferences = serde_json::from_str(goals_json)
        .map_err(|e| format!("Invalid goal preferences: {}", e))?;

    let result = metabolics::compute(&biometrics, &goals).map_err(|e| e.to_string())?;

    serde_json::to_string(&result).map_err(|e| e.to_string())
}

/// BMR via Mifflin-St Jeor on pre-normalized metric values
#[wasm_bindgen]
pub fn bmr_mifflin_st_jeor(weight_kg: f64, height_cm: f64, age_years: i32, is_male: bool) -> f64 {
    let sex = if is_male {
        metabolics::Sex::Male
    } else {
        metabolics::Sex::Female
    };
    metabolics::bmr_mifflin_st_jeor(weight_kg, height_cm, age_years, sex)
}

/// BMR via Katch-McArdle for a known body fat percentage
#[wasm_bindgen]
pub fn bmr_katch_mcardle(weight_kg: f64, body_fat_percent: f64) -> f64 {
    metabolics::bmr_katch_mcardle(weight_kg, body_fat_percent)
}

/// Pounds to kilograms
#[wasm_bindgen]
pub fn lb_to_kg(pounds: f64) -> f64 {
    pounds * macromatch_shared::units::LB_TO_KG
}

/// Inches to centimeters
#[wasm_bindgen]
pub fn in_to_cm(inches: f64) -> f64 {
    inches * macromatch_shared::units::IN_TO_CM
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_compute_targets_from_json() {
        let biometrics = r#"{
            "weight": 154.0,
            "height": 69.0,
            "age": 30,
            "sex": "male",
            "activity": "moderately_active",
            "unit_system": "imperial"
        }"#;
        let goals = r#"{"diet_type": "low_carb"}"#;

        let result = compute_targets_json(biometrics, goals).unwrap();
        let parsed: serde_json::Value = serde_json::from_str(&result).unwrap();
        assert_eq!(parsed["macro_split"]["protein"], 30);
        assert_eq!(parsed["macro_split"]["carbs"], 20);
        assert!(parsed["bmr"].as_i64().unwrap() > 1000);
    }

    #[test]
    fn test_compute_targets_rejects_bad_input() {
        let biometrics = r#"{
            "weight": -5.0,
            "height": 175.0,
            "age": 30,
            "sex": "male",
            "activity": "sedentary"
        }"#;

        let err = compute_targets_json(biometrics, "{}").unwrap_err();
        assert!(err.contains("weight"));
    }

    #[test]
    fn test_bmr_sample() {
        let bmr = bmr_mifflin_st_jeor(69.853, 175.26, 30, true);
        assert!((bmr - 1649.0).abs() < 1.0);
    }

    #[test]
    fn test_unit_helpers() {
        assert!((lb_to_kg(154.0) - 69.853).abs() < 0.001);
        assert!((in_to_cm(69.0) - 175.26).abs() < 0.001);
    }
}

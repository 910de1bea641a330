//! Input validation functions
//!
//! Range checks for biometric input. Each validator names the offending
//! field so the API layer can surface a per-field error without string
//! parsing. Weight and height are validated as entered; ranges are wide
//! enough to cover both unit systems before normalization.

use crate::errors::ValidationError;

/// Maximum plausible body weight as entered, any unit
const WEIGHT_MAX: f64 = 1100.0;
/// Maximum plausible standing height as entered, any unit
const HEIGHT_MAX: f64 = 300.0;
/// Body fat percentage bounds for the lean-mass BMR path
pub const BODY_FAT_MIN: f64 = 5.0;
pub const BODY_FAT_MAX: f64 = 50.0;

fn check_finite(field: &'static str, value: f64) -> Result<(), ValidationError> {
    if value.is_nan() || value.is_infinite() {
        return Err(ValidationError::NotFinite { field });
    }
    Ok(())
}

/// Validate age in whole years
pub fn validate_age(age: i32) -> Result<(), ValidationError> {
    if age <= 0 {
        return Err(ValidationError::NotPositive { field: "age" });
    }
    if age > 150 {
        return Err(ValidationError::OutOfRange {
            field: "age",
            min: 1.0,
            max: 150.0,
        });
    }
    Ok(())
}

/// Validate body weight as entered (lbs or kg)
pub fn validate_weight(weight: f64) -> Result<(), ValidationError> {
    validate_weight_value("weight", weight)
}

/// Validate a named weight field, shared between current and target weight
pub fn validate_weight_value(
    field: &'static str,
    weight: f64,
) -> Result<(), ValidationError> {
    check_finite(field, weight)?;
    if weight <= 0.0 {
        return Err(ValidationError::NotPositive { field });
    }
    if weight > WEIGHT_MAX {
        return Err(ValidationError::OutOfRange {
            field,
            min: 0.0,
            max: WEIGHT_MAX,
        });
    }
    Ok(())
}

/// Validate height as entered (inches or cm)
pub fn validate_height(height: f64) -> Result<(), ValidationError> {
    check_finite("height", height)?;
    if height <= 0.0 {
        return Err(ValidationError::NotPositive { field: "height" });
    }
    if height > HEIGHT_MAX {
        return Err(ValidationError::OutOfRange {
            field: "height",
            min: 0.0,
            max: HEIGHT_MAX,
        });
    }
    Ok(())
}

/// Validate body fat percentage for the lean-mass BMR path
pub fn validate_body_fat_percent(percent: f64) -> Result<(), ValidationError> {
    check_finite("body_fat_percent", percent)?;
    if !(BODY_FAT_MIN..=BODY_FAT_MAX).contains(&percent) {
        return Err(ValidationError::OutOfRange {
            field: "body_fat_percent",
            min: BODY_FAT_MIN,
            max: BODY_FAT_MAX,
        });
    }
    Ok(())
}

/// Validate a free-text field that must carry content
pub fn validate_nonempty(field: &'static str, value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::Empty { field });
    }
    Ok(())
}

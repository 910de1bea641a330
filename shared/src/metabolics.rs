//! Metabolic calculator
//!
//! Maps user biometrics and goal preferences to caloric targets and a macro
//! breakdown. All calculations are pure functions over plain data; the
//! caller is responsible for persisting the result.
//!
//! Formulas:
//! - BMR via Mifflin-St Jeor, or Katch-McArdle when body fat is known
//! - TDEE = BMR x activity multiplier
//! - Daily goal adjusted -500 / +300 kcal toward the stated goal

use crate::catalog::{self, AnnotatedWorkout};
use crate::errors::ValidationError;
use crate::units::UnitSystem;
use crate::validation;
use serde::{Deserialize, Serialize};

// ============================================================================
// Input Types
// ============================================================================

/// Biological sex for the BMR constant term
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sex {
    Male,
    Female,
}

/// Activity level for TDEE calculation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum ActivityLevel {
    /// Little or no exercise
    Sedentary,
    /// Light exercise 1-3 days/week
    LightlyActive,
    /// Moderate exercise 3-5 days/week
    #[default]
    ModeratelyActive,
    /// Hard exercise 6-7 days/week
    VeryActive,
    /// Very hard exercise, physical job
    ExtraActive,
}

impl ActivityLevel {
    /// Get the activity multiplier for TDEE calculation
    pub fn multiplier(&self) -> f64 {
        match self {
            ActivityLevel::Sedentary => 1.2,
            ActivityLevel::LightlyActive => 1.375,
            ActivityLevel::ModeratelyActive => 1.55,
            ActivityLevel::VeryActive => 1.725,
            ActivityLevel::ExtraActive => 1.9,
        }
    }

    /// Resolve a level from its numeric multiplier, as submitted by clients
    /// that post the raw factor instead of the name
    pub fn from_multiplier(factor: f64) -> Option<Self> {
        [
            ActivityLevel::Sedentary,
            ActivityLevel::LightlyActive,
            ActivityLevel::ModeratelyActive,
            ActivityLevel::VeryActive,
            ActivityLevel::ExtraActive,
        ]
        .into_iter()
        .find(|level| (level.multiplier() - factor).abs() < 1e-9)
    }
}

/// User biometrics in the units of the selected system
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BiometricInput {
    pub weight: f64,
    pub height: f64,
    pub age: i32,
    pub sex: Sex,
    pub activity: ActivityLevel,
    #[serde(default)]
    pub unit_system: UnitSystem,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub target_weight: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub body_fat_percent: Option<f64>,
}

/// Primary fitness goal
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum PrimaryGoal {
    WeightLoss,
    MuscleGain,
    Endurance,
    #[default]
    General,
}

/// Dietary preference driving the macro split
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum DietType {
    #[default]
    Balanced,
    LowCarb,
    HighProtein,
    LowFat,
}

/// Self-reported fitness level, selects the catalog row
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum FitnessLevel {
    Beginner,
    #[default]
    Intermediate,
    Advanced,
}

/// Available equipment, selects the catalog column
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Equipment {
    #[default]
    None,
    Basic,
    Home,
    Gym,
}

/// Preferred workout focus
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum WorkoutType {
    Cardio,
    Strength,
    Flexibility,
    #[default]
    Mixed,
}

/// Time the user can commit per session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum TimeAvailable {
    #[serde(rename = "15-30")]
    Min15To30,
    #[default]
    #[serde(rename = "30-45")]
    Min30To45,
    #[serde(rename = "45-60")]
    Min45To60,
    #[serde(rename = "60+")]
    Min60Plus,
}

impl TimeAvailable {
    /// Burn scaling applied uniformly to every selected workout
    pub fn burn_multiplier(&self) -> f64 {
        match self {
            TimeAvailable::Min15To30 => 0.8,
            TimeAvailable::Min60Plus => 1.3,
            _ => 1.0,
        }
    }

    /// Lower bound of the range in minutes (used for playlist length)
    pub fn minutes_lower_bound(&self) -> u32 {
        match self {
            TimeAvailable::Min15To30 => 15,
            TimeAvailable::Min30To45 => 30,
            TimeAvailable::Min45To60 => 45,
            TimeAvailable::Min60Plus => 60,
        }
    }
}

/// Goal and workout preferences accompanying the biometrics
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct GoalPreferences {
    #[serde(default)]
    pub primary_goal: PrimaryGoal,
    #[serde(default)]
    pub diet_type: DietType,
    #[serde(default)]
    pub fitness_level: FitnessLevel,
    #[serde(default)]
    pub equipment: Equipment,
    #[serde(default)]
    pub workout_type: WorkoutType,
    #[serde(default)]
    pub time_available: TimeAvailable,
}

// ============================================================================
// Output Types
// ============================================================================

/// Percentage allocation of daily calories, always summing to 100
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MacroSplit {
    pub protein: u8,
    pub carbs: u8,
    pub fats: u8,
}

impl MacroSplit {
    /// Select the split for a diet/goal pair. Diet type takes precedence;
    /// the goal only differentiates the balanced diet.
    pub fn for_preferences(diet: DietType, goal: PrimaryGoal) -> Self {
        match diet {
            DietType::HighProtein => Self { protein: 35, carbs: 35, fats: 30 },
            DietType::LowCarb => Self { protein: 30, carbs: 20, fats: 50 },
            DietType::LowFat => Self { protein: 25, carbs: 60, fats: 15 },
            DietType::Balanced => match goal {
                PrimaryGoal::MuscleGain => Self { protein: 30, carbs: 45, fats: 25 },
                PrimaryGoal::WeightLoss => Self { protein: 35, carbs: 35, fats: 30 },
                _ => Self { protein: 25, carbs: 50, fats: 25 },
            },
        }
    }

    pub fn total(&self) -> u32 {
        self.protein as u32 + self.carbs as u32 + self.fats as u32
    }
}

/// Daily macro targets in grams
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MacroGrams {
    pub protein: i32,
    pub carbs: i32,
    pub fats: i32,
}

impl MacroGrams {
    /// Convert a calorie budget and split to grams.
    /// Protein and carbs at 4 kcal/g, fat at 9 kcal/g.
    pub fn from_calories(daily_goal: i32, split: MacroSplit) -> Self {
        let goal = daily_goal as f64;
        Self {
            protein: (goal * (split.protein as f64 / 100.0) / 4.0).round() as i32,
            carbs: (goal * (split.carbs as f64 / 100.0) / 4.0).round() as i32,
            fats: (goal * (split.fats as f64 / 100.0) / 9.0).round() as i32,
        }
    }
}

/// Complete calculation snapshot, immutable once produced
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CalculationResult {
    /// Basal metabolic rate, kcal/day
    pub bmr: i32,
    /// Total daily energy expenditure, kcal/day
    pub tdee: i32,
    /// Maintenance intake, kcal/day
    pub recommended_intake: i32,
    /// Goal-adjusted intake, kcal/day
    pub daily_goal: i32,
    pub macro_split: MacroSplit,
    pub macro_grams: MacroGrams,
    /// Up to four workouts from the matching catalog bucket
    pub workouts: Vec<AnnotatedWorkout>,
}

// ============================================================================
// Calculation
// ============================================================================

/// BMR via Mifflin-St Jeor
///
/// Men: 10w + 6.25h - 5a + 5; Women: 10w + 6.25h - 5a - 161
pub fn bmr_mifflin_st_jeor(weight_kg: f64, height_cm: f64, age: i32, sex: Sex) -> f64 {
    let base = 10.0 * weight_kg + 6.25 * height_cm - 5.0 * age as f64;
    match sex {
        Sex::Male => base + 5.0,
        Sex::Female => base - 161.0,
    }
}

/// BMR via Katch-McArdle: 370 + 21.6 x lean body mass
pub fn bmr_katch_mcardle(weight_kg: f64, body_fat_percent: f64) -> f64 {
    let lean_mass_kg = weight_kg * (1.0 - body_fat_percent / 100.0);
    370.0 + 21.6 * lean_mass_kg
}

/// Compute the full caloric/macro/workout plan for one user.
///
/// Rejects missing or non-positive age, weight, or height; everything else
/// is optional. Imperial inputs are normalized before any formula runs.
pub fn compute(
    biometrics: &BiometricInput,
    goals: &GoalPreferences,
) -> Result<CalculationResult, ValidationError> {
    validation::validate_age(biometrics.age)?;
    validation::validate_weight(biometrics.weight)?;
    validation::validate_height(biometrics.height)?;

    let weight_kg = biometrics.unit_system.weight_to_kg(biometrics.weight);
    let height_cm = biometrics.unit_system.height_to_cm(biometrics.height);

    let mut bmr = bmr_mifflin_st_jeor(weight_kg, height_cm, biometrics.age, biometrics.sex);

    // Body fat, when known, gives the more accurate Katch-McArdle estimate
    if let Some(body_fat) = biometrics.body_fat_percent {
        validation::validate_body_fat_percent(body_fat)?;
        bmr = bmr_katch_mcardle(weight_kg, body_fat);
    }

    let tdee = bmr * biometrics.activity.multiplier();
    let recommended_intake = tdee.round() as i32;

    let mut daily_goal = recommended_intake;
    // The target is compared as entered against the normalized weight; an
    // unusable target (non-finite or non-positive) skips the adjustment
    // rather than failing the calculation
    if let Some(target) = biometrics.target_weight {
        if target.is_finite() && target > 0.0 {
            let weight_diff = target - weight_kg;
            // Stated goal wins over the sign of the weight difference
            if goals.primary_goal == PrimaryGoal::WeightLoss || weight_diff < 0.0 {
                daily_goal = recommended_intake - 500;
            } else if goals.primary_goal == PrimaryGoal::MuscleGain || weight_diff > 0.0 {
                daily_goal = recommended_intake + 300;
            }
        }
    }

    let macro_split = MacroSplit::for_preferences(goals.diet_type, goals.primary_goal);
    let macro_grams = MacroGrams::from_calories(daily_goal, macro_split);

    let workouts = catalog::select_workouts(
        goals.fitness_level,
        goals.equipment,
        goals.workout_type,
        goals.time_available,
        tdee,
    );

    Ok(CalculationResult {
        bmr: bmr.round() as i32,
        tdee: tdee.round() as i32,
        recommended_intake,
        daily_goal,
        macro_split,
        macro_grams,
        workouts,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use rstest::rstest;

    fn metric_input(weight_kg: f64, height_cm: f64, age: i32, sex: Sex) -> BiometricInput {
        BiometricInput {
            weight: weight_kg,
            height: height_cm,
            age,
            sex,
            activity: ActivityLevel::ModeratelyActive,
            unit_system: UnitSystem::Metric,
            target_weight: None,
            body_fat_percent: None,
        }
    }

    // =========================================================================
    // BMR / TDEE
    // =========================================================================

    #[test]
    fn test_worked_example_imperial() {
        // 154 lb, 69 in, 30yo male at 1.55: weight ~69.85 kg, height 175.26 cm
        let input = BiometricInput {
            weight: 154.0,
            height: 69.0,
            age: 30,
            sex: Sex::Male,
            activity: ActivityLevel::ModeratelyActive,
            unit_system: UnitSystem::Imperial,
            target_weight: None,
            body_fat_percent: None,
        };
        let result = compute(&input, &GoalPreferences::default()).unwrap();

        let weight_kg = 154.0 * 0.45359237;
        let height_cm = 69.0 * 2.54;
        let bmr: f64 = 10.0 * weight_kg + 6.25 * height_cm - 150.0 + 5.0;
        assert_eq!(result.bmr, bmr.round() as i32);
        assert_eq!(result.tdee, (bmr * 1.55).round() as i32);
        assert_eq!(result.recommended_intake, result.tdee);
        assert_eq!(result.daily_goal, result.recommended_intake);
    }

    #[test]
    fn test_imperial_matches_preconverted_metric() {
        let imperial = BiometricInput {
            weight: 154.0,
            height: 69.0,
            unit_system: UnitSystem::Imperial,
            ..metric_input(0.0, 0.0, 30, Sex::Male)
        };
        let metric = metric_input(154.0 * 0.45359237, 69.0 * 2.54, 30, Sex::Male);

        let goals = GoalPreferences::default();
        let a = compute(&imperial, &goals).unwrap();
        let b = compute(&metric, &goals).unwrap();
        assert_eq!(a.bmr, b.bmr);
        assert_eq!(a.tdee, b.tdee);
    }

    #[test]
    fn test_katch_mcardle_override() {
        let mut input = metric_input(80.0, 180.0, 30, Sex::Male);
        input.body_fat_percent = Some(20.0);
        let result = compute(&input, &GoalPreferences::default()).unwrap();

        // 370 + 21.6 * 64 = 1752.4
        assert_eq!(result.bmr, 1752);
    }

    #[test]
    fn test_body_fat_out_of_range_rejected() {
        let mut input = metric_input(80.0, 180.0, 30, Sex::Male);
        input.body_fat_percent = Some(3.0);
        assert!(compute(&input, &GoalPreferences::default()).is_err());
    }

    #[test]
    fn test_activity_level_from_multiplier() {
        assert_eq!(
            ActivityLevel::from_multiplier(1.55),
            Some(ActivityLevel::ModeratelyActive)
        );
        assert_eq!(
            ActivityLevel::from_multiplier(1.9),
            Some(ActivityLevel::ExtraActive)
        );
        assert_eq!(ActivityLevel::from_multiplier(1.5), None);
    }

    #[rstest]
    #[case(0, "age")]
    #[case(-5, "age")]
    fn test_invalid_age_rejected(#[case] age: i32, #[case] field: &str) {
        let input = metric_input(80.0, 180.0, age, Sex::Male);
        let err = compute(&input, &GoalPreferences::default()).unwrap_err();
        assert!(err.to_string().contains(field));
    }

    #[test]
    fn test_invalid_weight_and_height_rejected() {
        let zero_weight = metric_input(0.0, 180.0, 30, Sex::Male);
        assert!(compute(&zero_weight, &GoalPreferences::default()).is_err());

        let nan_height = metric_input(80.0, f64::NAN, 30, Sex::Male);
        assert!(compute(&nan_height, &GoalPreferences::default()).is_err());
    }

    // =========================================================================
    // Daily goal adjustment
    // =========================================================================

    #[test]
    fn test_goal_deficit_for_weight_loss() {
        let mut input = metric_input(80.0, 180.0, 30, Sex::Male);
        input.target_weight = Some(90.0); // target above current
        let goals = GoalPreferences {
            primary_goal: PrimaryGoal::WeightLoss,
            ..Default::default()
        };
        let result = compute(&input, &goals).unwrap();
        // Stated goal wins over the positive weight difference
        assert_eq!(result.daily_goal, result.recommended_intake - 500);
    }

    #[test]
    fn test_goal_surplus_for_target_above_current() {
        let mut input = metric_input(80.0, 180.0, 30, Sex::Male);
        input.target_weight = Some(90.0);
        let goals = GoalPreferences {
            primary_goal: PrimaryGoal::General,
            ..Default::default()
        };
        let result = compute(&input, &goals).unwrap();
        assert_eq!(result.daily_goal, result.recommended_intake + 300);
    }

    #[test]
    fn test_target_weight_compared_as_entered() {
        // Imperial target stays in pounds: 154 lb against 72.57 kg reads as
        // a gain target, not a loss
        let mut input = BiometricInput {
            weight: 160.0,
            height: 69.0,
            unit_system: UnitSystem::Imperial,
            ..metric_input(0.0, 0.0, 30, Sex::Male)
        };
        input.target_weight = Some(154.0);
        let result = compute(&input, &GoalPreferences::default()).unwrap();
        assert_eq!(result.daily_goal, result.recommended_intake + 300);
    }

    #[test]
    fn test_unusable_target_skips_adjustment() {
        let mut input = metric_input(80.0, 180.0, 30, Sex::Male);
        input.target_weight = Some(f64::NAN);
        let result = compute(&input, &GoalPreferences::default()).unwrap();
        assert_eq!(result.daily_goal, result.recommended_intake);

        input.target_weight = Some(0.0);
        let result = compute(&input, &GoalPreferences::default()).unwrap();
        assert_eq!(result.daily_goal, result.recommended_intake);
    }

    #[test]
    fn test_goal_unchanged_without_target() {
        let input = metric_input(80.0, 180.0, 30, Sex::Male);
        let goals = GoalPreferences {
            primary_goal: PrimaryGoal::WeightLoss,
            ..Default::default()
        };
        let result = compute(&input, &goals).unwrap();
        assert_eq!(result.daily_goal, result.recommended_intake);
    }

    // =========================================================================
    // Macro split
    // =========================================================================

    #[rstest]
    #[case(DietType::HighProtein, PrimaryGoal::General, 35, 35, 30)]
    #[case(DietType::LowCarb, PrimaryGoal::General, 30, 20, 50)]
    #[case(DietType::LowCarb, PrimaryGoal::MuscleGain, 30, 20, 50)]
    #[case(DietType::LowFat, PrimaryGoal::WeightLoss, 25, 60, 15)]
    #[case(DietType::Balanced, PrimaryGoal::MuscleGain, 30, 45, 25)]
    #[case(DietType::Balanced, PrimaryGoal::WeightLoss, 35, 35, 30)]
    #[case(DietType::Balanced, PrimaryGoal::Endurance, 25, 50, 25)]
    #[case(DietType::Balanced, PrimaryGoal::General, 25, 50, 25)]
    fn test_macro_split_table(
        #[case] diet: DietType,
        #[case] goal: PrimaryGoal,
        #[case] protein: u8,
        #[case] carbs: u8,
        #[case] fats: u8,
    ) {
        let split = MacroSplit::for_preferences(diet, goal);
        assert_eq!(split, MacroSplit { protein, carbs, fats });
    }

    #[test]
    fn test_all_splits_sum_to_100() {
        let diets = [
            DietType::Balanced,
            DietType::LowCarb,
            DietType::HighProtein,
            DietType::LowFat,
        ];
        let goals = [
            PrimaryGoal::WeightLoss,
            PrimaryGoal::MuscleGain,
            PrimaryGoal::Endurance,
            PrimaryGoal::General,
        ];
        for diet in diets {
            for goal in goals {
                assert_eq!(
                    MacroSplit::for_preferences(diet, goal).total(),
                    100,
                    "split for {:?}/{:?} does not sum to 100",
                    diet,
                    goal
                );
            }
        }
    }

    #[test]
    fn test_macro_grams_conversion() {
        // 2000 kcal balanced/general: 25/50/25
        let split = MacroSplit::for_preferences(DietType::Balanced, PrimaryGoal::General);
        let grams = MacroGrams::from_calories(2000, split);
        assert_eq!(grams.protein, 125); // 500 kcal / 4
        assert_eq!(grams.carbs, 250); // 1000 kcal / 4
        assert_eq!(grams.fats, 56); // 500 kcal / 9
    }

    // =========================================================================
    // Properties
    // =========================================================================

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(100))]

        /// Property: BMR is positive over realistic inputs
        #[test]
        fn prop_bmr_positive(
            weight in 40.0f64..200.0,
            height in 140.0f64..220.0,
            age in 18i32..90
        ) {
            prop_assert!(bmr_mifflin_st_jeor(weight, height, age, Sex::Male) > 0.0);
            prop_assert!(bmr_mifflin_st_jeor(weight, height, age, Sex::Female) > 0.0);
        }

        /// Property: TDEE exceeds BMR for every activity level
        #[test]
        fn prop_tdee_exceeds_bmr(
            weight in 40.0f64..200.0,
            height in 140.0f64..220.0,
            age in 18i32..90
        ) {
            let input = metric_input(weight, height, age, Sex::Male);
            let result = compute(&input, &GoalPreferences::default()).unwrap();
            prop_assert!(result.tdee >= result.bmr);
        }

        /// Property: converting imperial input yields the same plan as
        /// computing directly on the metric equivalents
        #[test]
        fn prop_unit_conversion_consistency(
            lbs in 80.0f64..400.0,
            inches in 50.0f64..90.0,
            age in 18i32..90
        ) {
            let imperial = BiometricInput {
                weight: lbs,
                height: inches,
                unit_system: UnitSystem::Imperial,
                ..metric_input(0.0, 0.0, age, Sex::Female)
            };
            let metric = metric_input(lbs * 0.45359237, inches * 2.54, age, Sex::Female);
            let goals = GoalPreferences::default();
            let a = compute(&imperial, &goals).unwrap();
            let b = compute(&metric, &goals).unwrap();
            prop_assert_eq!(a.bmr, b.bmr);
            prop_assert_eq!(a.tdee, b.tdee);
            prop_assert_eq!(a.daily_goal, b.daily_goal);
        }

        /// Property: macro grams stay proportional to the calorie budget
        #[test]
        fn prop_macro_grams_scale(goal_kcal in 1000i32..6000) {
            let split = MacroSplit { protein: 30, carbs: 45, fats: 25 };
            let grams = MacroGrams::from_calories(goal_kcal, split);
            let rebuilt = grams.protein * 4 + grams.carbs * 4 + grams.fats * 9;
            // Rounding per-macro keeps the total within a few kcal
            prop_assert!((rebuilt - goal_kcal).abs() <= 15);
        }
    }
}

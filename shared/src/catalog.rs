//! Static workout catalog and personalized selector
//!
//! The catalog is a fixed table keyed by (fitness level, equipment). Each
//! entry carries capability flags and a burn coefficient expressed as a
//! fraction of TDEE per session. Selection filters by the preferred workout
//! type, scales burn by available time, and truncates to four entries in
//! declaration order.

use crate::metabolics::{Equipment, FitnessLevel, TimeAvailable, WorkoutType};
use serde::{Deserialize, Serialize};

/// One catalog row: a named workout with capability flags
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WorkoutEntry {
    pub name: &'static str,
    pub cardio: bool,
    pub strength: bool,
    pub flexibility: bool,
    /// Fraction of TDEE burned in one nominal session
    pub burn: f64,
    /// Nominal duration range in minutes, as displayed
    pub duration: &'static str,
}

impl WorkoutEntry {
    const fn cardio(name: &'static str, burn: f64, duration: &'static str) -> Self {
        Self { name, cardio: true, strength: false, flexibility: false, burn, duration }
    }

    const fn strength(name: &'static str, burn: f64, duration: &'static str) -> Self {
        Self { name, cardio: false, strength: true, flexibility: false, burn, duration }
    }

    const fn flexibility(name: &'static str, burn: f64, duration: &'static str) -> Self {
        Self { name, cardio: false, strength: false, flexibility: true, burn, duration }
    }

    /// Whether this entry satisfies the requested focus
    pub fn matches(&self, workout_type: WorkoutType) -> bool {
        match workout_type {
            WorkoutType::Cardio => self.cardio,
            WorkoutType::Strength => self.strength,
            WorkoutType::Flexibility => self.flexibility,
            WorkoutType::Mixed => true,
        }
    }
}

const BEGINNER_NONE: [WorkoutEntry; 4] = [
    WorkoutEntry::cardio("Walking", 0.05, "30-45"),
    WorkoutEntry::strength("Bodyweight Squats", 0.06, "15-20"),
    WorkoutEntry::strength("Push-ups (Modified)", 0.05, "10-15"),
    WorkoutEntry::flexibility("Basic Stretching", 0.025, "15-20"),
];

const BEGINNER_BASIC: [WorkoutEntry; 4] = [
    WorkoutEntry::strength("Light Dumbbell Circuit", 0.08, "25-30"),
    WorkoutEntry::strength("Resistance Band Workout", 0.07, "20-25"),
    WorkoutEntry::cardio("Beginner HIIT", 0.10, "15-20"),
    WorkoutEntry::flexibility("Yoga Flow", 0.04, "30"),
];

const BEGINNER_HOME: [WorkoutEntry; 4] = [
    WorkoutEntry::strength("Beginner Strength Circuit", 0.09, "30"),
    WorkoutEntry::cardio("Treadmill Walk/Jog", 0.08, "25-30"),
    WorkoutEntry::strength("Basic Weight Training", 0.10, "30-35"),
    WorkoutEntry::flexibility("Pilates", 0.05, "30"),
];

const BEGINNER_GYM: [WorkoutEntry; 4] = [
    WorkoutEntry::strength("Machine Circuit Training", 0.11, "35"),
    WorkoutEntry::cardio("Elliptical/Bike", 0.10, "30"),
    WorkoutEntry::strength("Beginner Free Weights", 0.12, "30-35"),
    WorkoutEntry::cardio("Pool Walking", 0.08, "30"),
];

const INTERMEDIATE_NONE: [WorkoutEntry; 4] = [
    WorkoutEntry::cardio("Running", 0.12, "30"),
    WorkoutEntry::strength("Advanced Bodyweight", 0.10, "25"),
    WorkoutEntry::cardio("HIIT Bodyweight", 0.15, "25"),
    WorkoutEntry::flexibility("Vinyasa Yoga", 0.06, "45"),
];

const INTERMEDIATE_BASIC: [WorkoutEntry; 4] = [
    WorkoutEntry::strength("Dumbbell Complex", 0.13, "35"),
    WorkoutEntry::strength("Kettlebell Swings", 0.14, "20"),
    WorkoutEntry::cardio("Resistance HIIT", 0.16, "25"),
    WorkoutEntry::flexibility("Power Yoga", 0.08, "45"),
];

const INTERMEDIATE_HOME: [WorkoutEntry; 4] = [
    WorkoutEntry::strength("Full Body Strength", 0.14, "45"),
    WorkoutEntry::cardio("Cardio Intervals", 0.15, "30"),
    WorkoutEntry::strength("Olympic Lift Variations", 0.16, "40"),
    WorkoutEntry::flexibility("Advanced Pilates", 0.07, "45"),
];

const INTERMEDIATE_GYM: [WorkoutEntry; 4] = [
    WorkoutEntry::strength("Compound Movements", 0.15, "45"),
    WorkoutEntry::cardio("Cycling Classes", 0.14, "45"),
    WorkoutEntry::strength("Full Body Split", 0.16, "60"),
    WorkoutEntry::cardio("Swimming", 0.13, "45"),
];

const ADVANCED_NONE: [WorkoutEntry; 4] = [
    WorkoutEntry::cardio("Sprint Intervals", 0.18, "25"),
    WorkoutEntry::strength("Advanced Calisthenics", 0.16, "45"),
    WorkoutEntry::strength("Plyometric Training", 0.17, "30"),
    WorkoutEntry::flexibility("Intensive Yoga", 0.10, "60"),
];

const ADVANCED_BASIC: [WorkoutEntry; 4] = [
    WorkoutEntry::strength("Heavy Dumbbell Training", 0.17, "45"),
    WorkoutEntry::strength("Kettlebell Complex", 0.18, "35"),
    WorkoutEntry::cardio("Advanced HIIT", 0.20, "30"),
    WorkoutEntry::flexibility("Ashtanga Yoga", 0.12, "75"),
];

const ADVANCED_HOME: [WorkoutEntry; 4] = [
    WorkoutEntry::strength("Powerlifting Session", 0.18, "60"),
    WorkoutEntry::cardio("Advanced Cardio", 0.19, "40"),
    WorkoutEntry::strength("Olympic Lifting", 0.20, "60"),
    WorkoutEntry::flexibility("Advanced Stretching", 0.08, "45"),
];

const ADVANCED_GYM: [WorkoutEntry; 4] = [
    WorkoutEntry::strength("Heavy Compound Lifts", 0.19, "75"),
    WorkoutEntry::cardio("High-Intensity Cardio", 0.18, "45"),
    WorkoutEntry::strength("Periodized Training", 0.20, "90"),
    WorkoutEntry::cardio("Competitive Swimming", 0.16, "60"),
];

/// Look up the catalog bucket for a level/equipment pair.
///
/// Every pair is populated, so the fallback to the no-equipment bucket is
/// structural rather than reachable today; it guards future catalog edits.
pub fn bucket(level: FitnessLevel, equipment: Equipment) -> &'static [WorkoutEntry] {
    match (level, equipment) {
        (FitnessLevel::Beginner, Equipment::None) => &BEGINNER_NONE,
        (FitnessLevel::Beginner, Equipment::Basic) => &BEGINNER_BASIC,
        (FitnessLevel::Beginner, Equipment::Home) => &BEGINNER_HOME,
        (FitnessLevel::Beginner, Equipment::Gym) => &BEGINNER_GYM,
        (FitnessLevel::Intermediate, Equipment::None) => &INTERMEDIATE_NONE,
        (FitnessLevel::Intermediate, Equipment::Basic) => &INTERMEDIATE_BASIC,
        (FitnessLevel::Intermediate, Equipment::Home) => &INTERMEDIATE_HOME,
        (FitnessLevel::Intermediate, Equipment::Gym) => &INTERMEDIATE_GYM,
        (FitnessLevel::Advanced, Equipment::None) => &ADVANCED_NONE,
        (FitnessLevel::Advanced, Equipment::Basic) => &ADVANCED_BASIC,
        (FitnessLevel::Advanced, Equipment::Home) => &ADVANCED_HOME,
        (FitnessLevel::Advanced, Equipment::Gym) => &ADVANCED_GYM,
    }
}

/// Maximum number of workouts returned per plan
pub const MAX_SELECTED: usize = 4;

/// A catalog entry annotated with the user's estimated burn
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnnotatedWorkout {
    pub name: String,
    pub cardio: bool,
    pub strength: bool,
    pub flexibility: bool,
    /// Display duration with unit suffix, e.g. "30-45 min"
    pub duration: String,
    pub estimated_burn_kcal: i32,
}

/// Select up to four workouts for the user's preferences.
///
/// Filters the bucket by workout type (mixed matches everything); an empty
/// filter result falls back to the unfiltered bucket so a non-empty bucket
/// never yields an empty plan. Order is catalog declaration order.
pub fn select_workouts(
    level: FitnessLevel,
    equipment: Equipment,
    workout_type: WorkoutType,
    time_available: TimeAvailable,
    tdee: f64,
) -> Vec<AnnotatedWorkout> {
    let entries = bucket(level, equipment);

    let mut filtered: Vec<&WorkoutEntry> =
        entries.iter().filter(|e| e.matches(workout_type)).collect();
    if filtered.is_empty() {
        filtered = entries.iter().collect();
    }

    let multiplier = time_available.burn_multiplier();

    filtered
        .into_iter()
        .take(MAX_SELECTED)
        .map(|entry| AnnotatedWorkout {
            name: entry.name.to_string(),
            cardio: entry.cardio,
            strength: entry.strength,
            flexibility: entry.flexibility,
            duration: format!("{} min", entry.duration),
            estimated_burn_kcal: (tdee * entry.burn * multiplier).round() as i32,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    const ALL_LEVELS: [FitnessLevel; 3] = [
        FitnessLevel::Beginner,
        FitnessLevel::Intermediate,
        FitnessLevel::Advanced,
    ];
    const ALL_EQUIPMENT: [Equipment; 4] = [
        Equipment::None,
        Equipment::Basic,
        Equipment::Home,
        Equipment::Gym,
    ];
    const ALL_TYPES: [WorkoutType; 4] = [
        WorkoutType::Cardio,
        WorkoutType::Strength,
        WorkoutType::Flexibility,
        WorkoutType::Mixed,
    ];

    #[test]
    fn test_every_bucket_has_four_entries() {
        for level in ALL_LEVELS {
            for equipment in ALL_EQUIPMENT {
                assert_eq!(bucket(level, equipment).len(), 4);
            }
        }
    }

    #[test]
    fn test_beginner_none_strength_filter() {
        let selected = select_workouts(
            FitnessLevel::Beginner,
            Equipment::None,
            WorkoutType::Strength,
            TimeAvailable::Min30To45,
            2000.0,
        );
        let names: Vec<&str> = selected.iter().map(|w| w.name.as_str()).collect();
        assert_eq!(names, vec!["Bodyweight Squats", "Push-ups (Modified)"]);
        assert!(selected.iter().all(|w| w.strength));
    }

    #[test]
    fn test_mixed_returns_full_bucket_truncated() {
        let selected = select_workouts(
            FitnessLevel::Intermediate,
            Equipment::Gym,
            WorkoutType::Mixed,
            TimeAvailable::Min30To45,
            2500.0,
        );
        assert_eq!(selected.len(), 4);
        assert_eq!(selected[0].name, "Compound Movements");
    }

    #[test]
    fn test_flexibility_filter_falls_back_when_empty() {
        // beginner/gym has no flexibility entries; fallback keeps the plan
        // non-empty with the unfiltered bucket
        let selected = select_workouts(
            FitnessLevel::Beginner,
            Equipment::Gym,
            WorkoutType::Flexibility,
            TimeAvailable::Min30To45,
            2000.0,
        );
        assert_eq!(selected.len(), 4);
        assert_eq!(selected[0].name, "Machine Circuit Training");
    }

    #[test]
    fn test_burn_estimate_and_time_multiplier() {
        // Walking at 0.05 of a 2000 kcal TDEE
        let base = select_workouts(
            FitnessLevel::Beginner,
            Equipment::None,
            WorkoutType::Cardio,
            TimeAvailable::Min30To45,
            2000.0,
        );
        assert_eq!(base[0].estimated_burn_kcal, 100);
        assert_eq!(base[0].duration, "30-45 min");

        let short = select_workouts(
            FitnessLevel::Beginner,
            Equipment::None,
            WorkoutType::Cardio,
            TimeAvailable::Min15To30,
            2000.0,
        );
        assert_eq!(short[0].estimated_burn_kcal, 80);

        let long = select_workouts(
            FitnessLevel::Beginner,
            Equipment::None,
            WorkoutType::Cardio,
            TimeAvailable::Min60Plus,
            2000.0,
        );
        assert_eq!(long[0].estimated_burn_kcal, 130);
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(200))]

        /// Property: selector returns between 1 and 4 entries for every
        /// combination of preferences
        #[test]
        fn prop_selection_bounded_and_nonempty(
            level_idx in 0usize..3,
            equip_idx in 0usize..4,
            type_idx in 0usize..4,
            tdee in 1000.0f64..5000.0
        ) {
            let selected = select_workouts(
                ALL_LEVELS[level_idx],
                ALL_EQUIPMENT[equip_idx],
                ALL_TYPES[type_idx],
                TimeAvailable::Min30To45,
                tdee,
            );
            prop_assert!(!selected.is_empty());
            prop_assert!(selected.len() <= MAX_SELECTED);
        }

        /// Property: estimated burn is monotone non-decreasing in TDEE
        #[test]
        fn prop_burn_monotone_in_tdee(
            tdee_low in 1000.0f64..3000.0,
            delta in 0.0f64..2000.0
        ) {
            let low = select_workouts(
                FitnessLevel::Intermediate,
                Equipment::Home,
                WorkoutType::Mixed,
                TimeAvailable::Min30To45,
                tdee_low,
            );
            let high = select_workouts(
                FitnessLevel::Intermediate,
                Equipment::Home,
                WorkoutType::Mixed,
                TimeAvailable::Min30To45,
                tdee_low + delta,
            );
            for (a, b) in low.iter().zip(high.iter()) {
                prop_assert!(b.estimated_burn_kcal >= a.estimated_burn_kcal);
            }
        }
    }
}

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::{
    nutrition::services::DEFAULT_CALORIES_PER_100G,
    portion::services::DEFAULT_DENSITY_G_PER_CM3,
};

/// Immutable name -> value table with a fixed value for misses.
#[derive(Debug, Clone, PartialEq)]
pub struct LookupTable {
    entries: HashMap<String, f64>,
    default: f64,
}

impl LookupTable {
    pub fn new<I, S>(entries: I, default: f64) -> Self
    where
        I: IntoIterator<Item = (S, f64)>,
        S: Into<String>,
    {
        Self {
            entries: entries
                .into_iter()
                .map(|(name, value)| (name.into(), value))
                .collect(),
            default,
        }
    }

    pub fn find(&self, name: &str) -> Option<f64> {
        self.entries.get(name).copied()
    }

    pub fn get(&self, name: &str) -> f64 {
        self.find(name).unwrap_or(self.default)
    }
}

/// kcal per 100 g
pub type CalorieTable = LookupTable;

/// g per cm³
pub type DensityTable = LookupTable;

pub fn builtin_calorie_table() -> CalorieTable {
    LookupTable::new(
        [
            ("pizza", 266.0),
            ("burger", 295.0),
            ("rice", 130.0),
            ("chicken", 239.0),
            ("salad", 150.0),
            ("fries", 312.0),
            ("pasta", 131.0),
            ("apple", 52.0),
            ("banana", 89.0),
            ("bread", 265.0),
            ("cheese", 402.0),
            ("egg", 155.0),
            ("yogurt", 59.0),
            ("milk", 42.0),
            ("steak", 271.0),
            ("sushi", 168.0),
        ],
        DEFAULT_CALORIES_PER_100G,
    )
}

pub fn builtin_density_table() -> DensityTable {
    LookupTable::new(
        [
            ("rice", 0.8),
            ("pasta", 0.7),
            ("chicken", 1.05),
            ("steak", 1.02),
            ("fish", 1.0),
            ("salad", 0.3),
            ("fries", 0.5),
            ("pizza", 0.6),
            ("soup", 1.0),
            ("potato", 0.62),
        ],
        DEFAULT_DENSITY_G_PER_CM3,
    )
}

/// Macronutrients per 100 g, with the food's glycemic index.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct MacroProfile {
    pub protein_g: f64,
    pub carbs_g: f64,
    pub fat_g: f64,
    pub glycemic_index: f64,
}

impl MacroProfile {
    pub const fn new(protein_g: f64, carbs_g: f64, fat_g: f64, glycemic_index: f64) -> Self {
        Self {
            protein_g,
            carbs_g,
            fat_g,
            glycemic_index,
        }
    }
}

/// Food name -> [`MacroProfile`]. Unknown foods contribute no macronutrients.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct MacroTable {
    entries: HashMap<String, MacroProfile>,
}

impl MacroTable {
    pub fn new<I, S>(entries: I) -> Self
    where
        I: IntoIterator<Item = (S, MacroProfile)>,
        S: Into<String>,
    {
        Self {
            entries: entries
                .into_iter()
                .map(|(name, profile)| (name.into(), profile))
                .collect(),
        }
    }

    pub fn get(&self, name: &str) -> MacroProfile {
        self.entries.get(name).copied().unwrap_or_default()
    }
}

pub fn builtin_macro_table() -> MacroTable {
    MacroTable::new([
        ("pizza", MacroProfile::new(11.0, 33.0, 10.0, 60.0)),
        ("burger", MacroProfile::new(17.0, 24.0, 14.0, 66.0)),
        ("rice", MacroProfile::new(2.7, 28.0, 0.3, 73.0)),
        ("chicken", MacroProfile::new(27.0, 0.0, 14.0, 0.0)),
        ("salad", MacroProfile::new(5.0, 10.0, 10.0, 15.0)),
        ("fries", MacroProfile::new(3.0, 41.0, 15.0, 75.0)),
        ("pasta", MacroProfile::new(5.0, 25.0, 1.1, 50.0)),
        ("apple", MacroProfile::new(0.3, 14.0, 0.2, 36.0)),
        ("banana", MacroProfile::new(1.1, 23.0, 0.3, 51.0)),
        ("bread", MacroProfile::new(9.0, 49.0, 3.2, 75.0)),
        ("cheese", MacroProfile::new(25.0, 1.3, 33.0, 0.0)),
        ("egg", MacroProfile::new(13.0, 1.1, 11.0, 0.0)),
        ("yogurt", MacroProfile::new(3.5, 4.7, 3.3, 41.0)),
        ("milk", MacroProfile::new(3.4, 5.0, 1.0, 39.0)),
        ("steak", MacroProfile::new(25.0, 0.0, 19.0, 0.0)),
        ("sushi", MacroProfile::new(6.0, 30.0, 1.0, 55.0)),
    ])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn misses_fall_back_per_table() {
        let calories = builtin_calorie_table();
        assert_eq!(calories.find("mystery"), None);
        assert_eq!(calories.get("mystery"), DEFAULT_CALORIES_PER_100G);
        assert_eq!(builtin_density_table().get("mystery"), DEFAULT_DENSITY_G_PER_CM3);
        assert_eq!(builtin_macro_table().get("mystery"), MacroProfile::default());
    }

    #[test]
    fn builtin_macro_table_has_profiles_for_known_foods() {
        let calories = builtin_calorie_table();
        let macros = builtin_macro_table();

        for food in ["pizza", "rice", "steak", "sushi", "yogurt"] {
            assert!(calories.find(food).is_some());
            assert_ne!(macros.get(food), MacroProfile::default(), "{food}");
        }
        assert_eq!(macros.get("rice").glycemic_index, 73.0);
    }
}

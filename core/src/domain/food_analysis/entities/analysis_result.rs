use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::domain::{
    common::generate_timestamp, food_recognition::entities::RecognizedFood,
    portion::entities::PortionEstimate,
};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct AnalysisResult {
    pub id: Uuid,
    pub analyzed_at: DateTime<Utc>,
    pub foods: Vec<RecognizedFood>,
    pub portion: PortionEstimate,
    pub total_mass_grams: f64,
    pub total_calories: f64,
    pub macros: Macros,
    pub breakdown: Vec<FoodBreakdown>,
    /// Highest-scoring classifier concepts, before the confidence floor
    #[serde(default)]
    pub top_predictions: Vec<RecognizedFood>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct FoodBreakdown {
    pub food: String,
    pub confidence: f64,
    pub weight_grams: f64,
    pub density_g_per_cm3: f64,
    pub calories_per_100g: f64,
    pub calories: f64,
    pub protein_g: f64,
    pub carbs_g: f64,
    pub fat_g: f64,
    pub glycemic_index: f64,
    /// `carbs_g * glycemic_index / 100`
    pub approx_sugar_rise_g: f64,
}

/// Macronutrient totals for a meal, in grams.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Macros {
    pub protein_g: f64,
    pub carbs_g: f64,
    pub fat_g: f64,
    pub approx_sugar_rise_g: f64,
}

impl Macros {
    pub fn total(breakdown: &[FoodBreakdown]) -> Self {
        breakdown.iter().fold(Self::default(), |acc, item| Self {
            protein_g: acc.protein_g + item.protein_g,
            carbs_g: acc.carbs_g + item.carbs_g,
            fat_g: acc.fat_g + item.fat_g,
            approx_sugar_rise_g: acc.approx_sugar_rise_g + item.approx_sugar_rise_g,
        })
    }
}

impl AnalysisResult {
    pub fn new(
        foods: Vec<RecognizedFood>,
        portion: PortionEstimate,
        breakdown: Vec<FoodBreakdown>,
    ) -> Self {
        let (now, timestamp) = generate_timestamp();
        let total_mass_grams = breakdown.iter().map(|item| item.weight_grams).sum();
        let total_calories = breakdown.iter().map(|item| item.calories).sum();
        let macros = Macros::total(&breakdown);

        Self {
            id: Uuid::new_v7(timestamp),
            analyzed_at: now,
            foods,
            portion,
            total_mass_grams,
            total_calories,
            macros,
            breakdown,
            top_predictions: Vec::new(),
        }
    }

    pub fn with_top_predictions(mut self, top_predictions: Vec<RecognizedFood>) -> Self {
        self.top_predictions = top_predictions;
        self
    }

    /// Whole kilocalories, as stored in the history
    pub fn rounded_calories(&self) -> i64 {
        self.total_calories.round() as i64
    }
}

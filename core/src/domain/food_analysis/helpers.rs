use crate::domain::{
    food_analysis::{
        entities::{AnalysisResult, FoodBreakdown},
        value_objects::DensityMode,
    },
    food_recognition::entities::RecognizedFood,
    nutrition::{
        services::DEFAULT_CALORIES_PER_100G,
        value_objects::{DensityTable, MacroTable},
    },
    portion::{entities::PortionEstimate, services::DEFAULT_DENSITY_G_PER_CM3},
};

/// Each food's share of the portion, proportional to its confidence.
pub fn confidence_shares(foods: &[RecognizedFood]) -> Vec<f64> {
    let total: f64 = foods.iter().map(|food| food.confidence).sum();

    if total > 0.0 && total.is_finite() {
        foods.iter().map(|food| food.confidence / total).collect()
    } else {
        vec![1.0 / foods.len() as f64; foods.len()]
    }
}

/// Split the estimated portion across `foods` and price each share.
///
/// `calories_per_100g` is index-aligned with `foods`; a missing entry counts
/// as the lookup default. In [`DensityMode::Uniform`] the portion mass is
/// split as-is. In [`DensityMode::PerFood`] the portion volume is split and
/// each share is weighed with the food's own density, so density is still
/// applied exactly once.
///
/// Macronutrients per 100 g are scaled by each share's weight the same way.
pub fn aggregate_calories(
    foods: Vec<RecognizedFood>,
    portion: PortionEstimate,
    calories_per_100g: &[f64],
    density_table: &DensityTable,
    macro_table: &MacroTable,
    density_mode: DensityMode,
) -> AnalysisResult {
    let shares = confidence_shares(&foods);

    let breakdown = foods
        .iter()
        .zip(shares)
        .enumerate()
        .map(|(index, (food, share))| {
            let (weight_grams, density_g_per_cm3) = match density_mode {
                DensityMode::Uniform => (portion.mass_grams * share, DEFAULT_DENSITY_G_PER_CM3),
                DensityMode::PerFood => {
                    let density = density_table.get(&food.name);
                    (portion.volume_cm3 * share * density, density)
                }
            };
            let calories_per_100g = calories_per_100g
                .get(index)
                .copied()
                .unwrap_or(DEFAULT_CALORIES_PER_100G);
            let profile = macro_table.get(&food.name);
            let factor = weight_grams / 100.0;
            let carbs_g = profile.carbs_g * factor;

            FoodBreakdown {
                food: food.name.clone(),
                confidence: food.confidence,
                weight_grams,
                density_g_per_cm3,
                calories_per_100g,
                calories: factor * calories_per_100g,
                protein_g: profile.protein_g * factor,
                carbs_g,
                fat_g: profile.fat_g * factor,
                glycemic_index: profile.glycemic_index,
                approx_sugar_rise_g: carbs_g * profile.glycemic_index / 100.0,
            }
        })
        .collect();

    AnalysisResult::new(foods, portion, breakdown)
}

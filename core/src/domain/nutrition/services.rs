use futures::future::join_all;

use crate::domain::{
    common::{entities::app_errors::CoreError, fallback::attempt},
    nutrition::ports::NutritionClient,
};

pub const DEFAULT_CALORIES_PER_100G: f64 = 200.0;

/// Calories per 100 g for one food, or the default when the lookup fails or
/// returns something unusable.
pub async fn lookup_calories_per_100g<N>(client: &N, food_name: &str) -> f64
where
    N: NutritionClient,
{
    let lookup = async {
        let calories = client.calories_per_100g(food_name.to_string()).await?;
        if calories.is_finite() && calories > 0.0 {
            Ok(calories)
        } else {
            Err(CoreError::ExternalServiceError(format!(
                "unusable calories_per_100g {calories} for {food_name}"
            )))
        }
    };

    attempt("nutrition", lookup, DEFAULT_CALORIES_PER_100G).await
}

/// Fan out one lookup per food and join them, preserving input order.
pub async fn lookup_all<N>(client: &N, food_names: &[String]) -> Vec<f64>
where
    N: NutritionClient,
{
    join_all(
        food_names
            .iter()
            .map(|name| lookup_calories_per_100g(client, name)),
    )
    .await
}

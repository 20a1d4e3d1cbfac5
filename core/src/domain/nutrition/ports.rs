use std::future::Future;

use crate::domain::common::entities::app_errors::CoreError;

/// Nutrition database lookup
#[cfg_attr(test, mockall::automock)]
pub trait NutritionClient: Send + Sync {
    /// Calories per 100 g of `food_name`
    fn calories_per_100g(
        &self,
        food_name: String,
    ) -> impl Future<Output = Result<f64, CoreError>> + Send;
}

pub mod http_client;
pub mod table_client;

use crate::domain::{common::entities::app_errors::CoreError, nutrition::ports::NutritionClient};

pub use http_client::HttpNutritionClient;
pub use table_client::TableNutritionClient;

/// Nutrition source chosen at startup: a remote service or the builtin table.
#[derive(Debug, Clone)]
pub enum NutritionBackend {
    Http(HttpNutritionClient),
    Table(TableNutritionClient),
}

impl NutritionClient for NutritionBackend {
    async fn calories_per_100g(&self, food_name: String) -> Result<f64, CoreError> {
        match self {
            NutritionBackend::Http(client) => client.calories_per_100g(food_name).await,
            NutritionBackend::Table(client) => client.calories_per_100g(food_name).await,
        }
    }
}

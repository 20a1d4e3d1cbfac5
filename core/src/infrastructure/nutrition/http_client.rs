use reqwest::Client;
use serde::Deserialize;

use crate::{
    domain::{common::entities::app_errors::CoreError, nutrition::ports::NutritionClient},
    infrastructure::http::read_json,
};

/// `GET {base_url}/api/nutrition?food=<name>`
#[derive(Debug, Clone)]
pub struct HttpNutritionClient {
    base_url: String,
    client: Client,
}

#[derive(Debug, Deserialize)]
struct NutritionResponse {
    calories_per_100g: f64,
}

impl HttpNutritionClient {
    pub fn new(base_url: &str, client: Client) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client,
        }
    }
}

impl NutritionClient for HttpNutritionClient {
    async fn calories_per_100g(&self, food_name: String) -> Result<f64, CoreError> {
        let response = self
            .client
            .get(format!("{}/api/nutrition", self.base_url))
            .query(&[("food", food_name.as_str())])
            .send()
            .await;

        let body: NutritionResponse = read_json("nutrition", response).await?;

        Ok(body.calories_per_100g)
    }
}

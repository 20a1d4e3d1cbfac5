use base64::{Engine as _, engine::general_purpose};
use bytes::Bytes;
use reqwest::Client;
use serde::Serialize;

use crate::{
    domain::{common::entities::app_errors::CoreError, food_recognition::ports::FoodClassifier},
    infrastructure::http::read_json,
};

pub const DEFAULT_CLARIFAI_URL: &str =
    "https://api.clarifai.com/v2/models/food-item-recognition/outputs";

/// Clarifai's public food-item-recognition model
#[derive(Debug, Clone)]
pub struct ClarifaiFoodClassifier {
    url: String,
    api_key: String,
    client: Client,
}

#[derive(Debug, Serialize)]
struct ClarifaiRequest {
    user_app_id: UserAppId,
    inputs: Vec<Input>,
}

#[derive(Debug, Serialize)]
struct UserAppId {
    user_id: String,
    app_id: String,
}

#[derive(Debug, Serialize)]
struct Input {
    data: InputData,
}

#[derive(Debug, Serialize)]
struct InputData {
    image: InputImage,
}

#[derive(Debug, Serialize)]
struct InputImage {
    base64: String,
}

impl ClarifaiFoodClassifier {
    pub fn new(url: String, api_key: String, client: Client) -> Self {
        Self {
            url,
            api_key,
            client,
        }
    }
}

impl FoodClassifier for ClarifaiFoodClassifier {
    async fn classify(&self, image: Bytes) -> Result<serde_json::Value, CoreError> {
        let request = ClarifaiRequest {
            user_app_id: UserAppId {
                user_id: "clarifai".to_string(),
                app_id: "main".to_string(),
            },
            inputs: vec![Input {
                data: InputData {
                    image: InputImage {
                        base64: general_purpose::STANDARD.encode(&image),
                    },
                },
            }],
        };

        let response = self
            .client
            .post(&self.url)
            .header("Authorization", format!("Key {}", self.api_key))
            .json(&request)
            .send()
            .await;

        read_json("Clarifai", response).await
    }
}

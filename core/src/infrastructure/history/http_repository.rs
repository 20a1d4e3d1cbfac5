use reqwest::Client;

use crate::{
    domain::{
        common::entities::app_errors::CoreError,
        food_analysis::{
            entities::{HistoryEntry, SaveAnalysisRequest},
            ports::HistoryRepository,
        },
    },
    infrastructure::http::{ensure_success, read_json},
};

/// Persistence service exposing `POST /api/save` and `GET /api/history`
#[derive(Debug, Clone)]
pub struct HttpHistoryRepository {
    base_url: String,
    client: Client,
}

impl HttpHistoryRepository {
    pub fn new(base_url: &str, client: Client) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client,
        }
    }
}

impl HistoryRepository for HttpHistoryRepository {
    async fn save(&self, request: SaveAnalysisRequest) -> Result<(), CoreError> {
        let response = self
            .client
            .post(format!("{}/api/save", self.base_url))
            .json(&request)
            .send()
            .await;

        ensure_success("history save", response).await?;

        Ok(())
    }

    async fn list(&self) -> Result<Vec<HistoryEntry>, CoreError> {
        let response = self
            .client
            .get(format!("{}/api/history", self.base_url))
            .send()
            .await;

        read_json("history", response).await
    }
}

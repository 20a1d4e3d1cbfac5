use bytes::Bytes;
use reqwest::Client;
use serde::Deserialize;

use crate::{
    domain::{
        common::entities::app_errors::CoreError,
        portion::{entities::Pose, ports::PoseEstimator},
    },
    infrastructure::http::read_json,
};

/// MoveNet-compatible pose model served over HTTP
#[derive(Debug, Clone)]
pub struct HttpPoseEstimator {
    url: String,
    client: Client,
}

#[derive(Debug, Deserialize)]
struct PoseResponse {
    #[serde(default)]
    poses: Vec<Pose>,
}

impl HttpPoseEstimator {
    pub fn new(url: String, client: Client) -> Self {
        Self { url, client }
    }
}

impl PoseEstimator for HttpPoseEstimator {
    async fn estimate_poses(&self, image: Bytes) -> Result<Vec<Pose>, CoreError> {
        let response = self
            .client
            .post(&self.url)
            .header("Content-Type", "application/octet-stream")
            .body(image)
            .send()
            .await;

        let body: PoseResponse = read_json("pose estimation", response).await?;

        Ok(body.poses)
    }
}

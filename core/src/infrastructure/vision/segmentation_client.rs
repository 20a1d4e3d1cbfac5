use base64::{Engine as _, engine::general_purpose};
use bytes::Bytes;
use reqwest::Client;
use serde::Deserialize;
use tracing::error;

use crate::{
    domain::{
        common::entities::app_errors::CoreError,
        portion::{entities::SegmentationMask, ports::Segmenter},
    },
    infrastructure::http::read_json,
};

/// Segmentation model served over HTTP (U²-Net style salient object mask).
#[derive(Debug, Clone)]
pub struct HttpSegmenter {
    url: String,
    client: Client,
}

#[derive(Debug, Deserialize)]
struct SegmentationResponse {
    width: u32,
    height: u32,
    /// Base64 of one alpha byte per pixel
    alpha: String,
}

impl HttpSegmenter {
    pub fn new(url: String, client: Client) -> Self {
        Self { url, client }
    }
}

impl Segmenter for HttpSegmenter {
    async fn segment(&self, image: Bytes) -> Result<SegmentationMask, CoreError> {
        let response = self
            .client
            .post(&self.url)
            .header("Content-Type", "application/octet-stream")
            .body(image)
            .send()
            .await;

        let body: SegmentationResponse = read_json("segmentation", response).await?;

        let alpha = general_purpose::STANDARD.decode(body.alpha).map_err(|e| {
            error!("Invalid segmentation mask encoding: {}", e);
            CoreError::ExternalServiceError(format!("Invalid segmentation mask encoding: {e}"))
        })?;

        Ok(SegmentationMask {
            width: body.width,
            height: body.height,
            alpha,
        })
    }
}

use axum::extract::multipart::Field;
use bytes::Bytes;
use utoipa::ToSchema;

use crate::application::http::server::api_entities::api_error::ApiError;

pub const MAX_IMAGE_SIZE: usize = 10 * 1024 * 1024; // 10MB

/// Multipart body of `POST /api/analyze`, for the OpenAPI document only.
#[derive(ToSchema)]
#[allow(dead_code)]
pub struct AnalyzeFoodForm {
    #[schema(value_type = String, format = Binary)]
    pub image: Vec<u8>,
    /// Used when the classifier recognizes nothing
    pub manual_food: Option<String>,
}

/// Multipart body of `POST /api/chat`; at least one part is required.
#[derive(ToSchema)]
#[allow(dead_code)]
pub struct ChatForm {
    #[schema(value_type = Option<String>, format = Binary)]
    pub image: Option<Vec<u8>>,
    pub message: Option<String>,
}

/// Read an `image` part, enforcing [`MAX_IMAGE_SIZE`].
pub async fn read_image_field(field: Field<'_>) -> Result<Bytes, ApiError> {
    let data = field
        .bytes()
        .await
        .map_err(|e| ApiError::BadRequest(format!("Failed to read image: {}", e)))?;

    if data.len() > MAX_IMAGE_SIZE {
        return Err(ApiError::BadRequest(format!(
            "Image too large. Max size is {} bytes",
            MAX_IMAGE_SIZE
        )));
    }

    Ok(data)
}

/// Read a text part; blank values count as absent.
pub async fn read_text_field(field: Field<'_>, name: &str) -> Result<Option<String>, ApiError> {
    let value = field
        .text()
        .await
        .map_err(|e| ApiError::BadRequest(format!("Failed to read {}: {}", name, e)))?;

    let value = value.trim();
    Ok((!value.is_empty()).then(|| value.to_string()))
}

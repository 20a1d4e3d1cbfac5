use axum::extract::{Multipart, State};
use bytes::Bytes;
use nutriscope_core::domain::food_analysis::{
    entities::AnalysisResult, ports::FoodAnalysisService, value_objects::AnalyzeFoodInput,
};

use crate::application::http::{
    food_analysis::validators::{AnalyzeFoodForm, read_image_field, read_text_field},
    server::{
        api_entities::{
            api_error::{ApiError, ApiErrorResponse},
            response::Response,
        },
        app_state::AppState,
    },
};

#[utoipa::path(
    post,
    path = "/analyze",
    tag = "food-analysis",
    summary = "Estimate calories from a food photo",
    description = "Multipart form with an `image` part (max 10 MB) and an optional `manual_food` \
name used when the classifier recognizes nothing",
    request_body(content = AnalyzeFoodForm, content_type = "multipart/form-data"),
    responses(
        (status = 200, body = AnalysisResult),
        (status = 400, body = ApiErrorResponse),
    ),
)]
pub async fn analyze_food_image(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<Response<AnalysisResult>, ApiError> {
    let mut image: Option<Bytes> = None;
    let mut manual_food_name: Option<String> = None;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| ApiError::BadRequest(format!("Failed to read multipart field: {}", e)))?
    {
        let name = field.name().unwrap_or("").to_string();

        match name.as_str() {
            "image" => image = Some(read_image_field(field).await?),
            "manual_food" => manual_food_name = read_text_field(field, "manual_food").await?,
            _ => {}
        }
    }

    let image = image.ok_or_else(|| ApiError::BadRequest("Missing image field".to_string()))?;

    let result = state
        .service
        .analyze_food(AnalyzeFoodInput {
            image,
            manual_food_name,
        })
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(result))
}

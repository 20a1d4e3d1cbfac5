use axum::extract::State;
use nutriscope_core::domain::food_analysis::{entities::HistoryEntry, ports::FoodAnalysisService};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::application::http::server::{
    api_entities::{
        api_error::{ApiError, ApiErrorResponse},
        response::Response,
    },
    app_state::AppState,
};

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct GetAnalysisHistoryResponse {
    pub data: Vec<HistoryEntry>,
}

#[utoipa::path(
    get,
    path = "/history",
    tag = "food-analysis",
    summary = "Get analysis history",
    description = "Past analyses in chronological order",
    responses(
        (status = 200, body = GetAnalysisHistoryResponse),
        (status = 502, body = ApiErrorResponse),
    ),
)]
pub async fn get_analysis_history(
    State(state): State<AppState>,
) -> Result<Response<GetAnalysisHistoryResponse>, ApiError> {
    let entries = state
        .service
        .get_analysis_history()
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(GetAnalysisHistoryResponse { data: entries }))
}

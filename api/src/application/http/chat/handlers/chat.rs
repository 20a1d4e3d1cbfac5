use axum::extract::{Multipart, State};
use nutriscope_core::domain::chat::{
    entities::{ChatInput, ChatReply},
    ports::ChatService,
};

use crate::application::http::{
    food_analysis::validators::{ChatForm, read_image_field, read_text_field},
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
    path = "/chat",
    tag = "chat",
    summary = "Ask the nutrition assistant",
    description = "Multipart form with a `message`, an `image`, or both",
    request_body(content = ChatForm, content_type = "multipart/form-data"),
    responses(
        (status = 200, body = ChatReply),
        (status = 400, body = ApiErrorResponse),
        (status = 502, body = ApiErrorResponse),
    ),
)]
pub async fn chat(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<Response<ChatReply>, ApiError> {
    let mut input = ChatInput::default();

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| ApiError::BadRequest(format!("Failed to read multipart field: {}", e)))?
    {
        let name = field.name().unwrap_or("").to_string();

        match name.as_str() {
            "message" => input.message = read_text_field(field, "message").await?,
            "image" => input.image = Some(read_image_field(field).await?),
            _ => {}
        }
    }

    let reply = state.service.chat(input).await.map_err(ApiError::from)?;

    Ok(Response::OK(reply))
}

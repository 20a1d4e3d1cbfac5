use utoipa::OpenApi;

use crate::application::http::{chat::router::ChatApiDoc, food_analysis::router::FoodAnalysisApiDoc};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Nutriscope API"
    ),
    nest(
        (path = "/api", api = FoodAnalysisApiDoc),
        (path = "/api", api = ChatApiDoc),
    )
)]
pub struct ApiDoc;

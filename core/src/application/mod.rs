use tracing::info;

use crate::{
    domain::{
        common::{NutriscopeConfig, entities::app_errors::CoreError, services::Service},
        nutrition::value_objects::{builtin_density_table, builtin_macro_table},
    },
    infrastructure::{
        classification::ClarifaiFoodClassifier,
        history::{HistoryBackend, HttpHistoryRepository, InMemoryHistoryRepository},
        http::build_http_client,
        llm::GroqLLMClient,
        nutrition::{HttpNutritionClient, NutritionBackend, TableNutritionClient},
        vision::{HttpPoseEstimator, HttpSegmenter},
    },
};

pub type NutriscopeService = Service<
    ClarifaiFoodClassifier,
    HttpSegmenter,
    HttpPoseEstimator,
    NutritionBackend,
    HistoryBackend,
    GroqLLMClient,
>;

/// Wire the concrete collaborators described by `config`.
///
/// Unset vision endpoints disable that model, an unset nutrition service
/// falls back to the builtin calorie table, and an unset history service
/// keeps history in memory.
pub async fn create_service(config: NutriscopeConfig) -> Result<NutriscopeService, CoreError> {
    let client = build_http_client(&config.http)?;

    let classifier = ClarifaiFoodClassifier::new(
        config.classifier.url.clone(),
        config.classifier.api_key.clone(),
        client.clone(),
    );

    let segmenter = config
        .vision
        .segmentation_url
        .clone()
        .map(|url| HttpSegmenter::new(url, client.clone()));
    let pose_estimator = config
        .vision
        .pose_url
        .clone()
        .map(|url| HttpPoseEstimator::new(url, client.clone()));

    let nutrition_client = match config.nutrition.base_url.as_deref() {
        Some(base_url) => NutritionBackend::Http(HttpNutritionClient::new(base_url, client.clone())),
        None => NutritionBackend::Table(TableNutritionClient::default()),
    };

    let history_repository = match config.history.base_url.as_deref() {
        Some(base_url) => {
            HistoryBackend::Http(HttpHistoryRepository::new(base_url, client.clone()))
        }
        None => HistoryBackend::InMemory(InMemoryHistoryRepository::new()),
    };

    let llm_client = GroqLLMClient::new(&config.llm, client);

    info!(
        segmentation = segmenter.is_some(),
        pose = pose_estimator.is_some(),
        remote_nutrition = config.nutrition.base_url.is_some(),
        remote_history = config.history.base_url.is_some(),
        density_mode = %config.density_mode,
        "nutriscope service configured"
    );

    Ok(Service::new(
        classifier,
        segmenter,
        pose_estimator,
        nutrition_client,
        history_repository,
        llm_client,
        builtin_density_table(),
        builtin_macro_table(),
        config.density_mode,
    ))
}

use std::sync::Arc;

use serde_json::Value;
use tracing::{info, instrument, warn};

use crate::domain::{
    chat::ports::LLMClient,
    common::{entities::app_errors::CoreError, fallback::attempt, services::Service},
    food_analysis::{
        entities::{AnalysisResult, HistoryEntry, SaveAnalysisRequest},
        helpers::aggregate_calories,
        ports::{FoodAnalysisService, HistoryRepository},
        value_objects::AnalyzeFoodInput,
    },
    food_recognition::{
        ports::FoodClassifier,
        services::{TOP_PREDICTIONS, parse_foods, top_predictions},
    },
    nutrition::{ports::NutritionClient, services::lookup_all},
    portion::{
        entities::ImageFrame,
        ports::{PoseEstimator, Segmenter},
    },
};

impl<CL, SG, PE, N, H, LLM> Service<CL, SG, PE, N, H, LLM>
where
    CL: FoodClassifier,
    SG: Segmenter,
    PE: PoseEstimator,
    N: NutritionClient,
    H: HistoryRepository + 'static,
    LLM: LLMClient,
{
    /// Hand the result to the history collaborator without waiting for it.
    fn persist(&self, result: &AnalysisResult, image: &ImageFrame) {
        let request = SaveAnalysisRequest::from_result(result, image.data_url());
        let repository = Arc::clone(&self.history_repository);
        let analysis_id = result.id;

        tokio::spawn(async move {
            if let Err(e) = repository.save(request).await {
                warn!(%analysis_id, error = %e, "failed to save analysis to history");
            }
        });
    }
}

impl<CL, SG, PE, N, H, LLM> FoodAnalysisService for Service<CL, SG, PE, N, H, LLM>
where
    CL: FoodClassifier,
    SG: Segmenter,
    PE: PoseEstimator,
    N: NutritionClient,
    H: HistoryRepository + 'static,
    LLM: LLMClient,
{
    #[instrument(skip_all, fields(image_bytes = input.image.len()))]
    async fn analyze_food(&self, input: AnalyzeFoodInput) -> Result<AnalysisResult, CoreError> {
        // 1. Reject bad input before touching any collaborator
        let image = ImageFrame::decode(input.image)?;

        // 2. Recognize foods
        let payload = attempt(
            "classification",
            self.classifier.classify(image.data.clone()),
            Value::Null,
        )
        .await;
        let foods = parse_foods(&payload, input.manual_food_name.as_deref());

        // 3. Portion and nutrition lookups are independent
        let names: Vec<String> = foods.iter().map(|food| food.name.clone()).collect();
        let (portion, calories_per_100g) = futures::join!(
            self.portion_estimator.estimate(&image),
            lookup_all(&self.nutrition_client, &names)
        );

        // 4. Aggregate
        let result = aggregate_calories(
            foods,
            portion,
            &calories_per_100g,
            &self.density_table,
            &self.macro_table,
            self.density_mode,
        )
        .with_top_predictions(top_predictions(&payload, TOP_PREDICTIONS));

        info!(
            analysis_id = %result.id,
            foods = ?names,
            mass_grams = result.total_mass_grams,
            calories = result.total_calories,
            "food analysis completed"
        );

        // 5. Fire-and-forget persistence
        self.persist(&result, &image);

        Ok(result)
    }

    async fn get_analysis_history(&self) -> Result<Vec<HistoryEntry>, CoreError> {
        let mut entries = self.history_repository.list().await?;
        entries.sort_by_key(|entry| entry.timestamp);

        Ok(entries)
    }
}

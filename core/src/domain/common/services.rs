use std::sync::Arc;

use crate::domain::{
    chat::ports::LLMClient,
    food_analysis::{ports::HistoryRepository, value_objects::DensityMode},
    food_recognition::ports::FoodClassifier,
    nutrition::{ports::NutritionClient, value_objects::{DensityTable, MacroTable}},
    portion::{
        ports::{PoseEstimator, Segmenter},
        services::PortionEstimator,
    },
};

/// Every collaborator the pipeline talks to, injected at construction.
pub struct Service<CL, SG, PE, N, H, LLM>
where
    CL: FoodClassifier,
    SG: Segmenter,
    PE: PoseEstimator,
    N: NutritionClient,
    H: HistoryRepository,
    LLM: LLMClient,
{
    pub(crate) classifier: CL,
    pub(crate) portion_estimator: PortionEstimator<SG, PE>,
    pub(crate) nutrition_client: N,
    pub(crate) history_repository: Arc<H>,
    pub(crate) llm_client: LLM,
    pub(crate) density_table: DensityTable,
    pub(crate) macro_table: MacroTable,
    pub(crate) density_mode: DensityMode,
}

impl<CL, SG, PE, N, H, LLM> Service<CL, SG, PE, N, H, LLM>
where
    CL: FoodClassifier,
    SG: Segmenter,
    PE: PoseEstimator,
    N: NutritionClient,
    H: HistoryRepository,
    LLM: LLMClient,
{
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        classifier: CL,
        segmenter: Option<SG>,
        pose_estimator: Option<PE>,
        nutrition_client: N,
        history_repository: H,
        llm_client: LLM,
        density_table: DensityTable,
        macro_table: MacroTable,
        density_mode: DensityMode,
    ) -> Self {
        Self {
            classifier,
            portion_estimator: PortionEstimator::new(segmenter, pose_estimator),
            nutrition_client,
            history_repository: Arc::new(history_repository),
            llm_client,
            density_table,
            macro_table,
            density_mode,
        }
    }
}

use std::future::Future;

use crate::domain::{
    common::entities::app_errors::CoreError,
    food_analysis::{
        entities::{AnalysisResult, HistoryEntry, SaveAnalysisRequest},
        value_objects::AnalyzeFoodInput,
    },
};

/// Persistence collaborator for finished analyses
#[cfg_attr(test, mockall::automock)]
pub trait HistoryRepository: Send + Sync {
    fn save(
        &self,
        request: SaveAnalysisRequest,
    ) -> impl Future<Output = Result<(), CoreError>> + Send;

    fn list(&self) -> impl Future<Output = Result<Vec<HistoryEntry>, CoreError>> + Send;
}

/// Service trait for the calorie estimation pipeline
#[cfg_attr(test, mockall::automock)]
pub trait FoodAnalysisService: Send + Sync {
    /// Image (and optional manual food name) in, calorie estimate out.
    fn analyze_food(
        &self,
        input: AnalyzeFoodInput,
    ) -> impl Future<Output = Result<AnalysisResult, CoreError>> + Send;

    fn get_analysis_history(
        &self,
    ) -> impl Future<Output = Result<Vec<HistoryEntry>, CoreError>> + Send;
}

use std::sync::Arc;

use tokio::sync::RwLock;

use crate::domain::{
    common::entities::app_errors::CoreError,
    food_analysis::{
        entities::{HistoryEntry, SaveAnalysisRequest},
        ports::HistoryRepository,
    },
};

/// Process-local history, lost on restart. Used when no persistence
/// service is configured.
#[derive(Debug, Clone, Default)]
pub struct InMemoryHistoryRepository {
    entries: Arc<RwLock<Vec<HistoryEntry>>>,
}

impl InMemoryHistoryRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

impl HistoryRepository for InMemoryHistoryRepository {
    async fn save(&self, request: SaveAnalysisRequest) -> Result<(), CoreError> {
        self.entries.write().await.push(request.into());
        Ok(())
    }

    async fn list(&self) -> Result<Vec<HistoryEntry>, CoreError> {
        Ok(self.entries.read().await.clone())
    }
}

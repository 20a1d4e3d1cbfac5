pub mod http_repository;
pub mod in_memory;

use crate::domain::{
    common::entities::app_errors::CoreError,
    food_analysis::{
        entities::{HistoryEntry, SaveAnalysisRequest},
        ports::HistoryRepository,
    },
};

pub use http_repository::HttpHistoryRepository;
pub use in_memory::InMemoryHistoryRepository;

#[derive(Debug, Clone)]
pub enum HistoryBackend {
    Http(HttpHistoryRepository),
    InMemory(InMemoryHistoryRepository),
}

impl HistoryRepository for HistoryBackend {
    async fn save(&self, request: SaveAnalysisRequest) -> Result<(), CoreError> {
        match self {
            HistoryBackend::Http(repository) => repository.save(request).await,
            HistoryBackend::InMemory(repository) => repository.save(request).await,
        }
    }

    async fn list(&self) -> Result<Vec<HistoryEntry>, CoreError> {
        match self {
            HistoryBackend::Http(repository) => repository.list().await,
            HistoryBackend::InMemory(repository) => repository.list().await,
        }
    }
}

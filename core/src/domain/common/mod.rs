use std::time::Duration;

use chrono::{DateTime, Utc};
use uuid::{NoContext, Timestamp};

use crate::domain::food_analysis::value_objects::DensityMode;

pub mod entities;
pub mod fallback;
pub mod services;

#[derive(Clone, Debug)]
pub struct NutriscopeConfig {
    pub classifier: ClassifierConfig,
    pub vision: VisionConfig,
    pub nutrition: NutritionConfig,
    pub history: HistoryConfig,
    pub llm: LLMConfig,
    pub http: HttpClientConfig,
    pub density_mode: DensityMode,
}

#[derive(Clone, Debug)]
pub struct ClassifierConfig {
    pub url: String,
    pub api_key: String,
}

/// Segmentation and pose endpoints. Either may be left unset, in which case
/// the portion estimator runs without that collaborator.
#[derive(Clone, Debug, Default)]
pub struct VisionConfig {
    pub segmentation_url: Option<String>,
    pub pose_url: Option<String>,
}

#[derive(Clone, Debug, Default)]
pub struct NutritionConfig {
    pub base_url: Option<String>,
}

#[derive(Clone, Debug, Default)]
pub struct HistoryConfig {
    pub base_url: Option<String>,
}

#[derive(Clone, Debug)]
pub struct LLMConfig {
    pub base_url: String,
    pub api_key: String,
    pub model: String,
}

#[derive(Clone, Debug)]
pub struct HttpClientConfig {
    pub timeout: Duration,
}

impl Default for HttpClientConfig {
    fn default() -> Self {
        Self {
            timeout: Duration::from_secs(15),
        }
    }
}

pub fn generate_timestamp() -> (DateTime<Utc>, Timestamp) {
    let now = Utc::now();
    let seconds = now.timestamp().try_into().unwrap_or(0);
    let timestamp = Timestamp::from_unix(NoContext, seconds, 0);

    (now, timestamp)
}

use std::time::Duration;

use clap::{Args as ClapArgs, Parser};
use nutriscope_core::{
    domain::{
        common::{
            ClassifierConfig, HistoryConfig, HttpClientConfig, LLMConfig, NutriscopeConfig,
            NutritionConfig, VisionConfig,
        },
        food_analysis::value_objects::DensityMode,
    },
    infrastructure::{
        classification::clarifai_client::DEFAULT_CLARIFAI_URL,
        llm::groq_client::{DEFAULT_GROQ_BASE_URL, DEFAULT_GROQ_MODEL},
    },
};

#[derive(Debug, Clone, Parser)]
#[command(name = "nutriscope", version, about = "Food photo calorie estimation API")]
pub struct Args {
    #[command(flatten)]
    pub server: ServerArgs,

    #[command(flatten)]
    pub classifier: ClassifierArgs,

    #[command(flatten)]
    pub vision: VisionArgs,

    #[command(flatten)]
    pub storage: StorageArgs,

    #[command(flatten)]
    pub llm: LlmArgs,

    #[command(flatten)]
    pub log: LogArgs,

    /// Per-request timeout for every outgoing call, in seconds
    #[arg(long, env = "HTTP_TIMEOUT_SECS", default_value_t = 15)]
    pub http_timeout_secs: u64,

    /// `uniform` or `per_food`
    #[arg(long, env = "DENSITY_MODE", default_value_t = DensityMode::Uniform)]
    pub density_mode: DensityMode,
}

#[derive(Debug, Clone, ClapArgs)]
pub struct ServerArgs {
    #[arg(long = "server-host", env = "SERVER_HOST", default_value = "0.0.0.0")]
    pub host: String,

    #[arg(long = "server-port", env = "SERVER_PORT", default_value_t = 3333)]
    pub port: u16,

    #[arg(long = "server-root-path", env = "SERVER_ROOT_PATH", default_value = "")]
    pub root_path: String,

    #[arg(
        long = "allowed-origins",
        env = "ALLOWED_ORIGINS",
        value_delimiter = ',',
        default_value = "http://localhost:5173"
    )]
    pub allowed_origins: Vec<String>,
}

#[derive(Debug, Clone, ClapArgs)]
pub struct ClassifierArgs {
    #[arg(long = "clarifai-url", env = "CLARIFAI_URL", default_value = DEFAULT_CLARIFAI_URL)]
    pub url: String,

    #[arg(id = "clarifai_api_key", long = "clarifai-api-key", env = "CLARIFAI_API_KEY", default_value = "")]
    pub api_key: String,
}

#[derive(Debug, Clone, ClapArgs)]
pub struct VisionArgs {
    #[arg(long = "segmentation-url", env = "SEGMENTATION_URL")]
    pub segmentation_url: Option<String>,

    #[arg(long = "pose-url", env = "POSE_URL")]
    pub pose_url: Option<String>,
}

#[derive(Debug, Clone, ClapArgs)]
pub struct StorageArgs {
    /// Nutrition service base URL; the builtin calorie table is used when unset
    #[arg(long = "nutrition-base-url", env = "NUTRITION_BASE_URL")]
    pub nutrition_base_url: Option<String>,

    /// Persistence service base URL; history is kept in memory when unset
    #[arg(long = "history-base-url", env = "HISTORY_BASE_URL")]
    pub history_base_url: Option<String>,
}

#[derive(Debug, Clone, ClapArgs)]
pub struct LlmArgs {
    #[arg(long = "llm-base-url", env = "LLM_BASE_URL", default_value = DEFAULT_GROQ_BASE_URL)]
    pub base_url: String,

    #[arg(id = "llm_api_key", long = "llm-api-key", env = "GROQ_API_KEY", default_value = "")]
    pub api_key: String,

    #[arg(long = "llm-model", env = "LLM_MODEL", default_value = DEFAULT_GROQ_MODEL)]
    pub model: String,
}

#[derive(Debug, Clone, ClapArgs)]
pub struct LogArgs {
    /// Used when `RUST_LOG` is not set
    #[arg(long = "log-filter", env = "LOG_FILTER", default_value = "info")]
    pub filter: String,

    #[arg(long = "log-json", env = "LOG_JSON", default_value_t = false)]
    pub json: bool,
}

impl From<Args> for NutriscopeConfig {
    fn from(args: Args) -> Self {
        Self {
            classifier: ClassifierConfig {
                url: args.classifier.url,
                api_key: args.classifier.api_key,
            },
            vision: VisionConfig {
                segmentation_url: args.vision.segmentation_url,
                pose_url: args.vision.pose_url,
            },
            nutrition: NutritionConfig {
                base_url: args.storage.nutrition_base_url,
            },
            history: HistoryConfig {
                base_url: args.storage.history_base_url,
            },
            llm: LLMConfig {
                base_url: args.llm.base_url,
                api_key: args.llm.api_key,
                model: args.llm.model,
            },
            http: HttpClientConfig {
                timeout: Duration::from_secs(args.http_timeout_secs),
            },
            density_mode: args.density_mode,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn optional_services_stay_unset_by_default() {
        let args = Args::try_parse_from(["nutriscope", "--density-mode", "per-food"]).unwrap();
        let config = NutriscopeConfig::from(args);

        assert_eq!(config.density_mode, DensityMode::PerFood);
        assert_eq!(config.classifier.url, DEFAULT_CLARIFAI_URL);
        assert_eq!(config.http.timeout, Duration::from_secs(15));
    }
}

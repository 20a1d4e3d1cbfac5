use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// A labeled prediction from the classification service.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Concept {
    pub name: String,
    pub value: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct RecognizedFood {
    /// Lower-cased, trimmed food name
    pub name: String,
    /// Confidence in (0, 1]
    pub confidence: f64,
}

impl RecognizedFood {
    pub fn new(name: &str, confidence: f64) -> Self {
        Self {
            name: normalize_food_name(name),
            confidence,
        }
    }
}

pub fn normalize_food_name(name: &str) -> String {
    name.trim().to_lowercase()
}

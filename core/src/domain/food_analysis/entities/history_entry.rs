use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::{
    food_analysis::entities::AnalysisResult, food_recognition::entities::RecognizedFood,
};

/// A food as stored by the persistence service: `{ food, confidence }`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct SavedFood {
    #[serde(alias = "name")]
    pub food: String,
    #[serde(default = "full_confidence")]
    pub confidence: f64,
}

fn full_confidence() -> f64 {
    1.0
}

impl From<&RecognizedFood> for SavedFood {
    fn from(food: &RecognizedFood) -> Self {
        Self {
            food: food.name.clone(),
            confidence: food.confidence,
        }
    }
}

/// A past analysis as shown on the dashboard
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct HistoryEntry {
    pub timestamp: DateTime<Utc>,
    pub calories: i64,
    #[serde(default)]
    pub foods: Vec<SavedFood>,
}

/// Body sent to the persistence service after each analysis
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SaveAnalysisRequest {
    pub foods: Vec<SavedFood>,
    pub calories: i64,
    /// Data URL of the analyzed image
    pub image: String,
    pub timestamp: DateTime<Utc>,
}

impl SaveAnalysisRequest {
    pub fn from_result(result: &AnalysisResult, image: String) -> Self {
        Self {
            foods: result.foods.iter().map(SavedFood::from).collect(),
            calories: result.rounded_calories(),
            image,
            timestamp: result.analyzed_at,
        }
    }
}

impl From<SaveAnalysisRequest> for HistoryEntry {
    fn from(request: SaveAnalysisRequest) -> Self {
        Self {
            timestamp: request.timestamp,
            calories: request.calories,
            foods: request.foods,
        }
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn saved_foods_use_the_food_field() {
        let food = SavedFood::from(&RecognizedFood::new("Unknown", 1.0));

        assert_eq!(
            serde_json::to_value(&food).unwrap(),
            json!({ "food": "unknown", "confidence": 1.0 })
        );
    }

    #[test]
    fn history_written_by_the_web_client_decodes() {
        let entries: Vec<HistoryEntry> = serde_json::from_value(json!([
            {
                "foods": [{ "food": "pizza", "confidence": 0.8 }],
                "calories": 638,
                "image": "data:image/png;base64,AAAA",
                "timestamp": "2024-05-01T12:30:00.000Z"
            },
            { "calories": 120, "timestamp": "2024-05-01T18:00:00Z" }
        ]))
        .unwrap();

        assert_eq!(entries[0].foods[0].food, "pizza");
        assert_eq!(entries[0].foods[0].confidence, 0.8);
        assert!(entries[1].foods.is_empty());
    }
}

use serde_json::Value;

use crate::domain::food_recognition::entities::{Concept, RecognizedFood, normalize_food_name};

/// Concepts at or below this score are discarded.
pub const CONFIDENCE_FLOOR: f64 = 0.2;

pub const UNKNOWN_FOOD: &str = "unknown";

/// How many raw predictions an analysis reports alongside the kept foods.
pub const TOP_PREDICTIONS: usize = 3;

/// Extract `outputs[0].data.concepts` from a classification payload.
///
/// Anything missing or of the wrong type counts as "no concepts"; a concept
/// without a string name or numeric value is skipped.
pub fn extract_concepts(payload: &Value) -> Vec<Concept> {
    payload
        .get("outputs")
        .and_then(Value::as_array)
        .and_then(|outputs| outputs.first())
        .and_then(|output| output.get("data"))
        .and_then(|data| data.get("concepts"))
        .and_then(Value::as_array)
        .map(|concepts| {
            concepts
                .iter()
                .filter_map(|concept| {
                    let name = concept.get("name")?.as_str()?;
                    let value = concept.get("value")?.as_f64()?;
                    Some(Concept {
                        name: name.to_string(),
                        value,
                    })
                })
                .collect()
        })
        .unwrap_or_default()
}

/// Turn a classification payload into a non-empty, ordered list of foods.
///
/// Fallback chain: concepts above the floor, then the manual entry at full
/// confidence, then the `unknown` sentinel.
pub fn parse_foods(payload: &Value, manual_food_name: Option<&str>) -> Vec<RecognizedFood> {
    let mut foods: Vec<RecognizedFood> = extract_concepts(payload)
        .into_iter()
        .filter(|concept| concept.value > CONFIDENCE_FLOOR)
        .filter(|concept| !concept.name.trim().is_empty())
        .map(|concept| RecognizedFood::new(&concept.name, concept.value.min(1.0)))
        .collect();

    if foods.is_empty()
        && let Some(manual) = manual_food_name.map(normalize_food_name)
        && !manual.is_empty()
    {
        foods.push(RecognizedFood {
            name: manual,
            confidence: 1.0,
        });
    }

    if foods.is_empty() {
        foods.push(RecognizedFood {
            name: UNKNOWN_FOOD.to_string(),
            confidence: 1.0,
        });
    }

    foods
}

/// The `limit` highest-scoring named concepts, ignoring the confidence floor.
pub fn top_predictions(payload: &Value, limit: usize) -> Vec<RecognizedFood> {
    let mut concepts: Vec<Concept> = extract_concepts(payload)
        .into_iter()
        .filter(|concept| !concept.name.trim().is_empty())
        .collect();
    concepts.sort_by(|a, b| b.value.total_cmp(&a.value));

    concepts
        .into_iter()
        .take(limit)
        .map(|concept| RecognizedFood::new(&concept.name, concept.value.clamp(0.0, 1.0)))
        .collect()
}

use serde_json::Value;
use tracing::{info, instrument};

use crate::domain::{
    chat::{
        entities::{ChatInput, ChatReply},
        ports::{ChatService, LLMClient},
        prompt::build_chat_prompt,
    },
    common::{entities::app_errors::CoreError, fallback::attempt, services::Service},
    food_analysis::ports::HistoryRepository,
    food_recognition::{
        ports::FoodClassifier,
        services::{UNKNOWN_FOOD, parse_foods},
    },
    nutrition::ports::NutritionClient,
    portion::{
        entities::ImageFrame,
        ports::{PoseEstimator, Segmenter},
    },
};

impl<CL, SG, PE, N, H, LLM> ChatService for Service<CL, SG, PE, N, H, LLM>
where
    CL: FoodClassifier,
    SG: Segmenter,
    PE: PoseEstimator,
    N: NutritionClient,
    H: HistoryRepository,
    LLM: LLMClient,
{
    #[instrument(skip_all, fields(has_image = input.image().is_some()))]
    async fn chat(&self, input: ChatInput) -> Result<ChatReply, CoreError> {
        let message = input.trimmed_message();

        if message.is_none() && input.image().is_none() {
            return Err(CoreError::EmptyChatInput);
        }

        // An attached image must decode before any collaborator sees it
        let image = input
            .image()
            .cloned()
            .map(ImageFrame::decode)
            .transpose()?
            .map(|frame| frame.data);

        let detected_food: Vec<String> = match &image {
            Some(image) => {
                let payload =
                    attempt("classification", self.classifier.classify(image.clone()), Value::Null)
                        .await;
                parse_foods(&payload, None)
                    .into_iter()
                    .map(|food| food.name)
                    .filter(|name| name != UNKNOWN_FOOD)
                    .collect()
            }
            None => Vec::new(),
        };

        let prompt = build_chat_prompt(message, &detected_food, image.is_some());

        let chatbot_response = match image {
            Some(image) => self.llm_client.generate_with_image(prompt, image).await?,
            None => self.llm_client.generate_with_text(prompt).await?,
        };

        info!(detected = detected_food.len(), "chat reply generated");

        Ok(ChatReply {
            detected_food,
            chatbot_response: chatbot_response.trim().to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use bytes::Bytes;
    use serde_json::json;

    use super::*;
    use crate::domain::{
        food_analysis::value_objects::DensityMode,
        nutrition::value_objects::{builtin_density_table, builtin_macro_table},
        test_doubles::{
            FixedClassifier, FixedNutrition, FixedPoses, FixedSegmenter, PanickingClassifier,
            RecordingHistory, ScriptedLLM, png_image,
        },
    };

    fn service<CL: FoodClassifier>(
        classifier: CL,
        llm: ScriptedLLM,
    ) -> Service<CL, FixedSegmenter, FixedPoses, FixedNutrition, RecordingHistory, ScriptedLLM>
    {
        let (history, _saved) = RecordingHistory::new();
        Service::new(
            classifier,
            None,
            None,
            FixedNutrition::failing(),
            history,
            llm,
            builtin_density_table(),
            builtin_macro_table(),
            DensityMode::Uniform,
        )
    }

    #[tokio::test]
    async fn blank_input_is_rejected() {
        let service = service(PanickingClassifier, ScriptedLLM::replying("never"));

        let err = service
            .chat(ChatInput {
                message: Some("   ".to_string()),
                image: Some(Bytes::new()),
            })
            .await
            .unwrap_err();

        assert_eq!(err, CoreError::EmptyChatInput);
    }

    #[tokio::test]
    async fn text_only_chat_skips_classification() {
        let llm = ScriptedLLM::replying("  An egg has about 6 g of protein.\n");
        let service = service(PanickingClassifier, llm.clone());

        let reply = service
            .chat(ChatInput {
                message: Some("protein in an egg?".to_string()),
                image: None,
            })
            .await
            .unwrap();

        assert!(reply.detected_food.is_empty());
        assert_eq!(reply.chatbot_response, "An egg has about 6 g of protein.");
        let calls = llm.calls();
        assert_eq!(calls.len(), 1);
        assert!(!calls[0].with_image);
        assert!(calls[0].prompt.contains("protein in an egg?"));
    }

    #[tokio::test]
    async fn image_chat_lists_detected_foods() {
        let llm = ScriptedLLM::replying("Roughly 600 kcal.");
        let classifier = FixedClassifier(Ok(json!({
            "outputs": [{ "data": { "concepts": [
                { "name": "Burger", "value": 0.9 },
                { "name": "fries", "value": 0.5 },
                { "name": "ketchup", "value": 0.1 }
            ] } }]
        })));
        let service = service(classifier, llm.clone());

        let reply = service
            .chat(ChatInput {
                message: None,
                image: Some(png_image(8, 8)),
            })
            .await
            .unwrap();

        assert_eq!(reply.detected_food, vec!["burger", "fries"]);
        let calls = llm.calls();
        assert!(calls[0].with_image);
        assert!(calls[0].prompt.contains("burger, fries"));
    }

    #[tokio::test]
    async fn assistant_failure_is_reported() {
        let service = service(PanickingClassifier, ScriptedLLM::failing());

        let err = service
            .chat(ChatInput {
                message: Some("hello".to_string()),
                image: None,
            })
            .await
            .unwrap_err();

        assert!(matches!(err, CoreError::ExternalServiceError(_)));
    }

    #[tokio::test]
    async fn undecodable_image_is_rejected_before_any_call() {
        let llm = ScriptedLLM::replying("never");
        let service = service(PanickingClassifier, llm.clone());

        let err = service
            .chat(ChatInput {
                message: Some("hi".to_string()),
                image: Some(Bytes::from_static(b"\x00\x01 not an image")),
            })
            .await
            .unwrap_err();

        assert!(matches!(err, CoreError::InvalidImage(_)));
        assert!(llm.calls().is_empty());
    }
}

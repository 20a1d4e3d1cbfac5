use bytes::Bytes;
use reqwest::Client;
use serde::{Deserialize, Serialize};

use crate::{
    domain::{
        chat::{ports::LLMClient, prompt::SYSTEM_PROMPT},
        common::{LLMConfig, entities::app_errors::CoreError},
        portion::entities::image_data_url,
    },
    infrastructure::http::read_json,
};

pub const DEFAULT_GROQ_BASE_URL: &str = "https://api.groq.com/openai/v1";
pub const DEFAULT_GROQ_MODEL: &str = "meta-llama/llama-4-scout-17b-16e-instruct";

const TEMPERATURE: f64 = 0.6;
const MAX_TOKENS: u32 = 500;

/// Client for OpenAI-compatible `/chat/completions` endpoints (Groq by default)
#[derive(Debug, Clone)]
pub struct GroqLLMClient {
    base_url: String,
    api_key: String,
    model_name: String,
    client: Client,
}

#[derive(Debug, Serialize)]
struct ChatCompletionRequest {
    model: String,
    messages: Vec<Message>,
    temperature: f64,
    max_tokens: u32,
}

#[derive(Debug, Serialize)]
struct Message {
    role: &'static str,
    content: MessageContent,
}

#[derive(Debug, Serialize)]
#[serde(untagged)]
enum MessageContent {
    Text(String),
    Parts(Vec<Part>),
}

#[derive(Debug, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
enum Part {
    Text { text: String },
    ImageUrl { image_url: ImageUrl },
}

#[derive(Debug, Serialize)]
struct ImageUrl {
    url: String,
}

#[derive(Debug, Deserialize)]
struct ChatCompletionResponse {
    choices: Vec<Choice>,
}

#[derive(Debug, Deserialize)]
struct Choice {
    message: ResponseMessage,
}

#[derive(Debug, Deserialize)]
struct ResponseMessage {
    #[serde(default)]
    content: Option<String>,
}

impl GroqLLMClient {
    pub fn new(config: &LLMConfig, client: Client) -> Self {
        Self {
            base_url: config.base_url.trim_end_matches('/').to_string(),
            api_key: config.api_key.clone(),
            model_name: config.model.clone(),
            client,
        }
    }

    async fn call_chat_completions(&self, user: MessageContent) -> Result<String, CoreError> {
        let request = ChatCompletionRequest {
            model: self.model_name.clone(),
            messages: vec![
                Message {
                    role: "system",
                    content: MessageContent::Text(SYSTEM_PROMPT.to_string()),
                },
                Message {
                    role: "user",
                    content: user,
                },
            ],
            temperature: TEMPERATURE,
            max_tokens: MAX_TOKENS,
        };

        let response = self
            .client
            .post(format!("{}/chat/completions", self.base_url))
            .bearer_auth(&self.api_key)
            .json(&request)
            .send()
            .await;

        let completion: ChatCompletionResponse = read_json("LLM API", response).await?;

        completion
            .choices
            .into_iter()
            .next()
            .and_then(|choice| choice.message.content)
            .ok_or_else(|| CoreError::ExternalServiceError("No response from LLM".to_string()))
    }
}

impl LLMClient for GroqLLMClient {
    async fn generate_with_image(
        &self,
        prompt: String,
        image_data: Bytes,
    ) -> Result<String, CoreError> {
        let content = MessageContent::Parts(vec![
            Part::Text { text: prompt },
            Part::ImageUrl {
                image_url: ImageUrl {
                    url: image_data_url(&image_data),
                },
            },
        ]);

        self.call_chat_completions(content).await
    }

    async fn generate_with_text(&self, prompt: String) -> Result<String, CoreError> {
        self.call_chat_completions(MessageContent::Text(prompt))
            .await
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn image_message_uses_content_parts() {
        let message = Message {
            role: "user",
            content: MessageContent::Parts(vec![
                Part::Text {
                    text: "what is this?".to_string(),
                },
                Part::ImageUrl {
                    image_url: ImageUrl {
                        url: "data:image/png;base64,AA==".to_string(),
                    },
                },
            ]),
        };

        assert_eq!(
            serde_json::to_value(&message).unwrap(),
            json!({
                "role": "user",
                "content": [
                    { "type": "text", "text": "what is this?" },
                    { "type": "image_url", "image_url": { "url": "data:image/png;base64,AA==" } }
                ]
            })
        );
    }

    #[test]
    fn text_message_is_a_plain_string() {
        let message = Message {
            role: "system",
            content: MessageContent::Text("be brief".to_string()),
        };

        assert_eq!(
            serde_json::to_value(&message).unwrap(),
            json!({ "role": "system", "content": "be brief" })
        );
    }
}

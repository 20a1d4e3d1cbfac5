use bytes::Bytes;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, Default)]
pub struct ChatInput {
    pub message: Option<String>,
    pub image: Option<Bytes>,
}

impl ChatInput {
    /// The message with surrounding whitespace removed, if any is left
    pub fn trimmed_message(&self) -> Option<&str> {
        self.message
            .as_deref()
            .map(str::trim)
            .filter(|message| !message.is_empty())
    }

    pub fn image(&self) -> Option<&Bytes> {
        self.image.as_ref().filter(|image| !image.is_empty())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ChatReply {
    pub detected_food: Vec<String>,
    pub chatbot_response: String,
}

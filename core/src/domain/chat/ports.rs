use std::future::Future;

use bytes::Bytes;

use crate::domain::{
    chat::entities::{ChatInput, ChatReply},
    common::entities::app_errors::CoreError,
};

/// LLM Client trait for calling hosted chat models
#[cfg_attr(test, mockall::automock)]
pub trait LLMClient: Send + Sync {
    fn generate_with_image(
        &self,
        prompt: String,
        image_data: Bytes,
    ) -> impl Future<Output = Result<String, CoreError>> + Send;

    fn generate_with_text(
        &self,
        prompt: String,
    ) -> impl Future<Output = Result<String, CoreError>> + Send;
}

#[cfg_attr(test, mockall::automock)]
pub trait ChatService: Send + Sync {
    fn chat(&self, input: ChatInput) -> impl Future<Output = Result<ChatReply, CoreError>> + Send;
}

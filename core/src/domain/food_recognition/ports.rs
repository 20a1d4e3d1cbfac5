use std::future::Future;

use bytes::Bytes;

use crate::domain::common::entities::app_errors::CoreError;

/// Food classification service. Returns the raw response payload; turning it
/// into recognized foods is the parser's job.
#[cfg_attr(test, mockall::automock)]
pub trait FoodClassifier: Send + Sync {
    fn classify(
        &self,
        image: Bytes,
    ) -> impl Future<Output = Result<serde_json::Value, CoreError>> + Send;
}

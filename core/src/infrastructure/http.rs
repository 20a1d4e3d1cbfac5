use reqwest::{Client, Response};
use serde::de::DeserializeOwned;
use tracing::error;

use crate::domain::common::{HttpClientConfig, entities::app_errors::CoreError};

/// Shared reqwest client; a request timeout counts as a transport failure.
pub fn build_http_client(config: &HttpClientConfig) -> Result<Client, CoreError> {
    Client::builder()
        .timeout(config.timeout)
        .build()
        .map_err(|e| {
            error!("Failed to build HTTP client: {}", e);
            CoreError::InternalServerError
        })
}

/// Check the status of a collaborator response, logging and mapping
/// failures to `ExternalServiceError`.
pub async fn ensure_success(
    service: &str,
    response: Result<Response, reqwest::Error>,
) -> Result<Response, CoreError> {
    let response = response.map_err(|e| {
        error!("{} request failed: {}", service, e);
        CoreError::ExternalServiceError(format!("{service} request failed: {e}"))
    })?;

    if !response.status().is_success() {
        let status = response.status();
        let error_text = response.text().await.unwrap_or_default();
        error!("{} returned error: {} - {}", service, status, error_text);
        return Err(CoreError::ExternalServiceError(format!(
            "{service} returned error: {status} - {error_text}"
        )));
    }

    Ok(response)
}

/// [`ensure_success`] followed by JSON decoding of the body.
pub async fn read_json<T: DeserializeOwned>(
    service: &str,
    response: Result<Response, reqwest::Error>,
) -> Result<T, CoreError> {
    let response = ensure_success(service, response).await?;

    response.json::<T>().await.map_err(|e| {
        error!("Failed to parse {} response: {}", service, e);
        CoreError::ExternalServiceError(format!("Failed to parse {service} response: {e}"))
    })
}

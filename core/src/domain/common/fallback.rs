use std::future::Future;

use tracing::warn;

use crate::domain::common::entities::app_errors::CoreError;

/// Awaits a collaborator call and substitutes `fallback` when it fails.
///
/// Every external boundary of the pipeline goes through this so that each
/// failure path degrades to exactly one documented value. Nothing is retried.
pub async fn attempt<T, F>(collaborator: &str, primary: F, fallback: T) -> T
where
    F: Future<Output = Result<T, CoreError>>,
{
    match primary.await {
        Ok(value) => value,
        Err(e) => {
            warn!(collaborator, error = %e, "collaborator failed, using fallback");
            fallback
        }
    }
}

/// Same as [`attempt`] for collaborators that may not be configured at all.
pub async fn attempt_optional<T, F>(collaborator: &str, primary: Option<F>, fallback: T) -> T
where
    F: Future<Output = Result<T, CoreError>>,
{
    match primary {
        Some(primary) => attempt(collaborator, primary, fallback).await,
        None => {
            warn!(collaborator, "collaborator not configured, using fallback");
            fallback
        }
    }
}

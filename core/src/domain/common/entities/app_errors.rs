use thiserror::Error;

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum CoreError {
    #[error("No image was provided")]
    MissingImage,

    #[error("Image could not be decoded: {0}")]
    InvalidImage(String),

    #[error("A message or an image is required")]
    EmptyChatInput,

    #[error("Not found")]
    NotFound,

    #[error("External service error: {0}")]
    ExternalServiceError(String),

    #[error("Internal server error")]
    InternalServerError,
}

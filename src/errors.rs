use std::time::Duration;

use actix_web::{
    error::{JsonPayloadError, QueryPayloadError},
    http::StatusCode,
    HttpRequest, HttpResponse, ResponseError,
};
use serde::Serialize;
use thiserror::Error;

#[derive(Debug, Clone, Error)]
pub enum AppError {
    #[error("Validation error: {0}")]
    ValidationError(String),

    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("{0}")]
    GenerationFailed(String),

    #[error("Upstream model unavailable")]
    UpstreamUnavailable,

    #[error("Configuration error: {0}")]
    ConfigError(String),
}

impl AppError {
    pub fn error_code(&self) -> &'static str {
        match self {
            AppError::ValidationError(_) => "VALIDATION_ERROR",
            AppError::DatabaseError(_) => "DATABASE_ERROR",
            AppError::GenerationFailed(_) => "GENERATION_FAILED",
            AppError::UpstreamUnavailable => "UPSTREAM_UNAVAILABLE",
            AppError::ConfigError(_) => "CONFIG_ERROR",
        }
    }
}

/// Wire shape of every error response.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub detail: String,
    pub code: u16,
}

impl ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        match self {
            AppError::ValidationError(_) => StatusCode::BAD_REQUEST,
            AppError::DatabaseError(_) => StatusCode::INTERNAL_SERVER_ERROR,
            AppError::GenerationFailed(_) => StatusCode::INTERNAL_SERVER_ERROR,
            AppError::UpstreamUnavailable => StatusCode::INTERNAL_SERVER_ERROR,
            AppError::ConfigError(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        if self.status_code().is_server_error() {
            log::error!("request.failed code={} detail={}", self.error_code(), self);
        }
        HttpResponse::build(self.status_code()).json(ErrorResponse {
            detail: self.to_string(),
            code: self.status_code().as_u16(),
        })
    }
}

/// Failures of the question generation pipeline that reach the caller.
///
/// Anything wrong with the model's output is absorbed into a degraded
/// result and never shows up here.
#[derive(Debug, Error)]
pub enum GenerationError {
    #[error("Invalid Category: {0}")]
    InvalidCategory(String),

    #[error("Upstream unavailable: {0}")]
    UpstreamUnavailable(#[from] LlmError),
}

/// Transport and provider failures of the outbound model call.
#[derive(Debug, Error)]
pub enum LlmError {
    #[error("provider request failed: {0}")]
    Provider(String),

    #[error("model call timed out after {}ms", .0.as_millis())]
    Timeout(Duration),
}

impl From<async_openai::error::OpenAIError> for LlmError {
    fn from(err: async_openai::error::OpenAIError) -> Self {
        LlmError::Provider(err.to_string())
    }
}

impl From<GenerationError> for AppError {
    fn from(err: GenerationError) -> Self {
        match err {
            GenerationError::InvalidCategory(_) => AppError::GenerationFailed(err.to_string()),
            GenerationError::UpstreamUnavailable(_) => AppError::UpstreamUnavailable,
        }
    }
}
impl From<sqlx::Error> for AppError {
    fn from(err: sqlx::Error) -> Self {
        AppError::DatabaseError(err.to_string())
    }
}
impl From<validator::ValidationErrors> for AppError {
    fn from(err: validator::ValidationErrors) -> Self {
        AppError::ValidationError(err.to_string())
    }
}

/// Rejects malformed JSON bodies before they reach a handler.
pub fn json_error_handler(err: JsonPayloadError, _req: &HttpRequest) -> actix_web::Error {
    AppError::ValidationError(err.to_string()).into()
}

pub fn query_error_handler(err: QueryPayloadError, _req: &HttpRequest) -> actix_web::Error {
    AppError::ValidationError(err.to_string()).into()
}

pub type AppResult<T> = Result<T, AppError>;

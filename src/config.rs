use std::env;
use std::time::Duration;

use secrecy::{ExposeSecret, SecretString};

use crate::{
    errors::{AppError, AppResult},
    models::dto::request::MAX_NUM_QUESTIONS,
};

pub const DEFAULT_LLM_MODEL: &str = "gemini-2.5-flash";
pub const DEFAULT_LLM_API_BASE: &str = "https://generativelanguage.googleapis.com/v1beta/openai";

#[derive(Clone, Debug)]
pub struct Config {
    pub database_url: String,
    pub llm_api_key: SecretString,
    pub llm_api_base: String,
    pub llm_model: String,
    pub llm_timeout_seconds: u64,
    pub max_questions: u32,
    pub web_server_host: String,
    pub web_server_port: u16,
}

impl Config {
    pub fn from_env() -> Self {
        Self {
            database_url: env::var("DATABASE_URL")
                .unwrap_or_else(|_| "postgres://localhost:5432/quizgen".to_string()),
            llm_api_key: SecretString::from(
                env::var("GEMINI_API_KEY")
                    .or_else(|_| env::var("LLM_API_KEY"))
                    .unwrap_or_default(),
            ),
            llm_api_base: env::var("LLM_API_BASE")
                .unwrap_or_else(|_| DEFAULT_LLM_API_BASE.to_string()),
            llm_model: env::var("LLM_MODEL").unwrap_or_else(|_| DEFAULT_LLM_MODEL.to_string()),
            llm_timeout_seconds: env::var("LLM_TIMEOUT_SECS")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(60),
            max_questions: env::var("MAX_QUESTIONS")
                .ok()
                .and_then(|n| n.parse::<u32>().ok())
                .filter(|n| *n > 0)
                .unwrap_or(MAX_NUM_QUESTIONS),
            web_server_host: env::var("WEB_SERVER_HOST")
                .unwrap_or_else(|_| "127.0.0.1".to_string()),
            web_server_port: env::var("WEB_SERVER_PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(8080),
        }
    }

    pub fn llm_timeout(&self) -> Duration {
        Duration::from_secs(self.llm_timeout_seconds)
    }

    /// Checks the settings the service cannot start without.
    pub fn validate(&self) -> AppResult<()> {
        if self.llm_api_key.expose_secret().trim().is_empty() {
            return Err(AppError::ConfigError(
                "GEMINI_API_KEY (or LLM_API_KEY) must be set".to_string(),
            ));
        }

        if self.llm_model.trim().is_empty() {
            return Err(AppError::ConfigError("LLM_MODEL must not be empty".to_string()));
        }

        if self.llm_timeout_seconds == 0 {
            return Err(AppError::ConfigError(
                "LLM_TIMEOUT_SECS must be greater than zero".to_string(),
            ));
        }

        Ok(())
    }

    #[cfg(test)]
    pub fn test_config() -> Self {
        Self {
            database_url: "postgres://localhost:5432/quizgen-test".to_string(),
            llm_api_key: SecretString::from("test-api-key".to_string()),
            llm_api_base: "http://127.0.0.1:9/v1".to_string(),
            llm_model: "test-model".to_string(),
            llm_timeout_seconds: 5,
            max_questions: MAX_NUM_QUESTIONS,
            web_server_host: "127.0.0.1".to_string(),
            web_server_port: 8080,
        }
    }
}

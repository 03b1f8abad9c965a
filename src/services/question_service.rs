use std::{sync::Arc, time::Duration, time::Instant};

use once_cell::sync::Lazy;
use serde::Deserialize;

use crate::{
    constants::prompts::build_generation_prompt,
    errors::{GenerationError, LlmError},
    models::domain::{Category, GeneratedQuestionSet, GenerationResult, Question},
    services::llm_client::{LlmClient, LlmRequest, LlmResponse},
};

/// JSON schema of `GeneratedQuestionSet`, sent with every model call.
pub static GENERATION_RESPONSE_SCHEMA: Lazy<serde_json::Value> = Lazy::new(|| {
    serde_json::to_value(schemars::schema_for!(GeneratedQuestionSet)).unwrap_or_default()
});

/// Which resolution strategy produced a result.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ResolutionTier {
    Structured,
    TextDecoded,
    Degraded,
}

// Lenient shape for the text pass: unknown keys are ignored and the
// category may be missing, but every question must be complete.
#[derive(Debug, Deserialize)]
struct LooseQuestionSet {
    #[serde(default)]
    category: Option<String>,
    questions: Vec<Question>,
}

pub struct QuestionService {
    client: Arc<dyn LlmClient>,
    model: String,
    timeout: Duration,
    max_questions: u32,
}

impl QuestionService {
    pub fn new(
        client: Arc<dyn LlmClient>,
        model: impl Into<String>,
        timeout: Duration,
        max_questions: u32,
    ) -> Self {
        Self {
            client,
            model: model.into(),
            timeout,
            max_questions: max_questions.max(1),
        }
    }

    /// Generates `count` questions for `category`.
    ///
    /// Fails only for an unknown category (before any model call) or when
    /// the model call itself fails. Unusable model output yields a degraded
    /// result carrying the raw text.
    pub async fn generate(
        &self,
        category: &str,
        count: u32,
    ) -> Result<GenerationResult, GenerationError> {
        let category: Category = category.parse()?;
        let count = self.clamp_count(count);

        log::info!("gen.start category={} requested={}", category, count);
        let start = Instant::now();

        let response = self.call_model(category, count).await?;

        log::info!(
            "gen.model_response category={} latency_ms={}",
            category,
            start.elapsed().as_millis()
        );

        let (result, tier) = Self::resolve(category, count, response);
        log::debug!("gen.resolved category={} tier={:?}", category, tier);
        Ok(result)
    }

    pub fn clamp_count(&self, count: u32) -> u32 {
        count.clamp(1, self.max_questions)
    }

    async fn call_model(&self, category: Category, count: u32) -> Result<LlmResponse, LlmError> {
        let request = LlmRequest {
            model: self.model.clone(),
            prompt: build_generation_prompt(category, count),
            response_schema: GENERATION_RESPONSE_SCHEMA.clone(),
        };

        tokio::time::timeout(self.timeout, self.client.complete(request))
            .await
            .map_err(|_| LlmError::Timeout(self.timeout))?
    }

    /// Turns a model response into a result, trying the client's structured
    /// decode, then a manual decode of the text, then the degraded envelope.
    pub fn resolve(
        category: Category,
        count: u32,
        response: LlmResponse,
    ) -> (GenerationResult, ResolutionTier) {
        if let Some(parsed) = response.parsed {
            let result = Self::finish(category, count, &parsed.category, parsed.questions);
            log::info!(
                "gen.parsed_success category={} questions={}",
                category,
                result.questions.len()
            );
            return (result, ResolutionTier::Structured);
        }

        match Self::decode_text(&response.text) {
            Ok(loose) => {
                let model_category = loose.category.unwrap_or_default();
                let result = Self::finish(category, count, &model_category, loose.questions);
                log::info!(
                    "gen.json_success category={} questions={}",
                    category,
                    result.questions.len()
                );
                (result, ResolutionTier::TextDecoded)
            }
            Err(err) => {
                log::error!("gen.parse_error category={} error={}", category, err);
                (
                    GenerationResult::degraded(category, response.text),
                    ResolutionTier::Degraded,
                )
            }
        }
    }

    fn decode_text(text: &str) -> Result<LooseQuestionSet, serde_json::Error> {
        serde_json::from_str(strip_code_fence(text))
    }

    fn finish(
        category: Category,
        count: u32,
        model_category: &str,
        mut questions: Vec<Question>,
    ) -> GenerationResult {
        let model_category = model_category.trim();
        if !model_category.is_empty() && model_category != category.as_str() {
            log::warn!(
                "gen.category_mismatch requested={} returned={}",
                category,
                model_category
            );
        }

        let requested = count as usize;
        if questions.len() > requested {
            questions.truncate(requested);
        } else if questions.len() < requested {
            log::warn!(
                "gen.short_response category={} requested={} returned={}",
                category,
                requested,
                questions.len()
            );
        }

        GenerationResult::new(category, questions)
    }
}

/// Strips a surrounding Markdown code fence, if any.
fn strip_code_fence(text: &str) -> &str {
    let trimmed = text.trim();
    let Some(rest) = trimmed.strip_prefix("```") else {
        return trimmed;
    };
    let Some(body) = rest.strip_suffix("```") else {
        return trimmed;
    };
    // drop the info string ("json") on the opening fence line
    match body.split_once('\n') {
        Some((_, inner)) => inner.trim(),
        None => body.trim(),
    }
}

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::models::domain::category::Category;

#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize, JsonSchema)]
pub struct Question {
    pub question: String,
    pub options: Vec<String>, // four expected, not enforced
    pub answer: String,
}

/// The document the model is instructed to return.
///
/// Decoding is strict: both fields must be present and nothing else is
/// allowed, which is what separates a structured response from one that
/// only decodes after the lenient text pass.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize, JsonSchema)]
#[serde(deny_unknown_fields)]
pub struct GeneratedQuestionSet {
    pub category: String,
    pub questions: Vec<Question>,
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct GenerationResult {
    pub category: Category,
    pub questions: Vec<Question>,
    // Only set when the model output could not be parsed at all.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub raw: Option<String>,
}

impl GenerationResult {
    pub fn new(category: Category, questions: Vec<Question>) -> Self {
        Self {
            category,
            questions,
            raw: None,
        }
    }

    pub fn degraded(category: Category, raw: impl Into<String>) -> Self {
        Self {
            category,
            questions: Vec::new(),
            raw: Some(raw.into()),
        }
    }

    pub fn is_degraded(&self) -> bool {
        self.raw.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_question() -> Question {
        Question {
            question: "What is the median of 1, 3, 9?".to_string(),
            options: vec!["1".into(), "3".into(), "4.3".into(), "9".into()],
            answer: "3".to_string(),
        }
    }

    #[test]
    fn generation_result_omits_raw_when_parsed() {
        let result = GenerationResult::new(Category::Statistics, vec![sample_question()]);
        let json = serde_json::to_value(&result).unwrap();

        assert_eq!(json["category"], "statistics");
        assert_eq!(json["questions"].as_array().unwrap().len(), 1);
        assert!(json.get("raw").is_none());
    }

    #[test]
    fn degraded_result_keeps_empty_question_list() {
        let result = GenerationResult::degraded(Category::Specialized, "not json");
        let json = serde_json::to_value(&result).unwrap();

        assert!(result.is_degraded());
        assert_eq!(json["questions"], serde_json::json!([]));
        assert_eq!(json["raw"], "not json");
    }

    #[test]
    fn generated_set_rejects_missing_category() {
        let parsed = serde_json::from_str::<GeneratedQuestionSet>(r#"{"questions": []}"#);
        assert!(parsed.is_err());
    }

    #[test]
    fn generated_set_rejects_unknown_fields() {
        let parsed = serde_json::from_str::<GeneratedQuestionSet>(
            r#"{"category": "statistics", "questions": [], "notes": "extra"}"#,
        );
        assert!(parsed.is_err());
    }

    #[test]
    fn question_requires_answer() {
        let parsed = serde_json::from_str::<Question>(r#"{"question": "q", "options": []}"#);
        assert!(parsed.is_err());
    }
}

use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError};

use crate::models::domain::Category;

pub const DEFAULT_NUM_QUESTIONS: u32 = 10;
pub const MAX_NUM_QUESTIONS: u32 = 50;

fn default_num_questions() -> u32 {
    DEFAULT_NUM_QUESTIONS
}

#[derive(Debug, Clone, Deserialize, Serialize, Validate)]
pub struct GenerateQuestionsRequest {
    /// Checked against the catalog by the generation engine.
    pub category: String,

    /// Upper bound is `Config::max_questions`, enforced by the handler.
    #[serde(default = "default_num_questions")]
    #[validate(range(min = 1))]
    pub num_questions: u32,
}

#[derive(Debug, Clone, Deserialize, Serialize, Validate)]
pub struct CreateProjectRequest {
    #[validate(length(min = 1, max = 200))]
    pub name: String,

    #[validate(length(min = 1, max = 100))]
    pub owner: String,

    #[validate(length(max = 2000))]
    pub description: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ProjectQuery {
    pub owner: Option<String>,
    pub name: Option<String>,
}

#[derive(Debug, Clone, Deserialize, Serialize, Validate)]
#[validate(schema(function = "validate_share_record"))]
pub struct CreateShareRecordRequest {
    #[validate(length(min = 1, max = 100))]
    pub username: String,

    pub category: String,

    #[validate(range(min = 0))]
    pub score: i32,

    #[validate(range(min = 1))]
    pub total: i32,
}

fn validate_share_record(request: &CreateShareRecordRequest) -> Result<(), ValidationError> {
    if request.category.parse::<Category>().is_err() {
        return Err(ValidationError::new("unknown_category")
            .with_message("category is not a known quiz category".into()));
    }
    if request.score > request.total {
        return Err(ValidationError::new("score_exceeds_total")
            .with_message("score cannot be greater than total".into()));
    }
    Ok(())
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ShareRecordQuery {
    pub username: Option<String>,
    pub category: Option<String>,
}

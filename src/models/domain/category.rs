use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::errors::GenerationError;

/// Quiz subject areas the service can generate questions for.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    AppliedMath,
    Statistics,
    VerbalReasoning,
    GeneralKnowledge,
    Specialized,
}

impl Category {
    pub const ALL: [Category; 5] = [
        Category::AppliedMath,
        Category::Statistics,
        Category::VerbalReasoning,
        Category::GeneralKnowledge,
        Category::Specialized,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Category::AppliedMath => "applied_math",
            Category::Statistics => "statistics",
            Category::VerbalReasoning => "verbal_reasoning",
            Category::GeneralKnowledge => "general_knowledge",
            Category::Specialized => "specialized",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Category {
    type Err = GenerationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Category::ALL
            .into_iter()
            .find(|category| category.as_str() == s)
            .ok_or_else(|| GenerationError::InvalidCategory(s.to_string()))
    }
}

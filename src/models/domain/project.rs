use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::models::dto::request::{CreateProjectRequest, ProjectQuery};

#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize, sqlx::FromRow)]
pub struct Project {
    pub id: i64, // assigned by the store, increases with insertion order
    pub name: String,
    pub owner: String,
    pub description: Option<String>,
    pub created_at: DateTime<Utc>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NewProject {
    pub name: String,
    pub owner: String,
    pub description: Option<String>,
}

impl NewProject {
    pub fn from_request(request: CreateProjectRequest) -> Self {
        NewProject {
            name: request.name.trim().to_string(),
            owner: request.owner.trim().to_string(),
            description: request
                .description
                .map(|d| d.trim().to_string())
                .filter(|d| !d.is_empty()),
        }
    }
}

/// Equality filters for listing projects. `None` means unconstrained.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ProjectFilter {
    pub owner: Option<String>,
    pub name: Option<String>,
}

impl ProjectFilter {
    pub fn matches(&self, project: &Project) -> bool {
        self.owner.as_ref().map_or(true, |owner| &project.owner == owner)
            && self.name.as_ref().map_or(true, |name| &project.name == name)
    }
}

impl From<ProjectQuery> for ProjectFilter {
    fn from(query: ProjectQuery) -> Self {
        ProjectFilter {
            owner: query.owner.filter(|o| !o.is_empty()),
            name: query.name.filter(|n| !n.is_empty()),
        }
    }
}

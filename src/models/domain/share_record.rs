use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::models::dto::request::{CreateShareRecordRequest, ShareRecordQuery};

/// A quiz outcome a user chose to share.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize, sqlx::FromRow)]
pub struct ShareRecord {
    pub id: i64,
    pub username: String,
    pub category: String,
    pub score: i32,
    pub total: i32,
    pub created_at: DateTime<Utc>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NewShareRecord {
    pub username: String,
    pub category: String,
    pub score: i32,
    pub total: i32,
}

impl NewShareRecord {
    pub fn from_request(request: CreateShareRecordRequest) -> Self {
        NewShareRecord {
            username: request.username.trim().to_string(),
            category: request.category,
            score: request.score,
            total: request.total,
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ShareRecordFilter {
    pub username: Option<String>,
    pub category: Option<String>,
}

impl ShareRecordFilter {
    pub fn matches(&self, record: &ShareRecord) -> bool {
        self.username
            .as_ref()
            .map_or(true, |username| &record.username == username)
            && self
                .category
                .as_ref()
                .map_or(true, |category| &record.category == category)
    }
}

impl From<ShareRecordQuery> for ShareRecordFilter {
    fn from(query: ShareRecordQuery) -> Self {
        ShareRecordFilter {
            username: query.username.filter(|u| !u.is_empty()),
            category: query.category.filter(|c| !c.is_empty()),
        }
    }
}

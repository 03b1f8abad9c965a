use async_trait::async_trait;
use sqlx::{PgPool, Postgres, QueryBuilder};

use crate::{
    db::Database,
    errors::AppResult,
    models::domain::{NewShareRecord, ShareRecord, ShareRecordFilter},
    repositories::filters::push_equality_filters,
};

const SHARE_RECORD_COLUMNS: &str = "id, username, category, score, total, created_at";

#[async_trait]
pub trait ShareRecordRepository: Send + Sync {
    async fn create(&self, record: NewShareRecord) -> AppResult<ShareRecord>;
    /// Newest first.
    async fn list(&self, filter: &ShareRecordFilter) -> AppResult<Vec<ShareRecord>>;
}

pub struct PgShareRecordRepository {
    pool: PgPool,
}

impl PgShareRecordRepository {
    pub fn new(db: &Database) -> Self {
        Self {
            pool: db.pool().clone(),
        }
    }

    fn list_query(filter: &ShareRecordFilter) -> QueryBuilder<'static, Postgres> {
        let mut builder =
            QueryBuilder::new(format!("SELECT {SHARE_RECORD_COLUMNS} FROM share_records"));
        push_equality_filters(
            &mut builder,
            &[
                ("username", filter.username.as_deref()),
                ("category", filter.category.as_deref()),
            ],
        );
        builder.push(" ORDER BY id DESC");
        builder
    }
}

#[async_trait]
impl ShareRecordRepository for PgShareRecordRepository {
    async fn create(&self, record: NewShareRecord) -> AppResult<ShareRecord> {
        let created = sqlx::query_as::<_, ShareRecord>(&format!(
            "INSERT INTO share_records (username, category, score, total) VALUES ($1, $2, $3, $4) RETURNING {SHARE_RECORD_COLUMNS}"
        ))
        .bind(&record.username)
        .bind(&record.category)
        .bind(record.score)
        .bind(record.total)
        .fetch_one(&self.pool)
        .await?;

        log::info!(
            "share_record.created id={} username={} category={}",
            created.id,
            created.username,
            created.category
        );
        Ok(created)
    }

    async fn list(&self, filter: &ShareRecordFilter) -> AppResult<Vec<ShareRecord>> {
        let mut builder = Self::list_query(filter);
        let records = builder
            .build_query_as::<ShareRecord>()
            .fetch_all(&self.pool)
            .await?;
        Ok(records)
    }
}

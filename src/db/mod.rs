use sqlx::{postgres::PgPoolOptions, PgPool};
use std::time::Duration;

use crate::{config::Config, errors::AppResult};

const SCHEMA_STATEMENTS: [&str; 4] = [
    r#"
    CREATE TABLE IF NOT EXISTS projects (
        id          BIGSERIAL PRIMARY KEY,
        name        TEXT NOT NULL,
        owner       TEXT NOT NULL,
        description TEXT,
        created_at  TIMESTAMPTZ NOT NULL DEFAULT NOW()
    )
    "#,
    "CREATE INDEX IF NOT EXISTS idx_projects_owner ON projects (owner)",
    r#"
    CREATE TABLE IF NOT EXISTS share_records (
        id          BIGSERIAL PRIMARY KEY,
        username    TEXT NOT NULL,
        category    TEXT NOT NULL,
        score       INTEGER NOT NULL,
        total       INTEGER NOT NULL,
        created_at  TIMESTAMPTZ NOT NULL DEFAULT NOW()
    )
    "#,
    "CREATE INDEX IF NOT EXISTS idx_share_records_username ON share_records (username)",
];

#[derive(Clone)]
pub struct Database {
    pool: PgPool,
}

impl Database {
    pub async fn connect(config: &Config) -> AppResult<Self> {
        let pool = Self::pool_options().connect(&config.database_url).await?;

        sqlx::query("SELECT 1").execute(&pool).await?;
        log::info!("Connected to PostgreSQL");

        Ok(Self { pool })
    }

    /// Builds the pool without opening a connection; the first query connects.
    pub fn connect_lazy(config: &Config) -> AppResult<Self> {
        let pool = Self::pool_options().connect_lazy(&config.database_url)?;
        Ok(Self { pool })
    }

    fn pool_options() -> PgPoolOptions {
        PgPoolOptions::new()
            .max_connections(10)
            .min_connections(1)
            .acquire_timeout(Duration::from_secs(5))
    }

    /// Creates the record tables if they do not exist yet.
    pub async fn ensure_schema(&self) -> AppResult<()> {
        for statement in SCHEMA_STATEMENTS {
            sqlx::query(statement).execute(&self.pool).await?;
        }
        log::info!("Record store schema is up to date");
        Ok(())
    }

    pub async fn health_check(&self) -> AppResult<()> {
        sqlx::query("SELECT 1").execute(&self.pool).await?;
        Ok(())
    }

    pub fn pool(&self) -> &PgPool {
        &self.pool
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_database_structure() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<Database>();
    }

    #[test]
    fn test_schema_creates_both_record_tables() {
        let ddl = SCHEMA_STATEMENTS.join("\n");
        assert!(ddl.contains("CREATE TABLE IF NOT EXISTS projects"));
        assert!(ddl.contains("CREATE TABLE IF NOT EXISTS share_records"));
        assert!(ddl.contains("BIGSERIAL PRIMARY KEY"));
    }

    #[tokio::test]
    async fn test_connect_lazy_does_not_touch_the_network() {
        let db = Database::connect_lazy(&Config::test_config());
        assert!(db.is_ok());
    }
}

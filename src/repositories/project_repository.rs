use async_trait::async_trait;
use sqlx::{PgPool, Postgres, QueryBuilder};

use crate::{
    db::Database,
    errors::AppResult,
    models::domain::{NewProject, Project, ProjectFilter},
    repositories::filters::push_equality_filters,
};

const PROJECT_COLUMNS: &str = "id, name, owner, description, created_at";

#[async_trait]
pub trait ProjectRepository: Send + Sync {
    async fn create(&self, project: NewProject) -> AppResult<Project>;
    /// Newest first.
    async fn list(&self, filter: &ProjectFilter) -> AppResult<Vec<Project>>;
}

pub struct PgProjectRepository {
    pool: PgPool,
}

impl PgProjectRepository {
    pub fn new(db: &Database) -> Self {
        Self {
            pool: db.pool().clone(),
        }
    }

    fn list_query(filter: &ProjectFilter) -> QueryBuilder<'static, Postgres> {
        let mut builder = QueryBuilder::new(format!("SELECT {PROJECT_COLUMNS} FROM projects"));
        push_equality_filters(
            &mut builder,
            &[
                ("owner", filter.owner.as_deref()),
                ("name", filter.name.as_deref()),
            ],
        );
        builder.push(" ORDER BY id DESC");
        builder
    }
}

#[async_trait]
impl ProjectRepository for PgProjectRepository {
    async fn create(&self, project: NewProject) -> AppResult<Project> {
        let created = sqlx::query_as::<_, Project>(&format!(
            "INSERT INTO projects (name, owner, description) VALUES ($1, $2, $3) RETURNING {PROJECT_COLUMNS}"
        ))
        .bind(&project.name)
        .bind(&project.owner)
        .bind(&project.description)
        .fetch_one(&self.pool)
        .await?;

        log::info!("project.created id={} owner={}", created.id, created.owner);
        Ok(created)
    }

    async fn list(&self, filter: &ProjectFilter) -> AppResult<Vec<Project>> {
        let mut builder = Self::list_query(filter);
        let projects = builder
            .build_query_as::<Project>()
            .fetch_all(&self.pool)
            .await?;
        Ok(projects)
    }
}

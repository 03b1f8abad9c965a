use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::RwLock;

use crate::{
    errors::AppResult,
    models::domain::{
        NewProject, NewShareRecord, Project, ProjectFilter, Question, ShareRecord,
        ShareRecordFilter,
    },
    repositories::{ProjectRepository, ShareRecordRepository},
};

#[cfg(test)]
pub mod fixtures {
    use super::*;

    /// Creates `count` well-formed four-option questions
    pub fn sample_questions(count: usize) -> Vec<Question> {
        (1..=count)
            .map(|n| Question {
                question: format!("Sample question {n}?"),
                options: vec![
                    format!("{n}a"),
                    format!("{n}b"),
                    format!("{n}c"),
                    format!("{n}d"),
                ],
                answer: format!("{n}a"),
            })
            .collect()
    }
}

/// Keeps rows in insertion order and hands out increasing ids, like the
/// `BIGSERIAL` tables do.
#[derive(Default)]
pub struct InMemoryProjectRepository {
    projects: Arc<RwLock<Vec<Project>>>,
}

#[async_trait]
impl ProjectRepository for InMemoryProjectRepository {
    async fn create(&self, project: NewProject) -> AppResult<Project> {
        let mut projects = self.projects.write().await;
        let created = Project {
            id: projects.len() as i64 + 1,
            name: project.name,
            owner: project.owner,
            description: project.description,
            created_at: Utc::now(),
        };
        projects.push(created.clone());
        Ok(created)
    }

    async fn list(&self, filter: &ProjectFilter) -> AppResult<Vec<Project>> {
        let projects = self.projects.read().await;
        Ok(projects
            .iter()
            .rev()
            .filter(|p| filter.matches(p))
            .cloned()
            .collect())
    }
}

#[derive(Default)]
pub struct InMemoryShareRecordRepository {
    records: Arc<RwLock<Vec<ShareRecord>>>,
}

#[async_trait]
impl ShareRecordRepository for InMemoryShareRecordRepository {
    async fn create(&self, record: NewShareRecord) -> AppResult<ShareRecord> {
        let mut records = self.records.write().await;
        let created = ShareRecord {
            id: records.len() as i64 + 1,
            username: record.username,
            category: record.category,
            score: record.score,
            total: record.total,
            created_at: Utc::now(),
        };
        records.push(created.clone());
        Ok(created)
    }

    async fn list(&self, filter: &ShareRecordFilter) -> AppResult<Vec<ShareRecord>> {
        let records = self.records.read().await;
        Ok(records
            .iter()
            .rev()
            .filter(|r| filter.matches(r))
            .cloned()
            .collect())
    }
}

#[cfg(test)]
pub mod test_helpers {
    use super::*;
    use actix_web::http::StatusCode;

    use crate::{
        app_state::AppState, config::Config, db::Database, services::llm_client::MockLlmClient,
    };

    /// Builds an `AppState` around a mocked model client and in-memory stores.
    /// The database pool is lazy and never connects unless a test asks it to.
    pub fn test_state(llm_client: MockLlmClient) -> AppState {
        test_state_with_config(llm_client, Config::test_config())
    }

    pub fn test_state_with_config(llm_client: MockLlmClient, config: Config) -> AppState {
        let db = Database::connect_lazy(&config).expect("lazy pool");
        AppState::from_parts(
            config,
            db,
            Arc::new(llm_client),
            Arc::new(InMemoryProjectRepository::default()),
            Arc::new(InMemoryShareRecordRepository::default()),
        )
    }

    /// Asserts that a status code represents an error (4xx or 5xx)
    pub fn assert_error_status(status: StatusCode) {
        assert!(
            status.is_client_error() || status.is_server_error(),
            "Expected error status, got: {}",
            status
        );
    }

    /// Asserts that a status code represents success (2xx)
    pub fn assert_success_status(status: StatusCode) {
        assert!(
            status.is_success(),
            "Expected success status, got: {}",
            status
        );
    }
}

#[cfg(test)]
mod tests {
    use super::fixtures::*;
    use super::*;

    #[test]
    fn test_fixtures_sample_questions() {
        let questions = sample_questions(3);
        assert_eq!(questions.len(), 3);
        assert!(questions.iter().all(|q| q.options.len() == 4));
        assert!(questions.iter().all(|q| q.options.contains(&q.answer)));
    }

    #[tokio::test]
    async fn test_in_memory_projects_are_newest_first() {
        let repo = InMemoryProjectRepository::default();
        for name in ["one", "two"] {
            repo.create(NewProject {
                name: name.to_string(),
                owner: "ada".to_string(),
                description: None,
            })
            .await
            .unwrap();
        }

        let listed = repo.list(&ProjectFilter::default()).await.unwrap();
        assert_eq!(listed[0].name, "two");
        assert!(listed[0].id > listed[1].id);
    }
}

use std::sync::Arc;

use crate::{
    config::Config,
    db::Database,
    errors::AppResult,
    repositories::{
        PgProjectRepository, PgShareRecordRepository, ProjectRepository, ShareRecordRepository,
    },
    services::{
        llm_client::{LlmClient, OpenAiCompatibleClient},
        project_service::ProjectService,
        question_service::QuestionService,
        share_record_service::ShareRecordService,
    },
};

#[derive(Clone)]
pub struct AppState {
    pub question_service: Arc<QuestionService>,
    pub project_service: Arc<ProjectService>,
    pub share_record_service: Arc<ShareRecordService>,
    pub db: Database,
    pub config: Arc<Config>,
}

impl AppState {
    pub async fn new(config: Config) -> AppResult<Self> {
        let db = Database::connect(&config).await?;
        db.ensure_schema().await?;

        let llm_client: Arc<dyn LlmClient> = Arc::new(OpenAiCompatibleClient::new(&config));
        let project_repository = Arc::new(PgProjectRepository::new(&db));
        let share_record_repository = Arc::new(PgShareRecordRepository::new(&db));

        Ok(Self::from_parts(
            config,
            db,
            llm_client,
            project_repository,
            share_record_repository,
        ))
    }

    /// Wires the services around already-built collaborators.
    pub fn from_parts(
        config: Config,
        db: Database,
        llm_client: Arc<dyn LlmClient>,
        project_repository: Arc<dyn ProjectRepository>,
        share_record_repository: Arc<dyn ShareRecordRepository>,
    ) -> Self {
        let question_service = Arc::new(QuestionService::new(
            llm_client,
            config.llm_model.clone(),
            config.llm_timeout(),
            config.max_questions,
        ));

        Self {
            question_service,
            project_service: Arc::new(ProjectService::new(project_repository)),
            share_record_service: Arc::new(ShareRecordService::new(share_record_repository)),
            db,
            config: Arc::new(config),
        }
    }
}

use std::sync::Arc;

use validator::Validate;

use crate::{
    errors::AppResult,
    models::{
        domain::{NewProject, Project, ProjectFilter},
        dto::request::CreateProjectRequest,
    },
    repositories::ProjectRepository,
};

pub struct ProjectService {
    repository: Arc<dyn ProjectRepository>,
}

impl ProjectService {
    pub fn new(repository: Arc<dyn ProjectRepository>) -> Self {
        Self { repository }
    }

    pub async fn create_project(&self, request: CreateProjectRequest) -> AppResult<Project> {
        request.validate()?;
        self.repository
            .create(NewProject::from_request(request))
            .await
    }

    pub async fn list_projects(&self, filter: ProjectFilter) -> AppResult<Vec<Project>> {
        self.repository.list(&filter).await
    }
}

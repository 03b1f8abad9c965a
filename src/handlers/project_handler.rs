use actix_web::{get, post, web, HttpResponse};

use crate::{
    app_state::AppState,
    errors::AppError,
    models::dto::request::{CreateProjectRequest, ProjectQuery},
};

#[post("/projects")]
pub async fn create_project(
    state: web::Data<AppState>,
    request: web::Json<CreateProjectRequest>,
) -> Result<HttpResponse, AppError> {
    let project = state
        .project_service
        .create_project(request.into_inner())
        .await?;
    Ok(HttpResponse::Created().json(project))
}

#[get("/projects")]
pub async fn list_projects(
    state: web::Data<AppState>,
    query: web::Query<ProjectQuery>,
) -> Result<HttpResponse, AppError> {
    let projects = state
        .project_service
        .list_projects(query.into_inner().into())
        .await?;
    Ok(HttpResponse::Ok().json(projects))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        models::domain::Project,
        services::llm_client::MockLlmClient,
        test_utils::test_helpers::{assert_success_status, test_state},
    };
    use actix_web::{http::StatusCode, test, App};

    #[actix_web::test]
    async fn test_create_then_list_projects_newest_first() {
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(test_state(MockLlmClient::new())))
                .configure(crate::handlers::configure),
        )
        .await;

        for (name, owner) in [("alpha", "ada"), ("beta", "ada"), ("gamma", "grace")] {
            let req = test::TestRequest::post()
                .uri("/projects")
                .set_json(serde_json::json!({ "name": name, "owner": owner }))
                .to_request();
            let resp = test::call_service(&app, req).await;
            assert_eq!(resp.status(), StatusCode::CREATED);
        }

        let req = test::TestRequest::get()
            .uri("/projects?owner=ada")
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_success_status(resp.status());

        let projects: Vec<Project> = test::read_body_json(resp).await;
        let names: Vec<&str> = projects.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, vec!["beta", "alpha"]);
    }

    #[actix_web::test]
    async fn test_create_project_validation_error() {
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(test_state(MockLlmClient::new())))
                .configure(crate::handlers::configure),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/projects")
            .set_json(serde_json::json!({ "name": "", "owner": "ada" }))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    }
}

use actix_web::{post, web, HttpRequest, HttpResponse};
use validator::Validate;

use crate::{
    app_state::AppState, errors::AppError, middleware::get_request_id,
    models::dto::request::GenerateQuestionsRequest,
};

#[post("/generate")]
pub async fn generate(
    req: HttpRequest,
    state: web::Data<AppState>,
    request: web::Json<GenerateQuestionsRequest>,
) -> Result<HttpResponse, AppError> {
    let request = request.into_inner();
    request.validate()?;
    if request.num_questions > state.config.max_questions {
        return Err(AppError::ValidationError(format!(
            "num_questions must be at most {}",
            state.config.max_questions
        )));
    }
    let request_id = get_request_id(&req).unwrap_or_else(|| "-".to_string());

    log::info!(
        "generate.called id={} category={} num_questions={}",
        request_id,
        request.category,
        request.num_questions
    );

    match state
        .question_service
        .generate(&request.category, request.num_questions)
        .await
    {
        Ok(result) => {
            log::info!(
                "generate.success id={} category={} num_questions={} returned={} degraded={}",
                request_id,
                request.category,
                request.num_questions,
                result.questions.len(),
                result.is_degraded()
            );
            Ok(HttpResponse::Ok().json(result))
        }
        Err(err) => {
            log::error!(
                "generate.error id={} category={} num_questions={} error={}",
                request_id,
                request.category,
                request.num_questions,
                err
            );
            Err(err.into())
        }
    }
}

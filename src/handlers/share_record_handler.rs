use actix_web::{get, post, web, HttpResponse};

use crate::{
    app_state::AppState,
    errors::AppError,
    models::dto::request::{CreateShareRecordRequest, ShareRecordQuery},
};

#[post("/share-records")]
pub async fn create_share_record(
    state: web::Data<AppState>,
    request: web::Json<CreateShareRecordRequest>,
) -> Result<HttpResponse, AppError> {
    let record = state
        .share_record_service
        .create_share_record(request.into_inner())
        .await?;
    Ok(HttpResponse::Created().json(record))
}

#[get("/share-records")]
pub async fn list_share_records(
    state: web::Data<AppState>,
    query: web::Query<ShareRecordQuery>,
) -> Result<HttpResponse, AppError> {
    let records = state
        .share_record_service
        .list_share_records(query.into_inner().into())
        .await?;
    Ok(HttpResponse::Ok().json(records))
}

pub mod health_handler;
pub mod project_handler;
pub mod question_handler;
pub mod share_record_handler;

use actix_web::web;

use crate::errors::{json_error_handler, query_error_handler};

pub use health_handler::{health_check, health_check_ready};
pub use project_handler::{create_project, list_projects};
pub use question_handler::generate;
pub use share_record_handler::{create_share_record, list_share_records};

/// Registers every route plus the extractor error handlers.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.app_data(web::JsonConfig::default().error_handler(json_error_handler))
        .app_data(web::QueryConfig::default().error_handler(query_error_handler))
        .service(health_check)
        .service(health_check_ready)
        .service(generate)
        .service(create_project)
        .service(list_projects)
        .service(create_share_record)
        .service(list_share_records);
}

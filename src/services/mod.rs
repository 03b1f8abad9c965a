pub mod llm_client;
pub mod project_service;
pub mod question_service;
pub mod share_record_service;

pub mod filters;
pub mod project_repository;
pub mod share_record_repository;

pub use project_repository::{PgProjectRepository, ProjectRepository};
pub use share_record_repository::{PgShareRecordRepository, ShareRecordRepository};

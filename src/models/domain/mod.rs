pub mod category;
pub mod project;
pub mod question;
pub mod share_record;

pub use category::Category;
pub use project::{NewProject, Project, ProjectFilter};
pub use question::{GeneratedQuestionSet, GenerationResult, Question};
pub use share_record::{NewShareRecord, ShareRecord, ShareRecordFilter};

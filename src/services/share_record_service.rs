use std::sync::Arc;

use validator::Validate;

use crate::{
    errors::AppResult,
    models::{
        domain::{NewShareRecord, ShareRecord, ShareRecordFilter},
        dto::request::CreateShareRecordRequest,
    },
    repositories::ShareRecordRepository,
};

pub struct ShareRecordService {
    repository: Arc<dyn ShareRecordRepository>,
}

impl ShareRecordService {
    pub fn new(repository: Arc<dyn ShareRecordRepository>) -> Self {
        Self { repository }
    }

    pub async fn create_share_record(
        &self,
        request: CreateShareRecordRequest,
    ) -> AppResult<ShareRecord> {
        request.validate()?;
        self.repository
            .create(NewShareRecord::from_request(request))
            .await
    }

    pub async fn list_share_records(
        &self,
        filter: ShareRecordFilter,
    ) -> AppResult<Vec<ShareRecord>> {
        self.repository.list(&filter).await
    }
}

use serde_json::Value;

use super::{ApiRequest, BaseClient};
use crate::error::Result;

pub struct SyncClient<'a> {
    base: &'a BaseClient,
}

impl<'a> SyncClient<'a> {
    pub fn new(base: &'a BaseClient) -> Self {
        Self { base }
    }

    pub fn status(&self) -> Result<Value> {
        self.base.fetch(&ApiRequest::get("/api/sync/status"))
    }

    /// Checksums of assets already on the server, for upload deduplication.
    pub fn upload_checksums(&self, dto: &Value) -> Result<Value> {
        self.base
            .fetch(&ApiRequest::post("/api/sync/checksums").json_value(dto.clone()))
    }
}

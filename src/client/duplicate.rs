use serde_json::Value;

use super::{ApiRequest, BaseClient};
use crate::error::Result;
use crate::models::BulkIdsDto;

pub struct DuplicatesClient<'a> {
    base: &'a BaseClient,
}

impl<'a> DuplicatesClient<'a> {
    pub fn new(base: &'a BaseClient) -> Self {
        Self { base }
    }

    /// Groups of assets the server considers duplicates of each other.
    pub fn list(&self) -> Result<Vec<Value>> {
        self.base.fetch(&ApiRequest::get("/api/duplicates"))
    }

    pub fn delete_many(&self, dto: &BulkIdsDto) -> Result<()> {
        self.base
            .send(&ApiRequest::delete("/api/duplicates").json(dto)?)
    }

    pub fn delete(&self, duplicate_id: &str) -> Result<()> {
        self.base
            .send(&ApiRequest::delete(format!("/api/duplicates/{duplicate_id}")))
    }
}

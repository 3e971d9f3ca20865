use serde_json::Value;

use super::{ApiRequest, BaseClient};
use crate::error::Result;

pub struct TagsClient<'a> {
    base: &'a BaseClient,
}

impl<'a> TagsClient<'a> {
    pub fn new(base: &'a BaseClient) -> Self {
        Self { base }
    }

    pub fn list(&self) -> Result<Vec<Value>> {
        self.base.fetch(&ApiRequest::get("/api/tags"))
    }

    pub fn create(&self, dto: &Value) -> Result<Value> {
        self.base
            .fetch(&ApiRequest::post("/api/tags").json_value(dto.clone()))
    }

    pub fn get(&self, tag_id: &str) -> Result<Value> {
        self.base.fetch(&ApiRequest::get(format!("/api/tags/{tag_id}")))
    }

    pub fn update(&self, tag_id: &str, dto: &Value) -> Result<Value> {
        self.base
            .fetch(&ApiRequest::patch(format!("/api/tags/{tag_id}")).json_value(dto.clone()))
    }

    pub fn delete(&self, tag_id: &str) -> Result<()> {
        self.base.send(&ApiRequest::delete(format!("/api/tags/{tag_id}")))
    }

    /// Assets carrying the tag.
    pub fn assets(&self, tag_id: &str) -> Result<Vec<Value>> {
        self.base
            .fetch(&ApiRequest::get(format!("/api/tags/{tag_id}/assets")))
    }

    pub fn merge(&self, tag_id: &str, dto: &Value) -> Result<Value> {
        self.base
            .fetch(&ApiRequest::post(format!("/api/tags/{tag_id}/merge")).json_value(dto.clone()))
    }
}

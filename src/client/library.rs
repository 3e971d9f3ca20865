use serde_json::Value;

use super::{ApiRequest, BaseClient};
use crate::error::Result;

/// External libraries. Admin only.
pub struct LibrariesClient<'a> {
    base: &'a BaseClient,
}

impl<'a> LibrariesClient<'a> {
    pub fn new(base: &'a BaseClient) -> Self {
        Self { base }
    }

    pub fn list(&self) -> Result<Vec<Value>> {
        self.base.fetch(&ApiRequest::get("/api/libraries"))
    }

    pub fn create(&self, dto: &Value) -> Result<Value> {
        self.base
            .fetch(&ApiRequest::post("/api/libraries").json_value(dto.clone()))
    }

    pub fn get(&self, library_id: &str) -> Result<Value> {
        self.base
            .fetch(&ApiRequest::get(format!("/api/libraries/{library_id}")))
    }

    pub fn update(&self, library_id: &str, dto: &Value) -> Result<Value> {
        self.base
            .fetch(&ApiRequest::put(format!("/api/libraries/{library_id}")).json_value(dto.clone()))
    }

    pub fn delete(&self, library_id: &str) -> Result<()> {
        self.base
            .send(&ApiRequest::delete(format!("/api/libraries/{library_id}")))
    }

    /// Queue a rescan of the library's import paths.
    pub fn scan(&self, library_id: &str) -> Result<()> {
        self.base
            .send(&ApiRequest::post(format!("/api/libraries/{library_id}/scan")))
    }

    pub fn statistics(&self, library_id: &str) -> Result<Value> {
        self.base
            .fetch(&ApiRequest::get(format!("/api/libraries/{library_id}/statistics")))
    }

    /// Check import paths and exclusion patterns without saving them.
    pub fn validate(&self, library_id: &str, dto: &Value) -> Result<Value> {
        self.base.fetch(
            &ApiRequest::post(format!("/api/libraries/{library_id}/validate")).json_value(dto.clone()),
        )
    }
}

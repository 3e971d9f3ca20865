use serde_json::Value;

use super::{ApiRequest, BaseClient};
use crate::error::Result;

/// Server-wide configuration. Admin only.
pub struct SystemConfigClient<'a> {
    base: &'a BaseClient,
}

impl<'a> SystemConfigClient<'a> {
    pub fn new(base: &'a BaseClient) -> Self {
        Self { base }
    }

    pub fn get(&self) -> Result<Value> {
        self.base.fetch(&ApiRequest::get("/api/system-config"))
    }

    /// Replace the whole configuration; send back a modified [`get`](Self::get).
    pub fn update(&self, dto: &Value) -> Result<Value> {
        self.base
            .fetch(&ApiRequest::put("/api/system-config").json_value(dto.clone()))
    }

    pub fn storage_template_options(&self) -> Result<Value> {
        self.base
            .fetch(&ApiRequest::get("/api/system-config/storage-template-options"))
    }
}

use serde_json::Value;

use super::{ApiRequest, BaseClient};
use crate::error::Result;

pub struct ViewClient<'a> {
    base: &'a BaseClient,
}

impl<'a> ViewClient<'a> {
    pub fn new(base: &'a BaseClient) -> Self {
        Self { base }
    }

    pub fn settings(&self) -> Result<Value> {
        self.base.fetch(&ApiRequest::get("/api/view/settings"))
    }

    pub fn update_settings(&self, dto: &Value) -> Result<Value> {
        self.base
            .fetch(&ApiRequest::put("/api/view/settings").json_value(dto.clone()))
    }
}

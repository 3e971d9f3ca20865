use serde_json::Value;

use super::{ApiRequest, BaseClient};
use crate::error::Result;

pub struct WorkflowsClient<'a> {
    base: &'a BaseClient,
}

impl<'a> WorkflowsClient<'a> {
    pub fn new(base: &'a BaseClient) -> Self {
        Self { base }
    }

    pub fn list(&self) -> Result<Vec<Value>> {
        self.base.fetch(&ApiRequest::get("/api/workflows"))
    }

    pub fn create(&self, dto: &Value) -> Result<Value> {
        self.base
            .fetch(&ApiRequest::post("/api/workflows").json_value(dto.clone()))
    }

    pub fn get(&self, workflow_id: &str) -> Result<Value> {
        self.base
            .fetch(&ApiRequest::get(format!("/api/workflows/{workflow_id}")))
    }

    pub fn update(&self, workflow_id: &str, dto: &Value) -> Result<Value> {
        self.base.fetch(
            &ApiRequest::put(format!("/api/workflows/{workflow_id}")).json_value(dto.clone()),
        )
    }

    pub fn delete(&self, workflow_id: &str) -> Result<()> {
        self.base
            .send(&ApiRequest::delete(format!("/api/workflows/{workflow_id}")))
    }
}

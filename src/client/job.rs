use serde_json::Value;

use super::{path_segment, ApiRequest, BaseClient};
use crate::error::Result;

/// Manual jobs plus the pre-queues job endpoints kept by the server for
/// older clients.
pub struct JobsClient<'a> {
    base: &'a BaseClient,
}

impl<'a> JobsClient<'a> {
    pub fn new(base: &'a BaseClient) -> Self {
        Self { base }
    }

    pub fn create(&self, dto: &Value) -> Result<()> {
        self.base
            .send(&ApiRequest::post("/api/jobs").json_value(dto.clone()))
    }

    pub fn queues_legacy(&self) -> Result<Value> {
        self.base.fetch(&ApiRequest::get("/api/jobs"))
    }

    pub fn run_queue_command_legacy(&self, name: &str, dto: &Value) -> Result<Value> {
        let name = path_segment(name);
        self.base
            .fetch(&ApiRequest::put(format!("/api/jobs/{name}")).json_value(dto.clone()))
    }
}

use serde_json::Value;

use super::{path_segment, ApiRequest, BaseClient, Query};
use crate::error::Result;

/// Background job queues. Admin only.
pub struct QueuesClient<'a> {
    base: &'a BaseClient,
}

impl<'a> QueuesClient<'a> {
    pub fn new(base: &'a BaseClient) -> Self {
        Self { base }
    }

    pub fn list(&self) -> Result<Value> {
        self.base.fetch(&ApiRequest::get("/api/queue"))
    }

    pub fn get(&self, name: &str) -> Result<Value> {
        let name = path_segment(name);
        self.base.fetch(&ApiRequest::get(format!("/api/queue/{name}")))
    }

    /// Pause or resume a queue.
    pub fn update(&self, name: &str, dto: &Value) -> Result<Value> {
        let name = path_segment(name);
        self.base
            .fetch(&ApiRequest::put(format!("/api/queue/{name}")).json_value(dto.clone()))
    }

    /// Drop all waiting jobs of a queue.
    pub fn empty(&self, name: &str) -> Result<()> {
        let name = path_segment(name);
        self.base
            .send(&ApiRequest::post(format!("/api/queue/{name}/empty")))
    }

    /// Jobs of a queue, filtered by `query` (e.g. `status`).
    pub fn jobs(&self, name: &str, query: Query) -> Result<Value> {
        let name = path_segment(name);
        self.base
            .fetch(&ApiRequest::get(format!("/api/queue/{name}/jobs")).query(query))
    }
}

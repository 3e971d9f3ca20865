use serde_json::Value;

use super::{ApiRequest, BaseClient};
use crate::error::Result;

/// Partner sharing between users.
pub struct PartnersClient<'a> {
    base: &'a BaseClient,
}

impl<'a> PartnersClient<'a> {
    pub fn new(base: &'a BaseClient) -> Self {
        Self { base }
    }

    pub fn list(&self) -> Result<Vec<Value>> {
        self.base.fetch(&ApiRequest::get("/api/partners"))
    }

    pub fn create(&self, dto: &Value) -> Result<Value> {
        self.base
            .fetch(&ApiRequest::post("/api/partners").json_value(dto.clone()))
    }

    pub fn remove(&self, partner_id: &str) -> Result<()> {
        self.base
            .send(&ApiRequest::delete(format!("/api/partners/{partner_id}")))
    }

    pub fn update(&self, partner_id: &str, dto: &Value) -> Result<Value> {
        self.base
            .fetch(&ApiRequest::put(format!("/api/partners/{partner_id}")).json_value(dto.clone()))
    }
}

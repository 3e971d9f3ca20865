use serde_json::Value;

use super::{ApiRequest, BaseClient};
use crate::error::Result;

/// Asset, people and place search. Every call posts a JSON filter object.
pub struct SearchClient<'a> {
    base: &'a BaseClient,
}

impl<'a> SearchClient<'a> {
    pub fn new(base: &'a BaseClient) -> Self {
        Self { base }
    }

    fn post(&self, path: &str, dto: &Value) -> Result<Value> {
        self.base
            .fetch(&ApiRequest::post(path).json_value(dto.clone()))
    }

    /// Paged asset search; the response groups `albums` and `assets`.
    pub fn assets(&self, dto: &Value) -> Result<Value> {
        self.post("/api/search/assets", dto)
    }

    pub fn places(&self, dto: &Value) -> Result<Value> {
        self.post("/api/search/places", dto)
    }

    pub fn people(&self, dto: &Value) -> Result<Value> {
        self.post("/api/search/people", dto)
    }

    /// CLIP-based search by free text.
    pub fn smart(&self, dto: &Value) -> Result<Value> {
        self.post("/api/search/smart", dto)
    }

    pub fn metadata(&self, dto: &Value) -> Result<Value> {
        self.post("/api/search/metadata", dto)
    }

    pub fn explore(&self) -> Result<Value> {
        self.base.fetch(&ApiRequest::get("/api/search/explore"))
    }

    pub fn time_buckets(&self, dto: &Value) -> Result<Value> {
        self.post("/api/search/time-bucket", dto)
    }
}

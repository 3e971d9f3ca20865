use serde_json::Value;

use super::{ApiRequest, BaseClient};
use crate::error::Result;

pub struct PeopleClient<'a> {
    base: &'a BaseClient,
}

impl<'a> PeopleClient<'a> {
    pub fn new(base: &'a BaseClient) -> Self {
        Self { base }
    }

    pub fn list(&self) -> Result<Value> {
        self.base.fetch(&ApiRequest::get("/api/people"))
    }

    pub fn create(&self, dto: &Value) -> Result<Value> {
        self.base
            .fetch(&ApiRequest::post("/api/people").json_value(dto.clone()))
    }

    pub fn get(&self, person_id: &str) -> Result<Value> {
        self.base
            .fetch(&ApiRequest::get(format!("/api/people/{person_id}")))
    }

    pub fn update(&self, person_id: &str, dto: &Value) -> Result<Value> {
        self.base
            .fetch(&ApiRequest::put(format!("/api/people/{person_id}")).json_value(dto.clone()))
    }

    pub fn delete(&self, person_id: &str) -> Result<()> {
        self.base
            .send(&ApiRequest::delete(format!("/api/people/{person_id}")))
    }

    /// Merge the people listed in `dto` into `person_id`.
    pub fn merge(&self, person_id: &str, dto: &Value) -> Result<Value> {
        self.base.fetch(
            &ApiRequest::post(format!("/api/people/{person_id}/merge")).json_value(dto.clone()),
        )
    }

    pub fn reassign_faces(&self, person_id: &str, dto: &Value) -> Result<Value> {
        self.base.fetch(
            &ApiRequest::put(format!("/api/people/{person_id}/reassign-faces"))
                .json_value(dto.clone()),
        )
    }

    pub fn statistics(&self, person_id: &str) -> Result<Value> {
        self.base
            .fetch(&ApiRequest::get(format!("/api/people/{person_id}/statistics")))
    }

    pub fn thumbnail(&self, person_id: &str) -> Result<Vec<u8>> {
        self.base
            .fetch_bytes(&ApiRequest::get(format!("/api/people/{person_id}/thumbnail")))
    }
}

use serde_json::Value;

use super::{ApiRequest, BaseClient, Query};
use crate::error::Result;

pub struct FacesClient<'a> {
    base: &'a BaseClient,
}

impl<'a> FacesClient<'a> {
    pub fn new(base: &'a BaseClient) -> Self {
        Self { base }
    }

    /// Faces detected in an asset.
    pub fn list(&self, asset_id: &str) -> Result<Vec<Value>> {
        let query = Query::new().push("id", asset_id);
        self.base.fetch(&ApiRequest::get("/api/faces").query(query))
    }

    pub fn create(&self, dto: &Value) -> Result<()> {
        self.base
            .send(&ApiRequest::post("/api/faces").json_value(dto.clone()))
    }

    pub fn delete(&self, face_id: &str, dto: &Value) -> Result<()> {
        self.base
            .send(&ApiRequest::delete(format!("/api/faces/{face_id}")).json_value(dto.clone()))
    }

    /// Move a face to another person.
    pub fn reassign(&self, face_id: &str, dto: &Value) -> Result<Value> {
        self.base
            .fetch(&ApiRequest::put(format!("/api/faces/{face_id}")).json_value(dto.clone()))
    }
}

use serde_json::Value;

use super::{ApiRequest, BaseClient};
use crate::error::Result;

pub struct MaintenanceClient<'a> {
    base: &'a BaseClient,
}

impl<'a> MaintenanceClient<'a> {
    pub fn new(base: &'a BaseClient) -> Self {
        Self { base }
    }

    /// Enter or leave maintenance mode.
    pub fn set_mode(&self, dto: &Value) -> Result<()> {
        self.base
            .send(&ApiRequest::post("/api/admin/maintenance").json_value(dto.clone()))
    }

    pub fn detect_prior_install(&self) -> Result<Value> {
        self.base
            .fetch(&ApiRequest::get("/api/admin/maintenance/detect-install"))
    }

    pub fn login(&self, dto: &Value) -> Result<Value> {
        self.base
            .fetch(&ApiRequest::post("/api/admin/maintenance/login").json_value(dto.clone()))
    }

    pub fn status(&self) -> Result<Value> {
        self.base
            .fetch(&ApiRequest::get("/api/admin/maintenance/status"))
    }
}

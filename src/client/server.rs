use serde_json::Value;

use super::{ApiRequest, BaseClient};
use crate::error::Result;

pub struct ServerClient<'a> {
    base: &'a BaseClient,
}

impl<'a> ServerClient<'a> {
    pub fn new(base: &'a BaseClient) -> Self {
        Self { base }
    }

    /// `{"major": .., "minor": .., "patch": ..}`.
    pub fn version(&self) -> Result<Value> {
        self.base.fetch(&ApiRequest::get("/api/server/version"))
    }

    pub fn features(&self) -> Result<Value> {
        self.base.fetch(&ApiRequest::get("/api/server/features"))
    }

    pub fn config(&self) -> Result<Value> {
        self.base.fetch(&ApiRequest::get("/api/server/config"))
    }

    /// Per-user usage totals. Admin only.
    pub fn statistics(&self) -> Result<Value> {
        self.base.fetch(&ApiRequest::get("/api/server/statistics"))
    }
}

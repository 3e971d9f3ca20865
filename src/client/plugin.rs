use serde_json::Value;

use super::{ApiRequest, BaseClient};
use crate::error::Result;

pub struct PluginsClient<'a> {
    base: &'a BaseClient,
}

impl<'a> PluginsClient<'a> {
    pub fn new(base: &'a BaseClient) -> Self {
        Self { base }
    }

    pub fn list(&self) -> Result<Vec<Value>> {
        self.base.fetch(&ApiRequest::get("/api/plugins"))
    }

    /// Events plugins can subscribe to.
    pub fn triggers(&self) -> Result<Vec<Value>> {
        self.base.fetch(&ApiRequest::get("/api/plugins/triggers"))
    }

    pub fn get(&self, plugin_id: &str) -> Result<Value> {
        self.base
            .fetch(&ApiRequest::get(format!("/api/plugins/{plugin_id}")))
    }
}

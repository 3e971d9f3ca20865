use serde_json::Value;

use super::{ApiRequest, BaseClient};
use crate::error::Result;

pub struct SystemMetadataClient<'a> {
    base: &'a BaseClient,
}

impl<'a> SystemMetadataClient<'a> {
    pub fn new(base: &'a BaseClient) -> Self {
        Self { base }
    }

    pub fn get(&self) -> Result<Value> {
        self.base.fetch(&ApiRequest::get("/api/system-metadata"))
    }
}

use serde_json::Value;

use super::{ApiRequest, BaseClient};
use crate::error::Result;

pub struct TimelineClient<'a> {
    base: &'a BaseClient,
}

impl<'a> TimelineClient<'a> {
    pub fn new(base: &'a BaseClient) -> Self {
        Self { base }
    }

    /// Asset counts grouped by time bucket.
    pub fn time_buckets(&self, dto: &Value) -> Result<Vec<Value>> {
        self.base
            .fetch(&ApiRequest::post("/api/timeline/bucket").json_value(dto.clone()))
    }
}

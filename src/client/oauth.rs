use serde_json::Value;

use super::{ApiRequest, BaseClient};
use crate::error::Result;

pub struct OAuthClient<'a> {
    base: &'a BaseClient,
}

impl<'a> OAuthClient<'a> {
    pub fn new(base: &'a BaseClient) -> Self {
        Self { base }
    }

    /// Begin the authorization flow; the response holds the provider URL.
    pub fn start(&self, dto: &Value) -> Result<Value> {
        self.base
            .fetch(&ApiRequest::post("/api/oauth/authorize").json_value(dto.clone()))
    }

    pub fn finish(&self, dto: &Value) -> Result<Value> {
        self.base
            .fetch(&ApiRequest::post("/api/oauth/callback").json_value(dto.clone()))
    }

    pub fn link(&self, dto: &Value) -> Result<()> {
        self.base
            .send(&ApiRequest::post("/api/oauth/link").json_value(dto.clone()))
    }

    pub fn mobile_redirect(&self, dto: &Value) -> Result<Value> {
        self.base
            .fetch(&ApiRequest::post("/api/oauth/mobile-redirect").json_value(dto.clone()))
    }

    pub fn unlink(&self) -> Result<()> {
        self.base.send(&ApiRequest::delete("/api/oauth/unlink"))
    }
}

use super::{ApiRequest, BaseClient};
use crate::error::Result;
use crate::models::{ApiKeyCreateDto, ApiKeyCreateResponseDto, ApiKeyResponseDto, ApiKeyUpdateDto};

pub struct ApiKeysClient<'a> {
    base: &'a BaseClient,
}

impl<'a> ApiKeysClient<'a> {
    pub fn new(base: &'a BaseClient) -> Self {
        Self { base }
    }

    pub fn list(&self) -> Result<Vec<ApiKeyResponseDto>> {
        self.base.fetch(&ApiRequest::get("/api/api-keys"))
    }

    /// Create a key. The secret is only returned by this call.
    pub fn create(&self, dto: &ApiKeyCreateDto) -> Result<ApiKeyCreateResponseDto> {
        self.base.fetch(&ApiRequest::post("/api/api-keys").json(dto)?)
    }

    /// The key the client is currently authenticated with.
    pub fn me(&self) -> Result<ApiKeyResponseDto> {
        self.base.fetch(&ApiRequest::get("/api/api-keys/me"))
    }

    pub fn get(&self, key_id: &str) -> Result<ApiKeyResponseDto> {
        self.base
            .fetch(&ApiRequest::get(format!("/api/api-keys/{key_id}")))
    }

    pub fn update(&self, key_id: &str, dto: &ApiKeyUpdateDto) -> Result<ApiKeyResponseDto> {
        self.base
            .fetch(&ApiRequest::put(format!("/api/api-keys/{key_id}")).json(dto)?)
    }

    pub fn delete(&self, key_id: &str) -> Result<()> {
        self.base
            .send(&ApiRequest::delete(format!("/api/api-keys/{key_id}")))
    }
}

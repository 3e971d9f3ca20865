use super::{ApiRequest, BaseClient};
use crate::error::Result;
use crate::models::{AssetResponseDto, BulkIdsDto};

pub struct TrashClient<'a> {
    base: &'a BaseClient,
}

impl<'a> TrashClient<'a> {
    pub fn new(base: &'a BaseClient) -> Self {
        Self { base }
    }

    /// Trashed assets of the caller.
    pub fn list(&self) -> Result<Vec<AssetResponseDto>> {
        self.base.fetch(&ApiRequest::get("/api/trash"))
    }

    pub fn restore(&self, dto: &BulkIdsDto) -> Result<()> {
        self.base
            .send(&ApiRequest::post("/api/trash/restore").json(dto)?)
    }

    /// Permanently delete everything in the trash.
    pub fn empty(&self) -> Result<()> {
        self.base.send(&ApiRequest::post("/api/trash/empty"))
    }
}

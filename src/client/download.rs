use super::{ApiRequest, BaseClient, Query};
use crate::error::Result;
use crate::models::{AssetIdsDto, DownloadInfoDto, DownloadResponseDto, SharedLinkAccess};

pub struct DownloadClient<'a> {
    base: &'a BaseClient,
}

impl<'a> DownloadClient<'a> {
    pub fn new(base: &'a BaseClient) -> Self {
        Self { base }
    }

    /// Plan a download: how the requested assets split into archives.
    pub fn info(
        &self,
        dto: &DownloadInfoDto,
        access: &SharedLinkAccess,
    ) -> Result<DownloadResponseDto> {
        let request = ApiRequest::post("/api/download/info")
            .query(access.apply(Query::new()))
            .json(dto)?;
        self.base.fetch(&request)
    }

    /// A zip archive of the given assets.
    pub fn archive(&self, dto: &AssetIdsDto, access: &SharedLinkAccess) -> Result<Vec<u8>> {
        let request = ApiRequest::post("/api/download/archive")
            .query(access.apply(Query::new()))
            .json(dto)?;
        self.base.fetch_bytes(&request)
    }
}

use super::{ApiRequest, BaseClient, Query};
use crate::error::Result;
use crate::models::{
    BulkIdResponseDto, BulkIdsDto, SharedLinkAccess, SharedLinkCreateDto, SharedLinkEditDto,
    SharedLinkResponseDto,
};

pub struct SharedLinksClient<'a> {
    base: &'a BaseClient,
}

impl<'a> SharedLinksClient<'a> {
    pub fn new(base: &'a BaseClient) -> Self {
        Self { base }
    }

    pub fn create(&self, dto: &SharedLinkCreateDto) -> Result<SharedLinkResponseDto> {
        self.base.fetch(&ApiRequest::post("/api/shared-link").json(dto)?)
    }

    pub fn list(&self) -> Result<Vec<SharedLinkResponseDto>> {
        self.base.fetch(&ApiRequest::get("/api/shared-link"))
    }

    /// The link identified by `access`.
    pub fn me(&self, access: &SharedLinkAccess) -> Result<SharedLinkResponseDto> {
        self.base
            .fetch(&ApiRequest::get("/api/shared-link/me").query(access.apply(Query::new())))
    }

    pub fn get(&self, link_id: &str, access: &SharedLinkAccess) -> Result<SharedLinkResponseDto> {
        let request = ApiRequest::get(format!("/api/shared-link/{link_id}"))
            .query(access.apply(Query::new()));
        self.base.fetch(&request)
    }

    pub fn update(&self, link_id: &str, dto: &SharedLinkEditDto) -> Result<SharedLinkResponseDto> {
        self.base
            .fetch(&ApiRequest::patch(format!("/api/shared-link/{link_id}")).json(dto)?)
    }

    pub fn remove(&self, link_id: &str) -> Result<()> {
        self.base
            .send(&ApiRequest::delete(format!("/api/shared-link/{link_id}")))
    }

    /// Add assets to an individual-assets link.
    pub fn add_assets(
        &self,
        link_id: &str,
        dto: &BulkIdsDto,
        access: &SharedLinkAccess,
    ) -> Result<Vec<BulkIdResponseDto>> {
        let request = ApiRequest::put(format!("/api/shared-link/{link_id}/assets"))
            .query(access.apply(Query::new()))
            .json(dto)?;
        self.base.fetch(&request)
    }

    pub fn remove_assets(&self, link_id: &str, dto: &BulkIdsDto) -> Result<Vec<BulkIdResponseDto>> {
        self.base.fetch(
            &ApiRequest::delete(format!("/api/shared-link/{link_id}/assets")).json(dto)?,
        )
    }
}

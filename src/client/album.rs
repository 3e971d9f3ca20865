use super::{ApiRequest, BaseClient, Query};
use crate::error::Result;
use crate::models::{
    AddUsersDto, AlbumResponseDto, AlbumStatisticsResponseDto, AlbumsAddAssetsDto,
    AlbumsAddAssetsResponseDto, BulkIdResponseDto, BulkIdsDto, CreateAlbumDto, GetAlbumParams,
    ListAlbumsParams, SharedLinkAccess, UpdateAlbumDto, UpdateAlbumUserDto,
};

pub struct AlbumsClient<'a> {
    base: &'a BaseClient,
}

impl<'a> AlbumsClient<'a> {
    pub fn new(base: &'a BaseClient) -> Self {
        Self { base }
    }

    /// List albums visible to the caller.
    pub fn list(&self, params: &ListAlbumsParams) -> Result<Vec<AlbumResponseDto>> {
        let query = Query::new()
            .push_opt("assetId", params.asset_id.as_deref())
            .push_opt("shared", params.shared);
        self.base.fetch(&ApiRequest::get("/api/albums").query(query))
    }

    pub fn create(&self, dto: &CreateAlbumDto) -> Result<AlbumResponseDto> {
        self.base.fetch(&ApiRequest::post("/api/albums").json(dto)?)
    }

    /// Fetch one album. `key`/`slug` grant access through a shared link.
    pub fn get(&self, album_id: &str, params: &GetAlbumParams) -> Result<AlbumResponseDto> {
        let query = Query::new()
            .push_opt("key", params.key.as_deref())
            .push_opt("slug", params.slug.as_deref())
            .push_opt("withoutAssets", params.without_assets);
        self.base
            .fetch(&ApiRequest::get(format!("/api/albums/{album_id}")).query(query))
    }

    pub fn update(&self, album_id: &str, dto: &UpdateAlbumDto) -> Result<AlbumResponseDto> {
        self.base
            .fetch(&ApiRequest::patch(format!("/api/albums/{album_id}")).json(dto)?)
    }

    pub fn delete(&self, album_id: &str) -> Result<()> {
        self.base
            .send(&ApiRequest::delete(format!("/api/albums/{album_id}")))
    }

    /// Owned, shared and not-shared album counts.
    pub fn statistics(&self) -> Result<AlbumStatisticsResponseDto> {
        self.base.fetch(&ApiRequest::get("/api/albums/statistics"))
    }

    /// Add the same assets to several albums at once.
    pub fn add_assets_to_albums(
        &self,
        dto: &AlbumsAddAssetsDto,
    ) -> Result<AlbumsAddAssetsResponseDto> {
        self.base
            .fetch(&ApiRequest::put("/api/albums/assets").json(dto)?)
    }

    pub fn add_assets(
        &self,
        album_id: &str,
        dto: &BulkIdsDto,
        access: &SharedLinkAccess,
    ) -> Result<Vec<BulkIdResponseDto>> {
        let request = ApiRequest::put(format!("/api/albums/{album_id}/assets"))
            .query(access.apply(Query::new()))
            .json(dto)?;
        self.base.fetch(&request)
    }

    pub fn remove_assets(&self, album_id: &str, dto: &BulkIdsDto) -> Result<Vec<BulkIdResponseDto>> {
        self.base
            .fetch(&ApiRequest::delete(format!("/api/albums/{album_id}/assets")).json(dto)?)
    }

    pub fn add_users(&self, album_id: &str, dto: &AddUsersDto) -> Result<AlbumResponseDto> {
        self.base
            .fetch(&ApiRequest::put(format!("/api/albums/{album_id}/users")).json(dto)?)
    }

    pub fn remove_user(&self, album_id: &str, user_id: &str) -> Result<()> {
        self.base.send(&ApiRequest::delete(format!(
            "/api/albums/{album_id}/user/{user_id}"
        )))
    }

    /// Change a member's role in the album.
    pub fn update_user(
        &self,
        album_id: &str,
        user_id: &str,
        dto: &UpdateAlbumUserDto,
    ) -> Result<()> {
        self.base
            .send(&ApiRequest::put(format!("/api/albums/{album_id}/user/{user_id}")).json(dto)?)
    }
}

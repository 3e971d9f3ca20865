use serde_json::Value;

use super::{path_segment, ApiRequest, BaseClient, MultipartForm, Query};
use crate::error::Result;
use crate::models::{AssetMediaSize, AssetStatisticsParams, SharedLinkAccess};

/// Header carrying the SHA-1 of an upload so the server can short-circuit
/// duplicates.
pub const CHECKSUM_HEADER: &str = "x-immich-checksum";

/// Asset CRUD, upload, media retrieval and metadata.
///
/// Payloads here are free-form JSON objects; see the server's OpenAPI
/// document for their shape.
pub struct AssetsClient<'a> {
    base: &'a BaseClient,
}

impl<'a> AssetsClient<'a> {
    pub fn new(base: &'a BaseClient) -> Self {
        Self { base }
    }

    pub fn get(&self, asset_id: &str, access: &SharedLinkAccess) -> Result<Value> {
        let request = ApiRequest::get(format!("/api/assets/{asset_id}"))
            .query(access.apply(Query::new()));
        self.base.fetch(&request)
    }

    pub fn update(&self, asset_id: &str, dto: &Value) -> Result<Value> {
        self.base
            .fetch(&ApiRequest::put(format!("/api/assets/{asset_id}")).json_value(dto.clone()))
    }

    /// Delete (or trash) several assets.
    pub fn delete_many(&self, dto: &Value) -> Result<()> {
        self.base
            .send(&ApiRequest::delete("/api/assets").json_value(dto.clone()))
    }

    pub fn update_many(&self, dto: &Value) -> Result<()> {
        self.base
            .send(&ApiRequest::put("/api/assets").json_value(dto.clone()))
    }

    /// Upload a new asset.
    ///
    /// `form` must hold the `assetData` file plus the fields the server
    /// requires (`deviceAssetId`, `deviceId`, `fileCreatedAt`,
    /// `fileModifiedAt`). When `checksum` is set it is sent as
    /// [`CHECKSUM_HEADER`].
    pub fn upload(
        &self,
        form: MultipartForm,
        access: &SharedLinkAccess,
        checksum: Option<&str>,
    ) -> Result<Value> {
        let mut request = ApiRequest::post("/api/assets")
            .query(access.apply(Query::new()))
            .multipart(form);
        if let Some(checksum) = checksum {
            request = request.header(CHECKSUM_HEADER, checksum);
        }
        self.base.fetch(&request)
    }

    pub fn check_bulk_upload(&self, dto: &Value) -> Result<Value> {
        self.base
            .fetch(&ApiRequest::post("/api/assets/bulk-upload-check").json_value(dto.clone()))
    }

    pub fn copy(&self, dto: &Value) -> Result<()> {
        self.base
            .send(&ApiRequest::put("/api/assets/copy").json_value(dto.clone()))
    }

    pub fn check_existing(&self, dto: &Value) -> Result<Value> {
        self.base
            .fetch(&ApiRequest::post("/api/assets/exist").json_value(dto.clone()))
    }

    /// Queue jobs (thumbnail regeneration, metadata refresh...) for assets.
    pub fn run_jobs(&self, dto: &Value) -> Result<()> {
        self.base
            .send(&ApiRequest::post("/api/assets/jobs").json_value(dto.clone()))
    }

    pub fn statistics(&self, params: &AssetStatisticsParams) -> Result<Value> {
        let query = Query::new()
            .push_opt("isFavorite", params.is_favorite)
            .push_opt("isTrashed", params.is_trashed)
            .push_opt("visibility", params.visibility);
        self.base
            .fetch(&ApiRequest::get("/api/assets/statistics").query(query))
    }

    /// The original file, or its edited rendition when `edited` is set.
    pub fn download_original(
        &self,
        asset_id: &str,
        access: &SharedLinkAccess,
        edited: bool,
    ) -> Result<Vec<u8>> {
        let query = access.apply(Query::new().push("edited", edited));
        self.base
            .fetch_bytes(&ApiRequest::get(format!("/api/assets/{asset_id}/original")).query(query))
    }

    pub fn thumbnail(
        &self,
        asset_id: &str,
        access: &SharedLinkAccess,
        size: Option<AssetMediaSize>,
        edited: bool,
    ) -> Result<Vec<u8>> {
        let query = access
            .apply(Query::new().push("edited", edited))
            .push_opt("size", size);
        self.base
            .fetch_bytes(&ApiRequest::get(format!("/api/assets/{asset_id}/thumbnail")).query(query))
    }

    /// Transcoded video stream, fully buffered.
    pub fn play_video(&self, asset_id: &str, access: &SharedLinkAccess) -> Result<Vec<u8>> {
        let request = ApiRequest::get(format!("/api/assets/{asset_id}/video/playback"))
            .query(access.apply(Query::new()));
        self.base.fetch_bytes(&request)
    }

    pub fn metadata(&self, asset_id: &str) -> Result<Vec<Value>> {
        self.base
            .fetch(&ApiRequest::get(format!("/api/assets/{asset_id}/metadata")))
    }

    pub fn update_metadata(&self, asset_id: &str, dto: &Value) -> Result<Vec<Value>> {
        self.base.fetch(
            &ApiRequest::put(format!("/api/assets/{asset_id}/metadata")).json_value(dto.clone()),
        )
    }

    pub fn delete_metadata(&self, asset_id: &str, key: &str) -> Result<()> {
        let key = path_segment(key);
        self.base.send(&ApiRequest::delete(format!(
            "/api/assets/{asset_id}/metadata/{key}"
        )))
    }

    pub fn metadata_by_key(&self, asset_id: &str, key: &str) -> Result<Value> {
        let key = path_segment(key);
        self.base.fetch(&ApiRequest::get(format!(
            "/api/assets/{asset_id}/metadata/{key}"
        )))
    }

    /// Text recognized in the asset.
    pub fn ocr(&self, asset_id: &str) -> Result<Vec<Value>> {
        self.base
            .fetch(&ApiRequest::get(format!("/api/assets/{asset_id}/ocr")))
    }

    pub fn update_bulk_metadata(&self, dto: &Value) -> Result<Vec<Value>> {
        self.base
            .fetch(&ApiRequest::put("/api/assets/metadata").json_value(dto.clone()))
    }

    pub fn delete_bulk_metadata(&self, dto: &Value) -> Result<()> {
        self.base
            .send(&ApiRequest::delete("/api/assets/metadata").json_value(dto.clone()))
    }
}

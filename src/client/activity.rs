use super::{ApiRequest, BaseClient, Query};
use crate::error::Result;
use crate::models::{
    ActivityCreateDto, ActivityResponseDto, ActivityStatisticsResponseDto, ListActivitiesParams,
};

/// Likes and comments on albums and assets.
pub struct ActivitiesClient<'a> {
    base: &'a BaseClient,
}

impl<'a> ActivitiesClient<'a> {
    pub fn new(base: &'a BaseClient) -> Self {
        Self { base }
    }

    /// List activities of an album, optionally narrowed by asset, level,
    /// type or user.
    pub fn list(
        &self,
        album_id: &str,
        params: &ListActivitiesParams,
    ) -> Result<Vec<ActivityResponseDto>> {
        let query = Query::new()
            .push("albumId", album_id)
            .push_opt("assetId", params.asset_id.as_deref())
            .push_opt("level", params.level)
            .push_opt("type", params.activity_type)
            .push_opt("userId", params.user_id.as_deref());
        self.base
            .fetch(&ApiRequest::get("/api/activities").query(query))
    }

    pub fn create(&self, dto: &ActivityCreateDto) -> Result<ActivityResponseDto> {
        self.base
            .fetch(&ApiRequest::post("/api/activities").json(dto)?)
    }

    /// Like and comment counts for an album (or one asset in it).
    pub fn statistics(
        &self,
        album_id: &str,
        asset_id: Option<&str>,
    ) -> Result<ActivityStatisticsResponseDto> {
        let query = Query::new()
            .push("albumId", album_id)
            .push_opt("assetId", asset_id);
        self.base
            .fetch(&ApiRequest::get("/api/activities/statistics").query(query))
    }

    pub fn delete(&self, activity_id: &str) -> Result<()> {
        self.base
            .send(&ApiRequest::delete(format!("/api/activities/{activity_id}")))
    }
}

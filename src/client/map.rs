use serde_json::Value;

use super::{ApiRequest, BaseClient, Query};
use crate::error::Result;

pub struct MapClient<'a> {
    base: &'a BaseClient,
}

/// Filters for map markers.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MapMarkersParams {
    pub file_created_after: Option<String>,
    pub file_created_before: Option<String>,
    pub is_archived: Option<bool>,
    pub is_favorite: Option<bool>,
    pub with_partners: Option<bool>,
    pub with_shared_albums: Option<bool>,
}

impl<'a> MapClient<'a> {
    pub fn new(base: &'a BaseClient) -> Self {
        Self { base }
    }

    /// Geotagged assets as map markers.
    pub fn markers(&self, params: &MapMarkersParams) -> Result<Vec<Value>> {
        let query = Query::new()
            .push_opt("fileCreatedAfter", params.file_created_after.as_deref())
            .push_opt("fileCreatedBefore", params.file_created_before.as_deref())
            .push_opt("isArchived", params.is_archived)
            .push_opt("isFavorite", params.is_favorite)
            .push_opt("withPartners", params.with_partners)
            .push_opt("withSharedAlbums", params.with_shared_albums);
        self.base
            .fetch(&ApiRequest::get("/api/map/markers").query(query))
    }

    /// Places near a coordinate.
    pub fn reverse_geocode(&self, lat: f64, lon: f64) -> Result<Vec<Value>> {
        let query = Query::new().push("lat", lat).push("lon", lon);
        self.base
            .fetch(&ApiRequest::get("/api/map/reverse-geocode").query(query))
    }
}

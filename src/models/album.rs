use serde::{Deserialize, Serialize};

use super::asset::AssetResponseDto;
use super::common::{AlbumUserRole, AssetOrder, BulkIdErrorReason};
use super::user::UserResponseDto;

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct AlbumUserResponseDto {
    pub role: AlbumUserRole,
    pub user: UserResponseDto,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContributorCountResponseDto {
    pub asset_count: u64,
    pub user_id: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AlbumUserCreateDto {
    pub user_id: String,
    pub role: AlbumUserRole,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AlbumUserAddDto {
    pub user_id: String,
    pub role: AlbumUserRole,
}

impl AlbumUserAddDto {
    /// Adds the user as an editor, the server default.
    pub fn editor(user_id: impl Into<String>) -> Self {
        Self {
            user_id: user_id.into(),
            role: AlbumUserRole::Editor,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AddUsersDto {
    pub album_users: Vec<AlbumUserAddDto>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UpdateAlbumUserDto {
    pub role: AlbumUserRole,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AlbumsAddAssetsDto {
    pub album_ids: Vec<String>,
    pub asset_ids: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct AlbumsAddAssetsResponseDto {
    pub success: bool,
    #[serde(default)]
    pub error: Option<BulkIdErrorReason>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AlbumStatisticsResponseDto {
    pub owned: u64,
    pub shared: u64,
    pub not_shared: u64,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateAlbumDto {
    pub album_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub album_users: Option<Vec<AlbumUserCreateDto>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub asset_ids: Option<Vec<String>>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateAlbumDto {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub album_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub album_thumbnail_asset_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_activity_enabled: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub order: Option<AssetOrder>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AlbumResponseDto {
    pub id: String,
    pub album_name: String,
    pub description: String,
    #[serde(default)]
    pub album_thumbnail_asset_id: Option<String>,
    #[serde(default)]
    pub album_users: Vec<AlbumUserResponseDto>,
    pub asset_count: u64,
    #[serde(default)]
    pub assets: Vec<AssetResponseDto>,
    pub created_at: String,
    pub updated_at: String,
    pub owner_id: String,
    #[serde(default)]
    pub owner: Option<UserResponseDto>,
    pub shared: bool,
    pub has_shared_link: bool,
    pub is_activity_enabled: bool,
    #[serde(default)]
    pub start_date: Option<String>,
    #[serde(default)]
    pub end_date: Option<String>,
    #[serde(default)]
    pub last_modified_asset_timestamp: Option<String>,
    #[serde(default)]
    pub order: Option<String>,
    #[serde(default)]
    pub contributor_counts: Vec<ContributorCountResponseDto>,
}

/// Filters for listing albums.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListAlbumsParams {
    /// Only albums containing this asset.
    pub asset_id: Option<String>,
    pub shared: Option<bool>,
}

/// Options for fetching a single album.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GetAlbumParams {
    pub key: Option<String>,
    pub slug: Option<String>,
    pub without_assets: Option<bool>,
}

use serde::{Deserialize, Serialize};

use super::album::AlbumResponseDto;
use super::asset::AssetResponseDto;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum SharedLinkType {
    Album,
    Individual,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SharedLinkCreateDto {
    #[serde(rename = "type")]
    pub link_type: SharedLinkType,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub album_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub asset_ids: Option<Vec<String>>,
    pub allow_download: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub allow_upload: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expires_at: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
    pub show_metadata: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub slug: Option<String>,
}

impl SharedLinkCreateDto {
    /// A link sharing a whole album, with downloads and metadata enabled.
    pub fn album(album_id: impl Into<String>) -> Self {
        Self::new(SharedLinkType::Album, Some(album_id.into()), None)
    }

    /// A link sharing individual assets, with downloads and metadata enabled.
    pub fn assets(asset_ids: Vec<String>) -> Self {
        Self::new(SharedLinkType::Individual, None, Some(asset_ids))
    }

    fn new(link_type: SharedLinkType, album_id: Option<String>, asset_ids: Option<Vec<String>>) -> Self {
        Self {
            link_type,
            album_id,
            asset_ids,
            allow_download: true,
            allow_upload: None,
            description: None,
            expires_at: None,
            password: None,
            show_metadata: true,
            slug: None,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SharedLinkEditDto {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub allow_download: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub allow_upload: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub change_expiry_time: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expires_at: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub show_metadata: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub slug: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SharedLinkResponseDto {
    pub id: String,
    #[serde(rename = "type")]
    pub link_type: SharedLinkType,
    pub allow_download: bool,
    pub allow_upload: bool,
    pub created_at: String,
    pub key: String,
    pub show_metadata: bool,
    #[serde(default)]
    pub album: Option<AlbumResponseDto>,
    #[serde(default)]
    pub assets: Vec<AssetResponseDto>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub expires_at: Option<String>,
    #[serde(default)]
    pub password: Option<String>,
    #[serde(default)]
    pub slug: Option<String>,
    #[serde(default)]
    pub token: Option<String>,
}

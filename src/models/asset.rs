use serde::{Deserialize, Serialize};

use super::user::UserResponseDto;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum AssetJobName {
    RefreshFaces,
    RefreshMetadata,
    RegenerateThumbnail,
    TranscodeVideo,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AssetMediaStatus {
    Created,
    Replaced,
    Duplicate,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum AssetType {
    Image,
    Video,
    Audio,
    Other,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AssetVisibility {
    Archive,
    Timeline,
    Hidden,
    Locked,
}

impl std::fmt::Display for AssetVisibility {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            Self::Archive => "archive",
            Self::Timeline => "timeline",
            Self::Hidden => "hidden",
            Self::Locked => "locked",
        })
    }
}

/// Thumbnail sizes accepted by the thumbnail endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AssetMediaSize {
    Fullsize,
    Preview,
    Thumbnail,
}

impl std::fmt::Display for AssetMediaSize {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            Self::Fullsize => "fullsize",
            Self::Preview => "preview",
            Self::Thumbnail => "thumbnail",
        })
    }
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExifResponseDto {
    pub city: Option<String>,
    pub country: Option<String>,
    pub date_time_original: Option<String>,
    pub description: Option<String>,
    pub exif_image_height: Option<f64>,
    pub exif_image_width: Option<f64>,
    pub exposure_time: Option<String>,
    #[serde(rename = "fNumber")]
    pub f_number: Option<f64>,
    pub file_size_in_byte: Option<u64>,
    pub focal_length: Option<f64>,
    pub iso: Option<f64>,
    pub latitude: Option<f64>,
    pub lens_model: Option<String>,
    pub longitude: Option<f64>,
    pub make: Option<String>,
    pub model: Option<String>,
    pub modify_date: Option<String>,
    pub orientation: Option<String>,
    pub projection_type: Option<String>,
    pub rating: Option<f64>,
    pub state: Option<String>,
    pub time_zone: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AssetStackResponseDto {
    pub asset_count: u64,
    pub id: String,
    pub primary_asset_id: String,
}

/// An asset as returned by album, trash, memory and shared-link endpoints.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AssetResponseDto {
    pub id: String,
    #[serde(rename = "type")]
    pub asset_type: AssetType,
    pub visibility: AssetVisibility,
    pub checksum: String,
    pub created_at: String,
    pub device_asset_id: String,
    pub device_id: String,
    #[serde(default)]
    pub duplicate_id: Option<String>,
    pub duration: String,
    #[serde(default)]
    pub exif_info: Option<ExifResponseDto>,
    pub file_created_at: String,
    pub file_modified_at: String,
    pub has_metadata: bool,
    #[serde(default)]
    pub height: Option<f64>,
    #[serde(default)]
    pub width: Option<f64>,
    pub is_archived: bool,
    pub is_edited: bool,
    pub is_favorite: bool,
    pub is_offline: bool,
    pub is_trashed: bool,
    #[serde(default)]
    pub library_id: Option<String>,
    #[serde(default)]
    pub live_photo_video_id: Option<String>,
    pub local_date_time: String,
    pub original_file_name: String,
    #[serde(default)]
    pub original_mime_type: Option<String>,
    pub original_path: String,
    #[serde(default)]
    pub owner: Option<UserResponseDto>,
    pub owner_id: String,
    #[serde(default)]
    pub people: Vec<serde_json::Value>,
    #[serde(default)]
    pub resized: Option<bool>,
    #[serde(default)]
    pub stack: Option<AssetStackResponseDto>,
    #[serde(default)]
    pub tags: Vec<serde_json::Value>,
    #[serde(default)]
    pub thumbhash: Option<String>,
    #[serde(default)]
    pub unassigned_faces: Vec<serde_json::Value>,
    pub updated_at: String,
}

/// Filters for asset statistics.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AssetStatisticsParams {
    pub is_favorite: Option<bool>,
    pub is_trashed: Option<bool>,
    pub visibility: Option<AssetVisibility>,
}

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DownloadArchiveInfo {
    pub asset_ids: Vec<String>,
    pub size: u64,
}

/// Selects what to download: explicit assets, an album, or a user's assets.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DownloadInfoDto {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub asset_ids: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub album_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_id: Option<String>,
    /// Maximum archive size in bytes.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub archive_size: Option<u64>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DownloadResponseDto {
    pub archives: Vec<DownloadArchiveInfo>,
    pub total_size: u64,
}

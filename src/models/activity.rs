use serde::{Deserialize, Serialize};

use super::user::UserResponseDto;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReactionType {
    Comment,
    Like,
}

impl std::fmt::Display for ReactionType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            Self::Comment => "comment",
            Self::Like => "like",
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReactionLevel {
    Album,
    Asset,
}

impl std::fmt::Display for ReactionLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            Self::Album => "album",
            Self::Asset => "asset",
        })
    }
}

/// A like, or a comment when `comment` is set.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ActivityCreateDto {
    pub album_id: String,
    #[serde(rename = "type")]
    pub activity_type: ReactionType,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub asset_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub comment: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ActivityResponseDto {
    pub id: String,
    #[serde(default)]
    pub asset_id: Option<String>,
    #[serde(default)]
    pub comment: Option<String>,
    pub created_at: String,
    #[serde(rename = "type")]
    pub activity_type: ReactionType,
    pub user: UserResponseDto,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct ActivityStatisticsResponseDto {
    pub likes: u64,
    pub comments: u64,
}

/// Filters for listing the activities of an album.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListActivitiesParams {
    pub asset_id: Option<String>,
    pub level: Option<ReactionLevel>,
    pub activity_type: Option<ReactionType>,
    pub user_id: Option<String>,
}

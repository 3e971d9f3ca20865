use serde::{Deserialize, Serialize};

use super::asset::AssetResponseDto;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MemoryType {
    OnThisDay,
}

impl std::fmt::Display for MemoryType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            Self::OnThisDay => "on_this_day",
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MemorySearchOrder {
    Asc,
    Desc,
    Random,
}

impl std::fmt::Display for MemorySearchOrder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            Self::Asc => "asc",
            Self::Desc => "desc",
            Self::Random => "random",
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct OnThisDayDto {
    pub year: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MemoryCreateDto {
    #[serde(rename = "type")]
    pub memory_type: MemoryType,
    pub memory_at: String,
    pub data: OnThisDayDto,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub asset_ids: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_saved: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub seen_at: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MemoryUpdateDto {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_saved: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub memory_at: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub seen_at: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MemoryResponseDto {
    pub id: String,
    #[serde(rename = "type")]
    pub memory_type: MemoryType,
    pub memory_at: String,
    pub owner_id: String,
    pub created_at: String,
    pub updated_at: String,
    pub is_saved: bool,
    pub assets: Vec<AssetResponseDto>,
    #[serde(default)]
    pub data: Option<serde_json::Value>,
    #[serde(default)]
    pub deleted_at: Option<String>,
    #[serde(default)]
    pub hide_at: Option<String>,
    #[serde(default)]
    pub seen_at: Option<String>,
    #[serde(default)]
    pub show_at: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct MemoryStatisticsResponseDto {
    pub total: u64,
}

/// Filters shared by memory search and memory statistics.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MemorySearchParams {
    /// Sent as `for`.
    pub for_date: Option<String>,
    pub is_saved: Option<bool>,
    pub is_trashed: Option<bool>,
    pub order: Option<MemorySearchOrder>,
    pub size: Option<u32>,
    pub memory_type: Option<MemoryType>,
}

/// Some memory endpoints answer with a single object where a list is expected.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub(crate) enum OneOrMany<T> {
    Many(Vec<T>),
    One(T),
}

impl<T> OneOrMany<T> {
    pub(crate) fn into_vec(self) -> Vec<T> {
        match self {
            Self::Many(items) => items,
            Self::One(item) => vec![item],
        }
    }
}

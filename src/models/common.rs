use serde::{Deserialize, Serialize};

use crate::client::Query;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AlbumUserRole {
    Editor,
    Viewer,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AssetOrder {
    Asc,
    Desc,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BulkIdErrorReason {
    Duplicate,
    NoPermission,
    NotFound,
    Unknown,
}

/// IDs to process in a bulk operation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BulkIdsDto {
    pub ids: Vec<String>,
}

impl BulkIdsDto {
    pub fn new<I, S>(ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            ids: ids.into_iter().map(Into::into).collect(),
        }
    }
}

/// Per-ID result of a bulk operation.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct BulkIdResponseDto {
    pub id: String,
    pub success: bool,
    #[serde(default)]
    pub error: Option<BulkIdErrorReason>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AssetIdsDto {
    pub asset_ids: Vec<String>,
}

/// Shared-link credentials accepted by endpoints reachable without a session.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SharedLinkAccess {
    pub key: Option<String>,
    pub slug: Option<String>,
}

impl SharedLinkAccess {
    pub fn key(key: impl Into<String>) -> Self {
        Self {
            key: Some(key.into()),
            slug: None,
        }
    }

    pub fn slug(slug: impl Into<String>) -> Self {
        Self {
            key: None,
            slug: Some(slug.into()),
        }
    }

    pub(crate) fn apply(&self, query: Query) -> Query {
        query
            .push_opt("key", self.key.as_deref())
            .push_opt("slug", self.slug.as_deref())
    }
}

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ApiKeyCreateDto {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// At least one permission, e.g. `all` or `album.read`.
    pub permissions: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ApiKeyUpdateDto {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub permissions: Option<Vec<String>>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiKeyResponseDto {
    pub id: String,
    pub name: String,
    pub created_at: String,
    pub updated_at: String,
    pub permissions: Vec<String>,
}

/// The secret is only returned once, on creation.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiKeyCreateResponseDto {
    pub api_key: ApiKeyResponseDto,
    pub secret: String,
}

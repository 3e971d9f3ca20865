use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UserAvatarColor {
    Primary,
    Pink,
    Red,
    Yellow,
    Blue,
    Green,
    Purple,
    Orange,
    Gray,
    Amber,
}

/// A user as embedded in most responses.
///
/// `avatar_color` stays a string so colors added by newer servers still parse.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserResponseDto {
    pub id: String,
    pub email: String,
    pub name: String,
    #[serde(default)]
    pub avatar_color: Option<String>,
    #[serde(default)]
    pub profile_image_path: String,
    #[serde(default)]
    pub profile_changed_at: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UserUpdateMeDto {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub avatar_color: Option<UserAvatarColor>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Deprecated by the server in favor of the change-password endpoint.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateProfileImageResponseDto {
    pub profile_changed_at: String,
    pub profile_image_path: String,
    pub user_id: String,
}

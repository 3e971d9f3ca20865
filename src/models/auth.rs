use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChangePasswordDto {
    pub password: String,
    pub new_password: String,
    pub invalidate_sessions: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LoginCredentialDto {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginResponseDto {
    pub access_token: String,
    pub user_id: String,
    pub user_email: String,
    pub name: String,
    pub profile_image_path: String,
    pub is_admin: bool,
    pub is_onboarded: bool,
    pub should_change_password: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthStatusResponseDto {
    pub is_elevated: bool,
    pub password: bool,
    pub pin_code: bool,
    #[serde(default)]
    pub expires_at: Option<String>,
    #[serde(default)]
    pub pin_expires_at: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LogoutResponseDto {
    pub successful: bool,
    pub redirect_uri: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidateAccessTokenResponseDto {
    pub auth_status: bool,
}

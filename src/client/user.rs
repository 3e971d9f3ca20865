use serde_json::Value;

use super::{ApiRequest, BaseClient, MultipartForm};
use crate::error::Result;
use crate::models::{CreateProfileImageResponseDto, UserResponseDto, UserUpdateMeDto};

/// User profiles. `"me"` is accepted wherever a user ID is.
pub struct UsersClient<'a> {
    base: &'a BaseClient,
}

impl<'a> UsersClient<'a> {
    pub fn new(base: &'a BaseClient) -> Self {
        Self { base }
    }

    pub fn get(&self, user_id: &str) -> Result<UserResponseDto> {
        self.base.fetch(&ApiRequest::get(format!("/api/user/{user_id}")))
    }

    /// The user owning the API key.
    pub fn me(&self) -> Result<UserResponseDto> {
        self.get("me")
    }

    pub fn update(&self, user_id: &str, dto: &UserUpdateMeDto) -> Result<UserResponseDto> {
        self.base
            .fetch(&ApiRequest::put(format!("/api/user/{user_id}")).json(dto)?)
    }

    pub fn preferences(&self, user_id: &str) -> Result<Value> {
        self.base
            .fetch(&ApiRequest::get(format!("/api/user/{user_id}/preferences")))
    }

    pub fn update_preferences(&self, user_id: &str, dto: &Value) -> Result<Value> {
        self.base.fetch(
            &ApiRequest::put(format!("/api/user/{user_id}/preferences")).json_value(dto.clone()),
        )
    }

    pub fn profile_image(&self, user_id: &str) -> Result<Vec<u8>> {
        self.base
            .fetch_bytes(&ApiRequest::get(format!("/api/user/{user_id}/profile-image")))
    }

    /// Upload a new profile picture as the `file` part.
    pub fn create_profile_image(
        &self,
        user_id: &str,
        filename: &str,
        bytes: Vec<u8>,
    ) -> Result<CreateProfileImageResponseDto> {
        let form = MultipartForm::new().file("file", filename, bytes);
        self.base
            .post_multipart(&format!("/api/user/{user_id}/profile-image"), form)?
            .json()
    }

    pub fn delete_profile_image(&self, user_id: &str) -> Result<()> {
        self.base
            .delete(&format!("/api/user/{user_id}/profile-image"))
            .map(drop)
    }
}

use super::{ApiRequest, BaseClient};
use crate::error::Result;
use crate::models::{
    AuthStatusResponseDto, ChangePasswordDto, LoginCredentialDto, LoginResponseDto,
    LogoutResponseDto, UserResponseDto, ValidateAccessTokenResponseDto,
};

/// Session endpoints. The client itself always authenticates with its API
/// key; `login` only returns a token for the caller to use elsewhere.
pub struct AuthClient<'a> {
    base: &'a BaseClient,
}

impl<'a> AuthClient<'a> {
    pub fn new(base: &'a BaseClient) -> Self {
        Self { base }
    }

    pub fn login(&self, dto: &LoginCredentialDto) -> Result<LoginResponseDto> {
        self.base.fetch(&ApiRequest::post("/api/auth/login").json(dto)?)
    }

    pub fn status(&self) -> Result<AuthStatusResponseDto> {
        self.base.fetch(&ApiRequest::get("/api/auth/status"))
    }

    pub fn logout(&self) -> Result<LogoutResponseDto> {
        self.base.fetch(&ApiRequest::post("/api/auth/logout"))
    }

    pub fn change_password(&self, dto: &ChangePasswordDto) -> Result<UserResponseDto> {
        self.base
            .fetch(&ApiRequest::post("/api/auth/change-password").json(dto)?)
    }

    pub fn validate_token(&self) -> Result<ValidateAccessTokenResponseDto> {
        self.base.fetch(&ApiRequest::post("/api/auth/validateToken"))
    }
}

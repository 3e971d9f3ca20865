use super::{ApiRequest, BaseClient};
use crate::error::Result;

pub struct AuthAdminClient<'a> {
    base: &'a BaseClient,
}

impl<'a> AuthAdminClient<'a> {
    pub fn new(base: &'a BaseClient) -> Self {
        Self { base }
    }

    /// Unlink every user's OAuth account. Admin only.
    pub fn unlink_all_oauth_accounts(&self) -> Result<()> {
        self.base.send(&ApiRequest::post("/api/admin/auth/unlink-all"))
    }
}

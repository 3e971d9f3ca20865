use serde_json::Value;

use super::{ApiRequest, BaseClient, Query};
use crate::error::Result;
use crate::models::AssetStatisticsParams;

/// User administration. Admin only.
pub struct UsersAdminClient<'a> {
    base: &'a BaseClient,
}

impl<'a> UsersAdminClient<'a> {
    pub fn new(base: &'a BaseClient) -> Self {
        Self { base }
    }

    pub fn search(&self, user_id: Option<&str>, with_deleted: Option<bool>) -> Result<Vec<Value>> {
        let query = Query::new()
            .push_opt("id", user_id)
            .push_opt("withDeleted", with_deleted);
        self.base
            .fetch(&ApiRequest::get("/api/admin/users").query(query))
    }

    pub fn create(&self, dto: &Value) -> Result<Value> {
        self.base
            .fetch(&ApiRequest::post("/api/admin/users").json_value(dto.clone()))
    }

    pub fn get(&self, user_id: &str) -> Result<Value> {
        self.base
            .fetch(&ApiRequest::get(format!("/api/admin/users/{user_id}")))
    }

    pub fn update(&self, user_id: &str, dto: &Value) -> Result<Value> {
        self.base.fetch(
            &ApiRequest::put(format!("/api/admin/users/{user_id}")).json_value(dto.clone()),
        )
    }

    /// Soft-delete a user, or purge them with `{"force": true}`.
    pub fn delete(&self, user_id: &str, dto: &Value) -> Result<Value> {
        self.base.fetch(
            &ApiRequest::delete(format!("/api/admin/users/{user_id}")).json_value(dto.clone()),
        )
    }

    pub fn restore(&self, user_id: &str) -> Result<Value> {
        self.base
            .fetch(&ApiRequest::post(format!("/api/admin/users/{user_id}/restore")))
    }

    pub fn preferences(&self, user_id: &str) -> Result<Value> {
        self.base
            .fetch(&ApiRequest::get(format!("/api/admin/users/{user_id}/preferences")))
    }

    pub fn update_preferences(&self, user_id: &str, dto: &Value) -> Result<Value> {
        self.base.fetch(
            &ApiRequest::put(format!("/api/admin/users/{user_id}/preferences"))
                .json_value(dto.clone()),
        )
    }

    pub fn sessions(&self, user_id: &str) -> Result<Vec<Value>> {
        self.base
            .fetch(&ApiRequest::get(format!("/api/admin/users/{user_id}/sessions")))
    }

    pub fn statistics(&self, user_id: &str, params: &AssetStatisticsParams) -> Result<Value> {
        let query = Query::new()
            .push_opt("isFavorite", params.is_favorite)
            .push_opt("isTrashed", params.is_trashed)
            .push_opt("visibility", params.visibility);
        self.base.fetch(
            &ApiRequest::get(format!("/api/admin/users/{user_id}/statistics")).query(query),
        )
    }
}

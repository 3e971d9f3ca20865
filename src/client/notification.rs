use serde_json::Value;

use super::{path_segment, ApiRequest, BaseClient};
use crate::error::Result;
use crate::models::{
    NotificationCreateDto, NotificationDto, NotificationUpdateAllDto, NotificationUpdateDto,
};

pub struct NotificationsClient<'a> {
    base: &'a BaseClient,
}

impl<'a> NotificationsClient<'a> {
    pub fn new(base: &'a BaseClient) -> Self {
        Self { base }
    }

    pub fn list(&self) -> Result<Vec<NotificationDto>> {
        self.base.fetch(&ApiRequest::get("/api/notifications"))
    }

    pub fn get(&self, notification_id: &str) -> Result<NotificationDto> {
        self.base
            .fetch(&ApiRequest::get(format!("/api/notifications/{notification_id}")))
    }

    /// Mark one notification read or unread.
    pub fn update(
        &self,
        notification_id: &str,
        dto: &NotificationUpdateDto,
    ) -> Result<NotificationDto> {
        self.base.fetch(
            &ApiRequest::patch(format!("/api/notifications/{notification_id}")).json(dto)?,
        )
    }

    pub fn delete(&self, notification_id: &str) -> Result<()> {
        self.base
            .send(&ApiRequest::delete(format!("/api/notifications/{notification_id}")))
    }

    pub fn update_all(&self, dto: &NotificationUpdateAllDto) -> Result<()> {
        self.base
            .send(&ApiRequest::put("/api/notifications").json(dto)?)
    }

    pub fn delete_all(&self) -> Result<()> {
        self.base.send(&ApiRequest::delete("/api/notifications"))
    }

    pub fn create_admin(&self, dto: &NotificationCreateDto) -> Result<NotificationDto> {
        self.base
            .fetch(&ApiRequest::post("/api/admin/notifications").json(dto)?)
    }

    /// Render an email template with sample data.
    pub fn template_admin(&self, name: &str, dto: &Value) -> Result<Value> {
        let name = path_segment(name);
        self.base.fetch(
            &ApiRequest::post(format!("/api/admin/notifications/templates/{name}"))
                .json_value(dto.clone()),
        )
    }

    pub fn send_test_email_admin(&self, dto: &Value) -> Result<Value> {
        self.base.fetch(
            &ApiRequest::post("/api/admin/notifications/test-email").json_value(dto.clone()),
        )
    }
}

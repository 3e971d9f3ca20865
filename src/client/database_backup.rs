use serde_json::Value;

use super::{path_segment, ApiRequest, BaseClient, MultipartForm};
use crate::error::Result;

/// Database dump management. Admin only.
pub struct DatabaseBackupsClient<'a> {
    base: &'a BaseClient,
}

impl<'a> DatabaseBackupsClient<'a> {
    pub fn new(base: &'a BaseClient) -> Self {
        Self { base }
    }

    pub fn list(&self) -> Result<Value> {
        self.base.fetch(&ApiRequest::get("/api/admin/database-backups"))
    }

    /// Delete the backups named in `dto` (`{"backups": [...]}`).
    pub fn delete(&self, dto: &Value) -> Result<()> {
        self.base
            .send(&ApiRequest::delete("/api/admin/database-backups").json_value(dto.clone()))
    }

    pub fn download(&self, filename: &str) -> Result<Vec<u8>> {
        let filename = path_segment(filename);
        self.base.fetch_bytes(&ApiRequest::get(format!(
            "/api/admin/database-backups/{filename}"
        )))
    }

    /// Upload a dump as the `file` part.
    pub fn upload(&self, filename: &str, bytes: Vec<u8>) -> Result<()> {
        let form = MultipartForm::new().file("file", filename, bytes);
        self.base
            .post_multipart("/api/admin/database-backups/upload", form)
            .map(drop)
    }

    pub fn start_restore(&self) -> Result<()> {
        self.base
            .send(&ApiRequest::post("/api/admin/database-backups/start-restore"))
    }
}

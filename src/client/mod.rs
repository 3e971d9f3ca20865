//! Transport layer and resource clients.

mod base;
mod log;
mod request;
mod retry;

pub mod activity;
pub mod album;
pub mod api_key;
pub mod asset;
pub mod auth;
pub mod auth_admin;
pub mod database_backup;
pub mod download;
pub mod duplicate;
pub mod face;
pub mod job;
pub mod library;
pub mod maintenance;
pub mod map;
pub mod memory;
pub mod notification;
pub mod oauth;
pub mod partner;
pub mod person;
pub mod plugin;
pub mod queue;
pub mod search;
pub mod server;
pub mod shared_link;
pub mod sync;
pub mod system_config;
pub mod system_metadata;
pub mod tag;
pub mod timeline;
pub mod trash;
pub mod user;
pub mod user_admin;
pub mod view;
pub mod workflow;

use std::sync::Arc;

pub use base::{BaseClient, API_KEY_HEADER};
pub use log::{RequestLog, TracingLog};
pub use request::{ApiRequest, ApiResponse, FilePart, MultipartForm, Query, RequestBody};
pub(crate) use request::path_segment;
pub use retry::{Outcome, RetryPolicy, RetryReason};

pub use activity::ActivitiesClient;
pub use album::AlbumsClient;
pub use api_key::ApiKeysClient;
pub use asset::{AssetsClient, CHECKSUM_HEADER};
pub use auth::AuthClient;
pub use auth_admin::AuthAdminClient;
pub use database_backup::DatabaseBackupsClient;
pub use download::DownloadClient;
pub use duplicate::DuplicatesClient;
pub use face::FacesClient;
pub use job::JobsClient;
pub use library::LibrariesClient;
pub use maintenance::MaintenanceClient;
pub use map::{MapClient, MapMarkersParams};
pub use memory::MemoriesClient;
pub use notification::NotificationsClient;
pub use oauth::OAuthClient;
pub use partner::PartnersClient;
pub use person::PeopleClient;
pub use plugin::PluginsClient;
pub use queue::QueuesClient;
pub use search::SearchClient;
pub use server::ServerClient;
pub use shared_link::SharedLinksClient;
pub use sync::SyncClient;
pub use system_config::SystemConfigClient;
pub use system_metadata::SystemMetadataClient;
pub use tag::TagsClient;
pub use timeline::TimelineClient;
pub use trash::TrashClient;
pub use user::UsersClient;
pub use user_admin::UsersAdminClient;
pub use view::ViewClient;
pub use workflow::WorkflowsClient;

use crate::error::{ImmichError, Result};
use crate::options::ClientOptions;

// ---------------------------------------------------------------------------
// Public client
// ---------------------------------------------------------------------------

/// Main entry point for interacting with an Immich server.
///
/// ```no_run
/// use immich_sdk::ImmichClient;
///
/// let client = ImmichClient::new("http://localhost:2283", "my-api-key").unwrap();
/// let albums = client.albums().list(&Default::default()).unwrap();
/// for album in &albums {
///     println!("{}: {} assets", album.album_name, album.asset_count);
/// }
/// ```
#[derive(Debug, Clone)]
pub struct ImmichClient {
    base: BaseClient,
}

impl ImmichClient {
    /// Create a client with default [`ClientOptions`].
    ///
    /// * `base_url`: server root, e.g. `http://localhost:2283` (no `/api`)
    /// * `api_key`: sent as `x-api-key` on every request
    pub fn new(base_url: &str, api_key: &str) -> Result<Self> {
        Self::with_options(base_url, api_key, ClientOptions::default())
    }

    pub fn with_options(base_url: &str, api_key: &str, options: ClientOptions) -> Result<Self> {
        Ok(Self {
            base: BaseClient::new(base_url, api_key, options)?,
        })
    }

    /// Build a client from `IMMICH_URL` and `IMMICH_API_KEY`, plus the
    /// option overrides read by [`ClientOptions::from_env`].
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    pub(crate) fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let required = |name: &str| {
            lookup(name)
                .filter(|v| !v.trim().is_empty())
                .ok_or_else(|| ImmichError::Config(format!("{name} is not set")))
        };
        let url = required("IMMICH_URL")?;
        let api_key = required("IMMICH_API_KEY")?;
        let options = ClientOptions::from_lookup(&lookup)?;
        Self::with_options(url.trim(), api_key.trim(), options)
    }

    /// Replace the log sink used by every resource client.
    pub fn with_request_log(mut self, log: Arc<dyn RequestLog>) -> Self {
        self.base = self.base.with_request_log(log);
        self
    }

    /// The shared transport, for endpoints not covered by a resource client.
    pub fn base(&self) -> &BaseClient {
        &self.base
    }

    // -- sub-client accessors ------------------------------------------------

    pub fn activities(&self) -> ActivitiesClient<'_> {
        ActivitiesClient::new(&self.base)
    }

    pub fn albums(&self) -> AlbumsClient<'_> {
        AlbumsClient::new(&self.base)
    }

    pub fn api_keys(&self) -> ApiKeysClient<'_> {
        ApiKeysClient::new(&self.base)
    }

    pub fn assets(&self) -> AssetsClient<'_> {
        AssetsClient::new(&self.base)
    }

    pub fn auth(&self) -> AuthClient<'_> {
        AuthClient::new(&self.base)
    }

    pub fn auth_admin(&self) -> AuthAdminClient<'_> {
        AuthAdminClient::new(&self.base)
    }

    pub fn database_backups(&self) -> DatabaseBackupsClient<'_> {
        DatabaseBackupsClient::new(&self.base)
    }

    pub fn download(&self) -> DownloadClient<'_> {
        DownloadClient::new(&self.base)
    }

    pub fn duplicates(&self) -> DuplicatesClient<'_> {
        DuplicatesClient::new(&self.base)
    }

    pub fn faces(&self) -> FacesClient<'_> {
        FacesClient::new(&self.base)
    }

    pub fn jobs(&self) -> JobsClient<'_> {
        JobsClient::new(&self.base)
    }

    pub fn libraries(&self) -> LibrariesClient<'_> {
        LibrariesClient::new(&self.base)
    }

    pub fn map(&self) -> MapClient<'_> {
        MapClient::new(&self.base)
    }

    pub fn maintenance(&self) -> MaintenanceClient<'_> {
        MaintenanceClient::new(&self.base)
    }

    pub fn memories(&self) -> MemoriesClient<'_> {
        MemoriesClient::new(&self.base)
    }

    pub fn notifications(&self) -> NotificationsClient<'_> {
        NotificationsClient::new(&self.base)
    }

    pub fn oauth(&self) -> OAuthClient<'_> {
        OAuthClient::new(&self.base)
    }

    pub fn partners(&self) -> PartnersClient<'_> {
        PartnersClient::new(&self.base)
    }

    pub fn people(&self) -> PeopleClient<'_> {
        PeopleClient::new(&self.base)
    }

    pub fn plugins(&self) -> PluginsClient<'_> {
        PluginsClient::new(&self.base)
    }

    pub fn queues(&self) -> QueuesClient<'_> {
        QueuesClient::new(&self.base)
    }

    pub fn search(&self) -> SearchClient<'_> {
        SearchClient::new(&self.base)
    }

    pub fn server(&self) -> ServerClient<'_> {
        ServerClient::new(&self.base)
    }

    pub fn shared_links(&self) -> SharedLinksClient<'_> {
        SharedLinksClient::new(&self.base)
    }

    pub fn sync(&self) -> SyncClient<'_> {
        SyncClient::new(&self.base)
    }

    pub fn system_config(&self) -> SystemConfigClient<'_> {
        SystemConfigClient::new(&self.base)
    }

    pub fn system_metadata(&self) -> SystemMetadataClient<'_> {
        SystemMetadataClient::new(&self.base)
    }

    pub fn tags(&self) -> TagsClient<'_> {
        TagsClient::new(&self.base)
    }

    pub fn timeline(&self) -> TimelineClient<'_> {
        TimelineClient::new(&self.base)
    }

    pub fn trash(&self) -> TrashClient<'_> {
        TrashClient::new(&self.base)
    }

    pub fn users(&self) -> UsersClient<'_> {
        UsersClient::new(&self.base)
    }

    pub fn users_admin(&self) -> UsersAdminClient<'_> {
        UsersAdminClient::new(&self.base)
    }

    pub fn view(&self) -> ViewClient<'_> {
        ViewClient::new(&self.base)
    }

    pub fn workflows(&self) -> WorkflowsClient<'_> {
        WorkflowsClient::new(&self.base)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |name| map.get(name).cloned()
    }

    #[test]
    fn from_env_requires_url_and_key() {
        let err = ImmichClient::from_lookup(lookup(&[("IMMICH_API_KEY", "k")])).unwrap_err();
        assert!(matches!(err, ImmichError::Config(ref m) if m.contains("IMMICH_URL")));

        let err = ImmichClient::from_lookup(lookup(&[
            ("IMMICH_URL", "http://localhost:2283"),
            ("IMMICH_API_KEY", ""),
        ]))
        .unwrap_err();
        assert!(matches!(err, ImmichError::Config(ref m) if m.contains("IMMICH_API_KEY")));
    }

    #[test]
    fn from_env_applies_option_overrides() {
        let client = ImmichClient::from_lookup(lookup(&[
            ("IMMICH_URL", "http://localhost:2283/"),
            ("IMMICH_API_KEY", "k"),
            ("IMMICH_MAX_RETRIES", "1"),
        ]))
        .unwrap();
        assert_eq!(client.base().base_url(), "http://localhost:2283");
        assert_eq!(client.base().options().max_retries, 1);
    }
}

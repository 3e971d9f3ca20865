//! Immich API client library for Rust.
//!
//! A blocking client for the [Immich](https://immich.app) photo server's REST
//! API. One shared transport ([`BaseClient`]) attaches the API key, applies
//! timeouts, retries transient failures and maps error responses; thin
//! resource clients (albums, assets, users...) hang off [`ImmichClient`].
//!
//! # Quick Start
//!
//! ```no_run
//! use immich_sdk::{ImmichClient, ListAlbumsParams};
//!
//! let client = ImmichClient::new("http://localhost:2283", "my-api-key").unwrap();
//!
//! let albums = client.albums().list(&ListAlbumsParams::default()).unwrap();
//! for album in &albums {
//!     println!("{} ({} assets)", album.album_name, album.asset_count);
//! }
//! ```
//!
//! # Logging
//!
//! Requests, retries and completions are reported as `tracing` events with
//! target `immich_sdk`. Install any subscriber to see them, or turn them off
//! with [`ClientOptions::enable_logging`].

pub mod client;
pub mod error;
pub mod models;
pub mod options;

// Re-export the main public types at the crate root for convenience.
pub use client::{
    ApiRequest, ApiResponse, BaseClient, ImmichClient, MapMarkersParams, MultipartForm, Query,
    RequestBody, RequestLog, RetryPolicy, TracingLog,
};
pub use error::{ImmichError, Result};
pub use models::{
    AlbumResponseDto, AssetResponseDto, GetAlbumParams, ListAlbumsParams, SharedLinkAccess,
    UserResponseDto,
};
pub use options::ClientOptions;

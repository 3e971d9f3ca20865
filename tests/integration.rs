//! Live integration tests against a real Immich server.
//!
//! Ignored by default. Point them at a server with:
//!
//! ```bash
//! IMMICH_URL=http://localhost:2283 IMMICH_API_KEY=... \
//!     cargo test --test integration -- --ignored --nocapture
//! ```
//!
//! The album lifecycle test creates and deletes one album on that server.

use immich_sdk::models::{CreateAlbumDto, UpdateAlbumDto};
use immich_sdk::{GetAlbumParams, ImmichClient, ListAlbumsParams};

fn live_client() -> Option<ImmichClient> {
    match ImmichClient::from_env() {
        Ok(client) => Some(client),
        Err(e) => {
            println!("Skipping live test: {e}");
            None
        }
    }
}

// ---------------------------------------------------------------------------
// 1. Server info
// ---------------------------------------------------------------------------

#[test]
#[ignore]
fn test_server_version_and_features() {
    let Some(client) = live_client() else { return };

    let version = client.server().version().unwrap();
    println!(
        "[1] Server version {}.{}.{}",
        version["major"], version["minor"], version["patch"]
    );
    assert!(version.get("major").is_some());

    let features = client.server().features().unwrap();
    println!("  - Features: {}", features.as_object().map_or(0, |f| f.len()));
}

// ---------------------------------------------------------------------------
// 2. Current user
// ---------------------------------------------------------------------------

#[test]
#[ignore]
fn test_current_user() {
    let Some(client) = live_client() else { return };

    let me = client.users().me().unwrap();
    println!("[2] Authenticated as {} <{}>", me.name, me.email);
    assert!(!me.id.is_empty());

    let key = client.api_keys().me().unwrap();
    println!("  - API key: {} ({} permissions)", key.name, key.permissions.len());
}

// ---------------------------------------------------------------------------
// 3. Albums
// ---------------------------------------------------------------------------

#[test]
#[ignore]
fn test_list_albums() {
    let Some(client) = live_client() else { return };

    let albums = client.albums().list(&ListAlbumsParams::default()).unwrap();
    println!("[3] Found {} albums", albums.len());
    for album in albums.iter().take(3) {
        println!("  - {} ({} assets)", album.album_name, album.asset_count);
    }

    let stats = client.albums().statistics().unwrap();
    assert!(stats.owned as usize <= albums.len() + stats.shared as usize);
}

#[test]
#[ignore]
fn test_album_lifecycle() {
    let Some(client) = live_client() else { return };
    let albums = client.albums();

    println!("[4] Creating album");
    let created = albums
        .create(&CreateAlbumDto {
            album_name: "immich-sdk integration test".into(),
            description: Some("Created by the Rust integration suite".into()),
            ..Default::default()
        })
        .unwrap();
    println!("  - Created {}", created.id);

    let updated = albums
        .update(
            &created.id,
            &UpdateAlbumDto {
                album_name: Some("immich-sdk integration test (renamed)".into()),
                ..Default::default()
            },
        )
        .unwrap();
    assert_eq!(updated.album_name, "immich-sdk integration test (renamed)");

    albums.delete(&created.id).unwrap();
    println!("  - Deleted {}", created.id);

    let err = albums
        .get(&created.id, &GetAlbumParams::default())
        .unwrap_err();
    assert!(err.is_api_error(), "expected an API error, got {err:?}");
    println!("  - Verified: album is gone (HTTP {:?})", err.status_code());
}

// ---------------------------------------------------------------------------
// 5. Errors
// ---------------------------------------------------------------------------

#[test]
#[ignore]
fn test_invalid_id_is_rejected() {
    let Some(client) = live_client() else { return };

    let err = client
        .albums()
        .get("not-a-uuid", &GetAlbumParams::default())
        .unwrap_err();
    println!("[5] Invalid id rejected: {err}");
    assert!(err.is_api_error());
}

//! Resource clients against a local mock server: paths, payloads and
//! response decoding.

mod support;

use immich_sdk::models::{
    AlbumUserRole, AssetIdsDto, AssetMediaSize, BulkIdsDto, CreateAlbumDto, MemorySearchParams,
    NotificationUpdateAllDto, SharedLinkCreateDto, UpdateAlbumUserDto,
};
use immich_sdk::{ImmichError, ListAlbumsParams, SharedLinkAccess};
use mockito::{Matcher, Server};
use serde_json::json;

use support::client;

fn album_json(id: &str, name: &str) -> serde_json::Value {
    json!({
        "id": id,
        "albumName": name,
        "description": "",
        "albumThumbnailAssetId": null,
        "albumUsers": [],
        "assetCount": 0,
        "assets": [],
        "createdAt": "2024-01-01T00:00:00.000Z",
        "updatedAt": "2024-01-01T00:00:00.000Z",
        "ownerId": "user-1",
        "owner": {
            "id": "user-1",
            "email": "u@example.com",
            "name": "User",
            "avatarColor": "primary",
            "profileImagePath": "",
            "profileChangedAt": "2024-01-01T00:00:00.000Z"
        },
        "shared": false,
        "hasSharedLink": false,
        "isActivityEnabled": false,
        "contributorCounts": []
    })
}

#[test]
fn albums_list_returns_parsed_albums() {
    let mut server = Server::new();
    let mock = server
        .mock("GET", "/api/albums")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(json!([album_json("album-1", "Test Album")]).to_string())
        .create();

    let (client, _) = client(&server.url(), 1);
    let albums = client.albums().list(&ListAlbumsParams::default()).unwrap();

    mock.assert();
    assert_eq!(albums.len(), 1);
    assert_eq!(albums[0].id, "album-1");
    assert_eq!(albums[0].album_name, "Test Album");
    assert_eq!(albums[0].owner.as_ref().unwrap().email, "u@example.com");
}

#[test]
fn retried_create_sends_the_same_payload() {
    let mut server = Server::new();
    let body = Matcher::Json(json!({"albumName": "Trip", "assetIds": ["a-1"]}));
    let failing = server
        .mock("POST", "/api/albums")
        .match_header("content-type", "application/json")
        .match_body(body.clone())
        .with_status(500)
        .expect(1)
        .create();
    let ok = server
        .mock("POST", "/api/albums")
        .match_body(body)
        .with_status(201)
        .with_header("content-type", "application/json")
        .with_body(album_json("album-2", "Trip").to_string())
        .expect(1)
        .create();

    let (client, log) = client(&server.url(), 3);
    let dto = CreateAlbumDto {
        album_name: "Trip".into(),
        asset_ids: Some(vec!["a-1".into()]),
        ..Default::default()
    };
    let album = client.albums().create(&dto).unwrap();

    assert_eq!(album.id, "album-2");
    failing.assert();
    ok.assert();
    assert_eq!(log.count("retry"), 1);
}

#[test]
fn album_user_endpoints_use_member_paths() {
    let mut server = Server::new();
    let update = server
        .mock("PUT", "/api/albums/album-1/user/user-2")
        .match_body(Matcher::Json(json!({"role": "viewer"})))
        .with_status(200)
        .create();
    let remove = server
        .mock("DELETE", "/api/albums/album-1/user/user-2")
        .with_status(204)
        .create();

    let (client, _) = client(&server.url(), 1);
    let albums = client.albums();
    albums
        .update_user(
            "album-1",
            "user-2",
            &UpdateAlbumUserDto {
                role: AlbumUserRole::Viewer,
            },
        )
        .unwrap();
    albums.remove_user("album-1", "user-2").unwrap();

    update.assert();
    remove.assert();
}

#[test]
fn shared_link_access_is_sent_as_query() {
    let mut server = Server::new();
    let mock = server
        .mock("PUT", "/api/albums/album-1/assets")
        .match_query(Matcher::UrlEncoded("key".into(), "secret".into()))
        .match_body(Matcher::Json(json!({"ids": ["a-1", "a-2"]})))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(r#"[{"id":"a-1","success":true},{"id":"a-2","success":false,"error":"duplicate"}]"#)
        .create();

    let (client, _) = client(&server.url(), 1);
    let results = client
        .albums()
        .add_assets(
            "album-1",
            &BulkIdsDto::new(["a-1", "a-2"]),
            &SharedLinkAccess::key("secret"),
        )
        .unwrap();

    mock.assert();
    assert!(results[0].success);
    assert_eq!(
        results[1].error,
        Some(immich_sdk::models::BulkIdErrorReason::Duplicate)
    );
}

#[test]
fn thumbnail_returns_raw_bytes() {
    let mut server = Server::new();
    let jpeg = vec![0xFF, 0xD8, 0xFF, 0xE0, 0x00, 0x10];
    let mock = server
        .mock("GET", "/api/assets/asset-1/thumbnail")
        .match_query(Matcher::AllOf(vec![
            Matcher::UrlEncoded("edited".into(), "false".into()),
            Matcher::UrlEncoded("size".into(), "preview".into()),
        ]))
        .with_status(200)
        .with_header("content-type", "image/jpeg")
        .with_body(jpeg.clone())
        .create();

    let (client, _) = client(&server.url(), 1);
    let bytes = client
        .assets()
        .thumbnail(
            "asset-1",
            &SharedLinkAccess::default(),
            Some(AssetMediaSize::Preview),
            false,
        )
        .unwrap();

    mock.assert();
    assert_eq!(bytes, jpeg);
}

#[test]
fn download_archive_posts_ids_and_returns_bytes() {
    let mut server = Server::new();
    let mock = server
        .mock("POST", "/api/download/archive")
        .match_body(Matcher::Json(json!({"assetIds": ["a-1"]})))
        .with_status(200)
        .with_header("content-type", "application/octet-stream")
        .with_body(b"PK\x03\x04zip")
        .create();

    let (client, _) = client(&server.url(), 1);
    let archive = client
        .download()
        .archive(
            &AssetIdsDto {
                asset_ids: vec!["a-1".into()],
            },
            &SharedLinkAccess::default(),
        )
        .unwrap();

    mock.assert();
    assert!(archive.starts_with(b"PK"));
}

#[test]
fn database_backup_upload_sends_file_part() {
    let mut server = Server::new();
    let mock = server
        .mock("POST", "/api/admin/database-backups/upload")
        .match_body(Matcher::Regex(r#"name="file"; filename="dump.sql.gz""#.into()))
        .with_status(201)
        .create();

    let (client, _) = client(&server.url(), 1);
    client
        .database_backups()
        .upload("dump.sql.gz", b"dump".to_vec())
        .unwrap();
    mock.assert();
}

#[test]
fn search_assets_returns_json() {
    let mut server = Server::new();
    let mock = server
        .mock("POST", "/api/search/assets")
        .match_body(Matcher::Json(json!({"originalFileName": "IMG_0001", "size": 10})))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(
            json!({
                "albums": {"count": 0, "items": [], "total": 0, "facets": []},
                "assets": {"count": 0, "items": [], "total": 0, "facets": [], "nextPage": null}
            })
            .to_string(),
        )
        .create();

    let (client, _) = client(&server.url(), 1);
    let result = client
        .search()
        .assets(&json!({"originalFileName": "IMG_0001", "size": 10}))
        .unwrap();

    mock.assert();
    assert_eq!(result["assets"]["total"], 0);
    assert!(result["assets"]["nextPage"].is_null());
}

#[test]
fn memory_search_accepts_a_single_object() {
    let mut server = Server::new();
    let memory = json!({
        "id": "m-1",
        "type": "on_this_day",
        "memoryAt": "2024-06-01T00:00:00.000Z",
        "ownerId": "user-1",
        "createdAt": "2024-06-01T00:00:00.000Z",
        "updatedAt": "2024-06-01T00:00:00.000Z",
        "isSaved": false,
        "assets": [],
        "data": {"year": 2020}
    });
    let mock = server
        .mock("GET", "/api/memories")
        .match_query(Matcher::UrlEncoded("isSaved".into(), "true".into()))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(memory.to_string())
        .create();

    let (client, _) = client(&server.url(), 1);
    let params = MemorySearchParams {
        is_saved: Some(true),
        ..Default::default()
    };
    let memories = client.memories().search(&params).unwrap();

    mock.assert();
    assert_eq!(memories.len(), 1);
    assert_eq!(memories[0].id, "m-1");
}

#[test]
fn users_me_reads_the_me_profile() {
    let mut server = Server::new();
    let mock = server
        .mock("GET", "/api/user/me")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(r#"{"id":"user-1","email":"u@example.com","name":"User"}"#)
        .create();

    let (client, _) = client(&server.url(), 1);
    let me = client.users().me().unwrap();

    mock.assert();
    assert_eq!(me.name, "User");
    assert_eq!(me.avatar_color, None);
}

#[test]
fn bodiless_endpoints_return_unit() {
    let mut server = Server::new();
    let restore = server
        .mock("POST", "/api/trash/restore")
        .match_body(Matcher::Json(json!({"ids": ["a-1"]})))
        .with_status(204)
        .create();
    let clear = server
        .mock("PUT", "/api/notifications")
        .match_body(Matcher::Json(json!({"ids": ["n-1"]})))
        .with_status(204)
        .create();

    let (client, _) = client(&server.url(), 1);
    client.trash().restore(&BulkIdsDto::new(["a-1"])).unwrap();
    client
        .notifications()
        .update_all(&NotificationUpdateAllDto {
            ids: vec!["n-1".into()],
            read_at: None,
        })
        .unwrap();

    restore.assert();
    clear.assert();
}

#[test]
fn shared_link_create_sends_defaults() {
    let mut server = Server::new();
    let mock = server
        .mock("POST", "/api/shared-link")
        .match_body(Matcher::Json(json!({
            "type": "INDIVIDUAL",
            "assetIds": ["a-1"],
            "allowDownload": true,
            "showMetadata": true
        })))
        .with_status(201)
        .with_header("content-type", "application/json")
        .with_body(
            json!({
                "id": "link-1",
                "type": "INDIVIDUAL",
                "allowDownload": true,
                "allowUpload": false,
                "createdAt": "2024-01-01T00:00:00.000Z",
                "key": "abc",
                "showMetadata": true,
                "assets": []
            })
            .to_string(),
        )
        .create();

    let (client, _) = client(&server.url(), 1);
    let link = client
        .shared_links()
        .create(&SharedLinkCreateDto::assets(vec!["a-1".into()]))
        .unwrap();

    mock.assert();
    assert_eq!(link.key, "abc");
    assert!(link.album.is_none());
}

#[test]
fn undecodable_success_body_is_a_decode_error() {
    let mut server = Server::new();
    server
        .mock("GET", "/api/albums/statistics")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(r#"{"owned":"many"}"#)
        .create();

    let (client, _) = client(&server.url(), 1);
    let err = client.albums().statistics().unwrap_err();
    assert!(matches!(err, ImmichError::Decode(_)));
}

#[test]
fn metadata_keys_are_percent_encoded_in_the_path() {
    let mut server = Server::new();
    let mock = server
        .mock("GET", "/api/assets/asset-1/metadata/mobile%2Fapp%3Fv%231")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(r#"{"key":"mobile/app?v#1","value":{}}"#)
        .create();

    let (client, _) = client(&server.url(), 1);
    let item = client
        .assets()
        .metadata_by_key("asset-1", "mobile/app?v#1")
        .unwrap();

    assert_eq!(item["key"], "mobile/app?v#1");
    mock.assert();
}

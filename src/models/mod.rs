//! Request and response types.
//!
//! Endpoints whose payloads the server leaves loosely specified exchange
//! `serde_json::Value` instead of a dedicated type.

pub mod activity;
pub mod album;
pub mod api_key;
pub mod asset;
pub mod auth;
pub mod common;
pub mod download;
pub mod memory;
pub mod notification;
pub mod shared_link;
pub mod user;

pub use activity::*;
pub use album::*;
pub use api_key::*;
pub use asset::*;
pub use auth::*;
pub use common::*;
pub use download::*;
pub use memory::{
    MemoryCreateDto, MemoryResponseDto, MemorySearchOrder, MemorySearchParams,
    MemoryStatisticsResponseDto, MemoryType, MemoryUpdateDto, OnThisDayDto,
};
pub use notification::*;
pub use shared_link::*;
pub use user::*;

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn unset_optional_fields_are_not_serialized() {
        let dto = CreateAlbumDto {
            album_name: "Trip".into(),
            ..Default::default()
        };
        assert_eq!(serde_json::to_value(&dto).unwrap(), json!({"albumName": "Trip"}));

        let dto = UpdateAlbumDto {
            order: Some(AssetOrder::Desc),
            ..Default::default()
        };
        assert_eq!(serde_json::to_value(&dto).unwrap(), json!({"order": "desc"}));
    }

    #[test]
    fn type_fields_use_wire_names() {
        let dto = ActivityCreateDto {
            album_id: "a".into(),
            activity_type: ReactionType::Like,
            asset_id: None,
            comment: None,
        };
        assert_eq!(
            serde_json::to_value(&dto).unwrap(),
            json!({"albumId": "a", "type": "like"})
        );

        let link = SharedLinkCreateDto::album("a-1");
        let value = serde_json::to_value(&link).unwrap();
        assert_eq!(value["type"], "ALBUM");
        assert_eq!(value["allowDownload"], true);
        assert!(value.get("password").is_none());
    }

    #[test]
    fn album_parses_with_sparse_owner() {
        let album: AlbumResponseDto = serde_json::from_value(json!({
            "id": "album-1",
            "albumName": "Test Album",
            "description": "",
            "albumThumbnailAssetId": null,
            "albumUsers": [],
            "assetCount": 0,
            "assets": [],
            "createdAt": "2024-01-01T00:00:00.000Z",
            "updatedAt": "2024-01-01T00:00:00.000Z",
            "ownerId": "user-1",
            "owner": {"id": "user-1", "email": "u@x.com", "name": "User"},
            "shared": false,
            "hasSharedLink": false,
            "isActivityEnabled": false,
            "contributorCounts": []
        }))
        .unwrap();
        assert_eq!(album.album_name, "Test Album");
        assert_eq!(album.owner.unwrap().profile_image_path, "");
    }

    #[test]
    fn asset_parses_exif_and_enums() {
        let asset: AssetResponseDto = serde_json::from_value(json!({
            "id": "asset-1",
            "type": "VIDEO",
            "visibility": "archive",
            "checksum": "csum",
            "createdAt": "2024-01-01T00:00:00.000Z",
            "deviceAssetId": "dev-1",
            "deviceId": "device-1",
            "duration": "0:00:05.000",
            "exifInfo": {"make": "Canon", "fNumber": 2.8},
            "fileCreatedAt": "2024-01-01T00:00:00.000Z",
            "fileModifiedAt": "2024-01-01T00:00:00.000Z",
            "hasMetadata": true,
            "localDateTime": "2024-01-01T00:00:00.000Z",
            "originalFileName": "x.mp4",
            "originalPath": "/x.mp4",
            "ownerId": "user-1",
            "updatedAt": "2024-01-01T00:00:00.000Z",
            "isArchived": true,
            "isEdited": false,
            "isFavorite": false,
            "isOffline": false,
            "isTrashed": false
        }))
        .unwrap();
        assert_eq!(asset.asset_type, AssetType::Video);
        assert_eq!(asset.visibility, AssetVisibility::Archive);
        let exif = asset.exif_info.unwrap();
        assert_eq!(exif.make.as_deref(), Some("Canon"));
        assert_eq!(exif.f_number, Some(2.8));
    }

    #[test]
    fn notification_type_uses_pascal_case() {
        let n: NotificationDto = serde_json::from_value(json!({
            "id": "n-1",
            "createdAt": "2024-01-01T00:00:00.000Z",
            "title": "Backup failed",
            "type": "BackupFailed",
            "level": "error"
        }))
        .unwrap();
        assert_eq!(n.notification_type, NotificationType::BackupFailed);
        assert_eq!(n.level, NotificationLevel::Error);
    }
}

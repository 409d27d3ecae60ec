//! MongoDB 사용자 문서 매핑
//!
//! 컬렉션에 저장되는 문서 구조와 도메인 엔티티 간 변환을 담당합니다.
//!
//! ```text
//! {
//!   "_id": ObjectId("..."),
//!   "name": "John Doe",
//!   "email": "john.doe@example.com",
//!   "location": { "latitude": 37.7749, "longitude": -122.4194 }   // 선택
//! }
//! ```

use mongodb::bson::{doc, oid::ObjectId, Document};
use serde::{Deserialize, Serialize};

use crate::domain::entities::users::{Geolocation, NewUser, User, UserField, UserPatch};

/// 저장된 위치 하위 문서
///
/// 좌표 한쪽이 누락된 문서는 해당 좌표를 0으로 읽습니다.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeolocationDocument {
    #[serde(default)]
    pub latitude: f64,
    #[serde(default)]
    pub longitude: f64,
}

impl From<Geolocation> for GeolocationDocument {
    fn from(location: Geolocation) -> Self {
        Self {
            latitude: location.latitude,
            longitude: location.longitude,
        }
    }
}

impl From<GeolocationDocument> for Geolocation {
    fn from(document: GeolocationDocument) -> Self {
        Geolocation::new(document.latitude, document.longitude)
    }
}

/// `users` 컬렉션 문서
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserDocument {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    pub name: String,
    pub email: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<GeolocationDocument>,
}

impl From<&NewUser> for UserDocument {
    fn from(new_user: &NewUser) -> Self {
        Self {
            id: None,
            name: new_user.name.clone(),
            email: new_user.email.clone(),
            location: new_user.location.map(GeolocationDocument::from),
        }
    }
}

impl From<UserDocument> for User {
    fn from(document: UserDocument) -> Self {
        User {
            id: document.id.map(|id| id.to_hex()).unwrap_or_default(),
            name: document.name,
            email: document.email,
            location: document.location.map(Geolocation::from),
        }
    }
}

/// 패치를 `$set` / `$unset` 업데이트 문서로 변환합니다.
///
/// 값이 있는 필드는 `$set`, 마스크에 포함됐지만 위치가 없는 경우는 `$unset`으로 기록합니다.
/// 적용할 필드가 없으면 `None`을 반환합니다. MongoDB는 빈 `$set`을 거부합니다.
pub fn update_document(patch: &UserPatch) -> Option<Document> {
    let mut set = Document::new();
    let mut unset = Document::new();

    if let Some(name) = &patch.name {
        set.insert(UserField::Name.path(), name.as_str());
    }
    if let Some(email) = &patch.email {
        set.insert(UserField::Email.path(), email.as_str());
    }
    match patch.location {
        Some(Some(location)) => {
            set.insert(
                UserField::Location.path(),
                doc! {
                    "latitude": location.latitude,
                    "longitude": location.longitude,
                },
            );
        }
        Some(None) => {
            unset.insert(UserField::Location.path(), "");
        }
        None => {}
    }

    let mut update = Document::new();
    if !set.is_empty() {
        update.insert("$set", set);
    }
    if !unset.is_empty() {
        update.insert("$unset", unset);
    }

    (!update.is_empty()).then_some(update)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::users::UpdateMask;
    use mongodb::bson;

    fn incoming() -> User {
        User {
            id: "507f1f77bcf86cd799439011".to_string(),
            name: "John Updated".to_string(),
            email: "john.updated@example.com".to_string(),
            location: Some(Geolocation::new(40.7128, -74.0060)),
        }
    }

    #[test]
    fn test_new_user_document_omits_id_and_missing_location() {
        let document = UserDocument::from(&NewUser::new("Jane Roe", "jane@example.com", None));
        let bson_doc = bson::to_document(&document).unwrap();

        assert!(!bson_doc.contains_key("_id"));
        assert!(!bson_doc.contains_key("location"));
        assert_eq!(bson_doc.get_str("name").unwrap(), "Jane Roe");
    }

    #[test]
    fn test_document_to_user_maps_object_id_to_hex() {
        let object_id = ObjectId::parse_str("507f1f77bcf86cd799439011").unwrap();
        let raw = doc! {
            "_id": object_id,
            "name": "John Doe",
            "email": "john.doe@example.com",
            "location": { "latitude": 37.7749, "longitude": -122.4194 },
        };

        let user = User::from(bson::from_document::<UserDocument>(raw).unwrap());

        assert_eq!(user.id, "507f1f77bcf86cd799439011");
        assert_eq!(user.location, Some(Geolocation::new(37.7749, -122.4194)));
    }

    #[test]
    fn test_partial_location_reads_missing_coordinate_as_zero() {
        let raw = doc! {
            "_id": ObjectId::new(),
            "name": "John Doe",
            "email": "john.doe@example.com",
            "location": { "latitude": 37.7749 },
        };

        let user = User::from(bson::from_document::<UserDocument>(raw).unwrap());

        assert_eq!(user.location, Some(Geolocation::new(37.7749, 0.0)));
    }

    #[test]
    fn test_update_document_sets_only_masked_fields() {
        let patch = UserPatch::from_masked(&incoming(), &UpdateMask::new(["name", "email"]));
        let update = update_document(&patch).unwrap();

        let set = update.get_document("$set").unwrap();
        assert_eq!(set.get_str("name").unwrap(), "John Updated");
        assert_eq!(set.get_str("email").unwrap(), "john.updated@example.com");
        assert!(!set.contains_key("location"));
        assert!(!update.contains_key("$unset"));
    }

    #[test]
    fn test_update_document_unsets_cleared_location() {
        let user = User {
            location: None,
            ..incoming()
        };
        let patch = UserPatch::from_masked(&user, &UpdateMask::new(["location"]));
        let update = update_document(&patch).unwrap();

        assert!(!update.contains_key("$set"));
        assert!(update.get_document("$unset").unwrap().contains_key("location"));
    }

    #[test]
    fn test_update_document_empty_patch() {
        let patch = UserPatch::from_masked(&incoming(), &UpdateMask::default());

        assert_eq!(update_document(&patch), None);
    }
}

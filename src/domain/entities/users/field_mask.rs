//! 필드 마스크 기반 부분 업데이트
//!
//! 수정 요청은 항상 "무엇을 바꿀지"를 명시한 경로 목록(`UpdateMask`)과 함께 전달됩니다.
//! 입력 사용자 객체에서 후보 필드 집합을 모두 만든 뒤, 마스크 경로와의 교집합만 남겨
//! `UserPatch`를 구성합니다.
//!
//! ```text
//!  incoming User ──► candidates {name, email, location}
//!                          │
//!                          ▼  ∩ mask.paths
//!                      UserPatch ──► 리포지토리가 저장소 연산으로 변환
//! ```
//!
//! 값이 비어 있어도(빈 문자열, 위치 없음) 경로가 마스크에 있으면 그대로 기록됩니다.
//! 마스크에 없는 필드는 입력에 값이 있어도 무시됩니다.

use std::collections::{BTreeMap, BTreeSet};

use super::user::{Geolocation, User};

/// 수정 가능한 사용자 필드
///
/// `id`는 후보에 포함되지 않으므로 마스크에 있어도 절대 수정되지 않습니다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum UserField {
    Name,
    Email,
    Location,
}

impl UserField {
    pub const ALL: [UserField; 3] = [UserField::Name, UserField::Email, UserField::Location];

    /// 마스크와 문서에서 사용하는 필드 경로
    pub fn path(self) -> &'static str {
        match self {
            UserField::Name => "name",
            UserField::Email => "email",
            UserField::Location => "location",
        }
    }

    pub fn from_path(path: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|field| field.path() == path)
    }
}

/// 수정 요청의 필드 경로 목록
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UpdateMask {
    paths: BTreeSet<String>,
}

impl UpdateMask {
    pub fn new<I, S>(paths: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            paths: paths.into_iter().map(Into::into).collect(),
        }
    }

    pub fn contains(&self, path: &str) -> bool {
        self.paths.contains(path)
    }

    pub fn is_empty(&self) -> bool {
        self.paths.is_empty()
    }

    pub fn paths(&self) -> impl Iterator<Item = &str> {
        self.paths.iter().map(String::as_str)
    }
}

/// 후보 필드 하나의 값
#[derive(Debug, Clone, PartialEq)]
enum FieldValue {
    Text(String),
    Location(Option<Geolocation>),
}

/// 마스크를 통과한 필드만 담은 부분 업데이트
///
/// `location`은 이중 `Option`입니다.
/// - `None`: 위치를 건드리지 않음
/// - `Some(None)`: 저장된 위치를 제거
/// - `Some(Some(_))`: 위치를 교체
#[derive(Debug, Clone, Default, PartialEq)]
pub struct UserPatch {
    pub name: Option<String>,
    pub email: Option<String>,
    pub location: Option<Option<Geolocation>>,
}

impl UserPatch {
    /// 입력 사용자에서 후보 필드를 만들고 마스크와 교집합을 취해 패치를 생성합니다.
    pub fn from_masked(user: &User, mask: &UpdateMask) -> Self {
        let mut candidates = candidate_fields(user);
        candidates.retain(|field, _| mask.contains(field.path()));

        let mut patch = UserPatch::default();
        for (field, value) in candidates {
            match (field, value) {
                (UserField::Name, FieldValue::Text(name)) => patch.name = Some(name),
                (UserField::Email, FieldValue::Text(email)) => patch.email = Some(email),
                (UserField::Location, FieldValue::Location(location)) => patch.location = Some(location),
                _ => {}
            }
        }
        patch
    }

    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.email.is_none() && self.location.is_none()
    }

    /// 패치에 포함된 필드 목록
    pub fn fields(&self) -> Vec<UserField> {
        let mut fields = Vec::new();
        if self.name.is_some() {
            fields.push(UserField::Name);
        }
        if self.email.is_some() {
            fields.push(UserField::Email);
        }
        if self.location.is_some() {
            fields.push(UserField::Location);
        }
        fields
    }

    /// 저장된 사용자에 패치를 적용합니다. 식별자는 변경하지 않습니다.
    pub fn apply_to(self, user: &mut User) {
        if let Some(name) = self.name {
            user.name = name;
        }
        if let Some(email) = self.email {
            user.email = email;
        }
        if let Some(location) = self.location {
            user.location = location;
        }
    }
}

fn candidate_fields(user: &User) -> BTreeMap<UserField, FieldValue> {
    BTreeMap::from([
        (UserField::Name, FieldValue::Text(user.name.clone())),
        (UserField::Email, FieldValue::Text(user.email.clone())),
        (UserField::Location, FieldValue::Location(user.location)),
    ])
}

#[cfg(test)]
mod tests {
    use super::*;

    fn incoming() -> User {
        User {
            id: "507f1f77bcf86cd799439011".to_string(),
            name: "John Updated".to_string(),
            email: "john.updated@example.com".to_string(),
            location: Some(Geolocation::new(40.7128, -74.0060)),
        }
    }

    #[test]
    fn test_mask_selects_only_requested_fields() {
        let patch = UserPatch::from_masked(&incoming(), &UpdateMask::new(["name", "email"]));

        assert_eq!(patch.name.as_deref(), Some("John Updated"));
        assert_eq!(patch.email.as_deref(), Some("john.updated@example.com"));
        assert_eq!(patch.location, None);
    }

    #[test]
    fn test_empty_value_in_mask_is_still_written() {
        let user = User {
            name: String::new(),
            ..incoming()
        };

        let patch = UserPatch::from_masked(&user, &UpdateMask::new(["name"]));

        assert_eq!(patch.name.as_deref(), Some(""));
        assert_eq!(patch.fields(), vec![UserField::Name]);
    }

    #[test]
    fn test_location_in_mask_without_value_clears_location() {
        let user = User {
            location: None,
            ..incoming()
        };

        let patch = UserPatch::from_masked(&user, &UpdateMask::new(["location"]));

        assert_eq!(patch.location, Some(None));
    }

    #[test]
    fn test_unknown_and_nested_paths_are_ignored() {
        let patch = UserPatch::from_masked(
            &incoming(),
            &UpdateMask::new(["id", "nickname", "location.latitude"]),
        );

        assert!(patch.is_empty());
    }

    #[test]
    fn test_apply_to_leaves_unmasked_fields() {
        let mut stored = User {
            id: "507f1f77bcf86cd799439011".to_string(),
            name: "John Doe".to_string(),
            email: "john.doe@example.com".to_string(),
            location: Some(Geolocation::new(37.7749, -122.4194)),
        };

        UserPatch::from_masked(&incoming(), &UpdateMask::new(["email"])).apply_to(&mut stored);

        assert_eq!(stored.name, "John Doe");
        assert_eq!(stored.email, "john.updated@example.com");
        assert_eq!(stored.location, Some(Geolocation::new(37.7749, -122.4194)));
        assert_eq!(stored.id, "507f1f77bcf86cd799439011");
    }

    #[test]
    fn test_user_field_from_path() {
        assert_eq!(UserField::from_path("location"), Some(UserField::Location));
        assert_eq!(UserField::from_path("id"), None);
    }
}

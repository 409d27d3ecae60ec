//! 사용자 수정 요청 변환
//!
//! `UpdateUserRequest`를 도메인 사용자와 `UpdateMask`의 쌍으로 분해합니다.
//! `user`가 비어 있으면 기본값(빈 식별자)으로 취급되어 리포지토리에서 식별자 오류가 됩니다.

use prost_types::FieldMask;

use crate::domain::entities::users::{Geolocation, UpdateMask, User};
use crate::proto::user_v1;

impl From<user_v1::User> for User {
    fn from(user: user_v1::User) -> Self {
        User {
            id: user.id,
            name: user.name,
            email: user.email,
            location: user.location.map(Geolocation::from),
        }
    }
}

impl From<FieldMask> for UpdateMask {
    fn from(mask: FieldMask) -> Self {
        UpdateMask::new(mask.paths)
    }
}

/// 수정 대상 사용자와 마스크로 분해된 요청
#[derive(Debug, Clone, PartialEq)]
pub struct UpdateUserCommand {
    pub user: User,
    pub mask: UpdateMask,
}

impl From<user_v1::UpdateUserRequest> for UpdateUserCommand {
    fn from(request: user_v1::UpdateUserRequest) -> Self {
        Self {
            user: request.user.map(User::from).unwrap_or_default(),
            mask: request.update_mask.map(UpdateMask::from).unwrap_or_default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_update_request_splits_user_and_mask() {
        let request = user_v1::UpdateUserRequest {
            user: Some(user_v1::User {
                id: "507f1f77bcf86cd799439011".to_string(),
                name: "John Updated".to_string(),
                email: "john.updated@example.com".to_string(),
                location: None,
            }),
            update_mask: Some(FieldMask {
                paths: vec!["name".to_string(), "email".to_string()],
            }),
        };

        let command = UpdateUserCommand::from(request);

        assert_eq!(command.user.id, "507f1f77bcf86cd799439011");
        assert!(command.mask.contains("name"));
        assert!(command.mask.contains("email"));
        assert!(!command.mask.contains("location"));
    }

    #[test]
    fn test_update_request_without_user_or_mask() {
        let command = UpdateUserCommand::from(user_v1::UpdateUserRequest::default());

        assert!(!command.user.is_persisted());
        assert!(command.mask.is_empty());
    }
}

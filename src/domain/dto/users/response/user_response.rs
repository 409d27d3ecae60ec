//! 사용자 응답 변환
//!
//! 도메인 `User`를 gRPC `User` 메시지로 변환합니다.

use crate::domain::entities::users::{Geolocation, User};
use crate::proto::user_v1;

impl From<Geolocation> for user_v1::Geolocation {
    fn from(location: Geolocation) -> Self {
        Self {
            latitude: location.latitude,
            longitude: location.longitude,
        }
    }
}

impl From<User> for user_v1::User {
    fn from(user: User) -> Self {
        let User {
            id,
            name,
            email,
            location,
        } = user;

        Self {
            id,
            name,
            email,
            location: location.map(user_v1::Geolocation::from),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_to_message() {
        let user = User {
            id: "507f1f77bcf86cd799439011".to_string(),
            name: "John Doe".to_string(),
            email: "john.doe@example.com".to_string(),
            location: Some(Geolocation::new(37.7749, -122.4194)),
        };

        let message = user_v1::User::from(user);

        assert_eq!(message.id, "507f1f77bcf86cd799439011");
        assert_eq!(
            message.location,
            Some(user_v1::Geolocation {
                latitude: 37.7749,
                longitude: -122.4194,
            })
        );
    }
}

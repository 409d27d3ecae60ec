//! 사용자 생성 요청 변환
//!
//! gRPC `CreateUserRequest` 메시지를 도메인 입력(`NewUser`)으로 변환합니다.
//! 생성 요청은 별도의 입력 검증 없이 그대로 저장소로 전달됩니다.

use crate::domain::entities::users::{Geolocation, NewUser};
use crate::proto::user_v1;

impl From<user_v1::Geolocation> for Geolocation {
    fn from(location: user_v1::Geolocation) -> Self {
        Geolocation::new(location.latitude, location.longitude)
    }
}

impl From<user_v1::CreateUserRequest> for NewUser {
    fn from(request: user_v1::CreateUserRequest) -> Self {
        let user_v1::CreateUserRequest {
            name,
            email,
            location,
        } = request;

        NewUser::new(name, email, location.map(Geolocation::from))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_request_with_location() {
        let request = user_v1::CreateUserRequest {
            name: "John Doe".to_string(),
            email: "john.doe@example.com".to_string(),
            location: Some(user_v1::Geolocation {
                latitude: 37.7749,
                longitude: -122.4194,
            }),
        };

        let new_user = NewUser::from(request);

        assert_eq!(new_user.name, "John Doe");
        assert_eq!(new_user.location, Some(Geolocation::new(37.7749, -122.4194)));
    }

    #[test]
    fn test_create_request_without_location() {
        let request = user_v1::CreateUserRequest {
            name: "Jane Roe".to_string(),
            email: "jane@example.com".to_string(),
            location: None,
        };

        assert_eq!(NewUser::from(request).location, None);
    }
}

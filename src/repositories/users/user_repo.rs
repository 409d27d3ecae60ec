//! # 사용자 리포지토리 추상화
//!
//! 사용자 데이터 액세스 계층의 계약을 정의합니다.
//! 서비스 계층은 `Arc<dyn UserRepository>`만 알고 있으므로
//! 저장소 엔진을 교체해도 서비스와 gRPC 핸들러는 변경되지 않습니다.
//!
//! ## 구현체
//!
//! | 구현체 | 저장소 | 용도 |
//! |--------|--------|------|
//! | [`MongoUserRepository`](super::mongo_user_repo::MongoUserRepository) | MongoDB `users` 컬렉션 | 운영 |
//! | [`InMemoryUserRepository`](super::memory_user_repo::InMemoryUserRepository) | 프로세스 메모리 | 로컬 실행, 테스트 |
//!
//! ## 에러 처리
//!
//! 레코드 부재는 에러가 아니라 `Ok(None)`으로 표현합니다.
//! 에러는 다음 두 경우에만 발생합니다.
//!
//! - **InvalidIdentifier**: ObjectId 형식이 아닌 식별자
//! - **DatabaseError**: 저장소 연결/쿼리 실패

use async_trait::async_trait;
use mongodb::bson::oid::ObjectId;

use crate::core::errors::{AppError, AppResult};
use crate::domain::entities::users::{NewUser, UpdateMask, User};

/// 사용자 데이터 액세스 계약
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// 구현체 이름 (로그 출력용)
    fn name(&self) -> &str;

    /// 새 사용자를 저장하고 식별자가 할당된 레코드를 반환합니다.
    async fn create(&self, new_user: NewUser) -> AppResult<User>;

    /// 식별자로 사용자를 조회합니다.
    ///
    /// * `Ok(Some(User))` - 사용자를 찾은 경우
    /// * `Ok(None)` - 해당 ID의 사용자가 없는 경우
    /// * `Err(AppError::InvalidIdentifier)` - 잘못된 ObjectId 형식
    async fn find_by_id(&self, id: &str) -> AppResult<Option<User>>;

    /// `mask`에 명시된 필드만 `user`에서 가져와 `user.id` 레코드에 적용합니다.
    ///
    /// 수정 후 레코드를 반환하며, 대상이 없으면 `Ok(None)`입니다.
    /// 마스크와 후보 필드의 교집합이 비어 있으면 쓰기 없이 현재 레코드를 반환합니다.
    async fn update(&self, user: User, mask: &UpdateMask) -> AppResult<Option<User>>;

    /// 사용자를 영구 삭제합니다. 존재하지 않는 ID의 삭제도 성공으로 처리합니다.
    async fn delete(&self, id: &str) -> AppResult<()>;
}

/// 사용자 식별자 문자열을 ObjectId로 파싱합니다.
pub fn parse_user_id(id: &str) -> AppResult<ObjectId> {
    ObjectId::parse_str(id)
        .map_err(|_| AppError::InvalidIdentifier(format!("유효하지 않은 ID 형식입니다: '{}'", id)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_valid_object_id() {
        let id = parse_user_id("507f1f77bcf86cd799439011").unwrap();
        assert_eq!(id.to_hex(), "507f1f77bcf86cd799439011");
    }

    #[test]
    fn test_parse_invalid_object_id() {
        assert!(matches!(parse_user_id(""), Err(AppError::InvalidIdentifier(_))));
        assert!(matches!(parse_user_id("not-an-id"), Err(AppError::InvalidIdentifier(_))));
    }
}

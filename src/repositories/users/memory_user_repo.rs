//! # 인메모리 사용자 리포지토리
//!
//! MongoDB 없이 동작하는 [`UserRepository`] 구현체입니다.
//! 로컬 실행(`STORE_BACKEND=memory`)과 테스트에서 사용합니다.
//!
//! 식별자는 MongoDB와 동일하게 ObjectId 16진수 문자열을 할당하므로
//! 식별자 형식 검증 동작도 MongoDB 구현체와 같습니다.
//! 단일 `RwLock`이 문서 단위 원자성을 대신합니다.

use std::collections::HashMap;

use async_trait::async_trait;
use mongodb::bson::oid::ObjectId;
use tokio::sync::RwLock;

use super::user_repo::{parse_user_id, UserRepository};
use crate::core::errors::AppResult;
use crate::domain::entities::users::{NewUser, UpdateMask, User, UserPatch};

#[derive(Default)]
pub struct InMemoryUserRepository {
    users: RwLock<HashMap<ObjectId, User>>,
}

impl InMemoryUserRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// 저장된 사용자 수
    pub async fn len(&self) -> usize {
        self.users.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.users.read().await.is_empty()
    }
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    fn name(&self) -> &str {
        "memory"
    }

    async fn create(&self, new_user: NewUser) -> AppResult<User> {
        let object_id = ObjectId::new();
        let user = new_user.into_user(object_id.to_hex());

        self.users.write().await.insert(object_id, user.clone());

        Ok(user)
    }

    async fn find_by_id(&self, id: &str) -> AppResult<Option<User>> {
        let object_id = parse_user_id(id)?;

        Ok(self.users.read().await.get(&object_id).cloned())
    }

    async fn update(&self, user: User, mask: &UpdateMask) -> AppResult<Option<User>> {
        let object_id = parse_user_id(&user.id)?;
        let patch = UserPatch::from_masked(&user, mask);

        let mut users = self.users.write().await;
        let Some(stored) = users.get_mut(&object_id) else {
            return Ok(None);
        };

        patch.apply_to(stored);
        Ok(Some(stored.clone()))
    }

    async fn delete(&self, id: &str) -> AppResult<()> {
        let object_id = parse_user_id(id)?;

        self.users.write().await.remove(&object_id);

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::errors::AppError;
    use crate::domain::entities::users::Geolocation;

    fn john() -> NewUser {
        NewUser::new(
            "John Doe",
            "john.doe@example.com",
            Some(Geolocation::new(37.7749, -122.4194)),
        )
    }

    #[tokio::test]
    async fn test_create_then_get_returns_same_record() {
        let repo = InMemoryUserRepository::new();

        let created = repo.create(john()).await.unwrap();
        let found = repo.find_by_id(&created.id).await.unwrap();

        assert!(!created.id.is_empty());
        assert_eq!(found, Some(created));
    }

    #[tokio::test]
    async fn test_create_assigns_unique_ids() {
        let repo = InMemoryUserRepository::new();

        let first = repo.create(john()).await.unwrap();
        let second = repo.create(john()).await.unwrap();

        assert_ne!(first.id, second.id);
        assert_eq!(repo.len().await, 2);
    }

    #[tokio::test]
    async fn test_update_with_name_email_mask_keeps_location() {
        let repo = InMemoryUserRepository::new();
        let created = repo.create(john()).await.unwrap();

        let incoming = User {
            id: created.id.clone(),
            name: "John Updated".to_string(),
            email: "john.updated@example.com".to_string(),
            location: Some(Geolocation::new(0.0, 0.0)),
        };
        let updated = repo
            .update(incoming, &UpdateMask::new(["name", "email"]))
            .await
            .unwrap()
            .unwrap();

        assert_eq!(updated.name, "John Updated");
        assert_eq!(updated.email, "john.updated@example.com");
        assert_eq!(updated.location, Some(Geolocation::new(37.7749, -122.4194)));
    }

    #[tokio::test]
    async fn test_update_missing_user_leaves_store_unchanged() {
        let repo = InMemoryUserRepository::new();
        let created = repo.create(john()).await.unwrap();

        let incoming = User {
            id: ObjectId::new().to_hex(),
            name: "Ghost".to_string(),
            ..User::default()
        };
        let result = repo.update(incoming, &UpdateMask::new(["name"])).await.unwrap();

        assert_eq!(result, None);
        assert_eq!(repo.len().await, 1);
        assert_eq!(repo.find_by_id(&created.id).await.unwrap(), Some(created));
    }

    #[tokio::test]
    async fn test_delete_is_idempotent() {
        let repo = InMemoryUserRepository::new();
        let created = repo.create(john()).await.unwrap();

        repo.delete(&created.id).await.unwrap();
        repo.delete(&created.id).await.unwrap();

        assert_eq!(repo.find_by_id(&created.id).await.unwrap(), None);
        assert!(repo.is_empty().await);
    }

    #[tokio::test]
    async fn test_malformed_id_is_rejected() {
        let repo = InMemoryUserRepository::new();

        let result = repo.find_by_id("12345").await;

        assert!(matches!(result, Err(AppError::InvalidIdentifier(_))));
    }
}

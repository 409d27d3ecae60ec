//! # MongoDB 사용자 리포지토리
//!
//! [`UserRepository`]의 MongoDB 구현체입니다.
//!
//! ## 특징
//!
//! - **문서 매핑**: [`UserDocument`]를 통한 도메인 ↔ BSON 변환
//! - **부분 업데이트**: 필드 마스크 교집합 결과만 `$set`/`$unset`으로 기록
//! - **원자적 수정**: `find_one_and_update`로 수정과 재조회를 단일 문서 연산으로 처리
//! - **멱등 삭제**: 삭제 대상이 없어도 성공

use std::sync::Arc;

use async_trait::async_trait;
use log::debug;
use mongodb::{
    bson::doc,
    options::{FindOneAndUpdateOptions, ReturnDocument},
    Collection,
};

use super::user_document::{update_document, UserDocument};
use super::user_repo::{parse_user_id, UserRepository};
use crate::core::errors::{AppError, AppResult};
use crate::db::Database;
use crate::domain::entities::users::{NewUser, UpdateMask, User, UserPatch};

/// 사용자 데이터 액세스 리포지토리 (MongoDB)
///
/// ## 저장 구조
///
/// - **컬렉션명**: 기본값 `users` (`USERS_COLLECTION`으로 변경 가능)
/// - **식별자**: MongoDB가 할당하는 `_id` ObjectId, 도메인에서는 16진수 문자열
///
/// ## 사용 예제
///
/// ```rust,ignore
/// let database = Arc::new(Database::new().await?);
/// let repo = MongoUserRepository::new(database, "users");
///
/// let created = repo.create(NewUser::new("John Doe", "john.doe@example.com", None)).await?;
/// let found = repo.find_by_id(&created.id).await?;
/// ```
pub struct MongoUserRepository {
    /// MongoDB 데이터베이스 연결
    db: Arc<Database>,
    /// 사용자 컬렉션 이름
    collection_name: String,
}

impl MongoUserRepository {
    pub fn new(db: Arc<Database>, collection_name: impl Into<String>) -> Self {
        Self {
            db,
            collection_name: collection_name.into(),
        }
    }

    fn collection(&self) -> Collection<UserDocument> {
        self.db.get_database().collection::<UserDocument>(&self.collection_name)
    }
}

#[async_trait]
impl UserRepository for MongoUserRepository {
    fn name(&self) -> &str {
        "mongodb"
    }

    async fn create(&self, new_user: NewUser) -> AppResult<User> {
        let document = UserDocument::from(&new_user);

        let result = self.collection()
            .insert_one(&document)
            .await?;

        let object_id = result.inserted_id
            .as_object_id()
            .ok_or_else(|| AppError::InternalError("삽입된 _id가 ObjectId가 아닙니다".to_string()))?;

        debug!("사용자 문서 생성: {}", object_id);

        Ok(new_user.into_user(object_id.to_hex()))
    }

    async fn find_by_id(&self, id: &str) -> AppResult<Option<User>> {
        let object_id = parse_user_id(id)?;

        let document = self.collection()
            .find_one(doc! { "_id": object_id })
            .await?;

        Ok(document.map(User::from))
    }

    async fn update(&self, user: User, mask: &UpdateMask) -> AppResult<Option<User>> {
        let object_id = parse_user_id(&user.id)?;

        let patch = UserPatch::from_masked(&user, mask);
        let Some(update) = update_document(&patch) else {
            debug!("적용할 필드가 없어 조회로 대체: {}", user.id);
            return self.find_by_id(&user.id).await;
        };

        let options = FindOneAndUpdateOptions::builder()
            .return_document(ReturnDocument::After)
            .build();

        let updated = self.collection()
            .find_one_and_update(doc! { "_id": object_id }, update)
            .with_options(options)
            .await?;

        debug!("사용자 문서 수정: {} fields={:?} found={}", user.id, patch.fields(), updated.is_some());

        Ok(updated.map(User::from))
    }

    async fn delete(&self, id: &str) -> AppResult<()> {
        let object_id = parse_user_id(id)?;

        let result = self.collection()
            .delete_one(doc! { "_id": object_id })
            .await?;

        debug!("사용자 문서 삭제: {} deleted_count={}", id, result.deleted_count);

        Ok(())
    }
}

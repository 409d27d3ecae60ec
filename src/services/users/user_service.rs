//! # 사용자 관리 서비스 구현
//!
//! 사용자 생명주기(생성, 조회, 부분 수정, 삭제)를 담당하는 비즈니스 계층입니다.
//! 요청마다 리포지토리를 한 번 호출하고 결과를 매핑하는 무상태 서비스이며,
//! 재시도나 백오프 없이 저장소 오류를 그대로 전파합니다.
//!
//! ## 서비스 아키텍처
//!
//! ```text
//! ┌──────────────────────────────────────────┐
//! │               UserService                │
//! │  • create_user  → 항상 생성된 레코드 반환   │
//! │  • get_user     → 부재 시 NotFound         │
//! │  • update_user  → 부재 시 NotFound         │
//! │  • delete_user  → 항상 성공 (멱등)          │
//! └──────────────────────────────────────────┘
//!                     │
//!                     ▼
//! ┌──────────────────────────────────────────┐
//! │        Arc<dyn UserRepository>           │
//! │  MongoUserRepository | InMemory...       │
//! └──────────────────────────────────────────┘
//! ```

use std::sync::Arc;
use std::time::Instant;

use log::{debug, info, warn};

use crate::{
    core::errors::{AppError, AppResult},
    domain::entities::users::{NewUser, UpdateMask, User},
    repositories::users::UserRepository,
};

/// 사용자를 찾지 못했을 때 클라이언트에 전달되는 메시지
pub const USER_NOT_FOUND: &str = "User not found";

pub struct UserService {
    user_repo: Arc<dyn UserRepository>,
}

impl UserService {
    pub fn new(user_repo: Arc<dyn UserRepository>) -> Self {
        info!("🔧 UserService 초기화: repository={}", user_repo.name());
        Self { user_repo }
    }

    pub async fn create_user(&self, new_user: NewUser) -> AppResult<User> {
        let start_time = Instant::now();

        let created = self.user_repo.create(new_user).await?;

        debug!("User creation took: {:?} (id={})", start_time.elapsed(), created.id);

        Ok(created)
    }

    pub async fn get_user(&self, id: &str) -> AppResult<User> {
        self.user_repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| not_found(id))
    }

    /// 마스크에 포함된 필드만 수정합니다. 식별자는 `user.id`에서 가져옵니다.
    pub async fn update_user(&self, user: User, mask: &UpdateMask) -> AppResult<User> {
        let id = user.id.clone();

        debug!("사용자 수정 요청: id={} paths={:?}", id, mask.paths().collect::<Vec<_>>());

        self.user_repo
            .update(user, mask)
            .await?
            .ok_or_else(|| not_found(&id))
    }

    /// 존재 여부와 관계없이 성공합니다.
    pub async fn delete_user(&self, id: &str) -> AppResult<()> {
        self.user_repo.delete(id).await
    }
}

fn not_found(id: &str) -> AppError {
    warn!("⚠️ 사용자를 찾을 수 없음: {}", id);
    AppError::NotFound(USER_NOT_FOUND.to_string())
}

//! # Application Error Handling System
//!
//! 사용자 서비스 전체에서 공유하는 통합 에러 타입입니다.
//! 리포지토리 → 서비스 → gRPC 핸들러로 `AppError`가 그대로 전파되고,
//! 핸들러 경계에서 `tonic::Status`로 한 번만 변환됩니다.
//!
//! ## 에러 분류
//!
//! | 변형 | 발생 위치 | gRPC 상태 코드 |
//! |------|-----------|----------------|
//! | `NotFound` | 조회/수정 대상 없음 | `NOT_FOUND` |
//! | `InvalidIdentifier` | 잘못된 ObjectId 형식 | `INTERNAL` |
//! | `DatabaseError` | MongoDB 연결/쿼리 실패 | `INTERNAL` |
//! | `Unimplemented` | 미지원 연산 | `UNIMPLEMENTED` |
//! | `InternalError` | 기타 내부 오류 | `INTERNAL` |
//!
//! `NotFound`만 사람이 읽을 수 있는 메시지와 함께 클라이언트에 노출됩니다.
//! 나머지 내부 오류는 로그에만 상세 내용을 남기고, 응답에는 일반 메시지만 담습니다.
//!
//! ## 사용 패턴
//!
//! ```rust,ignore
//! use crate::core::errors::{AppError, AppResult};
//!
//! async fn get_user(&self, id: &str) -> AppResult<User> {
//!     self.user_repo
//!         .find_by_id(id)
//!         .await?
//!         .ok_or_else(|| AppError::NotFound("User not found".to_string()))
//! }
//! ```

use thiserror::Error;
use tonic::Status;

/// 애플리케이션 전역 에러 타입
#[derive(Error, Debug)]
pub enum AppError {
    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("Invalid identifier: {0}")]
    InvalidIdentifier(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Unimplemented: {0}")]
    Unimplemented(String),

    #[error("Internal server error: {0}")]
    InternalError(String),
}

impl From<mongodb::error::Error> for AppError {
    fn from(error: mongodb::error::Error) -> Self {
        AppError::DatabaseError(error.to_string())
    }
}

impl From<AppError> for Status {
    fn from(error: AppError) -> Self {
        match error {
            AppError::NotFound(message) => Status::not_found(message),
            AppError::Unimplemented(message) => Status::unimplemented(message),
            other => {
                log::error!("❌ 요청 처리 실패: {}", other);
                Status::internal("Internal server error")
            }
        }
    }
}

/// 애플리케이션 Result 타입 별칭
pub type AppResult<T> = Result<T, AppError>;

/// 외부 에러에 컨텍스트를 붙여 `AppError::InternalError`로 변환하는 확장 트레이트
pub trait ErrorContext<T> {
    fn context(self, msg: &str) -> AppResult<T>;

    fn with_context<F>(self, f: F) -> AppResult<T>
    where
        F: FnOnce() -> String;
}

impl<T, E> ErrorContext<T> for Result<T, E>
where
    E: std::fmt::Display,
{
    fn context(self, msg: &str) -> AppResult<T> {
        self.map_err(|e| AppError::InternalError(format!("{}: {}", msg, e)))
    }

    fn with_context<F>(self, f: F) -> AppResult<T>
    where
        F: FnOnce() -> String,
    {
        self.map_err(|e| AppError::InternalError(format!("{}: {}", f(), e)))
    }
}

//! 사용자 관리 gRPC 서비스
//!
//! 사용자 생성, 조회, 필드 마스크 기반 부분 수정, 삭제를 제공하는
//! 최소한의 사용자 관리 마이크로서비스입니다.
//!
//! # Features
//!
//! - **gRPC API**: `user.v1.UserService` (CreateUser, GetUser, UpdateUser, DeleteUser)
//! - **서버 리플렉션**: 스키마 없이 도구에서 서비스 탐색 가능
//! - **MongoDB**: 사용자 문서 영구 저장
//! - **교체 가능한 저장소**: `UserRepository` 트레이트 뒤의 MongoDB/인메모리 구현
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────┐
//! │   gRPC Routes   │ ← UserService + Reflection
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │    Handlers     │ ← 메시지 변환, Status 매핑
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │    Services     │ ← NotFound 규칙
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │  Repositories   │ ← 문서 매핑, 필드 마스크 패치
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │     MongoDB     │ ← 저장소
//! └─────────────────┘
//! ```
//!
//! # Examples
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use user_service_grpc::repositories::users::InMemoryUserRepository;
//! use user_service_grpc::routes::configure_all_services;
//! use user_service_grpc::services::users::UserService;
//!
//! let user_service = Arc::new(UserService::new(Arc::new(InMemoryUserRepository::new())));
//! configure_all_services(user_service, 10)?
//!     .serve("0.0.0.0:50051".parse()?)
//!     .await?;
//! ```

pub mod core;
pub mod config;
pub mod db;
pub mod domain;
pub mod proto;
pub mod repositories;
pub mod services;
pub mod utils;
pub mod routes;
pub mod handlers;

//! # Domain Layer Module
//!
//! 도메인 계층을 구성하는 핵심 모듈입니다.
//!
//! ## 아키텍처 개요
//!
//! ```text
//! Domain Layer (이 모듈)
//! ├── Entities  - User, Geolocation, 필드 마스크/부분 업데이트
//! └── DTOs      - gRPC 메시지 ↔ 엔티티 변환
//!      │
//!      ▼
//! Application Layer (Services)
//!      │
//!      ▼
//! Infrastructure Layer (Repositories, DB)
//! ```
//!
//! ## 모듈 구성
//!
//! ### [`entities`] - 핵심 도메인 엔티티
//!
//! 저장소와 무관한 순수 값 타입입니다. 문서 매핑(`_id`, BSON)은
//! 리포지토리 구현체가 소유하므로 엔티티에는 저장소 타입이 등장하지 않습니다.
//!
//! ### [`dto`] - 데이터 전송 객체
//!
//! 생성된 protobuf 메시지와 엔티티 사이의 `From` 구현을 모아 둡니다.
//!
//! ```rust,ignore
//! use crate::domain::entities::users::NewUser;
//! use crate::proto::user_v1;
//!
//! let new_user = NewUser::from(request.into_inner());
//! let created = user_service.create_user(new_user).await?;
//! let message = user_v1::User::from(created);
//! ```

pub mod entities;
pub mod dto;

pub use entities::*;

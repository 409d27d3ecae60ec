//! 도메인 엔티티 모듈
//!
//! 저장소와 전송 계층에 독립적인 핵심 도메인 객체를 정의합니다.

pub mod users;

pub use users::*;

//! 데이터 전송 객체 모듈
//!
//! 전송 계층(gRPC)의 메시지 타입과 도메인 엔티티 간 `From` 변환을 모아 둡니다.

pub mod users;

// 공통 re-exports
pub use users::*;

//! 사용자 DTO 모듈
//!
//! gRPC 메시지와 도메인 엔티티 사이의 변환을 담당합니다.

pub mod request;
pub mod response;

// Re-exports for convenience
pub use request::*;

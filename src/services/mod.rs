//! 비즈니스 로직 계층
//!
//! gRPC 핸들러와 리포지토리 사이에서 도메인 규칙(부재 시 NotFound 등)을 적용합니다.

pub mod users;
